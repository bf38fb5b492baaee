mod known_fragment_names;
mod lone_anonymous_operation;
mod unique_fragment_names;
mod unique_operation_names;

pub use known_fragment_names::KnownFragmentNames;
pub use lone_anonymous_operation::LoneAnonymousOperation;
pub use unique_fragment_names::UniqueFragmentNames;
pub use unique_operation_names::UniqueOperationNames;
