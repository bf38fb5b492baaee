mod end_to_end_tests;
pub(crate) mod utils;
