use crate::types::Field;
use crate::types::FieldsThunk;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::TypeBuildError;
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, TypeBuildError>;

fn string_field() -> Field {
    Field::new(TypeAnnotation::named("String"))
}

/// Verifies that fields and interfaces keep declaration order.
#[test]
fn fields_and_interfaces_in_order() -> Result<()> {
    let user = ObjectType::builder("User")
        .description("A person")
        .field("name", string_field())
        .field("id", Field::new(TypeAnnotation::named("ID").non_null()))
        .implements("Node")
        .implements("Named")
        .build()?;
    assert_eq!(user.name(), "User");
    assert_eq!(user.description(), Some("A person"));
    assert_eq!(user.fields().keys().collect::<Vec<_>>(), vec!["name", "id"]);
    assert_eq!(user.interface_names(), vec!["Node", "Named"]);
    assert!(user.implements("Node"));
    assert!(!user.implements("Entity"));
    assert!(!user.has_is_type_of());
    Ok(())
}

/// Verifies that duplicated fields and interface declarations are
/// rejected.
#[test]
fn duplicates_are_rejected() {
    let result = ObjectType::builder("User")
        .field("name", string_field())
        .field("name", string_field())
        .build();
    assert_eq!(
        result.err(),
        Some(TypeBuildError::DuplicateFieldNameDefinition {
            type_name: "User".to_string(),
            field_name: "name".to_string(),
        }),
    );

    let result = InterfaceType::builder("Node")
        .field("id", string_field())
        .implements("Entity")
        .implements("Entity")
        .build();
    assert_eq!(
        result.err(),
        Some(TypeBuildError::DuplicateInterfaceImplementsDeclaration {
            duplicated_interface_name: "Entity".to_string(),
            type_name: "Node".to_string(),
        }),
    );
}

/// Verifies that names must match the GraphQL name grammar.
#[test]
fn invalid_names() {
    assert_eq!(
        ObjectType::builder("9Lives").field("a", string_field()).build().err(),
        Some(TypeBuildError::InvalidNameStart {
            name: "9Lives".to_string(),
        }),
    );
    assert_eq!(
        ObjectType::builder("").build().err(),
        Some(TypeBuildError::EmptyName),
    );
    assert_eq!(
        ObjectType::builder("User").field("first name", string_field()).build().err(),
        Some(TypeBuildError::InvalidNameCharacter {
            name: "first name".to_string(),
        }),
    );
}

/// Verifies that a fields thunk runs once, on first use, and that its
/// fields follow eagerly declared ones.
#[test]
fn fields_thunk_is_lazy() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let thunk_calls = Arc::clone(&calls);
    let user = ObjectType::builder("User")
        .field("id", string_field())
        .fields_thunk(move || {
            thunk_calls.fetch_add(1, Ordering::SeqCst);
            IndexMap::from([
                ("friends".to_string(), Field::new(TypeAnnotation::list(TypeAnnotation::named("User")))),
                ("id".to_string(), Field::new(TypeAnnotation::named("Int"))),
            ])
        })
        .build()?;
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(user.fields().keys().collect::<Vec<_>>(), vec!["id", "friends"]);
    assert_eq!(
        user.field("id").map(|f| f.type_annotation().to_string()),
        Some("String".to_string()),
    );
    let _ = user.fields();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

/// Verifies that ready fields are available without forcing, while a lazy
/// thunk stays unforced until read.
#[test]
fn ready_and_lazy_fields_thunks() {
    let ready = FieldsThunk::ready(IndexMap::from([("id".to_string(), string_field())]));
    assert!(ready.is_forced());
    assert_eq!(ready.get().keys().collect::<Vec<_>>(), vec!["id"]);

    let lazy = FieldsThunk::<Field>::lazy(|| IndexMap::from([("name".to_string(), string_field())]));
    assert!(!lazy.is_forced());
    assert_eq!(lazy.get().keys().collect::<Vec<_>>(), vec!["name"]);
    assert!(lazy.is_forced());

    assert!(FieldsThunk::<Field>::default().get().is_empty());
}

/// Verifies field arguments, descriptions and deprecation.
#[test]
fn field_details() {
    let field = string_field()
        .with_argument("first", InputValue::new(TypeAnnotation::named("Int")).with_default_value(10))
        .with_argument("after", InputValue::new(TypeAnnotation::named("String")))
        .with_description("Pages of names")
        .with_deprecation_reason("Use `people`");
    assert_eq!(field.arguments().keys().collect::<Vec<_>>(), vec!["first", "after"]);
    assert_eq!(
        field.argument("first").and_then(InputValue::default_value),
        Some(&crate::Value::Int(10)),
    );
    assert!(!field.argument("first").is_some_and(InputValue::is_required));
    assert_eq!(field.description(), Some("Pages of names"));
    assert_eq!(field.deprecation_state().reason(), Some("Use `people`"));
    assert!(field.resolver().is_none());
}
