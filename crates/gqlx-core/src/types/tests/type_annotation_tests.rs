use crate::types::TypeAnnotation;
use crate::types::TypeBuildError;
use pretty_assertions::assert_eq;

type Result<T> = std::result::Result<T, TypeBuildError>;

/// Verifies that annotations print in GraphQL syntax.
#[test]
fn display() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("Int").non_null()).non_null();
    assert_eq!(annot.to_string(), "[Int!]!");
    assert_eq!(annot.to_nullable().to_string(), "[Int!]");
    assert_eq!(annot.innermost_type_name(), "Int");
}

/// Verifies that parsing accepts GraphQL spellings and round-trips through
/// `Display`.
#[test]
fn from_str() -> Result<()> {
    for source in ["Int", "Int!", "[Int]", "[[Point!]]!", "[ID!]!"] {
        let annot: TypeAnnotation = source.parse()?;
        assert_eq!(annot.to_string(), source);
    }
    let annot: TypeAnnotation = " [ String ] ".parse()?;
    assert_eq!(annot, TypeAnnotation::list(TypeAnnotation::named("String")));
    Ok(())
}

/// Verifies that malformed spellings are rejected, including doubled
/// non-null markers.
#[test]
fn from_str_rejects_malformed() {
    for source in ["", "Int!!", "[Int", "Int]", "1Int", "[]", "In t"] {
        assert_eq!(
            source.parse::<TypeAnnotation>(),
            Err(TypeBuildError::InvalidTypeAnnotation {
                annotation: source.to_string(),
            }),
            "{source:?} should not parse",
        );
    }
}

/// Verifies that `non_null()` is idempotent: non-null never wraps
/// non-null.
#[test]
fn non_null_is_idempotent() {
    let once = TypeAnnotation::named("Int").non_null();
    assert_eq!(once.clone().non_null(), once);
    assert!(!once.nullable());
    assert!(once.to_nullable().nullable());
}

/// Verifies conversion from parsed type references.
#[test]
fn from_ast_type() {
    let document = crate::tests::utils::parse("query ($v: [Int!]) { a }");
    let operation = document.operations().next().expect("one operation");
    let annot = TypeAnnotation::from_ast_type(&operation.variable_definitions[0].ty);
    assert_eq!(annot.to_string(), "[Int!]");
    assert!(annot.as_list_annotation().is_some());
    assert!(annot.as_named_annotation().is_none());
}
