use crate::types::TypeBuildError;
use crate::types::UnionType;
use pretty_assertions::assert_eq;

/// Verifies that members keep declaration order and that `resolve_type`
/// is optional.
#[test]
fn members_in_order() -> Result<(), TypeBuildError> {
    let search = UnionType::builder("SearchResult")
        .description("Anything a search can find")
        .member("User")
        .member("Post")
        .build()?;
    assert_eq!(search.member_names(), vec!["User", "Post"]);
    assert_eq!(search.description(), Some("Anything a search can find"));
    assert!(!search.has_resolve_type());

    let resolved = UnionType::builder("SearchResult")
        .member("User")
        .resolve_type(|_value, _info| Some("User".to_string()))
        .build()?;
    assert!(resolved.has_resolve_type());
    Ok(())
}

/// Verifies that a member listed twice is rejected.
#[test]
fn duplicate_member() {
    assert_eq!(
        UnionType::builder("SearchResult")
            .member("User")
            .member("User")
            .build()
            .err()
            .map(|e| e.to_string()),
        Some("The `SearchResult` union specifies `User` as a member more than once".to_string()),
    );
}
