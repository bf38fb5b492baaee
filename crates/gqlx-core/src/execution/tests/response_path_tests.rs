use crate::PathSegment;
use crate::execution::ResponsePath;

/// Verifies that a path renders from the root down, with list indices as
/// numbers.
#[test]
fn as_list_renders_root_first() {
    let root = ResponsePath::root("friends");
    let item = root.with_index(2);
    let leaf = item.with_key("name");

    assert_eq!(
        leaf.as_list(),
        vec![
            PathSegment::Key("friends".to_string()),
            PathSegment::Index(2),
            PathSegment::Key("name".to_string()),
        ],
    );
    assert_eq!(root.as_list(), vec![PathSegment::from("friends")]);
}

/// Verifies that paths serialize the way responses spell them.
#[test]
fn segments_serialize_untagged() {
    let root = ResponsePath::root("a");
    let item = root.with_index(0);
    assert_eq!(
        serde_json::to_value(item.as_list()).ok(),
        Some(serde_json::json!(["a", 0])),
    );
}
