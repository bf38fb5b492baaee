use crate::graphql_files::find_graphql_files;
use crate::graphql_files::normalize_exts;
use crate::tests::test_utils::ScratchDir;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn exts(exts: &[&str]) -> HashSet<String> {
    normalize_exts(&exts.iter().map(|ext| ext.to_string()).collect::<Vec<_>>())
}

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}

/// Verifies that extensions are accepted with or without a leading dot.
#[test]
fn normalizes_extensions() {
    assert_eq!(
        exts(&["graphql", ".gql", " ", ""]),
        HashSet::from(["graphql".to_string(), "gql".to_string()]),
    );
}

/// Verifies that directories are walked recursively in file-name order and
/// that other files are counted as skipped.
#[test]
fn walks_directories_recursively() {
    let dir = ScratchDir::new();
    dir.write("b.graphql", "{ b }");
    dir.write("nested/a.gql", "{ a }");
    dir.write("nested/readme.md", "# hi");
    dir.write("c.txt", "nope");

    let found = find_graphql_files(&[dir.path().to_path_buf()], &exts(&["graphql", "gql"]));
    assert!(found.errors.is_empty());
    assert_eq!(file_names(&found.paths), vec!["b.graphql", "a.gql"]);
    assert_eq!(found.num_skipped, 2);
}

/// Verifies that a single explicitly named file is kept whatever its
/// extension.
#[test]
fn keeps_single_explicit_file() {
    let dir = ScratchDir::new();
    let path = dir.write("query.txt", "{ a }");

    let found = find_graphql_files(&[path], &exts(&["graphql"]));
    assert_eq!(file_names(&found.paths), vec!["query.txt"]);
    assert_eq!(found.num_skipped, 0);
}

/// Verifies that a missing path is reported as an error.
#[test]
fn missing_path_is_an_error() {
    let dir = ScratchDir::new();
    let found = find_graphql_files(&[dir.path().join("missing")], &exts(&["graphql"]));
    assert!(found.paths.is_empty());
    assert_eq!(found.errors.len(), 1);
}
