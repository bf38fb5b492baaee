use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<anyhow::Error>,
}

/// Normalizes extensions given as `graphql` or `.graphql` to `graphql`.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Recursively finds the files with one of `exts` at or under each of
/// `input_paths`, in walk order.
///
/// A single file argument is kept even when its extension doesn't match:
/// naming a file explicitly is taken as asking for it.
pub(crate) fn find_graphql_files(input_paths: &[PathBuf], exts: &HashSet<String>) -> GraphQLFiles {
    let mut found = GraphQLFiles::default();
    log::debug!("Scanning {} input paths...", input_paths.len());

    for input_path in input_paths {
        for entry in WalkDir::new(input_path).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {input_path:#?}."
                    );
                    found.errors.push(e.into());
                    continue;
                },
            };

            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            if has_matching_ext(path, exts) {
                log::trace!("Found file at {path:#?}.");
                push_canonical(&mut found, path);
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.paths.is_empty()
        && found.errors.is_empty()
        && let [single_path] = input_paths
        && single_path.is_file()
    {
        log::warn!(
            "Proceeding with {single_path:#?} even though it doesn't match \
            any of the --exts ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        push_canonical(&mut found, single_path);
    }

    log::debug!("Found {} GraphQL files.", found.paths.len());
    found
}

fn has_matching_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| exts.contains(ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}

fn push_canonical(found: &mut GraphQLFiles, path: &Path) {
    match std::fs::canonicalize(path) {
        Ok(path) => found.paths.push(path),
        Err(e) => found
            .errors
            .push(anyhow::Error::new(e).context(format!("failed to resolve {}", path.display()))),
    }
}
