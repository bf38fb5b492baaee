use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files::find_graphql_files;
use crate::graphql_files::normalize_exts;
use crate::output_utils;
use anyhow::Context;
use gqlx::parser::GraphQLParser;
use gqlx::parser::Source;
use std::path::Path;
use std::path::PathBuf;
use tokio::task::JoinSet;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long="exts",
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Print each syntax error on a single line instead of with a \
             source snippet.",
        long,
    )]
    pub(crate) oneline: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}

/// The outcome of parsing one file.
#[derive(Debug)]
pub(crate) struct FileReport {
    pub path: PathBuf,
    pub num_operations: usize,
    pub num_fragments: usize,
    /// Rendered syntax errors, in source order.
    pub errors: Vec<String>,
}

/// Parses the file at `path`, rendering its syntax errors one per line or
/// as detailed snippets.
pub(crate) fn check_file(path: &Path, oneline: bool) -> anyhow::Result<FileReport> {
    let source = Source::from_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let result = GraphQLParser::from_source(&source).parse_executable_document();
    let errors = result
        .errors
        .iter()
        .map(|error| {
            if oneline {
                error.format_oneline()
            } else {
                error.format_detailed(Some(source.body()))
            }
        })
        .collect::<Vec<_>>();
    let (num_operations, num_fragments) = result
        .valid_ast()
        .map(|doc| (doc.operations().count(), doc.fragments().count()))
        .unwrap_or_default();
    log::trace!("Parsed {path:#?}: {} syntax errors.", errors.len());
    Ok(FileReport {
        path: path.to_path_buf(),
        num_operations,
        num_fragments,
        errors,
    })
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let exts = normalize_exts(&self.graphql_file_exts);
        let found = find_graphql_files(&self.file_or_dir_paths, &exts);
        let mut errors = found.errors;

        let mut tasks = JoinSet::new();
        for (index, path) in found.paths.into_iter().enumerate() {
            let oneline = self.oneline;
            tasks.spawn_blocking(move || (index, check_file(&path, oneline)));
        }
        let mut reports = vec![];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(report))) => reports.push((index, report)),
                Ok((_, Err(e))) => errors.push(e),
                Err(e) => errors.push(e.into()),
            }
        }
        reports.sort_by_key(|(index, _)| *index);
        let reports = reports.into_iter().map(|(_, report)| report).collect::<Vec<_>>();

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors reading GraphQL files:\n{}",
                output_utils::RED_X,
                errors.iter()
                    .map(|e| format!("  * {e:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        let num_syntax_errors: usize = reports.iter().map(|report| report.errors.len()).sum();
        if num_syntax_errors > 0 {
            let failing = reports.iter().filter(|report| !report.errors.is_empty());
            let separator = if self.oneline { "\n" } else { "\n\n" };
            let rendered = failing
                .clone()
                .flat_map(|report| report.errors.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(separator);
            return CommandResult::stderr(format_args!(
                "{rendered}\n\n{} Found {num_syntax_errors} syntax errors in {} of {} files.",
                output_utils::RED_X,
                failing.count(),
                reports.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} operations.\n",
                "  * Found {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            reports.len(),
            found.num_skipped,
            reports.iter().map(|report| report.num_operations).sum::<usize>(),
            reports.iter().map(|report| report.num_fragments).sum::<usize>(),
        ))
    }
}
