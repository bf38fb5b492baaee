use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use gqlx::parser::Source;
use gqlx::parser::printer::print_document;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Path to the GraphQL document to print, or `-` to read it from \
             stdin.",
        name="FILE_PATH",
    )]
    pub(crate) file_path: PathBuf,
}

fn read_source(path: &Path) -> anyhow::Result<Source> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read stdin")?;
        Ok(Source::with_name(body, "<stdin>"))
    } else {
        Source::from_file(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Parses `source` and re-prints it in canonical form, or renders its
/// syntax errors.
pub(crate) fn print_source(source: &Source) -> Result<String, String> {
    gqlx::parser::parse_source(source)
        .map(|doc| print_document(&doc))
        .map_err(|errors| {
            errors
                .iter()
                .map(|error| error.format_detailed(Some(source.body())))
                .collect::<Vec<_>>()
                .join("\n")
        })
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match read_source(&self.file_path) {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Printing {} ({} bytes).", source.name(), source.body().len());

        match print_source(&source) {
            Ok(printed) => CommandResult::stdout(format_args!("{printed}")),
            Err(rendered) => CommandResult::stderr(format_args!(
                "{rendered}\n{} {} has syntax errors.",
                output_utils::RED_X,
                source.name(),
            )),
        }
    }
}
