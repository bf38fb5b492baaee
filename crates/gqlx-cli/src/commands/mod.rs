pub(crate) mod check;
pub(crate) mod print;

use crate::Cli;
use crate::CommandResult;
pub(crate) use check::CheckCmd;
pub(crate) use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlx")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report every syntax error found.
    Check(Box<CheckCmd>),

    /// Print a GraphQL document in canonical form.
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
