mod parse;
mod stats;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use parse::ParseCmd;
use stats::StatsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report every syntax error.
    Parse(Box<ParseCmd>),

    /// Parse GraphQL files and count the AST nodes they contain.
    Stats(Box<StatsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Stats(cmd) => cmd.run(cli).await,
        }
    }
}
