use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::graphql_files::DocumentKind;
use crate::graphql_files::InputArgs;
use crate::output_utils;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[command(flatten)]
    input: InputArgs,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let files = graphql_files::find_graphql_files(
            &self.input.file_or_dir_paths,
            &self.input.graphql_file_exts,
        );

        let mut report = String::new();
        let mut num_failed = files.errors.len();
        for err in &files.errors {
            report.push_str(&format!("error: {err}\n"));
        }

        let mut num_executable = 0;
        let mut num_type_system = 0;
        for path in &files.paths {
            match graphql_files::parse_file(path, self.input.kind).await {
                Ok(document) => match document.kind() {
                    DocumentKind::Executable => num_executable += 1,
                    _ => num_type_system += 1,
                },
                Err(err) => {
                    log::debug!("Failed to parse {path:#?}.");
                    num_failed += 1;
                    report.push_str(&err.render());
                    report.push('\n');
                },
            }
        }

        if num_failed > 0 {
            return CommandResult::stderr(format_args!(
                "{report}{} {num_failed} of {} files failed to parse.",
                output_utils::RED_X,
                files.paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Parsed {} executable documents.\n",
                "  * Parsed {} type-system documents.\n",
                "  * Skipped {} non-graphql files.",
            ),
            output_utils::GREEN_CHECK,
            num_executable,
            num_type_system,
            files.num_skipped,
        ))
    }
}
