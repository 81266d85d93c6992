use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::graphql_files::InputArgs;
use crate::output_utils;
use std::collections::BTreeMap;
use std::convert::Infallible;
use tanka_graphql_language::ast::NodeKind;
use tanka_graphql_language::ast::NodeRef;
use tanka_graphql_language::walker::DocumentVisitor;
use tanka_graphql_language::walker::DocumentWalker;
use tanka_graphql_language::walker::WalkState;

#[derive(Debug, clap::Args)]
pub(crate) struct StatsCmd {
    #[command(flatten)]
    input: InputArgs,
}

/// Tallies entered nodes by kind and remembers the deepest nesting seen.
#[derive(Debug, Default)]
struct NodeCounter {
    counts: BTreeMap<NodeKind, usize>,
    max_depth: usize,
}

impl<'doc> DocumentVisitor<'doc, WalkState<'doc>, Infallible> for NodeCounter {
    fn enter_node(
        &mut self,
        context: &mut WalkState<'doc>,
        node: NodeRef<'doc>,
    ) -> Result<(), Infallible> {
        *self.counts.entry(node.kind()).or_default() += 1;
        self.max_depth = self.max_depth.max(context.depth());
        Ok(())
    }
}

#[inherent::inherent]
impl RunnableCommand for StatsCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let files = graphql_files::find_graphql_files(
            &self.input.file_or_dir_paths,
            &self.input.graphql_file_exts,
        );

        let mut report = String::new();
        for err in &files.errors {
            report.push_str(&format!("error: {err}\n"));
        }

        let mut counter = NodeCounter::default();
        let mut num_failed = files.errors.len();
        for path in &files.paths {
            let document = match graphql_files::parse_file(path, self.input.kind).await {
                Ok(document) => document,
                Err(err) => {
                    num_failed += 1;
                    report.push_str(&err.render());
                    report.push('\n');
                    continue
                },
            };

            let mut state = WalkState::new();
            let walked = DocumentWalker::<_, Infallible>::new(Vec::new(), &mut state)
                .with_visitor(&mut counter)
                .visit(Some(document.as_node_ref()));
            if let Err(never) = walked {
                match never {}
            }
        }

        if num_failed > 0 {
            return CommandResult::stderr(format_args!(
                "{report}{} {num_failed} of {} files failed to parse.",
                output_utils::RED_X,
                files.paths.len(),
            ));
        }

        let total: usize = counter.counts.values().sum();
        let mut lines = String::new();
        for (kind, count) in &counter.counts {
            lines.push_str(&format!("\n  * {kind}: {count}"));
        }
        CommandResult::stdout(format_args!(
            "{} Walked {total} nodes in {} files (max depth {}):{lines}",
            output_utils::GREEN_CHECK,
            files.paths.len(),
            counter.max_depth,
        ))
    }
}
