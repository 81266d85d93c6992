//! Locating GraphQL files on disk and parsing them.

use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use tanka_graphql_language::GraphQLParseError;
use tanka_graphql_language::ast::ExecutableDocument;
use tanka_graphql_language::ast::NodeRef;
use tanka_graphql_language::ast::TypeSystemDocument;
use tanka_graphql_language::keywords;
use tanka_graphql_language::lexer::GraphQLLexer;
use tanka_graphql_language::parse_executable_document;
use tanka_graphql_language::parse_type_system_document;
use tanka_graphql_language::token::GraphQLTokenKind;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct InputArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        default_value="auto",
        help="Grammar to parse each file with.",
        long,
        value_enum,
    )]
    pub(crate) kind: DocumentKind,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}

/// Which grammar to parse a file with.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum DocumentKind {
    /// Pick per file: `.graphqls` files and files that do not open with an
    /// operation or fragment are type-system documents.
    #[default]
    Auto,
    Executable,
    TypeSystem,
}

impl DocumentKind {
    /// Resolves `Auto` for one file.
    pub(crate) fn resolve(self, path: &Path, source: &str) -> DocumentKind {
        if self != DocumentKind::Auto {
            return self;
        }
        if path.extension().is_some_and(|ext| ext == "graphqls") {
            return DocumentKind::TypeSystem;
        }
        match GraphQLLexer::new(source).next_token() {
            Ok(token)
                if token.kind == GraphQLTokenKind::CurlyBraceOpen
                    || token.is_keyword(keywords::QUERY)
                    || token.is_keyword(keywords::MUTATION)
                    || token.is_keyword(keywords::SUBSCRIPTION)
                    || token.is_keyword(keywords::FRAGMENT) =>
            {
                DocumentKind::Executable
            },
            _ => DocumentKind::TypeSystem,
        }
    }
}

#[derive(Debug)]
pub(crate) enum ParsedDocument {
    Executable(ExecutableDocument),
    TypeSystem(TypeSystemDocument),
}

impl ParsedDocument {
    pub(crate) fn kind(&self) -> DocumentKind {
        match self {
            Self::Executable(_) => DocumentKind::Executable,
            Self::TypeSystem(_) => DocumentKind::TypeSystem,
        }
    }

    pub(crate) fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Self::Executable(document) => document.into(),
            Self::TypeSystem(document) => document.into(),
        }
    }
}

/// The outcome of scanning the paths given on the command line.
#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<walkdir::Error>,
}

/// Recursively collects files under `roots` whose extension is one of
/// `file_exts` (with or without the leading dot).
///
/// A single file path given on its own is always kept, whatever its
/// extension.
pub(crate) fn find_graphql_files(roots: &[PathBuf], file_exts: &[String]) -> GraphQLFiles {
    let file_exts: HashSet<&str> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", roots.len());
    let mut found = GraphQLFiles::default();
    for root in roots {
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {root:#?}."
                    );
                    found.errors.push(err);
                    continue
                },
            };

            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue
            }
            let matches_ext = path.extension()
                .map(|ext| ext.to_string_lossy())
                .is_some_and(|ext| file_exts.contains(&*ext));
            if matches_ext {
                log::trace!("Found GraphQL file at {path:#?}.");
                found.paths.push(path.to_path_buf());
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.paths.is_empty()
        && let [only_path] = roots
        && only_path.is_file() {
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any \
            of the --graphql-file-exts ({}).",
            crate::output_utils::quoted_list(file_exts.iter().copied()),
        );
        found.num_skipped = 0;
        found.paths.push(only_path.clone());
    }

    log::debug!("Found {} GraphQL files.", found.paths.len());
    found
}

/// Why a file could not be turned into a document.
#[derive(Debug)]
pub(crate) enum FileError {
    Io(anyhow::Error),
    Parse {
        error: Box<GraphQLParseError>,
        source: String,
    },
}

impl FileError {
    /// A multi-line report; parse errors include the offending source line.
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Io(err) => format!("error: {err:#}\n"),
            Self::Parse { error, source } => error.format_detailed(Some(source)),
        }
    }
}

pub(crate) async fn parse_file(
    path: &Path,
    kind: DocumentKind,
) -> Result<ParsedDocument, FileError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
        .map_err(FileError::Io)?;

    let kind = kind.resolve(path, &source);
    log::debug!("Parsing {path:#?} as {kind:?}.");
    let parsed = match kind {
        DocumentKind::Executable => {
            parse_executable_document(&source).map(ParsedDocument::Executable)
        },
        DocumentKind::TypeSystem | DocumentKind::Auto => {
            parse_type_system_document(&source).map(ParsedDocument::TypeSystem)
        },
    };
    parsed.map_err(|error| FileError::Parse {
        error: Box::new(error.with_file_path(path)),
        source,
    })
}
