use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::Location;
use std::path::Path;
use std::path::PathBuf;

/// A parse error with location information and contextual notes.
///
/// Parsing stops at the first error, so a failed parse produces exactly one
/// of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "Expected `:` after field name", "Unterminated string"
    message: String,

    /// Where the error was detected (the offending token's first byte).
    location: Location,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: GraphQLErrorNotes,

    /// The file the source was read from, if any. Only used for rendering.
    file_path: Option<PathBuf>,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        location: Location,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            kind,
            notes: GraphQLErrorNotes::new(),
            file_path: None,
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        location: Location,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            kind,
            notes,
            file_path: None,
        }
    }

    /// Attaches the path of the file the source was read from.
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location where the error was detected.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Adds a general note without a location.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a general note pointing to a related location.
    pub fn add_note_with_location(
        &mut self,
        message: impl Into<String>,
        location: Location,
    ) {
        self.notes
            .push(GraphQLErrorNote::general_with_location(message, location));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: Expected `:` after field name
    ///   --> schema.graphql:5:14
    ///    |
    ///  5 |     userName String
    ///    |              ^
    ///    |
    ///    = help: Did you mean: `userName: String`?
    /// ```
    ///
    /// When `source` is `None` the snippet is omitted but line/column info is
    /// still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        output.push_str(&format!(
            "  --> {}:{}\n",
            self.display_file_name(),
            self.location,
        ));

        if let Some(src) = source
            && let Some(snippet) = format_source_snippet(src, self.location)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind, note.message));

            if let (Some(note_location), Some(src)) = (note.location, source)
                && let Some(snippet) = format_note_snippet(src, note_location)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// schema.graphql:5:14: error: Expected `:` after field name
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}: error: {}",
            self.display_file_name(),
            self.location,
            self.message,
        )
    }

    fn display_file_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }
}

fn source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line - 1)
}

fn format_source_snippet(source: &str, location: Location) -> Option<String> {
    let line_content = source_line(source, location.line)?;
    let line_num_width = location.line.to_string().len().max(2);
    let padding = location.column.saturating_sub(1);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>line_num_width$} | {line_content}\n",
        location.line,
    ));
    output.push_str(&format!(
        "{:>width$} | {:>padding$}^\n",
        "",
        "",
        width = line_num_width,
    ));
    Some(output)
}

fn format_note_snippet(source: &str, location: Location) -> Option<String> {
    let line_content = source_line(source, location.line)?;
    let line_num_width = location.line.to_string().len().max(2);
    let padding = location.column.saturating_sub(1);

    let mut output = String::new();
    output.push_str(&format!(
        "     {:>line_num_width$} | {line_content}\n",
        location.line,
    ));
    output.push_str(&format!(
        "     {:>width$} | {:>padding$}-\n",
        "",
        "",
        width = line_num_width,
    ));
    Some(output)
}
