//! Shared helpers for parser and walker tests.

use crate::GraphQLParseError;
use crate::ast::ExecutableDocument;
use crate::ast::FieldSelection;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeSystemDocument;
use crate::ast::Value;
use crate::lexer::GraphQLLexer;
use crate::token::GraphQLTokenKind;

/// Parses an executable document, panicking with a rendered diagnostic on
/// failure.
pub fn parse_executable(source: &str) -> ExecutableDocument {
    crate::parse_executable_document(source)
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))))
}

/// Parses a type-system document, panicking with a rendered diagnostic on
/// failure.
pub fn parse_schema(source: &str) -> TypeSystemDocument {
    crate::parse_type_system_document(source)
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))))
}

pub fn parse_executable_error(source: &str) -> GraphQLParseError {
    match crate::parse_executable_document(source) {
        Ok(document) => panic!("Expected a parse error, got: {document:?}"),
        Err(err) => err,
    }
}

pub fn parse_schema_error(source: &str) -> GraphQLParseError {
    match crate::parse_type_system_document(source) {
        Ok(document) => panic!("Expected a parse error, got: {document:?}"),
        Err(err) => err,
    }
}

pub fn first_operation(document: &ExecutableDocument) -> &OperationDefinition {
    document
        .operation_definitions
        .first()
        .expect("document has no operations")
}

pub fn first_field(selection_set: &SelectionSet) -> &FieldSelection {
    match selection_set.selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("Expected a field selection, got: {other:?}"),
    }
}

/// Value of the first argument of the first field of the first operation.
pub fn first_arg_value(document: &ExecutableDocument) -> &Value {
    let field = first_field(&first_operation(document).selection_set);
    &field.arguments.first().expect("field has no arguments").value
}

/// Lexes `source` to completion and returns the token kinds, including the
/// trailing `End`.
pub fn lex_kinds(source: &str) -> Vec<GraphQLTokenKind> {
    GraphQLLexer::new(source)
        .map(|token| token.map(|token| token.kind))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))))
}
