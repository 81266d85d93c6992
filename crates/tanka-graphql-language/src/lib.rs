//! A GraphQL language toolchain: a zero-copy byte lexer, a recursive-descent
//! parser for executable and type-system documents, and a generic document
//! walker over the resulting AST.
//!
//! ```
//! use tanka_graphql_language::parse_executable_document;
//!
//! let document = parse_executable_document("{ hello }").unwrap();
//! assert_eq!(document.operation_definitions.len(), 1);
//! ```
//!
//! Type-system documents may start with a block string carrying
//! `tanka_import` statements, which the parser turns into
//! [`ast::Import`] nodes:
//!
//! ```
//! use tanka_graphql_language::parse_type_system_document;
//!
//! let document = parse_type_system_document(
//!     r#"
//!     """
//!     tanka_import Foo from "./types"
//!     """
//!     type Query { foo: Foo }
//!     "#,
//! ).unwrap();
//! assert_eq!(document.imports.len(), 1);
//! assert_eq!(document.type_definitions.len(), 1);
//! ```

pub mod ast;
mod byte_span_reader;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_lex_error_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_parser_options;
mod graphql_string_parsing_error;
pub mod keywords;
pub mod lexer;
mod location;
mod reserved_name_context;
pub mod string_value;
pub mod token;
mod value_parsing_error;
pub mod walker;

pub use byte_span_reader::ByteSpanReader;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_lex_error_kind::GraphQLLexErrorKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::ConstContext;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::parse_executable_document;
pub use graphql_parser::parse_type_system_document;
pub use graphql_parser_options::DEFAULT_MAX_RECURSION_DEPTH;
pub use graphql_parser_options::GraphQLParserOptions;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use location::Location;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use value_parsing_error::ValueParsingError;

#[cfg(test)]
mod tests;
