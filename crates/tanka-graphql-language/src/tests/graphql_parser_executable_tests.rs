//! Tests for parsing executable documents: operations, fragments,
//! selection sets, variables and directives.

use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::Location;
use crate::ReservedNameContext;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_executable;
use crate::tests::utils::parse_executable_error;

// =============================================================================
// Operations
// =============================================================================

#[test]
fn shorthand_query() {
    let document = parse_executable("{ hello }");
    assert_eq!(document.operation_definitions.len(), 1);

    let operation = first_operation(&document);
    assert_eq!(operation.operation, OperationType::Query);
    assert!(operation.is_short_hand);
    assert!(operation.name.is_none());
    assert_eq!(operation.selection_set.selections.len(), 1);

    let field = first_field(&operation.selection_set);
    assert_eq!(field.name.value, "hello");
    assert!(field.alias.is_none());
    assert!(field.arguments.is_empty());
    assert!(field.selection_set.is_none());
}

#[test]
fn named_operations_of_every_type() {
    let document = parse_executable(
        "query Q { a } mutation M { b } subscription S { c }",
    );
    let kinds: Vec<_> = document
        .operation_definitions
        .iter()
        .map(|operation| (operation.operation, operation.name.as_ref().unwrap().value.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (OperationType::Query, "Q"),
            (OperationType::Mutation, "M"),
            (OperationType::Subscription, "S"),
        ],
    );
    assert!(document.operation_definitions.iter().all(|op| !op.is_short_hand));
    assert!(document.operation("M").is_some());
    assert!(document.operation("missing").is_none());
}

#[test]
fn anonymous_query_keyword() {
    let document = parse_executable("query { a }");
    let operation = first_operation(&document);
    assert!(operation.name.is_none());
    assert!(!operation.is_short_hand);
}

#[test]
fn operation_location_is_first_token() {
    let document = parse_executable("\n\n  query Q { a }");
    assert_eq!(first_operation(&document).location, Some(Location::new(3, 3)));
}

#[test]
fn empty_document() {
    let document = parse_executable("  # just a comment\n");
    assert!(document.operation_definitions.is_empty());
    assert!(document.fragment_definitions.is_empty());
}

// =============================================================================
// Variables
// =============================================================================

#[test]
fn variable_definitions() {
    let document = parse_executable(
        "query Q($id: ID!, $first: Int = 10, $tags: [String!] @deprecated) { a }",
    );
    let variables = &first_operation(&document).variable_definitions;
    assert_eq!(variables.len(), 3);

    assert_eq!(variables[0].variable.name.value, "id");
    assert!(matches!(&variables[0].type_, TypeRef::NonNull(_)));
    assert!(variables[0].default_value.is_none());

    let default_value = variables[1].default_value.as_ref().unwrap();
    assert!(matches!(default_value.value, Value::Int(ref int) if int.value == 10));

    assert!(matches!(&variables[2].type_, TypeRef::List(_)));
    assert_eq!(variables[2].directives[0].name.value, "deprecated");
}

#[test]
fn variable_default_must_be_constant() {
    let err = parse_executable_error("query Q($a: Int = $b) { f }");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::VariableNotAllowed { .. }));
    assert_eq!(err.location(), Location::new(1, 19));
}

#[test]
fn variables_allowed_in_field_arguments() {
    let document = parse_executable("query Q($id: ID) { user(id: $id) { name } }");
    let field = first_field(&first_operation(&document).selection_set);
    assert!(matches!(&field.arguments[0].value, Value::Variable(v) if v.name.value == "id"));
}

// =============================================================================
// Selections
// =============================================================================

#[test]
fn field_alias_arguments_directives_and_subselection() {
    let document = parse_executable(
        r#"{ smallPic: profilePic(size: 64, format: "png") @include(if: $show) { url } }"#,
    );
    let field = first_field(&first_operation(&document).selection_set);

    assert_eq!(field.alias.as_ref().unwrap().value, "smallPic");
    assert_eq!(field.name.value, "profilePic");
    assert_eq!(field.response_key(), "smallPic");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[1].name.value, "format");
    assert!(field.has_directive("include"));

    let nested = field.selection_set.as_ref().unwrap();
    assert_eq!(first_field(nested).name.value, "url");
}

#[test]
fn fragment_spreads_and_inline_fragments() {
    let document = parse_executable(
        "{ node { ...NodeFields ... on User { name } ... @skip(if: true) { id } } }",
    );
    let node = first_field(&first_operation(&document).selection_set);
    let selections = &node.selection_set.as_ref().unwrap().selections;
    assert_eq!(selections.len(), 3);

    let Selection::FragmentSpread(spread) = &selections[0] else {
        panic!("Expected a fragment spread, got: {:?}", selections[0]);
    };
    assert_eq!(spread.fragment_name.value, "NodeFields");

    let Selection::InlineFragment(on_user) = &selections[1] else {
        panic!("Expected an inline fragment, got: {:?}", selections[1]);
    };
    assert_eq!(on_user.type_condition.as_ref().unwrap().name.value, "User");

    let Selection::InlineFragment(untyped) = &selections[2] else {
        panic!("Expected an inline fragment, got: {:?}", selections[2]);
    };
    assert!(untyped.type_condition.is_none());
    assert!(untyped.has_directive("skip"));
}

#[test]
fn empty_selection_set_is_rejected() {
    let err = parse_executable_error("{ user { } }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::InvalidEmptyConstruct { construct } if construct == "selection set",
    ));
    assert_eq!(err.location(), Location::new(1, 8));
}

#[test]
fn empty_argument_list_is_rejected() {
    let err = parse_executable_error("{ user() { id } }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::InvalidEmptyConstruct { construct } if construct == "argument list",
    ));
}

/// `()` after an operation name is not an empty variable list.
#[test]
fn empty_variable_definitions_are_rejected() {
    let err = parse_executable_error("query Q() { a }");
    assert_eq!(err.location(), Location::new(1, 8));
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::InvalidEmptyConstruct { construct }
            if construct == "variable definition list",
    ));
}

/// A selection set that is never closed reports the end of input.
#[test]
fn unterminated_selection_set() {
    let err = parse_executable_error("{ field_with_missing_brace");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedEnd { .. }));
    assert_eq!(err.location(), Location::new(1, 27));
    assert!(err.notes().iter().any(|note| note.location == Some(Location::new(1, 1))));
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_definition() {
    let document = parse_executable(
        "fragment UserFields on User @live { id name } { ...UserFields }",
    );
    assert_eq!(document.fragment_definitions.len(), 1);
    assert_eq!(document.operation_definitions.len(), 1);

    let fragment = document.fragment("UserFields").unwrap();
    assert_eq!(fragment.type_condition.name.value, "User");
    assert!(fragment.has_directive("live"));
    assert_eq!(fragment.selection_set.selections.len(), 2);
}

#[test]
fn fragment_named_on_is_rejected() {
    let err = parse_executable_error("fragment on on User { name }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::ReservedName {
            context: ReservedNameContext::FragmentName,
            ..
        },
    ));
    assert_eq!(err.location(), Location::new(1, 10));
}

#[test]
fn fragment_requires_on_keyword() {
    let err = parse_executable_error("fragment Foo in User { id }");
    match err.kind() {
        GraphQLParseErrorKind::UnexpectedKeyword { found, .. } => assert_eq!(found, "in"),
        other => panic!("Expected UnexpectedKeyword, got: {other:?}"),
    }
}

// =============================================================================
// Document-level errors
// =============================================================================

#[test]
fn type_definition_in_executable_document() {
    let err = parse_executable_error("type Query { a: Int }");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedToken { .. }));
    assert!(!err.notes().is_empty());
}

#[test]
fn unexpected_token_reports_what_was_found() {
    let err = parse_executable_error("query Q { a } }");
    match err.kind() {
        GraphQLParseErrorKind::UnexpectedToken { found, .. } => assert_eq!(found, "`}`"),
        other => panic!("Expected UnexpectedToken, got: {other:?}"),
    }
    assert_eq!(err.location(), Location::new(1, 15));
}

/// Lexer failures surface through the parser unchanged.
#[test]
fn lexer_errors_propagate() {
    let err = parse_executable_error("{ a(x: 01) }");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::LexerError(_)));
}

#[test]
fn parser_accepts_bytes() {
    let source: &[u8] = b"{ a }";
    let document = GraphQLParser::new(source).parse_executable_document().unwrap();
    assert_eq!(document.operation_definitions.len(), 1);
}

#[test]
fn executable_document_from_str() {
    let document: crate::ast::ExecutableDocument = "{ a }".parse().unwrap();
    assert_eq!(document.operation_definitions.len(), 1);
}
