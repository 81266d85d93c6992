//! Tests for parsing type-system documents.

use crate::GraphQLParseErrorKind;
use crate::Location;
use crate::ast::DirectiveLocation;
use crate::ast::OperationType;
use crate::ast::TypeDefinition;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::tests::utils::parse_schema;
use crate::tests::utils::parse_schema_error;

// =============================================================================
// Object types and fields
// =============================================================================

#[test]
fn object_type_with_fields() {
    let document = parse_schema("type User { id: ID! name: String }");
    assert_eq!(document.type_definitions.len(), 1);

    let TypeDefinition::Object(user) = &document.type_definitions[0] else {
        panic!("Expected an object type");
    };
    assert_eq!(user.name.value, "User");
    assert_eq!(user.fields.len(), 2);

    let TypeRef::NonNull(id_type) = &user.fields[0].type_ else {
        panic!("Expected a non-null type");
    };
    assert!(matches!(id_type.of_type.as_ref(), TypeRef::Named(named) if named.name.value == "ID"));
    assert!(matches!(&user.fields[1].type_, TypeRef::Named(named) if named.name.value == "String"));
}

#[test]
fn field_arguments_and_defaults() {
    let document = parse_schema(
        r#"type Query { users(first: Int = 10, "Sort order" order: Order @deprecated): [User!]! }"#,
    );
    let TypeDefinition::Object(query) = &document.type_definitions[0] else {
        panic!("Expected an object type");
    };
    let users = query.field("users").unwrap();
    assert_eq!(users.arguments.len(), 2);

    let first = users.argument("first").unwrap();
    assert!(matches!(
        first.default_value.as_ref().map(|d| &d.value),
        Some(Value::Int(int)) if int.value == 10,
    ));

    let order = users.argument("order").unwrap();
    assert_eq!(order.description.as_ref().unwrap().value, "Sort order");
    assert!(order.has_directive("deprecated"));

    assert!(users.type_.is_non_null());
    assert_eq!(users.type_.innermost_named_type().name.value, "User");
}

#[test]
fn implements_interfaces() {
    let document = parse_schema(
        "type A implements & B & C { id: ID } interface D implements B { id: ID }",
    );
    let TypeDefinition::Object(a) = &document.type_definitions[0] else {
        panic!("Expected an object type");
    };
    let names: Vec<_> = a.interfaces.iter().map(|i| i.name.value.as_str()).collect();
    assert_eq!(names, ["B", "C"]);

    let TypeDefinition::Interface(d) = &document.type_definitions[1] else {
        panic!("Expected an interface type");
    };
    assert_eq!(d.interfaces.len(), 1);
}

/// Field lists are optional, and may be empty.
#[test]
fn object_without_fields() {
    let document = parse_schema("type A type B {}");
    assert_eq!(document.type_definitions.len(), 2);
}

/// Both `!` are kept: rejecting `String!!` is left to validation.
#[test]
fn double_non_null_is_accepted() {
    let document = parse_schema("type A { f: String!! }");
    let TypeDefinition::Object(a) = &document.type_definitions[0] else {
        panic!("Expected an object type");
    };
    let TypeRef::NonNull(outer) = &a.fields[0].type_ else {
        panic!("Expected a non-null type");
    };
    assert!(matches!(outer.of_type.as_ref(), TypeRef::NonNull(_)));
}

#[test]
fn nested_list_types() {
    let document = parse_schema("type A { matrix: [[Int!]]! }");
    let TypeDefinition::Object(a) = &document.type_definitions[0] else {
        panic!("Expected an object type");
    };
    assert_eq!(a.fields[0].type_.to_string(), "[[Int!]]!");
}

// =============================================================================
// Other type definitions
// =============================================================================

#[test]
fn scalar_union_enum_and_input() {
    let document = parse_schema(
        r#"
        scalar DateTime @specifiedBy(url: "https://example.com")
        union SearchResult = | User | Post
        enum Color { RED GREEN @deprecated BLUE }
        input Filter { term: String! limit: Int = 20 }
        "#,
    );
    assert_eq!(document.type_definitions.len(), 4);

    let TypeDefinition::Scalar(scalar) = &document.type_definitions[0] else {
        panic!("Expected a scalar");
    };
    assert!(scalar.has_directive("specifiedBy"));

    let TypeDefinition::Union(union) = &document.type_definitions[1] else {
        panic!("Expected a union");
    };
    let members: Vec<_> = union.members.iter().map(|m| m.name.value.as_str()).collect();
    assert_eq!(members, ["User", "Post"]);

    let TypeDefinition::Enum(color) = &document.type_definitions[2] else {
        panic!("Expected an enum");
    };
    assert_eq!(color.values.len(), 3);
    assert_eq!(color.values[1].value.name.value, "GREEN");
    assert!(color.values[1].has_directive("deprecated"));

    let TypeDefinition::InputObject(filter) = &document.type_definitions[3] else {
        panic!("Expected an input object");
    };
    assert_eq!(filter.fields.len(), 2);
    assert!(filter.fields[1].default_value.is_some());
}

#[test]
fn descriptions_attach_to_definitions() {
    let document = parse_schema(
        r#"
"A user"
type User {
  """
  The id
  """
  id: ID
}
"#,
    );
    let definition = &document.type_definitions[0];
    assert_eq!(definition.description().unwrap().value, "A user");
    assert_eq!(definition.location(), Some(Location::new(2, 1)));

    let TypeDefinition::Object(user) = definition else {
        panic!("Expected an object type");
    };
    let id = &user.fields[0];
    assert_eq!(id.description.as_ref().unwrap().value, "The id");
    assert!(id.description.as_ref().unwrap().is_block);
}

#[test]
fn description_without_definition_is_an_error() {
    let err = parse_schema_error("type A \"dangling\"");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedEnd { .. }));
}

// =============================================================================
// Schema definitions and extensions
// =============================================================================

#[test]
fn schema_definition() {
    let document = parse_schema("schema @core { query: Q mutation: M }");
    let schema = &document.schema_definitions[0];
    assert_eq!(schema.operations.len(), 2);
    assert_eq!(schema.root_type(OperationType::Mutation).unwrap().name.value, "M");
    assert!(schema.root_type(OperationType::Subscription).is_none());
    assert!(schema.has_directive("core"));
}

#[test]
fn schema_root_operation_must_be_operation_keyword() {
    let err = parse_schema_error("schema { fetch: Q }");
    match err.kind() {
        GraphQLParseErrorKind::UnexpectedKeyword { found, .. } => assert_eq!(found, "fetch"),
        other => panic!("Expected UnexpectedKeyword, got: {other:?}"),
    }
}

#[test]
fn extensions() {
    let document = parse_schema(
        "extend schema @link { subscription: S } extend type User { age: Int } extend union U = V",
    );
    assert_eq!(document.schema_extensions.len(), 1);
    assert_eq!(document.schema_extensions[0].operations.len(), 1);
    assert_eq!(document.type_extensions.len(), 2);

    let extension = &document.type_extensions[0];
    assert_eq!(extension.definition.name().value, "User");
    assert_eq!(extension.location, Some(Location::new(1, 41)));
    assert!(matches!(extension.definition, TypeDefinition::Object(_)));
    assert!(matches!(document.type_extensions[1].definition, TypeDefinition::Union(_)));
}

#[test]
fn description_on_type_extension_is_rejected() {
    let err = parse_schema_error("\"Adds age\" extend type User { age: Int }");
    assert_eq!(err.location(), Location::new(1, 1));
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::DescriptionNotAllowed { construct } if construct == "type extension",
    ));
}

#[test]
fn description_on_schema_extension_is_rejected() {
    let err = parse_schema_error("scalar S\n\"\"\"doc\"\"\"\nextend schema @auth");
    assert_eq!(err.location(), Location::new(2, 1));
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::DescriptionNotAllowed { construct } if construct == "schema extension",
    ));
}

#[test]
fn extend_requires_a_type_keyword() {
    let err = parse_schema_error("extend fragment X");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedKeyword { .. }));
}

// =============================================================================
// Directive definitions
// =============================================================================

#[test]
fn directive_definition() {
    let document = parse_schema(
        "directive @cache(ttl: Int!) repeatable on | FIELD_DEFINITION | OBJECT",
    );
    let directive = document.directive_definition("cache").unwrap();
    assert!(directive.is_repeatable);
    assert_eq!(directive.arguments.len(), 1);
    assert_eq!(
        directive.directive_locations,
        vec![DirectiveLocation::FieldDefinition, DirectiveLocation::Object],
    );
}

/// An unknown location ends the list; the name is then parsed as the start
/// of the next definition.
#[test]
fn unknown_directive_location_ends_the_list() {
    let document = parse_schema("directive @a on FIELD | QUERY type T");
    let directive = &document.directive_definitions[0];
    assert_eq!(
        directive.directive_locations,
        vec![DirectiveLocation::Field, DirectiveLocation::Query],
    );
    assert_eq!(document.type_definitions.len(), 1);

    let err = parse_schema_error("directive @a on FIELD | NOT_A_LOCATION");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedToken { .. }));
}

// =============================================================================
// Document-level errors and helpers
// =============================================================================

#[test]
fn operation_in_type_system_document() {
    let err = parse_schema_error("query { a }");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedToken { .. }));
    assert!(!err.notes().is_empty());
}

#[test]
fn missing_colon_in_field_definition() {
    let err = parse_schema_error("type User {\n  name String\n}");
    assert_eq!(err.location(), Location::new(2, 8));
    match err.kind() {
        GraphQLParseErrorKind::UnexpectedToken { expected, found } => {
            assert_eq!(expected, &vec!["`:`".to_string()]);
            assert_eq!(found, "`String`");
        }
        other => panic!("Expected UnexpectedToken, got: {other:?}"),
    }
}

#[test]
fn merge_concatenates_documents() {
    let base = parse_schema("type A scalar S directive @d on FIELD");
    let extra = parse_schema("type B extend type A { x: Int }");
    let merged = base.merge(&extra);

    assert_eq!(merged.type_definitions.len(), 3);
    assert_eq!(merged.type_extensions.len(), 1);
    assert_eq!(merged.directive_definitions.len(), 1);
    assert!(merged.type_definition("B").is_some());
    assert_eq!(base.type_definitions.len(), 2);
}

#[test]
fn empty_type_system_document() {
    assert!(parse_schema("# nothing here").is_empty());
}

// =============================================================================
// Keywords
// =============================================================================

#[test]
fn skip_keyword_consumes_matching_name() {
    let mut parser = crate::GraphQLParser::new("extend type Foo");
    parser.skip_keyword(crate::keywords::EXTEND).unwrap();
    parser.skip_keyword(crate::keywords::TYPE).unwrap();
    assert_eq!(parser.parse_name().unwrap().value, "Foo");
}

/// A different name is reported as an unexpected keyword, not a token.
#[test]
fn skip_keyword_rejects_other_name() {
    let mut parser = crate::GraphQLParser::new("type Foo");
    let error = parser.skip_keyword(crate::keywords::SCHEMA).unwrap_err();
    assert_eq!(error.location(), Location::new(1, 1));
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedKeyword {
            expected: vec!["`schema`".to_string()],
            found: "type".to_string(),
        },
    );
}

// =============================================================================
// Empty constructs
// =============================================================================

#[test]
fn empty_argument_definitions_are_rejected() {
    let err = parse_schema_error("type A { f(): Int }");
    assert_eq!(err.location(), Location::new(1, 11));
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::InvalidEmptyConstruct { construct }
            if construct == "argument definition list",
    ));
}

/// Empty definition bodies are left for validation to reject.
#[test]
fn empty_definition_bodies_are_accepted() {
    let document = parse_schema("schema {} type A {} enum E {} input I {}");
    assert!(document.schema_definitions[0].operations.is_empty());
    assert_eq!(document.type_definitions.len(), 3);
}
