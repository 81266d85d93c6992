//! Reserved words and fixed byte sets shared by the lexer and the parser.
//!
//! Keywords are compared as byte slices against the zero-copy token value, so
//! disambiguating a name from a keyword never allocates.

// =============================================================================
// Executable keywords
// =============================================================================

pub const QUERY: &[u8] = b"query";
pub const MUTATION: &[u8] = b"mutation";
pub const SUBSCRIPTION: &[u8] = b"subscription";
pub const FRAGMENT: &[u8] = b"fragment";
pub const ON: &[u8] = b"on";

// =============================================================================
// Type-system keywords
// =============================================================================

pub const SCHEMA: &[u8] = b"schema";
pub const SCALAR: &[u8] = b"scalar";
pub const TYPE: &[u8] = b"type";
pub const INTERFACE: &[u8] = b"interface";
pub const UNION: &[u8] = b"union";
pub const ENUM: &[u8] = b"enum";
pub const INPUT: &[u8] = b"input";
pub const DIRECTIVE: &[u8] = b"directive";
pub const EXTEND: &[u8] = b"extend";
pub const IMPLEMENTS: &[u8] = b"implements";
pub const REPEATABLE: &[u8] = b"repeatable";

// =============================================================================
// Value keywords
// =============================================================================

pub const TRUE: &[u8] = b"true";
pub const FALSE: &[u8] = b"false";
pub const NULL: &[u8] = b"null";

// =============================================================================
// Import sub-grammar
// =============================================================================

pub const TANKA_IMPORT: &[u8] = b"tanka_import";
pub const FROM: &[u8] = b"from";

// =============================================================================
// Directive locations
// =============================================================================

/// Directive locations that apply to executable documents.
pub const EXECUTABLE_DIRECTIVE_LOCATIONS: &[&[u8]] = &[
    b"QUERY",
    b"MUTATION",
    b"SUBSCRIPTION",
    b"FIELD",
    b"FRAGMENT_DEFINITION",
    b"FRAGMENT_SPREAD",
    b"INLINE_FRAGMENT",
    b"VARIABLE_DEFINITION",
];

/// Directive locations that apply to type-system documents.
pub const TYPE_SYSTEM_DIRECTIVE_LOCATIONS: &[&[u8]] = &[
    b"SCHEMA",
    b"SCALAR",
    b"OBJECT",
    b"FIELD_DEFINITION",
    b"ARGUMENT_DEFINITION",
    b"INTERFACE",
    b"UNION",
    b"ENUM",
    b"ENUM_VALUE",
    b"INPUT_OBJECT",
    b"INPUT_FIELD_DEFINITION",
];

/// Returns `true` for `query`, `mutation`, and `subscription`.
pub fn is_operation_keyword(name: &[u8]) -> bool {
    name == QUERY || name == MUTATION || name == SUBSCRIPTION
}

/// Returns `true` for keywords that start a type definition or extension.
pub fn is_type_definition_keyword(name: &[u8]) -> bool {
    name == SCALAR
        || name == TYPE
        || name == INTERFACE
        || name == UNION
        || name == ENUM
        || name == INPUT
}

/// Returns `true` if `name` is one of the executable or type-system
/// directive locations.
pub fn is_directive_location(name: &[u8]) -> bool {
    EXECUTABLE_DIRECTIVE_LOCATIONS.contains(&name)
        || TYPE_SYSTEM_DIRECTIVE_LOCATIONS.contains(&name)
}

// =============================================================================
// Byte classes
// =============================================================================

/// Returns `true` if `byte` can start a GraphQL name (`/[_A-Za-z]/`).
#[inline]
pub fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

/// Returns `true` if `byte` can continue a GraphQL name (`/[_0-9A-Za-z]/`).
#[inline]
pub fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// UTF-8 byte order mark.
pub const BOM: &[u8] = b"\xEF\xBB\xBF";
