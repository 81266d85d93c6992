/// Contexts where certain names are reserved.
///
/// Used by [`GraphQLParseErrorKind::ReservedName`](crate::GraphQLParseErrorKind::ReservedName)
/// to indicate which production rejected the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedNameContext {
    /// Fragment names cannot be `on` (it introduces the type condition).
    ///
    /// Invalid: `fragment on on User { ... }`
    FragmentName,

    /// Enum values cannot be `true`, `false`, or `null`.
    ///
    /// Invalid: `enum Bool { true false }`
    EnumValue,
}
