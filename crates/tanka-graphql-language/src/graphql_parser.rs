//! Recursive descent parser for GraphQL documents.
//!
//! This module provides [`GraphQLParser`], which turns the token stream of a
//! [`GraphQLLexer`] into either an [`ExecutableDocument`] or a
//! [`TypeSystemDocument`].
//!
//! # Architecture
//!
//! Each grammar rule has a corresponding public `parse_*` method. The parser
//! keeps exactly one token of lookahead and stops at the first error: every
//! method returns `Result<_, GraphQLParseError>` and there is no recovery or
//! partial result.
//!
//! Type-system documents may open with block strings that carry
//! `tanka_import` statements. Such a block is parsed by a fresh inner parser
//! over the block's content and produces [`Import`] nodes.

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParserOptions;
use crate::Location;
use crate::ReservedNameContext;
use crate::ValueParsingError;
use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::DefaultValue;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::EnumDefinition;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::ExecutableDocument;
use crate::ast::FieldDefinition;
use crate::ast::FieldSelection;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Import;
use crate::ast::InlineFragment;
use crate::ast::InputObjectDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceDefinition;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::ObjectDefinition;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeRef;
use crate::ast::TypeSystemDocument;
use crate::ast::UnionDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::keywords;
use crate::lexer::GraphQLLexer;
use crate::string_value;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Parses an executable document (operations and fragments).
///
/// ```
/// use tanka_graphql_language::parse_executable_document;
///
/// let document = parse_executable_document("query Me { me { id } }").unwrap();
/// assert!(document.operation("Me").is_some());
/// ```
pub fn parse_executable_document(
    source: &(impl AsRef<[u8]> + ?Sized),
) -> Result<ExecutableDocument, GraphQLParseError> {
    GraphQLParser::new(source).parse_executable_document()
}

/// Parses a type-system (SDL) document, including any leading
/// `tanka_import` block strings.
pub fn parse_type_system_document(
    source: &(impl AsRef<[u8]> + ?Sized),
) -> Result<TypeSystemDocument, GraphQLParseError> {
    GraphQLParser::new(source).parse_type_system_document()
}

/// Context for parsing values, determining whether variables are allowed.
///
/// Constant contexts also name the position in the
/// [`VariableNotAllowed`](GraphQLParseErrorKind::VariableNotAllowed) error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstContext {
    /// Variables are allowed (field and directive arguments in operations).
    AllowVariables,
    /// Any constant position not covered by a more specific variant.
    ConstantValue,
    /// The default value of a variable definition.
    VariableDefaultValue,
    /// Arguments of directives applied to a variable definition.
    VariableDirective,
    /// The default value of an argument or input field definition.
    InputDefaultValue,
    /// Arguments of directives applied in a type-system document.
    TypeSystemDirective,
}

impl ConstContext {
    pub fn is_constant(&self) -> bool {
        !matches!(self, ConstContext::AllowVariables)
    }

    fn description(&self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "values",
            ConstContext::ConstantValue => "constant values",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::VariableDirective => "variable definition directives",
            ConstContext::InputDefaultValue => "input value default values",
            ConstContext::TypeSystemDirective => "type system directives",
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// A parser is single-use: it borrows the source for one parse and should be
/// dropped afterwards.
///
/// # Usage
///
/// ```
/// use tanka_graphql_language::GraphQLParser;
/// use tanka_graphql_language::ast::TypeDefinition;
///
/// let mut parser = GraphQLParser::new("type Query { hello: String }");
/// let document = parser.parse_type_system_document().unwrap();
/// assert!(matches!(
///     document.type_definitions[0],
///     TypeDefinition::Object(_),
/// ));
/// ```
pub struct GraphQLParser<'src> {
    lexer: GraphQLLexer<'src>,

    /// The current, not yet consumed token. `Start` until the lexer is
    /// primed by the first read.
    current: GraphQLToken<'src>,

    options: GraphQLParserOptions,

    /// Shared recursion depth counter, incremented on entry to
    /// `parse_value`, `parse_selection_set` and `parse_type`.
    recursion_depth: usize,

    /// A description read ahead of the definition it belongs to.
    pending_description: Option<StringValue>,
}

impl<'src> GraphQLParser<'src> {
    /// Creates a new parser over `source`.
    ///
    /// Accepts anything that can be viewed as bytes, including `&str`,
    /// `&String` and `&[u8]`.
    pub fn new(source: &'src (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self::from_lexer(GraphQLLexer::new(source))
    }

    fn from_lexer(lexer: GraphQLLexer<'src>) -> Self {
        Self {
            lexer,
            current: GraphQLToken::start_of_input(),
            options: GraphQLParserOptions::default(),
            recursion_depth: 0,
            pending_description: None,
        }
    }

    pub fn with_options(mut self, options: GraphQLParserOptions) -> Self {
        self.options = options;
        self
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Returns the current token, priming the lexer on first use.
    fn peek(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.current.kind == GraphQLTokenKind::Start {
            self.current = self.lexer.next_token()?;
        }
        Ok(self.current)
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let token = self.peek()?;
        self.current = self.lexer.next_token()?;
        Ok(token)
    }

    fn peek_is(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLParseError> {
        Ok(self.peek()?.kind == kind)
    }

    fn peek_keyword(&mut self, keyword: &[u8]) -> Result<bool, GraphQLParseError> {
        Ok(self.peek()?.is_keyword(keyword))
    }

    /// Consumes the current token if it has the given kind.
    fn skip(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLParseError> {
        if self.peek_is(kind)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a token of the given kind or fails.
    fn expect(
        &mut self,
        kind: GraphQLTokenKind,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let token = self.peek()?;
        if token.kind == kind {
            self.advance()
        } else {
            Err(unexpected(token, &[&kind.to_string()]))
        }
    }

    /// Consumes the closing token of a delimited list. Reaching the end of
    /// input instead adds a note pointing at the opening delimiter.
    fn expect_closing(
        &mut self,
        kind: GraphQLTokenKind,
        opened_at: Location,
    ) -> Result<(), GraphQLParseError> {
        let token = self.peek()?;
        if token.kind == kind {
            self.advance()?;
            return Ok(());
        }
        let mut error = unexpected(token, &[&kind.to_string()]);
        if token.kind == GraphQLTokenKind::End {
            error.add_note_with_location("Opened here", opened_at);
        }
        Err(error)
    }

    /// Returns `true` (consuming the closing token) when the list that was
    /// opened at `opened_at` ends here. Fails at end of input.
    fn at_list_end(
        &mut self,
        closing: GraphQLTokenKind,
        opened_at: Location,
    ) -> Result<bool, GraphQLParseError> {
        let token = self.peek()?;
        if token.kind == closing {
            self.advance()?;
            return Ok(true);
        }
        if token.kind == GraphQLTokenKind::End {
            self.expect_closing(closing, opened_at)?;
        }
        Ok(false)
    }

    /// Asserts that the current token is the name `keyword` and consumes it.
    pub fn skip_keyword(&mut self, keyword: &[u8]) -> Result<(), GraphQLParseError> {
        let token = self.peek()?;
        if token.is_keyword(keyword) {
            self.advance()?;
            return Ok(());
        }

        let expected = format!("`{}`", String::from_utf8_lossy(keyword));
        if token.kind == GraphQLTokenKind::Name {
            let found = token.value_str().into_owned();
            return Err(GraphQLParseError::new(
                format!("Expected {expected}, found `{found}`"),
                token.location(),
                GraphQLParseErrorKind::UnexpectedKeyword {
                    expected: vec![expected],
                    found,
                },
            ));
        }
        Err(unexpected(token, &[&expected]))
    }

    /// Fails with `InvalidEmptyConstruct` when the `(` at `opened_at` is
    /// immediately closed.
    fn reject_empty_parens(
        &mut self,
        opened_at: Location,
        construct: &str,
    ) -> Result<(), GraphQLParseError> {
        if !self.peek_is(GraphQLTokenKind::ParenClose)? {
            return Ok(());
        }
        let mut message = format!("{construct} cannot be empty");
        message[..1].make_ascii_uppercase();
        let mut error = GraphQLParseError::new(
            message,
            opened_at,
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        );
        error.add_help("Remove the empty parentheses");
        Err(error)
    }

    // =========================================================================
    // Recursion depth
    // =========================================================================

    /// Checks recursion depth and returns an error if the limit is
    /// exceeded. On success, increments the depth counter; the caller
    /// must call `exit_recursion()` when done.
    fn enter_recursion(&mut self) -> Result<(), GraphQLParseError> {
        if self.recursion_depth >= self.options.max_recursion_depth {
            let token = self.peek()?;
            let limit = self.options.max_recursion_depth;
            let mut error = GraphQLParseError::new(
                format!("Maximum nesting depth of {limit} exceeded"),
                token.location(),
                GraphQLParseErrorKind::NestingTooDeep { limit },
            );
            error.add_help(
                "Reduce the nesting of values, selection sets, or list types, \
                 or raise `GraphQLParserOptions::max_recursion_depth`",
            );
            return Err(error);
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Executable documents
    // =========================================================================

    /// Parses a complete executable document.
    pub fn parse_executable_document(
        &mut self,
    ) -> Result<ExecutableDocument, GraphQLParseError> {
        log::debug!(
            "parsing executable document ({} bytes)",
            self.lexer.source().len(),
        );
        let mut document = ExecutableDocument::default();

        loop {
            let token = self.peek()?;
            match token.kind {
                GraphQLTokenKind::End => break,
                GraphQLTokenKind::CurlyBraceOpen => {
                    let operation = self.parse_short_operation_definition()?;
                    document.operation_definitions.push(operation);
                }
                GraphQLTokenKind::Name if keywords::is_operation_keyword(token.value) => {
                    let operation = self.parse_operation_definition()?;
                    document.operation_definitions.push(operation);
                }
                GraphQLTokenKind::Name if token.value == keywords::FRAGMENT => {
                    let fragment = self.parse_fragment_definition()?;
                    document.fragment_definitions.push(fragment);
                }
                _ => {
                    let mut error = unexpected(
                        token,
                        &["`query`", "`mutation`", "`subscription`", "`fragment`", "`{`"],
                    );
                    if token.kind.is_string()
                        || (token.kind == GraphQLTokenKind::Name
                            && is_type_system_keyword(token.value))
                    {
                        error.add_help(
                            "Type system definitions are not allowed in executable \
                             documents; parse this source as a type system document",
                        );
                    }
                    return Err(error);
                }
            }
        }

        log::trace!(
            "parsed {} operation(s) and {} fragment(s)",
            document.operation_definitions.len(),
            document.fragment_definitions.len(),
        );
        Ok(document)
    }

    /// Parses `query|mutation|subscription Name? VariableDefinitions?
    /// Directives? SelectionSet`, or a shorthand `{ ... }` query.
    pub fn parse_operation_definition(
        &mut self,
    ) -> Result<OperationDefinition, GraphQLParseError> {
        let token = self.peek()?;
        if token.kind == GraphQLTokenKind::CurlyBraceOpen {
            return self.parse_short_operation_definition();
        }

        let Some(operation) = OperationType::from_keyword(token.value)
            .filter(|_| token.kind == GraphQLTokenKind::Name)
        else {
            return Err(expected_keyword(token, &["query", "mutation", "subscription"]));
        };
        self.advance()?;

        let name = if self.peek_is(GraphQLTokenKind::Name)? {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = if self.peek_is(GraphQLTokenKind::ParenOpen)? {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_optional_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            is_short_hand: false,
            location: Some(token.location()),
        })
    }

    /// Parses an anonymous `{ ... }` query.
    pub fn parse_short_operation_definition(
        &mut self,
    ) -> Result<OperationDefinition, GraphQLParseError> {
        let location = self.peek()?.location();
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation: OperationType::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
            is_short_hand: true,
            location: Some(location),
        })
    }

    /// Parses `fragment Name on Type Directives? SelectionSet`.
    pub fn parse_fragment_definition(
        &mut self,
    ) -> Result<FragmentDefinition, GraphQLParseError> {
        let location = self.peek()?.location();
        self.skip_keyword(keywords::FRAGMENT)?;

        let token = self.peek()?;
        if token.is_keyword(keywords::ON) {
            let mut error = GraphQLParseError::new(
                "Fragment name cannot be `on`",
                token.location(),
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                    context: ReservedNameContext::FragmentName,
                },
            );
            error.add_help("Give the fragment a name: `fragment MyFragment on Type { ... }`");
            return Err(error);
        }
        let fragment_name = self.parse_name()?;
        self.skip_keyword(keywords::ON)?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_optional_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            fragment_name,
            type_condition,
            directives,
            selection_set,
            location: Some(location),
        })
    }

    /// Parses `( VariableDefinition+ )`.
    pub fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<VariableDefinition>, GraphQLParseError> {
        let opened_at = self.expect(GraphQLTokenKind::ParenOpen)?.location();
        self.reject_empty_parens(opened_at, "variable definition list")?;
        let mut definitions = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::ParenClose, opened_at)? {
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(definitions)
    }

    /// Parses `$name: Type DefaultValue? Directives?`.
    pub fn parse_variable_definition(
        &mut self,
    ) -> Result<VariableDefinition, GraphQLParseError> {
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_ = self.parse_type()?;
        let default_value =
            self.parse_optional_default_value(ConstContext::VariableDefaultValue)?;
        let directives = self.parse_optional_directives(ConstContext::VariableDirective)?;

        Ok(VariableDefinition {
            location: variable.location,
            variable,
            type_,
            default_value,
            directives,
        })
    }

    /// Parses `{ Selection+ }`. An empty selection set is an error.
    pub fn parse_selection_set(&mut self) -> Result<SelectionSet, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<SelectionSet, GraphQLParseError> {
        let opened_at = self.expect(GraphQLTokenKind::CurlyBraceOpen)?.location();

        let token = self.peek()?;
        if token.kind == GraphQLTokenKind::CurlyBraceClose {
            let mut error = GraphQLParseError::new(
                "Selection set cannot be empty",
                opened_at,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "selection set".to_string(),
                },
            );
            error.add_help("Select at least one field, or remove the braces");
            return Err(error);
        }

        let mut selections = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::CurlyBraceClose, opened_at)? {
            selections.push(self.parse_selection()?);
        }

        Ok(SelectionSet {
            selections,
            location: Some(opened_at),
        })
    }

    /// Parses a field, fragment spread, or inline fragment.
    pub fn parse_selection(&mut self) -> Result<Selection, GraphQLParseError> {
        let token = self.peek()?;
        match token.kind {
            GraphQLTokenKind::Spread => self.parse_fragment_spread_or_inline_fragment(),
            GraphQLTokenKind::Name => Ok(Selection::Field(self.parse_field_selection()?)),
            _ => Err(unexpected(token, &["field name", "`...`", "`}`"])),
        }
    }

    /// Parses `Alias? Name Arguments? Directives? SelectionSet?`.
    pub fn parse_field_selection(&mut self) -> Result<FieldSelection, GraphQLParseError> {
        let location = self.peek()?.location();
        let first = self.parse_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(first), self.parse_name()?)
        } else {
            (None, first)
        };
        let arguments = self.parse_optional_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_optional_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(GraphQLTokenKind::CurlyBraceOpen)? {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(FieldSelection {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: Some(location),
        })
    }

    /// Parses `...Name Directives?` or `... TypeCondition? Directives?
    /// SelectionSet`.
    pub fn parse_fragment_spread_or_inline_fragment(
        &mut self,
    ) -> Result<Selection, GraphQLParseError> {
        let location = self.expect(GraphQLTokenKind::Spread)?.location();

        let token = self.peek()?;
        if token.kind == GraphQLTokenKind::Name && !token.is_keyword(keywords::ON) {
            let fragment_name = self.parse_name()?;
            let directives = self.parse_optional_directives(ConstContext::AllowVariables)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                fragment_name,
                directives,
                location: Some(location),
            }));
        }

        let type_condition = if token.is_keyword(keywords::ON) {
            self.advance()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_optional_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            location: Some(location),
        }))
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    /// Parses `( Argument+ )` if the current token is `(`.
    pub fn parse_optional_arguments(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<Argument>, GraphQLParseError> {
        if !self.peek_is(GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let opened_at = self.advance()?.location();
        self.reject_empty_parens(opened_at, "argument list")?;

        let mut arguments = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::ParenClose, opened_at)? {
            arguments.push(self.parse_argument(context)?);
        }
        Ok(arguments)
    }

    /// Parses `Name: Value`.
    pub fn parse_argument(
        &mut self,
        context: ConstContext,
    ) -> Result<Argument, GraphQLParseError> {
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(Argument {
            location: name.location,
            name,
            value,
        })
    }

    /// Parses zero or more directives.
    pub fn parse_optional_directives(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<Directive>, GraphQLParseError> {
        let mut directives = Vec::new();
        while self.peek_is(GraphQLTokenKind::At)? {
            directives.push(self.parse_directive(context)?);
        }
        Ok(directives)
    }

    /// Parses `@Name Arguments?`.
    pub fn parse_directive(
        &mut self,
        context: ConstContext,
    ) -> Result<Directive, GraphQLParseError> {
        let location = self.expect(GraphQLTokenKind::At)?.location();
        let name = self.parse_name()?;
        let arguments = self.parse_optional_arguments(context)?;
        Ok(Directive {
            name,
            arguments,
            location: Some(location),
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value (literal or variable reference).
    ///
    /// The `context` decides whether variables are allowed and names the
    /// position in the error when they are not.
    pub fn parse_value(&mut self, context: ConstContext) -> Result<Value, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> Result<Value, GraphQLParseError> {
        let token = self.peek()?;
        match token.kind {
            GraphQLTokenKind::Dollar if context.is_constant() => {
                let mut error = GraphQLParseError::new(
                    format!("Variables are not allowed in {}", context.description()),
                    token.location(),
                    GraphQLParseErrorKind::VariableNotAllowed {
                        context: context.description().to_string(),
                    },
                );
                error.add_help("Replace the variable with a literal value");
                Err(error)
            }
            GraphQLTokenKind::Dollar => Ok(Value::Variable(self.parse_variable()?)),
            GraphQLTokenKind::IntValue => Ok(Value::Int(self.parse_int_value()?)),
            GraphQLTokenKind::FloatValue => Ok(Value::Float(self.parse_float_value()?)),
            GraphQLTokenKind::StringValue | GraphQLTokenKind::BlockStringValue => {
                Ok(Value::String(self.parse_string_value()?))
            }
            GraphQLTokenKind::Name => match token.value {
                keywords::TRUE | keywords::FALSE => {
                    Ok(Value::Boolean(self.parse_boolean_value()?))
                }
                keywords::NULL => Ok(Value::Null(self.parse_null_value()?)),
                _ => Ok(Value::Enum(self.parse_enum_value()?)),
            },
            GraphQLTokenKind::SquareBracketOpen => Ok(Value::List(self.parse_list_value(context)?)),
            GraphQLTokenKind::CurlyBraceOpen => {
                Ok(Value::Object(self.parse_object_value(context)?))
            }
            _ => Err(unexpected(token, &["value"])),
        }
    }

    /// Parses `$Name`.
    pub fn parse_variable(&mut self) -> Result<Variable, GraphQLParseError> {
        let location = self.expect(GraphQLTokenKind::Dollar)?.location();
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            location: Some(location),
        })
    }

    /// Parses an integer literal into an `i32`. Literals outside the `i32`
    /// range are rejected.
    pub fn parse_int_value(&mut self) -> Result<IntValue, GraphQLParseError> {
        let token = self.expect(GraphQLTokenKind::IntValue)?;
        let raw = token.value_str();
        match raw.parse::<i32>() {
            Ok(value) => Ok(IntValue {
                value,
                location: Some(token.location()),
            }),
            Err(_) => {
                let mut error = GraphQLParseError::new(
                    format!("Integer `{raw}` does not fit in a 32-bit signed integer"),
                    token.location(),
                    GraphQLParseErrorKind::InvalidValue(ValueParsingError::Int(
                        raw.to_string(),
                    )),
                );
                error.add_spec("https://spec.graphql.org/October2021/#sec-Int");
                Err(error)
            }
        }
    }

    /// Parses a float literal. The text is kept as written.
    pub fn parse_float_value(&mut self) -> Result<FloatValue, GraphQLParseError> {
        let token = self.expect(GraphQLTokenKind::FloatValue)?;
        Ok(FloatValue {
            value: token.value_str().into_owned(),
            is_exponential: token.is_exponential,
            location: Some(token.location()),
        })
    }

    /// Parses a single-line or block string, decoding it into an owned
    /// string.
    pub fn parse_string_value(&mut self) -> Result<StringValue, GraphQLParseError> {
        let token = self.peek()?;
        let is_block = match token.kind {
            GraphQLTokenKind::StringValue => false,
            GraphQLTokenKind::BlockStringValue => true,
            _ => return Err(unexpected(token, &["string"])),
        };
        self.advance()?;

        let cooked = if is_block {
            string_value::cook_block_string(token.value)
        } else {
            string_value::cook_string(token.value)
        };
        match cooked {
            Ok(value) => Ok(StringValue {
                value,
                is_block,
                location: Some(token.location()),
            }),
            Err(err) => Err(GraphQLParseError::new(
                format!("Invalid string: {err}"),
                token.location(),
                GraphQLParseErrorKind::InvalidValue(ValueParsingError::String(err)),
            )),
        }
    }

    /// Parses `true` or `false`.
    pub fn parse_boolean_value(&mut self) -> Result<BooleanValue, GraphQLParseError> {
        let token = self.peek()?;
        let value = match token.kind {
            GraphQLTokenKind::Name if token.value == keywords::TRUE => true,
            GraphQLTokenKind::Name if token.value == keywords::FALSE => false,
            _ => return Err(expected_keyword(token, &["true", "false"])),
        };
        self.advance()?;
        Ok(BooleanValue {
            value,
            location: Some(token.location()),
        })
    }

    /// Parses `null`.
    pub fn parse_null_value(&mut self) -> Result<NullValue, GraphQLParseError> {
        let location = self.peek()?.location();
        self.skip_keyword(keywords::NULL)?;
        Ok(NullValue {
            location: Some(location),
        })
    }

    /// Parses an enum value: any name except `true`, `false` and `null`.
    pub fn parse_enum_value(&mut self) -> Result<EnumValue, GraphQLParseError> {
        let token = self.peek()?;
        if matches!(token.value, keywords::TRUE | keywords::FALSE | keywords::NULL)
            && token.kind == GraphQLTokenKind::Name
        {
            let name = token.value_str().into_owned();
            let mut error = GraphQLParseError::new(
                format!("Enum value cannot be `{name}`"),
                token.location(),
                GraphQLParseErrorKind::ReservedName {
                    name,
                    context: ReservedNameContext::EnumValue,
                },
            );
            error.add_spec("https://spec.graphql.org/October2021/#EnumValue");
            return Err(error);
        }
        let name = self.parse_name()?;
        Ok(EnumValue {
            location: name.location,
            name,
        })
    }

    /// Parses `[ Value* ]`.
    pub fn parse_list_value(
        &mut self,
        context: ConstContext,
    ) -> Result<ListValue, GraphQLParseError> {
        let opened_at = self.expect(GraphQLTokenKind::SquareBracketOpen)?.location();
        let mut values = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::SquareBracketClose, opened_at)? {
            values.push(self.parse_value(context)?);
        }
        Ok(ListValue {
            values,
            location: Some(opened_at),
        })
    }

    /// Parses `{ (Name: Value)* }`.
    pub fn parse_object_value(
        &mut self,
        context: ConstContext,
    ) -> Result<ObjectValue, GraphQLParseError> {
        let opened_at = self.expect(GraphQLTokenKind::CurlyBraceOpen)?.location();
        let mut fields = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::CurlyBraceClose, opened_at)? {
            let name = self.parse_name()?;
            self.expect(GraphQLTokenKind::Colon)?;
            let value = self.parse_value(context)?;
            fields.push(ObjectField {
                location: name.location,
                name,
                value,
            });
        }
        Ok(ObjectValue {
            fields,
            location: Some(opened_at),
        })
    }

    /// Parses `= Value` if the current token is `=`.
    pub fn parse_optional_default_value(
        &mut self,
        context: ConstContext,
    ) -> Result<Option<DefaultValue>, GraphQLParseError> {
        if !self.peek_is(GraphQLTokenKind::Equals)? {
            return Ok(None);
        }
        let location = self.advance()?.location();
        let value = self.parse_value(context)?;
        Ok(Some(DefaultValue {
            value,
            location: Some(location),
        }))
    }

    // =========================================================================
    // Types and names
    // =========================================================================

    /// Parses `NamedType` or `[Type]`, each optionally followed by `!`.
    pub fn parse_type(&mut self) -> Result<TypeRef, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_impl(&mut self) -> Result<TypeRef, GraphQLParseError> {
        let token = self.peek()?;
        let location = Some(token.location());

        let mut type_ref = match token.kind {
            GraphQLTokenKind::SquareBracketOpen => {
                self.advance()?;
                let of_type = self.parse_type()?;
                self.expect_closing(GraphQLTokenKind::SquareBracketClose, token.location())?;
                TypeRef::List(ListType {
                    of_type: Box::new(of_type),
                    location,
                })
            }
            GraphQLTokenKind::Name => TypeRef::Named(self.parse_named_type()?),
            _ => return Err(unexpected(token, &["type name", "`[`"])),
        };

        // `String!!` nests two non-null wrappers; validation rejects it.
        while self.skip(GraphQLTokenKind::Bang)? {
            type_ref = TypeRef::NonNull(NonNullType {
                of_type: Box::new(type_ref),
                location,
            });
        }
        Ok(type_ref)
    }

    pub fn parse_named_type(&mut self) -> Result<NamedType, GraphQLParseError> {
        let name = self.parse_name()?;
        Ok(NamedType {
            location: name.location,
            name,
        })
    }

    pub fn parse_name(&mut self) -> Result<Name, GraphQLParseError> {
        let token = self.peek()?;
        if token.kind != GraphQLTokenKind::Name {
            return Err(unexpected(token, &["name"]));
        }
        self.advance()?;
        Ok(Name {
            value: token.value_str().into_owned(),
            location: Some(token.location()),
        })
    }

    // =========================================================================
    // Type-system documents
    // =========================================================================

    /// Parses a complete type-system document.
    ///
    /// Leading block strings whose content starts with `tanka_import` are
    /// parsed as import statements; every other string is the description
    /// of the definition that follows it.
    pub fn parse_type_system_document(
        &mut self,
    ) -> Result<TypeSystemDocument, GraphQLParseError> {
        log::debug!(
            "parsing type system document ({} bytes)",
            self.lexer.source().len(),
        );
        let mut document = TypeSystemDocument {
            imports: self.parse_leading_imports()?,
            ..TypeSystemDocument::default()
        };

        loop {
            self.pending_description = self.parse_optional_description()?;
            let token = self.peek()?;

            match token.kind {
                GraphQLTokenKind::End => {
                    if let Some(description) = self.pending_description.take() {
                        return Err(GraphQLParseError::new(
                            "Expected a definition after this description",
                            description.location.unwrap_or(token.location()),
                            GraphQLParseErrorKind::UnexpectedEnd {
                                expected: vec!["definition".to_string()],
                            },
                        ));
                    }
                    break;
                }
                GraphQLTokenKind::Name if token.value == keywords::SCHEMA => {
                    let definition = self.parse_schema_definition()?;
                    document.schema_definitions.push(definition);
                }
                GraphQLTokenKind::Name if token.value == keywords::DIRECTIVE => {
                    let definition = self.parse_directive_definition()?;
                    document.directive_definitions.push(definition);
                }
                GraphQLTokenKind::Name if token.value == keywords::EXTEND => {
                    let location = token.location();
                    let description = self.pending_description.take();
                    self.advance()?;
                    if self.peek_keyword(keywords::SCHEMA)? {
                        reject_extension_description(description, "schema extension", location)?;
                        let extension = self.parse_schema_extension_body(location)?;
                        document.schema_extensions.push(extension);
                    } else {
                        reject_extension_description(description, "type extension", location)?;
                        let definition = self.parse_type_definition()?;
                        document.type_extensions.push(TypeExtension {
                            definition,
                            location: Some(location),
                        });
                    }
                }
                GraphQLTokenKind::Name if keywords::is_type_definition_keyword(token.value) => {
                    let definition = self.parse_type_definition()?;
                    document.type_definitions.push(definition);
                }
                _ => {
                    let mut error = unexpected(
                        token,
                        &[
                            "`schema`",
                            "`scalar`",
                            "`type`",
                            "`interface`",
                            "`union`",
                            "`enum`",
                            "`input`",
                            "`directive`",
                            "`extend`",
                        ],
                    );
                    if token.kind == GraphQLTokenKind::CurlyBraceOpen
                        || keywords::is_operation_keyword(token.value)
                        || token.value == keywords::FRAGMENT
                    {
                        error.add_help(
                            "Operations and fragments are not allowed in type system \
                             documents; parse this source as an executable document",
                        );
                    }
                    return Err(error);
                }
            }
        }

        log::trace!(
            "parsed {} type definition(s), {} extension(s), {} import(s)",
            document.type_definitions.len(),
            document.type_extensions.len() + document.schema_extensions.len(),
            document.imports.len(),
        );
        Ok(document)
    }

    /// Returns the description read ahead by the document loop, or parses
    /// one at the current position.
    fn take_description(&mut self) -> Result<Option<StringValue>, GraphQLParseError> {
        match self.pending_description.take() {
            Some(description) => Ok(Some(description)),
            None => self.parse_optional_description(),
        }
    }

    /// Parses a string or block string if one is present.
    pub fn parse_optional_description(
        &mut self,
    ) -> Result<Option<StringValue>, GraphQLParseError> {
        if self.peek()?.kind.is_string() {
            Ok(Some(self.parse_string_value()?))
        } else {
            Ok(None)
        }
    }

    /// Location of a definition: its description if present, otherwise the
    /// current token.
    fn definition_location(
        &mut self,
        description: &Option<StringValue>,
    ) -> Result<Location, GraphQLParseError> {
        match description.as_ref().and_then(|d| d.location) {
            Some(location) => Ok(location),
            None => Ok(self.peek()?.location()),
        }
    }

    /// Parses `Description? schema Directives? { RootOperationTypeDefinition+ }`.
    pub fn parse_schema_definition(&mut self) -> Result<SchemaDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::SCHEMA)?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        let operations = self.parse_root_operation_type_definitions()?;
        Ok(SchemaDefinition {
            description,
            directives,
            operations,
            location: Some(location),
        })
    }

    /// Parses `extend schema Directives? { RootOperationTypeDefinition+ }?`.
    pub fn parse_schema_extension(&mut self) -> Result<SchemaExtension, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.peek()?.location();
        reject_extension_description(description, "schema extension", location)?;
        self.skip_keyword(keywords::EXTEND)?;
        self.parse_schema_extension_body(location)
    }

    fn parse_schema_extension_body(
        &mut self,
        location: Location,
    ) -> Result<SchemaExtension, GraphQLParseError> {
        self.skip_keyword(keywords::SCHEMA)?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        let operations = if self.peek_is(GraphQLTokenKind::CurlyBraceOpen)? {
            self.parse_root_operation_type_definitions()?
        } else {
            Vec::new()
        };
        Ok(SchemaExtension {
            directives,
            operations,
            location: Some(location),
        })
    }

    /// Parses `{ (query|mutation|subscription: NamedType)* }`.
    pub fn parse_root_operation_type_definitions(
        &mut self,
    ) -> Result<Vec<RootOperationTypeDefinition>, GraphQLParseError> {
        let opened_at = self.expect(GraphQLTokenKind::CurlyBraceOpen)?.location();
        let mut operations = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::CurlyBraceClose, opened_at)? {
            let token = self.peek()?;
            let Some(operation_type) = OperationType::from_keyword(token.value)
                .filter(|_| token.kind == GraphQLTokenKind::Name)
            else {
                return Err(expected_keyword(token, &["query", "mutation", "subscription"]));
            };
            self.advance()?;
            self.expect(GraphQLTokenKind::Colon)?;
            let named_type = self.parse_named_type()?;
            operations.push(RootOperationTypeDefinition {
                operation_type,
                named_type,
                location: Some(token.location()),
            });
        }
        Ok(operations)
    }

    /// Parses any type definition, dispatching on its keyword.
    pub fn parse_type_definition(&mut self) -> Result<TypeDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let token = self.peek()?;
        self.pending_description = description;

        match token.value {
            keywords::SCALAR if token.kind == GraphQLTokenKind::Name => {
                Ok(TypeDefinition::Scalar(self.parse_scalar_definition()?))
            }
            keywords::TYPE if token.kind == GraphQLTokenKind::Name => {
                Ok(TypeDefinition::Object(self.parse_object_definition()?))
            }
            keywords::INTERFACE if token.kind == GraphQLTokenKind::Name => {
                Ok(TypeDefinition::Interface(self.parse_interface_definition()?))
            }
            keywords::UNION if token.kind == GraphQLTokenKind::Name => {
                Ok(TypeDefinition::Union(self.parse_union_definition()?))
            }
            keywords::ENUM if token.kind == GraphQLTokenKind::Name => {
                Ok(TypeDefinition::Enum(self.parse_enum_definition()?))
            }
            keywords::INPUT if token.kind == GraphQLTokenKind::Name => {
                Ok(TypeDefinition::InputObject(self.parse_input_object_definition()?))
            }
            _ => Err(expected_keyword(
                token,
                &["scalar", "type", "interface", "union", "enum", "input"],
            )),
        }
    }

    /// Parses `Description? scalar Name Directives?`.
    pub fn parse_scalar_definition(&mut self) -> Result<ScalarDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::SCALAR)?;
        let name = self.parse_name()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        Ok(ScalarDefinition {
            description,
            name,
            directives,
            location: Some(location),
        })
    }

    /// Parses `Description? type Name ImplementsInterfaces? Directives?
    /// FieldsDefinition?`.
    pub fn parse_object_definition(&mut self) -> Result<ObjectDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::TYPE)?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        let fields = self.parse_fields_definition()?;
        Ok(ObjectDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: Some(location),
        })
    }

    /// Parses `Description? interface Name ImplementsInterfaces? Directives?
    /// FieldsDefinition?`.
    pub fn parse_interface_definition(
        &mut self,
    ) -> Result<InterfaceDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::INTERFACE)?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        let fields = self.parse_fields_definition()?;
        Ok(InterfaceDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: Some(location),
        })
    }

    /// Parses `implements &? NamedType (& NamedType)*` if present.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<NamedType>, GraphQLParseError> {
        if !self.peek_keyword(keywords::IMPLEMENTS)? {
            return Ok(Vec::new());
        }
        self.advance()?;
        self.skip(GraphQLTokenKind::Ampersand)?;

        let mut interfaces = vec![self.parse_named_type()?];
        while self.skip(GraphQLTokenKind::Ampersand)? {
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    /// Parses `{ FieldDefinition* }` if present.
    fn parse_fields_definition(&mut self) -> Result<Vec<FieldDefinition>, GraphQLParseError> {
        if !self.peek_is(GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(Vec::new());
        }
        let opened_at = self.advance()?.location();
        let mut fields = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::CurlyBraceClose, opened_at)? {
            fields.push(self.parse_field_definition()?);
        }
        Ok(fields)
    }

    /// Parses `Description? Name ArgumentsDefinition? : Type Directives?`.
    pub fn parse_field_definition(&mut self) -> Result<FieldDefinition, GraphQLParseError> {
        let description = self.parse_optional_description()?;
        let location = self.definition_location(&description)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_ = self.parse_type()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            type_,
            directives,
            location: Some(location),
        })
    }

    /// Parses `( InputValueDefinition+ )` if present.
    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<InputValueDefinition>, GraphQLParseError> {
        if !self.peek_is(GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let opened_at = self.advance()?.location();
        self.reject_empty_parens(opened_at, "argument definition list")?;
        let mut arguments = Vec::new();
        while !self.at_list_end(GraphQLTokenKind::ParenClose, opened_at)? {
            arguments.push(self.parse_input_value_definition()?);
        }
        Ok(arguments)
    }

    /// Parses `Description? Name : Type DefaultValue? Directives?`.
    pub fn parse_input_value_definition(
        &mut self,
    ) -> Result<InputValueDefinition, GraphQLParseError> {
        let description = self.parse_optional_description()?;
        let location = self.definition_location(&description)?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_ = self.parse_type()?;
        let default_value =
            self.parse_optional_default_value(ConstContext::InputDefaultValue)?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        Ok(InputValueDefinition {
            description,
            name,
            type_,
            default_value,
            directives,
            location: Some(location),
        })
    }

    /// Parses `Description? union Name Directives? (= |? NamedType (| NamedType)*)?`.
    pub fn parse_union_definition(&mut self) -> Result<UnionDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::UNION)?;
        let name = self.parse_name()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;

        let mut members = Vec::new();
        if self.skip(GraphQLTokenKind::Equals)? {
            self.skip(GraphQLTokenKind::Pipe)?;
            members.push(self.parse_named_type()?);
            while self.skip(GraphQLTokenKind::Pipe)? {
                members.push(self.parse_named_type()?);
            }
        }

        Ok(UnionDefinition {
            description,
            name,
            directives,
            members,
            location: Some(location),
        })
    }

    /// Parses `Description? enum Name Directives? { EnumValueDefinition* }?`.
    pub fn parse_enum_definition(&mut self) -> Result<EnumDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::ENUM)?;
        let name = self.parse_name()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;

        let mut values = Vec::new();
        if self.peek_is(GraphQLTokenKind::CurlyBraceOpen)? {
            let opened_at = self.advance()?.location();
            while !self.at_list_end(GraphQLTokenKind::CurlyBraceClose, opened_at)? {
                values.push(self.parse_enum_value_definition()?);
            }
        }

        Ok(EnumDefinition {
            description,
            name,
            directives,
            values,
            location: Some(location),
        })
    }

    /// Parses `Description? EnumValue Directives?`.
    pub fn parse_enum_value_definition(
        &mut self,
    ) -> Result<EnumValueDefinition, GraphQLParseError> {
        let description = self.parse_optional_description()?;
        let location = self.definition_location(&description)?;
        let value = self.parse_enum_value()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;
        Ok(EnumValueDefinition {
            description,
            value,
            directives,
            location: Some(location),
        })
    }

    /// Parses `Description? input Name Directives? { InputValueDefinition* }?`.
    pub fn parse_input_object_definition(
        &mut self,
    ) -> Result<InputObjectDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::INPUT)?;
        let name = self.parse_name()?;
        let directives = self.parse_optional_directives(ConstContext::TypeSystemDirective)?;

        let mut fields = Vec::new();
        if self.peek_is(GraphQLTokenKind::CurlyBraceOpen)? {
            let opened_at = self.advance()?.location();
            while !self.at_list_end(GraphQLTokenKind::CurlyBraceClose, opened_at)? {
                fields.push(self.parse_input_value_definition()?);
            }
        }

        Ok(InputObjectDefinition {
            description,
            name,
            directives,
            fields,
            location: Some(location),
        })
    }

    /// Parses `Description? directive @Name ArgumentsDefinition? repeatable?
    /// on DirectiveLocations`.
    pub fn parse_directive_definition(
        &mut self,
    ) -> Result<DirectiveDefinition, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.definition_location(&description)?;
        self.skip_keyword(keywords::DIRECTIVE)?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        let is_repeatable = self.peek_keyword(keywords::REPEATABLE)?;
        if is_repeatable {
            self.advance()?;
        }
        self.skip_keyword(keywords::ON)?;
        let directive_locations = self.parse_directive_locations()?;

        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            is_repeatable,
            directive_locations,
            location: Some(location),
        })
    }

    /// Parses `|? DirectiveLocation (| DirectiveLocation)*`.
    ///
    /// A name that is not a known executable or type-system location ends
    /// the list without an error; the name is left for the caller.
    pub fn parse_directive_locations(
        &mut self,
    ) -> Result<Vec<DirectiveLocation>, GraphQLParseError> {
        self.skip(GraphQLTokenKind::Pipe)?;

        let mut locations = Vec::new();
        loop {
            let token = self.peek()?;
            if token.kind != GraphQLTokenKind::Name {
                break;
            }
            let Some(location) = DirectiveLocation::from_name(token.value) else {
                log::trace!(
                    "`{}` is not a directive location; ending location list",
                    token.value_str(),
                );
                break;
            };
            self.advance()?;
            locations.push(location);
            if !self.skip(GraphQLTokenKind::Pipe)? {
                break;
            }
        }
        Ok(locations)
    }

    /// Parses `extend <type definition>`.
    pub fn parse_type_extension(&mut self) -> Result<TypeExtension, GraphQLParseError> {
        let description = self.take_description()?;
        let location = self.peek()?.location();
        reject_extension_description(description, "type extension", location)?;
        self.skip_keyword(keywords::EXTEND)?;
        let definition = self.parse_type_definition()?;
        Ok(TypeExtension {
            definition,
            location: Some(location),
        })
    }

    // =========================================================================
    // Import sub-grammar
    // =========================================================================

    /// Parses every leading block string whose first word is `tanka_import`.
    fn parse_leading_imports(&mut self) -> Result<Vec<Import>, GraphQLParseError> {
        let mut imports = Vec::new();

        loop {
            let token = self.peek()?;
            if token.kind != GraphQLTokenKind::BlockStringValue
                || !starts_with_import_keyword(token.value)
            {
                break;
            }
            self.advance()?;

            let block_location = token.location();
            log::trace!("parsing `tanka_import` block at {block_location}");

            // Content starts right after the opening `"""`.
            let content_origin = Location::new(block_location.line, block_location.column + 3);
            let lexer = GraphQLLexer::new(token.value).starting_at(content_origin);
            let mut inner = GraphQLParser::from_lexer(lexer).with_options(self.options);

            let parsed = inner.parse_import_statements().map_err(|mut error| {
                error.add_note_with_location(
                    "In the `tanka_import` block string starting here",
                    block_location,
                );
                error
            })?;
            imports.extend(parsed);
        }

        if !imports.is_empty() {
            log::debug!("parsed {} import(s)", imports.len());
        }
        Ok(imports)
    }

    /// Parses `Import+` up to the end of the (inner) input.
    fn parse_import_statements(&mut self) -> Result<Vec<Import>, GraphQLParseError> {
        let mut imports = vec![self.parse_import()?];
        while self.peek_keyword(keywords::TANKA_IMPORT)? {
            imports.push(self.parse_import()?);
        }

        let token = self.peek()?;
        if token.kind != GraphQLTokenKind::End {
            return Err(unexpected(token, &["`tanka_import`", "end of block string"]));
        }
        Ok(imports)
    }

    /// Parses `tanka_import Name* from StringValue`.
    ///
    /// An import without names imports every type from the given path.
    pub fn parse_import(&mut self) -> Result<Import, GraphQLParseError> {
        let location = self.peek()?.location();
        self.skip_keyword(keywords::TANKA_IMPORT)?;

        let mut types = Vec::new();
        while self.peek_is(GraphQLTokenKind::Name)? && !self.peek_keyword(keywords::FROM)? {
            types.push(self.parse_name()?);
        }
        self.skip_keyword(keywords::FROM)?;
        let from = self.parse_string_value()?;

        Ok(Import {
            types: if types.is_empty() { None } else { Some(types) },
            from,
            location: Some(location),
        })
    }
}

// =============================================================================
// Error helpers
// =============================================================================

/// Builds the error for a token that matches none of `expected`.
fn unexpected(token: GraphQLToken<'_>, expected: &[&str]) -> GraphQLParseError {
    let expected_list = describe_expected(expected);
    let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();

    if token.kind == GraphQLTokenKind::End {
        return GraphQLParseError::new(
            format!("Expected {expected_list}, found end of input"),
            token.location(),
            GraphQLParseErrorKind::UnexpectedEnd { expected },
        );
    }

    let found = token.describe();
    GraphQLParseError::new(
        format!("Expected {expected_list}, found {found}"),
        token.location(),
        GraphQLParseErrorKind::UnexpectedToken { expected, found },
    )
}

/// Builds the error for a position that requires one of `keywords`.
fn expected_keyword(token: GraphQLToken<'_>, keywords: &[&str]) -> GraphQLParseError {
    let quoted: Vec<String> = keywords.iter().map(|k| format!("`{k}`")).collect();
    if token.kind != GraphQLTokenKind::Name {
        let quoted: Vec<&str> = quoted.iter().map(String::as_str).collect();
        return unexpected(token, &quoted);
    }

    let found = token.value_str().into_owned();
    let quoted_refs: Vec<&str> = quoted.iter().map(String::as_str).collect();
    GraphQLParseError::new(
        format!("Expected {}, found `{found}`", describe_expected(&quoted_refs)),
        token.location(),
        GraphQLParseErrorKind::UnexpectedKeyword {
            expected: quoted,
            found,
        },
    )
}

fn describe_expected(expected: &[&str]) -> String {
    match expected {
        [] => "a token".to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("one of {}, or {last}", init.join(", ")),
    }
}

/// Fails when a description precedes an extension. The error points at the
/// description, or at `extend_location` if it has none.
fn reject_extension_description(
    description: Option<StringValue>,
    construct: &str,
    extend_location: Location,
) -> Result<(), GraphQLParseError> {
    let Some(description) = description else {
        return Ok(());
    };
    let mut error = GraphQLParseError::new(
        format!("Description not allowed on a {construct}"),
        description.location.unwrap_or(extend_location),
        GraphQLParseErrorKind::DescriptionNotAllowed {
            construct: construct.to_string(),
        },
    );
    error.add_help("Move the description to the original definition");
    Err(error)
}

/// `true` if the block string content's first word is exactly `tanka_import`.
fn starts_with_import_keyword(content: &[u8]) -> bool {
    let Some(rest) = content.trim_ascii_start().strip_prefix(keywords::TANKA_IMPORT) else {
        return false;
    };
    !rest.first().is_some_and(|&byte| keywords::is_name_continue(byte))
}

fn is_type_system_keyword(name: &[u8]) -> bool {
    keywords::is_type_definition_keyword(name)
        || name == keywords::SCHEMA
        || name == keywords::DIRECTIVE
        || name == keywords::EXTEND
}

impl std::fmt::Debug for GraphQLParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLParser")
            .field("current", &self.current)
            .field("options", &self.options)
            .field("recursion_depth", &self.recursion_depth)
            .finish_non_exhaustive()
    }
}

