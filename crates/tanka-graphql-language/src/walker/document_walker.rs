use crate::ast::NodeRef;
use crate::walker::ArrayState;
use crate::walker::DocumentVisitor;
use crate::walker::WalkContext;

/// Depth-first walker over a parsed document or any node within it.
///
/// Children are visited in a fixed order per node kind: the order their
/// fields appear in the grammar. Names and descriptions are plain data and
/// are not visited. Every visitor sees each node in registration order,
/// and the first visitor error aborts the walk and is returned from
/// [`visit()`](Self::visit). After an error the walk state still describes
/// the position where the walk stopped.
pub struct DocumentWalker<'a, 'doc, C, E> {
    visitors: Vec<&'a mut dyn DocumentVisitor<'doc, C, E>>,
    context: &'a mut C,
}

impl<'a, 'doc, C, E> DocumentWalker<'a, 'doc, C, E>
where
    C: WalkContext<'doc>,
{
    pub fn new(
        visitors: Vec<&'a mut dyn DocumentVisitor<'doc, C, E>>,
        context: &'a mut C,
    ) -> Self {
        Self { visitors, context }
    }

    /// Registers another visitor after the existing ones.
    pub fn with_visitor(mut self, visitor: &'a mut dyn DocumentVisitor<'doc, C, E>) -> Self {
        self.visitors.push(visitor);
        self
    }

    pub fn context(&self) -> &C {
        self.context
    }

    /// Walks `node` and everything beneath it. `None` is a no-op.
    pub fn visit(&mut self, node: Option<NodeRef<'doc>>) -> Result<(), E> {
        let Some(node) = node else {
            return Ok(());
        };
        self.enter(node)?;
        self.visit_children(node)?;
        self.exit(node)
    }

    fn enter(&mut self, node: NodeRef<'doc>) -> Result<(), E> {
        self.context.walk_state_mut().push_node(node);
        for visitor in self.visitors.iter_mut() {
            visitor.enter_node(self.context, node)?;
        }
        Ok(())
    }

    fn exit(&mut self, node: NodeRef<'doc>) -> Result<(), E> {
        for visitor in self.visitors.iter_mut() {
            visitor.exit_node(self.context, node)?;
        }
        self.context.walk_state_mut().pop_node();
        Ok(())
    }

    fn visit_one<T>(&mut self, node: &'doc T) -> Result<(), E>
    where
        &'doc T: Into<NodeRef<'doc>>,
    {
        self.visit(Some(node.into()))
    }

    fn visit_opt<T>(&mut self, node: Option<&'doc T>) -> Result<(), E>
    where
        &'doc T: Into<NodeRef<'doc>>,
    {
        self.visit(node.map(Into::into))
    }

    /// Visits each element of a child collection of `owner`, tracking the
    /// iteration in an [`ArrayState`].
    fn visit_list<T>(
        &mut self,
        owner: NodeRef<'doc>,
        field: &'static str,
        items: &'doc [T],
    ) -> Result<(), E>
    where
        &'doc T: Into<NodeRef<'doc>>,
    {
        if items.is_empty() {
            return Ok(());
        }
        self.context.walk_state_mut().push_array(ArrayState {
            index: 0,
            len: items.len(),
            owner,
            field,
        });
        for (index, item) in items.iter().enumerate() {
            self.context.walk_state_mut().set_array_index(index);
            self.visit(Some(item.into()))?;
        }
        self.context.walk_state_mut().pop_array();
        Ok(())
    }

    fn visit_children(&mut self, node: NodeRef<'doc>) -> Result<(), E> {
        match node {
            // Executable documents
            NodeRef::ExecutableDocument(document) => {
                self.visit_list(node, "operation_definitions", &document.operation_definitions)?;
                self.visit_list(node, "fragment_definitions", &document.fragment_definitions)
            }
            NodeRef::OperationDefinition(operation) => {
                self.visit_list(node, "variable_definitions", &operation.variable_definitions)?;
                self.visit_list(node, "directives", &operation.directives)?;
                self.visit_one(&operation.selection_set)
            }
            NodeRef::FragmentDefinition(fragment) => {
                self.visit_one(&fragment.type_condition)?;
                self.visit_list(node, "directives", &fragment.directives)?;
                self.visit_one(&fragment.selection_set)
            }
            NodeRef::VariableDefinition(definition) => {
                self.visit_one(&definition.variable)?;
                self.visit_one(&definition.type_)?;
                self.visit_opt(definition.default_value.as_ref())?;
                self.visit_list(node, "directives", &definition.directives)
            }
            NodeRef::DefaultValue(default_value) => self.visit_one(&default_value.value),
            NodeRef::SelectionSet(selection_set) => {
                self.visit_list(node, "selections", &selection_set.selections)
            }
            NodeRef::FieldSelection(field) => {
                self.visit_list(node, "arguments", &field.arguments)?;
                self.visit_list(node, "directives", &field.directives)?;
                self.visit_opt(field.selection_set.as_ref())
            }
            NodeRef::FragmentSpread(spread) => {
                self.visit_list(node, "directives", &spread.directives)
            }
            NodeRef::InlineFragment(inline) => {
                self.visit_opt(inline.type_condition.as_ref())?;
                self.visit_list(node, "directives", &inline.directives)?;
                self.visit_one(&inline.selection_set)
            }
            NodeRef::Directive(directive) => {
                self.visit_list(node, "arguments", &directive.arguments)
            }
            NodeRef::Argument(argument) => self.visit_one(&argument.value),

            // Values
            NodeRef::Variable(_)
            | NodeRef::IntValue(_)
            | NodeRef::FloatValue(_)
            | NodeRef::StringValue(_)
            | NodeRef::BooleanValue(_)
            | NodeRef::NullValue(_)
            | NodeRef::EnumValue(_) => Ok(()),
            NodeRef::ListValue(list) => self.visit_list(node, "values", &list.values),
            NodeRef::ObjectValue(object) => self.visit_list(node, "fields", &object.fields),
            NodeRef::ObjectField(field) => self.visit_one(&field.value),

            // Type references
            NodeRef::NamedType(_) => Ok(()),
            NodeRef::ListType(list) => self.visit_one(list.of_type.as_ref()),
            NodeRef::NonNullType(non_null) => self.visit_one(non_null.of_type.as_ref()),

            // Type-system documents
            NodeRef::TypeSystemDocument(document) => {
                self.visit_list(node, "imports", &document.imports)?;
                self.visit_list(node, "schema_definitions", &document.schema_definitions)?;
                self.visit_list(node, "type_definitions", &document.type_definitions)?;
                self.visit_list(node, "directive_definitions", &document.directive_definitions)?;
                self.visit_list(node, "schema_extensions", &document.schema_extensions)?;
                self.visit_list(node, "type_extensions", &document.type_extensions)
            }
            NodeRef::SchemaDefinition(schema) => {
                self.visit_list(node, "directives", &schema.directives)?;
                self.visit_list(node, "operations", &schema.operations)
            }
            NodeRef::SchemaExtension(extension) => {
                self.visit_list(node, "directives", &extension.directives)?;
                self.visit_list(node, "operations", &extension.operations)
            }
            NodeRef::RootOperationTypeDefinition(root) => self.visit_one(&root.named_type),
            NodeRef::ScalarDefinition(scalar) => {
                self.visit_list(node, "directives", &scalar.directives)
            }
            NodeRef::ObjectDefinition(object) => {
                self.visit_list(node, "interfaces", &object.interfaces)?;
                self.visit_list(node, "directives", &object.directives)?;
                self.visit_list(node, "fields", &object.fields)
            }
            NodeRef::InterfaceDefinition(interface) => {
                self.visit_list(node, "interfaces", &interface.interfaces)?;
                self.visit_list(node, "directives", &interface.directives)?;
                self.visit_list(node, "fields", &interface.fields)
            }
            NodeRef::UnionDefinition(union) => {
                self.visit_list(node, "directives", &union.directives)?;
                self.visit_list(node, "members", &union.members)
            }
            NodeRef::EnumDefinition(enum_definition) => {
                self.visit_list(node, "directives", &enum_definition.directives)?;
                self.visit_list(node, "values", &enum_definition.values)
            }
            NodeRef::EnumValueDefinition(definition) => {
                self.visit_one(&definition.value)?;
                self.visit_list(node, "directives", &definition.directives)
            }
            NodeRef::InputObjectDefinition(input) => {
                self.visit_list(node, "directives", &input.directives)?;
                self.visit_list(node, "fields", &input.fields)
            }
            NodeRef::FieldDefinition(field) => {
                self.visit_list(node, "arguments", &field.arguments)?;
                self.visit_one(&field.type_)?;
                self.visit_list(node, "directives", &field.directives)
            }
            NodeRef::InputValueDefinition(input_value) => {
                self.visit_one(&input_value.type_)?;
                self.visit_opt(input_value.default_value.as_ref())?;
                self.visit_list(node, "directives", &input_value.directives)
            }
            NodeRef::DirectiveDefinition(directive) => {
                self.visit_list(node, "arguments", &directive.arguments)
            }
            NodeRef::TypeExtension(extension) => self.visit_one(&extension.definition),
            NodeRef::Import(import) => self.visit_one(&import.from),
        }
    }
}
