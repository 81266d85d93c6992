//! Depth-first traversal of parsed documents.
//!
//! A [`DocumentWalker`] visits any [`NodeRef`](crate::ast::NodeRef) and its
//! children in a fixed order, calling every registered [`DocumentVisitor`]
//! on entry and exit. Traversal bookkeeping lives in a caller-owned context
//! that exposes a [`WalkState`] through [`WalkContext`].
//!
//! ```
//! use std::convert::Infallible;
//! use tanka_graphql_language::ast::NodeKind;
//! use tanka_graphql_language::ast::NodeRef;
//! use tanka_graphql_language::parse_executable_document;
//! use tanka_graphql_language::walker::DocumentVisitor;
//! use tanka_graphql_language::walker::DocumentWalker;
//! use tanka_graphql_language::walker::WalkContext;
//! use tanka_graphql_language::walker::WalkState;
//!
//! #[derive(Default)]
//! struct FieldNames(Vec<String>);
//!
//! impl<'doc> DocumentVisitor<'doc, WalkState<'doc>, Infallible> for FieldNames {
//!     fn enter_node(
//!         &mut self,
//!         _context: &mut WalkState<'doc>,
//!         node: NodeRef<'doc>,
//!     ) -> Result<(), Infallible> {
//!         if let NodeRef::FieldSelection(field) = node {
//!             self.0.push(field.name.value.clone());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let document = parse_executable_document("{ me { id name } }").unwrap();
//! let mut names = FieldNames::default();
//! let mut state = WalkState::new();
//! DocumentWalker::<_, Infallible>::new(Vec::new(), &mut state)
//!     .with_visitor(&mut names)
//!     .visit(Some((&document).into()))
//!     .unwrap();
//! assert_eq!(names.0, ["me", "id", "name"]);
//! assert!(state.current().is_none());
//! ```

mod document_visitor;
mod document_walker;
mod walk_state;

pub use document_visitor::DocumentVisitor;
pub use document_walker::DocumentWalker;
pub use walk_state::ArrayState;
pub use walk_state::WalkContext;
pub use walk_state::WalkState;
