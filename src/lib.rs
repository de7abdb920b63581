//! Render serialized Lexical rich-text documents to semantic HTML.
//!
//! A CMS rich-text field persists its content as a JSON editor state: a
//! tree of typed nodes. This crate parses that tree into a typed model
//! ([`DocumentNode`]) and renders it to HTML with a total, synchronous
//! tree-walk — malformed or unrecognized nodes degrade gracefully instead
//! of failing the document.
//!
//! ```
//! use lexical_html::{EditorState, Renderer};
//!
//! # fn main() -> Result<(), lexical_html::DocumentError> {
//! let state = EditorState::from_json(
//!     r#"{ "root": { "children": [
//!         { "type": "paragraph",
//!           "children": [{ "type": "text", "text": "Hello" }] }
//!     ] } }"#,
//! )?;
//! assert_eq!(Renderer::new().render_document(&state), "<p>Hello</p>");
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod format;
pub mod render;

pub use document::{
    DocumentError, DocumentNode, EditorState, HeadingTag, LinkFields, LinkType, ListTag, RootNode,
};
pub use format::TextFormat;
pub use render::{Renderer, render_nodes};
