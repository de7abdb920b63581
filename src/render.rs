//! Server-side rendering of Lexical document trees to HTML.
//!
//! Converts parsed [`DocumentNode`] trees into semantic HTML:
//! - Text nodes with bold/italic/strikethrough wrapping
//! - Block containers (paragraph, heading, label, largeBody, quote)
//! - Ordered/unordered/check lists, including checkbox list items
//! - Custom links, with an internal-link placeholder
//! - Unknown node kinds are silently skipped
//!
//! Text content is trusted as pre-sanitized markup by default, matching the
//! contract of the upstream editor pipeline; [`Renderer::sanitizing`] runs
//! it through ammonia instead.

use crate::document::{DocumentNode, EditorState, LinkFields, LinkType, ListTag};
use crate::format::TextFormat;

/// Sanitize user-provided rich text, allowing only safe inline HTML.
///
/// Uses ammonia to strip dangerous tags/attributes while preserving
/// basic formatting tags (`<b>`, `<i>`, `<a>`, `<br>`, etc.).
fn sanitize_text(input: &str) -> String {
    ammonia::clean(input)
}

/// Escape a string for use in HTML attribute values and text content.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render a sequence of document nodes into a single HTML string, trusting
/// text content as pre-sanitized markup.
pub fn render_nodes(nodes: &[DocumentNode]) -> String {
    Renderer::new().render_nodes(nodes)
}

/// HTML renderer for parsed document trees.
///
/// The renderer is total: unrecognized node kinds and missing optional
/// fields degrade to "render nothing" or a placeholder, never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    sanitize: bool,
}

impl Renderer {
    /// Renderer that inserts text content as raw markup (trusted input).
    pub fn new() -> Self {
        Self { sanitize: false }
    }

    /// Renderer that cleans text content with ammonia before insertion,
    /// for callers that cannot rely on upstream sanitization.
    pub fn sanitizing() -> Self {
        Self { sanitize: true }
    }

    /// Render a whole persisted editor state.
    pub fn render_document(&self, state: &EditorState) -> String {
        self.render_nodes(&state.root.children)
    }

    /// Render a node sequence, concatenating outputs in input order.
    /// Nodes that render nothing are dropped, not emitted as placeholders.
    pub fn render_nodes(&self, nodes: &[DocumentNode]) -> String {
        nodes.iter().filter_map(|node| self.render_node(node)).collect()
    }

    /// Render a single node. Returns `None` for node kinds this renderer
    /// does not handle.
    pub fn render_node(&self, node: &DocumentNode) -> Option<String> {
        match node {
            DocumentNode::Text { text, format } => Some(self.render_text(text, *format)),
            DocumentNode::Paragraph { format, children } => {
                Some(self.render_aligned_block("p", format.as_deref(), children))
            }
            DocumentNode::Heading {
                tag,
                format,
                children,
            } => Some(self.render_aligned_block(tag.as_str(), format.as_deref(), children)),
            DocumentNode::Label { children } => Some(format!(
                "<p class=\"label\">{}</p>",
                self.render_children(children)
            )),
            DocumentNode::LargeBody { children } => Some(format!(
                "<p class=\"large-body\">{}</p>",
                self.render_children(children)
            )),
            DocumentNode::List {
                tag,
                list_type,
                children,
            } => Some(self.render_list(*tag, list_type, children)),
            DocumentNode::ListItem {
                checked,
                value,
                children,
            } => Some(self.render_list_item(*checked, *value, children)),
            DocumentNode::Quote { children } => Some(format!(
                "<blockquote>{}</blockquote>",
                self.render_children(children)
            )),
            DocumentNode::Link { fields, children } => Some(self.render_link(fields, children)),
            DocumentNode::Unknown => {
                tracing::debug!("skipping unrecognized node kind");
                None
            }
        }
    }

    /// Render a node's children, or a `<br>` when there are none, so empty
    /// block elements do not collapse.
    fn render_children(&self, children: &[DocumentNode]) -> String {
        if children.is_empty() {
            "<br>".to_string()
        } else {
            self.render_nodes(children)
        }
    }

    fn render_text(&self, text: &str, format: TextFormat) -> String {
        let mut out = if self.sanitize {
            sanitize_text(text)
        } else {
            text.to_string()
        };
        // Fixed wrapping order: bold innermost, strikethrough outermost.
        if format.is_bold() {
            out = format!("<strong>{out}</strong>");
        }
        if format.is_italic() {
            out = format!("<em>{out}</em>");
        }
        if format.is_strikethrough() {
            out = format!("<s>{out}</s>");
        }
        out
    }

    /// Block container with an optional text-alignment style.
    fn render_aligned_block(
        &self,
        tag: &str,
        align: Option<&str>,
        children: &[DocumentNode],
    ) -> String {
        let inner = self.render_children(children);
        match align.filter(|a| !a.is_empty()) {
            Some(align) => format!(
                "<{tag} style=\"text-align: {}\">{inner}</{tag}>",
                html_escape(align)
            ),
            None => format!("<{tag}>{inner}</{tag}>"),
        }
    }

    fn render_list(&self, tag: ListTag, list_type: &str, children: &[DocumentNode]) -> String {
        let inner = if children.is_empty() {
            "<br>".to_string()
        } else if list_type == "check" {
            // The editor omits `checked` entirely for unchecked items, so
            // inside a check list an absent flag means unchecked, not plain.
            children
                .iter()
                .filter_map(|child| self.render_check_list_child(child))
                .collect()
        } else {
            self.render_nodes(children)
        };
        let tag = tag.as_str();
        format!("<{tag} class=\"{}\">{inner}</{tag}>", html_escape(list_type))
    }

    fn render_check_list_child(&self, node: &DocumentNode) -> Option<String> {
        match node {
            DocumentNode::ListItem {
                checked,
                value,
                children,
            } => Some(self.render_list_item(Some(checked.unwrap_or(false)), *value, children)),
            other => self.render_node(other),
        }
    }

    fn render_list_item(
        &self,
        checked: Option<bool>,
        value: Option<u32>,
        children: &[DocumentNode],
    ) -> String {
        let inner = self.render_children(children);
        let value_attr = value.map(|v| format!(" value=\"{v}\"")).unwrap_or_default();
        match checked {
            // Checkbox items reflect state only: non-interactive and
            // non-focusable, with the state exposed via aria-checked.
            Some(checked) => {
                let (aria, state_class) = if checked {
                    ("true", "list-item-checkbox-checked")
                } else {
                    ("false", "list-item-checkbox-unchecked")
                };
                format!(
                    "<li role=\"checkbox\" aria-checked=\"{aria}\" tabindex=\"-1\"{value_attr} \
                     class=\"list-item-checkbox {state_class}\">{inner}</li>"
                )
            }
            None => format!("<li{value_attr}>{inner}</li>"),
        }
    }

    fn render_link(&self, fields: &LinkFields, children: &[DocumentNode]) -> String {
        if fields.link_type != LinkType::Custom {
            // Internal links need a document resolver this crate does not
            // have; render a visible placeholder instead of a dead anchor.
            return "<span>Internal link coming soon</span>".to_string();
        }
        let inner = self.render_children(children);
        let href = html_escape(fields.url.as_deref().unwrap_or(""));
        if fields.new_tab {
            format!("<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{inner}</a>")
        } else {
            format!("<a href=\"{href}\">{inner}</a>")
        }
    }
}
