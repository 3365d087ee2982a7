// Small lookup helpers over a parsed save document.
// Every lookup is independent: a missing node yields None, never an error.

use crate::nsave::SaveError;
use roxmltree::{Document, Node};
use std::path::Path;

/// Parse save text into a document with a root element
pub fn parse_document<'input>(
    text: &'input str,
    path: &Path,
) -> Result<Document<'input>, SaveError> {
    Document::parse(text).map_err(|source| match source {
        roxmltree::Error::NoRootNode => SaveError::MissingRoot(path.to_path_buf()),
        source => SaveError::Parse {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// First child element with the given tag
pub fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.has_tag_name(tag))
}

/// All child elements with the given tag, in document order
pub fn children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a
where
    'input: 'a,
{
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

/// Trimmed text of a node, None when empty
pub fn text(node: Node) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trimmed text of the first child with the given tag
pub fn child_text(node: Node, tag: &str) -> Option<String> {
    child(node, tag).and_then(text)
}

/// Unsigned child value; absent or malformed numbers read as 0
pub fn child_u64(node: Node, tag: &str) -> u64 {
    child_text(node, tag)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Trimmed attribute value, None when absent or empty
pub fn attr(node: Node, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
