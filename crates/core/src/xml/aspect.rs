//! Read/write contract shared by every entity with a document encoding.

use std::borrow::Cow;

use super::{
    error::{XmlError, XmlResult},
    node::Node,
};
use crate::util::is_str_valid;

/// Something an entity can be read from: a parsed node or raw markup.
#[derive(Debug, Clone, Copy)]
pub enum XmlSource<'a> {
    /// An element that has already been parsed.
    Node(&'a Node),
    /// Markup that still needs parsing.
    Markup(&'a str),
}

impl<'a> XmlSource<'a> {
    /// Parse markup if necessary and hand back the root element.
    pub fn into_node(self) -> XmlResult<Cow<'a, Node>> {
        match self {
            Self::Node(node) => Ok(Cow::Borrowed(node)),
            Self::Markup(markup) => Node::parse(markup).map(Cow::Owned),
        }
    }
}

impl<'a> From<&'a Node> for XmlSource<'a> {
    fn from(node: &'a Node) -> Self {
        Self::Node(node)
    }
}

impl<'a> From<&'a str> for XmlSource<'a> {
    fn from(markup: &'a str) -> Self {
        Self::Markup(markup)
    }
}

impl<'a> From<&'a String> for XmlSource<'a> {
    fn from(markup: &'a String) -> Self {
        Self::Markup(markup.as_str())
    }
}

/// An entity that can be read from and written to a document element.
pub trait XmlAspect: Sized {
    /// Build the entity from its element, failing on the first problem.
    fn read_from(node: &Node) -> XmlResult<Self>;

    /// Produce a fresh element describing the entity.
    fn write_to(&self) -> Node;

    /// Read from either a parsed node or markup text.
    fn from_xml<'a>(source: impl Into<XmlSource<'a>>) -> XmlResult<Self> {
        let node = source.into().into_node()?;
        Self::read_from(&node)
    }

    /// Replace every field with values read from `node`.
    ///
    /// `self` is left untouched when reading fails.
    fn reload_from(&mut self, node: &Node) -> XmlResult<()> {
        *self = Self::read_from(node)?;
        Ok(())
    }
}

/// Text of a looked-up element after checking it is the expected one.
///
/// `context` becomes the [`XmlError::NotXml`] message when nothing was found;
/// a blank `context` falls back to a generic message.
pub fn element_text<'a>(
    found: Option<&'a Node>,
    expected_tag: &str,
    context: &str,
) -> XmlResult<&'a str> {
    let node = found.ok_or_else(|| {
        if is_str_valid(Some(context)) {
            XmlError::NotXml(context.to_string())
        } else {
            XmlError::NotXml(format!("Was expecting a {expected_tag} element, got nothing"))
        }
    })?;
    if node.tag() != expected_tag {
        return Err(XmlError::wrong_element(node.tag(), expected_tag));
    }
    Ok(node.text().unwrap_or_default())
}

/// Value of an attribute the reader cannot do without.
pub fn required_attribute<'a>(node: &'a Node, attribute: &str) -> XmlResult<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| XmlError::missing_attribute(attribute, node.tag()))
}

/// Fail with [`XmlError::WrongElement`] unless `node` carries `expected_tag`.
pub fn expect_tag(node: &Node, expected_tag: &str) -> XmlResult<()> {
    if node.tag() == expected_tag {
        Ok(())
    } else {
        Err(XmlError::wrong_element(node.tag(), expected_tag))
    }
}

/// Parse the text of `tag` as an integer.
pub fn parse_int(tag: &str, text: &str) -> XmlResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|err| XmlError::invalid_value(tag, text, err))
}
