//! Owned document tree with markup parsing and serialization.

use std::{fmt, io, str::FromStr};

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Reader, Writer,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{XmlError, XmlResult};

/// One element of a parsed document.
///
/// Only element structure, attributes and the leading text of each element are
/// kept. Comments, processing instructions and text following a child element
/// are discarded while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
}

/// Formatting applied when a node tree is written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Spaces per nesting level; `0` writes everything on one line.
    pub indent: usize,
    /// Emit an `<?xml ...?>` declaration before the root element.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

impl WriteOptions {
    /// Single-line output without a declaration.
    pub fn compact() -> Self {
        Self {
            indent: 0,
            declaration: false,
        }
    }
}

impl Node {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder variant of [`Node::set_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Builder variant of [`Node::set_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Element name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Text content preceding the first child element.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter().position(|(key, _)| *key == name) {
            Some(index) => self.attributes[index].1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append `child` and return a handle to it.
    pub fn append(&mut self, child: Node) -> &mut Node {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Append a new empty child element and return a handle to it.
    pub fn sub_element(&mut self, tag: impl Into<String>) -> &mut Node {
        self.append(Node::new(tag))
    }

    /// First descendant matching a relative path such as `players/player`.
    pub fn find(&self, path: &str) -> Option<&Node> {
        self.find_all(path).into_iter().next()
    }

    /// Every descendant matching a relative path, in document order.
    ///
    /// Steps are separated by `/`; empty steps and `.` are ignored and `*`
    /// matches any tag. A path without steps matches the node itself.
    pub fn find_all(&self, path: &str) -> Vec<&Node> {
        let mut matched = vec![self];
        for step in path.split('/').filter(|step| !step.is_empty() && *step != ".") {
            matched = matched
                .into_iter()
                .flat_map(|node| {
                    node.children
                        .iter()
                        .filter(move |child| step == "*" || child.tag == step)
                })
                .collect();
            if matched.is_empty() {
                break;
            }
        }
        matched
    }

    /// Parse markup containing exactly one root element.
    pub fn parse(markup: &str) -> XmlResult<Self> {
        trace!(len = markup.len(), "parsing markup");
        let mut reader = Reader::from_str(markup);
        let mut open: Vec<Node> = Vec::new();
        let mut root: Option<Node> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => open.push(Self::from_start(&start)?),
                Ok(Event::Empty(start)) => {
                    let node = Self::from_start(&start)?;
                    close_into(&mut open, &mut root, node)?;
                }
                Ok(Event::End(_)) => {
                    let node = open
                        .pop()
                        .ok_or_else(|| malformed("closing tag without an open element"))?;
                    close_into(&mut open, &mut root, node.finish())?;
                }
                Ok(Event::Text(text)) => {
                    let value = text.unescape().map_err(malformed)?;
                    push_text(&mut open, &value)?;
                }
                Ok(Event::CData(data)) => {
                    push_text(&mut open, &String::from_utf8_lossy(&data))?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => return Err(malformed(err)),
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(malformed(format!("element <{}> is never closed", unclosed.tag)));
        }
        root.ok_or_else(|| malformed("no root element"))
    }

    /// Serialize on a single line without a declaration.
    pub fn to_xml_string(&self) -> XmlResult<String> {
        self.write_xml(&WriteOptions::compact())
    }

    /// Serialize with the given formatting.
    pub fn write_xml(&self, options: &WriteOptions) -> XmlResult<String> {
        let mut writer = if options.indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', options.indent)
        } else {
            Writer::new(Vec::new())
        };
        if options.declaration {
            emit(
                &mut writer,
                Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
            )?;
        }
        write_node(&mut writer, self)?;
        String::from_utf8(writer.into_inner()).map_err(|err| XmlError::Serialize(err.to_string()))
    }

    fn from_start(start: &BytesStart<'_>) -> XmlResult<Self> {
        let mut node = Node::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
        for attribute in start.attributes() {
            let attribute = attribute.map_err(malformed)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value().map_err(malformed)?.into_owned();
            node.attributes.push((key, value));
        }
        Ok(node)
    }

    fn finish(mut self) -> Self {
        let blank = self
            .text
            .as_deref()
            .map(|text| text.is_empty() || (!self.children.is_empty() && text.trim().is_empty()))
            .unwrap_or(false);
        if blank {
            self.text = None;
        }
        self
    }
}

impl FromStr for Node {
    type Err = XmlError;

    fn from_str(markup: &str) -> Result<Self, Self::Err> {
        Self::parse(markup)
    }
}

fn malformed(reason: impl fmt::Display) -> XmlError {
    XmlError::NotXml(format!("Was expecting well-formed markup: {reason}"))
}

fn close_into(open: &mut [Node], root: &mut Option<Node>, node: Node) -> XmlResult<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
    } else if root.is_some() {
        return Err(malformed("more than one root element"));
    } else {
        *root = Some(node);
    }
    Ok(())
}

fn push_text(open: &mut [Node], value: &str) -> XmlResult<()> {
    match open.last_mut() {
        Some(node) if node.children.is_empty() => {
            node.text.get_or_insert_with(String::new).push_str(value);
        }
        Some(_) => {}
        None if value.trim().is_empty() => {}
        None => return Err(malformed("text outside of the root element")),
    }
    Ok(())
}

fn write_node<W: io::Write>(writer: &mut Writer<W>, node: &Node) -> XmlResult<()> {
    let mut start = BytesStart::new(node.tag.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let text = node.text.as_deref().filter(|text| !text.is_empty());
    if node.children.is_empty() && text.is_none() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if let Some(text) = text {
        emit(writer, Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(node.tag.as_str())))
}

fn emit<W: io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> XmlResult<()> {
    writer
        .write_event(event)
        .map_err(|err| XmlError::Serialize(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKET: &str = r#"<market>
  <config><draft>4</draft></config>
  <players>
    <player><name>Darek</name></player>
    <player><name>Sherri</name></player>
  </players>
</market>"#;

    #[test]
    fn parses_nested_elements_and_drops_layout_whitespace() -> anyhow::Result<()> {
        let market = Node::parse(MARKET)?;
        assert_eq!(market.tag(), "market");
        assert_eq!(market.text(), None);
        assert_eq!(market.children().len(), 2);
        assert_eq!(market.find("config/draft").and_then(Node::text), Some("4"));
        Ok(())
    }

    #[test]
    fn find_all_keeps_document_order() -> anyhow::Result<()> {
        let market = Node::parse(MARKET)?;
        let names: Vec<_> = market
            .find_all("./players/player/name")
            .into_iter()
            .filter_map(Node::text)
            .collect();
        assert_eq!(names, vec!["Darek", "Sherri"]);
        assert_eq!(market.find_all("players/*").len(), 2);
        assert!(market.find_all("games/game").is_empty());
        assert_eq!(market.find_all(".").len(), 1);
        Ok(())
    }

    #[test]
    fn reads_attributes_and_entities() -> anyhow::Result<()> {
        let node = Node::parse("<character player='Regalia'>Dr. Strange &amp; Co</character>")?;
        assert_eq!(node.attribute("player"), Some("Regalia"));
        assert_eq!(node.attribute("date"), None);
        assert_eq!(node.text(), Some("Dr. Strange & Co"));
        Ok(())
    }

    #[test]
    fn rejects_markup_that_is_not_a_single_document() {
        for input in ["2", "", "<a><b></a>", "<a></a><b></b>", "<a>"] {
            match Node::parse(input) {
                Err(XmlError::NotXml(_)) => {}
                other => panic!("expected NotXml for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn writes_compact_markup_with_escaping() -> anyhow::Result<()> {
        let mut game = Node::new("game").with_attribute("date", "2024-03-04 19:12:23.123000");
        game.sub_element("participants")
            .append(Node::new("character").with_attribute("player", "Darek"))
            .set_text("Shadow <Thief>");
        game.sub_element("empty");

        let written = game.to_xml_string()?;
        assert_eq!(
            written,
            "<game date=\"2024-03-04 19:12:23.123000\"><participants>\
             <character player=\"Darek\">Shadow &lt;Thief&gt;</character>\
             </participants><empty/></game>"
        );
        assert_eq!(Node::parse(&written)?, game);
        Ok(())
    }

    #[test]
    fn indented_output_reads_back_identically() -> anyhow::Result<()> {
        let market = Node::parse(MARKET)?;
        let written = market.write_xml(&WriteOptions::default())?;
        assert!(written.starts_with("<?xml"));
        assert!(written.contains("\n  <config>"));
        assert_eq!(Node::parse(&written)?, market);
        Ok(())
    }

    #[test]
    fn set_attribute_replaces_existing_value() {
        let mut node = Node::new("character").with_attribute("player", "Miku");
        node.set_attribute("player", "Talos");
        assert_eq!(node.attributes().collect::<Vec<_>>(), vec![("player", "Talos")]);
    }
}
