//! Path based lookups over a [`Node`] tree.

use super::{
    error::{XmlError, XmlResult},
    node::Node,
};

/// Resolve the longest suffix of `path` that exists below `root`.
///
/// The full path is tried first, then the path without its first step, and so
/// on. This lets `["config", "draft"]` find the same `<draft>` element whether
/// `root` is the `<config>` element itself or any element containing it.
pub fn follow_xpath<'a, S: AsRef<str>>(root: &'a Node, path: &[S]) -> Option<&'a Node> {
    (0..path.len()).find_map(|skip| root.find(&join_path(&path[skip..])))
}

/// Collect text (or the value of `attribute`) from every node matching `path`.
///
/// An empty `path` selects the direct children of `node`. Missing text reads
/// as `""`; a matched node without the requested attribute fails with
/// [`XmlError::MissingAttribute`], so the result always lines up with the
/// matched nodes.
pub fn make_list_from<S: AsRef<str>>(
    node: &Node,
    path: &[S],
    attribute: Option<&str>,
) -> XmlResult<Vec<String>> {
    let found: Vec<&Node> = if path.is_empty() {
        node.children().iter().collect()
    } else {
        node.find_all(&join_path(path))
    };

    found
        .into_iter()
        .map(|item| match attribute {
            Some(name) => item
                .attribute(name)
                .map(str::to_string)
                .ok_or_else(|| XmlError::missing_attribute(name, item.tag())),
            None => Ok(item.text().unwrap_or_default().to_string()),
        })
        .collect()
}

fn join_path<S: AsRef<str>>(steps: &[S]) -> String {
    steps
        .iter()
        .map(|step| step.as_ref())
        .collect::<Vec<&str>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::tags::{XmlAttribute, XmlElement};

    fn market() -> Node {
        Node::parse(
            "<market><config><draft>2</draft><start>3</start></config>\
             <games><game date='a'><participants>\
             <character player='Darek'>Thor</character>\
             <character player='Sherri'>Monk</character>\
             <character player='Regalia'>Loki</character>\
             </participants></game></games></market>",
        )
        .expect("fixture parses")
    }

    #[test]
    fn resolves_from_the_document_or_the_config_element() {
        let market = market();
        let config = market.find("config").expect("config present");
        let path = [XmlElement::Config, XmlElement::InitialDraft];

        let from_market = follow_xpath(&market, &path).expect("draft via market");
        let from_config = follow_xpath(config, &path).expect("draft via config");
        assert_eq!(from_market, from_config);
        assert!(std::ptr::eq(from_market, from_config));
        assert_eq!(from_config.text(), Some("2"));
    }

    #[test]
    fn unresolvable_or_empty_paths_yield_nothing() {
        let market = market();
        assert!(follow_xpath(&market, &["config", "sell"]).is_none());
        assert!(follow_xpath::<&str>(&market, &[]).is_none());
    }

    #[test]
    fn prefers_the_longest_matching_suffix() {
        let nested =
            Node::parse("<market><start>9</start><config><start>3</start></config></market>")
                .expect("fixture parses");
        let found = follow_xpath(&nested, &["config", "start"]).expect("start resolves");
        assert_eq!(found.text(), Some("3"));
    }

    #[test]
    fn lists_text_or_attributes_in_order() -> anyhow::Result<()> {
        let market = market();
        let path = ["games", "game", "participants", "character"];

        assert_eq!(make_list_from(&market, &path, None)?, vec!["Thor", "Monk", "Loki"]);
        assert_eq!(
            make_list_from(&market, &path, Some(XmlAttribute::Player.as_str()))?,
            vec!["Darek", "Sherri", "Regalia"]
        );
        assert!(make_list_from(&market, &["players", "player"], None)?.is_empty());
        Ok(())
    }

    #[test]
    fn listing_an_absent_attribute_fails() {
        let participants = Node::parse(
            "<participants><character player='Darek'>Thor</character>\
             <character>Loki</character></participants>",
        )
        .expect("fixture parses");

        assert_eq!(
            make_list_from(&participants, &["character"], Some("player")),
            Err(XmlError::missing_attribute("player", "character"))
        );
    }

    #[test]
    fn empty_path_lists_direct_children() -> anyhow::Result<()> {
        let config = market().find("config").cloned().expect("config present");
        assert_eq!(make_list_from::<&str>(&config, &[], None)?, vec!["2", "3"]);
        Ok(())
    }
}
