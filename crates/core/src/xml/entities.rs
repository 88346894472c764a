//! Document encodings of the market entities.

use tracing::debug;

use crate::models::{format_date, parse_date, Game, GameParticipant, MarketConfig, Player};

use super::{
    aspect::{element_text, expect_tag, parse_int, required_attribute, XmlAspect},
    builder::{add_aspect_sub_elements, add_sub_elements, Value},
    error::{XmlError, XmlResult},
    node::Node,
    path::{follow_xpath, make_list_from},
    tags::{XmlAttribute, XmlElement},
};

impl XmlAspect for Player {
    fn read_from(node: &Node) -> XmlResult<Self> {
        expect_tag(node, XmlElement::Player.as_str())?;

        let name = element_text(
            node.find(XmlElement::Name.as_str()),
            XmlElement::Name.as_str(),
            "Was expecting a name element inside player",
        )?;
        let purse = element_text(
            node.find(XmlElement::Purse.as_str()),
            XmlElement::Purse.as_str(),
            "Was expecting a purse element inside player",
        )?;
        debug!(player = name, "reading player");

        Ok(Self {
            name: name.to_string(),
            purse: parse_int(XmlElement::Purse.as_str(), purse)?,
            characters: make_list_from(
                node,
                &[XmlElement::Characters, XmlElement::Character],
                None,
            )?,
            banished: make_list_from(
                node,
                &[XmlElement::Banished, XmlElement::Character],
                None,
            )?,
        })
    }

    fn write_to(&self) -> Node {
        let mut player = Node::new(XmlElement::Player.as_str());
        add_sub_elements(
            &mut player,
            [
                (XmlElement::Name, Value::scalar(&self.name)),
                (XmlElement::Purse, Value::scalar(self.purse)),
                (
                    XmlElement::Characters,
                    Value::nested([(XmlElement::Character, Value::repeated(&self.characters))]),
                ),
                (
                    XmlElement::Banished,
                    Value::nested([(XmlElement::Character, Value::repeated(&self.banished))]),
                ),
            ],
        );
        player
    }
}

fn config_value(root: &Node, tag: XmlElement) -> XmlResult<Option<i64>> {
    follow_xpath(root, &[XmlElement::Config, tag])
        .map(|found| {
            let text = element_text(
                Some(found),
                tag.as_str(),
                &format!("Got {} when looking for {} element", root.tag(), tag),
            )?;
            parse_int(tag.as_str(), text)
        })
        .transpose()
}

fn required_config_value(root: &Node, tag: XmlElement) -> XmlResult<i64> {
    config_value(root, tag)?.ok_or_else(|| {
        XmlError::NotXml(format!(
            "Got {} when looking for {} element",
            root.tag(),
            tag
        ))
    })
}

impl XmlAspect for MarketConfig {
    /// Accepts either a `<config>` element or any element containing one.
    fn read_from(node: &Node) -> XmlResult<Self> {
        debug!(root = node.tag(), "reading market configuration");
        Ok(Self {
            draft: required_config_value(node, XmlElement::InitialDraft)?,
            initial_purse: required_config_value(node, XmlElement::StartCoins)?,
            ante: required_config_value(node, XmlElement::GameAnte)?,
            buy_char: required_config_value(node, XmlElement::Buy)?,
            sell_char: config_value(node, XmlElement::Sell)?,
            banish_char: required_config_value(node, XmlElement::Banish)?,
        })
    }

    fn write_to(&self) -> Node {
        let mut entries = vec![
            (XmlElement::InitialDraft, Value::scalar(self.draft)),
            (XmlElement::StartCoins, Value::scalar(self.initial_purse)),
            (XmlElement::GameAnte, Value::scalar(self.ante)),
            (XmlElement::Buy, Value::scalar(self.buy_char)),
            (XmlElement::Banish, Value::scalar(self.banish_char)),
        ];
        if let Some(sell) = self.sell_char {
            entries.push((XmlElement::Sell, Value::scalar(sell)));
        }

        let mut config = Node::new(XmlElement::Config.as_str());
        add_sub_elements(&mut config, entries);
        config
    }
}

impl XmlAspect for GameParticipant {
    fn read_from(node: &Node) -> XmlResult<Self> {
        let character = element_text(
            Some(node),
            XmlElement::Character.as_str(),
            "Was expecting a character element",
        )?;
        let player = required_attribute(node, XmlAttribute::Player.as_str())?;
        Ok(Self::new(player, character))
    }

    fn write_to(&self) -> Node {
        Node::new(XmlElement::Character.as_str())
            .with_attribute(XmlAttribute::Player.as_str(), self.player.as_str())
            .with_text(self.character.as_str())
    }
}

impl XmlAspect for Game {
    fn read_from(node: &Node) -> XmlResult<Self> {
        let raw_date = required_attribute(node, XmlAttribute::Date.as_str())?;
        let date = parse_date(raw_date)
            .map_err(|err| XmlError::invalid_value(XmlAttribute::Date.as_str(), raw_date, err))?;
        debug!(date = raw_date, "reading game");

        let participants = follow_xpath(node, &[XmlElement::Game, XmlElement::Participants])
            .ok_or_else(|| {
                XmlError::NotXml(format!(
                    "Got {} when looking for {} element",
                    node.tag(),
                    XmlElement::Participants
                ))
            })?
            .find_all(XmlElement::Character.as_str())
            .into_iter()
            .map(GameParticipant::read_from)
            .collect::<XmlResult<Vec<_>>>()?;

        Ok(Self::new(date, participants))
    }

    fn write_to(&self) -> Node {
        let mut game = Node::new(XmlElement::Game.as_str())
            .with_attribute(XmlAttribute::Date.as_str(), format_date(&self.date));
        add_aspect_sub_elements(
            game.sub_element(XmlElement::Participants.as_str()),
            &self.participants,
        );
        game
    }
}
