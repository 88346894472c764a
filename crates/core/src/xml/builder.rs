//! Builds element subtrees from nested tag/value descriptions.

use super::{aspect::XmlAspect, node::Node};

/// Content destined for one child tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single element holding this text.
    Scalar(String),
    /// A single element whose children are described by the entries.
    Nested(Vec<(String, Value)>),
    /// One sibling element per item, all sharing the same tag.
    Repeated(Vec<Value>),
}

impl Value {
    /// Text content from any displayable value.
    pub fn scalar(value: impl ToString) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Child element described by `(tag, value)` entries.
    pub fn nested<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Nested(
            entries
                .into_iter()
                .map(|(tag, value)| (tag.as_ref().to_string(), value))
                .collect(),
        )
    }

    /// Repeated scalars, e.g. one `<character>` per name.
    pub fn repeated<T, I>(items: I) -> Self
    where
        T: ToString,
        I: IntoIterator<Item = T>,
    {
        Self::Repeated(items.into_iter().map(Self::scalar).collect())
    }
}

/// Append one child per entry to `parent`, recursing into nested values.
///
/// Returns `parent` so calls can be chained.
pub fn add_sub_elements<K, I>(parent: &mut Node, entries: I) -> &mut Node
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, Value)>,
{
    for (tag, value) in entries {
        add_value(parent, tag.as_ref(), value);
    }
    parent
}

/// Append the written form of every entity to `parent`.
pub fn add_aspect_sub_elements<'a, T, I>(parent: &mut Node, kids: I) -> &mut Node
where
    T: XmlAspect + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for kid in kids {
        parent.append(kid.write_to());
    }
    parent
}

fn add_value(parent: &mut Node, tag: &str, value: Value) {
    match value {
        Value::Scalar(text) => parent.sub_element(tag).set_text(text),
        Value::Nested(entries) => {
            add_sub_elements(parent.sub_element(tag), entries);
        }
        Value::Repeated(items) => {
            for item in items {
                add_value(parent, tag, item);
            }
        }
    }
}
