//! Errors raised while reading or writing market documents.

use thiserror::Error;

/// Convenience alias for results produced by the XML layer.
pub type XmlResult<T> = Result<T, XmlError>;

/// Failures surfaced by entity readers and the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The value handed in is not a usable document node.
    #[error("{0}")]
    NotXml(String),

    /// A node carries a different tag than the reader expected.
    #[error("Wanted tag {expected} but got tag {got}")]
    WrongElement {
        /// Tag found on the node.
        got: String,
        /// Tag the reader required.
        expected: String,
    },

    /// A required attribute is absent from an otherwise valid node.
    #[error("Missing attribute {attribute} on tag {tag}")]
    MissingAttribute {
        /// Name of the absent attribute.
        attribute: String,
        /// Tag of the node that should have carried it.
        tag: String,
    },

    /// Text was found but could not be converted to the expected type.
    #[error("invalid value {value:?} in {tag}: {reason}")]
    InvalidValue {
        /// Tag or attribute holding the value.
        tag: String,
        /// Raw text that failed to convert.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The writer could not emit the document.
    #[error("failed to serialize document: {0}")]
    Serialize(String),
}

impl XmlError {
    pub(crate) fn wrong_element(got: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::WrongElement {
            got: got.into(),
            expected: expected.into(),
        }
    }

    pub(crate) fn missing_attribute(attribute: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
            tag: tag.into(),
        }
    }

    pub(crate) fn invalid_value(
        tag: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            tag: tag.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
