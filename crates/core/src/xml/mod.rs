//! Document encoding of the market entities.
//!
//! Entities implement [`XmlAspect`]; the remaining modules provide the owned
//! [`Node`] tree and the path and builder helpers the readers and writers use.

pub mod aspect;
pub mod builder;
pub mod document;
mod entities;
pub mod error;
pub mod node;
pub mod path;
pub mod tags;

pub use aspect::{XmlAspect, XmlSource};
pub use builder::{add_aspect_sub_elements, add_sub_elements, Value};
pub use document::{load_document, save_document};
pub use error::{XmlError, XmlResult};
pub use node::{Node, WriteOptions};
pub use path::{follow_xpath, make_list_from};
pub use tags::{XmlAttribute, XmlElement};
