//! A small mutable XML element tree.
//!
//! Documents are parsed with [`parse`] or [`XmlElement::from_reader`], edited through the
//! [`XmlElement`] handle, queried with [`Search`] and [`NameSearch`], and written back with
//! `to_string()`.

pub mod error;

mod element;
mod namespace;
mod reader;
mod render;
mod search;

pub use element::{XmlElement, DEFAULT_DECLARATION};
pub use namespace::{NamespacePrefix, XmlNamespaces};
pub use reader::{parse, MAX_DEPTH};
pub use search::{AttributeSearch, NameSearch, Search};
pub use simplexml_parser::model::{Attr, Name, XML_NAMESPACE};

use std::cell::RefCell;
use std::rc::Rc;

// -----------------------------------------------------------------------------------------------

pub type XmlNode<T> = Rc<RefCell<T>>;

pub(crate) fn node<T>(value: T) -> XmlNode<T> {
    Rc::new(RefCell::new(value))
}

// -----------------------------------------------------------------------------------------------
