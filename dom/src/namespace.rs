use crate::{node, XmlNode};
use std::collections::HashMap;

// -----------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamespacePrefix {
    /// Declared by a bare `xmlns`, elements in it render without a prefix.
    Default,
    Named(String),
}

impl From<&str> for NamespacePrefix {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            NamespacePrefix::Default
        } else {
            NamespacePrefix::Named(value.to_string())
        }
    }
}

impl NamespacePrefix {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NamespacePrefix::Default => None,
            NamespacePrefix::Named(v) => Some(v.as_str()),
        }
    }
}

// -----------------------------------------------------------------------------------------------

/// Namespace URI to prefix table of one document.
///
/// Cloning yields another handle to the same table. Every element created through
/// [`crate::XmlElement::add_child`] shares the table of its root.
#[derive(Clone, Debug)]
pub struct XmlNamespaces(XmlNode<HashMap<String, NamespacePrefix>>);

impl Default for XmlNamespaces {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlNamespaces {
    pub fn new() -> Self {
        XmlNamespaces(node(HashMap::new()))
    }

    pub fn get(&self, uri: &str) -> Option<NamespacePrefix> {
        self.0.borrow().get(uri).cloned()
    }

    /// Returns the prefix to render for `uri`, `None` for the default namespace or an
    /// unknown one.
    pub fn prefix(&self, uri: &str) -> Option<String> {
        self.get(uri).and_then(|v| v.as_str().map(String::from))
    }

    /// Binds `uri` to `prefix`, replacing and returning an earlier binding.
    pub fn insert(&self, uri: impl Into<String>, prefix: NamespacePrefix) -> Option<NamespacePrefix> {
        self.0.borrow_mut().insert(uri.into(), prefix)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn ptr_eq(&self, other: &XmlNamespaces) -> bool {
        std::rc::Rc::ptr_eq(&self.0, &other.0)
    }
}

// -----------------------------------------------------------------------------------------------


// -----------------------------------------------------------------------------------------------
