use simplexml_nom::model::QName;
use std::fmt;

pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

pub const XMLNS: &str = "xmlns";

// -----------------------------------------------------------------------------------------------

/// Raw markup as recognized by the grammar, before namespace translation and unescaping.
#[derive(Debug, PartialEq)]
pub enum Markup<'a> {
    StartTag(StartTag<'a>),
    EndTag(QName<'a>),
    Text(&'a str),
    CData(&'a str),
    Comment(&'a str),
    PI(PI<'a>),
    Directive(&'a str),
}

// -----------------------------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub struct StartTag<'a> {
    pub name: QName<'a>,
    pub attributes: Vec<Attribute<'a>>,
    pub empty: bool,
}

impl<'a> From<(QName<'a>, Vec<Attribute<'a>>, bool)> for StartTag<'a> {
    fn from(value: (QName<'a>, Vec<Attribute<'a>>, bool)) -> Self {
        let (name, attributes, empty) = value;
        StartTag {
            name,
            attributes,
            empty,
        }
    }
}

// -----------------------------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub struct Attribute<'a> {
    pub name: QName<'a>,
    pub value: &'a str,
}

impl<'a> From<(QName<'a>, &'a str)> for Attribute<'a> {
    fn from(value: (QName<'a>, &'a str)) -> Self {
        let (name, value) = value;
        Attribute { name, value }
    }
}

// -----------------------------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub struct PI<'a> {
    pub target: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> From<(&'a str, Option<&'a str>)> for PI<'a> {
    fn from(value: (&'a str, Option<&'a str>)) -> Self {
        let (target, value) = value;
        PI { target, value }
    }
}

// -----------------------------------------------------------------------------------------------

/// A qualified name, the namespace is a URI once translated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Name {
    pub space: String,
    pub local: String,
}

impl Name {
    pub fn new(space: impl Into<String>, local: impl Into<String>) -> Self {
        Name {
            space: space.into(),
            local: local.into(),
        }
    }

    pub fn local(local: impl Into<String>) -> Self {
        Name::new("", local)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::local(value)
    }
}

impl From<(&str, &str)> for Name {
    fn from(value: (&str, &str)) -> Self {
        let (space, local) = value;
        Name::new(space, local)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.space.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{}:{}", self.space, self.local)
        }
    }
}

// -----------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attr {
    pub name: Name,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<Name>, value: impl Into<String>) -> Self {
        Attr {
            name: name.into(),
            value: value.into(),
        }
    }
}

// -----------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct StartElement {
    pub name: Name,
    pub attributes: Vec<Attr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EndElement {
    pub name: Name,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcInst {
    pub target: String,
    pub data: String,
}

// -----------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Start(StartElement),
    End(EndElement),
    CharData(String),
    Comment(String),
    ProcInst(ProcInst),
    Directive(String),
}

// -----------------------------------------------------------------------------------------------


// -----------------------------------------------------------------------------------------------
