use crate::error::{self, Error};
use crate::{NamespacePrefix, XmlElement};
use simplexml_parser::model::{Token, XMLNS};
use simplexml_parser::Tokenizer;
use std::io::Read;
use std::str::FromStr;

// -----------------------------------------------------------------------------------------------

/// Deepest element nesting [`parse`] accepts, the root being level 1.
pub const MAX_DEPTH: usize = 256;

/// Builds an element tree from a complete document.
///
/// The declaration of the result is the last processing instruction of the document, or
/// empty. Text is trimmed and kept only when it directly follows a start tag, comments and
/// directives are dropped.
pub fn parse(input: &str) -> error::Result<XmlElement> {
    let result = build(input);
    if let Err(e) = &result {
        log::debug!("rejected document: {}", e);
    }
    result
}

impl XmlElement {
    pub fn from_reader(mut reader: impl Read) -> error::Result<Self> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        parse(&contents)
    }
}

impl FromStr for XmlElement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn build(input: &str) -> error::Result<XmlElement> {
    let mut root: Option<XmlElement> = None;
    let mut tree: Vec<XmlElement> = vec![];
    let mut declaration = String::new();
    let mut open = false;

    for token in Tokenizer::new(input) {
        let token = token?;
        log::trace!("{:?}", token);

        match token {
            Token::Start(start) => {
                if tree.len() >= MAX_DEPTH {
                    return Err(Error::TooDeep(MAX_DEPTH));
                }

                let element = match tree.last() {
                    Some(parent) => {
                        if !parent.value().is_empty() {
                            return Err(Error::MixedContent(parent.xpath()));
                        }
                        parent.add_child(start.name)
                    }
                    None if root.is_some() => return Err(Error::MalformedDocument),
                    None => {
                        let element = XmlElement::new(start.name);
                        root = Some(element.clone());
                        element
                    }
                };

                for attr in start.attributes {
                    if attr.name.space.eq_ignore_ascii_case(XMLNS) {
                        let prefix = NamespacePrefix::Named(attr.name.local.clone());
                        element.namespaces().insert(attr.value.as_str(), prefix);
                    } else if attr.name.local.eq_ignore_ascii_case(XMLNS) {
                        let prefix = NamespacePrefix::Default;
                        element.namespaces().insert(attr.value.as_str(), prefix);
                    }
                    element.add_attribute(attr);
                }

                tree.push(element);
                open = true;
            }
            Token::End(end) => {
                match tree.pop() {
                    Some(element) if element.has_name(&end.name) => {}
                    _ => return Err(Error::MalformedDocument),
                }
                open = false;
            }
            Token::CharData(text) => {
                if let Some(element) = tree.last().filter(|_| open) {
                    element.set_value(text.trim());
                }
            }
            Token::ProcInst(pi) => {
                declaration = format!("<?{} {}?>\n", pi.target, pi.data);
            }
            Token::Comment(_) | Token::Directive(_) => {}
        }
    }

    if !tree.is_empty() {
        return Err(Error::MalformedDocument);
    }

    let root = root.ok_or(Error::EmptyDocument)?;
    root.set_declaration(declaration);
    Ok(root)
}

// -----------------------------------------------------------------------------------------------


// -----------------------------------------------------------------------------------------------
