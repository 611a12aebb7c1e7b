use crate::{Name, XmlElement, XmlNamespaces, XML_NAMESPACE};
use simplexml_nom::helper::escape_text;
use std::fmt;

// -----------------------------------------------------------------------------------------------

/// Renders the element and everything below it.
///
/// Namespace prefixes are resolved through the table of the element being rendered. With
/// `pretty_xml` set, an element is indented by one tab per ancestor and followed by a
/// newline.
///
/// # Panics
///
/// Panics if an element has both a value and child elements.
impl fmt::Display for XmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let namespaces = self.namespaces();
        self.render(f, &namespaces)
    }
}

impl XmlElement {
    fn render(&self, f: &mut fmt::Formatter<'_>, namespaces: &XmlNamespaces) -> fmt::Result {
        let data = self.0.borrow();
        assert!(
            data.value.is_empty() || data.children.is_empty(),
            "element has both a non empty value and children"
        );

        let (indent, newline) = if data.pretty_xml {
            ("\t".repeat(data.parents.len()), "\n")
        } else {
            (String::new(), "")
        };
        let tag = element_tag(&data.name, namespaces);

        write!(f, "{}{}<{}", data.declaration, indent, tag)?;
        for attr in data.attributes.iter() {
            write!(f, " {}=\"{}\"", attribute_tag(&attr.name, namespaces), attr.value)?;
        }
        write!(f, ">")?;

        if data.children.is_empty() {
            let value = escape_text(&data.value);
            if data.cdata {
                write!(f, "<![CDATA[{}]]>", value)?;
            } else {
                write!(f, "{}", value)?;
            }
        } else {
            write!(f, "{}", newline)?;
            for child in data.children.iter() {
                child.render(f, namespaces)?;
            }
            write!(f, "{}", indent)?;
        }

        write!(f, "</{}>{}", tag, newline)
    }
}

fn element_tag(name: &Name, namespaces: &XmlNamespaces) -> String {
    if name.space.is_empty() {
        return name.local.clone();
    }

    match namespaces.prefix(&name.space) {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.clone(),
    }
}

fn attribute_tag(name: &Name, namespaces: &XmlNamespaces) -> String {
    if name.space.is_empty() {
        return name.local.clone();
    }

    if name.space == XML_NAMESPACE {
        return format!("xml:{}", name.local);
    }

    match namespaces.prefix(&name.space) {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.to_string(),
    }
}

// -----------------------------------------------------------------------------------------------


// -----------------------------------------------------------------------------------------------
