use crate::error::{self, Error};
use crate::search::{AttributeSearch, NameSearch, Search};
use crate::{node, Attr, Name, NamespacePrefix, XmlNamespaces, XmlNode};
use simplexml_parser::model::XMLNS;
use std::iter;
use std::rc::Rc;

pub const DEFAULT_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// -----------------------------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct ElementData {
    pub(crate) declaration: String,
    pub(crate) name: Name,
    pub(crate) attributes: Vec<Attr>,
    pub(crate) pretty_xml: bool,
    pub(crate) children: Vec<XmlElement>,
    pub(crate) value: String,
    pub(crate) cdata: bool,
    pub(crate) parents: Vec<Name>,
    pub(crate) namespaces: XmlNamespaces,
}

/// Handle to one element of a document tree.
///
/// Clones share the same node, equality is node identity. An element holds either a value
/// or child elements, never both.
#[derive(Clone, Debug)]
pub struct XmlElement(pub(crate) XmlNode<ElementData>);

impl PartialEq for XmlElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for XmlElement {}

impl XmlElement {
    /// Creates a root element with [`DEFAULT_DECLARATION`] and an empty namespace table.
    pub fn new(name: impl Into<Name>) -> Self {
        XmlElement(node(ElementData {
            declaration: DEFAULT_DECLARATION.to_string(),
            name: name.into(),
            attributes: vec![],
            pretty_xml: false,
            children: vec![],
            value: String::new(),
            cdata: false,
            parents: vec![],
            namespaces: XmlNamespaces::new(),
        }))
    }

    pub fn name(&self) -> Name {
        self.0.borrow().name.clone()
    }

    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    /// # Panics
    ///
    /// Panics if the element has child elements.
    pub fn set_value(&self, value: impl Into<String>) -> Self {
        {
            let mut data = self.0.borrow_mut();
            assert!(
                data.children.is_empty(),
                "tried setting value on an element with children"
            );
            data.value = value.into();
        }
        self.clone()
    }

    pub fn cdata(&self) -> bool {
        self.0.borrow().cdata
    }

    /// Wraps the value in a CDATA section when rendering.
    pub fn set_cdata(&self, cdata: bool) -> Self {
        self.0.borrow_mut().cdata = cdata;
        self.clone()
    }

    pub fn declaration(&self) -> String {
        self.0.borrow().declaration.clone()
    }

    pub fn set_declaration(&self, declaration: impl Into<String>) -> Self {
        self.0.borrow_mut().declaration = declaration.into();
        self.clone()
    }

    pub fn pretty_xml(&self) -> bool {
        self.0.borrow().pretty_xml
    }

    /// Sets the indentation flag on this element and on every element below it.
    ///
    /// The flag is stored per element. Children added later copy the flag of their parent
    /// at the time they are added.
    pub fn set_pretty_xml(&self, pretty_xml: bool) -> Self {
        self.0.borrow_mut().pretty_xml = pretty_xml;
        for v in self.all_children() {
            v.0.borrow_mut().pretty_xml = pretty_xml;
        }
        self.clone()
    }

    pub fn attributes(&self) -> Vec<Attr> {
        self.0.borrow().attributes.clone()
    }

    /// Value of the first attribute named `name`.
    pub fn attribute(&self, name: impl Into<Name>) -> Option<String> {
        let name = name.into();
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.clone())
    }

    pub fn add_attribute(&self, attr: Attr) -> Self {
        self.0.borrow_mut().attributes.push(attr);
        self.clone()
    }

    /// Declares `uri` with `prefix` on this element and registers the pair in the namespace
    /// table. An empty prefix declares the default namespace.
    pub fn add_namespace(&self, prefix: &str, uri: &str) -> Self {
        let name = if prefix.is_empty() {
            Name::local(XMLNS)
        } else {
            Name::new(XMLNS, prefix)
        };

        self.add_attribute(Attr::new(name, uri));
        self.namespaces().insert(uri, NamespacePrefix::from(prefix));
        self.clone()
    }

    pub fn namespaces(&self) -> XmlNamespaces {
        self.0.borrow().namespaces.clone()
    }

    pub fn parents(&self) -> Vec<Name> {
        self.0.borrow().parents.clone()
    }

    pub fn children(&self) -> Vec<XmlElement> {
        self.0.borrow().children.clone()
    }

    /// Appends a new child element and returns it.
    ///
    /// The child shares the namespace table and copies the indentation flag of this element.
    ///
    /// # Panics
    ///
    /// Panics if the element has a non empty value.
    pub fn add_child(&self, name: impl Into<Name>) -> XmlElement {
        let mut data = self.0.borrow_mut();
        assert!(
            data.value.is_empty(),
            "tried adding child on an element with non empty value"
        );

        let mut parents = data.parents.clone();
        parents.push(data.name.clone());

        let child = XmlElement(node(ElementData {
            declaration: String::new(),
            name: name.into(),
            attributes: vec![],
            pretty_xml: data.pretty_xml,
            children: vec![],
            value: String::new(),
            cdata: false,
            parents,
            namespaces: data.namespaces.clone(),
        }));
        data.children.push(child.clone());
        child
    }

    /// Removes `target` from the children of this element or of any element below it.
    pub fn remove_child(&self, target: &XmlElement) -> error::Result<()> {
        if self.remove_descendant(target) {
            log::trace!("removed {} from {}", target.xpath(), self.xpath());
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    fn remove_descendant(&self, target: &XmlElement) -> bool {
        let children = {
            let mut data = self.0.borrow_mut();
            if let Some(i) = data.children.iter().position(|v| v == target) {
                data.children.remove(i);
                return true;
            }
            data.children.clone()
        };

        children.iter().any(|v| v.remove_descendant(target))
    }

    /// Every element below this one, in document order.
    pub fn all_children(&self) -> Vec<XmlElement> {
        let mut all = vec![];
        for child in self.children() {
            all.push(child.clone());
            all.extend(child.all_children());
        }
        all
    }

    /// Path from the root, e.g. `foo.local:Foo/Bar`.
    pub fn xpath(&self) -> String {
        let data = self.0.borrow();
        data.parents
            .iter()
            .chain(iter::once(&data.name))
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn search(&self) -> Search {
        Search::from(vec![self.clone()])
    }

    pub fn name_search(&self) -> NameSearch {
        NameSearch::from(vec![self.clone()])
    }

    pub fn attribute_search(&self) -> AttributeSearch {
        AttributeSearch::from(self.attributes())
    }

    pub(crate) fn has_name(&self, name: &Name) -> bool {
        self.0.borrow().name == *name
    }

    pub(crate) fn has_attribute(&self, attr: &Attr) -> bool {
        self.0.borrow().attributes.iter().any(|v| v == attr)
    }
}

// -----------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> XmlElement {
        XmlElement::new(("foo.local", "Foo"))
            .add_namespace("n1", "foo.local")
            .set_declaration("")
    }

    #[test]
    fn test_new() {
        let m = XmlElement::new("Catalog");
        assert_eq!(Name::local("Catalog"), m.name());
        assert_eq!(DEFAULT_DECLARATION, m.declaration());
        assert_eq!("", m.value());
        assert!(!m.pretty_xml());
        assert!(!m.cdata());
        assert!(m.children().is_empty());
        assert!(m.parents().is_empty());
        assert!(m.namespaces().is_empty());
    }

    #[test]
    fn test_values() {
        let m = foo().set_value("bar");
        assert_eq!("bar", m.value());
        assert_eq!("foo.local:Foo", m.xpath());

        let m = m.set_cdata(true);
        assert!(m.cdata());
    }

    #[test]
    #[should_panic(expected = "non empty value")]
    fn test_add_child_on_value() {
        let m = foo().set_value("bar");
        m.add_child("baz");
    }

    #[test]
    #[should_panic(expected = "with children")]
    fn test_set_value_on_children() {
        let m = foo();
        m.add_child("Bar");
        m.set_value("baz");
    }

    #[test]
    fn test_children() {
        let m = foo();
        let bar = m.add_child("Bar");
        assert_eq!(vec![bar.clone()], m.children());
        assert_eq!(vec![Name::new("foo.local", "Foo")], bar.parents());
        assert_eq!("foo.local:Foo/Bar", bar.xpath());
        assert_eq!("", bar.declaration());
        assert!(bar.namespaces().ptr_eq(&m.namespaces()));

        let baz = bar.add_child(("urn:baz", "Baz"));
        assert_eq!(2, baz.parents().len());
        assert_eq!("foo.local:Foo/Bar/urn:baz:Baz", baz.xpath());
    }

    #[test]
    fn test_identity() {
        let m = XmlElement::new("Foo");
        let a = m.add_child("Bar");
        let b = m.add_child("Bar");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_attributes() {
        let m = XmlElement::new("Foo")
            .add_attribute(Attr::new("type", "bar"))
            .add_attribute(Attr::new(("ns1", "type2"), "baz"))
            .add_attribute(Attr::new("type", "qux"));

        assert_eq!(3, m.attributes().len());
        assert_eq!(Some("bar".to_string()), m.attribute("type"));
        assert_eq!(Some("baz".to_string()), m.attribute(("ns1", "type2")));
        assert_eq!(None, m.attribute("type2"));
    }

    #[test]
    fn test_add_namespace() {
        let m = XmlElement::new("Catalog")
            .add_namespace("b", "api.books.localhost")
            .add_namespace("", "foo.local");

        assert_eq!(
            vec![
                Attr::new((XMLNS, "b"), "api.books.localhost"),
                Attr::new(XMLNS, "foo.local"),
            ],
            m.attributes()
        );
        assert_eq!(
            Some(NamespacePrefix::Named("b".to_string())),
            m.namespaces().get("api.books.localhost")
        );
        assert_eq!(
            Some(NamespacePrefix::Default),
            m.namespaces().get("foo.local")
        );
    }

    #[test]
    fn test_all_children() {
        let m = XmlElement::new("root");
        let a = m.add_child("a");
        let a0 = a.add_child("a0");
        let a00 = a0.add_child("a00");
        let b = m.add_child("b");
        let b0 = b.add_child("b0");

        assert_eq!(vec![a, a0, a00, b, b0], m.all_children());
    }

    #[test]
    fn test_remove_child() {
        let m = XmlElement::new("root");
        let a = m.add_child("a");
        let b = m.add_child("b");
        let b0 = b.add_child("b0");
        let b1 = b.add_child("b1");

        m.remove_child(&b0).unwrap();
        assert_eq!(vec![a.clone(), b.clone(), b1.clone()], m.all_children());

        m.remove_child(&a).unwrap();
        assert_eq!(vec![b.clone(), b1.clone()], m.all_children());
    }

    #[test]
    fn test_remove_child_not_found() {
        let m = XmlElement::new("root");
        let a = m.add_child("a");
        let other = XmlElement::new("root").add_child("a");

        assert!(matches!(m.remove_child(&other), Err(Error::NotFound)));
        assert!(matches!(m.remove_child(&m), Err(Error::NotFound)));
        assert_eq!(vec![a.clone()], m.all_children());

        m.remove_child(&a).unwrap();
        assert!(matches!(m.remove_child(&a), Err(Error::NotFound)));
    }

    #[test]
    fn test_set_pretty_xml() {
        let m = XmlElement::new("root");
        let a = m.add_child("a");
        let a0 = a.add_child("a0");

        m.set_pretty_xml(true);
        assert!(m.pretty_xml());
        assert!(a.pretty_xml());
        assert!(a0.pretty_xml());

        // added after the call, copied from the parent
        let b = m.add_child("b");
        assert!(b.pretty_xml());

        // the flag is not inherited when a subtree changes it on its own
        a.set_pretty_xml(false);
        assert!(m.pretty_xml());
        assert!(!a0.pretty_xml());
        let a1 = a.add_child("a1");
        assert!(!a1.pretty_xml());
    }
}

// -----------------------------------------------------------------------------------------------
