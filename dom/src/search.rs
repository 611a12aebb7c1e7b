use crate::{Attr, Name, XmlElement};
use std::iter;
use std::ops::Deref;

// -----------------------------------------------------------------------------------------------

/// Elements found by local name, namespace ignored.
///
/// Each [`NameSearch::by_name`] looks at any depth below the elements of the previous
/// result, so chained calls read like a path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameSearch(Vec<XmlElement>);

impl NameSearch {
    pub fn by_name(&self, local: &str) -> NameSearch {
        self.iter()
            .flat_map(|v| v.all_children())
            .filter(|v| v.0.borrow().name.local == local)
            .collect()
    }

    pub fn one(&self) -> Option<XmlElement> {
        self.first().cloned()
    }
}

impl Deref for NameSearch {
    type Target = [XmlElement];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl From<Vec<XmlElement>> for NameSearch {
    fn from(value: Vec<XmlElement>) -> Self {
        NameSearch(value)
    }
}

impl FromIterator<XmlElement> for NameSearch {
    fn from_iter<T: IntoIterator<Item = XmlElement>>(iter: T) -> Self {
        NameSearch(iter.into_iter().collect())
    }
}

impl IntoIterator for NameSearch {
    type Item = XmlElement;
    type IntoIter = std::vec::IntoIter<XmlElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// -----------------------------------------------------------------------------------------------

/// Elements matched by qualified name or by attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Search(Vec<XmlElement>);

impl Search {
    /// Direct children of each element whose name equals `name`.
    pub fn match_name(&self, name: impl Into<Name>) -> Search {
        let name = name.into();
        self.iter()
            .flat_map(|v| v.children())
            .filter(|v| v.has_name(&name))
            .collect()
    }

    /// Elements at any depth below each element whose name equals `name`.
    pub fn match_name_deep(&self, name: impl Into<Name>) -> Search {
        let name = name.into();
        self.iter()
            .flat_map(|v| v.all_children())
            .filter(|v| v.has_name(&name))
            .collect()
    }

    /// Elements carrying an attribute with the same name and value as `attr`.
    pub fn match_attr(&self, attr: &Attr) -> Search {
        self.iter().filter(|v| v.has_attribute(attr)).cloned().collect()
    }

    /// Like [`Search::match_attr`], also keeping matches at any depth below each element.
    pub fn match_attr_deep(&self, attr: &Attr) -> Search {
        self.iter()
            .flat_map(|v| iter::once(v.clone()).chain(v.all_children()))
            .filter(|v| v.has_attribute(attr))
            .collect()
    }

    pub fn one(&self) -> Option<XmlElement> {
        self.first().cloned()
    }
}

impl Deref for Search {
    type Target = [XmlElement];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl From<Vec<XmlElement>> for Search {
    fn from(value: Vec<XmlElement>) -> Self {
        Search(value)
    }
}

impl FromIterator<XmlElement> for Search {
    fn from_iter<T: IntoIterator<Item = XmlElement>>(iter: T) -> Self {
        Search(iter.into_iter().collect())
    }
}

impl IntoIterator for Search {
    type Item = XmlElement;
    type IntoIter = std::vec::IntoIter<XmlElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// -----------------------------------------------------------------------------------------------

/// Attributes filtered by local name or value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSearch(Vec<Attr>);

impl AttributeSearch {
    /// Attributes whose local name equals `local`, namespace ignored.
    pub fn by_name(&self, local: &str) -> AttributeSearch {
        self.iter().filter(|v| v.name.local == local).cloned().collect()
    }

    pub fn by_value(&self, value: &str) -> AttributeSearch {
        self.iter().filter(|v| v.value == value).cloned().collect()
    }

    pub fn one(&self) -> Option<Attr> {
        self.first().cloned()
    }
}

impl Deref for AttributeSearch {
    type Target = [Attr];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl From<Vec<Attr>> for AttributeSearch {
    fn from(value: Vec<Attr>) -> Self {
        AttributeSearch(value)
    }
}

impl FromIterator<Attr> for AttributeSearch {
    fn from_iter<T: IntoIterator<Item = Attr>>(iter: T) -> Self {
        AttributeSearch(iter.into_iter().collect())
    }
}

// -----------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> XmlElement {
        let root = XmlElement::new("root");

        let foo = root.add_child("foo");
        let foo_0 = foo.add_child("foo_0");
        foo_0.add_child("foo_0_0");
        foo_0.add_child("foo_0_1");
        foo_0.add_child("foo_0_1");
        let foo_1 = foo.add_child("foo_1");
        foo_1.add_child("foo_1_0");
        foo_1.add_child("foo_1_1");

        root.add_child("bar");
        root
    }

    #[test]
    fn test_name_search() {
        let s = tags().name_search();

        assert_eq!(NameSearch::default(), s.by_name("Foo"));
        assert_eq!(None, s.by_name("Foo").one());

        assert_eq!(1, s.by_name("foo").len());
        assert_eq!(1, s.by_name("foo").by_name("foo_0").len());

        let res = s.by_name("foo").by_name("foo_0").by_name("foo_0_1");
        assert_eq!(2, res.len());
        assert_eq!(Some(res[0].clone()), res.one());
        assert_ne!(res[0], res[1]);
    }

    #[test]
    fn test_name_search_ignores_namespace() {
        let root = XmlElement::new("root");
        let a = root.add_child(("urn:a", "item"));
        let b = root.add_child("item");

        assert_eq!(NameSearch::from(vec![a, b]), root.name_search().by_name("item"));
    }

    #[test]
    fn test_match_name() {
        let foo = XmlElement::new("Foo");
        let s = foo.search();

        assert!(s.match_name("Bar").is_empty());
        assert_eq!(None, s.match_name("Foo2").one());

        let bar_0 = foo.add_child("Bar");
        let bar_1 = foo.add_child("Bar");
        assert_eq!(2, s.match_name("Bar").len());
        assert_eq!(2, s.match_name_deep("Bar").len());

        let bar_0_0 = bar_0.add_child("Bar");
        assert_eq!(Search::from(vec![bar_0.clone(), bar_1.clone()]), s.match_name("Bar"));
        assert_eq!(
            Search::from(vec![bar_0, bar_0_0, bar_1]),
            s.match_name_deep("Bar")
        );

        assert!(s.match_name(("urn:bar", "Bar")).is_empty());
    }

    #[test]
    fn test_match_name_chain() {
        let job = XmlElement::new("Job");
        let result = job.add_child("result");
        let id = result.add_child("id");
        job.add_child("id");

        let res = job.search().match_name("result").match_name("id");
        assert_eq!(Some(id), res.one());
    }

    #[test]
    fn test_match_attr() {
        let foo = XmlElement::new("Foo").add_attribute(Attr::new("bar", "baz"));
        let s = foo.search();

        assert_eq!(1, s.match_attr(&Attr::new("bar", "baz")).len());
        assert!(s.match_attr(&Attr::new("bar", "notbaz")).is_empty());
        assert!(s.match_attr(&Attr::new(("urn:x", "bar"), "baz")).is_empty());

        let child = foo.add_child("Bar").add_attribute(Attr::new("bar", "baz"));
        assert_eq!(Search::from(vec![foo.clone()]), s.match_attr(&Attr::new("bar", "baz")));
        assert_eq!(
            Search::from(vec![foo.clone(), child.clone()]),
            s.match_attr_deep(&Attr::new("bar", "baz"))
        );
    }

    #[test]
    fn test_match_attr_without_attributes() {
        let foo = XmlElement::new("Foo");
        let child = foo.add_child("Bar").add_attribute(Attr::new("id", "1"));
        foo.add_child("Bar");

        assert!(foo.search().match_attr(&Attr::new("id", "1")).is_empty());
        assert_eq!(Some(child), foo.search().match_attr_deep(&Attr::new("id", "1")).one());
    }

    #[test]
    fn test_attribute_search() {
        let s = AttributeSearch::from(vec![
            Attr::new(("ns1", "foo"), "fooval"),
            Attr::new("foo2", "foo2val"),
            Attr::new("foo2", "foo2val2"),
        ]);

        assert_eq!(AttributeSearch::default(), s.by_name("Foo"));
        assert_eq!(None, s.by_name("Foo").one());
        assert_eq!(1, s.by_name("foo").len());
        assert_eq!(2, s.by_name("foo2").len());
        assert_eq!(
            Some(Attr::new("foo2", "foo2val2")),
            s.by_name("foo2").by_value("foo2val2").one()
        );
    }

    #[test]
    fn test_element_attribute_search() {
        let m = XmlElement::new("Catalog")
            .add_namespace("b", "api.books.localhost")
            .add_attribute(Attr::new("id", "1"));

        assert_eq!(2, m.attribute_search().len());
        assert_eq!(
            Some("api.books.localhost".to_string()),
            m.attribute_search().by_name("b").one().map(|v| v.value)
        );
    }
}

// -----------------------------------------------------------------------------------------------
