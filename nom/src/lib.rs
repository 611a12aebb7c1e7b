pub mod helper;
pub mod model;
pub mod xmlchar;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{digit1, hex_digit1, satisfy};
use nom::combinator::{map, recognize};
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;

/// (#x20 | #x9 | #xD | #xA)+
///
/// [\[3\] S](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-S)
pub fn s(input: &str) -> IResult<&str, &str> {
    take_while1(xmlchar::is_whitespace)(input)
}

/// NameStartChar (NameChar)*
///
/// [\[5\] Name](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-Name)
pub fn name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(xmlchar::is_name_start_char),
        xmlchar::name_char_except0(""),
    ))(input)
}

/// Name - (Char* ':' Char*)
///
/// [\[4\] NCName](https://www.w3.org/TR/2009/REC-xml-names-20091208/#NT-NCName)
pub fn ncname(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c != ':' && xmlchar::is_name_start_char(c)),
        xmlchar::name_char_except0(":"),
    ))(input)
}

/// PrefixedName | UnprefixedName
///
/// [\[7\] QName](https://www.w3.org/TR/2009/REC-xml-names-20091208/#NT-QName)
pub fn qname(input: &str) -> IResult<&str, model::QName<'_>> {
    alt((
        map(prefixed_name, model::QName::from),
        map(ncname, model::QName::from),
    ))(input)
}

/// Prefix ':' LocalPart
///
/// [\[8\] PrefixedName](https://www.w3.org/TR/2009/REC-xml-names-20091208/#NT-PrefixedName)
fn prefixed_name(input: &str) -> IResult<&str, model::PrefixedName<'_>> {
    map(
        tuple((ncname, preceded(tag(":"), ncname))),
        model::PrefixedName::from,
    )(input)
}

/// EntityRef | CharRef
///
/// [\[67\] Reference](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-Reference)
pub fn reference(input: &str) -> IResult<&str, model::Reference<'_>> {
    alt((entity_ref, char_ref))(input)
}

/// '&#' [0-9]+ ';' | '&#x' [0-9a-fA-F]+ ';'
///
/// [\[66\] CharRef](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-CharRef)
fn char_ref(input: &str) -> IResult<&str, model::Reference<'_>> {
    alt((
        map(
            delimited(tag("&#x"), hex_digit1, tag(";")),
            model::Reference::hex,
        ),
        map(
            delimited(tag("&#"), digit1, tag(";")),
            model::Reference::digit,
        ),
    ))(input)
}

/// '&' Name ';'
///
/// [\[68\] EntityRef](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-EntityRef)
fn entity_ref(input: &str) -> IResult<&str, model::Reference<'_>> {
    map(
        delimited(tag("&"), name, tag(";")),
        model::Reference::entity,
    )(input)
}

// -----------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s() {
        let (rest, ret) = s(" \t\r\n=").unwrap();
        assert_eq!("=", rest);
        assert_eq!(" \t\r\n", ret);

        let _err = s("\u{A0}").err().unwrap();
    }

    #[test]
    fn test_name() {
        let (rest, ret) = name("soapenv:Envelope ").unwrap();
        assert_eq!(" ", rest);
        assert_eq!("soapenv:Envelope", ret);

        let _err = name("1abc").err().unwrap();
    }

    #[test]
    fn test_ncname() {
        let (rest, ret) = ncname("abc:def").unwrap();
        assert_eq!(":def", rest);
        assert_eq!("abc", ret);

        let _err = ncname(":abc").err().unwrap();
    }

    #[test]
    fn test_qname() {
        let (rest, ret) = qname("a:b>").unwrap();
        assert_eq!(">", rest);
        assert_eq!(
            model::QName::from(model::PrefixedName::from(("a", "b"))),
            ret
        );

        let (rest, ret) = qname("a>").unwrap();
        assert_eq!(">", rest);
        assert_eq!(model::QName::from("a"), ret);

        let (rest, ret) = qname("a:>").unwrap();
        assert_eq!(":>", rest);
        assert_eq!(model::QName::from("a"), ret);
    }

    #[test]
    fn test_reference() {
        let (rest, ret) = reference("&amp;b").unwrap();
        assert_eq!("b", rest);
        assert_eq!(model::Reference::entity("amp"), ret);

        let (rest, ret) = reference("&#39;").unwrap();
        assert_eq!("", rest);
        assert_eq!(model::Reference::digit("39"), ret);

        let (rest, ret) = reference("&#x3C;").unwrap();
        assert_eq!("", rest);
        assert_eq!(model::Reference::hex("3C"), ret);

        let _err = reference("&amp").err().unwrap();
        let _err = reference("&#;").err().unwrap();
    }
}

// -----------------------------------------------------------------------------------------------
