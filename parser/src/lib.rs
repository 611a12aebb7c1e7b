pub mod error;
pub mod model;

use model::{Attr, EndElement, Markup, Name, ProcInst, StartElement, Token, XMLNS, XML_NAMESPACE};
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until};
use nom::character::complete::char;
use nom::combinator::{map, opt, recognize, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;
use simplexml_nom::model::QName;
use simplexml_nom::{helper, name, qname, s, xmlchar};
use std::iter::FusedIterator;

// -----------------------------------------------------------------------------------------------

/// Splits `input` into tokens.
pub fn tokenize(input: &str) -> error::Result<Vec<Token>> {
    Tokenizer::new(input).collect()
}

/// Recognizes the next piece of markup at the head of `input`.
pub fn markup(input: &str) -> IResult<&str, Markup<'_>> {
    alt((
        map(pi, Markup::PI),
        map(comment, Markup::Comment),
        map(cdsect, Markup::CData),
        map(directive, Markup::Directive),
        map(etag, Markup::EndTag),
        map(stag, Markup::StartTag),
        map(char_data, Markup::Text),
    ))(input)
}

/// \[^<]+
///
/// [\[14\] CharData](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-CharData)
fn char_data(input: &str) -> IResult<&str, &str> {
    is_not("<")(input)
}

/// '\<!--' ((Char - '-') | ('-' (Char - '-')))* '-->'
///
/// [\[15\] Comment](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-Comment)
fn comment(input: &str) -> IResult<&str, &str> {
    delimited(
        tag("<!--"),
        recognize(many0(tuple((opt(tag("-")), xmlchar::char_except1("-"))))),
        tag("-->"),
    )(input)
}

/// '\<?' PITarget (S (Char* - (Char* '?>' Char*)))? '?>'
///
/// [\[16\] PI](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-PI)
fn pi(input: &str) -> IResult<&str, model::PI<'_>> {
    map(
        delimited(
            tag("<?"),
            tuple((name, opt(preceded(s, take_until("?>"))))),
            preceded(opt(s), tag("?>")),
        ),
        model::PI::from,
    )(input)
}

/// CDStart CData CDEnd
///
/// [\[18\] CDSect](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-CDSect)
fn cdsect(input: &str) -> IResult<&str, &str> {
    delimited(
        tag("<![CDATA["),   // [19] CDStart
        take_until("]]>"), // [20] CData
        tag("]]>"),        // [21] CDEnd
    )(input)
}

/// '\<!' (quoted literal | '[' intSubset ']' | \[^"'\[>])* '>'
///
/// Covers [\[28\] doctypedecl](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-doctypedecl)
/// without interpreting it.
fn directive(input: &str) -> IResult<&str, &str> {
    delimited(
        tag("<!"),
        recognize(many0(alt((
            quoted,
            recognize(delimited(
                char('['),
                many0(alt((quoted, is_not("\"']")))),
                char(']'),
            )),
            is_not("\"'[>"),
        )))),
        char('>'),
    )(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    recognize(alt((
        delimited(char('"'), opt(is_not("\"")), char('"')),
        delimited(char('\''), opt(is_not("'")), char('\'')),
    )))(input)
}

/// '\<' QName (S Attribute)* S? ('>' | '/>')
///
/// [\[12\] STag](https://www.w3.org/TR/2009/REC-xml-names-20091208/#NT-STag)
///
/// [\[14\] EmptyElemTag](https://www.w3.org/TR/2009/REC-xml-names-20091208/#NT-EmptyElemTag)
fn stag(input: &str) -> IResult<&str, model::StartTag<'_>> {
    map(
        preceded(
            tag("<"),
            tuple((
                qname,
                many0(preceded(s, attribute)),
                preceded(
                    opt(s),
                    alt((value(true, tag("/>")), value(false, tag(">")))),
                ),
            )),
        ),
        model::StartTag::from,
    )(input)
}

/// QName Eq AttValue
///
/// [\[15\] Attribute](https://www.w3.org/TR/2009/REC-xml-names-20091208/#NT-Attribute)
fn attribute(input: &str) -> IResult<&str, model::Attribute<'_>> {
    map(tuple((qname, preceded(eq, att_value))), model::Attribute::from)(input)
}

/// S? '=' S?
///
/// [\[25\] Eq](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-Eq)
fn eq(input: &str) -> IResult<&str, &str> {
    delimited(opt(s), tag("="), opt(s))(input)
}

/// '"' \[^<"]* '"' |  "'" \[^<']* "'"
///
/// [\[10\] AttValue](https://www.w3.org/TR/2008/REC-xml-20081126/#NT-AttValue)
fn att_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(
            char('"'),
            map(opt(is_not("<\"")), |v| v.unwrap_or_default()),
            char('"'),
        ),
        delimited(
            char('\''),
            map(opt(is_not("<'")), |v| v.unwrap_or_default()),
            char('\''),
        ),
    ))(input)
}

/// '\</' QName S? '>'
///
/// [\[13\] ETag](https://www.w3.org/TR/2009/REC-xml-names-20091208/#NT-ETag)
fn etag(input: &str) -> IResult<&str, QName<'_>> {
    delimited(tag("</"), qname, pair(opt(s), char('>')))(input)
}

// -----------------------------------------------------------------------------------------------

/// Lazy token stream over a complete document.
///
/// Namespace prefixes are translated to namespace URIs while tokenizing, `xmlns`
/// declarations stay visible as attributes. The stream ends after the first error.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    rest: &'a str,
    scopes: Vec<Vec<(String, String)>>,
    pending: Option<Name>,
    failed: bool,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = error::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(name) = self.pending.take() {
            self.scopes.pop();
            return Some(Ok(Token::End(EndElement { name })));
        }

        if self.failed || self.rest.is_empty() {
            return None;
        }

        let token = self.token();
        self.failed = token.is_err();
        Some(token)
    }
}

impl<'a> FusedIterator for Tokenizer<'a> {}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Tokenizer {
            source,
            rest: source,
            scopes: vec![],
            pending: None,
            failed: false,
        }
    }

    fn token(&mut self) -> error::Result<Token> {
        let input = self.rest;
        let (rest, markup) = markup(input).map_err(|_| self.syntax_error(input))?;
        self.rest = rest;

        match markup {
            Markup::StartTag(v) => self.start_element(v),
            Markup::EndTag(v) => {
                let name = self.element_name(&v);
                self.scopes.pop();
                Ok(Token::End(EndElement { name }))
            }
            Markup::Text(v) => Ok(Token::CharData(self.unescape(v)?)),
            Markup::CData(v) => Ok(Token::CharData(helper::normalize_newlines(v).into_owned())),
            Markup::Comment(v) => Ok(Token::Comment(v.to_string())),
            Markup::PI(v) => Ok(Token::ProcInst(ProcInst {
                target: v.target.to_string(),
                data: v.value.unwrap_or_default().to_string(),
            })),
            Markup::Directive(v) => Ok(Token::Directive(v.to_string())),
        }
    }

    fn start_element(&mut self, tag: model::StartTag<'a>) -> error::Result<Token> {
        let mut scope = vec![];
        let mut values = Vec::with_capacity(tag.attributes.len());
        for attr in tag.attributes.iter() {
            let value = self.unescape(attr.value)?;
            match attr.name.prefix() {
                Some(XMLNS) => scope.push((attr.name.local_part().to_string(), value.clone())),
                None if attr.name.local_part() == XMLNS => {
                    scope.push((String::new(), value.clone()))
                }
                _ => {}
            }
            values.push(value);
        }
        self.scopes.push(scope);

        let name = self.element_name(&tag.name);
        let attributes = tag
            .attributes
            .iter()
            .zip(values)
            .map(|(attr, value)| Attr {
                name: self.attribute_name(&attr.name),
                value,
            })
            .collect();

        if tag.empty {
            self.pending = Some(name.clone());
        }

        Ok(Token::Start(StartElement { name, attributes }))
    }

    fn element_name(&self, name: &QName<'_>) -> Name {
        match name.prefix() {
            Some(prefix) => Name::new(self.translate(prefix), name.local_part()),
            None => Name::new(self.lookup("").unwrap_or_default(), name.local_part()),
        }
    }

    fn attribute_name(&self, name: &QName<'_>) -> Name {
        match name.prefix() {
            Some(XMLNS) => Name::new(XMLNS, name.local_part()),
            Some(prefix) => Name::new(self.translate(prefix), name.local_part()),
            None => Name::local(name.local_part()),
        }
    }

    fn translate(&self, prefix: &str) -> String {
        if prefix == "xml" {
            return XML_NAMESPACE.to_string();
        }

        // an unbound prefix is kept as the namespace
        self.lookup(prefix).unwrap_or(prefix).to_string()
    }

    fn lookup(&self, prefix: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    fn unescape(&self, text: &'a str) -> error::Result<String> {
        match helper::unescape(text) {
            Ok(("", value)) => Ok(value),
            Ok((rest, _)) => {
                let (line, column) = self.position(rest);
                Err(error::Error::Reference { line, column })
            }
            Err(_) => {
                let (line, column) = self.position(text);
                Err(error::Error::Reference { line, column })
            }
        }
    }

    fn syntax_error(&self, at: &str) -> error::Error {
        let (line, column) = self.position(at);
        error::Error::Syntax {
            line,
            column,
            near: at.chars().take(16).collect(),
        }
    }

    /// Line and column (both 1-based) of `at`, which must be a slice of the source.
    fn position(&self, at: &str) -> (usize, usize) {
        let offset = at.as_ptr() as usize - self.source.as_ptr() as usize;
        let consumed = &self.source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let column = consumed.rsplit('\n').next().unwrap_or_default().chars().count() + 1;
        (line, column)
    }
}

// -----------------------------------------------------------------------------------------------


// -----------------------------------------------------------------------------------------------
