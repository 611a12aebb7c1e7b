use crate::reference;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::combinator::{map, map_opt, value};
use nom::multi::fold_many0;
use nom::IResult;
use std::borrow::Cow;

// -----------------------------------------------------------------------------------------------

/// Escapes `s` for use as element content.
///
/// `&`, `<`, `>`, `'` and `"` are replaced, the quotes with numeric references.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Replaces `\r\n` and a lone `\r` with `\n`.
///
/// [2.11 End-of-Line Handling](https://www.w3.org/TR/2008/REC-xml-20081126/#sec-line-ends)
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Replaces every entity and character reference in `input` and normalizes line endings.
///
/// A `\r` written as a character reference is kept. Parsing stops at the first reference
/// that is malformed or unknown, the caller decides whether a non-empty rest is an error.
pub fn unescape(input: &str) -> IResult<&str, String> {
    fold_many0(
        alt((
            map(is_not("&\r"), Cow::Borrowed),
            value(Cow::Borrowed("\n"), alt((tag("\r\n"), tag("\r")))),
            map(map_opt(reference, |r| r.resolve()), |c| {
                Cow::Owned(c.to_string())
            }),
        )),
        String::new,
        |mut acc, text: Cow<'_, str>| {
            acc.push_str(&text);
            acc
        },
    )(input)
}

// -----------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!("Book Title 1", escape_text("Book Title 1"));
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
        assert_eq!("a &amp; b &lt;c&gt;", escape_text("a & b <c>"));
        assert_eq!("&#39;q&#39; &#34;qq&#34;", escape_text("'q' \"qq\""));
    }

    #[test]
    fn test_unescape() {
        let (rest, ret) = unescape("").unwrap();
        assert_eq!("", rest);
        assert_eq!("", ret);

        let (rest, ret) = unescape("a &amp; b").unwrap();
        assert_eq!("", rest);
        assert_eq!("a & b", ret);

        let (rest, ret) = unescape("&lt;&#39;&#x22;&gt;").unwrap();
        assert_eq!("", rest);
        assert_eq!("<'\">", ret);

        let (rest, ret) = unescape("a &nbsp; b").unwrap();
        assert_eq!("&nbsp; b", rest);
        assert_eq!("a ", ret);

        let (rest, ret) = unescape("a & b").unwrap();
        assert_eq!("& b", rest);
        assert_eq!("a ", ret);
    }

    #[test]
    fn test_unescape_newlines() {
        let (rest, ret) = unescape("x\r\ny\rz\n").unwrap();
        assert_eq!("", rest);
        assert_eq!("x\ny\nz\n", ret);

        let (rest, ret) = unescape("a&#13;\r\n&amp;").unwrap();
        assert_eq!("", rest);
        assert_eq!("a\r\n&", ret);
    }

    #[test]
    fn test_normalize_newlines() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
        assert_eq!("a\nb\n\nc", normalize_newlines("a\r\nb\r\rc"));
    }

    #[test]
    fn test_escape_unescape() {
        let text = "<tag attr=\"v\"> & 'x'";
        let escaped = escape_text(text);
        let (rest, ret) = unescape(&escaped).unwrap();
        assert_eq!("", rest);
        assert_eq!(text, ret);
    }
}

// -----------------------------------------------------------------------------------------------
