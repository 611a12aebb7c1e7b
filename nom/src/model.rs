// -----------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrefixedName<'a> {
    pub prefix: &'a str,
    pub local_part: &'a str,
}

impl<'a> From<(&'a str, &'a str)> for PrefixedName<'a> {
    fn from(value: (&'a str, &'a str)) -> Self {
        let (prefix, local_part) = value;
        PrefixedName { prefix, local_part }
    }
}

// -----------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub enum QName<'a> {
    Prefixed(PrefixedName<'a>),
    Unprefixed(&'a str),
}

impl<'a> Default for QName<'a> {
    fn default() -> Self {
        QName::Unprefixed("")
    }
}

impl<'a> From<PrefixedName<'a>> for QName<'a> {
    fn from(value: PrefixedName<'a>) -> Self {
        QName::Prefixed(value)
    }
}

impl<'a> From<&'a str> for QName<'a> {
    fn from(value: &'a str) -> Self {
        QName::Unprefixed(value)
    }
}

impl<'a> QName<'a> {
    pub fn prefix(&self) -> Option<&'a str> {
        match self {
            QName::Prefixed(v) => Some(v.prefix),
            QName::Unprefixed(_) => None,
        }
    }

    pub fn local_part(&self) -> &'a str {
        match self {
            QName::Prefixed(v) => v.local_part,
            QName::Unprefixed(v) => *v,
        }
    }
}

// -----------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub enum Reference<'a> {
    Character(&'a str, u32),
    Entity(&'a str),
}

impl<'a> Reference<'a> {
    pub fn digit(value: &'a str) -> Self {
        Reference::Character(value, 10)
    }

    pub fn entity(value: &'a str) -> Self {
        Reference::Entity(value)
    }

    pub fn hex(value: &'a str) -> Self {
        Reference::Character(value, 16)
    }

    /// Returns the character this reference stands for.
    ///
    /// Only the predefined entities are known, there is no DTD to declare others.
    pub fn resolve(&self) -> Option<char> {
        match self {
            Reference::Character(value, radix) => {
                u32::from_str_radix(value, *radix).ok().and_then(char::from_u32)
            }
            Reference::Entity(name) => match *name {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "apos" => Some('\''),
                "quot" => Some('"'),
                _ => None,
            },
        }
    }
}

// -----------------------------------------------------------------------------------------------


// -----------------------------------------------------------------------------------------------
