use std::ops::Deref;

use crate::error::KilnError;

/// A name token such as `/Type`, without the leading solidus.
///
/// Names compare by text. Dictionaries never use that equality to merge
/// entries, see [`Dictionary::insert`](super::Dictionary::insert).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(n: impl Into<String>) -> Self {
        Self(n.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(v: &str) -> Self {
        Name(v.to_owned())
    }
}

impl From<String> for Name {
    fn from(v: String) -> Self {
        Name(v)
    }
}

impl TryFrom<&[u8]> for Name {
    type Error = KilnError;

    fn try_from(v: &[u8]) -> Result<Self, Self::Error> {
        std::str::from_utf8(v)
            .map(Name::from)
            .map_err(|_| KilnError::InvalidName(v.to_vec()))
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Name").field(&self.0).finish()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_must_be_text() {
        assert_eq!(Name::try_from(&b"Type"[..]).unwrap(), Name::from("Type"));
        assert!(matches!(
            Name::try_from(&b"\xff\xfe"[..]),
            Err(KilnError::InvalidName(bytes)) if bytes == b"\xff\xfe"
        ));
    }
}
