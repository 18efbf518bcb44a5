use std::ops::Deref;

/// A text string, written as a literal string `( ... )`.
///
/// Raw binary data goes into [`Bytes`](super::Bytes) instead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PdfString(String);

impl PdfString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PdfString {
    fn from(v: &str) -> Self {
        PdfString(v.to_owned())
    }
}

impl From<String> for PdfString {
    fn from(v: String) -> Self {
        PdfString(v)
    }
}

impl Deref for PdfString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PdfString").field(&self.0).finish()
    }
}

impl std::fmt::Display for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
