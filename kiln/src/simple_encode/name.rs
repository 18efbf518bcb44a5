use crate::{
    error::Result,
    pdf::{Escaping, Name},
    writer::Encoder,
};

use super::SimpleEncoder;

/// `/` followed by the name; bytes outside `[0-9A-Za-z]` become `#xx`.
/// [`Escaping::Obfuscated`] escapes every byte.
pub(crate) fn escape_name(name: &str, escaping: Escaping) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    out.push('/');
    for &c in name.as_bytes() {
        if escaping == Escaping::Minimal && c.is_ascii_alphanumeric() {
            out.push(char::from(c));
        } else {
            out.push('#');
            out.push_str(&hex::encode([c]));
        }
    }
    out
}

impl Encoder<Name> for SimpleEncoder<'_> {
    fn write_to(&self, n: &Name, writer: &mut dyn crate::writer::Writer) -> Result<()> {
        writer.write(escape_name(n, self.document().config().escaping).as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_in_the_middle() {
        assert_eq!(escape_name("Hello World!", Escaping::Minimal), "/Hello#20World#21");
    }

    #[test]
    fn delimiter_start() {
        assert_eq!(escape_name(" HelloWorld", Escaping::Minimal), "/#20HelloWorld");
    }

    #[test]
    fn delimiter_end() {
        assert_eq!(escape_name("abc]", Escaping::Minimal), "/abc#5d");
    }

    #[test]
    fn only_delimiters() {
        assert_eq!(escape_name("   ", Escaping::Minimal), "/#20#20#20");
    }

    #[test]
    fn no_delimiters() {
        assert_eq!(escape_name("FlateDecode", Escaping::Minimal), "/FlateDecode");
    }

    #[test]
    fn non_ascii_is_escaped_per_byte() {
        assert_eq!(escape_name("é", Escaping::Minimal), "/#c3#a9");
        assert_eq!(escape_name("", Escaping::Minimal), "/");
    }
}
