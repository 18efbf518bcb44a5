use crate::{
    error::Result,
    pdf::{Bytes, Escaping, PdfString},
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// Maps every char to a printable ASCII form: backslash is doubled, tab,
/// newline and carriage return become `\t`, `\n`, `\r`, and anything outside
/// printable ASCII becomes `\xhh`, `\uhhhh` or `\Uhhhhhhhh`.
fn printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ' '..='~' => out.push(c),
            '\u{80}'..='\u{ff}' | '\0'..='\u{1f}' | '\u{7f}' => out.push_str(&format!("\\x{:02x}", c as u32)),
            '\u{100}'..='\u{ffff}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out
}

/// Escaped content of a literal string, without the parentheses.
///
/// After [`printable`], every char except digits, letters, backslash and
/// space is written as a three digit octal escape. The result is plain
/// printable ASCII.
///
/// [`Escaping::Obfuscated`] only keeps backslash and `n`, so `\n` escapes
/// survive and everything else turns octal.
pub(crate) fn escape_text(text: &str, escaping: Escaping) -> String {
    let printable = printable(text);
    let mut out = String::with_capacity(printable.len());
    for c in printable.chars() {
        let keep = match escaping {
            Escaping::Minimal => c.is_ascii_alphanumeric() || c == '\\' || c == ' ',
            Escaping::Obfuscated => c == '\\' || c == 'n',
        };
        if keep {
            out.push(c);
        } else {
            out.push_str(&format!("\\{:03o}", c as u32));
        }
    }
    out
}

impl Encoder<PdfString> for SimpleEncoder<'_> {
    fn write_to(&self, s: &PdfString, writer: &mut dyn Writer) -> Result<()> {
        writer.write(b"(");
        writer.write(escape_text(s, self.document().config().escaping).as_bytes());
        writer.write(b")");
        Ok(())
    }
}

impl Encoder<Bytes> for SimpleEncoder<'_> {
    fn write_to(&self, bytes: &Bytes, writer: &mut dyn Writer) -> Result<()> {
        writer.write(b"<");
        writer.write(hex::encode_upper(&bytes[..]).as_bytes());
        writer.write(b">");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{Document, DocumentConfig};

    use super::*;

    fn escape(text: &str) -> String {
        escape_text(text, Escaping::Minimal)
    }

    #[test]
    fn test_simple() {
        assert_eq!(escape("abc def"), "abc def");
    }

    #[test]
    fn test_parenthesis_are_octal() {
        assert_eq!(escape("(abc)"), r"\050abc\051");
    }

    #[test]
    fn test_control_characters() {
        // newline keeps its backslash form, the escaped backslash stays doubled
        assert_eq!(escape("abc\n\\)"), r"abc\n\\\051");
        assert_eq!(escape("\t\r"), r"\t\r");
        assert_eq!(escape("\u{0}"), r"\x00");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(escape("abc ["), r"abc \133");
        assert_eq!(escape("app.launchURL('x');"), r"app\056launchURL\050\047x\047\051\073");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(escape("é"), r"\xe9");
        assert_eq!(escape("€"), r"\u20ac");
        assert_eq!(escape("😀"), r"\U0001f600");
    }

    #[test]
    fn test_output_is_printable_ascii() {
        let escaped = escape("a\u{7f}\u{1}ü€😀\"'%");
        assert!(escaped.bytes().all(|b| (b' '..=b'~').contains(&b)), "{}", escaped);
    }

    #[test]
    fn test_obfuscated() {
        assert_eq!(escape_text("abc", Escaping::Obfuscated), r"\141\142\143");
        assert_eq!(escape_text("a b\n", Escaping::Obfuscated), r"\141\040\142\n");
        assert_eq!(escape_text("n(", Escaping::Obfuscated), r"n\050");
        assert_eq!(escape_text("é", Escaping::Obfuscated), r"\\170\145\071");
    }

    #[test]
    fn test_obfuscated_document() {
        let doc = Document::new(DocumentConfig::default().with_escaping(Escaping::Obfuscated));
        let enc = SimpleEncoder::new(&doc);
        assert_eq!(enc.encode(&PdfString::from("ab")).unwrap(), br"(\141\142)".to_vec());
        assert_eq!(enc.encode(&Bytes::from(vec![0xab])).unwrap(), b"<AB>".to_vec());
    }

    #[test]
    fn test_delimiters() {
        let doc = Document::default();
        let enc = SimpleEncoder::new(&doc);
        assert_eq!(enc.encode(&PdfString::from("Test")).unwrap(), b"(Test)".to_vec());
        assert_eq!(enc.encode(&PdfString::from("")).unwrap(), b"()".to_vec());
        assert_eq!(
            enc.encode(&Bytes::from(vec![0x00, 0xab, 0xff])).unwrap(),
            b"<00ABFF>".to_vec()
        );
    }
}
