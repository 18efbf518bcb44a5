use crate::{
    error::Result,
    pdf::{
        document::{K_CONTENTS, K_COUNT, K_FILTER, K_KIDS, K_LENGTH, K_PARENT, K_SUBTYPE, K_TYPE},
        Dictionary,
    },
    writer::{Encoder, Writer},
};

use super::{name::escape_name, needs_separator, SimpleEncoder};

impl SimpleEncoder<'_> {
    fn write_key(&self, key: &str, writer: &mut dyn Writer) {
        writer.write(escape_name(key, self.document().config().escaping).as_bytes());
    }
}

impl Encoder<Dictionary> for SimpleEncoder<'_> {
    fn write_to(&self, d: &Dictionary, writer: &mut dyn Writer) -> Result<()> {
        writer.write(b"<<");

        if let Some(kind) = &d.kind {
            self.write_key(K_TYPE, writer);
            self.write_to(kind, writer)?;
        }
        if let Some(subtype) = &d.subtype {
            self.write_key(K_SUBTYPE, writer);
            self.write_to(subtype, writer)?;
        }
        if !d.filters.is_empty() {
            self.write_key(K_FILTER, writer);
            self.write_to(&d.filters, writer)?;
        }
        if let Some(length) = d.length {
            self.write_key(K_LENGTH, writer);
            writer.write(format!(" {}", length).as_bytes());
        }
        if let Some(parent) = d.parent {
            self.write_key(K_PARENT, writer);
            writer.write(b" ");
            self.write_reference(parent, writer)?;
        }
        if let Some(content) = d.content {
            self.write_key(K_CONTENTS, writer);
            writer.write(b" ");
            self.write_reference(content, writer)?;
        }
        if !d.kids.is_empty() {
            self.write_key(K_KIDS, writer);
            self.write_to(&d.kids, writer)?;
        }
        if let Some(count) = d.count {
            self.write_key(K_COUNT, writer);
            writer.write(format!(" {}", count).as_bytes());
        }

        for (key, value) in d.iter() {
            self.write_to(key, writer)?;
            if needs_separator(value) {
                writer.write(b" ");
            }
            self.write_to(value, writer)?;
        }

        writer.write(b">>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{Document, IndirectObject, Name, Object, PdfString};

    use super::*;

    fn encode(doc: &Document, d: &Dictionary) -> String {
        String::from_utf8(SimpleEncoder::new(doc).encode(d).unwrap()).unwrap()
    }

    #[test]
    fn empty_dict() {
        let doc = Document::default();
        assert_eq!(encode(&doc, &Dictionary::new()), "<<>>");
    }

    #[test]
    fn structural_fields_come_first() {
        let mut doc = Document::default();
        let parent = doc.add(IndirectObject::new(Dictionary::new()));
        let content = doc.add(IndirectObject::new(Dictionary::new()));
        let kid = doc.add(IndirectObject::new(Dictionary::new()));

        let mut d = Dictionary::typed("Pages")
            .with("Extra", 1)
            .with_subtype("Sub")
            .with_parent(parent)
            .with_content(content)
            .with_count(1);
        d.add_kids([kid]);
        d.length = Some(15);
        d.filters.push(Object::Name("FlateDecode".into()));
        d.filters.push(Object::Name("ASCIIHexDecode".into()));

        assert_eq!(
            encode(&doc, &d),
            "<</Type/Pages/Subtype/Sub/Filter[/FlateDecode /ASCIIHexDecode]/Length 15\
             /Parent 2 0 R/Contents 3 0 R/Kids[4 0 R]/Count 1/Extra 1>>"
        );
    }

    #[test]
    fn separator_only_before_regular_values() {
        let mut doc = Document::default();
        let target = doc.add(IndirectObject::new(Dictionary::new()));
        let d = Dictionary::new()
            .with("A", Name::from("B"))
            .with("S", PdfString::from("x"))
            .with("R", target)
            .with("T", true)
            .with("N", Object::Null)
            .with("V", vec![Object::Integer(1)])
            .with("D", Dictionary::new().with("F", 1.5));
        assert_eq!(encode(&doc, &d), "<</A/B/S(x)/R 2 0 R/T true/N null/V[1]/D<</F 1.5>>>>");
    }

    #[test]
    fn same_name_keys_are_all_written() {
        let doc = Document::default();
        let mut d = Dictionary::new();
        d.insert("abc", 1);
        d.insert("abc", 2);
        d.insert("abc", 3);
        assert_eq!(encode(&doc, &d), "<</abc 1/abc 2/abc 3>>");
    }

    #[test]
    fn keys_are_escaped() {
        let doc = Document::default();
        let d = Dictionary::new().with("a b", 1);
        assert_eq!(encode(&doc, &d), "<</a#20b 1>>");
    }
}
