use crate::{
    error::{KilnError, Result},
    pdf::{Document, Object, ObjectId},
    writer::{Encoder, Writer},
};

pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod indirect;
pub(crate) mod name;
pub(crate) mod object_stream;
pub(crate) mod section;
pub(crate) mod stream;
pub(crate) mod string;

pub(crate) const TRUE_OBJECT: &str = "true";
pub(crate) const FALSE_OBJECT: &str = "false";
pub(crate) const NULL_OBJECT: &str = "null";

/// Compact encoder: no whitespace except where two tokens would otherwise
/// run together.
///
/// References are written as `<num> 0 R` with the number the object has in
/// `document`, so every referenced object must be registered there.
#[derive(Debug, Clone, Copy)]
pub struct SimpleEncoder<'a> {
    document: &'a Document,
}

impl<'a> SimpleEncoder<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub(crate) fn document(&self) -> &'a Document {
        self.document
    }

    pub(crate) fn write_reference(&self, id: ObjectId, writer: &mut dyn Writer) -> Result<()> {
        let (number, generation) = self.document.resolve(id)?;
        writer.write(format!("{} {} R", number, generation).as_bytes());
        Ok(())
    }
}

/// True for values that start with a regular character and therefore need
/// a space after a preceding name.
pub(crate) fn needs_separator(obj: &Object) -> bool {
    matches!(
        obj,
        Object::Null | Object::Bool(_) | Object::Integer(_) | Object::Real(_) | Object::Reference(_)
    )
}

pub(crate) fn type_mismatch(context: &'static str, obj: &Object) -> KilnError {
    KilnError::TypeMismatch {
        context,
        found: obj.type_name(),
        value: format!("{:?}", obj),
    }
}

impl Encoder<Object> for SimpleEncoder<'_> {
    fn write_to(&self, obj: &Object, writer: &mut dyn Writer) -> Result<()> {
        match obj {
            Object::Null => writer.write(NULL_OBJECT.as_bytes()),
            Object::Bool(true) => writer.write(TRUE_OBJECT.as_bytes()),
            Object::Bool(false) => writer.write(FALSE_OBJECT.as_bytes()),
            Object::Integer(i) => writer.write(i.to_string().as_bytes()),
            Object::Real(f) if !f.is_finite() => return Err(type_mismatch("number syntax", obj)),
            Object::Real(f) => writer.write(f.to_string().as_bytes()),
            Object::Name(n) => self.write_to(n, writer)?,
            Object::String(s) => self.write_to(s, writer)?,
            Object::HexString(b) => self.write_to(b, writer)?,
            Object::Array(a) => self.write_to(a, writer)?,
            Object::Dictionary(d) => self.write_to(d, writer)?,
            Object::Reference(id) => self.write_reference(*id, writer)?,
        }
        Ok(())
    }
}
