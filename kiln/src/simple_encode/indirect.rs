use crate::{
    error::Result,
    pdf::{IndirectObject, ObjectKind},
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

const END_OBJ: &[u8] = b"\nendobj\n";

impl SimpleEncoder<'_> {
    /// `<number> 0 obj\n<object>\nendobj\n`
    pub(crate) fn write_object_block(&self, number: u32, object: &IndirectObject, writer: &mut dyn Writer) -> Result<()> {
        writer.write(format!("{} 0 obj\n", number).as_bytes());
        self.write_to(object, writer)?;
        writer.write(END_OBJ);
        Ok(())
    }
}

/// Writes the object body without the `obj`/`endobj` framing.
impl Encoder<IndirectObject> for SimpleEncoder<'_> {
    fn write_to(&self, object: &IndirectObject, writer: &mut dyn Writer) -> Result<()> {
        match (object.kind(), object.stream()) {
            (ObjectKind::ObjectStream(elements), _) => {
                let (dictionary, data) = self.object_stream_content(&object.dictionary, elements)?;
                self.write_stream(&dictionary, data, object.filters, writer)
            }
            (ObjectKind::Plain, Some(stream)) => {
                self.write_stream(&object.dictionary, stream.bytes(), object.filters, writer)
            }
            (ObjectKind::Plain, None) => self.write_to(&object.dictionary, writer),
        }
    }
}
