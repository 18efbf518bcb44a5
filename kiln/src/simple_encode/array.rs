use crate::{
    error::Result,
    pdf::{Array, Object},
    writer::{Encoder, Writer},
};

use super::{type_mismatch, SimpleEncoder};

impl Encoder<Array> for SimpleEncoder<'_> {
    fn write_to(&self, array: &Array, writer: &mut dyn Writer) -> Result<()> {
        writer.write(b"[");
        for (i, obj) in array.iter().enumerate() {
            if let Object::Dictionary(_) = obj {
                return Err(type_mismatch("array", obj));
            }
            if i > 0 {
                writer.write(b" ");
            }
            self.write_to(obj, writer)?;
        }
        writer.write(b"]");
        Ok(())
    }
}
