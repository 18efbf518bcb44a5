use crate::error::KilnError;

pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

pub trait Encoder<T: ?Sized> {
    fn write_to(&self, value: &T, writer: &mut dyn Writer) -> Result<(), KilnError>;

    fn encode(&self, value: &T) -> Result<Vec<u8>, KilnError> {
        let mut out = Vec::new();
        self.write_to(value, &mut out)?;
        Ok(out)
    }
}
