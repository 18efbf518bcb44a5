use super::{Dictionary, Object, ObjectId};

pub const TRAILER: &[u8] = b"trailer";
pub const K_SIZE: &str = "Size";
pub const K_ROOT: &str = "Root";
pub const K_INFO: &str = "Info";
pub const K_INDEX: &str = "Index";
pub const K_W: &str = "W";
pub const T_XREF: &str = "XRef";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    /// Highest object number used in the PDF document, plus one.
    pub size: usize,

    /// Reference to the root object.
    pub root: ObjectId,

    /// Information for this document.
    pub info: ObjectId,
}

impl Trailer {
    /// Dictionary of a xref stream object carrying this trailer, with record
    /// field widths `[1, widths.0, widths.1]`.
    pub(crate) fn xref_stream_dictionary(&self, widths: (usize, usize)) -> Dictionary {
        let size = self.size as i64;
        let w: Vec<Object> = [1, widths.0, widths.1].iter().map(|w| Object::Integer(*w as i64)).collect();
        Dictionary::typed(T_XREF)
            .with(K_INFO, self.info)
            .with(K_INDEX, vec![Object::Integer(0), Object::Integer(size)])
            .with(K_SIZE, size)
            .with(K_W, w)
            .with(K_ROOT, self.root)
    }
}

impl From<&Trailer> for Dictionary {
    fn from(trailer: &Trailer) -> Self {
        Dictionary::new()
            .with(K_SIZE, trailer.size as i64)
            .with(K_ROOT, trailer.root)
            .with(K_INFO, trailer.info)
    }
}
