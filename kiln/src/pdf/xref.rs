/// Where an object ended up in the written document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Byte offset of the `<num> 0 obj` line, counted from the start of the
    /// file.
    Direct { byte_offset: usize },
    /// Stored inside an object stream.
    Compressed {
        /// Object number of the object stream.
        container: u32,
        /// Index of the object inside the object stream.
        index: usize,
    },
}

impl Position {
    pub fn byte_offset(&self) -> Option<usize> {
        match self {
            Position::Direct { byte_offset } => Some(*byte_offset),
            Position::Compressed { .. } => None,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, Position::Compressed { .. })
    }
}

/// Denotes a free object reference in a xref stream.
pub const XREF_FREE: u8 = 0;
/// Denotes a used object reference in a xref stream.
pub const XREF_USED: u8 = 1;
/// Denotes a used and compressed object reference in a xref stream.
pub const XREF_COMPRESSED: u8 = 2;

/// Third field of the object 0 record in a xref stream.
pub(crate) const FREE_HEAD_GENERATION: usize = 255;

/// Free-list head line of a classic table.
pub(crate) const FREE_HEAD_LINE: &[u8] = b"0000000000 65535 f \n";

/// One record of a xref stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefEntry {
    /// Head of the free list, always object 0.
    Free,
    Used { byte_offset: usize },
    /// Object is stored in compressed stream
    UsedCompressed { container: u32, index: usize },
}

impl XrefEntry {
    pub fn type_num(&self) -> u8 {
        match self {
            XrefEntry::Free => XREF_FREE,
            XrefEntry::Used { .. } => XREF_USED,
            XrefEntry::UsedCompressed { .. } => XREF_COMPRESSED,
        }
    }

    fn fields(&self) -> (usize, usize) {
        match *self {
            XrefEntry::Free => (0, FREE_HEAD_GENERATION),
            XrefEntry::Used { byte_offset } => (byte_offset, 0),
            XrefEntry::UsedCompressed { container, index } => (container as usize, index),
        }
    }

    /// Appends the record using `widths` bytes for the second and third field.
    pub(crate) fn encode(&self, widths: (usize, usize), buffer: &mut Vec<u8>) {
        let (w2, w3) = self.fields();
        buffer.push(self.type_num());
        push_be(w2, widths.0, buffer);
        push_be(w3, widths.1, buffer);
    }
}

impl From<Position> for XrefEntry {
    fn from(p: Position) -> Self {
        match p {
            Position::Direct { byte_offset } => XrefEntry::Used { byte_offset },
            Position::Compressed { container, index } => XrefEntry::UsedCompressed { container, index },
        }
    }
}

/// Big endian, truncated or zero-padded on the left to `width` bytes.
fn push_be(value: usize, width: usize, buffer: &mut Vec<u8>) {
    let bytes = (value as u64).to_be_bytes();
    if width >= bytes.len() {
        buffer.extend(std::iter::repeat(0).take(width - bytes.len()));
        buffer.extend_from_slice(&bytes);
    } else {
        buffer.extend_from_slice(&bytes[bytes.len() - width..]);
    }
}

/// Smallest number of bytes that can hold `value`, at least one.
pub fn byte_width(value: usize) -> usize {
    let bits = usize::BITS - value.leading_zeros();
    ((bits as usize + 7) / 8).max(1)
}
