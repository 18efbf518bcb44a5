//! Builds PDF files from an in-memory object graph.
//!
//! A [`Document`] owns every object; objects refer to each other through
//! [`ObjectId`] handles. Writing the document assigns object numbers in
//! registration order and produces the body, a cross-reference table or
//! stream, and the trailer.

pub use error::{KilnError, Result};
pub use pdf::{
    Array, Bytes, Dictionary, Document, DocumentConfig, EntryId, Escaping, IndirectObject, Name, Object, ObjectId,
    ObjectKind, PdfString, Position, Skeleton, Stream, StreamFilters, StreamProducer, TextOptions, TextStream,
};
pub use simple_encode::SimpleEncoder;
pub use writer::{Encoder, Writer};

mod error;
mod pdf;
pub mod simple_encode;
pub mod writer;
