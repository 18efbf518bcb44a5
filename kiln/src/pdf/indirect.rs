use std::fmt::Debug;

use crate::error::{KilnError, Result};

use super::{Dictionary, ObjectId};

/// Something that renders to stream bytes when the document is written.
pub trait StreamProducer: Debug {
    fn produce(&self) -> Vec<u8>;
}

#[derive(Debug)]
pub enum Stream {
    Raw(Vec<u8>),
    Produced(Box<dyn StreamProducer>),
}

impl Stream {
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Stream::Raw(data) => data.clone(),
            Stream::Produced(producer) => producer.produce(),
        }
    }
}

impl From<Vec<u8>> for Stream {
    fn from(v: Vec<u8>) -> Self {
        Stream::Raw(v)
    }
}

impl From<&[u8]> for Stream {
    fn from(v: &[u8]) -> Self {
        Stream::Raw(v.to_vec())
    }
}

impl From<Box<dyn StreamProducer>> for Stream {
    fn from(p: Box<dyn StreamProducer>) -> Self {
        Stream::Produced(p)
    }
}

/// Filters applied to an object's stream when it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamFilters {
    /// zlib compression, `/FlateDecode`.
    pub compress: bool,
    /// Lowercase hex digits plus `>`, `/ASCIIHexDecode`.
    pub hex: bool,
}

impl StreamFilters {
    pub const NONE: StreamFilters = StreamFilters {
        compress: false,
        hex: false,
    };

    pub fn new(compress: bool, hex: bool) -> Self {
        Self { compress, hex }
    }
}

impl Default for StreamFilters {
    fn default() -> Self {
        Self {
            compress: true,
            hex: true,
        }
    }
}

#[derive(Debug)]
pub enum ObjectKind {
    Plain,
    /// Object stream holding the dictionaries of the listed objects.
    ObjectStream(Vec<ObjectId>),
}

/// A numbered object: one dictionary and an optional stream.
#[derive(Debug)]
pub struct IndirectObject {
    pub dictionary: Dictionary,
    pub filters: StreamFilters,
    stream: Option<Stream>,
    pub(crate) container: Option<ObjectId>,
    pub(crate) kind: ObjectKind,
}

impl IndirectObject {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            filters: StreamFilters::default(),
            stream: None,
            container: None,
            kind: ObjectKind::Plain,
        }
    }

    pub fn with_stream(dictionary: Dictionary, stream: impl Into<Stream>, filters: StreamFilters) -> Self {
        Self {
            stream: Some(stream.into()),
            filters,
            ..Self::new(dictionary)
        }
    }

    pub fn with_filters(mut self, filters: StreamFilters) -> Self {
        self.filters = filters;
        self
    }

    pub(crate) fn object_stream(dictionary: Dictionary, filters: StreamFilters) -> Self {
        Self {
            filters,
            kind: ObjectKind::ObjectStream(Vec::new()),
            ..Self::new(dictionary)
        }
    }

    /// Attaches the stream. An object holds at most one stream; a second
    /// attempt fails and leaves the first stream in place.
    ///
    /// `id` is only used for error reporting.
    pub(crate) fn attach_stream(&mut self, id: ObjectId, stream: impl Into<Stream>) -> Result<()> {
        if self.has_stream() {
            return Err(KilnError::StreamAlreadyPresent(id));
        }
        if self.container.is_some() {
            return Err(KilnError::PackedStream(id));
        }
        self.stream = Some(stream.into());
        Ok(())
    }

    /// Appends bytes to the attached stream.
    pub(crate) fn extend_stream(&mut self, id: ObjectId, data: &[u8]) -> Result<()> {
        let stream = self.stream.take().ok_or(KilnError::MissingStream(id))?;
        let mut bytes = match stream {
            Stream::Raw(bytes) => bytes,
            Stream::Produced(producer) => producer.produce(),
        };
        bytes.extend_from_slice(data);
        self.stream = Some(Stream::Raw(bytes));
        Ok(())
    }

    /// Object streams count as having a stream, their content is generated.
    pub fn has_stream(&self) -> bool {
        self.stream.is_some() || self.is_object_stream()
    }

    pub fn stream(&self) -> Option<&Stream> {
        self.stream.as_ref()
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn is_object_stream(&self) -> bool {
        matches!(self.kind, ObjectKind::ObjectStream(_))
    }

    /// Object stream that holds this object, if packed.
    pub fn container(&self) -> Option<ObjectId> {
        self.container
    }

    /// Objects packed into this object stream.
    pub fn elements(&self) -> &[ObjectId] {
        match &self.kind {
            ObjectKind::ObjectStream(elements) => elements,
            ObjectKind::Plain => &[],
        }
    }
}
