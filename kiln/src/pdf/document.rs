use std::{
    fs::File,
    io::Write,
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};

use fnv::FnvHashMap;

pub use self::{
    config::{DocumentConfig, Escaping},
    skeleton::Skeleton,
};

use crate::{
    error::{KilnError, Result},
    simple_encode::SimpleEncoder,
};

use super::{Dictionary, IndirectObject, ObjectId, PdfString, Stream};

mod config;
mod object_stream;
mod skeleton;

/// Dictionary type names
pub(crate) mod dict_types {
    pub const OBJECT_STREAM: &str = "ObjStm";
    pub const CATALOG: &str = "Catalog";
    pub const OUTLINES: &str = "Outlines";
    pub const PAGES: &str = "Pages";
    pub const PAGE: &str = "Page";
}

pub(crate) const K_TYPE: &str = "Type";
pub(crate) const K_SUBTYPE: &str = "Subtype";
pub(crate) const K_FILTER: &str = "Filter";
pub(crate) const K_LENGTH: &str = "Length";
pub(crate) const K_PARENT: &str = "Parent";
pub(crate) const K_CONTENTS: &str = "Contents";
pub(crate) const K_KIDS: &str = "Kids";
pub(crate) const K_COUNT: &str = "Count";
pub(crate) const K_OUTLINES: &str = "Outlines";
pub(crate) const K_PAGES: &str = "Pages";
pub(crate) const K_RESOURCES: &str = "Resources";
pub(crate) const K_PROC_SET: &str = "ProcSet";
pub(crate) const K_FONT: &str = "Font";
pub(crate) const K_MEDIA_BOX: &str = "MediaBox";
pub(crate) const K_NAME: &str = "Name";
pub(crate) const K_BASE_FONT: &str = "BaseFont";
pub(crate) const K_ENCODING: &str = "Encoding";
pub(crate) const K_STREAM_OBJECT_COUNT: &str = "N";
pub(crate) const K_FIRST: &str = "First";

pub(crate) const K_TITLE: &str = "Title";
pub(crate) const K_PRODUCER: &str = "Producer";
pub(crate) const K_AUTHOR: &str = "Author";
pub(crate) const K_CREATION_DATE: &str = "CreationDate";

static NEXT_DOCUMENT_TAG: AtomicU64 = AtomicU64::new(1);

/// All objects of one PDF file.
///
/// Objects are created with [`Document::insert`] and become part of the
/// output once registered. The registration order defines the object
/// numbers: the first registered object is `1 0 obj`. The info dictionary is
/// created and registered by [`Document::new`], so it is always object 1.
#[derive(Debug)]
pub struct Document {
    /// Stamped into every handle, so handles of other documents are rejected.
    tag: u64,
    config: DocumentConfig,
    objects: Vec<IndirectObject>,
    /// Registered objects in object number order.
    table: Vec<ObjectId>,
    numbers: FnvHashMap<ObjectId, u32>,
    info: ObjectId,
    compressed_xref: bool,
    font_counter: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}

impl Document {
    pub fn new(config: DocumentConfig) -> Self {
        let info = Dictionary::new()
            .with(K_TITLE, PdfString::from(config.title.as_str()))
            .with(K_PRODUCER, PdfString::from(config.producer.as_str()))
            .with(K_AUTHOR, PdfString::from(config.author.as_str()))
            .with(K_CREATION_DATE, PdfString::new(config.pdf_creation_date()));

        let tag = NEXT_DOCUMENT_TAG.fetch_add(1, Ordering::Relaxed);
        let mut document = Self {
            tag,
            config,
            objects: Vec::new(),
            table: Vec::new(),
            numbers: FnvHashMap::default(),
            info: ObjectId::new(tag, 0),
            compressed_xref: false,
            font_counter: 0,
        };
        document.info = document.add(IndirectObject::new(info));
        document
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// The info dictionary, object 1.
    pub fn info(&self) -> ObjectId {
        self.info
    }

    /// Stores `object` without giving it an object number.
    pub fn insert(&mut self, object: IndirectObject) -> ObjectId {
        let id = ObjectId::new(self.tag, self.objects.len());
        self.objects.push(object);
        id
    }

    /// Appends `id` to the registration table.
    pub fn register(&mut self, id: ObjectId) -> Result<u32> {
        self.object(id)?;
        if self.numbers.contains_key(&id) {
            return Err(KilnError::AlreadyRegistered(id));
        }
        Ok(self.push_registration(id))
    }

    /// Inserts and registers `object`.
    pub fn add(&mut self, object: IndirectObject) -> ObjectId {
        let id = self.insert(object);
        self.push_registration(id);
        id
    }

    fn push_registration(&mut self, id: ObjectId) -> u32 {
        self.table.push(id);
        let number = self.table.len() as u32;
        self.numbers.insert(id, number);
        log::trace!("registered {} as object {}", id, number);
        number
    }

    /// Object number and generation of a registered object.
    pub fn resolve(&self, id: ObjectId) -> Result<(u32, u16)> {
        self.object(id)?;
        self.numbers
            .get(&id)
            .map(|number| (*number, 0))
            .ok_or(KilnError::NotRegistered(id))
    }

    pub fn is_registered(&self, id: ObjectId) -> bool {
        self.numbers.contains_key(&id)
    }

    pub fn object(&self, id: ObjectId) -> Result<&IndirectObject> {
        if id.document != self.tag {
            return Err(KilnError::UnknownObject(id));
        }
        self.objects.get(id.slot).ok_or(KilnError::UnknownObject(id))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut IndirectObject> {
        if id.document != self.tag {
            return Err(KilnError::UnknownObject(id));
        }
        self.objects.get_mut(id.slot).ok_or(KilnError::UnknownObject(id))
    }

    /// Attaches a stream to the object. Fails if it already has one or lives
    /// in an object stream.
    pub fn attach_stream(&mut self, id: ObjectId, stream: impl Into<Stream>) -> Result<()> {
        self.object_mut(id)?.attach_stream(id, stream)
    }

    /// Appends bytes to the object's stream.
    pub fn extend_stream(&mut self, id: ObjectId, data: &[u8]) -> Result<()> {
        self.object_mut(id)?.extend_stream(id, data)
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered objects with their object numbers, in number order.
    pub fn registered(&self) -> impl Iterator<Item = (u32, ObjectId, &IndirectObject)> {
        self.table
            .iter()
            .enumerate()
            .map(move |(i, id)| (i as u32 + 1, *id, &self.objects[id.slot]))
    }

    /// The first registered object with `/Type/Catalog`.
    pub fn catalog(&self) -> Option<ObjectId> {
        self.registered()
            .find(|(_, _, object)| object.dictionary.is_type(dict_types::CATALOG))
            .map(|(_, id, _)| id)
    }

    /// True once an object stream was packed; the file then ends with a
    /// cross-reference stream instead of a table.
    pub fn is_compressed(&self) -> bool {
        self.compressed_xref
    }

    /// Largest number of objects held by a registered object stream.
    pub(crate) fn max_object_stream_len(&self) -> usize {
        self.registered()
            .map(|(_, _, object)| object.elements().len())
            .max()
            .unwrap_or(0)
    }

    /// Resource name for the next font, `F1`, `F2`, ...
    pub(crate) fn next_font_name(&mut self) -> String {
        self.font_counter += 1;
        format!("F{}", self.font_counter)
    }

    /// Renders the whole file.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        SimpleEncoder::new(&self).write_document(&mut out)?;
        log::debug!("rendered {} objects into {} bytes", self.len(), out.len());
        Ok(out)
    }

    /// Renders the file and writes it to `out` in one call.
    pub fn write_to<W: Write>(self, mut out: W) -> Result<()> {
        let bytes = self.into_bytes()?;
        out.write_all(&bytes)?;
        Ok(())
    }

    /// Renders the file and writes it to `path`, replacing an existing file.
    ///
    /// Nothing is created when rendering fails.
    pub fn write(self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.into_bytes()?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(&bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.as_ref().display());
        Ok(())
    }
}
