use crate::{
    error::{KilnError, Result},
    pdf::{Dictionary, Document, IndirectObject, ObjectId, ObjectKind, StreamFilters},
};

use super::dict_types;

impl Document {
    /// Creates and registers an empty object stream.
    pub fn new_object_stream(&mut self, filters: StreamFilters) -> ObjectId {
        self.add(IndirectObject::object_stream(
            Dictionary::typed(dict_types::OBJECT_STREAM),
            filters,
        ))
    }

    /// Moves the dictionaries of `objects` into the object stream `container`.
    ///
    /// Objects that are not registered yet get registered. Nothing changes
    /// when one of the objects cannot be packed. Once called, the document
    /// is written with a cross-reference stream.
    pub fn pack(&mut self, container: ObjectId, objects: &[ObjectId]) -> Result<()> {
        if !self.object(container)?.is_object_stream() {
            return Err(KilnError::NotAnObjectStream(container));
        }
        for (i, &id) in objects.iter().enumerate() {
            let object = self.object(id)?;
            if object.has_stream() {
                return Err(KilnError::PackedStream(id));
            }
            if let Some(other) = object.container() {
                return Err(KilnError::AlreadyPacked { object: id, container: other });
            }
            if objects[..i].contains(&id) {
                return Err(KilnError::AlreadyPacked { object: id, container });
            }
        }

        for &id in objects {
            if !self.is_registered(id) {
                self.push_registration(id);
            }
            self.objects[id.slot].container = Some(container);
        }
        if let ObjectKind::ObjectStream(elements) = &mut self.objects[container.slot].kind {
            elements.extend_from_slice(objects);
        }
        self.compressed_xref = true;

        log::debug!("packed {} objects into {}", objects.len(), container);
        Ok(())
    }
}
