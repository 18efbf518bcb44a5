use crate::{
    error::{KilnError, Result},
    pdf::{
        trailer::{Trailer, TRAILER},
        xref::{byte_width, Position, XrefEntry, FREE_HEAD_LINE},
        Dictionary, IndirectObject, ObjectId,
    },
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// Comment line with high bytes, marks the file as binary.
const BINARY_MARKER: &[u8] = b"%\xe2\xe3\xcf\xd3\n";
const XREF: &[u8] = b"xref\n";
const START_XREF: &[u8] = b"startxref\n";
const EOF: &[u8] = b"%%EOF\n";

impl SimpleEncoder<'_> {
    /// Writes the complete file: header, body, cross-reference section,
    /// trailer and `startxref`.
    ///
    /// A cross-reference stream is used once the document contains object
    /// streams, a classic table otherwise.
    pub fn write_document(&self, writer: &mut dyn Writer) -> Result<()> {
        let document = self.document();
        let root = document.catalog().ok_or(KilnError::MissingCatalog)?;
        log::debug!("catalog is {}", root);

        log::trace!("write header");
        let (major, minor) = document.config().version;
        writer.write(format!("%PDF-{}.{}\n", major, minor).as_bytes());
        writer.write(BINARY_MARKER);

        let positions = self.write_body(writer)?;

        let start_xref = writer.position();
        if document.is_compressed() || positions.iter().any(Position::is_compressed) {
            self.write_xref_stream(root, positions, writer)?;
        } else {
            self.write_xref_table(root, &positions, writer)?;
        }

        writer.write(START_XREF);
        writer.write(start_xref.to_string().as_bytes());
        writer.write(b"\n");
        writer.write(EOF);
        Ok(())
    }

    /// Writes every registered object that is not packed and returns the
    /// position of each registered object, in object number order.
    fn write_body(&self, writer: &mut dyn Writer) -> Result<Vec<Position>> {
        let document = self.document();
        let mut positions = Vec::with_capacity(document.len());

        for (number, id, object) in document.registered() {
            let position = match object.container() {
                Some(container) => {
                    let (container_number, _) = document.resolve(container)?;
                    let index = document
                        .object(container)?
                        .elements()
                        .iter()
                        .position(|e| *e == id)
                        .ok_or(KilnError::NotAnObjectStream(container))?;
                    Position::Compressed {
                        container: container_number,
                        index,
                    }
                }
                None => {
                    let position = Position::Direct {
                        byte_offset: writer.position(),
                    };
                    self.write_object_block(number, object, writer)?;
                    position
                }
            };
            log::trace!("object {} at {:?}", number, position);
            positions.push(position);
        }

        Ok(positions)
    }

    fn write_xref_table(&self, root: ObjectId, positions: &[Position], writer: &mut dyn Writer) -> Result<()> {
        log::debug!("write xref table with {} entries", positions.len() + 1);

        writer.write(XREF);
        writer.write(format!("0 {}\n", positions.len() + 1).as_bytes());
        writer.write(FREE_HEAD_LINE);
        for offset in positions.iter().filter_map(Position::byte_offset) {
            writer.write(format!("{:010} 00000 n \n", offset).as_bytes());
        }

        let trailer = Trailer {
            size: positions.len() + 1,
            root,
            info: self.document().info(),
        };
        writer.write(TRAILER);
        writer.write(b"\n");
        self.write_to(&Dictionary::from(&trailer), writer)?;
        writer.write(b"\n");
        Ok(())
    }

    /// Writes the xref stream as the next object number at the current
    /// position. Its own record is part of the stream.
    fn write_xref_stream(&self, root: ObjectId, mut positions: Vec<Position>, writer: &mut dyn Writer) -> Result<()> {
        let document = self.document();
        let number = positions.len() as u32 + 1;
        positions.push(Position::Direct {
            byte_offset: writer.position(),
        });

        let max_offset = positions.iter().filter_map(Position::byte_offset).max().unwrap_or(0);
        let widths = (byte_width(max_offset), byte_width(document.max_object_stream_len()));
        log::debug!(
            "write xref stream {} with {} entries, widths [1 {} {}]",
            number,
            positions.len() + 1,
            widths.0,
            widths.1
        );

        let mut data = Vec::<u8>::with_capacity((positions.len() + 1) * (1 + widths.0 + widths.1));
        XrefEntry::Free.encode(widths, &mut data);
        for position in positions.iter() {
            XrefEntry::from(*position).encode(widths, &mut data);
        }

        let trailer = Trailer {
            size: positions.len() + 1,
            root,
            info: document.info(),
        };
        let xref = IndirectObject::with_stream(
            trailer.xref_stream_dictionary(widths),
            data,
            document.config().xref_stream_filters,
        );
        self.write_object_block(number, &xref, writer)
    }
}
