use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};

use crate::{
    error::Result,
    pdf::{Dictionary, Name, Object, StreamFilters},
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

pub(crate) const FLATE_DECODE: &str = "FlateDecode";
pub(crate) const ASCII_HEX_DECODE: &str = "ASCIIHexDecode";

const START_STREAM: &[u8] = b"stream\n";
const END_STREAM: &[u8] = b"\nendstream";

/// Runs `data` through the enabled filters and returns the dictionary to
/// write alongside it, with filter names and `/Length` filled in.
///
/// `dictionary` is left as is.
pub(crate) fn apply_filters(
    dictionary: &Dictionary,
    mut data: Vec<u8>,
    filters: StreamFilters,
) -> Result<(Dictionary, Vec<u8>)> {
    let mut dictionary = dictionary.clone();

    if filters.hex {
        if !dictionary.has_filter(ASCII_HEX_DECODE) {
            dictionary.filters.push(Object::Name(Name::from(ASCII_HEX_DECODE)));
        }
        let mut hexed = hex::encode(&data).into_bytes();
        // end of data marker
        hexed.push(b'>');
        data = hexed;
    }

    if filters.compress {
        if !dictionary.has_filter(FLATE_DECODE) {
            dictionary.filters.insert(0, Object::Name(Name::from(FLATE_DECODE)));
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&data)?;
        data = encoder.finish()?;
    }

    dictionary.length = Some(data.len());
    Ok((dictionary, data))
}

impl SimpleEncoder<'_> {
    pub(crate) fn write_stream(
        &self,
        dictionary: &Dictionary,
        data: Vec<u8>,
        filters: StreamFilters,
        writer: &mut dyn Writer,
    ) -> Result<()> {
        let (dictionary, data) = apply_filters(dictionary, data, filters)?;
        log::trace!("write stream of {} bytes", data.len());
        self.write_to(&dictionary, writer)?;
        writer.write(START_STREAM);
        writer.write(&data);
        writer.write(END_STREAM);
        Ok(())
    }
}
