use crate::{
    error::Result,
    pdf::{
        document::{K_FIRST, K_STREAM_OBJECT_COUNT},
        Dictionary, ObjectId,
    },
    writer::Encoder,
};

use super::SimpleEncoder;

impl SimpleEncoder<'_> {
    /// Dictionary and unfiltered content of an object stream holding the
    /// dictionaries of `elements`.
    ///
    /// The content is a header of `<number> <offset>` pairs followed by the
    /// element dictionaries, each preceded by a newline. Offsets count from
    /// the start of the data part.
    pub(crate) fn object_stream_content(
        &self,
        dictionary: &Dictionary,
        elements: &[ObjectId],
    ) -> Result<(Dictionary, Vec<u8>)> {
        let document = self.document();
        let mut header = Vec::<u8>::new();
        let mut data = Vec::<u8>::new();

        for &id in elements {
            let (number, _) = document.resolve(id)?;
            if !header.is_empty() {
                header.push(b' ');
            }
            header.extend_from_slice(format!("{} {}", number, data.len()).as_bytes());
            data.push(b'\n');
            self.write_to(&document.object(id)?.dictionary, &mut data)?;
        }

        let mut dictionary = dictionary.clone();
        dictionary.remove_all(K_STREAM_OBJECT_COUNT);
        dictionary.remove_all(K_FIRST);
        dictionary.insert(K_STREAM_OBJECT_COUNT, elements.len() as i64);
        dictionary.insert(K_FIRST, header.len() as i64 + 1);

        log::trace!("object stream with {} objects, header {} bytes", elements.len(), header.len());
        header.extend(data);
        Ok((dictionary, header))
    }
}
