use crate::pdf::{Dictionary, Document, IndirectObject, ObjectId};

use super::{dict_types, DocumentConfig, K_OUTLINES, K_PAGES};

/// Objects of a minimal one-page document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skeleton {
    pub catalog: ObjectId,
    pub outlines: ObjectId,
    pub pages: ObjectId,
    pub page: ObjectId,
}

impl Document {
    /// Document holding a catalog, an empty outline, a page tree and one
    /// page, registered in that order after the info dictionary.
    pub fn with_skeleton(config: DocumentConfig) -> (Document, Skeleton) {
        let mut document = Document::new(config);

        let outlines = document.insert(IndirectObject::new(
            Dictionary::typed(dict_types::OUTLINES).with_count(0),
        ));
        let pages = document.insert(IndirectObject::new(
            Dictionary::typed(dict_types::PAGES).with_count(1),
        ));
        let page = document.insert(IndirectObject::new(
            Dictionary::typed(dict_types::PAGE).with_parent(pages),
        ));
        let catalog = document.insert(IndirectObject::new(
            Dictionary::typed(dict_types::CATALOG)
                .with(K_OUTLINES, outlines)
                .with(K_PAGES, pages),
        ));
        document.objects[pages.slot].dictionary.add_kids([page]);

        for id in [catalog, outlines, pages, page] {
            document.push_registration(id);
        }

        log::debug!("created document skeleton");
        (
            document,
            Skeleton {
                catalog,
                outlines,
                pages,
                page,
            },
        )
    }
}
