use crate::pdf::ObjectId;

pub type Result<T> = std::result::Result<T, KilnError>;

#[derive(Debug, thiserror::Error)]
pub enum KilnError {
    /// A value is not one of the variants accepted at this position.
    #[error("{context} does not accept {found} values (got {value})")]
    TypeMismatch {
        context: &'static str,
        found: &'static str,
        value: String,
    },

    #[error("name must be text, got bytes {0:?}")]
    InvalidName(Vec<u8>),

    #[error("object {0} already contains a stream")]
    StreamAlreadyPresent(ObjectId),

    #[error("object {0} does not contain a stream")]
    MissingStream(ObjectId),

    #[error("object {0} does not belong to this document")]
    UnknownObject(ObjectId),

    #[error("object {0} is not registered with the document")]
    NotRegistered(ObjectId),

    #[error("object {0} is already registered with the document")]
    AlreadyRegistered(ObjectId),

    /// Only streamless objects can live inside an object stream.
    #[error("object {0} carries a stream and cannot be packed into an object stream")]
    PackedStream(ObjectId),

    #[error("object {object} is already packed into object stream {container}")]
    AlreadyPacked { object: ObjectId, container: ObjectId },

    #[error("object {0} is not an object stream")]
    NotAnObjectStream(ObjectId),

    #[error("document has no catalog object")]
    MissingCatalog,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
