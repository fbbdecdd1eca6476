//! Pluggable serialization of documents into their wire representation.
//!
//! The bulk-insert pipeline serializes every document through a [`DocumentEncoder`]. Callers can
//! override the strategy per operation through
//! [`InsertPolicy::encoder`](crate::policy::InsertPolicy::encoder); when no override is given,
//! [`MsgpackEncoder`] is used.

use std::fmt;

use bytes::BytesMut;

use crate::{
    msgpack::{encoder, Sink},
    Document,
};

/// Errors that a [`DocumentEncoder`] may raise while serializing a document.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The encoding cannot represent one of the document's values.
    #[error("value cannot be represented in the target encoding: {0}")]
    UnsupportedValue(String),
}

/// Strategy for serializing a [`Document`] into the byte representation sent to the server.
///
/// Implementations must be deterministic within a single operation: [`encoded_size`] is called
/// first to size the output buffer, and [`encode`] must then produce exactly that many bytes for
/// the same document.
///
/// [`encoded_size`]: Self::encoded_size
/// [`encode`]: Self::encode
pub trait DocumentEncoder: fmt::Debug + Send + Sync {
    /// Number of bytes [`encode`](Self::encode) will produce for `doc`.
    fn encoded_size(&self, doc: &Document) -> usize;

    /// Serialize `doc` into `buf`.
    fn encode(&self, doc: &Document, buf: &mut BytesMut) -> Result<(), EncodeError>;
}

/// The default document encoder, producing MessagePack.
#[derive(Clone, Copy, Debug, Default)]
pub struct MsgpackEncoder;

impl DocumentEncoder for MsgpackEncoder {
    fn encoded_size(&self, doc: &Document) -> usize {
        encoder::pack_document(&mut Sink, doc)
    }

    fn encode(&self, doc: &Document, buf: &mut BytesMut) -> Result<(), EncodeError> {
        encoder::pack_document(buf, doc);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::{DocumentEncoder, MsgpackEncoder};

    #[test]
    fn single_field_document() {
        let doc = crate::doc!("a" => 1);

        let mut buf = BytesMut::new();
        MsgpackEncoder.encode(&doc, &mut buf).unwrap();

        assert_eq!(&[0x81, 0xa1, b'a', 0x01], &buf[..]);
    }

    #[test]
    fn size_matches_encoded_bytes() {
        let doc = crate::doc!(
            "name" => "aurelia",
            "age" => 3,
            "weight" => 4.25,
            "tags" => crate::list!["small", "grey"],
            "chip" => vellum_blob(),
        );

        let size = MsgpackEncoder.encoded_size(&doc);
        let mut buf = BytesMut::new();
        MsgpackEncoder.encode(&doc, &mut buf).unwrap();

        assert_eq!(size, buf.len());
    }

    #[test]
    fn empty_document() {
        let doc = crate::Document::new();

        assert_eq!(1, MsgpackEncoder.encoded_size(&doc));

        let mut buf = BytesMut::new();
        MsgpackEncoder.encode(&doc, &mut buf).unwrap();
        assert_eq!(&[0x80], &buf[..]);
    }

    fn vellum_blob() -> Vec<u8> {
        (0..=255).collect()
    }
}
