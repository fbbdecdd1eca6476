use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, warn};

use super::{
    InsertAttr, ProtoHeader, Result, WireError, MAX_DOCUMENT_SIZE, MAX_REQUEST_SIZE,
};
use crate::{
    codec::{DocumentEncoder, MsgpackEncoder},
    policy::{InsertPolicy, WriteConcern},
    Document,
};

const FIELD_HEADER_SIZE: usize = 5;

// Field type codes of the insert message.
const FIELD_NAMESPACE: u8 = 0;
const FIELD_COLLECTION: u8 = 1;

/// Header of an insert message, following the proto header.
struct MessageHeader {
    insert_attr: InsertAttr,
    ack: u8,
    field_count: u16,
    document_count: u16,
}

impl MessageHeader {
    const SIZE: usize = 8;

    fn for_insert(
        write_concern: WriteConcern,
        continue_on_error: bool,
        field_count: u16,
        document_count: u16,
    ) -> Self {
        let mut insert_attr = InsertAttr::empty();
        if continue_on_error {
            insert_attr |= InsertAttr::CONTINUE_ON_ERROR;
        }
        if write_concern.journal {
            insert_attr |= InsertAttr::JOURNAL;
        }

        Self {
            insert_attr,
            ack: write_concern.ack.into(),
            field_count,
            document_count,
        }
    }

    fn write_to(&self, buf: &mut impl BufMut) {
        buf.put_u8(Self::SIZE as u8);
        buf.put_u8(self.insert_attr.bits());
        buf.put_u8(self.ack);
        buf.put_u8(0);
        buf.put_u16(self.field_count);
        buf.put_u16(self.document_count);
    }
}

/// A fully assembled bulk-insert message, ready to be handed to a transport.
///
/// Building a request reads the [`InsertPolicy`] once and never mutates it. Fields the policy
/// leaves unset fall back to their ambient defaults: [`WriteConcern::default`] for the
/// durability guarantee and [`MsgpackEncoder`] for the document serialization.
#[derive(Debug)]
pub struct InsertRequest {
    data: Bytes,
    document_count: u16,
    skipped: Vec<usize>,
}

impl InsertRequest {
    /// Assemble the insert message for `documents` into the given namespace and collection.
    ///
    /// With [`InsertPolicy::continue_on_error`] set, documents that cannot be encoded are left
    /// out of the request and reported through [`skipped`](Self::skipped); otherwise the first
    /// encoding failure aborts the build.
    pub fn build(
        policy: &InsertPolicy,
        namespace: &str,
        collection: &str,
        documents: &[Document],
    ) -> Result<Self> {
        if namespace.is_empty() || collection.is_empty() {
            return Err(WireError::EmptyName);
        }

        let write_concern = policy.write_concern.unwrap_or_default();
        let encoder = policy
            .encoder
            .as_deref()
            .unwrap_or(&MsgpackEncoder);

        let mut payloads = Vec::with_capacity(documents.len());
        let mut skipped = Vec::new();
        for (index, document) in documents.iter().enumerate() {
            match encode_document(encoder, index, document) {
                Ok(payload) => payloads.push(payload),
                Err(err) if policy.continue_on_error => {
                    warn!(index, error = %err, "skipping document");
                    skipped.push(index);
                }
                Err(err) => return Err(err),
            }
        }

        let fields_size =
            2 * FIELD_HEADER_SIZE + namespace.len() + collection.len();
        let body_size = MessageHeader::SIZE
            + fields_size
            + payloads.iter().map(BytesMut::len).sum::<usize>();
        if body_size > MAX_REQUEST_SIZE {
            return Err(WireError::SizeExceeded {
                size: body_size,
                max: MAX_REQUEST_SIZE,
            });
        }

        let document_count = payloads.len() as u16;

        let mut buf = BytesMut::with_capacity(ProtoHeader::SIZE + body_size);
        ProtoHeader { size: body_size }.write_to(&mut buf);
        MessageHeader::for_insert(write_concern, policy.continue_on_error, 2, document_count)
            .write_to(&mut buf);
        write_field(&mut buf, FIELD_NAMESPACE, namespace);
        write_field(&mut buf, FIELD_COLLECTION, collection);
        for payload in payloads {
            buf.put(payload);
        }

        debug!(
            namespace,
            collection,
            documents = document_count,
            skipped = skipped.len(),
            "assembled insert request"
        );

        Ok(Self {
            data: buf.freeze(),
            document_count,
            skipped,
        })
    }

    /// The raw message bytes.
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    /// Consume the request, returning the raw message bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Number of documents included in the message.
    #[must_use]
    pub fn document_count(&self) -> u16 {
        self.document_count
    }

    /// Indices of the documents that were dropped from the batch because they failed to encode.
    /// Always empty unless [`InsertPolicy::continue_on_error`] is set.
    #[must_use]
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }
}

fn encode_document(
    encoder: &dyn DocumentEncoder,
    index: usize,
    document: &Document,
) -> Result<BytesMut> {
    let size = encoder.encoded_size(document);
    if size > MAX_DOCUMENT_SIZE {
        return Err(WireError::DocumentTooLarge {
            index,
            size,
            max: MAX_DOCUMENT_SIZE,
        });
    }

    let mut buf = BytesMut::with_capacity(size);
    encoder
        .encode(document, &mut buf)
        .map_err(|source| WireError::Encode { index, source })?;

    Ok(buf)
}

fn write_field(buf: &mut impl BufMut, field_type: u8, value: &str) {
    buf.put_u32(value.len() as u32 + 1);
    buf.put_u8(field_type);
    buf.put_slice(value.as_bytes());
}
