//! Assembly of wire messages for the vellum protocol.
//!
//! This module builds the byte-exact request a transport hands to the server. It performs no
//! network I/O itself; the transport, acknowledgment handling, and response parsing live in the
//! server-facing layers.

mod insert;

use bitflags::bitflags;
use bytes::BufMut;

pub use self::insert::InsertRequest;
use crate::codec::EncodeError;

pub(crate) const PROTO_VERSION: u8 = 1;

/// Message type codes of the vellum protocol.
pub(crate) const MSG_TYPE_INSERT: u8 = 4;

// Guards against building unbounded requests from corrupt or hostile input.
pub(crate) const MAX_DOCUMENT_SIZE: usize = 1024 * 1024;
pub(crate) const MAX_REQUEST_SIZE: usize = 8 * 1024 * 1024;

pub type Result<T, E = WireError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("request exceeds maximum size: {size} (max {max})")]
    SizeExceeded { size: usize, max: usize },
    #[error("document {index} exceeds maximum encoded size: {size} (max {max})")]
    DocumentTooLarge {
        index: usize,
        size: usize,
        max: usize,
    },
    #[error("failed to encode document {index}")]
    Encode {
        index: usize,
        #[source]
        source: EncodeError,
    },
    #[error("namespace and collection names must not be empty")]
    EmptyName,
}

bitflags! {
    /// Attribute bits carried in every insert message header.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct InsertAttr: u8 {
        /// Keep processing the remaining documents of the batch after a per-document failure.
        const CONTINUE_ON_ERROR = 1;
        /// Flush the write to the durability journal before acknowledging.
        const JOURNAL = 1 << 1;
    }
}

/// Fixed-size frame preceding every message: protocol version, message type, and the size of the
/// message body in the lower 48 bits.
pub(crate) struct ProtoHeader {
    pub size: usize,
}

impl ProtoHeader {
    pub const SIZE: usize = 8;

    pub fn write_to(&self, buf: &mut impl BufMut) {
        buf.put_u64(
            (u64::from(PROTO_VERSION) << 56)
                | (u64::from(MSG_TYPE_INSERT) << 48)
                | self.size as u64,
        );
    }
}
