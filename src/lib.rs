#![forbid(unsafe_code)]
#![warn(
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::get_unwrap,
    clippy::self_named_module_files,
    clippy::str_to_string,
    clippy::wildcard_imports,
    clippy::string_add,
    clippy::try_err,
    clippy::unreachable
)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    missing_docs
)]

//! Client-side building blocks for the vellum document store.
//!
//! Vellum is a document-oriented database; records are schemaless [`Document`]s of named, typed
//! [`Value`]s, grouped into collections within a namespace. This crate contains everything a
//! client needs before the socket: the document model, pluggable document encoding, per-operation
//! policies, and the assembly of bulk-insert wire messages from those policies. The transport and
//! the server's acknowledgment protocol are not part of this crate.
//!
//! # Examples
//!
//! Configure a bulk insert and assemble its wire message.
//!
//! ```rust
//! use vellum::{
//!     policy::{Acknowledgment, InsertPolicy, WriteConcern},
//!     wire::InsertRequest,
//! };
//!
//! let policy = InsertPolicy::new()
//!     .write_concern(WriteConcern::new(Acknowledgment::Majority))
//!     .continue_on_error(true);
//!
//! let documents = vec![
//!     vellum::doc!("name" => "aurelia", "age" => 3),
//!     vellum::doc!("name" => "livia", "tags" => vellum::list!["small", "grey"]),
//! ];
//!
//! let request = InsertRequest::build(&policy, "test", "pets", &documents).unwrap();
//! assert_eq!(2, request.document_count());
//! assert!(!request.bytes().is_empty());
//! ```

pub use codec::{DocumentEncoder, EncodeError, MsgpackEncoder};
pub use document::Document;
pub use value::Value;

pub mod codec;
mod document;
pub mod errors;
#[macro_use]
mod macros;
mod msgpack;
pub mod policy;
mod value;
pub mod wire;
