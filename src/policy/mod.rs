//! Policy types encapsulate optional parameters for client operations.

mod insert_policy;
mod write_concern;

pub use self::{
    insert_policy::InsertPolicy,
    write_concern::{Acknowledgment, WriteConcern},
};
