use std::sync::Arc;

use crate::{codec::DocumentEncoder, policy::WriteConcern};

/// `InsertPolicy` encapsulates optional parameters for bulk insert operations.
///
/// All fields are independent and none is validated here; the insert pipeline reads the policy
/// and reports any misuse as its own error. A policy performs no I/O and holds no locks. The
/// builder-style setters consume and return the policy, so a single expression can configure all
/// fields:
///
/// ```
/// use vellum::policy::{InsertPolicy, WriteConcern};
///
/// let policy = InsertPolicy::new()
///     .write_concern(WriteConcern::default())
///     .continue_on_error(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InsertPolicy {
    /// Durability guarantee to request for the insert. `None` defers to the collection-level
    /// default write concern.
    pub write_concern: Option<WriteConcern>,

    /// Keep inserting the remaining documents of a batch after one of them fails, most commonly
    /// due to a duplicate key. Only relevant for multi-document inserts. Default: false.
    pub continue_on_error: bool,

    /// Serialization strategy override for the documents. `None` defers to the default encoder.
    pub encoder: Option<Arc<dyn DocumentEncoder>>,
}

impl InsertPolicy {
    /// Create a new insert policy with all parameters deferring to their defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the write concern to request for the insert.
    #[must_use]
    pub fn write_concern(mut self, write_concern: WriteConcern) -> Self {
        self.write_concern = Some(write_concern);
        self
    }

    /// Set whether documents will continue to be inserted after a failure to insert one.
    #[must_use]
    pub fn continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Set the encoder to use for the documents.
    #[must_use]
    pub fn encoder(mut self, encoder: Arc<dyn DocumentEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::InsertPolicy;
    use crate::{
        codec::{DocumentEncoder, MsgpackEncoder},
        policy::{Acknowledgment, WriteConcern},
    };

    #[test]
    fn default_state() {
        let policy = InsertPolicy::new();

        assert_eq!(None, policy.write_concern);
        assert!(!policy.continue_on_error);
        assert!(policy.encoder.is_none());
    }

    #[test]
    fn chaining_configures_all_fields() {
        let encoder: Arc<dyn DocumentEncoder> = Arc::new(MsgpackEncoder);
        let policy = InsertPolicy::new()
            .write_concern(WriteConcern::new(Acknowledgment::Majority))
            .continue_on_error(true)
            .encoder(Arc::clone(&encoder));

        assert_eq!(
            Some(WriteConcern::new(Acknowledgment::Majority)),
            policy.write_concern
        );
        assert!(policy.continue_on_error);
        assert!(Arc::ptr_eq(policy.encoder.as_ref().unwrap(), &encoder));
    }

    #[test]
    fn fields_are_independent() {
        let policy = InsertPolicy::new().continue_on_error(true);

        assert!(policy.continue_on_error);
        assert_eq!(None, policy.write_concern);
        assert!(policy.encoder.is_none());

        let policy = InsertPolicy::new().write_concern(WriteConcern::default());

        assert!(!policy.continue_on_error);
        assert!(policy.encoder.is_none());
    }

    #[test]
    fn last_setter_wins() {
        let policy = InsertPolicy::new()
            .write_concern(WriteConcern::new(Acknowledgment::All))
            .write_concern(WriteConcern::new(Acknowledgment::None))
            .continue_on_error(true)
            .continue_on_error(false);

        assert_eq!(
            Some(WriteConcern::new(Acknowledgment::None)),
            policy.write_concern
        );
        assert!(!policy.continue_on_error);
    }

    #[test]
    fn unset_fields_survive_clone() {
        let policy = InsertPolicy::new().continue_on_error(true);
        let clone = policy.clone();

        assert!(clone.continue_on_error);
        assert_eq!(None, clone.write_concern);
        assert!(clone.encoder.is_none());
    }
}
