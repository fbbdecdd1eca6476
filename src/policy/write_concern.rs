/// `Acknowledgment` determines how many nodes must confirm a write before the server reports it
/// as successful.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Acknowledgment {
    /// Do not wait for any acknowledgment; the write is fire-and-forget.
    None = 0,
    /// Wait until the partition leader has applied the write.
    #[default]
    Leader,
    /// Wait until a majority of the partition's replicas have applied the write.
    Majority,
    /// Wait until every replica of the partition has applied the write.
    All,
}

impl From<Acknowledgment> for u8 {
    fn from(ack: Acknowledgment) -> Self {
        ack as Self
    }
}

/// `WriteConcern` describes the durability guarantee requested for a write operation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WriteConcern {
    /// How many nodes must confirm the write.
    pub ack: Acknowledgment,

    /// Require the write to be flushed to the durability journal before it is acknowledged.
    /// Default: false.
    pub journal: bool,
}

impl WriteConcern {
    /// Create a new write concern with the given acknowledgment level and no journal
    /// requirement.
    #[must_use]
    pub const fn new(ack: Acknowledgment) -> Self {
        Self {
            ack,
            journal: false,
        }
    }
}
