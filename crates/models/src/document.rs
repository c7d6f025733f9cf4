use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// A persisted record with one store-assigned identifier and mutable business fields.
pub trait Document: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Partial-update payload; every field distinguishes "absent" from "present".
    type Patch: DeserializeOwned + Debug + Send + Sync + 'static;

    /// Collection name, used for storage file names and log fields.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn clear_id(&mut self);

    /// Apply every present field of `patch` that differs from the current value.
    ///
    /// Fields are visited in declaration order and all of them are inspected;
    /// the return value is true when at least one field was assigned.
    fn apply_patch(&mut self, patch: Self::Patch) -> bool;
}
