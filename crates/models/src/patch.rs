//! Tri-state field handling for partial updates.
//!
//! A patch field is `Option<Option<T>>`:
//! - `None`: key absent from the payload, leave the stored value alone
//! - `Some(None)`: explicit `null`, clear the stored value
//! - `Some(Some(v))`: set the stored value to `v`

use serde::{Deserialize, Deserializer};

/// `deserialize_with` helper: a key that is present (even as `null`) yields `Some`.
/// Pair with `#[serde(default)]` so a missing key yields `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Assign `incoming` onto `current` when it is present and unequal.
/// Returns whether an assignment happened.
pub fn apply_field<T: PartialEq>(current: &mut Option<T>, incoming: Option<Option<T>>) -> bool {
    match incoming {
        Some(value) if *current != value => {
            *current = value;
            true
        }
        _ => false,
    }
}
