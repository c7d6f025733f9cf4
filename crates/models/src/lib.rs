//! Document types served by the catalog API.
//!
//! Every collection is a [`Document`]: an entity with a store-assigned id
//! plus a patch payload type describing which business fields a partial
//! update may touch.

pub mod document;
pub mod patch;
pub mod category;
pub mod vendor;

pub use category::{Category, CategoryPatch};
pub use document::Document;
pub use vendor::{Vendor, VendorPatch};
