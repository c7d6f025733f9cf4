//! Service layer providing the generic resource contract on top of models.
//! - Separates the patch/replace rules from data access.
//! - Reuses the `Document` definitions in `models` crate.
//! - One repository and one resource service per collection, all generic.

pub mod errors;
pub mod storage;
pub mod repository;
pub mod resource;
pub mod bootstrap;
pub mod catalog;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::Catalog;
