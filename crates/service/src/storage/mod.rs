//! Storage abstractions for service layer
//!
//! Contains the map-backed document store shared by every collection,
//! optionally persisted as a JSON file.

pub mod json_map_store;
