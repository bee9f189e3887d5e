//! Boundary-level services surrounding label generation.
//!
//! These are the pure, network-free pieces of the catalog/inventory
//! workflow: parsing inventory adjustment commands, filtering and paginating
//! in-memory product records, and deriving variant option codes. Remote
//! sync, persistence, and HTTP transport stay with the caller.

pub mod inventory;
pub mod items;
pub mod variants;
