//! Data models module
//!
//! Defines the catalog row (`Tool`) and the date parsing it relies on.

pub mod tool;

pub use tool::{sources, Tool, GENERAL_CATEGORY};
