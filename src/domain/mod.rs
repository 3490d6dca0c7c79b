//! Domain layer containing the back office's core types.
//!
//! # Module Organization
//!
//! - `action` - Uniform success/failure envelope for remote-backed actions
//! - `catalog` - Read models for the commerce resources we list
//! - `paging` - Pagination input validation and page snapshots
//! - `session` - Operator identity and session token errors

pub mod action;
pub mod catalog;
pub mod paging;
pub mod session;
