//! Shopdesk - Server-Rendered Commerce Back-Office
//!
//! This crate renders the administrative pages for a commerce platform:
//! operators sign in, then browse paginated listings of products, users,
//! categories, adverts, shops and inventory reservations. All data comes
//! from the remote commerce API; this service holds no database of its
//! own.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
