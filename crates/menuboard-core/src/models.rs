//! Domain models for menuboard.
//!
//! These are the core types shared across all crates.

pub mod admin;
pub mod menu_item;
pub mod principal;
pub mod restaurant;
