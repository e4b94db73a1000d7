#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # umkm-entities
//!
//! Reusable, agnostic domain entities for the UMKM craft finder.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod cart;
pub mod category;
pub mod geo;
pub mod id;
pub mod image;
pub mod location;
pub mod mood;
pub mod point;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
