#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # quickgig-entities
//!
//! Reusable, agnostic domain entities for QuickGig.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod geo;
pub mod id;
pub mod listing;
pub mod price;
pub mod review;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
