//! # quickgig-core
//!
//! Application logic of QuickGig that does not depend on the browser:
//! filtering, the state of the search, detail and root views, price
//! formatting and the map adapter behind the [`map::MapProvider`] port.

use quickgig_entities::{listing::*, review::*};

pub mod bbox;
pub mod format;
pub mod gallery;
pub mod map;
pub mod search;
pub mod shell;
pub mod usecases;

/// Read-only access to all listings.
///
/// There is intentionally no query interface; consumers filter
/// the full collection themselves.
pub trait ListingRepo {
    fn all_listings(&self) -> &[Listing];
}

pub trait ReviewRepo {
    fn all_reviews(&self) -> &[Review];
}

impl ListingRepo for Vec<Listing> {
    fn all_listings(&self) -> &[Listing] {
        self
    }
}

impl ListingRepo for [Listing] {
    fn all_listings(&self) -> &[Listing] {
        self
    }
}
