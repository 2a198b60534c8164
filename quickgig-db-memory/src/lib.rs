//! # quickgig-db-memory
//!
//! Static, read-only in-memory storage of all listings and reviews.

use std::collections::HashSet;

use lazy_static::lazy_static;

use quickgig_core::{ListingRepo, ReviewRepo};
use quickgig_entities::{listing::*, review::*};

mod fixtures;

lazy_static! {
    static ref SHARED_DB: MemoryDb = MemoryDb::with_fixtures();
}

#[derive(Debug, Default, Clone)]
pub struct MemoryDb {
    listings: Vec<Listing>,
    reviews: Vec<Review>,
}

impl MemoryDb {
    pub fn new(listings: Vec<Listing>, reviews: Vec<Review>) -> Self {
        let mut ids = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !ids.insert(listing.id.as_str()) {
                log::warn!("Duplicate listing id: {}", listing.id);
            }
        }
        Self { listings, reviews }
    }

    /// The mock data of the prototype.
    pub fn with_fixtures() -> Self {
        let listings = fixtures::listings();
        let reviews = fixtures::reviews();
        log::debug!(
            "Loaded {} listings and {} reviews",
            listings.len(),
            reviews.len()
        );
        Self::new(listings, reviews)
    }

    /// Process-wide instance, created on first access.
    pub fn shared() -> &'static Self {
        &SHARED_DB
    }
}

impl ListingRepo for MemoryDb {
    fn all_listings(&self) -> &[Listing] {
        &self.listings
    }
}

impl ReviewRepo for MemoryDb {
    fn all_reviews(&self) -> &[Review] {
        &self.reviews
    }
}
