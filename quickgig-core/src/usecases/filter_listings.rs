use super::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl ListingFilter {
    // Plain, case-sensitive substring match without any normalization.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.category.matches(listing.category)
            && (self.query.is_empty()
                || listing.title.contains(&self.query)
                || listing.location.contains(&self.query))
    }
}

/// Keep the listings that pass the filter in their original order.
pub fn filter_listings<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    listings.iter().filter(|l| filter.matches(l)).collect()
}
