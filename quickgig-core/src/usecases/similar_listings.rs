use super::prelude::*;

/// Other listings of the same category, in their original order.
pub fn similar_listings<'a>(
    listings: &'a [Listing],
    listing: &Listing,
    limit: usize,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| l.category == listing.category && l.id != listing.id)
        .take(limit)
        .collect()
}
