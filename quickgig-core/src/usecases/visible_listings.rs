use super::prelude::*;

/// Restrict to the listings inside the viewport.
///
/// As long as no viewport has been reported all listings pass.
pub fn listings_in_bbox<'a>(listings: &[&'a Listing], bbox: Option<&MapBbox>) -> Vec<&'a Listing> {
    match bbox {
        Some(bbox) => listings.iter().copied().filter(|l| l.in_bbox(bbox)).collect(),
        None => listings.to_vec(),
    }
}

/// The listings to show in the list panel.
///
/// A selected listing overrides the viewport, so that the
/// choice of the user remains visible wherever the map is.
pub fn visible_listings<'a>(
    filtered: &[&'a Listing],
    bbox: Option<&MapBbox>,
    selected: Option<&Id>,
) -> Vec<&'a Listing> {
    if let Some(id) = selected {
        let selected: Vec<_> = filtered.iter().copied().filter(|l| &l.id == id).collect();
        if selected.is_empty() {
            log::warn!("Selected listing {id} is not part of the filtered listings");
        }
        return selected;
    }
    listings_in_bbox(filtered, bbox)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn unknown_bbox_passes_everything() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        assert_eq!(ids(&listings_in_bbox(&all, None)), vec!["1", "2", "3"]);
        assert_eq!(ids(&visible_listings(&all, None, None)), vec!["1", "2", "3"]);
    }

    #[test]
    fn intersect_with_bbox_without_selection() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        let bbox = south_bbox();
        assert_eq!(ids(&visible_listings(&all, Some(&bbox), None)), vec!["1", "2"]);
    }

    #[test]
    fn selection_overrides_bbox() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        let bbox = south_bbox();
        let selected = Id::from("3");
        assert_eq!(
            ids(&visible_listings(&all, Some(&bbox), Some(&selected))),
            vec!["3"]
        );
        assert_eq!(ids(&visible_listings(&all, None, Some(&selected))), vec!["3"]);
    }

    #[test]
    fn selection_outside_of_filtered_listings() {
        let listings = sample_listings();
        let filtered: Vec<_> = listings.iter().take(2).collect();
        let selected = Id::from("3");
        assert!(visible_listings(&filtered, None, Some(&selected)).is_empty());
    }
}
