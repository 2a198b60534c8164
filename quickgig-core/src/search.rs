use quickgig_entities::{category::*, geo::*, id::*, listing::*};

use crate::usecases::{filter_listings, visible_listings, ListingFilter};

/// Ephemeral state of the search view.
///
/// All derived listing sets are recomputed from this state
/// and the static listings on demand.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchState {
    filter: ListingFilter,
    selected: Option<Id>,
    list_collapsed: bool,
    bbox: Option<MapBbox>,
}

impl SearchState {
    pub fn new(initial_category: Option<Category>) -> Self {
        Self {
            filter: ListingFilter {
                category: initial_category.into(),
                query: String::new(),
            },
            ..Default::default()
        }
    }

    pub const fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub const fn category(&self) -> CategoryFilter {
        self.filter.category
    }

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    pub const fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    pub const fn is_list_collapsed(&self) -> bool {
        self.list_collapsed
    }

    pub const fn bbox(&self) -> Option<&MapBbox> {
        self.bbox.as_ref()
    }

    // A selection is only meaningful within the filter context
    // it has been made in.
    pub fn set_category(&mut self, category: CategoryFilter) {
        log::debug!("Set category filter: {}", category.label());
        self.filter.category = category;
        self.selected = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        log::debug!("Set search query: '{}'", self.filter.query);
        self.selected = None;
    }

    pub fn reset(&mut self) {
        log::debug!("Reset search filter");
        self.filter = ListingFilter::default();
        self.selected = None;
    }

    pub fn select(&mut self, id: Option<Id>) {
        match &id {
            Some(id) => log::debug!("Select listing {id}"),
            None => log::debug!("Clear selection"),
        }
        self.selected = id;
    }

    pub fn toggle_list(&mut self) {
        self.list_collapsed = !self.list_collapsed;
    }

    pub fn set_bbox(&mut self, bbox: MapBbox) {
        self.bbox = Some(bbox);
    }

    /// Listings that pass the category and text filter.
    pub fn filtered<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        filter_listings(listings, &self.filter)
    }

    /// Listings to show in the list panel.
    pub fn visible<'a>(&self, filtered: &[&'a Listing]) -> Vec<&'a Listing> {
        visible_listings(filtered, self.bbox.as_ref(), self.selected.as_ref())
    }

    pub fn selected_listing<'a>(&self, filtered: &[&'a Listing]) -> Option<&'a Listing> {
        let id = self.selected.as_ref()?;
        filtered.iter().copied().find(|l| &l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn start_with_initial_category() {
        let state = SearchState::new(Some(Category::Moving));
        assert_eq!(state.category(), CategoryFilter::Only(Category::Moving));
        assert_eq!(state.query(), "");
        assert!(state.selected().is_none());
        assert!(state.bbox().is_none());
        assert_eq!(SearchState::new(None).category(), CategoryFilter::All);
    }

    #[test]
    fn changing_the_filter_clears_the_selection() {
        let mut state = SearchState::new(None);
        state.select(Some("1".into()));
        state.set_category(Category::Cleaning.into());
        assert!(state.selected().is_none());

        state.select(Some("1".into()));
        state.set_category(Category::Cleaning.into());
        assert!(state.selected().is_none());

        state.select(Some("1".into()));
        state.set_query("옥수");
        assert!(state.selected().is_none());
    }

    #[test]
    fn toggle_list_keeps_filter_and_selection() {
        let mut state = SearchState::new(Some(Category::Cleaning));
        state.set_query("옥수");
        state.select(Some("1".into()));
        state.toggle_list();
        assert!(state.is_list_collapsed());
        assert_eq!(state.query(), "옥수");
        assert_eq!(state.selected().map(Id::as_str), Some("1"));
        state.toggle_list();
        assert!(!state.is_list_collapsed());
    }

    #[test]
    fn reset_restores_all_listings_in_order() {
        let listings = sample_listings();
        let mut state = SearchState::new(None);

        state.set_category(Category::PetWalking.into());
        assert_eq!(ids(&state.filtered(&listings)), vec!["2"]);

        state.set_category(CategoryFilter::All);
        state.set_query("옥수");
        assert_eq!(ids(&state.filtered(&listings)), vec!["1"]);

        state.select(Some("1".into()));
        state.reset();
        assert_eq!(ids(&state.filtered(&listings)), vec!["1", "2", "3"]);
        assert!(state.selected().is_none());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn visible_listings_follow_bbox_and_selection() {
        let listings = sample_listings();
        let mut state = SearchState::new(None);
        let filtered = state.filtered(&listings);
        assert_eq!(ids(&state.visible(&filtered)), vec!["1", "2", "3"]);

        state.set_bbox(south_bbox());
        assert_eq!(ids(&state.visible(&filtered)), vec!["1", "2"]);

        state.select(Some("3".into()));
        assert_eq!(ids(&state.visible(&filtered)), vec!["3"]);
        assert_eq!(
            state.selected_listing(&filtered).map(|l| l.id.as_str()),
            Some("3")
        );

        state.select(None);
        assert_eq!(ids(&state.visible(&filtered)), vec!["1", "2"]);
    }
}
