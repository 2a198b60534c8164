use url::form_urlencoded;

use quickgig_entities::{category::*, id::*};

use crate::{usecases::find_listing, ListingRepo};

/// Name of the query parameter that opens a listing directly.
pub const DEFAULT_DEEP_LINK_KEY: &str = "listing";

/// The top-level view of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,
    Search { initial_category: Option<Category> },
    Detail(Id),
}

impl View {
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search { .. })
    }
}

/// Read the listing id from a query string like `?listing=42&x=y`.
pub fn parse_deep_link(query: &str, key: &str) -> Option<Id> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
        .map(Id::from)
}

/// Link that opens the detail view of a listing, e.g. in a new tab.
pub fn deep_link_href(key: &str, id: &Id) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, id.as_str())
        .finish();
    format!("?{query}")
}

/// The query string with the deep link parameter removed.
///
/// Returns an empty string if no other parameters remain,
/// otherwise the remaining parameters prefixed with `?`.
pub fn strip_deep_link(query: &str, key: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut remaining = 0;
    for (k, v) in form_urlencoded::parse(query.as_bytes()).filter(|(k, _)| k != key) {
        serializer.append_pair(&k, &v);
        remaining += 1;
    }
    if remaining == 0 {
        return String::new();
    }
    format!("?{}", serializer.finish())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    view: View,
}

impl Shell {
    /// Enter the detail view directly if the query string
    /// refers to a known listing.
    pub fn initial<R>(query: &str, key: &str, repo: &R) -> Self
    where
        R: ListingRepo + ?Sized,
    {
        let view = match parse_deep_link(query, key) {
            Some(id) if find_listing(repo, id.as_str()).is_some() => {
                log::info!("Open listing {id} from deep link");
                View::Detail(id)
            }
            Some(id) => {
                log::warn!("Ignore deep link to unknown listing {id}");
                View::Landing
            }
            None => View::Landing,
        };
        Self { view }
    }

    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Switch to another view.
    ///
    /// Returns `true` if a detail view has been left and the deep link
    /// must be removed from the address, so that returning to the
    /// application does not open it again.
    pub fn navigate(&mut self, view: View) -> bool {
        log::debug!("Navigate to {view:?}");
        let left_detail = matches!(&self.view, View::Detail(id) if view != View::Detail(id.clone()));
        self.view = view;
        left_detail
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            view: View::Landing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;

    #[test]
    fn parse_query_parameter() {
        assert_eq!(parse_deep_link("?listing=1", "listing"), Some("1".into()));
        assert_eq!(
            parse_deep_link("foo=bar&listing=extra-3", "listing"),
            Some("extra-3".into())
        );
        assert_eq!(parse_deep_link("?listing=a%20b", "listing"), Some("a b".into()));
        assert_eq!(parse_deep_link("?listing=%201", "listing"), Some(" 1".into()));
        assert_eq!(parse_deep_link("?listing=", "listing"), None);
        assert_eq!(parse_deep_link("", "listing"), None);
        assert_eq!(parse_deep_link("?id=1", "listing"), None);
    }

    #[test]
    fn build_and_strip_deep_links() {
        let href = deep_link_href("listing", &"extra-3".into());
        assert_eq!(href, "?listing=extra-3");
        assert_eq!(parse_deep_link(&href, "listing"), Some("extra-3".into()));
        assert_eq!(strip_deep_link(&href, "listing"), "");
        assert_eq!(strip_deep_link("?a=1&listing=2&b=3", "listing"), "?a=1&b=3");
    }

    #[test]
    fn open_known_listing_from_deep_link() {
        let listings = sample_listings();
        let shell = Shell::initial("?listing=2", DEFAULT_DEEP_LINK_KEY, &listings);
        assert_eq!(shell.view(), &View::Detail("2".into()));
    }

    #[test]
    fn unknown_listing_stays_on_landing() {
        let listings = sample_listings();
        let shell = Shell::initial("?listing=42", DEFAULT_DEEP_LINK_KEY, &listings);
        assert_eq!(shell.view(), &View::Landing);
        let shell = Shell::initial("?listing=%201", DEFAULT_DEEP_LINK_KEY, &listings);
        assert_eq!(shell.view(), &View::Landing);
        let shell = Shell::initial("", DEFAULT_DEEP_LINK_KEY, &listings);
        assert_eq!(shell.view(), &View::Landing);
    }

    #[test]
    fn leaving_the_detail_view_clears_the_deep_link() {
        let listings = sample_listings();
        let mut shell = Shell::initial("?listing=1", DEFAULT_DEEP_LINK_KEY, &listings);
        assert!(!shell.navigate(View::Detail("1".into())));
        assert!(shell.navigate(View::Search {
            initial_category: None
        }));
        assert!(shell.view().is_search());
        assert!(!shell.navigate(View::Landing));
    }
}
