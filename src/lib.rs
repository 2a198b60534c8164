use anyhow::anyhow;
use leptos::*;
use wasm_bindgen::JsValue;

use quickgig_core::{
    shell::{strip_deep_link, Shell, View},
    usecases::find_listing,
    ListingRepo, ReviewRepo,
};
use quickgig_db_memory::MemoryDb;
use quickgig_entities::{category::Category, id::Id};

pub mod config;

mod components;
mod naver;
mod pages;

use self::{components::*, config::Config, pages::*};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Landing,
    Search(Option<Category>),
    Detail,
}

#[component]
#[must_use]
pub fn App(config: Config) -> impl IntoView {
    let Config {
        map: map_config,
        deep_link,
        ..
    } = config;
    let deep_link_key = deep_link.key;

    // -- repository -- //

    let db = MemoryDb::shared();
    let listings = db.all_listings();
    let reviews = db.all_reviews();

    // -- signals -- //

    let query = window().location().search().unwrap_or_default();
    let shell = RwSignal::new(Shell::initial(&query, &deep_link_key, db));

    let page = create_memo(move |_| {
        shell.with(|shell| match shell.view() {
            View::Landing => Page::Landing,
            View::Search { initial_category } => Page::Search(*initial_category),
            View::Detail(_) => Page::Detail,
        })
    });
    let search_active = Signal::derive(move || shell.with(|shell| shell.view().is_search()));
    let detail_listing = create_memo(move |_| {
        shell.with(|shell| match shell.view() {
            View::Detail(id) => find_listing(db, id.as_str()),
            _ => None,
        })
    });

    // -- callbacks -- //

    let key = deep_link_key.clone();
    let navigate = Callback::new(move |view: View| {
        if shell.try_update(|shell| shell.navigate(view)) == Some(true) {
            if let Err(err) = clear_deep_link(&key) {
                log::warn!("Unable to remove the deep link from the address: {err}");
            }
        }
    });
    let on_home = Callback::new(move |()| navigate.call(View::Landing));
    let on_map = Callback::new(move |()| {
        if search_active.get_untracked() {
            return;
        }
        navigate.call(View::Search {
            initial_category: None,
        });
    });
    let on_search = Callback::new(move |initial_category| {
        navigate.call(View::Search { initial_category });
    });
    let on_open = Callback::new(move |id: Id| navigate.call(View::Detail(id)));

    view! {
      <NavBar search_active on_home on_map />
      <main>
        { move || match page.get() {
            Page::Landing => view! { <Landing reviews on_search /> }.into_view(),
            Page::Search(initial_category) => view! {
              <Search
                listings
                initial_category
                map_config = map_config.clone()
                deep_link_key = deep_link_key.clone()
                on_open
              />
            }.into_view(),
            Page::Detail => view! {
              <ListingDetails listings listing = detail_listing on_open />
            }.into_view(),
          }
        }
      </main>
    }
}

/// Replace the current history entry with one
/// that no longer contains the deep link parameter.
fn clear_deep_link(key: &str) -> anyhow::Result<()> {
    let location = window().location();
    let search = location.search().map_err(js_error)?;
    let pathname = location.pathname().map_err(js_error)?;
    let hash = location.hash().map_err(js_error)?;
    let url = format!("{pathname}{}{hash}", strip_deep_link(&search, key));
    log::debug!("Replace address with {url}");
    window()
        .history()
        .map_err(js_error)?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .map_err(js_error)?;
    Ok(())
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
