use leptos::*;

use quickgig_core::{format::format_price, search::SearchState, shell::deep_link_href};
use quickgig_entities::{category::*, id::Id, listing::Listing};

use crate::{components::*, config};

#[component]
pub fn Search(
    listings: &'static [Listing],
    initial_category: Option<Category>,
    map_config: config::Map,
    deep_link_key: String,
    on_open: Callback<Id>,
) -> impl IntoView {
    // -- signals -- //

    let state = RwSignal::new(SearchState::new(initial_category));

    let filtered = create_memo(move |_| state.with(|s| s.filtered(listings)));
    let visible = create_memo(move |_| filtered.with(|filtered| state.with(|s| s.visible(filtered))));
    let selected = create_memo(move |_| state.with(|s| s.selected().cloned()));
    let selected_listing =
        create_memo(move |_| filtered.with(|filtered| state.with(|s| s.selected_listing(filtered))));
    let list_collapsed = create_memo(move |_| state.with(SearchState::is_list_collapsed));

    // -- callbacks -- //

    let on_select = Callback::new(move |id: Option<Id>| state.update(|s| s.select(id)));
    let on_bbox_changed = Callback::new(move |bbox| state.update(|s| s.set_bbox(bbox)));
    let on_card_select = Callback::new(move |id: Id| on_select.call(Some(id)));

    let config::Map {
        settings,
        poll_interval,
    } = map_config;
    let deep_link_key = store_value(deep_link_key);

    view! {
      <div class="pt-[64px] h-screen flex flex-col overflow-hidden bg-white">

        // Search & filter header
        <div class="bg-white border-b border-gray-100 p-3 flex flex-wrap items-center gap-3 z-30 shrink-0">
          <div class="relative flex-grow max-w-md">
            <input
              type="text"
              placeholder="지역, 알바명 등으로 검색"
              class="w-full px-4 py-2 border border-gray-200 rounded bg-gray-50 text-sm focus:outline-none focus:ring-1 focus:ring-blue-500"
              prop:value = move || state.with(|s| s.query().to_owned())
              on:input = move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
            />
          </div>
          <div class="flex gap-2 text-xs overflow-x-auto hide-scrollbar pb-1 md:pb-0">
            <CategoryButton state filter=CategoryFilter::All />
            { Category::all().map(|category| view! {
                <CategoryButton state filter=category.into() />
              }).collect_view()
            }
          </div>
          <div class="hidden sm:flex items-center gap-2 ml-auto">
            <button
              class="px-3 py-1.5 border border-gray-200 rounded text-xs text-gray-600 hover:bg-gray-50 font-medium"
              on:click = move |_| state.update(SearchState::reset)
            >
              "초기화"
            </button>
          </div>
        </div>

        <div class="flex-grow flex flex-col md:flex-row overflow-hidden relative">

          // List
          <div class = move || if list_collapsed.get() {
              "bg-white border-gray-100 flex flex-col transition-all duration-300 ease-in-out z-20 overflow-hidden md:w-0 md:opacity-0 md:min-w-0 order-2 md:order-1 h-[60%] md:h-full w-full"
            } else {
              "bg-white border-gray-100 flex flex-col transition-all duration-300 ease-in-out z-20 overflow-hidden md:w-[450px] lg:w-[500px] md:min-w-[400px] md:border-r order-2 md:order-1 h-[60%] md:h-full w-full"
            }
          >
            <div class="p-4 border-b border-gray-50 flex items-center justify-between shrink-0">
              <h2 class="text-sm font-bold text-gray-400">
                "총 " <span class="text-black">{ move || visible.with(Vec::len) }</span> "개의 알바 정보"
              </h2>
            </div>
            <div class="flex-grow overflow-y-auto p-4 hide-scrollbar">
              <Show
                when = move || visible.with(|v| !v.is_empty())
                fallback = || view! {
                  <div class="py-20 text-center text-gray-400">
                    <p class="text-sm">"해당 조건에 맞는 알바가 없습니다."</p>
                  </div>
                }
              >
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-1 lg:grid-cols-2 gap-4 pb-10">
                  <For
                    each = move || visible.get()
                    key = |listing| listing.id.clone()
                    let:listing
                  >
                    <ListingCard
                      listing
                      active = Signal::derive(move || selected.with(|id| id.as_ref() == Some(&listing.id)))
                      on_select = on_card_select
                      href = card_href(deep_link_key, &listing.id)
                    />
                  </For>
                </div>
              </Show>
            </div>
          </div>

          // Toggle button (desktop only)
          <button
            class = move || if list_collapsed.get() {
              "hidden md:flex absolute top-1/2 -translate-y-1/2 z-30 w-6 h-12 bg-white border border-gray-200 shadow-md rounded-r-lg items-center justify-center text-gray-400 hover:text-black hover:bg-gray-50 transition-all duration-300 left-0"
            } else {
              "hidden md:flex absolute top-1/2 -translate-y-1/2 z-30 w-6 h-12 bg-white border border-gray-200 shadow-md rounded-r-lg items-center justify-center text-gray-400 hover:text-black hover:bg-gray-50 transition-all duration-300 left-[450px] lg:left-[500px]"
            }
            on:click = move |_| state.update(SearchState::toggle_list)
          >
            { move || if list_collapsed.get() { "›" } else { "‹" } }
          </button>

          // Map
          <div class="flex-grow order-1 md:order-2 h-[40%] md:h-full relative bg-gray-50 overflow-hidden">
            <ListingMap
              listings = filtered
              selected
              on_select
              on_bbox_changed
              settings
              poll_interval
            />
            { move || selected_listing.get().map(|listing| view! {
                <SelectedListing listing on_close = move || on_select.call(None) on_open />
              })
            }
          </div>
        </div>
      </div>
    }
}

// The key is shared by all cards of the list.
fn card_href(deep_link_key: StoredValue<String>, id: &Id) -> String {
    deep_link_key.with_value(|key| deep_link_href(key, id))
}

#[component]
fn CategoryButton(state: RwSignal<SearchState>, filter: CategoryFilter) -> impl IntoView {
    view! {
      <button
        class = move || if state.with(|s| s.category() == filter) {
          "px-4 py-2 rounded border whitespace-nowrap transition-colors bg-black text-white border-black font-bold"
        } else {
          "px-4 py-2 rounded border whitespace-nowrap transition-colors bg-white text-gray-600 border-gray-200 hover:bg-gray-50"
        }
        on:click = move |_| state.update(|s| s.set_category(filter))
      >
        { filter.label() }
      </button>
    }
}

#[component]
fn SelectedListing<F>(listing: &'static Listing, on_close: F, on_open: Callback<Id>) -> impl IntoView
where
    F: Fn() + 'static,
{
    let id = listing.id.clone();
    view! {
      <div class="absolute bottom-4 left-4 right-4 md:bottom-8 md:left-8 md:right-auto md:w-80 bg-white rounded-2xl shadow-2xl border border-gray-100 p-5 z-40">
        <button
          class="absolute top-4 right-4 text-gray-400 hover:text-black p-1"
          on:click = move |_| on_close()
        >
          "✕"
        </button>
        <div class="flex items-center gap-2 mb-2">
          <span class="text-[10px] font-bold text-blue-600 bg-blue-50 px-2 py-0.5 rounded">
            { listing.category.label() }
          </span>
          { listing.popular.then(|| view! {
              <span class="text-[10px] font-bold text-orange-600 bg-orange-50 px-2 py-0.5 rounded">"인기"</span>
            })
          }
        </div>
        <h3 class="font-bold text-base md:text-lg mb-1 line-clamp-1">{ listing.title.as_str() }</h3>
        <p class="text-xs text-gray-500 mb-4">{ listing.location.as_str() }</p>
        <div class="flex items-center justify-between pt-4 border-t border-gray-50">
          <div>
            <p class="text-[10px] text-gray-400 mb-1 font-medium">"예상 급여"</p>
            <p class="text-lg md:text-xl font-extrabold">
              { format_price(listing.price.amount) } " "
              <span class="text-xs font-normal text-gray-400">"/ " { listing.price.unit.label() }</span>
            </p>
          </div>
          <button
            class="bg-black text-white px-5 md:px-6 py-2.5 md:py-3 rounded-xl font-bold hover:bg-gray-800 transition-colors text-sm"
            on:click = move |_| on_open.call(id.clone())
          >
            "자세히 보기"
          </button>
        </div>
      </div>
    }
}
