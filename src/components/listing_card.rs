use leptos::*;

use quickgig_core::format::{format_price, format_rating};
use quickgig_entities::{id::Id, listing::Listing};

#[component]
pub fn ListingCard(
    listing: &'static Listing,
    #[prop(into)] active: Signal<bool>,
    on_select: Callback<Id>,
    /// Link that opens the detail view in a new tab.
    href: String,
) -> impl IntoView {
    let Listing {
        id,
        title,
        location,
        tags,
        price,
        image_url,
        rating,
        review_count,
        popular,
        ..
    } = listing;

    view! {
      <div
        class = move || if active.get() {
          "bg-white rounded-xl overflow-hidden border transition-all cursor-pointer flex flex-row md:flex-col h-full border-blue-600 shadow-lg ring-2 ring-blue-500 ring-opacity-20 -translate-y-0.5 md:-translate-y-1"
        } else {
          "bg-white rounded-xl overflow-hidden border transition-all cursor-pointer flex flex-row md:flex-col h-full border-gray-100 hover:shadow-md"
        }
        on:click = move |_| on_select.call(id.clone())
      >
        <div class="p-3 flex-grow flex flex-col min-w-0 order-1 md:order-2">
          <div class="flex items-center gap-2 mb-1">
            <span class="text-[10px] md:text-xs font-medium text-gray-500 truncate">{ location.as_str() }</span>
            <Show when=move || active.get()>
              <span class="text-[10px] font-bold text-blue-600">"● 선택됨"</span>
            </Show>
          </div>
          <h4 class="font-bold text-sm mb-1 line-clamp-2 leading-tight md:h-10 text-gray-900">{ title.as_str() }</h4>
          <div class="hidden md:flex flex-wrap gap-1 mb-3">
            { tags.iter().take(2).map(|tag| view! {
                <span class="text-[10px] bg-gray-50 px-1.5 py-0.5 rounded text-gray-500">{ tag.as_str() }</span>
              }).collect_view()
            }
          </div>
          <div class="mt-auto flex items-baseline gap-1">
            <span class="text-base md:text-lg font-bold text-black">{ format_price(price.amount) }</span>
            <span class="text-[10px] md:text-xs text-gray-400">"/ " { price.unit.label() }</span>
          </div>
          <div class="flex items-center gap-2 mt-1">
            <div class="flex items-center gap-0.5 text-[10px] font-bold">
              <span class="text-yellow-400">"★"</span>
              <span>{ format_rating(*rating) }</span>
            </div>
            <span class="text-[10px] text-gray-400">"후기 " { *review_count }</span>
            <a
              href = href
              target = "_blank"
              rel = "noopener"
              class = "ml-auto text-[10px] text-gray-400 hover:text-blue-600"
              on:click = |ev| ev.stop_propagation()
            >
              "새 탭에서 보기"
            </a>
          </div>
        </div>
        <div class="relative w-24 h-24 md:w-full md:h-44 shrink-0 order-2 md:order-1 self-center md:self-auto m-2 md:m-0">
          <img src={ image_url.as_str() } alt={ title.as_str() } class="w-full h-full object-cover rounded-lg md:rounded-none" />
          { popular.then(|| view! {
              <span class="absolute top-1 left-1 md:top-3 md:left-3 bg-white/90 backdrop-blur px-1.5 py-0.5 rounded text-[8px] md:text-[10px] font-bold text-blue-600 shadow-sm">
                "인기"
              </span>
            })
          }
        </div>
      </div>
    }
}
