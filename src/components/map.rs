use std::{rc::Rc, time::Duration};

use futures::future::{AbortHandle, Abortable};
use leptos::*;

use quickgig_core::map::{wait_for_provider, MapSettings, MapState, OnBboxChanged, OnSelect};
use quickgig_entities::{geo::MapBbox, id::Id, listing::Listing};

use crate::naver::{sleep, NaverLoader, NaverMaps};

#[component]
pub fn ListingMap(
    /// Listings that get a marker.
    #[prop(into)]
    listings: Signal<Vec<&'static Listing>>,
    #[prop(into)] selected: Signal<Option<Id>>,
    on_select: Callback<Option<Id>>,
    on_bbox_changed: Callback<MapBbox>,
    settings: MapSettings,
    poll_interval: Duration,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let ready = RwSignal::new(false);
    let state = store_value(MapState::<NaverMaps>::default());

    // -- wait for the widget API -- //

    let (abort_handle, abort_registration) = AbortHandle::new_pair();
    let waiting = Abortable::new(
        async move {
            let loader = NaverLoader;
            wait_for_provider(&loader, || sleep(poll_interval)).await
        },
        abort_registration,
    );
    spawn_local(async move {
        if let Ok(provider) = waiting.await {
            state.update_value(|state| state.provider_ready(provider));
            ready.set(true);
        } else {
            log::debug!("Stopped waiting for the map provider");
        }
    });
    on_cleanup(move || abort_handle.abort());

    // -- effects -- //

    let on_select: OnSelect = Rc::new(move |id| on_select.call(id));
    let on_bbox_changed: OnBboxChanged = Rc::new(move |bbox| on_bbox_changed.call(bbox));

    Effect::new(move |_| {
        let listings = listings.get();
        let selected = selected.get();
        if !ready.get() {
            return;
        }
        let Some(container) = container.get() else {
            log::debug!("Map container is not mounted yet");
            return;
        };
        let container: &web_sys::HtmlElement = &container;
        state.update_value(|state| {
            if state.initialize(
                container,
                &listings,
                &settings,
                Rc::clone(&on_select),
                Rc::clone(&on_bbox_changed),
            ) {
                log::info!("Map initialized");
            }
            if let Some(view) = state.view_mut() {
                view.sync(&listings, selected.as_ref());
            }
        });
    });

    view! {
      <div class="w-full h-full relative" style="min-height: 100%">
        <div node_ref=container class="w-full h-full bg-[#f1f3f5]"></div>
        <Show when=move || !ready.get()>
          <div class="absolute inset-0 flex flex-col items-center justify-center bg-white/90 z-20">
            <div class="w-10 h-10 border-4 border-blue-600 border-t-transparent rounded-full animate-spin mb-4"></div>
            <p class="text-sm font-bold text-gray-600">"네이버 지도를 불러오는 중입니다..."</p>
          </div>
        </Show>
        <div class="absolute bottom-6 left-6 pointer-events-none z-10">
          <div class="bg-white/95 backdrop-blur-md border border-gray-200 px-4 py-2 rounded-full text-[12px] text-gray-700 shadow-xl font-bold flex items-center gap-2">
            <span class="w-2.5 h-2.5 rounded-full bg-blue-500 animate-pulse"></span>
            "실시간 위치 기반 알바 정보"
          </div>
        </div>
      </div>
    }
}
