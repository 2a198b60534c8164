use leptos::*;

use quickgig_core::{
    format::{format_price, format_price_with_unit, format_rating},
    gallery::Gallery,
    usecases::similar_listings,
};
use quickgig_entities::{id::Id, listing::*};

const SIMILAR_LISTINGS_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Room,
    Contract,
    Reviews,
    Host,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Room, Self::Contract, Self::Reviews, Self::Host];

    const fn label(self) -> &'static str {
        match self {
            Self::Room => "방 정보",
            Self::Contract => "계약 정보",
            Self::Reviews => "후기",
            Self::Host => "호스트 정보",
        }
    }
}

#[component]
pub fn ListingDetails(
    listings: &'static [Listing],
    #[prop(into)] listing: Signal<Option<&'static Listing>>,
    on_open: Callback<Id>,
) -> impl IntoView {
    let gallery = RwSignal::new(listing.get_untracked().map(Gallery::new));

    Effect::new(move |_| {
        let Some(listing) = listing.get() else {
            return;
        };
        gallery.update(|gallery| match gallery {
            Some(gallery) => {
                if gallery.follow(listing) {
                    log::debug!("Show gallery of listing {}", listing.id);
                }
            }
            None => *gallery = Some(Gallery::new(listing)),
        });
    });

    move || match listing.get() {
        Some(listing) => view! { <ListingProfile listings listing gallery on_open /> }.into_view(),
        None => view! {
          <div class="mx-auto text-center max-w-7xl px-4 pt-32 pb-16 sm:px-6 sm:pb-24 lg:px-8">
            <h2 class="text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">"알바 정보를 찾을 수 없습니다"</h2>
          </div>
        }
        .into_view(),
    }
}

#[component]
fn ListingProfile(
    listings: &'static [Listing],
    listing: &'static Listing,
    gallery: RwSignal<Option<Gallery>>,
    on_open: Callback<Id>,
) -> impl IntoView {
    let active_tab = RwSignal::new(Tab::Room);
    let detail = listing.detail.clone().unwrap_or_default();
    let structure = detail.structure.unwrap_or_default();
    let current_image = move || {
        gallery.with(|g| {
            g.as_ref()
                .filter(|g| g.listing_id() == &listing.id)
                .map_or_else(|| listing.image_url.clone(), |g| g.current().to_owned())
        })
    };
    let position = move || {
        gallery.with(|g| {
            g.as_ref()
                .filter(|g| g.listing_id() == &listing.id)
                .map_or((1, listing.gallery().len()), |g| g.position(listing))
        })
    };
    let similar = similar_listings(listings, listing, SIMILAR_LISTINGS_LIMIT);

    view! {
      <div class="pt-16 pb-20 bg-white min-h-screen">
        <div class="max-w-6xl mx-auto px-4 md:px-8 py-8 border-b border-gray-100">
          <h1 class="text-3xl font-bold text-gray-900 mb-2">{ listing.title.as_str() }</h1>
          <p class="text-gray-500 flex items-center gap-2">"📍 " { listing.location.as_str() }</p>
        </div>

        <div class="max-w-6xl mx-auto px-4 md:px-8 py-8 flex flex-col lg:flex-row gap-12">
          <div class="flex-grow lg:w-2/3">

            // Main image
            <div class="relative mb-6">
              <img
                src = current_image
                class="w-full h-[350px] md:h-[500px] object-cover rounded-xl shadow-sm transition-all duration-300"
                alt="Main"
              />
              <div class="absolute bottom-4 right-4 bg-black/50 text-white px-3 py-1 rounded-full text-xs backdrop-blur-sm">
                { move || {
                    let (index, total) = position();
                    format!("{index} / {total}")
                  }
                }
              </div>
            </div>

            // Thumbnails
            <div class="flex gap-2 overflow-x-auto pb-4 hide-scrollbar">
              { listing.gallery().iter().map(|image| {
                  let image = image.as_str();
                  view! {
                    <img
                      src = image
                      class = move || if current_image() == image {
                        "w-20 h-20 md:w-24 md:h-24 object-cover rounded-lg cursor-pointer transition-all ring-2 ring-black opacity-100"
                      } else {
                        "w-20 h-20 md:w-24 md:h-24 object-cover rounded-lg cursor-pointer transition-all opacity-60 hover:opacity-100"
                      }
                      on:click = move |_| gallery.update(|g| {
                        if let Some(g) = g {
                            g.show(listing, image);
                        }
                      })
                      alt="Thumbnail"
                    />
                  }
                }).collect_view()
              }
            </div>

            // Tabs
            <div class="flex border-b border-gray-100 sticky top-16 bg-white z-20 mt-8 mb-12">
              { Tab::ALL.into_iter().map(|tab| view! {
                  <button
                    class = move || if active_tab.get() == tab {
                      "px-6 md:px-8 py-4 text-xs md:text-sm font-bold transition-all text-black border-b-2 border-black"
                    } else {
                      "px-6 md:px-8 py-4 text-xs md:text-sm font-bold transition-all text-gray-400 hover:text-gray-600"
                    }
                    on:click = move |_| active_tab.set(tab)
                  >
                    { tab.label() }
                  </button>
                }).collect_view()
              }
            </div>

            <section class="space-y-16">
              <div>
                <h3 class="text-xl font-bold mb-8">"구조"</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                  <Attribute icon="🏠" label="방" value=format!("{}개", structure.rooms) />
                  <Attribute icon="🏠" label="욕실" value=format!("{}개", structure.bathrooms) />
                  <Attribute icon="🏠" label="주방" value=format!("{}개", structure.kitchens) />
                  <Attribute icon="🏠" label="거실" value=format!("{}개", structure.living_rooms) />
                </div>
              </div>

              <div>
                <h3 class="text-xl font-bold mb-8">"건물 유형 및 면적"</h3>
                <div class="grid grid-cols-2 gap-8">
                  <Attribute icon="🏢" label="건물 유형" value=detail.property_type.clone().unwrap_or_default() />
                  <Attribute icon="📐" label="전용 면적" value=detail.area.clone().unwrap_or_default() />
                </div>
              </div>

              <div>
                <h3 class="text-xl font-bold mb-6">"알바 소개"</h3>
                <p class="text-gray-600 leading-relaxed whitespace-pre-wrap text-sm md:text-base">
                  { listing.description.as_str() }
                  "\n\n성심성의껏 최선을 다하겠습니다. 많은 관심 부탁드립니다!"
                </p>
              </div>

              <div>
                <h3 class="text-xl font-bold mb-8">"기본 옵션"</h3>
                <div class="grid grid-cols-3 md:grid-cols-6 gap-6">
                  { detail.basic_options.iter().map(|option| view! {
                      <div class="flex flex-col items-center gap-2">
                        <div class="w-12 h-12 bg-gray-50 rounded-xl flex items-center justify-center text-xl">"✨"</div>
                        <span class="text-[10px] font-medium text-gray-500">{ option.clone() }</span>
                      </div>
                    }).collect_view()
                  }
                </div>
              </div>

              <ReviewSection listing />

              { detail.host.clone().map(|host| view! { <HostCard host /> }) }

              { (!similar.is_empty()).then(|| view! {
                  <div>
                    <h3 class="text-xl font-bold mb-6">"비슷한 알바"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                      { similar.into_iter().map(|other| {
                          let id = other.id.clone();
                          view! {
                            <div
                              class="p-4 border border-gray-100 rounded-2xl cursor-pointer hover:shadow-md transition-all"
                              on:click = move |_| on_open.call(id.clone())
                            >
                              <p class="text-xs text-gray-400 mb-1 truncate">{ other.location.as_str() }</p>
                              <p class="font-bold text-sm line-clamp-2">{ other.title.as_str() }</p>
                              <p class="text-sm font-bold mt-2">{ format_price_with_unit(&other.price) }</p>
                            </div>
                          }
                        }).collect_view()
                      }
                    </div>
                  </div>
                })
              }
            </section>
          </div>

          <PriceSidebar listing />
        </div>
      </div>
    }
}

#[component]
fn Attribute(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
      <div class="flex items-center gap-4">
        <div class="w-10 h-10 bg-gray-50 rounded-lg flex items-center justify-center text-xl">{ icon }</div>
        <div>
          <p class="text-xs text-gray-400">{ label }</p>
          <p class="font-bold">{ value }</p>
        </div>
      </div>
    }
}

// There are no reviews per listing, only the aggregated rating.
#[component]
fn ReviewSection(listing: &'static Listing) -> impl IntoView {
    view! {
      <div id="reviews">
        <div class="flex items-center justify-between mb-8">
          <h3 class="text-xl font-bold">"후기"</h3>
          <div class="flex items-center gap-2">
            <span class="text-2xl font-black text-blue-600">"★ " { format_rating(listing.rating) }</span>
            <span class="text-gray-400 text-sm">"(" { listing.review_count } "개)"</span>
          </div>
        </div>
        <div class="space-y-6">
          { (0..3).map(|_| view! {
              <div class="p-6 bg-gray-50 rounded-2xl">
                <div class="flex items-center gap-2 mb-2">
                  <span class="text-yellow-400 text-sm">"★★★★★"</span>
                  <span class="text-xs text-gray-400">"2024년 11월 | 이*주"</span>
                </div>
                <p class="text-sm font-bold mb-1">"만족합니다"</p>
                <p class="text-sm text-gray-600">"정말 친절하시고 결과물도 완벽했습니다. 다음에도 꼭 다시 이용하고 싶어요!"</p>
              </div>
            }).collect_view()
          }
        </div>
      </div>
    }
}

#[component]
fn HostCard(host: Host) -> impl IntoView {
    let Host {
        name,
        image_url,
        intro,
    } = host;
    view! {
      <div class="p-6 md:p-8 border border-gray-100 rounded-3xl bg-gray-50">
        <div class="flex flex-col md:flex-row md:items-center gap-6 mb-6">
          <img src=image_url class="w-16 h-16 rounded-full object-cover border-2 border-white shadow-sm" alt="Host" />
          <div>
            <h4 class="font-bold text-lg">{ name }</h4>
            <p class="text-xs text-blue-600 font-bold">"본인인증 완료"</p>
          </div>
          <button class="md:ml-auto px-6 py-2 border border-gray-200 bg-white rounded-xl text-sm font-bold hover:bg-gray-50">
            "호스트와 채팅하기"
          </button>
        </div>
        <p class="text-sm text-gray-500">{ intro }</p>
      </div>
    }
}

#[component]
fn PriceSidebar(listing: &'static Listing) -> impl IntoView {
    view! {
      <div class="lg:w-1/3">
        <div class="sticky top-24 border border-gray-100 rounded-3xl p-6 md:p-8 shadow-xl bg-white">
          <div class="flex items-center justify-between mb-8">
            <span class="text-sm text-gray-400 font-medium">
              "최소 예약 기간 " <span class="text-black font-bold ml-2">"1주"</span>
            </span>
          </div>
          <div class="mb-8">
            <p class="text-2xl md:text-3xl font-black mb-1">
              { format_price(listing.price.amount) } " "
              <span class="text-sm font-normal text-gray-400">"/ " { listing.price.unit.label() }</span>
            </p>
            <div class="flex justify-between text-xs text-gray-400 mt-2">
              <span>"임대료 350,000원"</span>
              <span>"관리비 30,000원"</span>
            </div>
          </div>
          <div class="p-4 bg-gray-50 rounded-2xl mb-8 flex justify-between items-center">
            <span class="text-xs text-gray-500 font-bold">"할인"</span>
            <span class="text-xs text-blue-600 font-bold">"장기계약 시 최대 -20%"</span>
          </div>
          <button class="w-full py-4 md:py-5 bg-black text-white rounded-2xl font-bold text-base md:text-lg hover:bg-gray-800 transition-colors">
            "계약 시작하기"
          </button>
        </div>
      </div>
    }
}
