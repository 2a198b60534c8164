use leptos::*;

use quickgig_entities::{category::Category, review::*};

const fn tile(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Cleaning => ("🏠", "새 집처럼 깨끗하게"),
        Category::PetWalking => ("🐶", "함께 걷는 즐거움"),
        Category::Moving => ("📦", "빠르고 안전한 이사"),
    }
}

#[component]
pub fn Landing(reviews: &'static [Review], on_search: Callback<Option<Category>>) -> impl IntoView {
    view! {
      <div class="pt-20">
        // Hero
        <section class="px-4 py-16 md:px-8 text-center max-w-4xl mx-auto">
          <h1 class="text-4xl md:text-5xl font-bold mb-6">
            "잠깐 할 수 있는 " <br />
            <span class="text-blue-600">"알바를 찾아보세요"</span>
          </h1>

          <div class="relative mt-12 mb-8 group">
            <input
              type="text"
              placeholder="지역, 알바 종류 등을 입력해 주세요"
              class="w-full px-6 py-4 rounded-full border border-gray-200 shadow-lg focus:outline-none focus:ring-2 focus:ring-blue-100 text-lg pr-24"
            />
            <button
              class="absolute right-2 top-2 bottom-2 bg-black text-white px-8 rounded-full font-bold hover:bg-gray-800 transition-colors"
              on:click = move |_| on_search.call(None)
            >
              "검색"
            </button>
          </div>

          <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-16">
            { Category::all().map(|category| view! { <CategoryTile category on_search /> }).collect_view() }
          </div>
        </section>

        // Reviews
        <section class="bg-gray-50 py-20 overflow-hidden">
          <div class="px-4 md:px-8 max-w-6xl mx-auto">
            <h2 class="text-2xl font-bold mb-12 text-center">"QuickGig 고객의 실시간 후기"</h2>
            <div class="flex gap-6 overflow-x-auto pb-8 hide-scrollbar">
              { reviews.iter().map(|review| view! { <ReviewCard review /> }).collect_view() }
            </div>
          </div>
        </section>

        <Banners />
        <Footer />
      </div>
    }
}

#[component]
fn CategoryTile(category: Category, on_search: Callback<Option<Category>>) -> impl IntoView {
    let (icon, description) = tile(category);
    view! {
      <div
        class="bg-white p-8 rounded-2xl border border-gray-100 shadow-sm hover:shadow-md transition-all cursor-pointer group text-left relative overflow-hidden"
        on:click = move |_| on_search.call(Some(category))
      >
        <div class="text-4xl mb-4">{ icon }</div>
        <h3 class="text-xl font-bold mb-1 flex items-center justify-between">
          { category.label() }
          <span class="text-gray-300 group-hover:text-black transition-colors">"›"</span>
        </h3>
        <p class="text-gray-500 text-sm">{ description }</p>
      </div>
    }
}

#[component]
fn ReviewCard(review: &'static Review) -> impl IntoView {
    let stars = review.rating.stars();
    view! {
      <div class="min-w-[300px] md:min-w-[350px] bg-white rounded-2xl overflow-hidden border border-gray-100 shadow-sm">
        <img src={ review.image_url.as_str() } alt={ review.listing_title.as_str() } class="w-full h-48 object-cover" />
        <div class="p-6">
          <div class="flex items-center gap-1 mb-2">
            { (0..ReviewRating::max().stars()).map(|i| view! {
                <span class = if i < stars { "text-sm text-yellow-400" } else { "text-sm text-gray-200" }>"★"</span>
              }).collect_view()
            }
          </div>
          <p class="text-xs text-gray-400 mb-1">{ review.location.as_str() }</p>
          <h4 class="font-bold mb-3 truncate">{ review.listing_title.as_str() }</h4>
          <p class="text-sm text-gray-600 line-clamp-2">{ review.content.as_str() }</p>
        </div>
      </div>
    }
}

#[component]
fn Banners() -> impl IntoView {
    view! {
      <section class="px-4 py-20 max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-8">
        <div class="bg-blue-600 rounded-3xl p-10 text-white relative overflow-hidden group cursor-pointer">
          <div class="relative z-10">
            <h3 class="text-2xl font-bold mb-2">"후기 쓰면" <br/> "100% 선물 증정!"</h3>
            <p class="opacity-80">"업무 완료 후 간단한 후기를 남겨주세요"</p>
          </div>
          <div class="absolute -bottom-4 -right-4 w-32 h-32 bg-white/10 rounded-full group-hover:scale-125 transition-transform"></div>
        </div>
        <div class="bg-indigo-700 rounded-3xl p-10 text-white relative overflow-hidden group cursor-pointer">
          <div class="relative z-10">
            <h3 class="text-2xl font-bold mb-2">"앱 리뷰 쓰고" <br/> "3만 원 받자!"</h3>
            <p class="opacity-80">"마켓 리뷰 작성 시 추첨을 통해 지급"</p>
          </div>
          <div class="absolute -top-4 -left-4 w-32 h-32 bg-black/10 rounded-full group-hover:scale-125 transition-transform"></div>
        </div>
      </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
      <footer class="bg-gray-100 py-16 px-4 md:px-8">
        <div class="max-w-6xl mx-auto border-t border-gray-200 pt-12 text-sm text-gray-500">
          <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-12">
            <div>
              <h5 class="font-bold text-gray-900 mb-4">"회사소개"</h5>
              <p class="mb-2">"공지사항"</p>
              <p>"인재채용"</p>
            </div>
            <div>
              <h5 class="font-bold text-gray-900 mb-4">"고객센터"</h5>
              <p class="mb-2">"운영 시간: 10:00-18:00"</p>
              <p class="mb-2">"대표 번호: 1877-3670"</p>
              <button class="mt-4 px-4 py-1 border border-gray-300 rounded hover:bg-white transition-colors">"1:1 문의하기"</button>
            </div>
            <div>
              <h5 class="font-bold text-gray-900 mb-4">"정보"</h5>
              <p class="mb-2">"이용약관"</p>
              <p>"개인정보 처리방침"</p>
            </div>
          </div>
          <p class="text-xs opacity-60">"QuickGig | 제휴 문의 : biz@quickgig.example"</p>
        </div>
      </footer>
    }
}
