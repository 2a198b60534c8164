use leptos::*;

#[component]
pub fn NavBar(
    #[prop(into)] search_active: Signal<bool>,
    on_home: Callback<()>,
    on_map: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
      <nav class="fixed top-0 left-0 right-0 bg-white border-b border-gray-100 z-50 px-4 py-3 md:px-8">
        <div class="flex items-center justify-between">

          // Logo
          <div class="flex items-center gap-2 cursor-pointer" on:click=move |_| on_home.call(())>
            <span class="text-2xl font-bold text-black italic">"QuickGig"</span>
          </div>

          // Menu items
          <div class="hidden md:flex items-center gap-8 text-sm font-medium">
            <MenuItems search_active on_map />
          </div>

          <div class="flex items-center gap-4">
            <span class="hidden md:block text-xs text-gray-400">"QuickGig 파트너 시작하기"</span>
            <button class="px-4 py-2 border border-gray-200 rounded-lg text-sm font-medium hover:bg-gray-50">
              "로그인/회원가입"
            </button>
            // Hamburger Icon
            <button
              class = {move ||
                if menu_open.get() {
                  "open block hamburger md:hidden focus:outline-none"
                } else {
                  "block hamburger md:hidden focus:outline-none"
                }
              }
              on:click = move |_| set_menu_open.update(|s| *s = !*s)
            >
              <span class="hamburger-top"></span>
              <span class="hamburger-middle"></span>
              <span class="hamburger-bottom"></span>
            </button>
          </div>
        </div>

        // Mobile Menu
        <div class="md:hidden">
          <menu
            class = {move ||
              if menu_open.get() {
                "absolute flex flex-col items-center self-end py-8 mt-3 space-y-6 font-bold bg-white left-6 right-6 drop-shadow-md"
              } else {
                "hidden"
              }
            }
            on:click = move |_| set_menu_open.set(false)
          >
            <MenuItems search_active on_map />
          </menu>
        </div>
      </nav>
    }
}

#[component]
fn MenuItems(search_active: Signal<bool>, on_map: Callback<()>) -> impl IntoView {
    view! {
      <button
        class = move || if search_active.get() { "text-blue-600 font-bold" } else { "hover:text-blue-600" }
        on:click = move |_| on_map.call(())
      >
        "지도"
      </button>
      <button class="hover:text-blue-600">"계약"</button>
      <button class="hover:text-blue-600">"채팅"</button>
    }
}
