use leptos::*;
use wasm_bindgen::JsCast;

use quickgig::{config::Config, App};

fn main() {
    let (config, config_error) = match Config::try_load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    _ = console_log::init_with_level(config.log.level);
    console_error_panic_hook::set_once();
    if let Some(err) = config_error {
        log::error!("Invalid configuration, using defaults: {err}");
    }
    log::info!("Start web application");
    let app_container = document()
        .get_element_by_id("app")
        .expect("app container element")
        .dyn_into()
        .expect("HtmlElement");
    mount_to(app_container, move || view! { <App config /> });
}
