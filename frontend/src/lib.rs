// The page has no interactive parts, hydrating only attaches the bundle to the
// server rendered markup.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("Could not set up console logging: {}", error);
    }
    log::info!("hydrating the landing page");
    leptos::mount::hydrate_body(App);
}
