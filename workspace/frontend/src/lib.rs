use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod settings;

use components::forecast::ForecastPage;

#[function_component(App)]
pub fn app() -> Html {
    html! { <ForecastPage /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Sales Revenue Forecaster Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction service: {}", settings.api_base_url);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
