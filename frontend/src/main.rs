use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod error;
mod form;
mod scroll;
mod validation;

mod components {
    pub mod card;
    pub mod footer;
    pub mod hero;
    pub mod lead_form;
    pub mod modal;
    pub mod navbar;
    pub mod reveal;
    pub mod ripple;
    pub mod tilt;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::get_log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
