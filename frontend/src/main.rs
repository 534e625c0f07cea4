mod chrome;
mod clipboard;
mod env_variable_utils;
mod gallery;
mod logger;
mod models;
mod player;
mod router;
mod utils;

use crate::env_variable_utils::{get_app_name, get_base_path, is_debug_mode, CATALOG_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter basename={get_base_path()}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let debug = is_debug_mode();
    logger::init(debug);

    log::info!(
        "NAME: \"{}\", CATALOG: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*CATALOG_URL,
        debug
    );

    yew::Renderer::<App>::new().render();
}
