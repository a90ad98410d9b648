pub mod api_client;
mod components;
mod hooks;
mod pages;
pub mod token_manager;
pub mod utils;

use pages::{api_tokens::ApiTokensPage, not_found::NotFoundPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/user/api-tokens")]
    ApiTokens,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::ApiTokens} /> },
        Route::ApiTokens => html! { <ApiTokensPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
