use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="settings-container">
            <main class="settings-content">
                <div class="empty-state">
                    <p>{ "Page not found." }</p>
                    <Link<Route> to={Route::ApiTokens}>{ "Go to API tokens" }</Link<Route>>
                </div>
            </main>
        </div>
    }
}
