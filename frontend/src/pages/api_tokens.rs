use crate::api_client::Routes;
use crate::components::ApiTokenManager;
use crate::hooks::use_api_tokens;
use crate::utils;
use yew::prelude::*;

/// Hosts the token manager and refetches its data whenever it asks.
#[function_component(ApiTokensPage)]
pub fn api_tokens_page() -> Html {
    let routes = use_memo((), |_| Routes::new(utils::api_config()));
    let api_tokens = use_api_tokens((*routes).clone());

    let content = match (&api_tokens.data, api_tokens.loading) {
        (_, true) => html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Loading tokens..." }</p>
            </div>
        },
        (Some(data), false) => html! {
            <ApiTokenManager
                tokens={data.tokens.clone()}
                available_permissions={data.available_permissions.clone()}
                default_permissions={data.default_permissions.clone()}
                routes={(*routes).clone()}
                on_reload={api_tokens.refresh.clone()}
            />
        },
        (None, false) => html! {},
    };

    html! {
        <div class="settings-container">
            <header class="settings-header">
                <h1>{ "API Tokens" }</h1>
            </header>

            <main class="settings-content">
                if let Some(error) = &api_tokens.error {
                    <div class="error-banner">{ error }</div>
                }
                { content }
            </main>
        </div>
    }
}
