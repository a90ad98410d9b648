//! Hook for loading the token list and permission catalog.

use crate::api_client::{BrowserApiClient, Routes};
use crate::token_manager::ReloadGeneration;
use crate::utils;
use shared::{ApiTokenPageData, ApiTokensApi};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Return value from the use_api_tokens hook.
pub struct UseApiTokens {
    /// Latest data from the server; `None` until the first load finishes
    pub data: Option<ApiTokenPageData>,
    /// Whether the initial load is still running
    pub loading: bool,
    /// Message from the last failed load, cleared by the next success
    pub error: Option<String>,
    /// Refetch everything from the server
    pub refresh: Callback<()>,
}

/// Hook for fetching the API token page data.
///
/// Fetches on mount and whenever `refresh` is emitted. A 401 redirects to
/// logout. When reloads overlap, only the most recently started one
/// updates the returned state.
///
/// # Example
/// ```ignore
/// let api_tokens = use_api_tokens(routes.clone());
/// if let Some(data) = &api_tokens.data {
///     // Render the token manager
/// }
/// ```
#[hook]
pub fn use_api_tokens(routes: Routes) -> UseApiTokens {
    let data = use_state(|| None::<ApiTokenPageData>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let generations = use_mut_ref(ReloadGeneration::default);

    let fetch = {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(routes, move |_: (), routes| {
            let client = BrowserApiClient::new(routes.clone());
            let data = data.clone();
            let loading = loading.clone();
            let error = error.clone();
            let generations = generations.clone();
            let generation = generations.borrow_mut().begin();

            spawn_local(async move {
                let result = client.list_api_tokens().await;
                if !generations.borrow().is_current(generation) {
                    log::debug!("Dropping superseded API token reload {}", generation);
                    return;
                }
                match result {
                    Ok(page) => {
                        log::debug!("Loaded {} API tokens", page.tokens.len());
                        data.set(Some(page));
                        error.set(None);
                    }
                    Err(e) if e.is_unauthorized() => {
                        utils::redirect_to_logout();
                        return;
                    }
                    Err(e) => {
                        log::error!("Failed to fetch API tokens: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Initial fetch
    {
        let fetch = fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(());
            || ()
        });
    }

    UseApiTokens {
        data: (*data).clone(),
        loading: *loading,
        error: (*error).clone(),
        refresh: fetch,
    }
}
