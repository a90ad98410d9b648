//! Copy Token Component
//!
//! Shows a freshly issued token secret with a copy-to-clipboard button.

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CopyTokenProps {
    pub token: AttrValue,
}

#[function_component(CopyToken)]
pub fn copy_token(props: &CopyTokenProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let token = props.token.clone();
        let copied = copied.clone();

        Callback::from(move |_: MouseEvent| {
            let token = token.clone();
            let copied = copied.clone();

            spawn_local(async move {
                let clipboard = window().and_then(|w| {
                    js_sys::Reflect::get(&w.navigator(), &"clipboard".into())
                        .ok()
                        .and_then(|v| v.dyn_into::<web_sys::Clipboard>().ok())
                });
                let Some(clipboard) = clipboard else {
                    log::warn!("Clipboard API unavailable");
                    return;
                };

                let promise = clipboard.write_text(&token);
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::error!("Failed to copy token: {:?}", e);
                    return;
                }

                copied.set(true);
                let copied_reset = copied.clone();
                Timeout::new(2000, move || {
                    copied_reset.set(false);
                })
                .forget();
            });
        })
    };

    html! {
        <div class="token-secret">
            <code class="token-secret-text">{ props.token.clone() }</code>
            <button
                type="button"
                class={classes!("copy-button", (*copied).then_some("copied"))}
                onclick={on_copy}
                title="Copy to clipboard"
            >
                { if *copied { "Copied!" } else { "Copy" } }
            </button>
        </div>
    }
}
