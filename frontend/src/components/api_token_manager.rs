//! API token settings panel.
//!
//! Renders [`TokenManagerState`] and feeds user actions back into it.
//! Requests run on `spawn_local`; their completions come back as
//! [`ApiTokenManagerMsg::Completed`]. The token list itself is a prop: after
//! any successful change the host is asked to refetch it via `on_reload`.

use gloo::timers::callback::Timeout;
use shared::{ApiToken, Permissions};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::{BrowserApiClient, Routes};
use crate::components::{CopyToken, Modal, ModalKind, PermissionChecklist};
use crate::token_manager::{
    perform, Completion, HostEvent, PanelLayout, PermissionCatalog, Submission, TokenManagerState,
};
use crate::utils;

const CREATED_FLASH_MS: u32 = 2000;

#[derive(Properties, PartialEq)]
pub struct ApiTokenManagerProps {
    pub tokens: Vec<ApiToken>,
    pub available_permissions: Vec<String>,
    pub default_permissions: Permissions,
    pub routes: Routes,
    /// Fired after a token was created, updated or deleted
    pub on_reload: Callback<()>,
}

pub enum ApiTokenManagerMsg {
    SetName(String),
    ToggleCreatePermission(String, bool),
    SubmitCreate,
    CloseTokenDisplay,
    ClearCreatedFlash,
    ManagePermissions(ApiToken),
    ToggleUpdatePermission(String, bool),
    SubmitUpdate,
    CancelManagePermissions,
    ConfirmDeletion(ApiToken),
    SubmitDelete,
    CancelDeletion,
    Completed(Completion),
}

pub struct ApiTokenManager {
    state: TokenManagerState,
    client: BrowserApiClient,
    flash_timeout: Option<Timeout>,
}

impl Component for ApiTokenManager {
    type Message = ApiTokenManagerMsg;
    type Properties = ApiTokenManagerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let catalog = PermissionCatalog::new(
            props.available_permissions.clone(),
            props.default_permissions.clone(),
        );
        Self {
            state: TokenManagerState::new(catalog),
            client: BrowserApiClient::new(props.routes.clone()),
            flash_timeout: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // The permission catalog is fixed for the panel's lifetime; only
        // the token list and the route builder may change.
        if ctx.props().routes != old_props.routes {
            self.client = BrowserApiClient::new(ctx.props().routes.clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ApiTokenManagerMsg::SetName(name) => {
                self.state.set_token_name(name);
                true
            }
            ApiTokenManagerMsg::ToggleCreatePermission(permission, checked) => {
                self.state.set_create_permission(&permission, checked);
                true
            }
            ApiTokenManagerMsg::SubmitCreate => {
                let submission = self.state.submit_create();
                self.dispatch(ctx, submission)
            }
            ApiTokenManagerMsg::CloseTokenDisplay => {
                self.state.close_token_display();
                true
            }
            ApiTokenManagerMsg::ClearCreatedFlash => {
                self.flash_timeout = None;
                self.state.clear_created_flash();
                true
            }
            ApiTokenManagerMsg::ManagePermissions(token) => {
                self.state.manage_permissions(&token);
                true
            }
            ApiTokenManagerMsg::ToggleUpdatePermission(permission, checked) => {
                self.state.set_update_permission(&permission, checked);
                true
            }
            ApiTokenManagerMsg::SubmitUpdate => {
                let submission = self.state.submit_update();
                self.dispatch(ctx, submission)
            }
            ApiTokenManagerMsg::CancelManagePermissions => {
                self.state.cancel_manage_permissions();
                true
            }
            ApiTokenManagerMsg::ConfirmDeletion(token) => {
                self.state.confirm_deletion(&token);
                true
            }
            ApiTokenManagerMsg::SubmitDelete => {
                let submission = self.state.submit_delete();
                self.dispatch(ctx, submission)
            }
            ApiTokenManagerMsg::CancelDeletion => {
                self.state.cancel_deletion();
                true
            }
            ApiTokenManagerMsg::Completed(completion) => {
                let created = matches!(completion, Completion::Created(Ok(_)));
                if let Some(HostEvent::Reload) = self.state.complete(completion) {
                    ctx.props().on_reload.emit(());
                }
                if created {
                    let link = ctx.link().clone();
                    self.flash_timeout = Some(Timeout::new(CREATED_FLASH_MS, move || {
                        link.send_message(ApiTokenManagerMsg::ClearCreatedFlash);
                    }));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let layout = self.state.layout(&ctx.props().tokens);
        html! {
            <div class="api-token-manager">
                { self.view_create_form(ctx, layout) }

                if layout.token_list {
                    <hr class="section-border" />
                    { self.view_token_list(ctx, layout) }
                }

                if layout.token_dialog {
                    { self.view_token_display(ctx) }
                }
                if layout.permissions_dialog {
                    if let Some(token) = self.state.managing_permissions_for() {
                        { self.view_permissions_dialog(ctx, token) }
                    }
                }
                if layout.delete_dialog {
                    { self.view_delete_dialog(ctx) }
                }
            </div>
        }
    }
}

impl ApiTokenManager {
    /// Send a submission, if the state produced one
    fn dispatch(&self, ctx: &Context<Self>, submission: Option<Submission>) -> bool {
        let Some(submission) = submission else {
            return false;
        };
        let route = submission.route();
        log::debug!("{} {}", route.method().as_str(), route.name());
        let client = self.client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let completion = perform(&client, submission).await;
            link.send_message(ApiTokenManagerMsg::Completed(completion));
        });
        true
    }

    fn view_create_form(&self, ctx: &Context<Self>, layout: PanelLayout) -> Html {
        let form = self.state.create_form();
        let link = ctx.link();

        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ApiTokenManagerMsg::SubmitCreate
        });
        let on_name_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ApiTokenManagerMsg::SetName(input.value())
        });
        let on_toggle = link.callback(|(permission, checked): (String, bool)| {
            ApiTokenManagerMsg::ToggleCreatePermission(permission, checked)
        });

        html! {
            <section class="settings-section">
                <div class="section-header">
                    <h2>{ "Create API Token" }</h2>
                    <p class="section-description">
                        { "API tokens allow third-party services to authenticate with our application on your behalf." }
                    </p>
                </div>
                <form class="create-token-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="token-name">{ "Name" }</label>
                        <input
                            type="text"
                            id="token-name"
                            value={form.values().name.clone()}
                            oninput={on_name_input}
                            autofocus=true
                        />
                        if let Some(message) = form.error("name") {
                            <p class="input-error">{ message }</p>
                        }
                    </div>

                    if layout.permission_controls {
                        <div class="form-group">
                            <label>{ "Permissions" }</label>
                            <PermissionChecklist
                                available={self.state.catalog().available.clone()}
                                selected={form.values().permissions.clone()}
                                on_toggle={on_toggle}
                                id_prefix="create-permission"
                            />
                            if let Some(message) = form.error("permissions") {
                                <p class="input-error">{ message }</p>
                            }
                        </div>
                    }

                    <div class="form-actions">
                        if form.recently_successful() {
                            <span class="action-message">{ "Created." }</span>
                        }
                        <button type="submit" class="submit-button" disabled={form.processing()}>
                            { "Create" }
                        </button>
                    </div>
                </form>
            </section>
        }
    }

    fn view_token_list(&self, ctx: &Context<Self>, layout: PanelLayout) -> Html {
        html! {
            <section class="settings-section">
                <div class="section-header">
                    <h2>{ "Manage API Tokens" }</h2>
                    <p class="section-description">
                        { "You may delete any of your existing tokens if they are no longer needed." }
                    </p>
                </div>
                <div class="token-list">
                    { for ctx.props().tokens.iter().map(|token| self.view_token_row(ctx, token, layout)) }
                </div>
            </section>
        }
    }

    fn view_token_row(&self, ctx: &Context<Self>, token: &ApiToken, layout: PanelLayout) -> Html {
        let on_permissions = {
            let token = token.clone();
            ctx.link()
                .callback(move |_: MouseEvent| ApiTokenManagerMsg::ManagePermissions(token.clone()))
        };
        let on_delete = {
            let token = token.clone();
            ctx.link()
                .callback(move |_: MouseEvent| ApiTokenManagerMsg::ConfirmDeletion(token.clone()))
        };
        let title = utils::token_title(token.created_at.as_ref(), token.last_used_at.as_ref());

        html! {
            <div key={token.id.to_string()} class="token-row" title={title}>
                <div class="token-name">{ &token.name }</div>
                <div class="token-actions">
                    if let Some(ago) = &token.last_used_ago {
                        <span class="token-last-used">{ format!("Last used {}", ago) }</span>
                    }
                    if layout.permission_controls {
                        <button class="link-button" onclick={on_permissions}>
                            { "Permissions" }
                        </button>
                    }
                    <button class="link-button danger" onclick={on_delete}>
                        { "Delete" }
                    </button>
                </div>
            </div>
        }
    }

    fn view_token_display(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.link().callback(|_: ()| ApiTokenManagerMsg::CloseTokenDisplay);
        let on_close_click = ctx.link().callback(|_: MouseEvent| ApiTokenManagerMsg::CloseTokenDisplay);

        let footer = html! {
            <button class="secondary-button" onclick={on_close_click}>{ "Close" }</button>
        };

        html! {
            <Modal title="API Token" on_close={on_close} footer={footer}>
                <p>
                    { "Please copy your new API token. For your security, it won't be shown again." }
                </p>
                if let Some(secret) = self.state.plain_text_token() {
                    <CopyToken token={AttrValue::from(secret.to_string())} />
                }
            </Modal>
        }
    }

    fn view_permissions_dialog(&self, ctx: &Context<Self>, token: &ApiToken) -> Html {
        let form = self.state.update_form();
        let link = ctx.link();

        let on_close = link.callback(|_: ()| ApiTokenManagerMsg::CancelManagePermissions);
        let on_cancel = link.callback(|_: MouseEvent| ApiTokenManagerMsg::CancelManagePermissions);
        let on_save = link.callback(|_: MouseEvent| ApiTokenManagerMsg::SubmitUpdate);
        let on_toggle = link.callback(|(permission, checked): (String, bool)| {
            ApiTokenManagerMsg::ToggleUpdatePermission(permission, checked)
        });

        let footer = html! {
            <>
                <button class="secondary-button" onclick={on_cancel}>{ "Cancel" }</button>
                <button class="submit-button" onclick={on_save} disabled={form.processing()}>
                    { "Save" }
                </button>
            </>
        };

        html! {
            <Modal title="API Token Permissions" on_close={on_close} footer={footer}>
                <PermissionChecklist
                    available={self.state.catalog().available.clone()}
                    selected={form.values().permissions.clone()}
                    on_toggle={on_toggle}
                    id_prefix={AttrValue::from(format!("token-{}-permission", token.id))}
                />
            </Modal>
        }
    }

    fn view_delete_dialog(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_close = link.callback(|_: ()| ApiTokenManagerMsg::CancelDeletion);
        let on_cancel = link.callback(|_: MouseEvent| ApiTokenManagerMsg::CancelDeletion);
        let on_delete = link.callback(|_: MouseEvent| ApiTokenManagerMsg::SubmitDelete);

        let footer = html! {
            <>
                <button class="secondary-button" onclick={on_cancel}>{ "Cancel" }</button>
                <button
                    class="danger-button"
                    onclick={on_delete}
                    disabled={self.state.delete_form().processing()}
                >
                    { "Delete" }
                </button>
            </>
        };

        html! {
            <Modal
                title="Delete API Token"
                kind={ModalKind::Confirmation}
                on_close={on_close}
                footer={footer}
            >
                <p>{ "Are you sure you would like to delete this API token?" }</p>
            </Modal>
        }
    }
}
