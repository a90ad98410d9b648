//! View state of the API token settings panel.
//!
//! Three forms (create, update, delete) and three dialog slots. Nothing
//! here touches the network: user actions return a [`Submission`] for the
//! caller to send, and [`TokenManagerState::complete`] settles it. A
//! returned [`HostEvent::Reload`] tells the host to refetch the token list.

use shared::{ApiToken, CreateApiTokenRequest, Permissions, UpdateApiTokenRequest};

use super::form_state::FormState;
use super::submission::{Completion, Submission};

/// Permission names the server recognises plus the preselected subset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionCatalog {
    pub available: Vec<String>,
    pub defaults: Permissions,
}

impl PermissionCatalog {
    pub fn new(available: Vec<String>, defaults: Permissions) -> Self {
        Self {
            available,
            defaults,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTokenForm {
    pub name: String,
    pub permissions: Permissions,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTokenForm {
    pub permissions: Permissions,
}

/// Visible sections of the panel.
///
/// The component's `view` decides what to render from this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// The "Manage API Tokens" section
    pub token_list: bool,
    /// The create checklist and each row's "Permissions" action
    pub permission_controls: bool,
    pub token_dialog: bool,
    pub permissions_dialog: bool,
    pub delete_dialog: bool,
}

/// Events for the component that hosts the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Token data changed on the server; refetch it
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenManagerState {
    catalog: PermissionCatalog,
    create_form: FormState<CreateTokenForm>,
    update_form: FormState<UpdateTokenForm>,
    delete_form: FormState<()>,
    displaying_token: bool,
    plain_text_token: Option<String>,
    managing_permissions_for: Option<ApiToken>,
    api_token_being_deleted: Option<ApiToken>,
}

impl TokenManagerState {
    pub fn new(catalog: PermissionCatalog) -> Self {
        let create_form = FormState::new(CreateTokenForm {
            name: String::new(),
            permissions: catalog.defaults.clone(),
        });
        Self {
            catalog,
            create_form,
            update_form: FormState::new(UpdateTokenForm::default()),
            delete_form: FormState::new(()),
            displaying_token: false,
            plain_text_token: None,
            managing_permissions_for: None,
            api_token_being_deleted: None,
        }
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn create_form(&self) -> &FormState<CreateTokenForm> {
        &self.create_form
    }

    pub fn update_form(&self) -> &FormState<UpdateTokenForm> {
        &self.update_form
    }

    pub fn delete_form(&self) -> &FormState<()> {
        &self.delete_form
    }

    pub fn displaying_token(&self) -> bool {
        self.displaying_token
    }

    pub fn plain_text_token(&self) -> Option<&str> {
        self.plain_text_token.as_deref()
    }

    pub fn managing_permissions_for(&self) -> Option<&ApiToken> {
        self.managing_permissions_for.as_ref()
    }

    pub fn api_token_being_deleted(&self) -> Option<&ApiToken> {
        self.api_token_being_deleted.as_ref()
    }

    /// Which parts of the panel are rendered for the given token list
    pub fn layout(&self, tokens: &[ApiToken]) -> PanelLayout {
        PanelLayout {
            token_list: !tokens.is_empty(),
            permission_controls: !self.catalog.is_empty(),
            token_dialog: self.displaying_token,
            permissions_dialog: self.managing_permissions_for.is_some(),
            delete_dialog: self.api_token_being_deleted.is_some(),
        }
    }

    // Creation form

    pub fn set_token_name(&mut self, name: String) {
        self.create_form.set_field(|v| v.name = name);
    }

    pub fn set_create_permission(&mut self, permission: &str, checked: bool) {
        self.create_form.set_field(|v| {
            v.permissions.set(permission, checked);
        });
    }

    pub fn submit_create(&mut self) -> Option<Submission> {
        let values = self.create_form.begin_submit()?;
        Some(Submission::Create(CreateApiTokenRequest {
            name: values.name,
            permissions: values.permissions,
        }))
    }

    pub fn close_token_display(&mut self) {
        self.displaying_token = false;
        self.plain_text_token = None;
    }

    pub fn clear_created_flash(&mut self) {
        self.create_form.clear_recently_successful();
    }

    // Permission-edit dialog

    /// Open the permission dialog seeded with a copy of the token's abilities
    pub fn manage_permissions(&mut self, token: &ApiToken) {
        self.update_form.set_values(UpdateTokenForm {
            permissions: token.abilities.clone(),
        });
        self.update_form.clear_errors();
        self.managing_permissions_for = Some(token.clone());
    }

    pub fn set_update_permission(&mut self, permission: &str, checked: bool) {
        self.update_form.set_field(|v| {
            v.permissions.set(permission, checked);
        });
    }

    pub fn submit_update(&mut self) -> Option<Submission> {
        let id = self.managing_permissions_for.as_ref()?.id;
        let values = self.update_form.begin_submit()?;
        Some(Submission::Update {
            id,
            request: UpdateApiTokenRequest {
                permissions: values.permissions,
            },
        })
    }

    pub fn cancel_manage_permissions(&mut self) {
        self.managing_permissions_for = None;
    }

    // Deletion dialog

    pub fn confirm_deletion(&mut self, token: &ApiToken) {
        self.api_token_being_deleted = Some(token.clone());
    }

    pub fn submit_delete(&mut self) -> Option<Submission> {
        let id = self.api_token_being_deleted.as_ref()?.id;
        self.delete_form.begin_submit()?;
        Some(Submission::Delete { id })
    }

    pub fn cancel_deletion(&mut self) {
        self.api_token_being_deleted = None;
    }

    /// Settle a submission.
    ///
    /// A dialog slot is only cleared, and failure messages only recorded,
    /// if the slot still refers to the token the request was for.
    pub fn complete(&mut self, completion: Completion) -> Option<HostEvent> {
        if let Some(err) = completion.error() {
            log::warn!("API token request failed: {}", err);
        }

        match completion {
            Completion::Created(Ok(response)) => {
                log::debug!("Created API token {}", response.token.id);
                self.create_form.succeed();
                self.create_form.reset();
                self.displaying_token = true;
                self.plain_text_token = Some(response.plain_text_token);
                Some(HostEvent::Reload)
            }
            Completion::Created(Err(err)) => {
                self.create_form.fail(err.field_errors());
                None
            }
            Completion::Updated { id, result: Ok(()) } => {
                self.update_form.succeed();
                if self.managing_permissions_for.as_ref().map(|t| t.id) == Some(id) {
                    self.managing_permissions_for = None;
                }
                Some(HostEvent::Reload)
            }
            Completion::Updated { id, result: Err(err) } => {
                if self.managing_permissions_for.as_ref().map(|t| t.id) == Some(id) {
                    self.update_form.fail(err.field_errors());
                } else {
                    self.update_form.abandon();
                }
                None
            }
            Completion::Deleted { id, result: Ok(()) } => {
                self.delete_form.succeed();
                if self.api_token_being_deleted.as_ref().map(|t| t.id) == Some(id) {
                    self.api_token_being_deleted = None;
                }
                Some(HostEvent::Reload)
            }
            Completion::Deleted { id, result: Err(err) } => {
                if self.api_token_being_deleted.as_ref().map(|t| t.id) == Some(id) {
                    self.delete_form.fail(err.field_errors());
                } else {
                    self.delete_form.abandon();
                }
                None
            }
        }
    }
}
