//! Framework-agnostic core of the API token settings panel.
//!
//! The Yew component in `components::api_token_manager` only renders this
//! state and forwards user actions into it.

mod form_state;
mod reload;
mod state;
mod submission;

pub use form_state::FormState;
pub use reload::ReloadGeneration;
pub use state::{
    CreateTokenForm, HostEvent, PanelLayout, PermissionCatalog, TokenManagerState, UpdateTokenForm,
};
pub use submission::{perform, Completion, Submission};
