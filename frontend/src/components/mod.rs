mod api_token_manager;
mod copy_token;
mod modal;
mod permission_checklist;

pub use api_token_manager::ApiTokenManager;
pub use copy_token::CopyToken;
pub use modal::{Modal, ModalKind};
pub use permission_checklist::PermissionChecklist;
