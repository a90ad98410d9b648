//! Custom Yew hooks for the frontend application.

mod use_api_tokens;

pub use use_api_tokens::{use_api_tokens, UseApiTokens};
