pub mod api_tokens;
pub mod not_found;
