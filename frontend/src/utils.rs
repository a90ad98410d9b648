use chrono::{DateTime, Utc};
use shared::ApiClientConfig;
use web_sys::window;

const FALLBACK_BASE_URL: &str = "http://localhost:8000";

/// Get the base HTTP URL (e.g., "http://localhost:8000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return FALLBACK_BASE_URL.to_string();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8000".to_string());

    format!("{}//{}", protocol, host)
}

/// API configuration for the origin the page was served from
pub fn api_config() -> ApiClientConfig {
    ApiClientConfig::new(get_base_url())
}

/// Send the browser to the logout route after the session expired
pub fn redirect_to_logout() {
    if let Some(window) = window() {
        let _ = window.location().set_href("/logout");
    }
}

/// Format a timestamp for display (e.g. "2026-10-19 08:05 UTC")
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Hover text for a token row
pub fn token_title(created_at: Option<&DateTime<Utc>>, last_used_at: Option<&DateTime<Utc>>) -> String {
    let mut parts = Vec::new();
    if let Some(created) = created_at {
        parts.push(format!("Created {}", format_timestamp(created)));
    }
    if let Some(used) = last_used_at {
        parts.push(format!("Last used {}", format_timestamp(used)));
    }
    parts.join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2026-10-19 08:05 UTC");
    }

    #[test]
    fn test_token_title() {
        let created = Utc.with_ymd_and_hms(2026, 9, 1, 12, 30, 0).unwrap();
        let used = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        assert_eq!(
            token_title(Some(&created), Some(&used)),
            "Created 2026-09-01 12:30 UTC · Last used 2026-10-19 08:00 UTC"
        );
        assert_eq!(token_title(None, None), "");
    }
}
