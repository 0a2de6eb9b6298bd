//! Build-time configuration. Values are baked in with `option_env!` because a
//! wasm bundle has no process environment; the localhost fallback matches the
//! backend's development default.

const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Relay endpoint for contact-form submissions. The relay forwards the
/// message by email; it is external to this system.
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub fn api_base() -> &'static str {
    option_env!("PORTFOLIO_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Joins an absolute API path onto the configured base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base().trim_end_matches('/'))
}

pub fn web3forms_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}

pub fn backend_api_key() -> &'static str {
    option_env!("PORTFOLIO_API_KEY").unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_path() {
        let url = api_url("/api/content");
        assert!(url.ends_with("/api/content"));
        assert!(!url.contains("//api"));
    }
}
