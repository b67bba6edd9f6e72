//! URL helpers.

use reqwest::Url;

/// Masks an RPC URL down to its scheme and authority.
///
/// Provider URLs often carry API keys in the path or query string, so only the
/// origin is ever written to logs. Unparseable input is masked entirely.
pub fn mask_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return "***".to_string();
    };
    let Some(host) = parsed.host_str() else {
        return "***".to_string();
    };

    let origin = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };

    let has_path = parsed.path() != "/" && !parsed.path().is_empty();
    if has_path || parsed.query().is_some() {
        format!("{origin}/***")
    } else {
        origin
    }
}
