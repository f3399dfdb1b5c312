//! URL normalization helpers used by configuration resolution.

/// Ensure a candidate URL carries a scheme.
///
/// Values that already start with `http://` or `https://` pass through
/// unchanged; anything else is assumed to be a bare domain and gets
/// `https://` prepended.
pub fn make_url_absolute(candidate: &str) -> String {
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        candidate.to_string()
    } else {
        format!("https://{candidate}")
    }
}

/// Produce a short, user-facing label for a URL: scheme, `www.` prefix
/// and trailing slash stripped.
pub fn shorten_url(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

/// Extract the lower-cased host portion of a URL or bare domain,
/// falling back to the trimmed input when it does not parse.
pub fn url_host(candidate: &str) -> String {
    let absolute = make_url_absolute(candidate.trim());
    url::Url::parse(&absolute)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| candidate.trim().to_string())
        .to_ascii_lowercase()
}
