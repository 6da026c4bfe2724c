/// Derives the image host's public id from a hosted URL: the last path
/// segment, cut at its first `.`.
///
/// `https://res.example.com/demo/image/upload/v1712/abc123.jpg` gives `abc123`.
/// URLs carrying a query string without an extension, or uploads stored under
/// a folder, do not round-trip through this rule.
pub fn public_id_from_url(url: &str) -> Option<String> {
    let segment = url.rsplit('/').next()?;
    let id = segment.split('.').next()?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
