/// Fragment targeted by an in-page link, or `None` for a bare `#` and non-fragment links.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}
