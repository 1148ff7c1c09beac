//! Small helpers for logging upstream payloads.

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to the nearest
/// char boundary) with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Render a raw response body for a log line, lossy for non-UTF-8 bodies.
pub fn body_preview(body: &[u8], max: usize) -> String {
    truncate_for_log(&String::from_utf8_lossy(body), max)
}
