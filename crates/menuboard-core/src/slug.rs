//! Public slug generation and validation.
//!
//! A slug is derived from the restaurant name and suffixed with the
//! registration time in base 36, so two restaurants with the same name
//! get distinct slugs without probing the store.

use chrono::{DateTime, Utc};

const FALLBACK_BASE: &str = "restaurant";

/// Lowercase the name, keep `[a-z0-9]`, and join words with single dashes.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }

    out
}

/// Build a slug for a new registration at `now`.
pub fn generate_slug(name: &str, now: DateTime<Utc>) -> String {
    let mut base = slugify(name);
    if base.is_empty() {
        base = FALLBACK_BASE.to_string();
    }
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    format!("{base}-{}", to_base36(millis))
}

/// Slugs travel in URLs and query strings unescaped.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".into();
    }
    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
