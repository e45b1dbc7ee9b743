//! Viewport handling for mobile user agents

use std::sync::OnceLock;

use regex::Regex;

/// Viewport meta content applied on mobile devices
pub const MOBILE_VIEWPORT_CONTENT: &str = "width=device-width, initial-scale=1.0";

static MOBILE_UA: OnceLock<Regex> = OnceLock::new();

/// Whether the user agent belongs to a phone or tablet
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_UA
        .get_or_init(|| Regex::new(r"(?i)iPhone|iPad|iPod|Android").expect("Invalid regex"))
        .is_match(user_agent)
}
