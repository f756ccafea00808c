//! Deployment-time configuration baked in at compile time.

/// Booking endpoint used when `STRIKE_BOOKING_URL` is not set at build time.
pub const DEFAULT_BOOKING_URL: &str =
    "https://731xy9c2ak.execute-api.eu-north-1.amazonaws.com/booking";

/// Base path for the router (e.g., `/strike` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL the booking form posts to.
#[must_use]
pub fn booking_url() -> String {
    booking_url_with_override(option_env!("STRIKE_BOOKING_URL"))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn booking_url_with_override(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BOOKING_URL)
        .to_string()
}
