//! Remote resources referenced by the page
//!
//! None of these are managed by the app: if one is unreachable the browser
//! shows a broken image or a missing glyph and nothing else happens.

// ============================================================================
// Stylesheets
// ============================================================================

/// Font Awesome icon font, linked by the root component
pub const ICON_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

// ============================================================================
// Avatars
// ============================================================================

/// DiceBear avatar generator, the seed is appended as a query value
pub const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

// ============================================================================
// Accent colours
// ============================================================================

/// Brand accent ("electric" yellow)
pub const ACCENT_COLOR: &str = "#FFD600";

/// Newsletter input border while not focused
pub const INPUT_BORDER_COLOR: &str = "#1f2937";

pub fn avatar_url(seed: &str) -> String {
    format!("{}{}", AVATAR_BASE_URL, seed)
}
