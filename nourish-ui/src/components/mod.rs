//! UI Components
//!
//! Reusable Leptos components for the dashboard chrome.

pub mod header;
pub mod loading;
pub mod sidebar;
pub mod toast;

pub use header::Header;
pub use loading::{InlineLoading, Loading};
pub use sidebar::Sidebar;
pub use toast::Toast;

/// Glyph for an icon name from the core's navigation metadata
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "home" => "🏠",
        "user" => "👤",
        "map-pin" => "📍",
        "heart" => "❤️",
        "file-text" => "📄",
        "search" => "🔍",
        "camera" => "📷",
        "users" => "👥",
        "settings" => "⚙️",
        "brain" => "🧠",
        "activity" => "📈",
        "zap" => "⚡",
        "shield" => "🛡️",
        "eye" => "👁️",
        "bone" => "🦴",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nourish::dashboard::navigation_items;
    use nourish::panels::organ_diet::ORGANS;

    #[test]
    fn test_every_icon_has_a_glyph() {
        let nav = navigation_items().into_iter().map(|item| item.icon);
        let organs = ORGANS.iter().map(|organ| organ.icon);
        for icon in nav.chain(organs).chain(["brain", "heart", "activity"]) {
            assert_ne!(icon_glyph(icon), "•", "no glyph for {}", icon);
        }
    }
}
