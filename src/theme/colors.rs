//! Colors - Overlay and Settings Palettes

use gpui::{Rgba, rgb, rgba};

use crate::domain::rate::DisplayTier;

/// Dark overlay palette
pub struct OverlayColors;

impl OverlayColors {
    /// Window background, slightly translucent
    pub fn background() -> Rgba { rgba(0x0d1117f2) }
    pub fn border() -> Rgba { rgb(0x30363d) }

    /// Real-time rate text
    pub fn rate_normal() -> Rgba { rgb(0xe6edf3) }
    /// Slower than real-time
    pub fn rate_slow() -> Rgba { rgb(0x79c0ff) }
    /// Faster than real-time
    pub fn rate_fast() -> Rgba { rgb(0xffa657) }

    // Rate buttons
    pub fn button_bg() -> Rgba { rgb(0x21262d) }
    pub fn button_hover() -> Rgba { rgb(0x30363d) }
    pub fn button_text() -> Rgba { rgb(0x58a6ff) }

    /// Text color for a display tier
    pub fn rate(tier: DisplayTier) -> Rgba {
        match tier {
            DisplayTier::Slow => Self::rate_slow(),
            DisplayTier::Normal => Self::rate_normal(),
            DisplayTier::Fast => Self::rate_fast(),
        }
    }
}

/// Light settings window palette
pub struct SettingsColors;

impl SettingsColors {
    pub fn background() -> Rgba { rgb(0xf7f7f7) }
    pub fn text_primary() -> Rgba { rgb(0x2e2e2e) }
    pub fn text_muted() -> Rgba { rgb(0x8a8a8a) }
    pub fn accent() -> Rgba { rgb(0x357c55) }
    /// Card and segmented control background
    pub fn control_bg() -> Rgba { rgb(0xededed) }
    pub fn divider() -> Rgba { rgb(0xdfdfdf) }

    /// Selected segment, accent blended into the control background
    pub fn segment_selected() -> Rgba { rgb(0xd1e0d7) }
    pub fn segment_hover() -> Rgba { rgb(0xe3e3e3) }

    // Checkbox
    pub fn checkbox_bg() -> Rgba { rgb(0xffffff) }
    pub fn checkbox_border() -> Rgba { rgb(0xc4c4c4) }
    pub fn check_mark() -> Rgba { rgb(0xffffff) }

    // Connection status dot
    pub fn connected() -> Rgba { rgb(0x22c55e) }
    pub fn disconnected() -> Rgba { rgb(0xef4444) }
}
