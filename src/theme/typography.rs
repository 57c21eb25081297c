//! Typography - Font Sizes and Families

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 11.0;
    pub const TEXT_SM: f32 = 13.0;
    pub const TEXT_BASE: f32 = 14.0;
    /// Settings window rate readout
    pub const TEXT_DISPLAY: f32 = 28.0;

    /// Overlay rate text; falls back to the platform monospace font when missing
    pub const OVERLAY_FONT: &'static str = "JetBrains Mono";

    /// Rate button glyph size for an overlay font size
    pub fn button_font_size(overlay_font: f32) -> f32 {
        (overlay_font / 2.0).floor().max(10.0)
    }
}
