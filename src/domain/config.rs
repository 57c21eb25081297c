//! Config - Persisted Overlay Settings

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OVERLAY_X, DEFAULT_OVERLAY_Y, RATE_BUTTONS_WIDTH};

/// Overlay scale setting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeTier {
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[default]
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    XL,
    #[serde(rename = "HIDDEN")]
    Hidden,
}

/// Pixel dimensions for a visible size tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierMetrics {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub show_buttons: bool,
}

impl SizeTier {
    /// All tiers in selector order
    pub const ALL: [SizeTier; 5] = [
        SizeTier::Hidden,
        SizeTier::S,
        SizeTier::M,
        SizeTier::L,
        SizeTier::XL,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SizeTier::S => "S",
            SizeTier::M => "M",
            SizeTier::L => "L",
            SizeTier::XL => "XL",
            SizeTier::Hidden => "Hide",
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, SizeTier::Hidden)
    }

    /// Overlay window metrics, `None` for [`SizeTier::Hidden`]
    pub fn metrics(&self) -> Option<TierMetrics> {
        let (width, height, font_size) = match self {
            SizeTier::S => (80.0, 25.0, 10.0),
            SizeTier::M => (120.0, 40.0, 16.0),
            SizeTier::L => (160.0, 55.0, 20.0),
            SizeTier::XL => (200.0, 70.0, 24.0),
            SizeTier::Hidden => return None,
        };
        // S is too small for the rate buttons
        let show_buttons = !matches!(self, SizeTier::S);
        Some(TierMetrics {
            width: if show_buttons { width + RATE_BUTTONS_WIDTH } else { width },
            height,
            font_size,
            show_buttons,
        })
    }
}

/// Screen coordinates of the overlay's top-left corner
///
/// Serialized as a two-element array: `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_X, DEFAULT_OVERLAY_Y)
    }
}

impl From<[i32; 2]> for Position {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [i32; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

/// Bounds of an attached display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether a `width` x `height` box at `pos` overlaps this display
    pub fn intersects(&self, pos: Position, width: f32, height: f32) -> bool {
        let (px, py) = (pos.x as f32, pos.y as f32);
        px < self.x + self.width
            && px + width > self.x
            && py < self.y + self.height
            && py + height > self.y
    }

    /// Origin that centers a `width` x `height` box on this display
    pub fn centered(&self, width: f32, height: f32) -> Position {
        Position::new(
            (self.x + (self.width - width) / 2.0).round() as i32,
            (self.y + (self.height - height) / 2.0).round() as i32,
        )
    }
}

/// Overlay configuration, persisted as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Overlay window origin. Older config files store it as `overlay_position`.
    #[serde(alias = "overlay_position")]
    pub position: Position,
    /// Overlay scale
    pub size_tier: SizeTier,
    /// Hide the overlay while the simulator is not focused
    pub auto_hide: bool,
    /// Register an OS startup entry
    pub start_with_windows: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            size_tier: SizeTier::L,
            auto_hide: true,
            start_with_windows: false,
        }
    }
}

impl OverlayConfig {
    /// Reset the position when the overlay would not land on any display.
    ///
    /// The visibility check uses the current tier's footprint (the L footprint while
    /// hidden). Returns `true` when the position was reset.
    pub fn ensure_visible(&mut self, displays: &[ScreenRect]) -> bool {
        let Some(primary) = displays.first() else {
            return false;
        };

        let metrics = self
            .size_tier
            .metrics()
            .or_else(|| SizeTier::L.metrics())
            .map(|m| (m.width, m.height))
            .unwrap_or((1.0, 1.0));

        if displays
            .iter()
            .any(|d| d.intersects(self.position, metrics.0, metrics.1))
        {
            return false;
        }

        self.position = primary.centered(metrics.0, metrics.1);
        true
    }
}
