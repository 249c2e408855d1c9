use std::path::Path;

use anyhow::{Context, Result};
use serde::de::Deserializer;
use serde::Deserialize;

use crate::color::HexColor;

/// Output canvas selector. Anything that is not recognised as a background
/// resolves to poster so a stale or misspelled value still yields an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayKind {
    #[default]
    Poster,
    Background,
}

impl OverlayKind {
    /// Canvas resolution in pixels for this overlay kind.
    pub const fn canvas_size(self) -> (u32, u32) {
        match self {
            Self::Poster => (2000, 3000),
            Self::Background => (3840, 2160),
        }
    }
}

impl<'de> Deserialize<'de> for OverlayKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().eq_ignore_ascii_case("background") {
            Ok(Self::Background)
        } else {
            Ok(Self::Poster)
        }
    }
}

/// Declarative description of one overlay. Every field has a default that
/// leaves its effect disabled, so a sparse document is a valid input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct OverlayOptions {
    /// Selects the output resolution (poster 2000x3000, background 3840x2160).
    pub overlay_type: OverlayKind,
    /// Draw the border/rounded-corner layer.
    pub border_enabled: bool,
    /// Border ring width in pixels.
    pub border_px: u32,
    pub border_color: HexColor,
    /// Corner radius as a fraction of half the smaller canvas dimension.
    pub corner_radius: f32,
    /// Solid color band height at the canvas bottom, as a fraction of height.
    pub matte_height_ratio: f32,
    /// Linear alpha ramp height immediately above the matte band.
    pub fade_height_ratio: f32,
    pub gradient_color: HexColor,
    pub inner_glow_strength: f32,
    pub inner_glow_color: HexColor,
    pub vignette_strength: f32,
    pub vignette_color: HexColor,
    /// Maximum per-pixel noise opacity.
    pub grain_amount: f32,
    /// Noise cell edge length in pixels; larger values look coarser.
    pub grain_size: f32,
    /// Draw the text-area guide rectangle on top of everything.
    pub show_text_area: bool,
    pub text_box_w: u32,
    pub text_box_h: u32,
    /// Distance from the canvas bottom to the guide box bottom edge.
    pub text_box_offset: u32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            overlay_type: OverlayKind::Poster,
            border_enabled: false,
            border_px: 0,
            border_color: HexColor::BLACK,
            corner_radius: 0.0,
            matte_height_ratio: 0.0,
            fade_height_ratio: 0.0,
            gradient_color: HexColor::BLACK,
            inner_glow_strength: 0.0,
            inner_glow_color: HexColor::BLACK,
            vignette_strength: 0.0,
            vignette_color: HexColor::BLACK,
            grain_amount: 0.0,
            grain_size: Self::default_grain_size(),
            show_text_area: false,
            text_box_w: 0,
            text_box_h: 0,
            text_box_offset: 0,
        }
    }
}

impl OverlayOptions {
    const fn default_grain_size() -> f32 {
        1.0
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("parsing overlay options as YAML")
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing overlay options as JSON")
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading overlay options from {}", path.display()))?;
        Self::from_yaml_str(&s)
    }

    /// Load options from a file, choosing the parser by extension
    /// (`.json` parses as JSON, everything else as YAML).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("reading overlay options from {}", path.display()))?;
            Self::from_json_str(&s)
        } else {
            Self::from_yaml_file(path)
        }
    }

    /// Clamp numeric fields into their documented ranges. The compositor
    /// sanitizes rather than rejects, so this never fails.
    pub fn normalized(mut self) -> Self {
        self.corner_radius = clamp_unit(self.corner_radius);
        self.matte_height_ratio = clamp_unit(self.matte_height_ratio);
        self.fade_height_ratio = clamp_unit(self.fade_height_ratio);
        self.inner_glow_strength = clamp_unit(self.inner_glow_strength);
        self.vignette_strength = clamp_unit(self.vignette_strength);
        self.grain_amount = clamp_unit(self.grain_amount);
        self.grain_size = if self.grain_size.is_finite() {
            self.grain_size.max(Self::default_grain_size())
        } else {
            Self::default_grain_size()
        };
        self
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}
