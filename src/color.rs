use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

const SATURATION: f32 = 0.65;
const LIGHTNESS: f32 = 0.55;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` distinct colours on evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let rgb: Srgb = Hsl::new(i as f32 * step, SATURATION, LIGHTNESS).into_color();
            let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| (c * 255.0).round() as u8);
            Color32::from_rgb(r, g, b)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Country → colour series
// ---------------------------------------------------------------------------

/// One colour per country for the grouped bar chart.
///
/// Built from the full country list so a country keeps its colour while the
/// filters change.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SeriesColors {
    pub fn new(countries: &[String]) -> Self {
        let mapping = countries
            .iter()
            .cloned()
            .zip(generate_palette(countries.len()))
            .collect();
        Self {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, country: &str) -> Color32 {
        self.mapping
            .get(country)
            .copied()
            .unwrap_or(self.default_color)
    }
}
