use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::SeriesColors;
use crate::data::aggregate::YearCount;

/// Share of one year slot taken by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Grouped bar layout
// ---------------------------------------------------------------------------

/// Bars of one country: `(x, document_count)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBars {
    pub country: String,
    pub bars: Vec<(f64, f64)>,
}

/// Place one series per country side by side inside each year slot.
///
/// Series follow `countries` order; countries without counts get no series.
/// Returns the series and the width of a single bar.
pub fn grouped_bars(counts: &[YearCount], countries: &[String]) -> (Vec<SeriesBars>, f64) {
    let present: Vec<&String> = countries
        .iter()
        .filter(|c| counts.iter().any(|yc| &yc.country == *c))
        .collect();
    if present.is_empty() {
        return (Vec::new(), GROUP_WIDTH);
    }

    let n = present.len() as f64;
    let width = GROUP_WIDTH / n;
    let series = present
        .iter()
        .enumerate()
        .map(|(i, country)| {
            let offset = (i as f64 - (n - 1.0) / 2.0) * width;
            let bars = counts
                .iter()
                .filter(|yc| &yc.country == *country)
                .map(|yc| (yc.year as f64 + offset, yc.document_count as f64))
                .collect();
            SeriesBars {
                country: (*country).clone(),
                bars,
            }
        })
        .collect();
    (series, width)
}

// ---------------------------------------------------------------------------
// Chart (detail tab)
// ---------------------------------------------------------------------------

/// Documents per country per year, bars grouped by year.
pub fn year_chart(
    ui: &mut Ui,
    counts: &[YearCount],
    countries: &[String],
    colors: &SeriesColors,
    height: f32,
) {
    let (series, width) = grouped_bars(counts, countries);

    Plot::new("documents_per_year")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Year")
        .y_axis_label("Document Count")
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in series {
                let bars: Vec<Bar> = s
                    .bars
                    .iter()
                    .map(|&(x, count)| Bar::new(x, count).width(width))
                    .collect();
                let chart = BarChart::new(bars)
                    .name(&s.country)
                    .color(colors.color_for(&s.country));
                plot_ui.bar_chart(chart);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(country: &str, year: i64, n: u64) -> YearCount {
        YearCount {
            country: country.to_string(),
            year,
            document_count: n,
        }
    }

    #[test]
    fn bars_of_one_year_sit_side_by_side() {
        let counts = vec![
            count("Ghana", 2020, 1),
            count("Kenya", 2020, 3),
            count("Kenya", 2021, 2),
        ];
        let countries = vec!["Kenya".to_string(), "Ghana".to_string(), "Benin".to_string()];

        let (series, width) = grouped_bars(&counts, &countries);

        assert_eq!(series.len(), 2);
        assert!((width - 0.4).abs() < 1e-9);
        assert_eq!(series[0].country, "Kenya");
        assert_eq!(series[1].country, "Ghana");

        let kenya_2020 = series[0].bars[0];
        let ghana_2020 = series[1].bars[0];
        assert!((kenya_2020.0 - 2019.8).abs() < 1e-9);
        assert!((ghana_2020.0 - 2020.2).abs() < 1e-9);
        assert_eq!(kenya_2020.1, 3.0);
        assert_eq!(series[0].bars.len(), 2);
    }

    #[test]
    fn no_counts_no_series() {
        let (series, _) = grouped_bars(&[], &["Kenya".to_string()]);
        assert!(series.is_empty());
    }
}
