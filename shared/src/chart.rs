//! Comparison chart rendering
//!
//! Renders extracted series as self-contained SVG documents the
//! dashboard can inline. This is a pure presentation layer: it takes
//! already-extracted data, has no failure mode of its own, and renders
//! an explicit empty state when there is nothing to draw.

use crate::models::{CropYield, MatchStatus, PriceComparison};

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 340.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 44.0;

const FONT: &str = "system-ui, sans-serif";
const AXIS_COLOR: &str = "#94a3b8";
const GRID_COLOR: &str = "#e2e8f0";
const TEXT_COLOR: &str = "#334155";
const GUIDE_COLOR: &str = "#64748b";

/// Bar hue for the current price
pub const CURRENT_PRICE_COLOR: &str = "#3b82f6";
/// Bar hue for the predicted price
pub const PREDICTED_PRICE_COLOR: &str = "#22c55e";

/// Bar hue for a crop's match tier
pub fn status_color(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::BestMatch => "#16a34a",
        MatchStatus::GoodMatch => "#ca8a04",
        MatchStatus::ModerateMatch => "#ea580c",
    }
}

/// One bar of a comparison chart
struct Bar {
    category: String,
    value: f64,
    value_label: String,
    tooltip: String,
    color: &'static str,
}

/// Internal bar-chart model shared by both chart types
struct BarChart {
    title: String,
    bars: Vec<Bar>,
    y_max: f64,
    /// Horizontal gridline spacing in value units
    grid_step: Option<f64>,
    /// Dashed guide line across the first two bar tops
    connect_tops: bool,
}

impl BarChart {
    fn render(&self) -> String {
        let mut svg = String::with_capacity(2048);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="{FONT}">"#,
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{:.1}" y="26" text-anchor="middle" font-size="16" font-weight="600" fill="{TEXT_COLOR}">{}</text>"#,
            WIDTH / 2.0,
            escape_xml(&self.title),
        ));
        svg.push('\n');

        if self.bars.is_empty() {
            svg.push_str(&format!(
                r#"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14" fill="{AXIS_COLOR}">No data available</text>"#,
                WIDTH / 2.0,
                HEIGHT / 2.0,
            ));
            svg.push('\n');
            svg.push_str("</svg>\n");
            return svg;
        }

        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;
        // Guard against a degenerate all-zero series
        let y_max = if self.y_max > 0.0 { self.y_max } else { 1.0 };
        let y = |value: f64| MARGIN_TOP + plot_height * (1.0 - value / y_max);

        if let Some(step) = self.grid_step {
            let mut level = 0.0;
            while level <= y_max {
                let gy = y(level);
                svg.push_str(&format!(
                    r#"  <line x1="{MARGIN_LEFT:.1}" y1="{gy:.1}" x2="{:.1}" y2="{gy:.1}" stroke="{GRID_COLOR}" stroke-width="1"/>"#,
                    MARGIN_LEFT + plot_width,
                ));
                svg.push('\n');
                svg.push_str(&format!(
                    r#"  <text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{AXIS_COLOR}">{}%</text>"#,
                    MARGIN_LEFT - 8.0,
                    gy + 4.0,
                    level as u32,
                ));
                svg.push('\n');
                level += step;
            }
        }

        // Thin bars with even spacing inside their slots
        let slot = plot_width / self.bars.len() as f64;
        let bar_width = (slot * 0.42).min(56.0);
        let mut tops: Vec<(f64, f64)> = Vec::with_capacity(self.bars.len());

        for (i, bar) in self.bars.iter().enumerate() {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            let top = y(bar.value.clamp(0.0, y_max));
            let center = x + bar_width / 2.0;
            tops.push((center, top));

            svg.push_str(&format!(
                r#"  <rect x="{x:.1}" y="{top:.1}" width="{bar_width:.1}" height="{:.1}" fill="{}" rx="3"><title>{}</title></rect>"#,
                baseline - top,
                bar.color,
                escape_xml(&bar.tooltip),
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"  <text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="12" font-weight="600" fill="{TEXT_COLOR}">{}</text>"#,
                top - 8.0,
                escape_xml(&bar.value_label),
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"  <text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{TEXT_COLOR}">{}</text>"#,
                baseline + 18.0,
                escape_xml(&bar.category),
            ));
            svg.push('\n');
        }

        if self.connect_tops && tops.len() >= 2 {
            let (x1, y1) = tops[0];
            let (x2, y2) = tops[1];
            svg.push_str(&format!(
                r#"  <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{GUIDE_COLOR}" stroke-width="1.5" stroke-dasharray="6 4"/>"#,
            ));
            svg.push('\n');
        }

        svg.push_str(&format!(
            r#"  <line x1="{MARGIN_LEFT:.1}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="{AXIS_COLOR}" stroke-width="1"/>"#,
            MARGIN_LEFT + plot_width,
        ));
        svg.push('\n');
        svg.push_str("</svg>\n");
        svg
    }
}

/// Render the two-bar current/predicted price comparison
pub fn render_price_chart(comparison: &PriceComparison, crop: &str, district: &str) -> String {
    let bars = vec![
        Bar {
            category: "Current Price".to_string(),
            value: f64::from(comparison.current_price),
            value_label: format!("₹{}", format_inr(comparison.current_price)),
            tooltip: format!(
                "Current Price: ₹{} per Quintal",
                format_inr(comparison.current_price)
            ),
            color: CURRENT_PRICE_COLOR,
        },
        Bar {
            category: "Predicted Price".to_string(),
            value: f64::from(comparison.predicted_price),
            value_label: format!("₹{}", format_inr(comparison.predicted_price)),
            tooltip: format!(
                "Predicted Price: ₹{} per Quintal",
                format_inr(comparison.predicted_price)
            ),
            color: PREDICTED_PRICE_COLOR,
        },
    ];
    let max = comparison.current_price.max(comparison.predicted_price);

    BarChart {
        title: format!("Price Outlook: {crop} ({district})"),
        bars,
        y_max: f64::from(max) * 1.2,
        grid_step: None,
        connect_tops: true,
    }
    .render()
}

/// Render the per-crop yield probability comparison, fixed 0-100 scale
pub fn render_yield_chart(entries: &[CropYield]) -> String {
    let bars = entries
        .iter()
        .map(|entry| Bar {
            category: entry.name.clone(),
            value: f64::from(entry.probability),
            value_label: format!("{}%", entry.probability),
            tooltip: format!("{}: {}% ({})", entry.name, entry.probability, entry.status),
            color: status_color(entry.status),
        })
        .collect();

    BarChart {
        title: "Predicted Yield Probability".to_string(),
        bars,
        y_max: 100.0,
        grid_step: Some(25.0),
        connect_tops: false,
    }
    .render()
}

/// Format a rupee amount with Indian digit grouping (12,34,567)
pub fn format_inr(value: u32) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);

    let mut out = String::with_capacity(digits.len() + groups.len());
    for group in groups.iter().rev() {
        out.push_str(group);
        out.push(',');
    }
    out.push_str(tail);
    out
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceExtraction;

    fn comparison(current: u32, predicted: u32) -> PriceComparison {
        PriceComparison::from_extraction(&PriceExtraction {
            current_price: Some(current),
            predicted_price: Some(predicted),
        })
        .unwrap()
    }

    #[test]
    fn price_chart_has_two_bars_and_guide_line() {
        let svg = render_price_chart(&comparison(2927, 4500), "Wheat", "Pune");
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("₹2,927"));
        assert!(svg.contains("₹4,500"));
        assert!(svg.contains("Price Outlook: Wheat (Pune)"));
    }

    #[test]
    fn price_chart_tooltips_carry_exact_values() {
        let svg = render_price_chart(&comparison(2927, 4500), "Wheat", "Pune");
        assert!(svg.contains("<title>Current Price: ₹2,927 per Quintal</title>"));
        assert!(svg.contains("<title>Predicted Price: ₹4,500 per Quintal</title>"));
    }

    #[test]
    fn yield_chart_colors_follow_status_tiers() {
        let entries = vec![
            CropYield {
                name: "Rice".to_string(),
                probability: 85,
                status: MatchStatus::BestMatch,
            },
            CropYield {
                name: "Soybean".to_string(),
                probability: 74,
                status: MatchStatus::GoodMatch,
            },
            CropYield {
                name: "Maize".to_string(),
                probability: 62,
                status: MatchStatus::ModerateMatch,
            },
        ];
        let svg = render_yield_chart(&entries);
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains(status_color(MatchStatus::BestMatch)));
        assert!(svg.contains(status_color(MatchStatus::GoodMatch)));
        assert!(svg.contains(status_color(MatchStatus::ModerateMatch)));
        assert!(svg.contains("<title>Rice: 85% (Best Match)</title>"));
        // Fixed 0-100 axis
        assert!(svg.contains(">100%</text>"));
    }

    #[test]
    fn empty_series_renders_placeholder() {
        let svg = render_yield_chart(&[]);
        assert!(svg.contains("No data available"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn crop_names_are_escaped() {
        let entries = vec![CropYield {
            name: "Beans <dwarf & pole>".to_string(),
            probability: 71,
            status: MatchStatus::GoodMatch,
        }];
        let svg = render_yield_chart(&entries);
        assert!(svg.contains("Beans &lt;dwarf &amp; pole&gt;"));
        assert!(!svg.contains("<dwarf"));
    }

    #[test]
    fn indian_digit_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(950), "950");
        assert_eq!(format_inr(2500), "2,500");
        assert_eq!(format_inr(123456), "1,23,456");
        assert_eq!(format_inr(12345678), "1,23,45,678");
    }
}
