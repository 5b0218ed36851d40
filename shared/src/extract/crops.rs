//! Yield-table extraction from crop recommendation responses
//!
//! Two independent strategies. The preferred one reads the dedicated
//! "Yield Analysis" section the prompt asks for, where the model also
//! supplies the match status text. When that section is missing the
//! fallback scans the whole response for per-crop blocks and derives
//! the status from the probability bands instead.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CropYield, MatchStatus};

/// Extracts ranked crop yield entries from free-form model output
pub struct YieldExtractor {
    /// Line containing the "Yield Analysis" heading
    section_heading: Regex,
    /// Start of the next section after it
    next_heading: Regex,
    /// Bullet line: `<marker> <crop>: <int>% (<status>)`
    bullet: Regex,
    /// Fallback block: `Crop <n>: <name> ... Yield Probability: <int>%`
    crop_block: Regex,
}

impl YieldExtractor {
    pub fn new() -> Self {
        Self {
            section_heading: pattern(r"(?i)yield\s+analysis[^\n]*"),
            next_heading: pattern(r"(?m)^\s*(?:#{1,6}\s+\S|\*\*[^*\n]+\*\*\s*$)"),
            bullet: pattern(
                r"(?m)^\s*(?:[•\-*+]|\d+\.)\s*\*{0,2}([^:\n*]+?)\*{0,2}\s*:\s*(\d{1,3})\s*%\s*\(\s*([^)\n]+?)\s*\)",
            ),
            crop_block: pattern(
                r"(?is)crop\s+\d+\s*:\s*\*{0,2}\s*([^\n*]+?)\s*\*{0,2}\s*\n.*?yield\s+probability\s*:?\s*\*{0,2}\s*(\d{1,3})\s*%",
            ),
        }
    }

    /// Extract yield entries, sorted by probability descending.
    /// Returns `None` when neither strategy finds anything, so callers
    /// can render a "data unavailable" state instead of an empty chart.
    pub fn extract(&self, text: &str) -> Option<Vec<CropYield>> {
        let mut entries = self.from_yield_section(text);
        if entries.is_empty() {
            entries = self.from_crop_blocks(text);
        }
        if entries.is_empty() {
            return None;
        }
        // Stable sort keeps the model's original order among ties
        entries.sort_by(|a, b| b.probability.cmp(&a.probability));
        Some(entries)
    }

    /// Strategy A: bullets inside the "Yield Analysis" section, status
    /// read from the text. Malformed lines are skipped.
    fn from_yield_section(&self, text: &str) -> Vec<CropYield> {
        let Some(heading) = self.section_heading.find(text) else {
            return Vec::new();
        };
        let rest = &text[heading.end()..];
        let section = match self.next_heading.find(rest) {
            Some(next) => &rest[..next.start()],
            None => rest,
        };

        self.bullet
            .captures_iter(section)
            .filter_map(|caps| {
                let name = caps[1].trim();
                let probability = parse_probability(&caps[2])?;
                let status = MatchStatus::from_label(&caps[3])?;
                entry(name, probability, status)
            })
            .collect()
    }

    /// Strategy B: per-crop blocks anywhere in the text, status derived
    /// from the probability band.
    fn from_crop_blocks(&self, text: &str) -> Vec<CropYield> {
        self.crop_block
            .captures_iter(text)
            .filter_map(|caps| {
                let name = caps[1].trim();
                let probability = parse_probability(&caps[2])?;
                entry(name, probability, MatchStatus::from_probability(probability))
            })
            .collect()
    }
}

impl Default for YieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("invalid yield pattern")
}

/// Parse a captured probability, rejecting values above 100
fn parse_probability(raw: &str) -> Option<u8> {
    raw.parse::<u8>().ok().filter(|p| *p <= 100)
}

fn entry(name: &str, probability: u8, status: MatchStatus) -> Option<CropYield> {
    if name.is_empty() {
        return None;
    }
    Some(CropYield {
        name: name.to_string(),
        probability,
        status,
    })
}

static EXTRACTOR: LazyLock<YieldExtractor> = LazyLock::new(YieldExtractor::new);

/// Extract yield entries using the shared default extractor
pub fn extract_yield_data(text: &str) -> Option<Vec<CropYield>> {
    EXTRACTOR.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONED: &str = "\
**🌱 KrishiMitra 2.0: Top 3 Crop Recommendations**

**🌾 Crop 1: Rice**
**💡 Reason**
• ✅ Loves high humidity and rainfall

### 📊 Yield Analysis
- **Rice**: 85% (Best Match)
- **Soybean**: 74% (Good Match)
- Maize: 62% (Moderate Match)

### Next Steps
- Consult your local mandi for seed prices: 20% (discounted)
";

    #[test]
    fn section_bullets_are_extracted_with_status_text() {
        let entries = extract_yield_data(SECTIONED).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Rice");
        assert_eq!(entries[0].probability, 85);
        assert_eq!(entries[0].status, MatchStatus::BestMatch);
        assert_eq!(entries[2].name, "Maize");
        assert_eq!(entries[2].status, MatchStatus::ModerateMatch);
    }

    #[test]
    fn section_is_delimited_by_next_heading() {
        // The "Next Steps" bullet would parse as a percentage line but
        // sits outside the Yield Analysis section
        let entries = extract_yield_data(SECTIONED).unwrap();
        assert!(entries.iter().all(|e| e.name != "Consult your local mandi for seed prices"));
    }

    #[test]
    fn crop_blocks_are_used_when_section_is_absent() {
        let text = "\
**🌾 Crop 1: Rice**
Well suited to your soil.
Yield Probability: 85%

**🌱 Crop 2: Soybean**
Yield Probability: 74%

**🌽 Crop 3: Maize**
Yield Probability: 65%
";
        let entries = extract_yield_data(text).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Rice");
        assert_eq!(entries[0].status, MatchStatus::BestMatch);
        assert_eq!(entries[1].name, "Soybean");
        assert_eq!(entries[1].status, MatchStatus::GoodMatch);
        assert_eq!(entries[2].name, "Maize");
        assert_eq!(entries[2].status, MatchStatus::ModerateMatch);
    }

    #[test]
    fn entries_are_sorted_by_probability_descending() {
        let text = "\
### Yield Analysis
- Maize: 62% (Moderate Match)
- Rice: 85% (Best Match)
- Soybean: 74% (Good Match)
";
        let entries = extract_yield_data(text).unwrap();
        let probabilities: Vec<u8> = entries.iter().map(|e| e.probability).collect();
        assert_eq!(probabilities, vec![85, 74, 62]);
    }

    #[test]
    fn duplicates_are_kept() {
        let text = "\
### Yield Analysis
- Rice: 85% (Best Match)
- Rice: 71% (Good Match)
";
        let entries = extract_yield_data(text).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let text = "\
### Yield Analysis
- Rice: 85% (Best Match)
- Soybean: yes% (Good Match)
- Wheat: 150% (Best Match)
- Barley: 70% (Excellent Match)
- : 60% (Moderate Match)
- Maize: 62% (Moderate Match)
";
        let entries = extract_yield_data(text).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Maize"]);
    }

    #[test]
    fn unparseable_text_returns_none() {
        assert!(extract_yield_data("Try rotating your crops next season.").is_none());
        assert!(extract_yield_data("").is_none());
    }

    proptest::proptest! {
        /// Extraction never panics, whatever the model emits
        #[test]
        fn never_panics_on_arbitrary_text(text in "\\PC*") {
            let _ = extract_yield_data(&text);
        }

        /// Whatever matched, the result is sorted descending
        #[test]
        fn result_is_always_sorted(probs in proptest::collection::vec(0u8..=100, 1..6)) {
            let text: String = std::iter::once("### Yield Analysis\n".to_string())
                .chain(probs.iter().enumerate().map(|(i, p)| {
                    format!("- Crop{i}: {p}% (Good Match)\n")
                }))
                .collect();
            let entries = extract_yield_data(&text).unwrap();
            proptest::prop_assert!(entries.windows(2).all(|w| w[0].probability >= w[1].probability));
        }
    }

    #[test]
    fn status_bands_are_boundary_inclusive() {
        let text = "\
Crop 1: A
Yield Probability: 80%
Crop 2: B
Yield Probability: 79%
Crop 3: C
Yield Probability: 70%
Crop 4: D
Yield Probability: 69%
";
        let entries = extract_yield_data(text).unwrap();
        let by_name = |n: &str| entries.iter().find(|e| e.name == n).unwrap().status;
        assert_eq!(by_name("A"), MatchStatus::BestMatch);
        assert_eq!(by_name("B"), MatchStatus::GoodMatch);
        assert_eq!(by_name("C"), MatchStatus::GoodMatch);
        assert_eq!(by_name("D"), MatchStatus::ModerateMatch);
    }
}
