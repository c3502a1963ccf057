//! Order summary
//!
//! [`derive_summary`] is a pure projection of a [`SelectionState`] into the
//! lines shown on the Summary step. It never caches; every call reflects the
//! state as it is now.

use serde::Serialize;
use std::fmt;

use crate::catalog::PaletteColor;
use crate::selection::{Adornment, SelectionState};

/// Shown in place of an empty flower list or an unset paper type
pub const PLACEHOLDER: &str = "—";

/// Shown when no adornment is selected
pub const NO_ADORNMENT: &str = "None";

/// Quick preview: flower chips and a restatement of the paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub chips: Vec<String>,
    pub paper_label: String,
    pub swatch: Option<PaletteColor>,
}

/// Read-only summary of a bouquet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub flowers_line: String,
    pub paper_line: String,
    /// Paper color to render as a swatch next to the paper line
    pub paper_swatch: Option<PaletteColor>,
    pub adornment_line: String,
    pub preview: Preview,
}

/// Derive the summary for `state`. Total over every reachable state.
pub fn derive_summary(state: &SelectionState) -> SummaryView {
    let flowers = state.flowers();
    let flowers_line = if flowers.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        flowers.join(", ")
    };

    let paper = state.paper();
    let paper_label = paper.kind.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    let paper_line = match &paper.color {
        Some(color) => format!("{paper_label} — color: {}", color.hex),
        None => paper_label.clone(),
    };

    SummaryView {
        flowers_line,
        paper_line,
        paper_swatch: paper.color.clone(),
        adornment_line: adornment_line(state.adornment()),
        preview: Preview {
            chips: flowers.to_vec(),
            paper_label,
            swatch: paper.color.clone(),
        },
    }
}

fn adornment_line(adornment: Option<&Adornment>) -> String {
    let Some(adornment) = adornment else {
        return NO_ADORNMENT.to_string();
    };

    let label = adornment.kind().to_string();
    let detail = match adornment {
        Adornment::Ribbons(Some(color)) => Some(format!("color: {}", color.hex)),
        Adornment::NaturalFoliage(Some(leaf)) => Some(leaf.clone()),
        Adornment::SmallPlushToy(name) if !name.is_empty() => Some(name.clone()),
        Adornment::Card(text) if !text.is_empty() => Some(format!("message: \"{text}\"")),
        _ => None,
    };

    match detail {
        Some(detail) => format!("{label} — {detail}"),
        None => label,
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flowers: {}", self.flowers_line)?;
        writeln!(f, "Paper: {}", self.paper_line)?;
        write!(f, "Adornment: {}", self.adornment_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AdornKind, Catalog};

    #[test]
    fn test_empty_state_uses_placeholders() {
        let summary = derive_summary(&SelectionState::default());
        assert_eq!(summary.flowers_line, PLACEHOLDER);
        assert_eq!(summary.paper_line, PLACEHOLDER);
        assert!(summary.paper_swatch.is_none());
        assert_eq!(summary.adornment_line, NO_ADORNMENT);
        assert!(summary.preview.chips.is_empty());
        assert_eq!(summary.preview.paper_label, PLACEHOLDER);
    }

    #[test]
    fn test_flowers_joined_in_selection_order() {
        let catalog = Catalog::default();
        let mut state = SelectionState::default();
        for name in ["Tulip", "Rose", "Peony"] {
            state.toggle_flower(&catalog, name).expect("add");
        }

        let summary = derive_summary(&state);
        assert_eq!(summary.flowers_line, "Tulip, Rose, Peony");
        assert_eq!(summary.preview.chips, ["Tulip", "Rose", "Peony"]);
    }

    #[test]
    fn test_colored_paper_has_swatch() {
        let catalog = Catalog::default();
        let mut state = SelectionState::default();
        state.choose_paper_type(&catalog, "Korean paper").expect("korean");

        let summary = derive_summary(&state);
        assert_eq!(summary.paper_line, "Korean paper — color: #e1aab0");
        assert_eq!(summary.paper_swatch.as_ref(), catalog.palette.first());
        assert_eq!(summary.preview.swatch, summary.paper_swatch);
    }

    #[test]
    fn test_adornment_details() {
        let catalog = Catalog::default();
        let mut state = SelectionState::default();

        state.select_adornment(AdornKind::Ribbons);
        assert_eq!(derive_summary(&state).adornment_line, "Ribbons");

        state
            .set_ribbon_color(&catalog, &catalog.palette[9])
            .expect("turquoise");
        assert_eq!(derive_summary(&state).adornment_line, "Ribbons — color: #2bb6b6");

        state.set_leaf_style(&catalog, "Eucalyptus").expect("leaf");
        assert_eq!(
            derive_summary(&state).adornment_line,
            "Natural foliage — Eucalyptus"
        );

        state.set_plush_name("Teddy");
        assert_eq!(derive_summary(&state).adornment_line, "Small plush toy — Teddy");

        state.set_card_text("Happy birthday");
        assert_eq!(
            derive_summary(&state).adornment_line,
            "Card — message: \"Happy birthday\""
        );
    }

    #[test]
    fn test_display_renders_three_lines() {
        let catalog = Catalog::default();
        let mut state = SelectionState::default();
        state.toggle_flower(&catalog, "Rose").expect("rose");
        state.choose_paper_type(&catalog, "Kraft").expect("kraft");

        let text = derive_summary(&state).to_string();
        assert_eq!(text, "Flowers: Rose\nPaper: Kraft\nAdornment: None");
    }

    #[test]
    fn test_summary_is_recomputed() {
        let catalog = Catalog::default();
        let mut state = SelectionState::default();
        let before = derive_summary(&state);
        state.toggle_flower(&catalog, "Lily").expect("lily");
        let after = derive_summary(&state);
        assert_ne!(before, after);
    }
}
