//! Selection state
//!
//! Holds the user's in-progress choices and the operations that mutate them.
//! Every mutator either applies completely or leaves the state untouched and
//! returns a [`SelectionError`].
//!
//! # Invariants
//!
//! - At most [`MAX_FLOWERS`] flowers, no duplicates, kept in selection order
//! - A color-incapable paper never carries a color
//! - At most one adornment kind is active; its payload lives inside the
//!   [`Adornment`] variant, so switching kinds cannot leave stale data behind

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::{AdornKind, Catalog, MAX_FLOWERS, PaletteColor};

/// Errors raised by selection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A sixth distinct flower was requested
    #[error("maximum {max} distinct flowers per bouquet")]
    CapacityExceeded { max: usize },

    /// A paper color was chosen before any paper type
    #[error("select a paper type before choosing its color")]
    PaperTypeNotChosen,

    /// A color was chosen for a paper that has none
    #[error("{paper} does not come in colors")]
    PaperNotColorable { paper: String },

    #[error("unknown flower: {0}")]
    UnknownFlower(String),

    #[error("unknown paper type: {0}")]
    UnknownPaper(String),

    #[error("color is not part of the palette: {0}")]
    UnknownColor(String),

    #[error("unknown leaf style: {0}")]
    UnknownLeafStyle(String),
}

/// Outcome of [`SelectionState::toggle_flower`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerToggle {
    Added,
    Removed,
}

/// Chosen wrapping paper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperChoice {
    pub kind: Option<String>,
    pub color: Option<PaletteColor>,
}

/// The active adornment together with its payload.
///
/// Text payloads start empty and are filled in as the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "extra", rename_all = "snake_case")]
pub enum Adornment {
    Ribbons(Option<PaletteColor>),
    NaturalFoliage(Option<String>),
    SmallPlushToy(String),
    Card(String),
}

impl Adornment {
    /// A freshly selected adornment with no payload yet
    pub fn empty(kind: AdornKind) -> Self {
        match kind {
            AdornKind::Ribbons => Self::Ribbons(None),
            AdornKind::NaturalFoliage => Self::NaturalFoliage(None),
            AdornKind::SmallPlushToy => Self::SmallPlushToy(String::new()),
            AdornKind::Card => Self::Card(String::new()),
        }
    }

    pub fn kind(&self) -> AdornKind {
        match self {
            Self::Ribbons(_) => AdornKind::Ribbons,
            Self::NaturalFoliage(_) => AdornKind::NaturalFoliage,
            Self::SmallPlushToy(_) => AdornKind::SmallPlushToy,
            Self::Card(_) => AdornKind::Card,
        }
    }

    /// Free text for plush toys and cards
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::SmallPlushToy(text) | Self::Card(text) => Some(text),
            _ => None,
        }
    }

    /// True for text-carrying kinds whose text is empty or whitespace
    pub fn is_missing_text(&self) -> bool {
        self.text().is_some_and(|t| t.trim().is_empty())
    }
}

/// The user's in-progress bouquet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    flowers: Vec<String>,
    paper: PaperChoice,
    adornment: Option<Adornment>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flowers(&self) -> &[String] {
        &self.flowers
    }

    pub fn paper(&self) -> &PaperChoice {
        &self.paper
    }

    pub fn adornment(&self) -> Option<&Adornment> {
        self.adornment.as_ref()
    }

    pub fn adornment_kind(&self) -> Option<AdornKind> {
        self.adornment.as_ref().map(Adornment::kind)
    }

    pub fn is_flower_selected(&self, name: &str) -> bool {
        self.flowers.iter().any(|f| f == name)
    }

    /// True when nothing has been chosen yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Restore the empty defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Add `name` to the bouquet, or remove it if already present.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` when adding a sixth distinct flower
    /// - `UnknownFlower` when `name` is not in the catalog
    pub fn toggle_flower(
        &mut self,
        catalog: &Catalog,
        name: &str,
    ) -> Result<FlowerToggle, SelectionError> {
        if let Some(idx) = self.flowers.iter().position(|f| f == name) {
            self.flowers.remove(idx);
            debug!(flower = name, "flower removed");
            return Ok(FlowerToggle::Removed);
        }

        if !catalog.has_flower(name) {
            return Err(SelectionError::UnknownFlower(name.to_string()));
        }
        if self.flowers.len() >= MAX_FLOWERS {
            return Err(SelectionError::CapacityExceeded { max: MAX_FLOWERS });
        }

        self.flowers.push(name.to_string());
        debug!(flower = name, count = self.flowers.len(), "flower added");
        Ok(FlowerToggle::Added)
    }

    /// Choose the wrapping paper type.
    ///
    /// Color policy: a color-incapable paper clears the color. A colorable
    /// paper keeps its color when re-selected, and otherwise defaults to the
    /// first palette entry. Only one `(type, color)` pair is remembered, so
    /// switching between two colorable papers re-defaults each time.
    pub fn choose_paper_type(&mut self, catalog: &Catalog, name: &str) -> Result<(), SelectionError> {
        let paper = catalog
            .paper(name)
            .ok_or_else(|| SelectionError::UnknownPaper(name.to_string()))?;

        if !paper.colorable {
            self.paper.color = None;
        } else if self.paper.color.is_none() || self.paper.kind.as_deref() != Some(name) {
            self.paper.color = catalog.default_color().cloned();
        }
        self.paper.kind = Some(paper.name.clone());

        debug!(paper = name, color = ?self.paper.color, "paper type chosen");
        Ok(())
    }

    /// Choose the color of the already chosen paper.
    ///
    /// # Errors
    ///
    /// - `PaperTypeNotChosen` if no paper type is set
    /// - `PaperNotColorable` if the chosen paper has no colors
    /// - `UnknownColor` if `color` is not a palette entry
    pub fn choose_paper_color(
        &mut self,
        catalog: &Catalog,
        color: &PaletteColor,
    ) -> Result<(), SelectionError> {
        let kind = self
            .paper
            .kind
            .as_deref()
            .ok_or(SelectionError::PaperTypeNotChosen)?;
        let paper = catalog
            .paper(kind)
            .ok_or_else(|| SelectionError::UnknownPaper(kind.to_string()))?;
        if !paper.colorable {
            return Err(SelectionError::PaperNotColorable {
                paper: paper.name.clone(),
            });
        }
        if !catalog.has_color(color) {
            return Err(SelectionError::UnknownColor(color.name.clone()));
        }

        self.paper.color = Some(color.clone());
        debug!(paper = kind, color = %color.hex, "paper color chosen");
        Ok(())
    }

    /// Toggle an adornment kind.
    ///
    /// Selecting the active kind again deselects it; selecting another kind
    /// replaces the current one with an empty payload. Returns the kind that
    /// is active afterwards.
    pub fn select_adornment(&mut self, kind: AdornKind) -> Option<AdornKind> {
        if self.adornment_kind() == Some(kind) {
            self.adornment = None;
        } else {
            self.adornment = Some(Adornment::empty(kind));
        }
        debug!(active = ?self.adornment_kind(), "adornment selection changed");
        self.adornment_kind()
    }

    /// Set the ribbon color. Choosing a ribbon color always activates ribbons.
    pub fn set_ribbon_color(
        &mut self,
        catalog: &Catalog,
        color: &PaletteColor,
    ) -> Result<(), SelectionError> {
        if !catalog.has_color(color) {
            return Err(SelectionError::UnknownColor(color.name.clone()));
        }
        self.adornment = Some(Adornment::Ribbons(Some(color.clone())));
        Ok(())
    }

    /// Set the foliage leaf style, activating natural foliage.
    pub fn set_leaf_style(&mut self, catalog: &Catalog, label: &str) -> Result<(), SelectionError> {
        if !catalog.has_leaf_style(label) {
            return Err(SelectionError::UnknownLeafStyle(label.to_string()));
        }
        self.adornment = Some(Adornment::NaturalFoliage(Some(label.to_string())));
        Ok(())
    }

    /// Set the plush toy name. Called on every edit; the last write wins.
    pub fn set_plush_name(&mut self, text: impl Into<String>) {
        self.adornment = Some(Adornment::SmallPlushToy(text.into()));
    }

    /// Set the card message. Called on every edit; the last write wins.
    pub fn set_card_text(&mut self, text: impl Into<String>) {
        self.adornment = Some(Adornment::Card(text.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::default()
    }

    #[test]
    fn test_toggle_flower_adds_then_removes() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        assert_eq!(state.toggle_flower(&catalog, "Rose"), Ok(FlowerToggle::Added));
        assert_eq!(state.flowers(), ["Rose"]);
        assert_eq!(state.toggle_flower(&catalog, "Rose"), Ok(FlowerToggle::Removed));
        assert!(state.flowers().is_empty());
    }

    #[test]
    fn test_toggle_flower_removal_preserves_order() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        for name in ["Rose", "Tulip", "Lily", "Daisy"] {
            state.toggle_flower(&catalog, name).expect("add");
        }

        state.toggle_flower(&catalog, "Tulip").expect("remove");
        assert_eq!(state.flowers(), ["Rose", "Lily", "Daisy"]);
    }

    #[test]
    fn test_toggle_flower_capacity() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        for name in ["Rose", "Tulip", "Sunflower", "Lily", "Daisy"] {
            state.toggle_flower(&catalog, name).expect("add");
        }

        let err = state.toggle_flower(&catalog, "Peony").unwrap_err();
        assert_eq!(err, SelectionError::CapacityExceeded { max: 5 });
        assert_eq!(state.flowers().len(), 5);
        assert!(!state.is_flower_selected("Peony"));

        // Removing is still allowed at capacity
        assert_eq!(state.toggle_flower(&catalog, "Lily"), Ok(FlowerToggle::Removed));
    }

    #[test]
    fn test_toggle_unknown_flower_rejected() {
        let mut state = SelectionState::new();
        let err = state.toggle_flower(&catalog(), "Cactus").unwrap_err();
        assert!(matches!(err, SelectionError::UnknownFlower(_)));
        assert!(state.is_empty());
    }

    #[test]
    fn test_kraft_has_no_color() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        state.choose_paper_type(&catalog, "Tissue paper").expect("tissue");
        assert!(state.paper().color.is_some());

        state.choose_paper_type(&catalog, "Kraft").expect("kraft");
        assert_eq!(state.paper().kind.as_deref(), Some("Kraft"));
        assert!(state.paper().color.is_none());
    }

    #[test]
    fn test_colorable_paper_defaults_to_first_palette_color() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        state.choose_paper_type(&catalog, "Korean paper").expect("korean");
        assert_eq!(state.paper().color.as_ref(), catalog.palette.first());
    }

    #[test]
    fn test_reselecting_same_paper_keeps_color() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        let navy = catalog.color_by_name("Navy blue").expect("navy").clone();

        state.choose_paper_type(&catalog, "Korean paper").expect("korean");
        state.choose_paper_color(&catalog, &navy).expect("navy");
        state.choose_paper_type(&catalog, "Korean paper").expect("korean again");

        assert_eq!(state.paper().color.as_ref(), Some(&navy));
    }

    #[test]
    fn test_switching_colorable_paper_redefaults_color() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        let navy = catalog.color_by_name("Navy blue").expect("navy").clone();

        state.choose_paper_type(&catalog, "Korean paper").expect("korean");
        state.choose_paper_color(&catalog, &navy).expect("navy");
        state.choose_paper_type(&catalog, "Cellophane").expect("cellophane");
        assert_eq!(state.paper().color.as_ref(), catalog.palette.first());

        // No per-type memory: going back does not restore navy
        state.choose_paper_type(&catalog, "Korean paper").expect("korean");
        assert_eq!(state.paper().color.as_ref(), catalog.palette.first());
    }

    #[test]
    fn test_paper_color_requires_type() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        let white = catalog.palette[1].clone();

        let err = state.choose_paper_color(&catalog, &white).unwrap_err();
        assert_eq!(err, SelectionError::PaperTypeNotChosen);
        assert!(state.is_empty());
    }

    #[test]
    fn test_kraft_rejects_color() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        let white = catalog.palette[1].clone();

        state.choose_paper_type(&catalog, "Kraft").expect("kraft");
        let err = state.choose_paper_color(&catalog, &white).unwrap_err();
        assert!(matches!(err, SelectionError::PaperNotColorable { .. }));
        assert!(state.paper().color.is_none());
    }

    #[test]
    fn test_paper_color_outside_palette_rejected() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.choose_paper_type(&catalog, "Cellophane").expect("cellophane");

        let bogus = PaletteColor::new("Gold", "#ffd700");
        let err = state.choose_paper_color(&catalog, &bogus).unwrap_err();
        assert!(matches!(err, SelectionError::UnknownColor(_)));
        assert_eq!(state.paper().color.as_ref(), catalog.palette.first());
    }

    #[test]
    fn test_select_adornment_twice_deselects() {
        let mut state = SelectionState::new();
        assert_eq!(state.select_adornment(AdornKind::Card), Some(AdornKind::Card));
        assert_eq!(state.select_adornment(AdornKind::Card), None);
        assert!(state.adornment().is_none());
    }

    #[test]
    fn test_switching_adornment_discards_payload() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        let pink = catalog.palette[0].clone();

        state.select_adornment(AdornKind::Ribbons);
        state.set_ribbon_color(&catalog, &pink).expect("ribbon color");
        state.select_adornment(AdornKind::NaturalFoliage);

        assert_eq!(state.adornment(), Some(&Adornment::NaturalFoliage(None)));
    }

    #[test]
    fn test_setters_force_their_kind() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        state.set_plush_name("Teddy");
        assert_eq!(state.adornment_kind(), Some(AdornKind::SmallPlushToy));

        state.set_leaf_style(&catalog, "Ruscus").expect("leaf");
        assert_eq!(
            state.adornment(),
            Some(&Adornment::NaturalFoliage(Some("Ruscus".to_string())))
        );

        state
            .set_ribbon_color(&catalog, &catalog.palette[3])
            .expect("ribbon");
        assert_eq!(state.adornment_kind(), Some(AdornKind::Ribbons));

        state.set_card_text("Happy birthday");
        assert_eq!(state.adornment().and_then(Adornment::text), Some("Happy birthday"));
    }

    #[test]
    fn test_unknown_leaf_style_rejected() {
        let mut state = SelectionState::new();
        state.select_adornment(AdornKind::Ribbons);
        let err = state.set_leaf_style(&catalog(), "Palm").unwrap_err();
        assert!(matches!(err, SelectionError::UnknownLeafStyle(_)));
        assert_eq!(state.adornment(), Some(&Adornment::Ribbons(None)));
    }

    #[test]
    fn test_text_last_write_wins() {
        let mut state = SelectionState::new();
        for partial in ["T", "Te", "Ted", "Tedd", "Teddy"] {
            state.set_plush_name(partial);
        }
        assert_eq!(state.adornment().and_then(Adornment::text), Some("Teddy"));
    }

    #[test]
    fn test_missing_text_detection() {
        assert!(Adornment::SmallPlushToy("   ".to_string()).is_missing_text());
        assert!(Adornment::Card(String::new()).is_missing_text());
        assert!(!Adornment::Card("Hi".to_string()).is_missing_text());
        assert!(!Adornment::Ribbons(None).is_missing_text());
    }

    #[test]
    fn test_clear_restores_defaults() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.toggle_flower(&catalog, "Rose").expect("rose");
        state.choose_paper_type(&catalog, "Tissue paper").expect("tissue");
        state.set_card_text("Hello");

        state.clear();
        assert!(state.is_empty());
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_serialized_shape() {
        let catalog = catalog();
        let mut state = SelectionState::new();
        state.toggle_flower(&catalog, "Rose").expect("rose");
        state.choose_paper_type(&catalog, "Kraft").expect("kraft");
        state.set_card_text("Hi");

        let value = serde_json::to_value(&state).expect("serialize");
        assert_eq!(value["flowers"][0], "Rose");
        assert_eq!(value["paper"]["kind"], "Kraft");
        assert!(value["paper"]["color"].is_null());
        assert_eq!(value["adornment"]["kind"], "card");
        assert_eq!(value["adornment"]["extra"], "Hi");
    }
}
