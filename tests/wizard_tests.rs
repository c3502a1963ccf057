//! Tests for the wizard session
//!
//! These tests drive a `WizardSession` through whole orders:
//! - Step transitions and their validation gates
//! - Flower capacity
//! - Adornment text requirements
//! - Summary on entering the last step
//! - Rebuilding a session from a stored selection

use bouquetui::catalog::{AdornKind, Catalog, PaletteColor};
use bouquetui::error::BouquetError;
use bouquetui::selection::{Adornment, SelectionError, SelectionState};
use bouquetui::summary::NO_ADORNMENT;
use bouquetui::wizard::{StepError, ValidationFailure, WizardSession, WizardStep};

fn session_at(step: WizardStep) -> WizardSession {
    let mut session = WizardSession::default();
    session.go_to(step);
    session
}

// =============================================================================
// Full Order Scenarios
// =============================================================================

#[test]
fn test_rose_in_kraft_without_adornment() {
    let mut session = WizardSession::default();
    assert_eq!(session.current_step(), WizardStep::Intro);

    assert_eq!(session.advance().unwrap(), WizardStep::Flowers);
    session.toggle_flower("Rose").unwrap();
    assert_eq!(session.selection().flowers(), ["Rose".to_string()]);

    assert_eq!(session.advance().unwrap(), WizardStep::Paper);
    session.choose_paper_type("Kraft").unwrap();
    assert_eq!(session.selection().paper().kind.as_deref(), Some("Kraft"));
    assert!(session.selection().paper().color.is_none());

    assert_eq!(session.advance().unwrap(), WizardStep::Adornments);
    assert_eq!(session.advance().unwrap(), WizardStep::Summary);

    let summary = session.last_summary().expect("summary derived on entry");
    assert_eq!(summary.flowers_line, "Rose");
    assert_eq!(summary.paper_line, "Kraft");
    assert!(summary.paper_swatch.is_none());
    assert_eq!(summary.adornment_line, NO_ADORNMENT);
}

#[test]
fn test_full_order_with_card() {
    let mut session = WizardSession::default();
    session.advance().unwrap();
    session.toggle_flower("Tulip").unwrap();
    session.toggle_flower("Peony").unwrap();
    session.advance().unwrap();
    session.choose_paper_type("Korean paper").unwrap();
    let lilac = session.catalog().color_by_name("Soft lilac").cloned().unwrap();
    session.choose_paper_color(&lilac).unwrap();
    session.advance().unwrap();
    session.select_adornment(AdornKind::Card);
    session.set_card_text("Happy birthday");
    session.advance().unwrap();

    let summary = session.summary();
    assert_eq!(summary.flowers_line, "Tulip, Peony");
    assert_eq!(summary.paper_line, format!("Korean paper — color: {}", lilac.hex));
    assert_eq!(summary.paper_swatch, Some(lilac));
    assert_eq!(summary.adornment_line, "Card — message: \"Happy birthday\"");
}

// =============================================================================
// Validation Gates
// =============================================================================

#[test]
fn test_cannot_leave_flowers_empty() {
    let mut session = session_at(WizardStep::Flowers);
    let err = session.advance().unwrap_err();
    assert_eq!(err, StepError::Validation(ValidationFailure::NoFlowers));
    assert_eq!(session.current_step(), WizardStep::Flowers);
}

#[test]
fn test_cannot_leave_paper_without_type() {
    let mut session = session_at(WizardStep::Paper);
    let err = session.advance().unwrap_err();
    assert_eq!(err, StepError::Validation(ValidationFailure::NoPaperType));
    assert_eq!(session.current_step(), WizardStep::Paper);
}

#[test]
fn test_sixth_flower_is_rejected() {
    let mut session = session_at(WizardStep::Flowers);
    let names = ["Rose", "Tulip", "Sunflower", "Lily", "Daisy"];
    for name in names {
        session.toggle_flower(name).unwrap();
    }

    let err = session.toggle_flower("Orchid").unwrap_err();
    assert_eq!(err, SelectionError::CapacityExceeded { max: 5 });
    assert_eq!(session.selection().flowers().len(), 5);
    assert!(!session.selection().is_flower_selected("Orchid"));
}

#[test]
fn test_plush_toy_needs_a_name() {
    let mut session = session_at(WizardStep::Adornments);
    session.select_adornment(AdornKind::SmallPlushToy);

    let err = session.advance().unwrap_err();
    assert_eq!(
        err,
        StepError::Validation(ValidationFailure::MissingAdornmentText(AdornKind::SmallPlushToy))
    );
    assert_eq!(session.current_step(), WizardStep::Adornments);

    session.set_plush_name("Teddy");
    assert_eq!(session.advance().unwrap(), WizardStep::Summary);
}

#[test]
fn test_whitespace_card_is_missing_text() {
    let mut session = session_at(WizardStep::Adornments);
    session.select_adornment(AdornKind::Card);
    session.set_card_text("   ");
    assert!(session.advance().is_err());
}

#[test]
fn test_advance_from_summary_is_an_error() {
    let mut session = session_at(WizardStep::Summary);
    let err = session.advance().unwrap_err();
    assert!(matches!(err, StepError::FromTerminalStep { .. }));
    assert_eq!(session.current_step(), WizardStep::Summary);
}

#[test]
fn test_retreat_keeps_selection() {
    let mut session = session_at(WizardStep::Flowers);
    session.toggle_flower("Daisy").unwrap();
    session.advance().unwrap();

    assert_eq!(session.retreat(), WizardStep::Flowers);
    assert!(session.selection().is_flower_selected("Daisy"));
    assert_eq!(session.retreat(), WizardStep::Intro);
    assert_eq!(session.retreat(), WizardStep::Intro);
}

// =============================================================================
// Adornment Exclusivity
// =============================================================================

#[test]
fn test_switching_adornment_drops_ribbon_color() {
    let mut session = session_at(WizardStep::Adornments);
    let color = session.catalog().palette[3].clone();
    session.set_ribbon_color(&color).unwrap();
    session.select_adornment(AdornKind::NaturalFoliage);

    assert_eq!(
        session.selection().adornment(),
        Some(&Adornment::NaturalFoliage(None))
    );
}

#[test]
fn test_selecting_same_adornment_twice_clears_it() {
    let mut session = session_at(WizardStep::Adornments);
    session.select_adornment(AdornKind::Ribbons);
    session.select_adornment(AdornKind::Ribbons);
    assert!(session.selection().adornment().is_none());
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_from_summary() {
    let mut session = WizardSession::default();
    session.advance().unwrap();
    session.toggle_flower("Lily").unwrap();
    session.advance().unwrap();
    session.choose_paper_type("Tissue paper").unwrap();
    session.advance().unwrap();
    session.set_plush_name("Bun");
    session.advance().unwrap();

    session.reset();
    assert_eq!(session.current_step(), WizardStep::Intro);
    assert_eq!(session.selection(), &SelectionState::default());
    assert!(session.last_summary().is_none());
}

// =============================================================================
// Rebuilding From a Stored Selection
// =============================================================================

fn finished_session() -> WizardSession {
    let mut session = WizardSession::default();
    session.advance().unwrap();
    session.toggle_flower("Hydrangea").unwrap();
    session.toggle_flower("Baby's breath").unwrap();
    session.advance().unwrap();
    session.choose_paper_type("Cellophane").unwrap();
    session.advance().unwrap();
    session.set_leaf_style("Ruscus").unwrap();
    session.advance().unwrap();
    session
}

#[test]
fn test_from_selection_reaches_summary() {
    let original = finished_session();
    let rebuilt =
        WizardSession::from_selection(Catalog::default(), original.selection()).unwrap();

    assert_eq!(rebuilt.current_step(), WizardStep::Summary);
    assert_eq!(rebuilt.selection(), original.selection());
    assert_eq!(rebuilt.last_summary(), original.last_summary());
}

#[test]
fn test_from_selection_rejects_unknown_flower() {
    let original = finished_session();
    let mut catalog = Catalog::default();
    catalog.flowers.retain(|f| f != "Hydrangea");

    let err = WizardSession::from_selection(catalog, original.selection()).unwrap_err();
    assert!(matches!(
        err,
        BouquetError::Selection(SelectionError::UnknownFlower(_))
    ));
}

#[test]
fn test_from_selection_rejects_incomplete_order() {
    let mut session = session_at(WizardStep::Flowers);
    session.toggle_flower("Rose").unwrap();

    // No paper chosen, so the Paper gate fails on replay
    let err = WizardSession::from_selection(Catalog::default(), session.selection()).unwrap_err();
    assert!(matches!(
        err,
        BouquetError::Step(StepError::Validation(ValidationFailure::NoPaperType))
    ));
}

#[test]
fn test_from_selection_rejects_color_not_in_palette() {
    let mut session = session_at(WizardStep::Paper);
    session.choose_paper_type("Korean paper").unwrap();
    let mut json = serde_json::to_value(session.selection()).unwrap();
    json["paper"]["color"] = serde_json::to_value(PaletteColor::new("Neon", "#00ff00")).unwrap();
    json["flowers"] = serde_json::json!(["Rose"]);

    let selection: SelectionState = serde_json::from_value(json).unwrap();
    let err = WizardSession::from_selection(Catalog::default(), &selection).unwrap_err();
    assert!(matches!(
        err,
        BouquetError::Selection(SelectionError::UnknownColor(_))
    ));
}

#[test]
fn test_from_selection_rejects_colorable_paper_without_color() {
    let mut session = session_at(WizardStep::Paper);
    session.choose_paper_type("Korean paper").unwrap();
    let mut json = serde_json::to_value(session.selection()).unwrap();
    json["paper"]["color"] = serde_json::Value::Null;
    json["flowers"] = serde_json::json!(["Rose"]);

    let selection: SelectionState = serde_json::from_value(json).unwrap();
    let err = WizardSession::from_selection(Catalog::default(), &selection).unwrap_err();
    assert!(matches!(err, BouquetError::Config(_)));
    assert!(err.to_string().contains("Korean paper"));
}
