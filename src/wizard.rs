//! Wizard step controller
//!
//! [`WizardSession`] owns the current step and the selection state for one
//! user's pass through the wizard. Forward transitions are gated by a
//! validation predicate for the step being left; backward transitions are
//! always allowed.
//!
//! # Step Flow
//!
//! ```text
//! Intro
//!     ↓
//! Flowers      (at least one flower)
//!     ↓
//! Paper        (paper type, plus a color unless the paper is color-incapable)
//!     ↓
//! Adornments   (plush name / card message must not be blank)
//!     ↓
//! Summary      (terminal)
//! ```
//!
//! Sessions own everything they touch, so any number of them can coexist.

use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::{AdornKind, Catalog, PaletteColor};
use crate::error::BouquetError;
use crate::selection::{Adornment, FlowerToggle, SelectionError, SelectionState};
use crate::summary::{SummaryView, derive_summary};

/// Wizard steps in their fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum WizardStep {
    #[default]
    Intro = 0,
    Flowers = 1,
    Paper = 2,
    Adornments = 3,
    /// Terminal step; shows the order summary
    Summary = 4,
}

impl WizardStep {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 5;

    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Get the step number (1-indexed for display).
    pub const fn step_number(self) -> usize {
        self as usize + 1
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Summary)
    }

    /// Returns the next step, or None at Summary
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Intro => Some(Self::Flowers),
            Self::Flowers => Some(Self::Paper),
            Self::Paper => Some(Self::Adornments),
            Self::Adornments => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    /// Returns the previous step, or None at Intro
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Intro => None,
            Self::Flowers => Some(Self::Intro),
            Self::Paper => Some(Self::Flowers),
            Self::Adornments => Some(Self::Paper),
            Self::Summary => Some(Self::Adornments),
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Intro => "Build your bouquet",
            Self::Flowers => "Choose your flowers",
            Self::Paper => "Choose the wrapping paper",
            Self::Adornments => "Add a finishing touch",
            Self::Summary => "Your bouquet",
        }
    }

    pub const fn all_steps() -> &'static [Self] {
        &[
            Self::Intro,
            Self::Flowers,
            Self::Paper,
            Self::Adornments,
            Self::Summary,
        ]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "Intro",
            Self::Flowers => "Flowers",
            Self::Paper => "Paper",
            Self::Adornments => "Adornments",
            Self::Summary => "Summary",
        };
        f.write_str(name)
    }
}

/// Why the current step's predicate rejected an advance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("select at least one flower")]
    NoFlowers,

    #[error("select a paper type")]
    NoPaperType,

    #[error("select a paper color")]
    NoPaperColor,

    /// A plush toy or card is active but its text is blank
    #[error("please provide the requested text ({0})")]
    MissingAdornmentText(AdornKind),
}

/// Errors returned by step transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    /// Summary has no next step
    #[error("cannot advance past the {from} step")]
    FromTerminalStep { from: WizardStep },
}

/// Check the predicate guarding the transition out of `step`.
pub fn validate_step(
    step: WizardStep,
    selection: &SelectionState,
    catalog: &Catalog,
) -> Result<(), ValidationFailure> {
    match step {
        WizardStep::Intro | WizardStep::Summary => Ok(()),
        WizardStep::Flowers => {
            if selection.flowers().is_empty() {
                Err(ValidationFailure::NoFlowers)
            } else {
                Ok(())
            }
        }
        WizardStep::Paper => {
            let paper = selection.paper();
            let Some(kind) = paper.kind.as_deref() else {
                return Err(ValidationFailure::NoPaperType);
            };
            let colorable = catalog.paper(kind).is_none_or(|p| p.colorable);
            if colorable && paper.color.is_none() {
                return Err(ValidationFailure::NoPaperColor);
            }
            Ok(())
        }
        WizardStep::Adornments => match selection.adornment() {
            Some(adornment) if adornment.is_missing_text() => {
                Err(ValidationFailure::MissingAdornmentText(adornment.kind()))
            }
            _ => Ok(()),
        },
    }
}

/// One user's wizard session.
///
/// # Example
///
/// ```
/// use bouquetui::catalog::Catalog;
/// use bouquetui::wizard::{WizardSession, WizardStep};
///
/// let mut session = WizardSession::new(Catalog::default());
/// session.advance().unwrap();
/// assert_eq!(session.current_step(), WizardStep::Flowers);
///
/// // No flowers yet
/// assert!(session.advance().is_err());
///
/// session.toggle_flower("Rose").unwrap();
/// session.advance().unwrap();
/// assert_eq!(session.current_step(), WizardStep::Paper);
/// ```
#[derive(Debug, Clone)]
pub struct WizardSession {
    catalog: Catalog,
    current: WizardStep,
    selection: SelectionState,
    /// Derived on every entry into Summary
    last_summary: Option<SummaryView>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl WizardSession {
    /// Create a session at the Intro step with an empty selection.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: WizardStep::Intro,
            selection: SelectionState::default(),
            last_summary: None,
        }
    }

    /// Rebuild a session from a stored selection, ending at Summary.
    ///
    /// Every choice is replayed through the selection operations and every
    /// step predicate is checked, so a selection that the wizard itself could
    /// not have produced with `catalog` is rejected.
    pub fn from_selection(
        catalog: Catalog,
        selection: &SelectionState,
    ) -> crate::error::Result<Self> {
        let mut session = Self::new(catalog);
        session.advance()?;

        for flower in selection.flowers() {
            if session.toggle_flower(flower)? == FlowerToggle::Removed {
                return Err(BouquetError::config(format!(
                    "flower listed twice in order: {flower}"
                )));
            }
        }
        session.advance()?;

        let paper = selection.paper();
        if let Some(kind) = paper.kind.as_deref() {
            session.choose_paper_type(kind)?;
            // A colorable paper picks up a default color; the order must name one
            if paper.color.is_none() && session.selection().paper().color.is_some() {
                return Err(BouquetError::config(format!("order has no color for {kind}")));
            }
        }
        if let Some(color) = &paper.color {
            session.choose_paper_color(color)?;
        }
        session.advance()?;

        match selection.adornment() {
            None => {}
            Some(Adornment::Ribbons(color)) => {
                session.select_adornment(AdornKind::Ribbons);
                if let Some(color) = color {
                    session.set_ribbon_color(color)?;
                }
            }
            Some(Adornment::NaturalFoliage(leaf)) => {
                session.select_adornment(AdornKind::NaturalFoliage);
                if let Some(leaf) = leaf {
                    session.set_leaf_style(leaf)?;
                }
            }
            Some(Adornment::SmallPlushToy(name)) => session.set_plush_name(name.as_str()),
            Some(Adornment::Card(text)) => session.set_card_text(text.as_str()),
        }
        session.advance()?;

        Ok(session)
    }

    #[inline]
    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    #[inline]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Summary derived when Summary was last entered
    pub fn last_summary(&self) -> Option<&SummaryView> {
        self.last_summary.as_ref()
    }

    /// Derive a fresh summary of the current selection.
    pub fn summary(&self) -> SummaryView {
        derive_summary(&self.selection)
    }

    /// Check the current step's predicate without moving.
    pub fn validate_current(&self) -> Result<(), ValidationFailure> {
        validate_step(self.current, &self.selection, &self.catalog)
    }

    /// Jump to `step` without validation.
    ///
    /// Entering Summary derives the summary; the selection is never touched.
    pub fn go_to(&mut self, step: WizardStep) {
        debug!(from = %self.current, to = %step, "go to step");
        self.current = step;
        if step == WizardStep::Summary {
            self.last_summary = Some(self.summary());
        }
    }

    /// Advance to the next step if the current step's predicate passes.
    ///
    /// # Errors
    ///
    /// - `Validation` if the predicate fails (nothing changes)
    /// - `FromTerminalStep` when called at Summary
    pub fn advance(&mut self) -> Result<WizardStep, StepError> {
        let Some(next) = self.current.next() else {
            return Err(StepError::FromTerminalStep { from: self.current });
        };

        if let Err(failure) = self.validate_current() {
            warn!(step = %self.current, %failure, "advance rejected");
            return Err(failure.into());
        }

        info!(from = %self.current, to = %next, "advancing");
        self.go_to(next);
        Ok(next)
    }

    /// Move back one step. A no-op at Intro.
    pub fn retreat(&mut self) -> WizardStep {
        match self.current.previous() {
            Some(previous) => self.go_to(previous),
            None => debug!("retreat at intro ignored"),
        }
        self.current
    }

    /// Start over: clear every choice and return to Intro.
    pub fn reset(&mut self) {
        info!("starting over");
        self.selection.clear();
        self.last_summary = None;
        self.go_to(WizardStep::Intro);
    }

    // ------------------------------------------------------------------
    // Selection operations
    // ------------------------------------------------------------------

    pub fn toggle_flower(&mut self, name: &str) -> Result<FlowerToggle, SelectionError> {
        self.selection
            .toggle_flower(&self.catalog, name)
            .inspect_err(|e| warn!(flower = name, error = %e, "flower toggle rejected"))
    }

    pub fn choose_paper_type(&mut self, name: &str) -> Result<(), SelectionError> {
        self.selection.choose_paper_type(&self.catalog, name)
    }

    pub fn choose_paper_color(&mut self, color: &PaletteColor) -> Result<(), SelectionError> {
        self.selection.choose_paper_color(&self.catalog, color)
    }

    pub fn select_adornment(&mut self, kind: AdornKind) -> Option<AdornKind> {
        self.selection.select_adornment(kind)
    }

    pub fn set_ribbon_color(&mut self, color: &PaletteColor) -> Result<(), SelectionError> {
        self.selection.set_ribbon_color(&self.catalog, color)
    }

    pub fn set_leaf_style(&mut self, label: &str) -> Result<(), SelectionError> {
        self.selection.set_leaf_style(&self.catalog, label)
    }

    pub fn set_plush_name(&mut self, text: impl Into<String>) {
        self.selection.set_plush_name(text);
    }

    pub fn set_card_text(&mut self, text: impl Into<String>) {
        self.selection.set_card_text(text);
    }
}
