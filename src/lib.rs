//! Bouquet Builder Library
//!
//! Core of the bouquet order wizard: the catalog, the selection state, the
//! step controller and the summary, plus the terminal UI that drives them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod error;
pub mod input;
pub mod selection;
pub mod summary;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use catalog::{AdornKind, Catalog, MAX_FLOWERS, PaletteColor, PaperType};
pub use config_file::{load_order, save_order};
pub use error::BouquetError;
pub use selection::{Adornment, FlowerToggle, PaperChoice, SelectionError, SelectionState};
pub use summary::{SummaryView, derive_summary};
pub use wizard::{StepError, ValidationFailure, WizardSession, WizardStep};
