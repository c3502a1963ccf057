//! Catalog of selectable items
//!
//! The catalog is static configuration data: flower names, paper types with
//! their color capability, adornment kinds, leaf styles and the shared color
//! palette. The wizard only ever reads it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Maximum number of distinct flowers in one bouquet
pub const MAX_FLOWERS: usize = 5;

/// Decorative add-on category. At most one is active per bouquet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum AdornKind {
    #[strum(to_string = "Ribbons", serialize = "ribbons")]
    Ribbons,
    #[strum(to_string = "Natural foliage", serialize = "natural_foliage")]
    NaturalFoliage,
    #[strum(to_string = "Small plush toy", serialize = "small_plush_toy")]
    SmallPlushToy,
    #[strum(to_string = "Card", serialize = "card")]
    Card,
}

impl AdornKind {
    /// Whether this kind carries free text that must be non-blank to proceed
    pub fn requires_text(&self) -> bool {
        matches!(self, Self::SmallPlushToy | Self::Card)
    }

    /// Returns all kinds in display order
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// A named palette entry.
///
/// Hex values are not unique across the palette, so a color reference keeps
/// the name alongside the hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub hex: String,
}

impl PaletteColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Parse `#rrggbb` into its RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex(&self.hex)
    }
}

/// Parse a `#rrggbb` color string.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// A wrapping paper type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperType {
    pub name: String,
    /// Color-incapable papers (kraft) never carry a color
    pub colorable: bool,
}

impl PaperType {
    pub fn new(name: impl Into<String>, colorable: bool) -> Self {
        Self {
            name: name.into(),
            colorable,
        }
    }
}

/// Everything the wizard lets the user choose from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub flowers: Vec<String>,
    pub papers: Vec<PaperType>,
    pub leaf_styles: Vec<String>,
    pub palette: Vec<PaletteColor>,
}

impl Default for Catalog {
    fn default() -> Self {
        let flowers = [
            "Rose",
            "Tulip",
            "Sunflower",
            "Lily",
            "Daisy",
            "Carnation",
            "Hydrangea",
            "Peony",
            "Orchid",
            "Baby's breath",
        ];

        Self {
            flowers: flowers.iter().map(|f| f.to_string()).collect(),
            papers: vec![
                PaperType::new("Kraft", false),
                PaperType::new("Korean paper", true),
                PaperType::new("Tissue paper", true),
                PaperType::new("Cellophane", true),
            ],
            leaf_styles: vec![
                "Eucalyptus".to_string(),
                "Ruscus".to_string(),
                "Leatherleaf fern".to_string(),
            ],
            palette: vec![
                PaletteColor::new("Pastel pink", "#e1aab0"),
                PaletteColor::new("White", "#ffffff"),
                PaletteColor::new("Soft lilac", "#d7c3e6"),
                PaletteColor::new("Peach", "#ffd1bf"),
                PaletteColor::new("Black", "#111111"),
                PaletteColor::new("Green", "#275c42"),
                PaletteColor::new("Beige", "#f0e1c8"),
                // Same hex as plain black; the gold trim is a presentation detail
                PaletteColor::new("Black with gold", "#111111"),
                PaletteColor::new("Navy blue", "#0b2340"),
                PaletteColor::new("Turquoise", "#2bb6b6"),
                PaletteColor::new("Bright orange-yellow", "#ff9a00"),
                PaletteColor::new("Fuchsia", "#ff2d95"),
            ],
        }
    }
}

impl Catalog {
    pub fn has_flower(&self, name: &str) -> bool {
        self.flowers.iter().any(|f| f == name)
    }

    pub fn paper(&self, name: &str) -> Option<&PaperType> {
        self.papers.iter().find(|p| p.name == name)
    }

    pub fn has_leaf_style(&self, label: &str) -> bool {
        self.leaf_styles.iter().any(|l| l == label)
    }

    /// True if `color` is an entry of the palette (name and hex both match)
    pub fn has_color(&self, color: &PaletteColor) -> bool {
        self.palette.contains(color)
    }

    /// Color preselected when a colorable paper is chosen
    pub fn default_color(&self) -> Option<&PaletteColor> {
        self.palette.first()
    }

    pub fn color_by_name(&self, name: &str) -> Option<&PaletteColor> {
        self.palette.iter().find(|c| c.name == name)
    }

    /// Position of `color` in the palette
    pub fn color_index(&self, color: &PaletteColor) -> Option<usize> {
        self.palette.iter().position(|c| c == color)
    }
}
