//! CSS grid container with named template areas.
//!
//! The template-area matrix is always `rows × columns`. Resizing keeps every
//! existing cell name that still fits; new cells are named after their
//! position: cells of a new column `c` are `area<c>`, cells of a new row `r`
//! are `area<r>` (both 1-based).

use forge_color::format_number;
use serde::{Deserialize, Serialize};

use crate::keyword::keyword_enum;
use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".css-grid";

/// Smallest and largest track counts.
pub const MIN_TRACKS: usize = 1;
pub const MAX_TRACKS: usize = 6;

keyword_enum! {
    /// `justify-items` / `align-items` for grid containers.
    #[derive(Default)]
    pub enum ItemAlignment("item alignment") {
        Start => "start",
        End => "end",
        Center => "center",
        #[default]
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// `justify-content` / `align-content` for grid containers.
    #[derive(Default)]
    pub enum ContentDistribution("content distribution") {
        Start => "start",
        End => "end",
        Center => "center",
        #[default]
        Stretch => "stretch",
        SpaceAround => "space-around",
        SpaceBetween => "space-between",
        SpaceEvenly => "space-evenly",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssGridConfig {
    pub columns: usize,
    pub rows: usize,
    /// px.
    pub column_gap: f64,
    /// px.
    pub row_gap: f64,
    #[serde(rename = "gridTemplateAreas")]
    pub template_areas: Vec<Vec<String>>,
    pub justify_items: ItemAlignment,
    pub align_items: ItemAlignment,
    pub justify_content: ContentDistribution,
    pub align_content: ContentDistribution,
}

impl Default for CssGridConfig {
    fn default() -> Self {
        let row = |names: [&str; 3]| names.map(String::from).to_vec();
        Self {
            columns: 3,
            rows: 3,
            column_gap: 16.0,
            row_gap: 16.0,
            template_areas: vec![
                row(["header", "header", "header"]),
                row(["sidebar", "main", "main"]),
                row(["footer", "footer", "footer"]),
            ],
            justify_items: ItemAlignment::Stretch,
            align_items: ItemAlignment::Stretch,
            justify_content: ContentDistribution::Stretch,
            align_content: ContentDistribution::Stretch,
        }
    }
}

/// Partial update for [`CssGridConfig`].
///
/// `template_areas` replaces the whole matrix; it is then reshaped to the
/// (possibly also patched) track counts. A matrix with any invalid area
/// name is refused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssGridPatch {
    pub columns: Option<usize>,
    pub rows: Option<usize>,
    pub column_gap: Option<f64>,
    pub row_gap: Option<f64>,
    #[serde(rename = "gridTemplateAreas")]
    pub template_areas: Option<Vec<Vec<String>>>,
    pub justify_items: Option<ItemAlignment>,
    pub align_items: Option<ItemAlignment>,
    pub justify_content: Option<ContentDistribution>,
    pub align_content: Option<ContentDistribution>,
}

/// Whether `name` can appear in `grid-template-areas`: a single token with
/// no whitespace or quotes.
#[must_use]
pub fn is_valid_area_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'')
}

impl CssGridConfig {
    /// Merge `patch`, then restore the `rows × columns` matrix shape.
    pub fn apply(&mut self, patch: CssGridPatch) {
        merge::non_negative(&mut self.column_gap, patch.column_gap);
        merge::non_negative(&mut self.row_gap, patch.row_gap);
        merge::plain(&mut self.justify_items, patch.justify_items);
        merge::plain(&mut self.align_items, patch.align_items);
        merge::plain(&mut self.justify_content, patch.justify_content);
        merge::plain(&mut self.align_content, patch.align_content);
        if let Some(areas) = patch.template_areas {
            self.replace_areas(areas);
        }
        let columns = patch.columns.unwrap_or(self.columns);
        let rows = patch.rows.unwrap_or(self.rows);
        self.resize(rows, columns);
    }

    fn replace_areas(&mut self, areas: Vec<Vec<String>>) {
        let areas: Vec<Vec<String>> = areas
            .into_iter()
            .map(|row| row.iter().map(|name| name.trim().to_string()).collect())
            .collect();
        match areas.iter().flatten().find(|name| !is_valid_area_name(name)) {
            Some(bad) => tracing::warn!(name = %bad, "refusing template areas with an invalid name"),
            None => self.template_areas = areas,
        }
    }

    /// Reshape to `rows × columns` (each clamped to 1–6), keeping existing
    /// names and padding new cells.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        let rows = rows.clamp(MIN_TRACKS, MAX_TRACKS);
        let columns = columns.clamp(MIN_TRACKS, MAX_TRACKS);

        self.template_areas.truncate(rows);
        for row in &mut self.template_areas {
            row.truncate(columns);
            for c in row.len()..columns {
                row.push(format!("area{}", c + 1));
            }
        }
        for r in self.template_areas.len()..rows {
            self.template_areas.push(vec![format!("area{}", r + 1); columns]);
        }

        self.rows = rows;
        self.columns = columns;
    }

    /// Name the cell at (`row`, `column`), both 0-based. Returns `false` if
    /// the cell is outside the grid or the name is not a valid area name.
    pub fn set_area(&mut self, row: usize, column: usize, name: &str) -> bool {
        let name = name.trim();
        if !is_valid_area_name(name) {
            return false;
        }
        match self.template_areas.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = name.to_string();
                true
            }
            None => false,
        }
    }
}

/// `grid-template-areas` value: one quoted row per line.
#[must_use]
pub fn template_areas_value(config: &CssGridConfig) -> String {
    config
        .template_areas
        .iter()
        .map(|row| format!("\"{}\"", row.join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn css_grid_css(config: &CssGridConfig) -> RuleBlock {
    RuleBlock::new(SELECTOR)
        .with("display", "grid")
        .with("grid-template-columns", format!("repeat({}, 1fr)", config.columns))
        .with("grid-template-rows", format!("repeat({}, 1fr)", config.rows))
        .with("grid-template-areas", template_areas_value(config))
        .with("column-gap", format!("{}px", format_number(config.column_gap)))
        .with("row-gap", format!("{}px", format_number(config.row_gap)))
        .with("justify-items", config.justify_items.keyword())
        .with("align-items", config.align_items.keyword())
        .with("justify-content", config.justify_content.keyword())
        .with("align-content", config.align_content.keyword())
}
