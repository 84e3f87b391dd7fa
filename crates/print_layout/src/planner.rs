//! Grid planning
//!
//! Given a paper and a number of cards, the planner picks the `cols x rows`
//! grid that best fits. Every grid holding at least `count` cells (and at most
//! `count + cols`, which keeps the last row from being entirely blank) is a
//! candidate. Candidates are ranked lexicographically by:
//!
//! 1. sheets needed, `ceil(count / (cols * rows))`
//! 2. blank cells left on the last sheet
//! 3. distance of the card's height/width ratio from the target ratio
//! 4. portrait bias: more rows than columns, then more rows
//!
//! Before ranking, candidates are split by legibility: grids whose cells meet
//! the minimum card size (50 x 50 mm by default) are ranked first, and the
//! rest are only considered when no grid meets it. The ranking alone would
//! put 7 cards on A4 as a 1x7 strip (no waste, closest aspect); the legibility
//! split is what yields 2x4 with one blank cell instead. The classic presets
//! (A4 holding 6, 8 or 12 cards as 2x3, 2x4 or 3x4) fall out of the same
//! process; nothing is looked up from a table.
//!
//! Requests are capped at `PlannerSettings::max_requested_count`, itself never
//! above [`MAX_REQUESTED_COUNT_LIMIT`](crate::MAX_REQUESTED_COUNT_LIMIT), so
//! the linear candidate search stays bounded.

use crate::error::{LayoutError, Result};
use crate::paper::{PaperRegistry, PaperSizeSpec};
use crate::settings::PlannerSettings;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Aspect errors closer than this are treated as equal
const ASPECT_EPSILON: f64 = 1e-9;

/// Planner over the built-in papers with default settings
static DEFAULT_PLANNER: OnceLock<LayoutPlanner> = OnceLock::new();

// =============================================================================
// Requested Count
// =============================================================================

/// How many cards a print request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCount {
    /// An explicit number of cards; values below 1 are rejected
    Exact(i64),
    /// The paper's maximum recommended cards per sheet
    PaperMaximum,
}

impl From<i64> for CardCount {
    fn from(count: i64) -> Self {
        CardCount::Exact(count)
    }
}

impl From<i32> for CardCount {
    fn from(count: i32) -> Self {
        CardCount::Exact(count as i64)
    }
}

impl From<Option<i64>> for CardCount {
    fn from(count: Option<i64>) -> Self {
        match count {
            Some(count) => CardCount::Exact(count),
            None => CardCount::PaperMaximum,
        }
    }
}

// =============================================================================
// Grid Shape
// =============================================================================

/// The chosen arrangement of cards on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridShape {
    pub cols: u32,
    pub rows: u32,
    /// `cols * rows`
    pub cards_per_sheet: u32,
    pub sheet_count: u32,
    /// Blank cells on the last sheet
    pub wasted: u32,
    /// Size of one card cell in millimetres
    pub card_width_mm: f64,
    pub card_height_mm: f64,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    cols: u32,
    rows: u32,
    cells: u32,
    sheets: u32,
    wasted: u32,
    card_width: f64,
    card_height: f64,
    aspect_error: f64,
    legible: bool,
}

impl Candidate {
    fn new(cols: u32, rows: u32, count: u32, width: f64, height: f64, settings: &PlannerSettings) -> Self {
        let cells = cols * rows;
        let sheets = count.div_ceil(cells);
        let card_width = width / cols as f64;
        let card_height = height / rows as f64;
        Self {
            cols,
            rows,
            cells,
            sheets,
            wasted: sheets * cells - count,
            card_width,
            card_height,
            aspect_error: (card_height / card_width - settings.card_aspect_ratio).abs(),
            legible: card_width >= settings.min_card_width_mm
                && card_height >= settings.min_card_height_mm,
        }
    }

    /// `Less` means `self` is the better grid
    fn rank(&self, other: &Self) -> Ordering {
        self.sheets
            .cmp(&other.sheets)
            .then(self.wasted.cmp(&other.wasted))
            .then_with(|| compare_aspect(self.aspect_error, other.aspect_error))
            .then_with(|| (other.rows > other.cols).cmp(&(self.rows > self.cols)))
            .then_with(|| other.rows.cmp(&self.rows))
    }

    fn into_shape(self) -> GridShape {
        GridShape {
            cols: self.cols,
            rows: self.rows,
            cards_per_sheet: self.cells,
            sheet_count: self.sheets,
            wasted: self.wasted,
            card_width_mm: self.card_width,
            card_height_mm: self.card_height,
        }
    }
}

fn compare_aspect(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < ASPECT_EPSILON {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

fn keep_better(current: Option<Candidate>, candidate: Candidate) -> Option<Candidate> {
    match current {
        Some(best) if best.rank(&candidate) != Ordering::Greater => Some(best),
        _ => Some(candidate),
    }
}

// =============================================================================
// Layout Planner
// =============================================================================

/// Computes card grids for the papers in its registry
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    papers: PaperRegistry,
    settings: PlannerSettings,
}

impl LayoutPlanner {
    /// Planner over the built-in papers with default settings
    pub fn new() -> Self {
        Self::with_settings(PlannerSettings::default())
    }

    pub fn with_settings(settings: PlannerSettings) -> Self {
        Self::with_registry(PaperRegistry::global().clone(), settings)
    }

    pub fn with_registry(papers: PaperRegistry, settings: PlannerSettings) -> Self {
        Self { papers, settings }
    }

    /// Shared default planner, initialized on first use
    pub fn global() -> &'static LayoutPlanner {
        DEFAULT_PLANNER.get_or_init(LayoutPlanner::new)
    }

    pub fn papers(&self) -> &PaperRegistry {
        &self.papers
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn paper(&self, name: &str) -> Result<&PaperSizeSpec> {
        self.papers.lookup(name)
    }

    /// How many cards fit on one sheet at the minimum card size (at least 1)
    pub fn legible_capacity(&self, paper: &PaperSizeSpec) -> u32 {
        let cols = (paper.usable_width_mm() / self.settings.min_card_width_mm).floor();
        let rows = (paper.usable_height_mm() / self.settings.min_card_height_mm).floor();
        if cols < 1.0 || rows < 1.0 {
            return 1;
        }
        (cols * rows).min(u32::MAX as f64) as u32
    }

    /// Turn a request into a concrete card count for `paper`.
    ///
    /// `PaperMaximum` uses the paper's largest recommended count, or its
    /// legible capacity when it lists none.
    pub fn resolve_count(&self, paper: &PaperSizeSpec, count: CardCount) -> i64 {
        match count {
            CardCount::Exact(count) => count,
            CardCount::PaperMaximum => paper
                .max_recommended_count()
                .unwrap_or_else(|| self.legible_capacity(paper)) as i64,
        }
    }

    /// Compute the grid for a named paper
    pub fn compute_grid(&self, paper_name: &str, requested_count: i64) -> Result<GridShape> {
        let paper = self.paper(paper_name)?;
        self.compute_grid_for(paper, requested_count)
    }

    /// Compute the grid for a paper spec that need not be registered
    pub fn compute_grid_for(&self, paper: &PaperSizeSpec, requested_count: i64) -> Result<GridShape> {
        if requested_count <= 0 {
            return Err(LayoutError::InvalidCount(requested_count));
        }
        let max = self.settings.effective_max_count();
        if requested_count > max as i64 {
            return Err(LayoutError::CountTooLarge {
                requested: requested_count,
                max,
            });
        }
        if !paper.has_usable_area() {
            return Err(LayoutError::InvalidPaperSize(paper.name.clone()));
        }

        let count = requested_count as u32;
        let width = paper.usable_width_mm();
        let height = paper.usable_height_mm();

        let mut best = None;
        let mut best_legible = None;

        for cols in 1..=count {
            let mut rows = count.div_ceil(cols);
            while u64::from(cols) * u64::from(rows) <= u64::from(count) + u64::from(cols) {
                let candidate = Candidate::new(cols, rows, count, width, height, &self.settings);
                tracing::trace!(
                    target: "print_layout::planner",
                    cols,
                    rows,
                    wasted = candidate.wasted,
                    aspect_error = candidate.aspect_error,
                    legible = candidate.legible,
                    "grid candidate"
                );
                if candidate.legible {
                    best_legible = keep_better(best_legible, candidate);
                }
                best = keep_better(best, candidate);
                rows += 1;
            }
        }

        let chosen = best_legible
            .or(best)
            .ok_or(LayoutError::InvalidCount(requested_count))?;

        if !chosen.legible {
            tracing::debug!(
                target: "print_layout::planner",
                paper = %paper.name,
                count,
                "no grid meets the minimum card size, using smaller cards"
            );
        }
        tracing::debug!(
            target: "print_layout::planner",
            paper = %paper.name,
            count,
            cols = chosen.cols,
            rows = chosen.rows,
            sheets = chosen.sheets,
            "grid chosen"
        );

        Ok(chosen.into_shape())
    }
}

impl Default for LayoutPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute a grid on a built-in paper with default settings
pub fn compute_grid(paper_name: &str, requested_count: i64) -> Result<GridShape> {
    LayoutPlanner::global().compute_grid(paper_name, requested_count)
}
