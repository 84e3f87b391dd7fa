//! Batch print plans
//!
//! Orchestrates one print request: validate the event, resolve its look,
//! choose a grid for the paper, compose the cards, and assemble the plan the
//! renderer lays out. Any failure stops the build; no partial plan is
//! returned.

use crate::composer::{CardComposer, CardDescriptor};
use crate::error::{Result, ValidationError};
use crate::event::EventFields;
use crate::resolver::{ConfigResolver, EventOverrides, PresentationConfig};
use crate::settings::PrintSettings;
use print_layout::{CardCount, LayoutPlanner, PaperSizeSpec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use theme_catalog::{TemplateDefinition, ThemeCatalog};

// =============================================================================
// Layout Plan
// =============================================================================

/// Everything the renderer needs to print a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub paper_size: PaperSizeSpec,
    pub cols: u32,
    pub rows: u32,
    pub cards_per_sheet: u32,
    pub sheet_count: u32,
    pub card_width_mm: f64,
    pub card_height_mm: f64,
    /// One entry per requested card, all sharing a single descriptor
    pub cards: Vec<Arc<CardDescriptor>>,
}

/// Where one card lands in the plan
#[derive(Debug, Clone, PartialEq)]
pub struct CardSlot<'a> {
    /// Zero-based sheet index
    pub sheet: u32,
    pub row: u32,
    pub col: u32,
    pub card: &'a CardDescriptor,
}

impl LayoutPlan {
    pub fn requested_count(&self) -> usize {
        self.cards.len()
    }

    /// The presentation shared by every card, if the plan has any cards
    pub fn config(&self) -> Option<&PresentationConfig> {
        self.cards.first().map(|card| card.config.as_ref())
    }

    /// Cards printed on the given sheet
    pub fn sheet(&self, index: u32) -> &[Arc<CardDescriptor>] {
        let per_sheet = self.cards_per_sheet as usize;
        let start = (index as usize).saturating_mul(per_sheet).min(self.cards.len());
        let end = start.saturating_add(per_sheet).min(self.cards.len());
        &self.cards[start..end]
    }

    /// Every card with its position, sheet by sheet, row-major within a sheet
    pub fn slots(&self) -> impl Iterator<Item = CardSlot<'_>> + '_ {
        let per_sheet = self.cards_per_sheet.max(1) as usize;
        let cols = self.cols.max(1) as usize;
        self.cards.iter().enumerate().map(move |(index, card)| {
            let cell = index % per_sheet;
            CardSlot {
                sheet: (index / per_sheet) as u32,
                row: (cell / cols) as u32,
                col: (cell % cols) as u32,
                card: card.as_ref(),
            }
        })
    }
}

// =============================================================================
// Batch Request
// =============================================================================

/// A print request as it arrives from the caller
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub event: EventFields,
    #[serde(default)]
    pub overrides: Option<EventOverrides>,
    #[serde(default)]
    pub template: Option<TemplateDefinition>,
    pub paper_size: String,
    /// `None` asks for the paper's maximum recommended count
    #[serde(default)]
    pub requested_count: Option<i64>,
    #[serde(default)]
    pub qr_payload: String,
}

impl BatchRequest {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds [`LayoutPlan`]s from event data and print options
#[derive(Debug, Clone)]
pub struct BatchPlanBuilder<'a> {
    resolver: ConfigResolver<'a>,
    composer: CardComposer<'a>,
    planner: LayoutPlanner,
}

impl BatchPlanBuilder<'static> {
    /// Builder over the global catalog and paper registry with default settings
    pub fn new() -> Self {
        Self::from_settings(&PrintSettings::default())
    }

    pub fn from_settings(settings: &PrintSettings) -> Self {
        Self::with_catalog(ThemeCatalog::global(), settings)
    }
}

impl Default for BatchPlanBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BatchPlanBuilder<'a> {
    pub fn with_catalog(catalog: &'a ThemeCatalog, settings: &PrintSettings) -> Self {
        Self {
            resolver: ConfigResolver::with_catalog(catalog, settings.palette.clone()),
            composer: CardComposer::with_catalog(catalog, &settings.date_format),
            planner: LayoutPlanner::with_settings(settings.planner.clone()),
        }
    }

    /// Replace the planner, e.g. to use a custom paper registry
    pub fn with_planner(mut self, planner: LayoutPlanner) -> Self {
        self.planner = planner;
        self
    }

    pub fn resolver(&self) -> &ConfigResolver<'a> {
        &self.resolver
    }

    pub fn planner(&self) -> &LayoutPlanner {
        &self.planner
    }

    /// Build the print plan for one batch of identical cards
    pub fn build(
        &self,
        event: &EventFields,
        overrides: Option<&EventOverrides>,
        template: Option<&TemplateDefinition>,
        paper_size: &str,
        requested_count: impl Into<CardCount>,
        qr_payload: &str,
    ) -> Result<LayoutPlan> {
        if !event.has_title() {
            return Err(ValidationError::MissingTitle.into());
        }
        if qr_payload.trim().is_empty() {
            return Err(ValidationError::MissingQrPayload.into());
        }

        let config = Arc::new(self.resolver.resolve(&event.event_type, template, overrides));

        let paper = self.planner.paper(paper_size)?;
        let count = self.planner.resolve_count(paper, requested_count.into());
        let grid = self.planner.compute_grid_for(paper, count)?;

        // compute_grid_for rejects counts below 1
        let cards = self.composer.compose(event, config, qr_payload.trim(), count as usize);

        tracing::debug!(
            target: "card_batch::plan",
            paper = %paper.name,
            event_type = %event.event_type,
            cards = cards.len(),
            cols = grid.cols,
            rows = grid.rows,
            sheets = grid.sheet_count,
            wasted = grid.wasted,
            "print plan built"
        );

        Ok(LayoutPlan {
            paper_size: paper.clone(),
            cols: grid.cols,
            rows: grid.rows,
            cards_per_sheet: grid.cards_per_sheet,
            sheet_count: grid.sheet_count,
            card_width_mm: grid.card_width_mm,
            card_height_mm: grid.card_height_mm,
            cards,
        })
    }

    pub fn build_request(&self, request: &BatchRequest) -> Result<LayoutPlan> {
        self.build(
            &request.event,
            request.overrides.as_ref(),
            request.template.as_ref(),
            &request.paper_size,
            request.requested_count,
            &request.qr_payload,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BatchError;
    use chrono::NaiveDate;
    use print_layout::LayoutError;
    use proptest::prelude::*;
    use theme_catalog::{ColorField, Participants, ThemeKey};

    const PAYLOAD: &str = "https://cards.example.com/upload/evt-42";

    fn wedding() -> EventFields {
        EventFields::new("Anna & Ben", NaiveDate::from_ymd_opt(2025, 6, 14).unwrap())
            .with_event_type("wedding")
            .with_participants(Participants::wedding("Anna", "Ben"))
            .with_location("Lakeside Hall")
    }

    #[test]
    fn test_a4_six_cards() {
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), None, None, "A4", 6, PAYLOAD)
            .unwrap();

        assert_eq!((plan.cols, plan.rows), (2, 3));
        assert_eq!(plan.sheet_count, 1);
        assert_eq!(plan.cards_per_sheet, 6);
        assert_eq!(plan.requested_count(), 6);
        assert_eq!(plan.paper_size.name, "A4");
    }

    #[test]
    fn test_a4_twelve_cards() {
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), None, None, "A4", 12, PAYLOAD)
            .unwrap();
        assert_eq!((plan.cols, plan.rows), (3, 4));
        assert_eq!(plan.sheet_count, 1);
    }

    #[test]
    fn test_count_outside_presets() {
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), None, None, "A4", 7, PAYLOAD)
            .unwrap();
        assert_eq!((plan.cols, plan.rows), (2, 4));
        assert_eq!(plan.sheet_count, 1);
        assert_eq!(plan.cards_per_sheet - plan.requested_count() as u32, 1);
    }

    #[test]
    fn test_override_color_reaches_cards() {
        let template = TemplateDefinition::new("white").with_primary_color("#FFFFFF");
        let overrides = EventOverrides::new().with_color(ColorField::Primary, "#000000");
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), Some(&overrides), Some(&template), "A4", 6, PAYLOAD)
            .unwrap();
        assert_eq!(plan.config().unwrap().primary_color, "#000000");
    }

    #[test]
    fn test_unknown_event_type_plans_with_other_theme() {
        let event = wedding().with_event_type("unknown_xyz");
        let plan = BatchPlanBuilder::new()
            .build(&event, None, None, "A4", 6, PAYLOAD)
            .unwrap();
        assert_eq!(plan.config().unwrap().theme_key, ThemeKey::Other);
        assert_eq!(plan.cards[0].title, "Anna & Ben");
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut event = wedding();
        event.title = String::new();
        let result = BatchPlanBuilder::new().build(&event, None, None, "A4", 6, PAYLOAD);
        assert_eq!(result, Err(BatchError::Validation(ValidationError::MissingTitle)));

        event.title = "   ".to_string();
        let result = BatchPlanBuilder::new().build(&event, None, None, "A4", 6, PAYLOAD);
        assert_eq!(result, Err(BatchError::Validation(ValidationError::MissingTitle)));
    }

    #[test]
    fn test_title_checked_before_paper() {
        let mut event = wedding();
        event.title = String::new();
        let result = BatchPlanBuilder::new().build(&event, None, None, "B5", 0, PAYLOAD);
        assert_eq!(result, Err(BatchError::Validation(ValidationError::MissingTitle)));
    }

    #[test]
    fn test_empty_payload_rejected() {
        let result = BatchPlanBuilder::new().build(&wedding(), None, None, "A4", 6, " ");
        assert_eq!(result, Err(BatchError::Validation(ValidationError::MissingQrPayload)));
    }

    #[test]
    fn test_layout_errors_propagate() {
        let builder = BatchPlanBuilder::new();
        assert_eq!(
            builder.build(&wedding(), None, None, "B5", 6, PAYLOAD),
            Err(BatchError::Layout(LayoutError::UnknownPaperSize("B5".to_string())))
        );
        assert_eq!(
            builder.build(&wedding(), None, None, "A4", 0, PAYLOAD),
            Err(BatchError::Layout(LayoutError::InvalidCount(0)))
        );
        assert_eq!(
            builder.build(&wedding(), None, None, "A4", -3, PAYLOAD),
            Err(BatchError::Layout(LayoutError::InvalidCount(-3)))
        );
    }

    #[test]
    fn test_paper_maximum() {
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), None, None, "a4", CardCount::PaperMaximum, PAYLOAD)
            .unwrap();
        assert_eq!(plan.requested_count(), 12);
        assert_eq!((plan.cols, plan.rows), (3, 4));
        assert_eq!(plan.paper_size.name, "A4");
    }

    #[test]
    fn test_cards_share_descriptor() {
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), None, None, "A4", 8, PAYLOAD)
            .unwrap();
        assert!(plan.cards.iter().all(|c| Arc::ptr_eq(c, &plan.cards[0])));
        assert_eq!(plan.cards[0].qr_payload, PAYLOAD);
        assert_eq!(plan.cards[0].title, "The Wedding of Anna & Ben");
    }

    #[test]
    fn test_slots_row_major() {
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), None, None, "A4", 7, PAYLOAD)
            .unwrap();
        let positions: Vec<(u32, u32, u32)> =
            plan.slots().map(|slot| (slot.sheet, slot.row, slot.col)).collect();
        assert_eq!(
            positions,
            vec![(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1), (0, 2, 0), (0, 2, 1), (0, 3, 0)]
        );
    }

    #[test]
    fn test_sheets_split_cards() {
        let plan = LayoutPlan {
            paper_size: PaperSizeSpec::new("Tiny", 60.0, 80.0, 5.0),
            cols: 2,
            rows: 2,
            cards_per_sheet: 4,
            sheet_count: 3,
            card_width_mm: 25.0,
            card_height_mm: 35.0,
            cards: wedding_cards(9),
        };
        assert_eq!(plan.sheet(0).len(), 4);
        assert_eq!(plan.sheet(1).len(), 4);
        assert_eq!(plan.sheet(2).len(), 1);
        assert!(plan.sheet(3).is_empty());

        let last = plan.slots().last().unwrap();
        assert_eq!((last.sheet, last.row, last.col), (2, 0, 0));
    }

    fn wedding_cards(count: usize) -> Vec<Arc<CardDescriptor>> {
        let event = wedding();
        let config = Arc::new(ConfigResolver::new().resolve("wedding", None, None));
        CardComposer::new().compose(&event, config, PAYLOAD, count)
    }

    #[test]
    fn test_build_request_from_json() {
        let json = r##"{
            "event": {
                "title": "Mia's Party",
                "date": "2025-03-09",
                "eventType": "birthday",
                "participants": {"eventType": "birthday", "celebrant": "Mia", "age": 7}
            },
            "overrides": {"customColors": {"backgroundColor": "#FFF7ED"}},
            "paperSize": "Letter",
            "requestedCount": 8,
            "qrPayload": "https://cards.example.com/upload/mia"
        }"##;
        let request = BatchRequest::from_json(json).unwrap();
        let plan = BatchPlanBuilder::new().build_request(&request).unwrap();

        assert_eq!(plan.requested_count(), 8);
        assert_eq!(plan.paper_size.name, "Letter");
        let card = &plan.cards[0];
        assert_eq!(card.title, "Mia's 7th Birthday");
        assert_eq!(card.config.background_color, "#FFF7ED");
        assert_eq!(card.config.theme_key, ThemeKey::Birthday);
    }

    #[test]
    fn test_request_without_count_uses_paper_maximum() {
        let json = r#"{
            "event": {"title": "Launch", "date": "2025-09-01", "eventType": "corporate"},
            "paperSize": "A5",
            "qrPayload": "https://cards.example.com/upload/launch"
        }"#;
        let request = BatchRequest::from_json(json).unwrap();
        assert_eq!(request.requested_count, None);

        let plan = BatchPlanBuilder::new().build_request(&request).unwrap();
        assert_eq!(plan.requested_count(), 6);
        assert_eq!((plan.cols, plan.rows), (2, 3));
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let plan = BatchPlanBuilder::new()
            .build(&wedding(), None, None, "A4", 6, PAYLOAD)
            .unwrap();
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["sheetCount"], 1);
        assert_eq!(value["paperSize"]["name"], "A4");
        assert_eq!(value["cards"].as_array().unwrap().len(), 6);
        assert_eq!(value["cards"][0]["qrPayload"], PAYLOAD);
    }

    proptest! {
        #[test]
        fn prop_plan_holds_every_card(count in 1i64..200, paper in prop::sample::select(vec!["A3", "A4", "A5", "Letter"])) {
            let plan = BatchPlanBuilder::new()
                .build(&wedding(), None, None, paper, count, PAYLOAD)
                .unwrap();
            prop_assert_eq!(plan.requested_count(), count as usize);
            prop_assert!(plan.cols * plan.rows >= count as u32);
            prop_assert_eq!(plan.sheet_count, (count as u32).div_ceil(plan.cards_per_sheet));
            prop_assert_eq!(plan.slots().count(), count as usize);
        }
    }
}
