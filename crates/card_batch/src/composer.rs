//! Card composition
//!
//! Every card in a batch shows the same thing, so the composer builds one
//! descriptor and hands out `count` shared references to it.

use crate::event::EventFields;
use crate::resolver::PresentationConfig;
use crate::settings::DEFAULT_DATE_FORMAT;
use chrono::format::{Item, StrftimeItems};
use serde::Serialize;
use std::sync::Arc;
use theme_catalog::ThemeCatalog;

/// What the renderer needs to draw one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    pub title: String,
    pub subtitle: Option<String>,
    pub date_label: String,
    pub location_label: Option<String>,
    /// Guest upload URL; the renderer encodes it as the card's QR code
    pub qr_payload: String,
    pub config: Arc<PresentationConfig>,
}

/// Builds card descriptors from event content and a resolved config
#[derive(Debug, Clone)]
pub struct CardComposer<'a> {
    catalog: &'a ThemeCatalog,
    date_format: String,
}

impl CardComposer<'static> {
    /// Composer over the global theme catalog with the default date format
    pub fn new() -> Self {
        Self::with_catalog(ThemeCatalog::global(), DEFAULT_DATE_FORMAT)
    }
}

impl Default for CardComposer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CardComposer<'a> {
    /// An unparsable date format is logged and replaced by the default
    pub fn with_catalog(catalog: &'a ThemeCatalog, date_format: &str) -> Self {
        let date_format = if is_valid_date_format(date_format) {
            date_format.to_string()
        } else {
            tracing::warn!(
                "Invalid card date format {:?}, using {:?}",
                date_format,
                DEFAULT_DATE_FORMAT
            );
            DEFAULT_DATE_FORMAT.to_string()
        };
        Self {
            catalog,
            date_format,
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Build the single descriptor shared by every card of the batch
    pub fn compose_one(
        &self,
        event: &EventFields,
        config: Arc<PresentationConfig>,
        qr_payload: &str,
    ) -> CardDescriptor {
        let theme = self.catalog.get(config.theme_key);

        let derived = theme.title_for(&event.participants);
        let title = if derived.trim().is_empty() {
            event.title.trim().to_string()
        } else {
            derived
        };

        CardDescriptor {
            title,
            subtitle: theme.subtitle_for(&event.participants),
            date_label: event.date.format(&self.date_format).to_string(),
            location_label: event
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            qr_payload: qr_payload.to_string(),
            config,
        }
    }

    /// Build `count` cards, all sharing one descriptor
    pub fn compose(
        &self,
        event: &EventFields,
        config: Arc<PresentationConfig>,
        qr_payload: &str,
        count: usize,
    ) -> Vec<Arc<CardDescriptor>> {
        let card = Arc::new(self.compose_one(event, config, qr_payload));
        vec![card; count]
    }
}

fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
