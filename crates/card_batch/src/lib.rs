//! Card Batch - Print plans for batches of QR event cards
//!
//! This crate turns an event and its print options into a layout plan:
//! - Presentation resolution (event overrides > template > theme > palette)
//! - Card composition with theme-derived titles and formatted dates
//! - Batch planning on top of the `print_layout` grid planner
//! - An encode-once QR image cache for renderers
//! - JSON print settings with defaults
//!
//! # Example
//!
//! ```rust
//! use card_batch::{BatchPlanBuilder, EventFields};
//! use chrono::NaiveDate;
//! use theme_catalog::Participants;
//!
//! let event = EventFields::new("Anna & Ben", NaiveDate::from_ymd_opt(2025, 6, 14).unwrap())
//!     .with_event_type("wedding")
//!     .with_participants(Participants::wedding("Anna", "Ben"));
//!
//! let plan = BatchPlanBuilder::new()
//!     .build(&event, None, None, "A4", 6, "https://cards.example.com/u/anna-ben")
//!     .unwrap();
//!
//! assert_eq!((plan.cols, plan.rows), (2, 3));
//! assert_eq!(plan.cards[0].title, "The Wedding of Anna & Ben");
//! assert_eq!(plan.cards[0].date_label, "June 14, 2025");
//! ```

mod composer;
mod error;
mod event;
mod plan;
mod qr;
mod resolver;
mod settings;

pub use composer::{CardComposer, CardDescriptor};
pub use error::{BatchError, Result, SettingsError, ValidationError};
pub use event::EventFields;
pub use plan::{BatchPlanBuilder, BatchRequest, CardSlot, LayoutPlan};
pub use qr::{QrEncoder, QrImageCache};
pub use resolver::{ConfigResolver, CustomColors, EventOverrides, PresentationConfig};
pub use settings::{FallbackPalette, PrintSettings, SettingsLoader, DEFAULT_DATE_FORMAT};
