//! Theme Catalog - Event themes, participant titles, and card templates
//!
//! This crate holds the read-only presentation data a QR card is built from:
//! - A fixed catalog of event-type themes (colors, decorative motifs)
//! - Title and subtitle strategies derived from the event's participants
//! - Customer-selectable templates that sit between theme and event overrides
//!
//! # Example
//!
//! ```rust
//! use theme_catalog::{Participants, ThemeCatalog, ThemeKey};
//!
//! let catalog = ThemeCatalog::global();
//!
//! let wedding = catalog.lookup("wedding");
//! assert_eq!(wedding.key, ThemeKey::Wedding);
//!
//! // Unknown event types fall back to the `other` theme
//! assert_eq!(catalog.lookup("unknown_xyz").key, ThemeKey::Other);
//!
//! let couple = Participants::wedding("Anna", "Ben");
//! assert_eq!(wedding.title_for(&couple), "The Wedding of Anna & Ben");
//! ```

mod catalog;
mod motif;
mod participants;
mod template;
mod theme;

pub use catalog::{builtin_themes, ThemeCatalog};
pub use motif::Motif;
pub use participants::Participants;
pub use template::TemplateDefinition;
pub use theme::{ColorField, SubtitleStrategy, ThemeDefinition, ThemeKey, TitleStrategy};
