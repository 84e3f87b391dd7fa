//! Event participants
//!
//! Each event type names its people differently: a wedding has a bride and a
//! groom, a birthday has a celebrant. `Participants` is tagged by event type so
//! every variant carries exactly the roles that type uses.
//!
//! The title and subtitle strategies here are total over every variant. A
//! strategy handed participants of a different event type returns an empty
//! title (or no subtitle) instead of failing; callers fall back to the event's
//! own title.
//!
//! Stored events often keep participants as a plain role map
//! (`{"bride": "Anna", "groom": "Ben"}`) next to a separate event type.
//! [`Participants::from_roles`] builds the variant from such a map; roles that
//! are missing become empty and an unreadable age is dropped.

use crate::theme::ThemeKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// People named on a card, keyed by event type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "snake_case")]
pub enum Participants {
    #[serde(rename_all = "camelCase")]
    Wedding {
        #[serde(default)]
        bride: String,
        #[serde(default)]
        groom: String,
    },
    #[serde(rename_all = "camelCase")]
    Engagement {
        #[serde(default)]
        partner_one: String,
        #[serde(default)]
        partner_two: String,
    },
    #[serde(rename_all = "camelCase")]
    Birthday {
        #[serde(default)]
        celebrant: String,
        #[serde(default)]
        age: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    BabyShower {
        #[serde(default)]
        parents: String,
        #[serde(default)]
        baby_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Corporate {
        #[serde(default)]
        company: String,
        #[serde(default)]
        host: Option<String>,
    },
    #[default]
    #[serde(other)]
    Other,
}

impl Participants {
    pub fn wedding(bride: impl Into<String>, groom: impl Into<String>) -> Self {
        Self::Wedding {
            bride: bride.into(),
            groom: groom.into(),
        }
    }

    pub fn engagement(partner_one: impl Into<String>, partner_two: impl Into<String>) -> Self {
        Self::Engagement {
            partner_one: partner_one.into(),
            partner_two: partner_two.into(),
        }
    }

    pub fn birthday(celebrant: impl Into<String>, age: Option<u32>) -> Self {
        Self::Birthday {
            celebrant: celebrant.into(),
            age,
        }
    }

    pub fn baby_shower(parents: impl Into<String>, baby_name: Option<String>) -> Self {
        Self::BabyShower {
            parents: parents.into(),
            baby_name,
        }
    }

    pub fn corporate(company: impl Into<String>, host: Option<String>) -> Self {
        Self::Corporate {
            company: company.into(),
            host,
        }
    }

    /// Build participants from a role-name -> text map for an event type.
    ///
    /// Role names are the camelCase keys used in JSON (`partnerOne`,
    /// `babyName`); snake_case spellings are accepted too. Unknown event types
    /// give `Other`.
    pub fn from_roles(event_type: &str, roles: &HashMap<String, String>) -> Self {
        let text = |camel: &str, snake: &str| -> String {
            roles
                .get(camel)
                .or_else(|| roles.get(snake))
                .cloned()
                .unwrap_or_default()
        };
        let optional = |camel: &str, snake: &str| -> Option<String> {
            Some(text(camel, snake)).filter(|value| !value.trim().is_empty())
        };

        match ThemeKey::parse(event_type) {
            Some(ThemeKey::Wedding) => Self::wedding(text("bride", "bride"), text("groom", "groom")),
            Some(ThemeKey::Engagement) => Self::engagement(
                text("partnerOne", "partner_one"),
                text("partnerTwo", "partner_two"),
            ),
            Some(ThemeKey::Birthday) => Self::birthday(
                text("celebrant", "celebrant"),
                optional("age", "age").and_then(|age| age.trim().parse().ok()),
            ),
            Some(ThemeKey::BabyShower) => Self::baby_shower(
                text("parents", "parents"),
                optional("babyName", "baby_name"),
            ),
            Some(ThemeKey::Corporate) => {
                Self::corporate(text("company", "company"), optional("host", "host"))
            }
            Some(ThemeKey::Other) | None => Self::Other,
        }
    }
}

/// Join two names with " & ", skipping blanks
fn couple(first: &str, second: &str) -> String {
    let names: Vec<&str> = [first.trim(), second.trim()]
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect();
    names.join(" & ")
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

pub(crate) fn wedding_title(participants: &Participants) -> String {
    match participants {
        Participants::Wedding { bride, groom } => {
            let names = couple(bride, groom);
            if names.is_empty() {
                String::new()
            } else {
                format!("The Wedding of {}", names)
            }
        }
        _ => String::new(),
    }
}

pub(crate) fn engagement_title(participants: &Participants) -> String {
    match participants {
        Participants::Engagement {
            partner_one,
            partner_two,
        } => {
            let names = couple(partner_one, partner_two);
            if names.is_empty() {
                String::new()
            } else {
                format!("{} Are Engaged", names)
            }
        }
        _ => String::new(),
    }
}

pub(crate) fn birthday_title(participants: &Participants) -> String {
    match participants {
        Participants::Birthday { celebrant, age } => {
            let celebrant = celebrant.trim();
            if celebrant.is_empty() {
                return String::new();
            }
            match age {
                Some(age) if *age > 0 => format!("{}'s {} Birthday", celebrant, ordinal(*age)),
                _ => format!("{}'s Birthday", celebrant),
            }
        }
        _ => String::new(),
    }
}

pub(crate) fn baby_shower_title(participants: &Participants) -> String {
    match participants {
        Participants::BabyShower { parents, baby_name } => {
            let parents = parents.trim();
            if !parents.is_empty() {
                format!("Baby Shower for {}", parents)
            } else if let Some(baby) = non_blank(baby_name.as_ref()) {
                format!("Welcome, {}", baby)
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}

pub(crate) fn corporate_title(participants: &Participants) -> String {
    match participants {
        Participants::Corporate { company, .. } => company.trim().to_string(),
        _ => String::new(),
    }
}

/// `other` events have no role-derived title
pub(crate) fn no_title(_participants: &Participants) -> String {
    String::new()
}

pub(crate) fn couple_subtitle(participants: &Participants) -> Option<String> {
    let names = match participants {
        Participants::Wedding { bride, groom } => couple(bride, groom),
        Participants::Engagement {
            partner_one,
            partner_two,
        } => couple(partner_one, partner_two),
        _ => return None,
    };
    Some(names).filter(|n| !n.is_empty())
}

pub(crate) fn celebrant_subtitle(participants: &Participants) -> Option<String> {
    match participants {
        Participants::Birthday { celebrant, .. } => non_blank(Some(celebrant)),
        _ => None,
    }
}

pub(crate) fn baby_subtitle(participants: &Participants) -> Option<String> {
    match participants {
        Participants::BabyShower { baby_name, .. } => non_blank(baby_name.as_ref()),
        _ => None,
    }
}

pub(crate) fn host_subtitle(participants: &Participants) -> Option<String> {
    match participants {
        Participants::Corporate { host, .. } => non_blank(host.as_ref()),
        _ => None,
    }
}

pub(crate) fn no_subtitle(_participants: &Participants) -> Option<String> {
    None
}
