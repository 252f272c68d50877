//! Exercise catalog records and workout categories.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A workout category (muscle group).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(
        default,
        deserialize_with = "super::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

/// An exercise from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,

    /// Older records carry the group here instead of `muscleGroup`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub set_type: String,

    #[serde(default, deserialize_with = "super::lenient::text")]
    pub reps: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Exercise>,

    #[serde(
        default,
        deserialize_with = "super::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

impl Exercise {
    /// Id-only stand-in for records that reference an exercise by id.
    pub fn stub(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            muscle_group: None,
            category: None,
            set_type: String::new(),
            reps: String::new(),
            video: None,
            image: None,
            card_image: None,
            comments: None,
            suggestion: None,
            alternatives: Vec::new(),
            created_at: None,
        }
    }

    /// Muscle group, from whichever field the record uses.
    pub fn group(&self) -> Option<&str> {
        self.muscle_group
            .as_deref()
            .or(self.category.as_deref())
            .filter(|group| !group.is_empty())
    }

    /// Whether the exercise belongs to `category`. Case and surrounding
    /// whitespace are ignored.
    pub fn belongs_to(&self, category: &str) -> bool {
        self.group()
            .is_some_and(|group| same_category(group, category))
    }

    pub fn media_url(&self) -> Option<&str> {
        self.video.as_deref().or(self.image.as_deref())
    }
}

/// Category comparison used everywhere items are matched to categories.
pub fn same_category(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
