//! Enumerations shared by plans, meals and uploads.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Goal a plan template is built for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PlanType {
    MuscleMass,
    WeightLoss,
    BulkUp,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [Self::MuscleMass, Self::WeightLoss, Self::BulkUp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MuscleMass => "muscle-mass",
            Self::WeightLoss => "weight-loss",
            Self::BulkUp => "bulk-up",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MuscleMass => "Muscle Mass",
            Self::WeightLoss => "Weight Loss",
            Self::BulkUp => "Bulk Up",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "muscle-mass" => Ok(Self::MuscleMass),
            "weight-loss" => Ok(Self::WeightLoss),
            "bulk-up" => Ok(Self::BulkUp),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

/// Which item pool a plan draws from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Workout,
    Meal,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Meal => "meal",
        }
    }

    /// Day counts offered when starting a plan of this kind.
    pub fn offered_day_counts(&self) -> RangeInclusive<u32> {
        match self {
            Self::Workout => 3..=super::MAX_DAYS,
            Self::Meal => 1..=super::MAX_DAYS,
        }
    }

    /// Noun for the items of this kind, used in messages.
    pub fn item_noun(&self) -> &'static str {
        match self {
            Self::Workout => "exercise",
            Self::Meal => "meal option",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout" => Ok(Self::Workout),
            "meal" => Ok(Self::Meal),
            _ => Err(format!("Invalid plan kind: {s}")),
        }
    }
}

/// Slot a meal option fills within a day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[serde(alias = "snack")]
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snacks),
            _ => Err(format!("Invalid meal type: {s}")),
        }
    }
}

/// Media that can be uploaded ahead of the record referencing it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    MealImage,
    ExerciseVideo,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MealImage => "meal-image",
            Self::ExerciseVideo => "exercise-video",
        }
    }

    /// Upload endpoint.
    pub fn upload_path(&self) -> &'static str {
        match self {
            Self::MealImage => "/admin/meal/upload-image",
            Self::ExerciseVideo => "/admin/workout/upload-video",
        }
    }

    /// Multipart field carrying the file.
    pub fn form_field(&self) -> &'static str {
        match self {
            Self::MealImage => "image",
            Self::ExerciseVideo => "video",
        }
    }

    /// Response field carrying the stored URL.
    pub fn url_field(&self) -> &'static str {
        match self {
            Self::MealImage => "imageUrl",
            Self::ExerciseVideo => "videoUrl",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meal-image" => Ok(Self::MealImage),
            "exercise-video" => Ok(Self::ExerciseVideo),
            _ => Err(format!("Invalid media kind: {s}")),
        }
    }
}
