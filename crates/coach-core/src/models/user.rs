use serde::{Deserialize, Serialize};

/// Centimeters per foot, for the height readout.
const CM_PER_FOOT: f64 = 30.48;

/// Profile of the user a personalized plan was generated for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub fullname: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,

    #[serde(default, deserialize_with = "super::lenient::optional_text")]
    pub age: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Weight in kilograms
    #[serde(default, deserialize_with = "super::lenient::number")]
    pub weight: f64,

    /// Height in centimeters
    #[serde(default, deserialize_with = "super::lenient::number")]
    pub height: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,

    #[serde(default, deserialize_with = "super::lenient::optional_text")]
    pub workout_days: Option<String>,
}

impl UserProfile {
    /// Height in feet, one decimal place.
    pub fn height_feet(&self) -> String {
        format!("{:.1}", self.height / CM_PER_FOOT)
    }

    pub fn display_name(&self) -> &str {
        if self.fullname.is_empty() {
            "Unknown"
        } else {
            &self.fullname
        }
    }

    /// Goal as a readable label (`lose_weight` becomes `Lose Weight`).
    pub fn goal_label(&self) -> Option<String> {
        self.goal.as_deref().map(humanize)
    }

    pub fn activity_label(&self) -> Option<String> {
        self.activity_level.as_deref().map(humanize)
    }
}

fn humanize(raw: &str) -> String {
    raw.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_shown_in_feet() {
        let profile = UserProfile {
            height: 182.88,
            ..UserProfile::default()
        };
        assert_eq!(profile.height_feet(), "6.0");
    }

    #[test]
    fn labels_are_humanized() {
        let profile = UserProfile {
            goal: Some("lose_weight".into()),
            activity_level: Some("very-active".into()),
            ..UserProfile::default()
        };
        assert_eq!(profile.goal_label().as_deref(), Some("Lose Weight"));
        assert_eq!(profile.activity_label().as_deref(), Some("Very Active"));
        assert_eq!(profile.display_name(), "Unknown");
    }
}
