//! Parameter structures for admin operations.
//!
//! These carry what a front end collected from the user. Each knows how to
//! validate itself and how to turn itself into the body its endpoint
//! expects, so the CLI (or any other surface) only maps its own argument
//! types onto them.

use serde_json::{json, Value};

use crate::error::{AdminError, Result};
use crate::models::MealType;
use crate::upload::MediaFile;

/// Parameters for operations on a locally stored record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Id {
    pub id: u64,
}

/// A new workout category.
#[derive(Debug, Clone, Default)]
pub struct CreateCategory {
    pub name: String,
}

impl CreateCategory {
    pub fn body(&self) -> Result<Value> {
        Ok(json!({ "name": required_name(&self.name, "name")? }))
    }
}

/// A new name for an existing category.
#[derive(Debug, Clone, Default)]
pub struct RenameCategory {
    pub id: String,
    pub name: String,
}

impl RenameCategory {
    pub fn body(&self) -> Result<Value> {
        Ok(json!({ "name": required_name(&self.name, "name")? }))
    }
}

/// An exercise as entered in the exercise form.
#[derive(Debug, Clone, Default)]
pub struct ExerciseForm {
    pub name: String,
    pub muscle_group: String,
    pub set_type: String,
    pub reps: String,
    pub comments: Option<String>,
    pub suggestion: Option<String>,
    pub video: Option<String>,
    pub card_image: Option<String>,
    pub alternatives: Vec<ExerciseForm>,
}

impl ExerciseForm {
    /// Name and muscle group are required, for alternatives too.
    pub fn validate(&self) -> Result<()> {
        required_name(&self.name, "name")?;
        required_name(&self.muscle_group, "muscleGroup")?;
        self.alternatives.iter().try_for_each(Self::validate)
    }

    /// Muscle groups are stored capitalized.
    pub fn muscle_group(&self) -> String {
        let group = self.muscle_group.trim();
        let mut chars = group.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Body of the create endpoint, which takes the form's own field names.
    pub fn save_body(&self) -> Result<Value> {
        self.validate()?;
        Ok(self.form_value(true))
    }

    /// Body of the update endpoint.
    pub fn update_body(&self) -> Result<Value> {
        self.validate()?;
        Ok(json!({
            "name": self.name.trim(),
            "muscleGroup": self.muscle_group(),
            "setType": self.set_type,
            "reps": self.reps,
            "comments": self.comments.clone().unwrap_or_default(),
            "suggestion": self.suggestion.clone().unwrap_or_default(),
            "video": self.video.clone().unwrap_or_default(),
            "cardImage": self.card_image.clone().unwrap_or_default(),
        }))
    }

    fn form_value(&self, top_level: bool) -> Value {
        let mut value = json!({
            "workoutName": self.name.trim(),
            "setType": self.set_type,
            "video": self.video.clone().unwrap_or_default(),
            "muscleGroup": self.muscle_group(),
            "reps": self.reps,
            "additionalComments": self.comments.clone().unwrap_or_default(),
            "workoutSuggestion": self.suggestion.clone().unwrap_or_default(),
        });
        if top_level {
            value["alternativeCount"] = json!(self.alternatives.len());
            value["alternativeExercises"] = self
                .alternatives
                .iter()
                .map(|alternative| alternative.form_value(false))
                .collect();
            value["selectedCategory"] = json!(self.muscle_group());
            if let Some(card_image) = &self.card_image {
                value["cardImage"] = json!(card_image);
            }
        }
        value
    }
}

/// A new meal catalog entry. The image travels in the same multipart body.
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub name: String,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub image: MediaFile,
}

impl CreateMeal {
    pub fn validate(&self) -> Result<()> {
        required_name(&self.name, "name")?;
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("fat", self.fat),
            ("carbs", self.carbs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AdminError::invalid_input(field)
                    .with_reason(format!("{field} must be a non-negative number")));
            }
        }
        Ok(())
    }

    /// Text fields of the multipart body, in the order the backend reads
    /// them.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("mealType", self.meal_type.as_str().to_string()),
            ("calories", self.calories.to_string()),
            ("protein", self.protein.to_string()),
            ("fat", self.fat.to_string()),
            ("carbs", self.carbs.to_string()),
        ]
    }
}

/// A new supplement.
#[derive(Debug, Clone, Default)]
pub struct CreateSupplement {
    pub name: String,
    pub description: String,
}

impl CreateSupplement {
    pub fn body(&self) -> Result<Value> {
        Ok(json!({
            "name": required_name(&self.name, "name")?,
            "description": self.description.trim(),
        }))
    }
}

fn required_name<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AdminError::invalid_input(field).with_reason(format!("{field} is required")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> ExerciseForm {
        ExerciseForm {
            name: " Squat ".to_string(),
            muscle_group: "legs".to_string(),
            set_type: "3x".to_string(),
            reps: "10".to_string(),
            ..ExerciseForm::default()
        }
    }

    #[test]
    fn category_names_are_trimmed_and_required() {
        let body = CreateCategory {
            name: "  Chest ".to_string(),
        }
        .body()
        .unwrap();
        assert_eq!(body, json!({"name": "Chest"}));

        let err = RenameCategory {
            id: "c1".to_string(),
            name: "   ".to_string(),
        }
        .body()
        .unwrap_err();
        assert_eq!(err.user_message(), "name is required");
    }

    #[test]
    fn exercise_save_body_uses_form_field_names() {
        let mut form = squat();
        form.alternatives.push(ExerciseForm {
            name: "Leg Press".to_string(),
            muscle_group: "legs".to_string(),
            ..ExerciseForm::default()
        });

        let body = form.save_body().unwrap();
        assert_eq!(body["workoutName"], "Squat");
        assert_eq!(body["muscleGroup"], "Legs");
        assert_eq!(body["selectedCategory"], "Legs");
        assert_eq!(body["alternativeCount"], 1);
        assert_eq!(body["alternativeExercises"][0]["workoutName"], "Leg Press");
        assert!(body["alternativeExercises"][0].get("alternativeCount").is_none());
    }

    #[test]
    fn exercise_update_body_uses_record_field_names() {
        let body = squat().update_body().unwrap();
        assert_eq!(body["name"], "Squat");
        assert_eq!(body["setType"], "3x");
        assert_eq!(body["comments"], "");
    }

    #[test]
    fn alternatives_are_validated_too() {
        let mut form = squat();
        form.alternatives.push(ExerciseForm::default());
        assert!(form.save_body().is_err());
    }

    #[test]
    fn meal_macros_must_be_non_negative() {
        let meal = CreateMeal {
            name: "Oats".to_string(),
            meal_type: MealType::Breakfast,
            calories: 300.0,
            protein: -1.0,
            fat: 5.0,
            carbs: 50.0,
            image: MediaFile::new("oats.png", vec![1]),
        };
        let err = meal.validate().unwrap_err();
        assert!(matches!(err, AdminError::InvalidInput { ref field, .. } if field == "protein"));
        assert_eq!(meal.text_fields()[1], ("mealType", "breakfast".to_string()));
    }
}
