//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{
    Category, Draft, Exercise, Meal, MealOption, PersonalizedWorkoutPlan, Supplement,
    UserMealPlan, WorkoutPlan,
};

/// A record that can be named in an outcome line.
pub trait Labeled {
    /// Singular noun, e.g. `exercise`.
    fn noun() -> &'static str;

    fn label_id(&self) -> String;

    fn label_name(&self) -> &str;
}

macro_rules! labeled {
    ($ty:ty, $noun:literal, $name:ident) => {
        impl Labeled for $ty {
            fn noun() -> &'static str {
                $noun
            }

            fn label_id(&self) -> String {
                self.id.to_string()
            }

            fn label_name(&self) -> &str {
                &self.$name
            }
        }
    };
}

labeled!(Category, "category", name);
labeled!(Exercise, "exercise", name);
labeled!(Meal, "meal", name);
labeled!(MealOption, "meal option", food_name);
labeled!(Supplement, "supplement", name);
labeled!(WorkoutPlan, "workout plan", title);
labeled!(UserMealPlan, "meal plan", title);

impl Labeled for PersonalizedWorkoutPlan {
    fn noun() -> &'static str {
        "personalized plan"
    }

    fn label_id(&self) -> String {
        self.id.clone()
    }

    fn label_name(&self) -> &str {
        self.user.display_name()
    }
}

impl Labeled for Draft {
    fn noun() -> &'static str {
        "draft"
    }

    fn label_id(&self) -> String {
        self.id.to_string()
    }

    fn label_name(&self) -> &str {
        self.payload.plan_type.label()
    }
}

/// Wrapper for a freshly created record.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Labeled + fmt::Display> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::noun(), self.resource.label_id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for an updated record and the changes applied to it.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Labeled + fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::noun(), self.resource.label_id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for a deleted record.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Labeled> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::noun(),
            self.resource.label_name(),
            self.resource.label_id()
        )
    }
}
