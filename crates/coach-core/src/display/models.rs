//! Display implementations for domain models.
//!
//! Records render as markdown: a `#` header with id and name, a bullet list
//! of metadata, then nested sections for days or meal slots.

use std::fmt;

use super::datetime::{LocalDateTime, MaybeDateTime};
use crate::models::{
    Booking, Category, Day, Draft, Exercise, Meal, MealDay, MealOption, MealType,
    NutritionTotals, OrphanedUpload, PersonalizedWorkoutPlan, PlanPayload, Supplement,
    UserMealPlan, UserProfile, WorkoutDay, WorkoutPlan,
};

impl fmt::Display for NutritionTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal, {:.1}g protein, {:.1}g fat, {:.1}g carbs",
            self.calories, self.protein, self.fat, self.carbs
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", MaybeDateTime(self.created_at.as_ref()))
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Muscle group: {}", self.group().unwrap_or("none"))?;
        if !self.set_type.is_empty() {
            writeln!(f, "- Set type: {}", self.set_type)?;
        }
        if !self.reps.is_empty() {
            writeln!(f, "- Reps: {}", self.reps)?;
        }
        if let Some(url) = self.media_url() {
            writeln!(f, "- Video: {url}")?;
        }
        if let Some(comments) = &self.comments {
            writeln!(f, "\n{comments}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            writeln!(f, "\n> {suggestion}")?;
        }
        if !self.alternatives.is_empty() {
            writeln!(f, "\n## Alternatives")?;
            writeln!(f)?;
            for alternative in &self.alternatives {
                writeln!(f, "- {} ({})", alternative.name, alternative.id)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Meal type: {}", self.meal_type)?;
        writeln!(
            f,
            "- Nutrition: {}",
            NutritionTotals {
                calories: self.calories,
                protein: self.protein,
                fat: self.fat,
                carbs: self.carbs,
            }
        )?;
        if let Some(image) = &self.image {
            writeln!(f, "- Image: {image}")?;
        }
        writeln!(f, "- Created: {}", MaybeDateTime(self.created_at.as_ref()))
    }
}

impl fmt::Display for MealOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} ({}): {}",
            self.food_name,
            self.id,
            NutritionTotals::from(self)
        )
    }
}

impl fmt::Display for Supplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", MaybeDateTime(self.created_at.as_ref()))?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Email: {}", self.email)?;
        match self.date {
            Some(date) => writeln!(f, "- Date: {date} {}", self.time)?,
            None => writeln!(f, "- Date: unknown {}", self.time)?,
        }
        writeln!(f, "- Type: {}", self.booking_type)?;
        if !self.location.is_empty() {
            writeln!(f, "- Location: {}", self.location)?;
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- User: {}", self.display_name())?;
        if let Some(email) = &self.email {
            writeln!(f, "- Email: {email}")?;
        }
        if let Some(age) = &self.age {
            writeln!(f, "- Age: {age}")?;
        }
        if let Some(gender) = &self.gender {
            writeln!(f, "- Gender: {gender}")?;
        }
        if self.weight > 0.0 {
            writeln!(f, "- Weight: {} kg", self.weight)?;
        }
        if self.height > 0.0 {
            writeln!(f, "- Height: {} ft", self.height_feet())?;
        }
        if let Some(goal) = self.goal_label() {
            writeln!(f, "- Goal: {goal}")?;
        }
        if let Some(level) = self.activity_label() {
            writeln!(f, "- Activity level: {level}")?;
        }
        if let Some(days) = &self.workout_days {
            writeln!(f, "- Workout days: {days}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WorkoutDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = if self.category.is_empty() {
            "no category"
        } else {
            &self.category
        };
        writeln!(f, "### Day {} ({category})", self.day_number)?;
        writeln!(f)?;
        if self.exercises.is_empty() {
            return writeln!(f, "No exercises selected.");
        }
        for exercise in &self.exercises {
            if exercise.name.is_empty() {
                writeln!(f, "- {}", exercise.id)?;
            } else {
                writeln!(f, "- {} ({})", exercise.name, exercise.id)?;
            }
        }
        Ok(())
    }
}

fn write_workout_days(f: &mut fmt::Formatter<'_>, days: &[WorkoutDay]) -> fmt::Result {
    if days.is_empty() {
        return writeln!(f, "\nNo days in this plan.");
    }
    writeln!(f, "\n## Days")?;
    for day in days {
        writeln!(f)?;
        write!(f, "{day}")?;
    }
    Ok(())
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        if let Some(plan_type) = self.plan_type {
            writeln!(f, "- Type: {}", plan_type.label())?;
        }
        writeln!(f, "- Days: {}", self.days.len())?;
        writeln!(f, "- Created: {}", MaybeDateTime(self.created_at.as_ref()))?;
        write_workout_days(f, &self.days)
    }
}

impl fmt::Display for PersonalizedWorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. Plan for {}", self.id, self.user.display_name())?;
        writeln!(f)?;
        write!(f, "{}", self.user)?;
        writeln!(f, "- Created: {}", MaybeDateTime(self.created_at.as_ref()))?;
        write_workout_days(f, &self.days)
    }
}

impl fmt::Display for MealDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Day {} ({})", self.day, self.totals())?;
        for meal_type in MealType::ALL {
            let options: Vec<&MealOption> = self.options_of(meal_type).collect();
            if options.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "**{meal_type}**")?;
            writeln!(f)?;
            for option in options {
                write!(f, "{option}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for UserMealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        if let Some(plan_type) = &self.plan_type {
            writeln!(f, "- Type: {plan_type}")?;
        }
        if let Some(user) = &self.user {
            writeln!(f, "- User: {}", user.display_name())?;
        }
        writeln!(f, "- Totals: {}", self.totals())?;
        writeln!(f, "- Created: {}", MaybeDateTime(self.created_at.as_ref()))?;
        for day in &self.days {
            writeln!(f)?;
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self.category.as_deref().unwrap_or("no category");
        if self.items.is_empty() {
            writeln!(f, "- Day {} ({category}): nothing selected", self.day_number)
        } else {
            writeln!(
                f,
                "- Day {} ({category}): {}",
                self.day_number,
                self.items.join(", ")
            )
        }
    }
}

impl fmt::Display for PlanPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} plan for {} over {} days",
            self.kind,
            self.plan_type.label(),
            self.day_count()
        )?;
        for day in &self.days {
            write!(f, "  {day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Draft {}", self.id)?;
        writeln!(f)?;
        write!(f, "{}", self.payload)?;
        writeln!(f, "- Saved: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Last attempt: {}", LocalDateTime(&self.updated_at))?;
        if let Some(error) = &self.last_error {
            writeln!(f, "- Last error: {error}")?;
        }
        Ok(())
    }
}

impl fmt::Display for OrphanedUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {} ({})", self.kind, self.url, self.reason)
    }
}
