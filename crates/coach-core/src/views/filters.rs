use std::collections::{BTreeMap, BTreeSet};

use jiff::civil::Date;

use crate::error::{AdminError, Result};
use crate::models::{Booking, Exercise, MealType, UserMealPlan};

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<Date> {
    raw.trim().parse::<Date>().map_err(|e| {
        AdminError::invalid_input("date").with_reason(format!("expected YYYY-MM-DD: {e}"))
    })
}

/// Bookings on one UTC calendar day.
pub fn bookings_on(bookings: &[Booking], day: Date) -> Vec<&Booking> {
    bookings.iter().filter(|booking| booking.is_on(day)).collect()
}

/// Days that have at least one booking.
pub fn booking_dates(bookings: &[Booking]) -> BTreeSet<Date> {
    bookings.iter().filter_map(|booking| booking.date).collect()
}

/// Exercises in a category; `None` or `All` keeps everything.
pub fn exercises_in<'a>(exercises: &'a [Exercise], category: Option<&str>) -> Vec<&'a Exercise> {
    match category.filter(|c| !c.eq_ignore_ascii_case("all")) {
        Some(category) => exercises
            .iter()
            .filter(|exercise| exercise.belongs_to(category))
            .collect(),
        None => exercises.iter().collect(),
    }
}

/// Meal options per meal type on one day of a plan.
pub fn meal_type_counts(plan: &UserMealPlan, day: u32) -> BTreeMap<MealType, usize> {
    let mut counts: BTreeMap<MealType, usize> =
        MealType::ALL.iter().map(|meal_type| (*meal_type, 0)).collect();
    if let Some(meal_day) = plan.day(day) {
        for option in &meal_day.meal_options {
            *counts.entry(option.meal_type).or_default() += 1;
        }
    }
    counts
}
