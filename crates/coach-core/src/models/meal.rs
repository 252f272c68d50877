//! Meal catalog records, meal options and user meal plans.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{MealType, Numbered, UserProfile};

/// A meal from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub meal_type: MealType,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub calories: f64,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub protein: f64,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub fat: f64,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub carbs: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

/// A food entry placed in one slot of a meal plan day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealOption {
    #[serde(default, deserialize_with = "super::lenient::text")]
    pub id: String,

    #[serde(default)]
    pub food_name: String,

    pub meal_type: MealType,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub calories: f64,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub protein: f64,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub fat: f64,

    #[serde(default, deserialize_with = "super::lenient::number")]
    pub carbs: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

impl From<&Meal> for MealOption {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            food_name: meal.name.clone(),
            meal_type: meal.meal_type,
            calories: meal.calories,
            protein: meal.protein,
            fat: meal.fat,
            carbs: meal.carbs,
            image: meal.image.clone(),
            preparation: None,
        }
    }
}

/// Calorie and macronutrient sums.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl From<&MealOption> for NutritionTotals {
    fn from(option: &MealOption) -> Self {
        Self {
            calories: option.calories,
            protein: option.protein,
            fat: option.fat,
            carbs: option.carbs,
        }
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sum<&'a MealOption> for NutritionTotals {
    fn sum<I: Iterator<Item = &'a MealOption>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, option| acc + Self::from(option))
    }
}

/// One day of a user meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealDay {
    pub day: u32,

    #[serde(default)]
    pub meal_options: Vec<MealOption>,
}

impl MealDay {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            meal_options: Vec::new(),
        }
    }

    pub fn totals(&self) -> NutritionTotals {
        self.meal_options.iter().sum()
    }

    pub fn options_of(&self, meal_type: MealType) -> impl Iterator<Item = &MealOption> {
        self.meal_options
            .iter()
            .filter(move |option| option.meal_type == meal_type)
    }

    pub fn count_of(&self, meal_type: MealType) -> usize {
        self.options_of(meal_type).count()
    }
}

impl Numbered for MealDay {
    fn day_number(&self) -> u32 {
        self.day
    }

    fn set_day_number(&mut self, day_number: u32) {
        self.day = day_number;
    }
}

/// A meal plan assigned to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserMealPlan {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,

    #[serde(default)]
    pub title: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,

    #[serde(default)]
    pub days: Vec<MealDay>,

    #[serde(
        default,
        deserialize_with = "super::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

impl UserMealPlan {
    /// Sum over every option of every day.
    pub fn totals(&self) -> NutritionTotals {
        self.days.iter().map(MealDay::totals).fold(NutritionTotals::default(), Add::add)
    }

    pub fn day(&self, day: u32) -> Option<&MealDay> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut MealDay> {
        self.days.iter_mut().find(|d| d.day == day)
    }
}
