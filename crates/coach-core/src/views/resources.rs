//! Backend collections the admin can browse.

use serde::de::DeserializeOwned;

use crate::models::{
    Booking, Category, Exercise, Meal, PersonalizedWorkoutPlan, Record, Supplement,
    UserMealPlan, WorkoutPlan,
};

/// A browsable backend collection.
pub trait Resource {
    type Record: DeserializeOwned + Record + Clone + Send;

    /// Singular noun used in notifications.
    const NOUN: &'static str;

    /// Plural noun used for empty lists.
    const PLURAL: &'static str;

    /// Listing endpoint; `None` when records reach the view another way.
    const LIST_PATH: Option<&'static str>;

    /// Delete endpoint for one record, when deletion is supported.
    fn delete_path(_id: &str) -> Option<String> {
        None
    }
}

pub struct Categories;

impl Resource for Categories {
    type Record = Category;
    const NOUN: &'static str = "category";
    const PLURAL: &'static str = "categories";
    const LIST_PATH: Option<&'static str> = Some("/admin/workout-category/all");
}

pub struct Exercises;

impl Resource for Exercises {
    type Record = Exercise;
    const NOUN: &'static str = "exercise";
    const PLURAL: &'static str = "exercises";
    const LIST_PATH: Option<&'static str> = Some("/admin/workout/all");

    fn delete_path(id: &str) -> Option<String> {
        Some(format!("/admin/workout/delete/{id}"))
    }
}

pub struct Meals;

impl Resource for Meals {
    type Record = Meal;
    const NOUN: &'static str = "meal";
    const PLURAL: &'static str = "meals";
    const LIST_PATH: Option<&'static str> = Some("/admin/meal/all");
}

pub struct Supplements;

impl Resource for Supplements {
    type Record = Supplement;
    const NOUN: &'static str = "supplement";
    const PLURAL: &'static str = "supplements";
    const LIST_PATH: Option<&'static str> = Some("/admin/supplement/all");
}

pub struct WorkoutPlans;

impl Resource for WorkoutPlans {
    type Record = WorkoutPlan;
    const NOUN: &'static str = "workout plan";
    const PLURAL: &'static str = "workout plans";
    const LIST_PATH: Option<&'static str> = Some("/admin/workout-plan/all");

    fn delete_path(id: &str) -> Option<String> {
        Some(format!("/admin/workout-plan/delete/{id}"))
    }
}

pub struct PersonalizedPlans;

impl Resource for PersonalizedPlans {
    type Record = PersonalizedWorkoutPlan;
    const NOUN: &'static str = "personalized plan";
    const PLURAL: &'static str = "personalized plans";
    const LIST_PATH: Option<&'static str> = Some("/admin/user-workout-plan/all");
}

pub struct UserMealPlans;

impl Resource for UserMealPlans {
    type Record = UserMealPlan;
    const NOUN: &'static str = "meal plan";
    const PLURAL: &'static str = "meal plans";
    const LIST_PATH: Option<&'static str> = None;

    fn delete_path(id: &str) -> Option<String> {
        Some(format!("/admin/meal/delete-user-meal-plan/{id}"))
    }
}

pub struct Bookings;

impl Resource for Bookings {
    type Record = Booking;
    const NOUN: &'static str = "booking";
    const PLURAL: &'static str = "bookings";
    const LIST_PATH: Option<&'static str> = Some("/admin/meeting/all");
}
