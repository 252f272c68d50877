#[cfg(test)]
mod model_tests {
    use serde_json::json;

    use crate::models::{
        remove_day, sort_newest_first, Booking, BookingType, Day, Exercise, MealOption, MealType,
        NutritionTotals, PlanKind, PlanPayload, PlanType, RawRecord, Record, UserMealPlan,
        WorkoutPlan,
    };

    fn raw(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    fn option(id: &str, meal_type: MealType, calories: f64) -> MealOption {
        MealOption {
            id: id.to_string(),
            food_name: format!("Food {id}"),
            meal_type,
            calories,
            protein: 10.0,
            fat: 5.0,
            carbs: 20.0,
            image: None,
            preparation: None,
        }
    }

    #[test]
    fn newest_first_uses_created_at() {
        let mut records = vec![
            raw(json!({"_id": "b", "createdAt": "2024-01-01"})),
            raw(json!({"_id": "a", "createdAt": "2024-01-02"})),
        ];
        sort_newest_first(&mut records);
        let ids: Vec<&str> = records.iter().map(Record::id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn object_id_time_stands_in_for_created_at() {
        // 0x65000000 is 2023-09-12, 0x66000000 is 2024-03-24
        let mut records = vec![
            raw(json!({"_id": "no-time"})),
            raw(json!({"_id": "650000000000000000000000"})),
            raw(json!({"_id": "x", "createdAt": "2024-01-01T00:00:00Z"})),
            raw(json!({"_id": "660000000000000000000000"})),
        ];
        sort_newest_first(&mut records);
        let ids: Vec<&str> = records.iter().map(Record::id).collect();
        assert_eq!(
            ids,
            [
                "660000000000000000000000",
                "x",
                "650000000000000000000000",
                "no-time"
            ]
        );
    }

    #[test]
    fn raw_records_keep_unmodeled_fields() {
        let record = raw(json!({"_id": "1", "name": "Whey", "extra": 3}));
        assert_eq!(record.fields.get("name"), Some(&json!("Whey")));
        assert!(record.created_at.is_none());
    }

    #[test]
    fn bookings_are_flattened_from_meetings() {
        let booking: Booking = serde_json::from_value(json!({
            "_id": "m1",
            "userId": {"fullname": "Ada", "email": "ada@example.com"},
            "location": "Zoom",
            "time": "10:00",
            "date": "2024-05-01T09:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(booking.name, "Ada");
        assert_eq!(booking.booking_type, BookingType::Video);
        assert_eq!(booking.profile_image, "/placeholder.png");
        assert_eq!(booking.date.map(|d| d.to_string()).as_deref(), Some("2024-05-01"));
        assert_eq!(booking.raw_date.as_deref(), Some("2024-05-01T09:00:00.000Z"));

        let anonymous: Booking =
            serde_json::from_value(json!({"_id": "m2", "location": "Gym"})).unwrap();
        assert_eq!(anonymous.name, "Unknown");
        assert_eq!(anonymous.email, "Unknown");
        assert_eq!(anonymous.booking_type, BookingType::InPerson);
        assert!(anonymous.date.is_none());
    }

    #[test]
    fn flat_workout_plans_are_normalized_into_days() {
        let plan: WorkoutPlan = serde_json::from_value(json!({
            "_id": "p1",
            "workoutPlanId": "muscle-mass",
            "selectedDays": [2],
            "dayCategories": {"1": "Chest", "2": "Legs"},
            "dayExercises": {"1": ["e1", "e2"], "2": ["e3"]},
            "exercises": [{"_id": "e1", "name": "Bench Press", "muscleGroup": "Chest"}],
            "createdAt": "2024-02-01"
        }))
        .unwrap();

        assert_eq!(plan.plan_type, Some(PlanType::MuscleMass));
        assert_eq!(plan.title, "Workout Plan for Muscle Mass");
        assert_eq!(plan.days.len(), 2);
        assert_eq!(plan.days[0].category, "Chest");
        assert_eq!(plan.days[0].exercises[0].name, "Bench Press");
        assert_eq!(plan.days[0].exercise_ids(), ["e1", "e2"]);
        assert_eq!(plan.days[1].exercise_ids(), ["e3"]);
    }

    #[test]
    fn day_layout_accepts_ids_or_objects() {
        let plan: WorkoutPlan = serde_json::from_value(json!({
            "_id": "p2",
            "title": "Custom",
            "days": [{"dayNumber": 1, "category": "Back", "exercises": ["e9", {"_id": "e10", "name": "Row"}]}]
        }))
        .unwrap();
        assert_eq!(plan.days[0].exercise_ids(), ["e9", "e10"]);
        assert_eq!(plan.days[0].exercises[1].name, "Row");
        assert!(plan.plan_type.is_none());
    }

    #[test]
    fn exercise_group_matching_ignores_case() {
        let mut exercise = Exercise::stub("e1");
        exercise.category = Some("chest".into());
        assert!(exercise.belongs_to("Chest"));
        exercise.muscle_group = Some("Back".into());
        assert!(!exercise.belongs_to("Chest"));
        assert!(!Exercise::stub("e2").belongs_to("Chest"));
    }

    #[test]
    fn meal_plan_totals_sum_every_day() {
        let plan: UserMealPlan = serde_json::from_value(json!({
            "_id": "mp1",
            "title": "Cut",
            "days": [
                {"day": 1, "mealOptions": [
                    {"id": 1, "foodName": "Eggs", "mealType": "breakfast", "calories": 200, "protein": 12, "fat": 14, "carbs": 1},
                    {"id": "2", "foodName": "Rice", "mealType": "lunch", "calories": "300", "protein": 6, "fat": 1, "carbs": 60}
                ]},
                {"day": 2, "mealOptions": [
                    {"id": 3, "foodName": "Nuts", "mealType": "snack", "calories": 150, "protein": 5, "fat": 12, "carbs": 4}
                ]}
            ]
        }))
        .unwrap();

        assert_eq!(
            plan.totals(),
            NutritionTotals {
                calories: 650.0,
                protein: 23.0,
                fat: 27.0,
                carbs: 65.0
            }
        );
        assert_eq!(plan.day(2).unwrap().count_of(MealType::Snacks), 1);
        assert_eq!(plan.day(1).unwrap().meal_options[0].id, "1");
    }

    #[test]
    fn option_totals_sum() {
        let options = [
            option("a", MealType::Breakfast, 100.0),
            option("b", MealType::Dinner, 250.0),
        ];
        let totals: NutritionTotals = options.iter().sum();
        assert_eq!(totals.calories, 350.0);
        assert_eq!(totals.protein, 20.0);
    }

    #[test]
    fn removing_a_day_renumbers_and_moves_pointer() {
        let mut days: Vec<Day> = (1..=4).map(Day::new).collect();
        days[2].category = Some("Legs".into());

        let active = remove_day(&mut days, 2, 4).unwrap();
        assert_eq!(active, 3);
        let numbers: Vec<u32> = days.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(days[1].category.as_deref(), Some("Legs"));

        assert_eq!(remove_day(&mut days, 2, 2).unwrap(), 1);
        assert_eq!(remove_day(&mut days, 2, 1).unwrap(), 1);
        assert_eq!(days.len(), 1);

        let error = remove_day(&mut days, 1, 1).unwrap_err();
        assert_eq!(error.user_message(), "Cannot delete the last remaining day");
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn removing_a_missing_day_fails() {
        let mut days: Vec<Day> = (1..=3).map(Day::new).collect();
        assert!(remove_day(&mut days, 9, 1).is_err());
        assert_eq!(days.len(), 3);
    }

    #[test]
    fn completion_rules_depend_on_kind() {
        let mut day = Day::new(1);
        day.category = Some("Chest".into());
        assert!(!day.is_completed(PlanKind::Workout));
        day.toggle("e1");
        assert!(day.is_completed(PlanKind::Workout));

        let mut meal_day = Day::new(1);
        meal_day.toggle("m1");
        meal_day.toggle("m2");
        assert!(!meal_day.is_completed(PlanKind::Meal));
        meal_day.toggle("m3");
        assert!(meal_day.is_completed(PlanKind::Meal));
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut day = Day::new(1);
        assert!(day.toggle("e1"));
        assert!(day.toggle("e2"));
        assert!(!day.toggle("e1"));
        assert_eq!(day.items, ["e2"]);
    }

    #[test]
    fn payload_reports_incomplete_and_gapped_days() {
        let mut payload = PlanPayload {
            kind: PlanKind::Workout,
            plan_type: PlanType::BulkUp,
            days: (1..=3).map(Day::new).collect(),
        };
        payload.days[0].category = Some("Chest".into());
        payload.days[0].items.push("e1".into());
        assert_eq!(payload.incomplete_days(), [2, 3]);
        assert!(payload.is_contiguous());
        assert_eq!(payload.day_count(), 3);

        payload.days.remove(1);
        assert!(!payload.is_contiguous());
    }

    #[test]
    fn enums_parse_wire_spellings() {
        assert_eq!("muscle_mass".parse::<PlanType>().unwrap(), PlanType::MuscleMass);
        assert_eq!("snack".parse::<MealType>().unwrap(), MealType::Snacks);
        assert_eq!(
            serde_json::to_value(PlanType::WeightLoss).unwrap(),
            json!("weight-loss")
        );
        assert!("cardio".parse::<PlanType>().is_err());
    }
}
