mod common;

use axum::http::{Method, StatusCode};
use coach_core::views::{Categories, Exercises};
use coach_core::{
    AdminError, ApiClient, CreateCategory, CreateMeal, CreateSupplement, DecodeMode,
    ExerciseForm, MealType, MediaFile, RenameCategory,
};
use common::{create_test_admin, exercise_catalog, Route, StubBackend};
use serde_json::json;

#[tokio::test]
async fn test_collections_are_sorted_newest_first() {
    let backend = StubBackend::start(vec![Route::get("/admin/workout/all", exercise_catalog())]).await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let exercises = admin.list_exercises().await.expect("Failed to list exercises");
    let ids: Vec<_> = exercises.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e3", "e2", "e1"]);
}

#[tokio::test]
async fn test_bare_array_and_data_envelopes_decode_alike() {
    let backend = StubBackend::start(vec![
        Route::get(
            "/admin/workout-category/all",
            json!({"success": true, "data": [{"_id": "c1", "name": "Chest"}]}),
        ),
        Route::get(
            "/admin/supplement/all",
            json!([{"_id": "s1", "name": "Creatine", "description": "5g daily"}]),
        ),
    ])
    .await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let categories = admin.list_categories().await.unwrap();
    assert_eq!(categories[0].name, "Chest");
    let supplements = admin.list_supplements().await.unwrap();
    assert_eq!(supplements[0].description, "5g daily");
}

#[tokio::test]
async fn test_unknown_envelope_depends_on_decode_mode() {
    let backend = StubBackend::start(vec![Route::get(
        "/admin/meal/all",
        json!({"success": true, "count": 0}),
    )])
    .await;

    let strict = ApiClient::new(&backend.base_url).with_decode_mode(DecodeMode::Strict);
    let result = strict
        .get_collection::<coach_core::Meal>("/admin/meal/all")
        .await;
    assert!(matches!(result, Err(AdminError::UnexpectedShape { .. })));

    let lenient = ApiClient::new(&backend.base_url).with_decode_mode(DecodeMode::Lenient);
    let meals = lenient
        .get_collection::<coach_core::Meal>("/admin/meal/all")
        .await
        .unwrap();
    assert!(meals.is_empty());
}

#[tokio::test]
async fn test_backend_error_field_is_surfaced() {
    let backend = StubBackend::start(vec![Route::post(
        "/admin/workout-category/save",
        json!({"error": "Category already exists"}),
    )
    .with_status(StatusCode::CONFLICT)])
    .await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let error = admin
        .create_category(&CreateCategory {
            name: "Chest".to_string(),
        })
        .await
        .unwrap_err();
    match error {
        AdminError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Category already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_category_names_are_trimmed_before_sending() {
    let backend = StubBackend::start(vec![
        Route::post(
            "/admin/workout-category/save",
            json!({"success": true, "data": {"_id": "c9", "name": "Back"}}),
        ),
        Route::put("/admin/workout-category/update/c9", json!({"success": true})),
    ])
    .await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let saved = admin
        .create_category(&CreateCategory {
            name: "  Back ".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(saved.id.as_deref(), Some("c9"));
    assert_eq!(
        backend.last(Method::POST, "/admin/workout-category/save").json(),
        json!({"name": "Back"})
    );

    admin
        .rename_category(&RenameCategory {
            id: "c9".to_string(),
            name: "Upper Back".to_string(),
        })
        .await
        .unwrap();
    let sent = backend.last(Method::PUT, "/admin/workout-category/update/c9");
    assert_eq!(sent.json(), json!({"name": "Upper Back"}));
    assert_eq!(sent.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_blank_category_never_reaches_the_backend() {
    let backend = StubBackend::start(vec![]).await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let result = admin
        .create_category(&CreateCategory {
            name: "   ".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AdminError::InvalidInput { .. })));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_success_false_is_a_rejection() {
    let backend = StubBackend::start(vec![Route::post(
        "/admin/supplement/create",
        json!({"success": false, "message": "Supplement exists"}),
    )])
    .await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let error = admin
        .create_supplement(&CreateSupplement {
            name: "Creatine".to_string(),
            description: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(error, AdminError::Rejected { .. }));
    assert_eq!(error.user_message(), "Supplement exists");
}

#[tokio::test]
async fn test_exercise_create_uses_form_field_names() {
    let backend = StubBackend::start(vec![Route::post(
        "/admin/workout/save",
        json!({"success": true, "workout": {"_id": "e7"}}),
    )])
    .await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let form = ExerciseForm {
        name: "Dips".to_string(),
        muscle_group: "chest".to_string(),
        set_type: "straight".to_string(),
        reps: "10".to_string(),
        alternatives: vec![ExerciseForm {
            name: "Bench Dips".to_string(),
            muscle_group: "chest".to_string(),
            ..ExerciseForm::default()
        }],
        ..ExerciseForm::default()
    };
    let saved = admin.create_exercise(&form).await.unwrap();
    assert_eq!(saved.id.as_deref(), Some("e7"));

    let body = backend.last(Method::POST, "/admin/workout/save").json();
    assert_eq!(body["workoutName"], "Dips");
    assert_eq!(body["muscleGroup"], "Chest");
    assert_eq!(body["selectedCategory"], "Chest");
    assert_eq!(body["alternativeCount"], 1);
    assert_eq!(body["alternativeExercises"][0]["workoutName"], "Bench Dips");
}

#[tokio::test]
async fn test_find_exercise_searches_alternatives() {
    let backend = StubBackend::start(vec![Route::get(
        "/admin/workout/all",
        json!({"workouts": [{
            "_id": "e1",
            "name": "Bench Press",
            "muscleGroup": "Chest",
            "alternatives": [{"_id": "e1-alt", "name": "Floor Press", "muscleGroup": "Chest"}],
        }]}),
    )])
    .await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let found = admin.find_exercise("e1-alt").await.unwrap();
    assert_eq!(found.name, "Floor Press");
    assert!(matches!(
        admin.find_exercise("missing").await,
        Err(AdminError::NotFound { kind: "exercise", .. })
    ));
}

#[tokio::test]
async fn test_meal_create_is_one_multipart_request() {
    let backend = StubBackend::start(vec![Route::post(
        "/admin/meal/save",
        json!({"success": true, "meal": {"_id": "m1"}}),
    )])
    .await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let saved = admin
        .create_meal(CreateMeal {
            name: "Oats".to_string(),
            meal_type: MealType::Breakfast,
            calories: 350.0,
            protein: 12.0,
            fat: 6.0,
            carbs: 60.0,
            image: MediaFile::new("oats.png", vec![0x89, 0x50, 0x4e, 0x47]),
        })
        .await
        .unwrap();
    assert_eq!(saved.id.as_deref(), Some("m1"));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0].content_type.clone().unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
    let body = requests[0].body_text();
    assert!(body.contains("name=\"mealType\""));
    assert!(body.contains("breakfast"));
    assert!(body.contains("filename=\"oats.png\""));
}

#[tokio::test]
async fn test_meal_create_rejects_non_images() {
    let backend = StubBackend::start(vec![]).await;
    let (_temp_dir, admin, _) = create_test_admin(&backend.base_url).await;

    let result = admin
        .create_meal(CreateMeal {
            name: "Oats".to_string(),
            meal_type: MealType::Breakfast,
            calories: 350.0,
            protein: 12.0,
            fat: 6.0,
            carbs: 60.0,
            image: MediaFile::new("oats.txt", b"not an image".to_vec()),
        })
        .await;
    assert!(matches!(result, Err(AdminError::InvalidInput { .. })));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_list_view_delete_refreshes_and_notifies() {
    let backend = StubBackend::start(vec![
        Route::get("/admin/workout/all", exercise_catalog()),
        Route::delete("/admin/workout/delete/e2", json!({"success": true})),
    ])
    .await;
    let (_temp_dir, admin, notifier) = create_test_admin(&backend.base_url).await;

    let mut view = admin.view::<Exercises>();
    assert_eq!(view.refresh().await.len(), 3);

    view.request_delete("e2").unwrap();
    let removed = view.confirm_delete().await.unwrap();
    assert_eq!(removed.id, "e2");
    assert_eq!(notifier.successes(), ["Exercise deleted successfully"]);

    let listings = backend
        .requests()
        .iter()
        .filter(|r| r.method == Method::GET)
        .count();
    assert_eq!(listings, 2);
    assert!(view.pending_delete().is_none());
}

#[tokio::test]
async fn test_failed_listing_empties_the_view() {
    let backend = StubBackend::start(vec![Route::get(
        "/admin/workout-category/all",
        json!({"error": "Database unavailable"}),
    )
    .with_status(StatusCode::INTERNAL_SERVER_ERROR)])
    .await;
    let (_temp_dir, admin, notifier) = create_test_admin(&backend.base_url).await;

    let mut view = admin.view::<Categories>();
    assert!(view.refresh().await.is_empty());
    assert_eq!(
        notifier.errors(),
        ["Failed to load categories: Database unavailable"]
    );
}
