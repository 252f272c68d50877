use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use assert_cmd::Command;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

type Routes = HashMap<(Method, String), (StatusCode, Value)>;
type Hits = Arc<Mutex<Vec<(Method, String)>>>;

/// A canned backend serving fixed JSON per method and path.
struct Backend {
    base_url: String,
    hits: Hits,
}

impl Backend {
    fn start(routes: Vec<(Method, &str, StatusCode, Value)>) -> Self {
        let routes: Routes = routes
            .into_iter()
            .map(|(method, path, status, body)| ((method, path.to_string()), (status, body)))
            .collect();
        let hits = Arc::new(Mutex::new(Vec::new()));
        let state = (Arc::new(routes), Arc::clone(&hits));
        let (tx, rx) = mpsc::channel::<SocketAddr>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("Failed to start runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind stub backend");
                tx.send(listener.local_addr().unwrap()).unwrap();
                let app = Router::new().fallback(respond).with_state(state);
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = rx.recv().expect("Stub backend did not start");
        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    fn hits(&self, method: Method) -> usize {
        self.hits
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| *m == method)
            .count()
    }
}

async fn respond(
    State((routes, hits)): State<(Arc<Routes>, Hits)>,
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    hits.lock().unwrap().push((method.clone(), path.clone()));
    match routes.get(&(method, path.clone())) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("No route for {path}") })),
        ),
    }
}

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// A `coach` command with plain output against `backend`, storing drafts
/// under `temp_dir`.
fn coach_cmd(temp_dir: &TempDir, base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("coach").expect("Failed to find coach binary");
    cmd.arg("--no-color")
        .args(["--base-url", base_url])
        .arg("--database-file")
        .arg(temp_dir.path().join("cli_test.db"));
    cmd
}

fn exercise_catalog() -> Value {
    json!({"workouts": [
        {"_id": "e1", "name": "Bench Press", "muscleGroup": "Chest", "createdAt": "2024-01-01T00:00:00Z"},
        {"_id": "e2", "name": "Squat", "muscleGroup": "Legs", "createdAt": "2024-02-01T00:00:00Z"},
        {"_id": "e3", "name": "Row", "muscleGroup": "Back", "createdAt": "2024-03-01T00:00:00Z"},
    ]})
}

#[test]
fn test_cli_list_workout_plans() {
    let temp_dir = create_cli_test_environment();
    let backend = Backend::start(vec![(
        Method::GET,
        "/admin/workout-plan/all",
        StatusCode::OK,
        json!({"plans": [{"_id": "wp1", "type": "weight-loss", "days": []}]}),
    )]);

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["workout-plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# wp1. Workout Plan for Weight Loss"))
        .stdout(predicate::str::contains("No days in this plan."));
}

#[test]
fn test_cli_without_command_lists_workout_plans() {
    let temp_dir = create_cli_test_environment();
    let backend = Backend::start(vec![(
        Method::GET,
        "/admin/workout-plan/all",
        StatusCode::OK,
        json!([]),
    )]);

    coach_cmd(&temp_dir, &backend.base_url)
        .assert()
        .success()
        .stdout(predicate::str::contains("No workout plans found."));
}

#[test]
fn test_cli_list_empty_categories() {
    let temp_dir = create_cli_test_environment();
    let backend = Backend::start(vec![(
        Method::GET,
        "/admin/workout-category/all",
        StatusCode::OK,
        json!({"data": []}),
    )]);

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found."));
}

#[test]
fn test_cli_failed_plan_save_is_kept_as_draft() {
    let temp_dir = create_cli_test_environment();
    let backend = Backend::start(vec![
        (Method::GET, "/admin/workout/all", StatusCode::OK, exercise_catalog()),
        (
            Method::POST,
            "/admin/workout-plan/save",
            StatusCode::SERVICE_UNAVAILABLE,
            json!({"error": "Service unavailable"}),
        ),
    ]);

    coach_cmd(&temp_dir, &backend.base_url)
        .args([
            "workout-plan",
            "create",
            "--type",
            "bulk-up",
            "--day",
            "Chest=e1",
            "--day",
            "legs=e2",
            "--day",
            "Back=e3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan kept as draft 1"));

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["draft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Draft 1"))
        .stdout(predicate::str::contains("Last error: Service unavailable"));

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["draft", "discard", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted draft"));

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["draft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found."));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let backend = Backend::start(vec![
        (Method::GET, "/admin/workout/all", StatusCode::OK, exercise_catalog()),
        (
            Method::DELETE,
            "/admin/workout/delete/e1",
            StatusCode::OK,
            json!({"success": true}),
        ),
    ]);

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["exercise", "delete", "e1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));
    assert_eq!(backend.hits(Method::DELETE), 0);

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["exercise", "delete", "e1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted exercise 'Bench Press' (ID: e1)"))
        .stderr(predicate::str::contains("Exercise deleted successfully"));
    assert_eq!(backend.hits(Method::DELETE), 1);
}

#[test]
fn test_cli_filters_exercises_by_category() {
    let temp_dir = create_cli_test_environment();
    let backend = Backend::start(vec![(
        Method::GET,
        "/admin/workout/all",
        StatusCode::OK,
        exercise_catalog(),
    )]);

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["exercise", "list", "--category", "legs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Squat"))
        .stdout(predicate::str::contains("Bench Press").not());
}

#[test]
fn test_cli_lists_bookings_for_a_day() {
    let temp_dir = create_cli_test_environment();
    let backend = Backend::start(vec![(
        Method::GET,
        "/admin/meeting/all",
        StatusCode::OK,
        json!({"data": [
            {"_id": "b1", "userId": {"fullname": "Ana", "email": "ana@example.com"},
             "time": "09:00", "location": "Zoom", "date": "2024-06-03T08:00:00Z"},
            {"_id": "b2", "userId": {"fullname": "Ben", "email": "ben@example.com"},
             "time": "10:00", "location": "Gym", "date": "2024-06-04T08:00:00Z"},
        ]}),
    )]);

    coach_cmd(&temp_dir, &backend.base_url)
        .args(["booking", "list", "--date", "2024-06-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookings on 2024-06-03"))
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("Ben").not());
}

#[test]
fn test_cli_meal_plan_show_reads_the_plan_file() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    std::fs::write(
        &plan_file,
        json!({
            "_id": "mp1",
            "title": "Lean Cut",
            "days": [{"day": 1, "mealOptions": [
                {"id": 7, "foodName": "Oats", "mealType": "breakfast", "calories": 300}
            ]}],
        })
        .to_string(),
    )
    .unwrap();

    coach_cmd(&temp_dir, "http://127.0.0.1:9")
        .args(["meal-plan", "show", "--plan-file"])
        .arg(&plan_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("# mp1. Lean Cut"))
        .stdout(predicate::str::contains("Oats"))
        .stdout(predicate::str::contains("Day 1:"));
}

#[test]
fn test_cli_rejects_malformed_day() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir, "http://127.0.0.1:9")
        .args(["workout-plan", "create", "--type", "bulk-up", "--day", "Chest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected CATEGORY=ID,ID"));
}

#[test]
fn test_cli_rejects_unknown_plan_type() {
    let temp_dir = create_cli_test_environment();

    coach_cmd(&temp_dir, "http://127.0.0.1:9")
        .args(["workout-plan", "create", "--type", "cardio", "--day", "Chest=e1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cardio"));
}

#[test]
fn test_cli_help_lists_commands() {
    Command::cargo_bin("coach")
        .expect("Failed to find coach binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workout-plan"))
        .stdout(predicate::str::contains("draft"));
}
