//! Coach CLI Application
//!
//! Command-line admin console for the Coach fitness backend.

mod args;
mod cli;
mod handlers;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use coach_core::{AdminBuilder, DecodeMode};
use handlers::Cli;
use log::info;
use renderer::{StatusNotifier, TerminalRenderer};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        base_url,
        database_file,
        no_color,
        strict_decoding,
        command,
    } = Args::parse();

    let admin = AdminBuilder::new()
        .with_base_url(Some(base_url))
        .with_database_path(database_file)
        .with_decode_mode(strict_decoding.then_some(DecodeMode::Strict))
        .with_notifier(Arc::new(StatusNotifier))
        .build()
        .await
        .context("Failed to initialize admin")?;

    info!("Coach started against {}", admin.client().base_url());

    let cli = Cli::new(admin, TerminalRenderer::new(!no_color));

    match command {
        Some(WorkoutPlan { command }) => cli.handle_workout_plan_command(command).await,
        Some(Personalized { command }) => cli.handle_personalized_command(command).await,
        Some(Category { command }) => cli.handle_category_command(command).await,
        Some(Exercise { command }) => cli.handle_exercise_command(command).await,
        Some(Meal { command }) => cli.handle_meal_command(command).await,
        Some(MealPlan { command }) => cli.handle_meal_plan_command(command).await,
        Some(Supplement { command }) => cli.handle_supplement_command(command).await,
        Some(Booking { command }) => cli.handle_booking_command(command).await,
        Some(Draft { command }) => cli.handle_draft_command(command).await,
        None => cli.list_workout_plans().await,
    }
}
