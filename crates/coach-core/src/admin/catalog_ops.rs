//! Catalog operations: categories, exercises, meals and supplements.

use log::info;
use reqwest::multipart::Form;

use super::Admin;
use crate::client::{RequestOptions, Saved};
use crate::error::{AdminError, Result};
use crate::models::{Category, Exercise, Meal, MediaKind, Supplement};
use crate::params::{CreateCategory, CreateMeal, CreateSupplement, ExerciseForm, RenameCategory};
use crate::upload::{self, MediaFile, UploadedMedia};
use crate::views::{
    delete_record, fetch_collection, Categories, Exercises, Meals, Supplements,
};

const CATEGORY_SAVE_PATH: &str = "/admin/workout-category/save";
const EXERCISE_SAVE_PATH: &str = "/admin/workout/save";
const MEAL_SAVE_PATH: &str = "/admin/meal/save";
const SUPPLEMENT_CREATE_PATH: &str = "/admin/supplement/create";

impl Admin {
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        fetch_collection::<Categories>(&self.client).await
    }

    /// Creates a category. Names are trimmed; blank names are rejected.
    pub async fn create_category(&self, params: &CreateCategory) -> Result<Saved> {
        let body = params.body()?;
        let response = self
            .client
            .mutate("Create category", CATEGORY_SAVE_PATH, RequestOptions::post_json(body))
            .await?;
        Ok(Saved::from_response(&response))
    }

    pub async fn rename_category(&self, params: &RenameCategory) -> Result<Saved> {
        let body = params.body()?;
        let path = format!("/admin/workout-category/update/{}", params.id);
        let response = self
            .client
            .mutate("Rename category", &path, RequestOptions::put_json(body))
            .await?;
        Ok(Saved::from_response(&response))
    }

    pub async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        fetch_collection::<Exercises>(&self.client).await
    }

    /// Looks an exercise up by id, searching alternatives as well.
    pub async fn find_exercise(&self, id: &str) -> Result<Exercise> {
        let exercises = self.list_exercises().await?;
        find_nested(&exercises, id)
            .cloned()
            .ok_or_else(|| AdminError::NotFound {
                kind: "exercise",
                id: id.to_string(),
            })
    }

    pub async fn create_exercise(&self, form: &ExerciseForm) -> Result<Saved> {
        let body = form.save_body()?;
        let response = self
            .client
            .mutate("Create exercise", EXERCISE_SAVE_PATH, RequestOptions::post_json(body))
            .await?;
        info!("Created exercise {}", form.name.trim());
        Ok(Saved::from_response(&response))
    }

    /// Uploads the video first, then creates the exercise pointing at it.
    /// A failed create leaves the video recorded as orphaned.
    pub async fn create_exercise_with_video(
        &self,
        mut form: ExerciseForm,
        video: MediaFile,
    ) -> Result<Saved> {
        form.validate()?;
        let media = self.upload_media(MediaKind::ExerciseVideo, video).await?;
        form.video = Some(media.url.clone());
        upload::reference(self, &media, self.create_exercise(&form)).await
    }

    pub async fn update_exercise(&self, id: &str, form: &ExerciseForm) -> Result<Saved> {
        let body = form.update_body()?;
        let path = format!("/admin/workout/update/{id}");
        let response = self
            .client
            .mutate("Update exercise", &path, RequestOptions::put_json(body))
            .await?;
        Ok(Saved::from_response(&response))
    }

    pub async fn delete_exercise(&self, id: &str) -> Result<()> {
        delete_record::<Exercises>(&self.client, id).await
    }

    pub async fn list_meals(&self) -> Result<Vec<Meal>> {
        fetch_collection::<Meals>(&self.client).await
    }

    /// Creates a catalog meal. The image is part of the same request.
    pub async fn create_meal(&self, params: CreateMeal) -> Result<Saved> {
        params.validate()?;
        if !params.image.fits(MediaKind::MealImage) {
            return Err(AdminError::invalid_input("image").with_reason(format!(
                "{} is not an image",
                params.image.file_name
            )));
        }

        let form = params
            .text_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        let form = form.part("image", params.image.into_part()?);

        let response = self
            .client
            .mutate("Create meal", MEAL_SAVE_PATH, RequestOptions::post_form(form))
            .await?;
        Ok(Saved::from_response(&response))
    }

    pub async fn list_supplements(&self) -> Result<Vec<Supplement>> {
        fetch_collection::<Supplements>(&self.client).await
    }

    pub async fn create_supplement(&self, params: &CreateSupplement) -> Result<Saved> {
        let body = params.body()?;
        let response = self
            .client
            .mutate(
                "Create supplement",
                SUPPLEMENT_CREATE_PATH,
                RequestOptions::post_json(body),
            )
            .await?;
        Ok(Saved::from_response(&response))
    }

    /// Phase one of a two-phase media commit.
    pub async fn upload_media(&self, kind: MediaKind, file: MediaFile) -> Result<UploadedMedia> {
        upload::upload(&self.client, kind, file).await
    }
}

fn find_nested<'a>(exercises: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
    exercises.iter().find_map(|exercise| {
        if exercise.id == id {
            Some(exercise)
        } else {
            find_nested(&exercise.alternatives, id)
        }
    })
}
