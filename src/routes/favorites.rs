// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites CRUD routes.
//!
//! Four entity families share the generic handlers; only the create
//! handlers are per-entity because each wraps its item under a
//! different body key (`workout`, `recipe`, `gym`).

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{
    FavoriteGym, FavoriteRecipe, FavoriteRecord, FavoriteVeganRecipe, FavoriteWorkout, GymItem,
    RecipeItem, VeganRecipeItem, WorkoutItem,
};
use crate::services::favorites;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Favorites routes (require authentication).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/favWorkouts",
            get(list_handler::<FavoriteWorkout>).post(create_workout),
        )
        .route(
            "/api/favWorkouts/{id}",
            put(update_comment_handler::<FavoriteWorkout>)
                .delete(delete_handler::<FavoriteWorkout>),
        )
        .route(
            "/api/favRecipes",
            get(list_handler::<FavoriteRecipe>).post(create_recipe),
        )
        .route(
            "/api/favRecipes/{id}",
            put(update_comment_handler::<FavoriteRecipe>).delete(delete_handler::<FavoriteRecipe>),
        )
        .route(
            "/api/favVeganRecipes",
            get(list_handler::<FavoriteVeganRecipe>).post(create_vegan_recipe),
        )
        .route(
            "/api/favVeganRecipes/{id}",
            put(update_comment_handler::<FavoriteVeganRecipe>)
                .delete(delete_handler::<FavoriteVeganRecipe>),
        )
        .route(
            "/api/favGyms",
            get(list_handler::<FavoriteGym>).post(create_gym),
        )
        .route(
            "/api/favGyms/{id}",
            put(update_comment_handler::<FavoriteGym>).delete(delete_handler::<FavoriteGym>),
        )
}

// ─── Request/Response Types ──────────────────────────────────

#[derive(Serialize)]
pub struct FavoritesResponse<R: Serialize> {
    pub favorites: Vec<R>,
}

#[derive(Serialize)]
pub struct FavoriteResponse<R: Serialize> {
    pub message: String,
    pub favorite: R,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
struct UpdateCommentRequest {
    comment: String,
}

#[derive(Deserialize)]
struct CreateWorkoutRequest {
    #[serde(default)]
    workout: WorkoutItem,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Deserialize)]
struct CreateRecipeRequest {
    #[serde(default)]
    recipe: RecipeItem,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Deserialize)]
struct CreateVeganRecipeRequest {
    #[serde(default)]
    recipe: VeganRecipeItem,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Deserialize)]
struct CreateGymRequest {
    #[serde(default)]
    gym: GymItem,
    #[serde(default)]
    comment: Option<String>,
}

// ─── Generic Handlers ────────────────────────────────────────

/// List the authenticated user's favorites, newest first.
async fn list_handler<R: FavoriteRecord>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FavoritesResponse<R>>> {
    let favorites = favorites::list::<R>(&state.db, &user).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

/// Update the comment on an owned favorite.
async fn update_comment_handler<R: FavoriteRecord>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<Json<FavoriteResponse<R>>> {
    let favorite = favorites::update_comment::<R>(&state.db, &user, &id, body.comment).await?;
    Ok(Json(FavoriteResponse {
        message: format!("{} comment updated", R::KIND),
        favorite,
    }))
}

/// Remove an owned favorite.
async fn delete_handler<R: FavoriteRecord>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    favorites::remove::<R>(&state.db, &user, &id).await?;
    Ok(Json(MessageResponse {
        message: format!("{} removed from favorites", R::KIND),
    }))
}

/// Shared create path once the item is unwrapped from its body key.
async fn create_from_item<R: FavoriteRecord>(
    state: &AppState,
    user: &AuthUser,
    item: R::Item,
    comment: Option<String>,
) -> Result<(StatusCode, Json<FavoriteResponse<R>>)> {
    let favorite = favorites::create::<R>(&state.db, user, item, comment).await?;
    Ok((
        StatusCode::CREATED,
        Json(FavoriteResponse {
            message: format!("{} added to favorites", R::KIND),
            favorite,
        }),
    ))
}

// ─── Per-entity Create Handlers ──────────────────────────────

async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<FavoriteResponse<FavoriteWorkout>>)> {
    create_from_item(&state, &user, body.workout, body.comment).await
}

async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<FavoriteResponse<FavoriteRecipe>>)> {
    create_from_item(&state, &user, body.recipe, body.comment).await
}

async fn create_vegan_recipe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateVeganRecipeRequest>,
) -> Result<(StatusCode, Json<FavoriteResponse<FavoriteVeganRecipe>>)> {
    create_from_item(&state, &user, body.recipe, body.comment).await
}

async fn create_gym(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateGymRequest>,
) -> Result<(StatusCode, Json<FavoriteResponse<FavoriteGym>>)> {
    create_from_item(&state, &user, body.gym, body.comment).await
}
