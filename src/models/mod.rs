// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod catalog;
pub mod favorite;
pub mod user;

pub use catalog::{GymItem, RecipeItem, VeganRecipeItem, WorkoutItem};
pub use favorite::{
    FavoriteGym, FavoriteRecipe, FavoriteRecord, FavoriteVeganRecipe, FavoriteWorkout,
};
pub use user::User;
