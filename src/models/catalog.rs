// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Catalog item payloads as sent by the client when favoriting.
//!
//! These mirror the wire shapes of the external catalog APIs (exercise
//! database, recipe databases, places). Every field defaults so that a
//! sparse payload deserializes and fails *validation* with a 400 instead
//! of a framework-level rejection. Only the identifying id and name are
//! required; everything else is snapshot data stored as-is.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Exercise-API workout item.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WorkoutItem {
    #[serde(default)]
    #[validate(length(min = 1, message = "exercise id is required"))]
    pub id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "exercise name is required"))]
    pub name: String,
    #[serde(default)]
    pub target: String,
    #[serde(rename = "bodyPart", default)]
    pub body_part: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(rename = "gifUrl", default)]
    pub gif_url: String,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Classic recipe item (recipe-database API shape).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    #[serde(default)]
    #[validate(length(min = 1, message = "recipe id is required"))]
    pub id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "recipe name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<RecipeStep>,
    #[serde(default)]
    pub nutrition: RecipeNutrition,
}

/// One ingredient line of a classic recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecipeIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

/// One numbered instruction step of a classic recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecipeStep {
    #[serde(default)]
    pub step: u32,
    #[serde(default)]
    pub text: String,
}

/// Nutrition facts of a classic recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecipeNutrition {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub carbohydrates: f64,
}

/// Vegan recipe item (vegan recipe API shape).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VeganRecipeItem {
    #[serde(default)]
    #[validate(length(min = 1, message = "recipe id is required"))]
    pub id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "recipe title is required"))]
    pub title: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub portion: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub method: Vec<String>,
    #[serde(default)]
    pub category: String,
}

/// Gym item (places-API shape).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GymItem {
    #[serde(default)]
    #[validate(length(min = 1, message = "gym place_id is required"))]
    pub place_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "gym name is required"))]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub photo_url: Option<String>,
}
