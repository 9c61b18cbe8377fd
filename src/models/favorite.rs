// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Favorite records: per-user snapshots of catalog items.
//!
//! All four entity families share one lifecycle (create snapshot, edit
//! comment, hard delete), so the differences are captured by the
//! [`FavoriteRecord`] trait and the CRUD path is written once.
//!
//! The document ID is `{userId}_{encoded itemId}`, which makes the
//! (user, item) uniqueness constraint structural: two concurrent creates
//! target the same document and exactly one insert-if-absent wins.

use crate::models::catalog::{
    GymItem, RecipeIngredient, RecipeItem, RecipeNutrition, RecipeStep, VeganRecipeItem,
    WorkoutItem,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Build the composite document ID for a (user, item) pair.
///
/// External item ids come from third-party APIs and may contain
/// characters that are unsafe in document names, so the item part is
/// percent-encoded.
pub fn favorite_doc_id(user_id: &str, item_id: &str) -> String {
    format!("{}_{}", user_id, urlencoding::encode(item_id))
}

/// Common shape of the four favorite entity families.
///
/// Implementors are plain serde structs stored as-is in their collection;
/// the trait exposes just enough for the generic CRUD service: the
/// collection name, the item payload type, snapshot construction, and
/// comment mutation.
pub trait FavoriteRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Catalog payload this record snapshots.
    type Item: DeserializeOwned + Validate + Default + Send + 'static;

    /// Firestore collection holding this family.
    const COLLECTION: &'static str;
    /// Human-readable entity name for messages and logs.
    const KIND: &'static str;

    /// External identifying id of an incoming catalog item.
    fn item_id_of(item: &Self::Item) -> &str;

    /// Build a favorite-time snapshot of `item` owned by `user_id`.
    fn from_item(user_id: &str, item: Self::Item, comment: String, now: &str) -> Self;

    /// Document ID (`{userId}_{encoded itemId}`).
    fn id(&self) -> &str;
    /// Owning user's provider id.
    fn user_id(&self) -> &str;
    /// External id of the snapshotted item.
    fn item_id(&self) -> &str;
    fn comment(&self) -> &str;
    fn created_at(&self) -> &str;

    /// Replace the comment; only `updatedAt` may change besides it.
    fn set_comment(&mut self, comment: String, now: &str);
}

// ─── Workouts ────────────────────────────────────────────────

/// Favorited workout snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteWorkout {
    pub id: String,
    pub user_id: String,
    pub exercise_id: String,
    pub exercise_name: String,
    pub target: String,
    pub body_part: String,
    pub equipment: String,
    pub gif_url: String,
    pub instructions: Vec<String>,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FavoriteRecord for FavoriteWorkout {
    type Item = WorkoutItem;

    const COLLECTION: &'static str = crate::db::collections::FAV_WORKOUTS;
    const KIND: &'static str = "workout";

    fn item_id_of(item: &Self::Item) -> &str {
        &item.id
    }

    fn from_item(user_id: &str, item: Self::Item, comment: String, now: &str) -> Self {
        Self {
            id: favorite_doc_id(user_id, &item.id),
            user_id: user_id.to_string(),
            exercise_id: item.id,
            exercise_name: item.name,
            target: item.target,
            body_part: item.body_part,
            equipment: item.equipment,
            gif_url: item.gif_url,
            instructions: item.instructions,
            comment,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
    fn user_id(&self) -> &str {
        &self.user_id
    }
    fn item_id(&self) -> &str {
        &self.exercise_id
    }
    fn comment(&self) -> &str {
        &self.comment
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn set_comment(&mut self, comment: String, now: &str) {
        self.comment = comment;
        self.updated_at = now.to_string();
    }
}

// ─── Classic recipes ─────────────────────────────────────────

/// Favorited classic recipe snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteRecipe {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    pub recipe_name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub total_time: Option<u32>,
    pub servings: Option<u32>,
    pub tags: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<RecipeStep>,
    pub nutrition: RecipeNutrition,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FavoriteRecord for FavoriteRecipe {
    type Item = RecipeItem;

    const COLLECTION: &'static str = crate::db::collections::FAV_RECIPES;
    const KIND: &'static str = "recipe";

    fn item_id_of(item: &Self::Item) -> &str {
        &item.id
    }

    fn from_item(user_id: &str, item: Self::Item, comment: String, now: &str) -> Self {
        Self {
            id: favorite_doc_id(user_id, &item.id),
            user_id: user_id.to_string(),
            recipe_id: item.id,
            recipe_name: item.name,
            description: item.description,
            thumbnail_url: item.thumbnail_url,
            video_url: item.video_url,
            prep_time: item.prep_time,
            cook_time: item.cook_time,
            total_time: item.total_time,
            servings: item.servings,
            tags: item.tags,
            ingredients: item.ingredients,
            instructions: item.instructions,
            nutrition: item.nutrition,
            comment,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
    fn user_id(&self) -> &str {
        &self.user_id
    }
    fn item_id(&self) -> &str {
        &self.recipe_id
    }
    fn comment(&self) -> &str {
        &self.comment
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn set_comment(&mut self, comment: String, now: &str) {
        self.comment = comment;
        self.updated_at = now.to_string();
    }
}

// ─── Vegan recipes ───────────────────────────────────────────

/// Favorited vegan recipe snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteVeganRecipe {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    pub recipe_name: String,
    pub difficulty: String,
    pub portion: String,
    pub time: String,
    pub image: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub method: Vec<String>,
    pub category: String,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FavoriteRecord for FavoriteVeganRecipe {
    type Item = VeganRecipeItem;

    const COLLECTION: &'static str = crate::db::collections::FAV_VEGAN_RECIPES;
    const KIND: &'static str = "vegan recipe";

    fn item_id_of(item: &Self::Item) -> &str {
        &item.id
    }

    fn from_item(user_id: &str, item: Self::Item, comment: String, now: &str) -> Self {
        Self {
            id: favorite_doc_id(user_id, &item.id),
            user_id: user_id.to_string(),
            recipe_id: item.id,
            recipe_name: item.title,
            difficulty: item.difficulty,
            portion: item.portion,
            time: item.time,
            image: item.image,
            description: item.description,
            ingredients: item.ingredients,
            method: item.method,
            category: item.category,
            comment,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
    fn user_id(&self) -> &str {
        &self.user_id
    }
    fn item_id(&self) -> &str {
        &self.recipe_id
    }
    fn comment(&self) -> &str {
        &self.comment
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn set_comment(&mut self, comment: String, now: &str) {
        self.comment = comment;
        self.updated_at = now.to_string();
    }
}

// ─── Gyms ────────────────────────────────────────────────────

/// Favorited gym snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteGym {
    pub id: String,
    pub user_id: String,
    pub gym_id: String,
    pub gym_name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub rating: Option<f64>,
    pub photo_url: Option<String>,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FavoriteRecord for FavoriteGym {
    type Item = GymItem;

    const COLLECTION: &'static str = crate::db::collections::FAV_GYMS;
    const KIND: &'static str = "gym";

    fn item_id_of(item: &Self::Item) -> &str {
        &item.place_id
    }

    fn from_item(user_id: &str, item: Self::Item, comment: String, now: &str) -> Self {
        Self {
            id: favorite_doc_id(user_id, &item.place_id),
            user_id: user_id.to_string(),
            gym_id: item.place_id,
            gym_name: item.name,
            address: item.formatted_address,
            phone_number: item.formatted_phone_number,
            rating: item.rating,
            photo_url: item.photo_url,
            comment,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
    fn user_id(&self) -> &str {
        &self.user_id
    }
    fn item_id(&self) -> &str {
        &self.gym_id
    }
    fn comment(&self) -> &str {
        &self.comment
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn set_comment(&mut self, comment: String, now: &str) {
        self.comment = comment;
        self.updated_at = now.to_string();
    }
}
