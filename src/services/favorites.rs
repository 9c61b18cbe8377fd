// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic favorites CRUD service.
//!
//! The four entity families (workouts, recipes, vegan recipes, gyms)
//! share this one implementation, parameterized by [`FavoriteRecord`].
//! Handlers stay thin: they pick the record type and pass through.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::FavoriteRecord;
use crate::time_utils::now_rfc3339;
use validator::Validate;

/// List a user's favorites, newest first.
pub async fn list<R: FavoriteRecord>(db: &FirestoreDb, user: &AuthUser) -> Result<Vec<R>, AppError> {
    db.list_favorites(&user.user_id).await
}

/// Create a favorite from a catalog item snapshot.
///
/// Validates the identifying fields, then inserts through the
/// transactional insert-if-absent; an existing (user, item) pair is a
/// conflict whether it was found up front or lost a concurrent race.
pub async fn create<R: FavoriteRecord>(
    db: &FirestoreDb,
    user: &AuthUser,
    item: R::Item,
    comment: Option<String>,
) -> Result<R, AppError> {
    item.validate()
        .map_err(|e| AppError::BadRequest(e.to_string().replace('\n', "; ")))?;

    let now = now_rfc3339();
    let record = R::from_item(&user.user_id, item, comment.unwrap_or_default(), &now);

    let inserted = db.insert_favorite_if_absent(&record).await?;
    if !inserted {
        tracing::debug!(
            user_id = %user.user_id,
            item_id = %record.item_id(),
            kind = R::KIND,
            "Duplicate favorite rejected"
        );
        return Err(AppError::Conflict(format!(
            "{} is already in favorites",
            R::KIND
        )));
    }

    tracing::info!(
        user_id = %user.user_id,
        item_id = %record.item_id(),
        kind = R::KIND,
        "Favorite created"
    );
    Ok(record)
}

/// Update the comment on an owned favorite.
///
/// A record that does not exist and a record owned by someone else both
/// surface as not-found.
pub async fn update_comment<R: FavoriteRecord>(
    db: &FirestoreDb,
    user: &AuthUser,
    id: &str,
    comment: String,
) -> Result<R, AppError> {
    let mut record: R = db
        .get_favorite_owned(id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} favorite not found", R::KIND)))?;

    record.set_comment(comment, &now_rfc3339());
    db.set_favorite(&record).await?;

    Ok(record)
}

/// Delete an owned favorite (hard delete).
pub async fn remove<R: FavoriteRecord>(
    db: &FirestoreDb,
    user: &AuthUser,
    id: &str,
) -> Result<(), AppError> {
    let record: R = db
        .get_favorite_owned(id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} favorite not found", R::KIND)))?;

    db.delete_favorite::<R>(record.id()).await?;

    tracing::info!(
        user_id = %user.user_id,
        item_id = %record.item_id(),
        kind = R::KIND,
        "Favorite deleted"
    );
    Ok(())
}
