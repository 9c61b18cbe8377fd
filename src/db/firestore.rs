// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (identity-provider mirror records)
//! - Favorites (one collection per entity family, generic over
//!   [`FavoriteRecord`])
//!
//! Uniqueness of a (user, item) favorite pair is structural: the
//! document ID is derived from both, and creation goes through a
//! transactional insert-if-absent, so concurrent double-clicks resolve
//! to exactly one stored record.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{FavoriteRecord, User};
use serde::{de::DeserializeOwned, Serialize};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Favorite Operations (generic) ───────────────────────────

    /// List all favorites owned by a user, newest first.
    pub async fn list_favorites<R: FavoriteRecord>(
        &self,
        user_id: &str,
    ) -> Result<Vec<R>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(R::COLLECTION)
            .filter(move |q| q.field("userId").eq(user_id.clone()))
            .order_by([(
                "createdAt",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a favorite by document ID, scoped to its owner.
    ///
    /// Returns None both for a missing document and for a document owned
    /// by someone else, so callers cannot leak existence to non-owners.
    pub async fn get_favorite_owned<R: FavoriteRecord>(
        &self,
        doc_id: &str,
        user_id: &str,
    ) -> Result<Option<R>, AppError> {
        let record: Option<R> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(R::COLLECTION)
            .obj()
            .one(doc_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(record.filter(|r| r.user_id() == user_id))
    }

    /// Insert a favorite unless its document already exists.
    ///
    /// Returns `true` if the record was inserted, `false` if the (user,
    /// item) pair was already favorited (including the case where a
    /// concurrent create won the race).
    pub async fn insert_favorite_if_absent<R: FavoriteRecord>(
        &self,
        record: &R,
    ) -> Result<bool, AppError> {
        self.insert_if_absent(R::COLLECTION, record.id(), record)
            .await
    }

    /// Overwrite a favorite (comment updates).
    pub async fn set_favorite<R: FavoriteRecord>(&self, record: &R) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(R::COLLECTION)
            .document_id(record.id())
            .object(record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Hard-delete a favorite document.
    pub async fn delete_favorite<R: FavoriteRecord>(&self, doc_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(R::COLLECTION)
            .document_id(doc_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user mirror record by provider user id.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a user mirror record unless it already exists.
    ///
    /// Duplicate webhook delivery is expected; an existing record is a
    /// no-op success (`false`).
    pub async fn insert_user_if_absent(&self, user: &User) -> Result<bool, AppError> {
        self.insert_if_absent(collections::USERS, &user.user_id, user)
            .await
    }

    // ─── Helper Methods ────────────────────────────────────────────

    /// Transactional insert-if-absent on a single document.
    ///
    /// The existence read runs under the transaction's consistency
    /// selector, so a concurrent insert of the same document makes the
    /// commit conflict instead of blindly overwriting; the loser is
    /// re-checked and reports `false` rather than a spurious storage
    /// error.
    async fn insert_if_absent<T>(
        &self,
        collection: &str,
        doc_id: &str,
        object: &T,
    ) -> Result<bool, AppError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        let client = self.get_client()?;

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        // Register the read with the transaction so the commit is
        // preconditioned on the document still being absent.
        let txn_client = client.clone_with_consistency_selector(
            firestore::FirestoreConsistencySelector::Transaction(
                transaction.transaction_id().clone(),
            ),
        );

        let existing: Option<T> = txn_client
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(doc_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if existing.is_some() {
            // Nothing to write, drop the transaction
            let _ = transaction.rollback().await;
            return Ok(false);
        }

        client
            .fluent()
            .update()
            .in_col(collection)
            .document_id(doc_id)
            .object(object)
            .add_to_transaction(&mut transaction)
            .map_err(|e| AppError::Database(format!("Failed to add insert to transaction: {}", e)))?;

        if let Err(commit_err) = transaction.commit().await {
            // A concurrent insert may have won the race; distinguish that
            // from a real storage failure by re-reading.
            let now_existing: Option<T> = client
                .fluent()
                .select()
                .by_id_in(collection)
                .obj()
                .one(doc_id)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;

            if now_existing.is_some() {
                tracing::debug!(collection, doc_id, "Insert lost race to concurrent create");
                return Ok(false);
            }

            return Err(AppError::Database(format!(
                "Transaction commit failed: {}",
                commit_err
            )));
        }

        Ok(true)
    }
}
