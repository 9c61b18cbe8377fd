//! Local mirror of the identity provider's user.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
///
/// Created once from the provider's `user.created` webhook event. The
/// provider user id doubles as the document ID. Favorites reference the
/// provider id directly, so nothing joins through this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Identity provider user ID (also used as document ID)
    pub user_id: String,
    /// Primary email address (may be None if not shared)
    pub email: Option<String>,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// When the mirror record was created
    pub created_at: String,
}
