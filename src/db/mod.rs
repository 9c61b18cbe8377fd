//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const FAV_WORKOUTS: &str = "fav_workouts";
    pub const FAV_RECIPES: &str = "fav_recipes";
    pub const FAV_VEGAN_RECIPES: &str = "fav_vegan_recipes";
    pub const FAV_GYMS: &str = "fav_gyms";
}
