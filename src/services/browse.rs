// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Listing-page state: catalog/favorites merge, search, filter,
//! pagination.
//!
//! The listing pages fetch a catalog slice from an external API and the
//! user's favorites from this API, then derive everything else locally.
//! This module is that derivation, kept pure so the frontends (and the
//! tests) drive it as a store with derived selectors.

use crate::models::catalog::{GymItem, RecipeItem, VeganRecipeItem, WorkoutItem};
use crate::models::FavoriteRecord;
use std::collections::HashMap;

/// Items per page on the workouts listing.
pub const WORKOUTS_PAGE_SIZE: usize = 12;
/// Items per page on the classic recipes listing.
pub const RECIPES_PAGE_SIZE: usize = 20;
/// Items per page on the vegan recipes listing.
pub const VEGAN_RECIPES_PAGE_SIZE: usize = 16;
/// Items per page on the gyms listing.
pub const GYMS_PAGE_SIZE: usize = 12;

/// A catalog item as seen by the listing pages.
pub trait CatalogEntry {
    /// External identifying id; None marks the item un-favoritable
    /// (the UI surfaces an error instead of silently failing).
    fn external_id(&self) -> Option<&str>;

    /// Text fields the free-text search matches against.
    fn search_text(&self) -> Vec<&str>;

    /// Whether the item belongs to a category/tag filter value.
    fn matches_category(&self, category: &str) -> bool;
}

impl CatalogEntry for WorkoutItem {
    fn external_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.target, &self.body_part, &self.equipment]
    }

    fn matches_category(&self, category: &str) -> bool {
        self.body_part.eq_ignore_ascii_case(category)
    }
}

impl CatalogEntry for RecipeItem {
    fn external_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields.extend(self.ingredients.iter().map(|i| i.name.as_str()));
        fields
    }

    fn matches_category(&self, category: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(category))
    }
}

impl CatalogEntry for VeganRecipeItem {
    fn external_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.ingredients.iter().map(String::as_str));
        fields
    }

    fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

impl CatalogEntry for GymItem {
    fn external_id(&self) -> Option<&str> {
        (!self.place_id.is_empty()).then_some(self.place_id.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.formatted_address]
    }

    // The gyms page has no category filter
    fn matches_category(&self, _category: &str) -> bool {
        false
    }
}

/// A catalog item annotated with the user's favorite state.
#[derive(Debug)]
pub struct Annotated<'a, T> {
    pub item: &'a T,
    /// False when the item has no external id to key a favorite on.
    pub favoritable: bool,
    pub favorited: bool,
    /// Document id of the favorite, for update/delete calls.
    pub favorite_id: Option<&'a str>,
    /// Stored comment, used to pre-fill the favorite modal.
    pub comment: Option<&'a str>,
}

/// Merge a catalog slice with the user's favorites.
///
/// Membership is keyed on the external item id. Pass an empty favorites
/// slice for signed-out users; everything comes back un-favorited.
pub fn annotate<'a, T, R>(items: &'a [T], favorites: &'a [R]) -> Vec<Annotated<'a, T>>
where
    T: CatalogEntry,
    R: FavoriteRecord,
{
    let by_item_id: HashMap<&str, &R> =
        favorites.iter().map(|f| (f.item_id(), f)).collect();

    items
        .iter()
        .map(|item| match item.external_id() {
            Some(id) => {
                let favorite = by_item_id.get(id).copied();
                Annotated {
                    item,
                    favoritable: true,
                    favorited: favorite.is_some(),
                    favorite_id: favorite.map(|f| f.id()),
                    comment: favorite.map(|f| f.comment()),
                }
            }
            None => Annotated {
                item,
                favoritable: false,
                favorited: false,
                favorite_id: None,
                comment: None,
            },
        })
        .collect()
}

/// Client-side listing state: search, category filter, pagination.
///
/// Selectors recompute from the inputs on every call; changing an input
/// resets to the first page.
pub struct BrowseState<T> {
    items: Vec<T>,
    search: String,
    category: Option<String>,
    page: usize,
    page_size: usize,
}

impl<T: CatalogEntry> BrowseState<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            search: String::new(),
            category: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Items passing the search and category filters, in catalog order.
    pub fn filtered(&self) -> Vec<&T> {
        let needle = self.search.trim().to_lowercase();

        self.items
            .iter()
            .filter(|item| {
                if let Some(category) = &self.category {
                    if !item.matches_category(category) {
                        return false;
                    }
                }
                if needle.is_empty() {
                    return true;
                }
                item.search_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    /// Current page, clamped into the valid range.
    pub fn page(&self) -> usize {
        self.page.min(self.page_count().max(1))
    }

    /// The current page of filtered items.
    pub fn page_items(&self) -> Vec<&T> {
        let filtered = self.filtered();
        let start = (self.page() - 1) * self.page_size;
        filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }
}
