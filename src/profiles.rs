//! Saved parent profiles and the store interface the engine's callers use.
//!
//! Persistence is a collaborator concern: the engine consumes the store only
//! as a source of [`ParentData`] records, so this module defines the record
//! shape and the operations a backing store must provide, nothing more. No
//! storage implementation ships with this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ParentData;

/// A saved parent financial profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentProfile {
    /// Unique identifier for the profile.
    pub id: Uuid,
    /// The name the profile is listed under.
    pub display_name: String,
    /// The parent's financial data.
    pub data: ParentData,
    /// Whether the profile has been archived (soft delete).
    pub is_archived: bool,
    /// When the profile was created.
    pub created_utc: DateTime<Utc>,
    /// When the profile was last updated, if ever.
    pub updated_utc: Option<DateTime<Utc>>,
    /// The user who owns this profile; `None` for legacy rows.
    pub owner_user_id: Option<Uuid>,
}

impl ParentProfile {
    /// Copies the financial fields from a [`ParentData`] record into this
    /// profile, leaving identity and bookkeeping fields untouched.
    pub fn apply_from(&mut self, source: &ParentData) {
        self.data = source.clone();
    }

    /// The profile's financial data as a bare [`ParentData`] record.
    pub fn to_parent_data(&self) -> ParentData {
        self.data.clone()
    }

    /// Whether this profile carries the same financial data as the given
    /// record, per [`ParentData::financial_signature`].
    pub fn is_duplicate_of(&self, data: &ParentData) -> bool {
        self.data.financial_signature() == data.financial_signature()
    }
}

/// The store of saved parent profiles.
///
/// Implemented by the persistence layer outside this crate; the engine and
/// its HTTP surface depend only on this trait. `find_duplicate` and
/// `get_or_create` deduplicate by financial signature so repeated
/// calculations with the same inputs reuse one saved profile.
pub trait ProfileStore {
    /// The error type the backing store produces.
    type Error;

    /// Lists unarchived profiles, optionally filtered by a search term
    /// against the display name.
    fn list(&self, search: Option<&str>) -> Result<Vec<ParentProfile>, Self::Error>;

    /// Fetches a profile by id, if present.
    fn get(&self, id: Uuid) -> Result<Option<ParentProfile>, Self::Error>;

    /// Persists a new profile and returns it with store-assigned fields
    /// populated.
    fn create(&self, profile: ParentProfile) -> Result<ParentProfile, Self::Error>;

    /// Updates an existing profile; returns `false` when the id is unknown.
    fn update(&self, profile: ParentProfile) -> Result<bool, Self::Error>;

    /// Archives a profile; returns `false` when the id is unknown.
    fn archive(&self, id: Uuid) -> Result<bool, Self::Error>;

    /// Finds an unarchived profile whose financial signature matches the
    /// given data.
    fn find_duplicate(&self, data: &ParentData) -> Result<Option<ParentProfile>, Self::Error>;

    /// Returns the existing duplicate of `data` or creates a new profile
    /// named from the hint.
    fn get_or_create(
        &self,
        data: &ParentData,
        display_name_hint: Option<&str>,
    ) -> Result<ParentProfile, Self::Error>;
}
