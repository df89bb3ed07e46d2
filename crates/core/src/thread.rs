//! Threads: discussion topics that strands attach to.
//!
//! A thread is immutable once created. The module holds the record type,
//! the incoming DTO, the validated form, and the three thread operations.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::store::ThreadStore;
use crate::types::{new_id, parse_id, DbId, Timestamp};
use crate::validation::{check_min_chars, require, to_core_error, trimmed, ValidationPolicy};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LENGTH: usize = 30;

/// Minimums applied only under [`ValidationPolicy::strict`].
pub const STRICT_MIN_TITLE_LENGTH: usize = 5;
pub const STRICT_MIN_DESCRIPTION_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A stored thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

/// Request body for creating a thread. Every field is optional at this
/// stage so that missing fields surface as validation errors rather than
/// deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateThread {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A thread that passed validation and is ready to be persisted.
#[derive(Debug, Clone, Validate)]
pub struct NewThread {
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "description must be between 1 and 1000 characters"
    ))]
    pub description: String,
    #[validate(
        length(max = 10, message = "a thread may have at most 10 tags"),
        custom(function = "validate_tags")
    )]
    pub tags: Vec<String>,
}

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().any(|t| t.chars().count() > MAX_TAG_LENGTH) {
        let mut err = ValidationError::new("tag_length");
        err.message = Some(format!("each tag must be at most {MAX_TAG_LENGTH} characters").into());
        return Err(err);
    }
    Ok(())
}

/// Trim each tag and drop the blank ones, keeping insertion order.
pub fn normalize_tags(tags: Option<Vec<String>>) -> Vec<String> {
    tags.unwrap_or_default()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

impl NewThread {
    /// Validate a create request. Nothing is persisted on failure.
    pub fn parse(input: CreateThread, policy: &ValidationPolicy) -> Result<Self, CoreError> {
        let title = trimmed(input.title);
        let description = trimmed(input.description);

        let mut missing = Vec::new();
        if title.is_none() {
            missing.push("title");
        }
        if description.is_none() {
            missing.push("description");
        }
        require(&missing)?;

        let new = NewThread {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            tags: normalize_tags(input.tags),
        };
        new.validate().map_err(to_core_error)?;

        if policy.strict {
            check_min_chars("title", &new.title, STRICT_MIN_TITLE_LENGTH)?;
            check_min_chars("description", &new.description, STRICT_MIN_DESCRIPTION_LENGTH)?;
        }

        Ok(new)
    }

    /// Assign identity and creation time.
    pub fn into_thread(self, created_at: Timestamp) -> Thread {
        Thread {
            id: new_id(),
            title: self.title,
            description: self.description,
            tags: self.tags,
            created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// All threads, most recently created first.
pub async fn list<S>(store: &S) -> Result<Vec<Thread>, CoreError>
where
    S: ThreadStore + ?Sized,
{
    Ok(store.list_threads().await?)
}

/// Look up one thread. An id that is not even well-formed cannot name a
/// stored thread, so it is reported as `NotFound` as well.
pub async fn get<S>(store: &S, raw_id: &str) -> Result<Thread, CoreError>
where
    S: ThreadStore + ?Sized,
{
    let not_found = || CoreError::NotFound {
        entity: "Thread",
        id: raw_id.to_string(),
    };
    let id = parse_id(raw_id).ok_or_else(not_found)?;
    store.find_thread(id).await?.ok_or_else(not_found)
}

/// Validate and persist a new thread, returning the stored record.
pub async fn create<S>(
    store: &S,
    input: CreateThread,
    policy: &ValidationPolicy,
) -> Result<Thread, CoreError>
where
    S: ThreadStore + ?Sized,
{
    let thread = NewThread::parse(input, policy)?.into_thread(chrono::Utc::now());
    Ok(store.insert_thread(&thread).await?)
}
