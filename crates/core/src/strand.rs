//! Strands: first-person contributions attached to exactly one thread.
//!
//! Strands under a thread form an append-only sequence read back in the
//! order they were written.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::store::{StrandStore, ThreadStore};
use crate::types::{new_id, parse_id, DbId, Timestamp};
use crate::validation::{check_min_chars, require, to_core_error, trimmed, ValidationPolicy};

pub const MAX_CONTRIBUTOR_NAME_LENGTH: usize = 100;
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Minimums applied only under [`ValidationPolicy::strict`].
pub const STRICT_MIN_CONTRIBUTOR_NAME_LENGTH: usize = 2;
pub const STRICT_MIN_CONTENT_LENGTH: usize = 50;

/// A stored strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strand {
    pub id: DbId,
    pub thread_id: DbId,
    pub contributor_name: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// Request body for creating a strand.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStrand {
    pub thread_id: Option<String>,
    pub contributor_name: Option<String>,
    pub content: Option<String>,
}

/// A strand that passed validation and is ready to be persisted.
#[derive(Debug, Clone, Validate)]
pub struct NewStrand {
    pub thread_id: DbId,
    #[validate(length(
        min = 1,
        max = 100,
        message = "contributorName must be between 1 and 100 characters"
    ))]
    pub contributor_name: String,
    #[validate(length(
        min = 1,
        max = 2000,
        message = "content must be between 1 and 2000 characters"
    ))]
    pub content: String,
}

impl NewStrand {
    /// Validate a create request. Does not consult the store.
    pub fn parse(input: CreateStrand, policy: &ValidationPolicy) -> Result<Self, CoreError> {
        let thread_id = trimmed(input.thread_id);
        let contributor_name = trimmed(input.contributor_name);
        let content = trimmed(input.content);

        let mut missing = Vec::new();
        if thread_id.is_none() {
            missing.push("threadId");
        }
        if contributor_name.is_none() {
            missing.push("contributorName");
        }
        if content.is_none() {
            missing.push("content");
        }
        require(&missing)?;

        let raw_thread_id = thread_id.unwrap_or_default();
        let thread_id = parse_id(&raw_thread_id).ok_or_else(|| {
            CoreError::InvalidArgument(format!("threadId '{raw_thread_id}' is not a valid id"))
        })?;

        let new = NewStrand {
            thread_id,
            contributor_name: contributor_name.unwrap_or_default(),
            content: content.unwrap_or_default(),
        };
        new.validate().map_err(to_core_error)?;

        if policy.strict {
            check_min_chars(
                "contributorName",
                &new.contributor_name,
                STRICT_MIN_CONTRIBUTOR_NAME_LENGTH,
            )?;
            check_min_chars("content", &new.content, STRICT_MIN_CONTENT_LENGTH)?;
        }

        Ok(new)
    }

    pub fn into_strand(self, created_at: Timestamp) -> Strand {
        Strand {
            id: new_id(),
            thread_id: self.thread_id,
            contributor_name: self.contributor_name,
            content: self.content,
            created_at,
        }
    }
}

/// Strands of one thread, oldest first. An unknown or malformed thread id
/// yields an empty list rather than an error.
pub async fn list_for_thread<S>(store: &S, raw_thread_id: &str) -> Result<Vec<Strand>, CoreError>
where
    S: StrandStore + ?Sized,
{
    match parse_id(raw_thread_id) {
        Some(thread_id) => Ok(store.list_strands_for_thread(thread_id).await?),
        None => Ok(Vec::new()),
    }
}

/// Validate and persist a new strand.
///
/// With `require_existing_thread` set, the parent thread is looked up once
/// before the insert; it is not locked, so concurrent strand creation
/// against the same thread stays independent.
pub async fn create<S>(
    store: &S,
    input: CreateStrand,
    policy: &ValidationPolicy,
) -> Result<Strand, CoreError>
where
    S: ThreadStore + StrandStore + ?Sized,
{
    let new = NewStrand::parse(input, policy)?;

    if policy.require_existing_thread && store.find_thread(new.thread_id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Thread",
            id: new.thread_id.to_string(),
        });
    }

    let strand = new.into_strand(chrono::Utc::now());
    Ok(store.insert_strand(&strand).await?)
}
