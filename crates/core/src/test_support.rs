//! In-test store used by the operation tests in this crate.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{StoreError, StrandStore, ThreadStore};
use crate::strand::Strand;
use crate::thread::Thread;
use crate::types::DbId;

#[derive(Default)]
pub struct RecordingStore {
    pub threads: Mutex<Vec<Thread>>,
    pub strands: Mutex<Vec<Strand>>,
    /// When set, every call fails with this message.
    pub fail_with: Option<&'static str>,
}

impl RecordingStore {
    pub fn failing(message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.fail_with {
            Some(msg) => Err(StoreError::Unavailable(msg.to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ThreadStore for RecordingStore {
    async fn list_threads(&self) -> Result<Vec<Thread>, StoreError> {
        self.check()?;
        let mut threads = self.threads.lock().unwrap().clone();
        threads.reverse();
        Ok(threads)
    }

    async fn find_thread(&self, id: DbId) -> Result<Option<Thread>, StoreError> {
        self.check()?;
        Ok(self.threads.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn insert_thread(&self, thread: &Thread) -> Result<Thread, StoreError> {
        self.check()?;
        self.threads.lock().unwrap().push(thread.clone());
        Ok(thread.clone())
    }
}

#[async_trait]
impl StrandStore for RecordingStore {
    async fn list_strands_for_thread(&self, thread_id: DbId) -> Result<Vec<Strand>, StoreError> {
        self.check()?;
        Ok(self
            .strands
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.thread_id == thread_id)
            .cloned()
            .collect())
    }

    async fn insert_strand(&self, strand: &Strand) -> Result<Strand, StoreError> {
        self.check()?;
        self.strands.lock().unwrap().push(strand.clone());
        Ok(strand.clone())
    }
}
