//! In-memory person store adapter.
//!
//! Records live in insertion order behind a process-wide lock. The lock
//! serializes individual mutations only; callers must not assume atomicity
//! across multiple store calls within one request.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{PersonStore, PersonStoreError};
use crate::domain::{Person, PersonDraft, PersonId};

#[derive(Debug)]
struct Records {
    next_id: i64,
    people: Vec<Person>,
}

/// Ordered in-memory collection of person records.
#[derive(Debug)]
pub struct InMemoryPersonStore {
    inner: RwLock<Records>,
}

impl InMemoryPersonStore {
    /// Create an empty store; the first insert receives id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                next_id: 1,
                people: Vec::new(),
            }),
        }
    }

    /// Create a store pre-populated with the demo fixture records.
    #[must_use]
    pub fn seeded() -> Self {
        let people = vec![
            Person {
                id: PersonId::new(1),
                name: "Sophie".to_owned(),
                age: 37.0,
            },
            Person {
                id: PersonId::new(2),
                name: "Dan".to_owned(),
                age: 42.0,
            },
        ];
        Self {
            inner: RwLock::new(Records { next_id: 3, people }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, PersonStoreError> {
        self.inner
            .read()
            .map_err(|_| PersonStoreError::query("store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, PersonStoreError> {
        self.inner
            .write()
            .map_err(|_| PersonStoreError::query("store lock poisoned"))
    }
}

impl Default for InMemoryPersonStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn list(&self) -> Result<Vec<Person>, PersonStoreError> {
        Ok(self.read()?.people.clone())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonStoreError> {
        Ok(self
            .read()?
            .people
            .iter()
            .find(|person| person.id == id)
            .cloned())
    }

    async fn insert(&self, draft: PersonDraft) -> Result<Person, PersonStoreError> {
        let mut records = self.write()?;
        let id = PersonId::new(records.next_id);
        records.next_id += 1;
        let person = Person::from_draft(id, draft);
        records.people.push(person.clone());
        Ok(person)
    }

    async fn remove(&self, id: PersonId) -> Result<Option<Person>, PersonStoreError> {
        let mut records = self.write()?;
        let position = records.people.iter().position(|person| person.id == id);
        Ok(position.map(|index| records.people.remove(index)))
    }
}
