//! The contact registry: ordered contacts plus their id sequence.
//!
//! [`ContactRegistry`] keeps the collection and the [`IdSequence`] inside one
//! `tokio::sync::Mutex`. Every read and write goes through that lock, so
//! operations are linearizable and no caller can observe a half-applied
//! create or delete. The async mutex lets handlers await the lock without
//! blocking runtime worker threads.
//!
//! Deletion is split into a decide step ([`ContactRegistry::prepare_delete`])
//! and a commit step ([`PendingDelete::commit`]). The lock is released
//! between the two, so a slow delete never stalls other requests.

use std::time::Duration;

use tokio::sync::Mutex;

use crate::contact::Contact;
use crate::error::RegistryError;
use crate::id::{ContactId, IdSequence};

/// Contacts every server process starts with.
const DEFAULT_SEED: [(&str, &str); 2] = [("Igor", "abc@gmail.com"), ("Clara", "cb@gmail.com")];

/// State guarded by the registry lock.
#[derive(Debug, Default)]
struct RegistryState {
    /// Live contacts in insertion order.
    contacts: Vec<Contact>,
    /// Issues ids for `contacts`. Only advanced inside the same lock.
    ids: IdSequence,
}

impl RegistryState {
    fn has_email(&self, email: &str) -> bool {
        self.contacts.iter().any(|c| c.email == email)
    }

    fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Checks the email and appends in one step; a rejected insert leaves the
    /// sequence untouched.
    fn insert(&mut self, name: String, email: String) -> Result<Contact, RegistryError> {
        if self.has_email(&email) {
            return Err(RegistryError::DuplicateEmail { email });
        }
        let contact = Contact::new(self.ids.issue(), name, email);
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    /// Removes the contact with `id`, keeping the order of the rest.
    fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(idx))
    }
}

/// Thread-safe, in-memory contact store.
///
/// Share it across tasks with `Arc<ContactRegistry>`. All operations return
/// owned snapshots; no reference into the guarded collection escapes.
#[derive(Debug, Default)]
pub struct ContactRegistry {
    state: Mutex<RegistryState>,
}

impl ContactRegistry {
    /// Creates an empty registry whose first contact gets id `1`.
    pub fn new() -> Self {
        ContactRegistry {
            state: Mutex::new(RegistryState::default()),
        }
    }

    /// Creates a registry pre-populated with `seed`, in order.
    ///
    /// Seed entries go through the same duplicate-email check as
    /// [`create`](ContactRegistry::create).
    pub fn with_seed<I, N, E>(seed: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: Into<String>,
    {
        let mut state = RegistryState::default();
        for (name, email) in seed {
            state.insert(name.into(), email.into())?;
        }
        Ok(ContactRegistry {
            state: Mutex::new(state),
        })
    }

    /// Creates the registry a fresh server starts with: Igor (1) and
    /// Clara (2), next id 3.
    pub fn seeded() -> Self {
        let mut state = RegistryState::default();
        for (name, email) in DEFAULT_SEED {
            // A repeated seed email is skipped rather than inserted twice.
            let _ = state.insert(name.to_string(), email.to_string());
        }
        ContactRegistry {
            state: Mutex::new(state),
        }
    }

    /// Adds a contact at the end of the list.
    ///
    /// Fails with [`RegistryError::DuplicateEmail`] if a live contact already
    /// has `email`; in that case nothing changes and no id is consumed.
    pub async fn create(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Contact, RegistryError> {
        let (name, email) = (name.into(), email.into());
        let mut state = self.state.lock().await;
        state.insert(name, email)
    }

    /// Removes the contact with `id` immediately.
    ///
    /// Returns `true` if a contact was removed. Unknown ids are a no-op.
    pub async fn delete_by_id(&self, id: ContactId) -> bool {
        self.state.lock().await.remove(id).is_some()
    }

    /// Decides which contact a delete of `id` targets.
    ///
    /// The lock is held only for the lookup. Commit the result with
    /// [`PendingDelete::commit`].
    pub async fn prepare_delete(&self, id: ContactId) -> PendingDelete {
        let target = self.state.lock().await.get(id).cloned();
        PendingDelete {
            requested: id,
            target,
        }
    }

    /// Deletes `id` after waiting `delay`.
    ///
    /// The target is chosen before the wait and removed after it. The lock
    /// is not held while waiting.
    pub async fn delete_by_id_after(&self, id: ContactId, delay: Duration) -> bool {
        let pending = self.prepare_delete(id).await;
        tokio::time::sleep(delay).await;
        pending.commit(self).await
    }

    /// Returns `true` if a live contact has `email`.
    pub async fn exists_by_email(&self, email: &str) -> bool {
        self.state.lock().await.has_email(email)
    }

    /// Returns a snapshot of all live contacts in insertion order.
    pub async fn list(&self) -> Vec<Contact> {
        self.state.lock().await.contacts.clone()
    }

    /// Returns a snapshot of the contact with `id`, if live.
    pub async fn get(&self, id: ContactId) -> Option<Contact> {
        self.state.lock().await.get(id).cloned()
    }

    /// Number of live contacts.
    pub async fn len(&self) -> usize {
        self.state.lock().await.contacts.len()
    }

    /// Returns `true` if no contacts are live.
    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.contacts.is_empty()
    }

    /// The id the next successful create will receive.
    pub async fn next_id(&self) -> ContactId {
        self.state.lock().await.ids.peek()
    }
}

/// A delete whose target has been decided but not yet removed.
///
/// Produced by [`ContactRegistry::prepare_delete`]. The target is fixed at
/// decide time: a contact that becomes live afterwards is never removed by
/// this delete.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until committed"]
pub struct PendingDelete {
    requested: ContactId,
    target: Option<Contact>,
}

impl PendingDelete {
    /// The id the caller asked to delete.
    pub fn requested(&self) -> ContactId {
        self.requested
    }

    /// The contact that was live under `requested` at decide time.
    pub fn target(&self) -> Option<&Contact> {
        self.target.as_ref()
    }

    /// Removes the target if it is still live.
    ///
    /// Returns `true` if this call removed it. Ids are never reused, so
    /// matching on id alone cannot hit a different contact.
    pub async fn commit(self, registry: &ContactRegistry) -> bool {
        match self.target {
            Some(target) => registry.state.lock().await.remove(target.id).is_some(),
            None => false,
        }
    }
}
