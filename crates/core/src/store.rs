//! Storage port for accepted submissions.
//!
//! [`SubmissionStore`] is the seam between request handlers and whatever
//! holds the records. The bundled implementation is an in-memory map owned
//! by the `api` crate; a durable backend swaps in behind the same trait
//! without touching callers.

use crate::submission::{
    Contact, DemoBooking, NewContact, NewDemoBooking, NewStoreRegistration, StoreRegistration,
};

/// Errors that can occur in a submission store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A collection lock was poisoned by a panicking writer.
    #[error("submission store lock poisoned")]
    LockPoisoned,
}

/// Persistence port for accepted submissions, one create/list pair per
/// entity kind.
///
/// `create_*` assigns the record's identity and creation timestamp and is
/// atomic: concurrent calls never produce duplicate identifiers or lose
/// records. `list_*` returns a snapshot of the collection ordered newest
/// first; records are immutable once created and are never deleted.
///
/// The port is synchronous. Nothing in this core suspends - the in-memory
/// implementation only touches process-local maps - and handlers call it
/// inline.
pub trait SubmissionStore: Send + Sync {
    /// Store a validated contact request, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing collection is unavailable.
    fn create_contact(&self, new_contact: NewContact) -> Result<Contact, StoreError>;

    /// List every stored contact request, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing collection is unavailable.
    fn list_contacts(&self) -> Result<Vec<Contact>, StoreError>;

    /// Store a validated demo booking, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing collection is unavailable.
    fn create_demo_booking(&self, new_booking: NewDemoBooking) -> Result<DemoBooking, StoreError>;

    /// List every stored demo booking, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing collection is unavailable.
    fn list_demo_bookings(&self) -> Result<Vec<DemoBooking>, StoreError>;

    /// Store a validated store registration, returning the stored record
    /// with its payment status initialized to pending.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing collection is unavailable.
    fn create_store_registration(
        &self,
        new_registration: NewStoreRegistration,
    ) -> Result<StoreRegistration, StoreError>;

    /// List every stored store registration, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing collection is unavailable.
    fn list_store_registrations(&self) -> Result<Vec<StoreRegistration>, StoreError>;
}
