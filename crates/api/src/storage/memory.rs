//! In-memory submission store.
//!
//! Each collection is an independent `Mutex<HashMap>`, so a contact
//! create never contends with a demo-booking list. Records gain their
//! id and `createdAt` here, under the lock, which makes a create atomic
//! with respect to every other operation on the same collection.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use securevision_core::{
    Contact, ContactId, DemoBooking, DemoBookingId, NewContact, NewDemoBooking,
    NewStoreRegistration, PaymentStatus, StoreError, StoreRegistration, StoreRegistrationId,
    SubmissionStore,
};

/// Process-local store backing the submission API.
///
/// Contents are lost on restart. Listing clones the collection while
/// holding the lock and sorts the snapshot afterwards, so a slow
/// consumer never blocks writers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: Mutex<HashMap<ContactId, Contact>>,
    demo_bookings: Mutex<HashMap<DemoBookingId, DemoBooking>>,
    store_registrations: Mutex<HashMap<StoreRegistrationId, StoreRegistration>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T>(records: &mut [T], created_at: impl Fn(&T) -> DateTime<Utc>) {
    records.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

impl SubmissionStore for MemoryStore {
    fn create_contact(&self, new: NewContact) -> Result<Contact, StoreError> {
        let mut contacts = self.contacts.lock().map_err(|_| StoreError::LockPoisoned)?;
        let contact = Contact {
            id: ContactId::generate(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            company: new.company,
            message: new.message,
            created_at: Utc::now(),
        };
        contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = self.contacts.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut records: Vec<Contact> = contacts.values().cloned().collect();
        drop(contacts);
        newest_first(&mut records, |c| c.created_at);
        Ok(records)
    }

    fn create_demo_booking(&self, new: NewDemoBooking) -> Result<DemoBooking, StoreError> {
        let mut bookings = self
            .demo_bookings
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        let booking = DemoBooking {
            id: DemoBookingId::generate(),
            company_name: new.company_name,
            email: new.email,
            number_of_cameras: new.number_of_cameras,
            selected_date: new.selected_date,
            selected_time: new.selected_time,
            created_at: Utc::now(),
        };
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    fn list_demo_bookings(&self) -> Result<Vec<DemoBooking>, StoreError> {
        let bookings = self
            .demo_bookings
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        let mut records: Vec<DemoBooking> = bookings.values().cloned().collect();
        drop(bookings);
        newest_first(&mut records, |b| b.created_at);
        Ok(records)
    }

    fn create_store_registration(
        &self,
        new: NewStoreRegistration,
    ) -> Result<StoreRegistration, StoreError> {
        let mut registrations = self
            .store_registrations
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        let registration = StoreRegistration {
            id: StoreRegistrationId::generate(),
            store_name: new.store_name,
            store_address: new.store_address,
            contact_email: new.contact_email,
            number_of_cameras: new.number_of_cameras,
            number_of_users: new.number_of_users,
            total_price: new.total_price,
            payment_status: PaymentStatus::default(),
            created_at: Utc::now(),
        };
        registrations.insert(registration.id, registration.clone());
        Ok(registration)
    }

    fn list_store_registrations(&self) -> Result<Vec<StoreRegistration>, StoreError> {
        let registrations = self
            .store_registrations
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        let mut records: Vec<StoreRegistration> = registrations.values().cloned().collect();
        drop(registrations);
        newest_first(&mut records, |r| r.created_at);
        Ok(records)
    }
}
