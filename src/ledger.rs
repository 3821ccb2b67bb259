use chrono::Utc;
use std::sync::Arc;

use crate::{
    database::{AppointmentStore, StoreError},
    error::ServiceError,
    models::appointments::{
        NewAppointment, DATE_MAX_LEN, DOCTOR_MAX_LEN, PATIENT_NAME_MAX_LEN, SLOT_MAX_LEN,
        USERNAME_MAX_LEN,
    },
    protocol::AppointmentItem,
};

#[derive(Clone, Debug, Default)]
pub struct Booking {
    pub patient_name: String,
    pub doctor: String,
    pub date: String,
    pub slot: String,
    pub username: String,
}

impl Booking {
    /// Request field name, value and column width.
    fn fields(&self) -> [(&'static str, &str, usize); 5] {
        [
            ("patient", self.patient_name.as_str(), PATIENT_NAME_MAX_LEN),
            ("doctor", self.doctor.as_str(), DOCTOR_MAX_LEN),
            ("date", self.date.as_str(), DATE_MAX_LEN),
            ("slot", self.slot.as_str(), SLOT_MAX_LEN),
            ("username", self.username.as_str(), USERNAME_MAX_LEN),
        ]
    }

    fn validate(&self) -> Result<(), ServiceError> {
        let fields = self.fields();
        if fields.iter().any(|(_, value, _)| value.is_empty()) {
            return Err(ServiceError::validation("All fields required"));
        }
        for (name, value, max_len) in fields.iter() {
            if value.chars().count() > *max_len {
                return Err(ServiceError::validation(format!(
                    "{} must be at most {} characters",
                    name, max_len
                )));
            }
        }
        Ok(())
    }
}

/// Appointment ledger. A doctor/date/slot triple can be booked once.
#[derive(Clone)]
pub struct Ledger {
    store: Arc<dyn AppointmentStore>,
}

impl Ledger {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    pub fn book(&self, booking: Booking) -> Result<(), ServiceError> {
        booking.validate()?;

        let appo = NewAppointment {
            patient_name: booking.patient_name,
            doctor: booking.doctor,
            date: booking.date,
            slot: booking.slot,
            username: booking.username,
            created_at: Utc::now().naive_utc(),
        };
        match self.store.insert_appointment(appo) {
            Ok(()) => Ok(()),
            Err(StoreError::Duplicate) => Err(ServiceError::conflict("Slot already booked")),
            Err(StoreError::Backend(err)) => {
                Err(ServiceError::internal("Server error while booking", err))
            }
        }
    }

    /// An empty filter lists every appointment.
    pub fn list(&self, username: Option<&str>) -> Result<Vec<AppointmentItem>, ServiceError> {
        let username = username.filter(|name| !name.is_empty());
        let appos = self
            .store
            .list_appointments(username)
            .map_err(|err| ServiceError::internal("Server error while fetching", err))?;
        Ok(appos.into_iter().map(AppointmentItem::from).collect())
    }
}
