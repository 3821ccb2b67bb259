use serde::{Deserialize, Serialize};

use crate::models::appointments::Appointment;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Listing shape shared by the filtered and unfiltered appointment queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentItem {
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub slot: String,
}

impl From<Appointment> for AppointmentItem {
    fn from(appo: Appointment) -> Self {
        Self {
            patient: appo.patient_name,
            doctor: appo.doctor,
            date: appo.date,
            slot: appo.slot,
        }
    }
}
