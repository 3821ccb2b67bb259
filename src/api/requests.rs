use serde::Deserialize;

use crate::{ledger::Booking, models::users::ROLE_USER};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn default_role() -> String {
    ROLE_USER.to_string()
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

#[derive(Deserialize)]
pub struct AppointRequest {
    #[serde(default)]
    pub patient: String,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub username: String,
}

impl From<AppointRequest> for Booking {
    fn from(req: AppointRequest) -> Self {
        Booking {
            patient_name: req.patient,
            doctor: req.doctor,
            date: req.date,
            slot: req.slot,
            username: req.username,
        }
    }
}

#[derive(Deserialize)]
pub struct SearchAppointQuery {
    pub username: Option<String>,
}
