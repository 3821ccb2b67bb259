use crate::schema::appointments;
use chrono::NaiveDateTime;

#[derive(Queryable, Clone, Debug)]
pub struct Appointment {
    pub id: u64,
    pub patient_name: String,
    pub doctor: String,
    pub date: String,
    pub slot: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Clone, Debug)]
#[table_name = "appointments"]
pub struct NewAppointment {
    pub patient_name: String,
    pub doctor: String,
    pub date: String,
    pub slot: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

// Column widths in the appointments table, in characters.
pub const PATIENT_NAME_MAX_LEN: usize = 128;
pub const DOCTOR_MAX_LEN: usize = 128;
pub const DATE_MAX_LEN: usize = 32;
pub const SLOT_MAX_LEN: usize = 32;
pub const USERNAME_MAX_LEN: usize = super::users::USERNAME_MAX_LEN;
