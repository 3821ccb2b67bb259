pub mod appointments;
pub mod users;
