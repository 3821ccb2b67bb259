#[cfg(test)]
pub mod memory;
pub mod mysql;

use crate::{
    models::{
        appointments::{Appointment, NewAppointment},
        users::UserData,
    },
    DbPool,
};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use r2d2::PooledConnection;

pub use self::mysql::MysqlStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Duplicate,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait UserStore: Send + Sync {
    /// Fails with [`StoreError::Duplicate`] when the username is taken.
    fn insert_user(&self, user: UserData) -> StoreResult<()>;

    fn find_user(&self, username: &str, password: &str, role: &str)
        -> StoreResult<Option<UserData>>;
}

pub trait AppointmentStore: Send + Sync {
    /// Inserts unless the doctor/date/slot triple is already booked, in which
    /// case [`StoreError::Duplicate`] is returned and nothing is written.
    fn insert_appointment(&self, appo: NewAppointment) -> StoreResult<()>;

    /// Ordered by date, then slot, then insertion.
    fn list_appointments(&self, username: Option<&str>) -> StoreResult<Vec<Appointment>>;
}

pub fn get_db_conn(
    pool: &DbPool,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get().context("DB connection")
}
