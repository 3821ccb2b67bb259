use anyhow::Context;
use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use super::{get_db_conn, AppointmentStore, StoreError, StoreResult, UserStore};
use crate::{
    models::{
        appointments::{Appointment, NewAppointment},
        users::UserData,
    },
    DbPool,
};

#[derive(Clone)]
pub struct MysqlStore {
    pool: DbPool,
}

impl MysqlStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn insert_error(err: DieselError) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => StoreError::Duplicate,
        err => StoreError::Backend(anyhow::Error::new(err).context("DB error")),
    }
}

impl UserStore for MysqlStore {
    fn insert_user(&self, user: UserData) -> StoreResult<()> {
        use crate::schema::users;

        let conn = get_db_conn(&self.pool)?;
        diesel::insert_into(users::table)
            .values(&user)
            .execute(&conn)
            .map_err(insert_error)?;
        Ok(())
    }

    fn find_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> StoreResult<Option<UserData>> {
        use crate::schema::users;

        let conn = get_db_conn(&self.pool)?;
        let user = users::table
            .filter(users::username.eq(username))
            .filter(users::password.eq(password))
            .filter(users::role.eq(role))
            .first::<UserData>(&conn)
            .optional()
            .context("DB error")?;
        Ok(user)
    }
}

impl AppointmentStore for MysqlStore {
    fn insert_appointment(&self, appo: NewAppointment) -> StoreResult<()> {
        use crate::schema::appointments;

        // The unique (doctor, date, slot) index makes this a conditional insert.
        let conn = get_db_conn(&self.pool)?;
        diesel::insert_into(appointments::table)
            .values(&appo)
            .execute(&conn)
            .map_err(insert_error)?;
        Ok(())
    }

    fn list_appointments(&self, username: Option<&str>) -> StoreResult<Vec<Appointment>> {
        use crate::schema::appointments;

        let conn = get_db_conn(&self.pool)?;
        let mut query = appointments::table.into_boxed();
        if let Some(username) = username {
            query = query.filter(appointments::username.eq(username));
        }
        let appos = query
            .order((
                appointments::date.asc(),
                appointments::slot.asc(),
                appointments::id.asc(),
            ))
            .load::<Appointment>(&conn)
            .context("DB error")?;
        Ok(appos)
    }
}
