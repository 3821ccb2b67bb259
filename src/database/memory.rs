use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;

use super::{AppointmentStore, StoreError, StoreResult, UserStore};
use crate::models::{
    appointments::{Appointment, NewAppointment},
    users::UserData,
};

/// In-process store with the same uniqueness rules as the MySQL schema.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<UserData>>,
    appointments: Mutex<Vec<Appointment>>,
}

fn lock<T>(mutex: &Mutex<T>) -> StoreResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| StoreError::Backend(anyhow!("store lock poisoned")))
}

fn same_slot(appo: &NewAppointment, other: &Appointment) -> bool {
    appo.doctor == other.doctor && appo.date == other.date && appo.slot == other.slot
}

impl UserStore for MemoryStore {
    fn insert_user(&self, user: UserData) -> StoreResult<()> {
        let mut users = lock(&self.users)?;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate);
        }
        users.push(user);
        Ok(())
    }

    fn find_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> StoreResult<Option<UserData>> {
        let users = lock(&self.users)?;
        Ok(users
            .iter()
            .find(|u| u.username == username && u.password == password && u.role == role)
            .cloned())
    }
}

impl AppointmentStore for MemoryStore {
    fn insert_appointment(&self, appo: NewAppointment) -> StoreResult<()> {
        let mut appos = lock(&self.appointments)?;
        if appos.iter().any(|a| same_slot(&appo, a)) {
            return Err(StoreError::Duplicate);
        }
        let id = appos.len() as u64 + 1;
        appos.push(Appointment {
            id,
            patient_name: appo.patient_name,
            doctor: appo.doctor,
            date: appo.date,
            slot: appo.slot,
            username: appo.username,
            created_at: appo.created_at,
        });
        Ok(())
    }

    fn list_appointments(&self, username: Option<&str>) -> StoreResult<Vec<Appointment>> {
        let appos = lock(&self.appointments)?;
        let mut res: Vec<Appointment> = appos
            .iter()
            .filter(|a| username.map_or(true, |name| a.username == name))
            .cloned()
            .collect();
        res.sort_by(|a, b| (&a.date, &a.slot, a.id).cmp(&(&b.date, &b.slot, b.id)));
        Ok(res)
    }
}

/// Store whose every call fails like an unreachable database.
pub struct BrokenStore;

fn unreachable_db() -> StoreError {
    StoreError::Backend(anyhow!("connection refused"))
}

impl UserStore for BrokenStore {
    fn insert_user(&self, _user: UserData) -> StoreResult<()> {
        Err(unreachable_db())
    }

    fn find_user(
        &self,
        _username: &str,
        _password: &str,
        _role: &str,
    ) -> StoreResult<Option<UserData>> {
        Err(unreachable_db())
    }
}

impl AppointmentStore for BrokenStore {
    fn insert_appointment(&self, _appo: NewAppointment) -> StoreResult<()> {
        Err(unreachable_db())
    }

    fn list_appointments(&self, _username: Option<&str>) -> StoreResult<Vec<Appointment>> {
        Err(unreachable_db())
    }
}
