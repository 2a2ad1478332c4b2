//! Appointment store

use chrono::NaiveDate;
use shared::models::Appointment;

use super::APPOINTMENTS_KEY;
use crate::db::{KvStore, StorageResult};
use crate::utils::time;

/// Store for the `appointments` collection
#[derive(Debug, Clone)]
pub struct AppointmentStore {
    kv: KvStore,
}

impl AppointmentStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn list(&self) -> StorageResult<Vec<Appointment>> {
        self.kv.read_collection(APPOINTMENTS_KEY)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<Appointment>> {
        Ok(self.list()?.into_iter().find(|a| a.id == id))
    }

    pub fn insert(&self, appointment: Appointment) -> StorageResult<Appointment> {
        let mut appointments = self.list()?;
        appointments.push(appointment.clone());
        self.kv.write_collection(APPOINTMENTS_KEY, &appointments)?;
        Ok(appointment)
    }

    pub fn replace(&self, appointment: Appointment) -> StorageResult<Option<Appointment>> {
        let mut appointments = self.list()?;
        let Some(slot) = appointments.iter_mut().find(|a| a.id == appointment.id) else {
            return Ok(None);
        };
        *slot = appointment.clone();
        self.kv.write_collection(APPOINTMENTS_KEY, &appointments)?;
        Ok(Some(appointment))
    }

    /// Filter-rewrite delete
    pub fn remove(&self, id: &str) -> StorageResult<bool> {
        let appointments = self.list()?;
        let before = appointments.len();
        let kept: Vec<Appointment> = appointments.into_iter().filter(|a| a.id != id).collect();
        let removed = kept.len() != before;
        if removed {
            self.kv.write_collection(APPOINTMENTS_KEY, &kept)?;
        }
        Ok(removed)
    }

    /// Appointments on one calendar date
    pub fn list_on_date(&self, date: &str) -> StorageResult<Vec<Appointment>> {
        Ok(self.list()?.into_iter().filter(|a| a.date == date).collect())
    }

    /// Appointments whose date falls inside the inclusive range.
    /// Records with unparseable dates are skipped.
    pub fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Appointment>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|a| {
                time::parse_date(&a.date)
                    .map(|d| start <= d && d <= end)
                    .unwrap_or(false)
            })
            .collect())
    }
}
