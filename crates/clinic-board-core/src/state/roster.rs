//! Doctor roster: today's doctors and a rotation cursor over them.

use std::sync::mpsc::Receiver;

use chrono::Weekday;

use super::{ChangeEvent, Notifier};
use crate::models::{day_name, seed_doctors, today, Doctor};

/// Roster with a "today's doctors" view.
///
/// `today_doctors` only changes on [`refresh_today`](Self::refresh_today) or
/// [`refresh_for`](Self::refresh_for). `current_index` always points inside
/// it, or is 0 when it is empty.
#[derive(Debug)]
pub struct RosterState {
    doctors: Vec<Doctor>,
    today_doctors: Vec<Doctor>,
    current_index: usize,
    notifier: Notifier,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterState {
    /// Roster over the clinic's fixed doctor list.
    pub fn new() -> Self {
        Self::with_doctors(seed_doctors())
    }

    /// Roster over a custom doctor list.
    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors,
            today_doctors: Vec::new(),
            current_index: 0,
            notifier: Notifier::default(),
        }
    }

    /// Every doctor, in roster order.
    pub fn doctor_list(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Today's doctors as of the last refresh.
    pub fn today_doctors(&self) -> &[Doctor] {
        &self.today_doctors
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Doctor under the cursor, if any.
    pub fn current_doctor(&self) -> Option<&Doctor> {
        self.today_doctors.get(self.current_index)
    }

    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    /// Today's day name, read from the local clock on every call.
    pub fn current_day_name(&self) -> &'static str {
        day_name(today())
    }

    /// Doctors practicing on `day`, in roster order. Does not touch state.
    pub fn doctors_on(&self, day: Weekday) -> Vec<Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.works_on(day))
            .cloned()
            .collect()
    }

    /// Recompute today's doctors from the local clock.
    pub fn refresh_today(&mut self) -> &[Doctor] {
        self.refresh_for(today())
    }

    /// Recompute today's doctors as if today were `day`.
    ///
    /// The returned slice is the stored view itself. If the cursor no longer
    /// fits the new list it goes back to 0.
    pub fn refresh_for(&mut self, day: Weekday) -> &[Doctor] {
        self.today_doctors = self.doctors_on(day);
        if self.current_index >= self.today_doctors.len() {
            self.current_index = 0;
        }

        let count = self.today_doctors.len();
        tracing::debug!(day = day_name(day), count, "refreshed today's doctors");
        self.notifier.notify(ChangeEvent::RosterRefreshed { count });
        &self.today_doctors
    }

    /// Advance the cursor, wrapping from the last doctor to the first.
    pub fn next_doctor(&mut self) {
        if self.today_doctors.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.today_doctors.len();
        self.notifier.notify(ChangeEvent::CursorMoved {
            index: self.current_index,
        });
    }

    /// Put the cursor back on the first doctor.
    pub fn reset_doctor_index(&mut self) {
        self.current_index = 0;
        self.notifier.notify(ChangeEvent::CursorMoved { index: 0 });
    }

    /// Clear the derived view and cursor. The doctor list is kept.
    pub fn reset(&mut self) {
        self.today_doctors.clear();
        self.current_index = 0;
        self.notifier.notify(ChangeEvent::RosterRefreshed { count: 0 });
        self.notifier.notify(ChangeEvent::CursorMoved { index: 0 });
    }
}
