//! Triage service: waiting queue, attendance history and patient registry.
//!
//! The service owns three collections with distinct disciplines:
//! - `waiting`: binary min-heap keyed by urgency, O(log n) insert and pop
//! - `history`: attendance records used as a stack, most recent at the tail
//! - `registry`: append-only record of every registration
//!
//! A patient is always in the registry and in exactly one of waiting or
//! history. Only the service's own operations mutate the collections; all
//! read operations hand out snapshots or immutable borrows.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};

use crate::error::{TriageError, TriageResult};
use crate::patient::Patient;

/// A single attendance event: who was seen and when.
#[derive(Debug, Clone)]
pub struct Attendance {
    /// The patient who was attended.
    pub patient: Patient,
    /// Moment the patient was taken off the waiting queue.
    pub attended_at: DateTime<Utc>,
    // Registration sequence, kept so an undone patient re-enters the
    // waiting queue at its original position among equal urgencies.
    seq: u64,
}

/// Heap entry pairing a patient with its registration sequence number.
///
/// The sequence number breaks ties between equal urgency levels, making
/// the waiting order deterministic: same level, earlier registration first.
#[derive(Debug, Clone)]
struct WaitingEntry {
    patient: Patient,
    seq: u64,
}

impl WaitingEntry {
    fn rank(&self) -> (u8, u64) {
        (self.patient.urgency_level, self.seq)
    }
}

impl PartialEq for WaitingEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for WaitingEntry {}

impl PartialOrd for WaitingEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WaitingEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// In-memory triage state manager.
///
/// One instance per running system, constructed at startup and passed by
/// reference to whichever component needs it. All operations are
/// synchronous in-memory transformations; none blocks or performs I/O.
#[derive(Debug, Default)]
pub struct TriageService {
    waiting: BinaryHeap<Reverse<WaitingEntry>>,
    history: Vec<Attendance>,
    registry: Vec<Patient>,
    next_seq: u64,
}

impl TriageService {
    /// Creates a service with all three collections empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a patient into the waiting queue and the permanent
    /// registry. O(log n) in the number of waiting patients.
    pub fn register(&mut self, patient: Patient) {
        let seq = self.next_seq;
        self.next_seq += 1;

        tracing::debug!("registered patient {}", patient);
        self.registry.push(patient.clone());
        self.waiting.push(Reverse(WaitingEntry { patient, seq }));
    }

    /// Sorted snapshot of the waiting queue, most urgent first, equal
    /// urgencies in registration order. Does not disturb the heap.
    pub fn waiting_patients(&self) -> Vec<Patient> {
        let mut entries: Vec<&WaitingEntry> =
            self.waiting.iter().map(|Reverse(entry)| entry).collect();
        entries.sort_by_key(|entry| entry.rank());
        entries.into_iter().map(|entry| entry.patient.clone()).collect()
    }

    /// Attends the highest-priority waiting patient, moving it to the tail
    /// of the attendance history. O(log n).
    ///
    /// # Errors
    ///
    /// Returns `TriageError::EmptyWaitingSet` when nobody is waiting; the
    /// collections are left unchanged.
    pub fn attend_next(&mut self) -> TriageResult<Patient> {
        let Reverse(entry) = self.waiting.pop().ok_or(TriageError::EmptyWaitingSet)?;
        let patient = entry.patient.clone();

        tracing::info!("now attending {}", patient);
        self.history.push(Attendance {
            patient: entry.patient,
            attended_at: Utc::now(),
            seq: entry.seq,
        });

        Ok(patient)
    }

    /// Undoes the most recent attendance, returning that patient to the
    /// waiting queue under its original registration sequence. O(log n).
    ///
    /// This is the sole compensation mechanism: no depth limit, no redo.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::EmptyHistory` when no attendance is left to
    /// undo; the collections are left unchanged.
    pub fn undo_last_attendance(&mut self) -> TriageResult<Patient> {
        let attendance = self.history.pop().ok_or(TriageError::EmptyHistory)?;
        let patient = attendance.patient.clone();

        tracing::info!("undid attendance of {}", patient);
        self.waiting.push(Reverse(WaitingEntry {
            patient: attendance.patient,
            seq: attendance.seq,
        }));

        Ok(patient)
    }

    /// Attendance history as stored: oldest first, most recent at the
    /// tail. Callers wanting most-recent-first iterate in reverse.
    pub fn attendance_history(&self) -> &[Attendance] {
        &self.history
    }

    /// Every patient ever registered, in registration order.
    pub fn all_patients(&self) -> &[Patient] {
        &self.registry
    }

    /// Number of patients currently waiting.
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Number of attendances currently on record.
    pub fn attended_count(&self) -> usize {
        self.history.len()
    }

    /// Number of patients ever registered.
    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NonEmptyText;

    fn patient(name: &str, urgency_level: u8) -> Patient {
        Patient::new(NonEmptyText::new(name).expect("valid name"), urgency_level)
    }

    fn names(patients: &[Patient]) -> Vec<&str> {
        patients.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn registry_always_holds_waiting_plus_attended() {
        let mut service = TriageService::new();

        for level in [3, 1, 5, 2] {
            service.register(patient("Patient", level));
            assert_eq!(
                service.registered_count(),
                service.waiting_count() + service.attended_count()
            );
        }

        service.attend_next().expect("patients are waiting");
        assert_eq!(
            service.registered_count(),
            service.waiting_count() + service.attended_count()
        );

        service.undo_last_attendance().expect("one attendance on record");
        assert_eq!(
            service.registered_count(),
            service.waiting_count() + service.attended_count()
        );
    }

    #[test]
    fn registry_retains_each_registration_exactly_once() {
        let mut service = TriageService::new();
        let registered = patient("Margaret Shaw", 1);
        let id = registered.id;
        service.register(registered);

        service.attend_next().expect("patient is waiting");
        service.undo_last_attendance().expect("attendance on record");
        service.attend_next().expect("patient is waiting again");

        let matches: Vec<_> = service
            .all_patients()
            .iter()
            .filter(|p| p.id == id)
            .collect();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn waiting_patients_sorted_most_urgent_first() {
        let mut service = TriageService::new();
        for (name, level) in [("D", 4), ("A", 1), ("E", 5), ("B", 2), ("C", 3)] {
            service.register(patient(name, level));
        }

        let levels: Vec<u8> = service
            .waiting_patients()
            .iter()
            .map(|p| p.urgency_level)
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn equal_urgency_listed_in_registration_order() {
        let mut service = TriageService::new();
        service.register(patient("First", 3));
        service.register(patient("Second", 3));
        service.register(patient("Third", 3));

        assert_eq!(
            names(&service.waiting_patients()),
            vec!["First", "Second", "Third"]
        );

        let attended = service.attend_next().expect("patients are waiting");
        assert_eq!(attended.name.as_str(), "First");
    }

    #[test]
    fn attend_then_undo_restores_waiting_and_history() {
        let mut service = TriageService::new();
        for (name, level) in [("Margaret Shaw", 1), ("Tom Whitfield", 5), ("Priya Anand", 2)] {
            service.register(patient(name, level));
        }

        let waiting_before = service.waiting_patients();
        let history_before = service.attended_count();

        let attended = service.attend_next().expect("patients are waiting");
        let undone = service.undo_last_attendance().expect("attendance on record");

        assert_eq!(attended, undone);
        assert_eq!(service.waiting_patients(), waiting_before);
        assert_eq!(service.attended_count(), history_before);
    }

    #[test]
    fn history_is_lifo() {
        let mut service = TriageService::new();
        service.register(patient("P1", 1));
        service.register(patient("P2", 2));
        service.register(patient("P3", 3));

        for _ in 0..3 {
            service.attend_next().expect("patients are waiting");
        }

        let stored: Vec<&str> = service
            .attendance_history()
            .iter()
            .map(|a| a.patient.name.as_str())
            .collect();
        assert_eq!(stored, vec!["P1", "P2", "P3"]);

        let undo_order: Vec<String> = (0..3)
            .map(|_| {
                service
                    .undo_last_attendance()
                    .expect("attendance on record")
                    .name
                    .to_string()
            })
            .collect();
        assert_eq!(undo_order, vec!["P3", "P2", "P1"]);
    }

    #[test]
    fn attend_on_empty_waiting_set_changes_nothing() {
        let mut service = TriageService::new();
        service.register(patient("Attended already", 2));
        service.attend_next().expect("patient is waiting");

        assert_eq!(service.attend_next(), Err(TriageError::EmptyWaitingSet));
        assert_eq!(service.waiting_count(), 0);
        assert_eq!(service.attended_count(), 1);
        assert_eq!(service.registered_count(), 1);
    }

    #[test]
    fn undo_on_empty_history_changes_nothing() {
        let mut service = TriageService::new();
        service.register(patient("Still waiting", 2));

        assert_eq!(
            service.undo_last_attendance(),
            Err(TriageError::EmptyHistory)
        );
        assert_eq!(service.waiting_count(), 1);
        assert_eq!(service.attended_count(), 0);
        assert_eq!(service.registered_count(), 1);
    }

    #[test]
    fn mixed_scenario_matches_expected_flow() {
        let mut service = TriageService::new();
        service.register(patient("A", 1));
        service.register(patient("B", 5));
        service.register(patient("C", 2));

        assert_eq!(names(&service.waiting_patients()), vec!["A", "C", "B"]);

        let attended = service.attend_next().expect("patients are waiting");
        assert_eq!(attended.name.as_str(), "A");
        assert_eq!(names(&service.waiting_patients()), vec!["C", "B"]);
        assert_eq!(service.attendance_history().len(), 1);
        assert_eq!(
            service.attendance_history()[0].patient.name.as_str(),
            "A"
        );

        let undone = service.undo_last_attendance().expect("attendance on record");
        assert_eq!(undone.name.as_str(), "A");
        assert_eq!(names(&service.waiting_patients()), vec!["A", "C", "B"]);
        assert!(service.attendance_history().is_empty());
    }
}
