//! Scripted demonstration walkthrough.
//!
//! Registers a small intake of patients, attends by urgency, shows the
//! LIFO history and undoes the latest attendance, finishing with a summary
//! of all three collections and a JSON snapshot of the registry.

use triage_core::TriageService;
use triage_core::{NonEmptyText, Patient};

use crate::render;

/// Runs the eight-step walkthrough against a fresh service.
pub fn run(service: &mut TriageService) -> Result<(), Box<dyn std::error::Error>> {
    render::clear_screen();
    render::print_header("TRIAGE SIMULATOR - DEMO");

    step(1, "Register Patients");
    let intake = [
        ("Margaret Shaw", 1, "Cardiac arrest"),
        ("Tom Whitfield", 5, "Minor cold"),
        ("Priya Anand", 2, "Chest pain"),
    ];
    for (name, urgency_level, complaint) in intake {
        let patient = Patient::new(NonEmptyText::new(name)?, urgency_level);
        println!("+ {} - {} ({})", patient.name, patient.colour(), complaint);
        service.register(patient);
    }

    step(2, "View Waiting Queue");
    println!("The queue orders itself by urgency, not arrival:");
    print_waiting(service);

    step(3, "Attend Highest Priority Patient");
    if let Ok(patient) = service.attend_next() {
        println!("Now attending: {} - {}", patient.name, patient.colour());
    }

    step(4, "Updated Queue");
    print_waiting(service);

    step(5, "Attend Next Patient");
    if let Ok(patient) = service.attend_next() {
        println!("Now attending: {} - {}", patient.name, patient.colour());
    }

    step(6, "Attendance History");
    println!("Most recent attendance first:");
    for (idx, attendance) in service.attendance_history().iter().rev().enumerate() {
        println!("{}. {}", idx + 1, render::patient_line(&attendance.patient));
    }

    step(7, "Undo Last Attendance");
    if let Ok(patient) = service.undo_last_attendance() {
        println!(
            "Undo successful: '{}' re-added to the waiting queue.",
            patient.name
        );
    }

    step(8, "Final Summary");
    println!("Waiting queue: {} patient(s)", service.waiting_count());
    for patient in service.waiting_patients() {
        println!("   - {}", render::patient_line(&patient));
    }
    println!();
    println!("Attended patients: {} patient(s)", service.attended_count());
    for attendance in service.attendance_history().iter().rev() {
        println!("   - {}", render::patient_line(&attendance.patient));
    }
    println!();
    println!("Complete registry: {} record(s)", service.registered_count());

    render::print_separator();
    println!("Registry snapshot:");
    println!("{}", serde_json::to_string_pretty(service.all_patients())?);

    render::print_separator();
    println!("Demonstration complete.");

    Ok(())
}

fn step(number: u8, description: &str) {
    render::print_header(&format!("STEP {}: {}", number, description));
}

fn print_waiting(service: &TriageService) {
    println!("Patients waiting: {}", service.waiting_count());
    for (idx, patient) in service.waiting_patients().iter().enumerate() {
        println!("{}. {}", idx + 1, render::patient_line(patient));
    }
}
