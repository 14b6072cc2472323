//! Interactive triage console.
//!
//! Reads menu choices from stdin, validates registration input and renders
//! the service's state. Urgency levels are restricted to 1-5 and names
//! must be non-empty before a `Patient` is ever constructed; invalid input
//! prints a message and returns to the menu without touching the core.

use std::io::{self, BufRead, Write};

use triage_core::{
    constants::{URGENCY_MAX, URGENCY_MIN},
    CoreConfig, NonEmptyText, Patient, TriageColour, TriageService,
};

use crate::render;

/// Runs the menu loop until the user exits or stdin is closed.
pub fn run(cfg: &CoreConfig, service: &mut TriageService) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    render::clear_screen();
    render::print_header(&format!("Welcome to {}", cfg.ward_name()));

    loop {
        show_main_menu(cfg);

        let Some(choice) = prompt_line(&mut input, "\nEnter your choice (1-7): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => register_patient(&mut input, service)?,
            "2" => attend_next(service),
            "3" => show_waiting(service),
            "4" => show_attended(service),
            "5" => show_registry(service),
            "6" => undo_last(service),
            "7" => {
                farewell();
                return Ok(());
            }
            _ => println!("\nInvalid choice! Please enter a number between 1 and 7."),
        }

        pause(&mut input)?;
    }
}

fn show_main_menu(cfg: &CoreConfig) {
    render::clear_screen();
    render::print_header(cfg.ward_name());
    println!("1. Register New Patient");
    println!("2. Attend Next Patient");
    println!("3. View Waiting Queue");
    println!("4. View Attended Patients");
    println!("5. View Patient Registry");
    println!("6. Undo Last Attendance");
    println!("7. Exit");
    render::print_separator();
}

fn register_patient(input: &mut impl BufRead, service: &mut TriageService) -> io::Result<()> {
    render::clear_screen();
    render::print_header("REGISTER NEW PATIENT");
    println!("Select Patient Urgency Level:");
    for level in URGENCY_MIN..=URGENCY_MAX {
        println!(
            "{}. {}: {}",
            level,
            TriageColour::from_level(level),
            level_description(level)
        );
    }
    render::print_separator();

    let Some(raw_level) = prompt_line(input, "\nEnter urgency level (1-5): ")? else {
        return Ok(());
    };
    let urgency_level: u8 = match raw_level.parse() {
        Ok(level) if (URGENCY_MIN..=URGENCY_MAX).contains(&level) => level,
        Ok(_) => {
            println!("Invalid urgency level! Please enter a number between 1 and 5.");
            return Ok(());
        }
        Err(_) => {
            println!("Invalid input! Please enter a valid number.");
            return Ok(());
        }
    };

    let Some(raw_name) = prompt_line(input, "Enter patient name: ")? else {
        return Ok(());
    };
    let name = match NonEmptyText::new(&raw_name) {
        Ok(name) => name,
        Err(_) => {
            println!("Patient name cannot be empty!");
            return Ok(());
        }
    };

    let patient = Patient::new(name, urgency_level);
    println!("\nPatient '{}' registered successfully!", patient.name);
    println!("  Urgency Level: {}", patient.colour());
    service.register(patient);

    Ok(())
}

fn attend_next(service: &mut TriageService) {
    render::print_header("ATTEND NEXT PATIENT");

    if let Ok(patient) = service.attend_next() {
        println!("\nNow attending: {}", patient.name);
        println!("  Urgency Level: {}", patient.colour());
    } else {
        println!("\nNo patients in the waiting queue.");
    }

    render::print_separator();
}

fn show_waiting(service: &TriageService) {
    render::print_header("WAITING QUEUE");

    let queue = service.waiting_patients();
    if queue.is_empty() {
        println!("\nNo patients in the waiting queue.");
    } else {
        println!("\nTotal patients waiting: {}\n", queue.len());
        for (idx, patient) in queue.iter().enumerate() {
            println!("{}. {}", idx + 1, render::patient_line(patient));
        }
    }

    render::print_separator();
}

fn show_attended(service: &TriageService) {
    render::print_header("ATTENDED PATIENTS");

    let history = service.attendance_history();
    if history.is_empty() {
        println!("\nNo patients have been attended yet.");
    } else {
        println!("\nTotal patients attended: {}\n", history.len());
        // Most recent first, the reverse of stored order.
        for (idx, attendance) in history.iter().rev().enumerate() {
            println!("{}. {}", idx + 1, render::patient_line(&attendance.patient));
            println!(
                "   Attended at: {}",
                attendance.attended_at.format("%H:%M:%S")
            );
        }
    }

    render::print_separator();
}

fn show_registry(service: &TriageService) {
    render::print_header("PATIENT REGISTRY");

    let patients = service.all_patients();
    if patients.is_empty() {
        println!("\nNo patients have been registered yet.");
    } else {
        println!("\nTotal patients registered: {}\n", patients.len());
        for (idx, patient) in patients.iter().enumerate() {
            println!("{}. {}", idx + 1, render::patient_line(patient));
            println!(
                "   Registered at: {}",
                patient.registered_at.format("%H:%M:%S")
            );
        }
    }

    render::print_separator();
}

fn undo_last(service: &mut TriageService) {
    render::print_header("UNDO LAST ATTENDANCE");

    match service.undo_last_attendance() {
        Ok(patient) => println!(
            "\nLast attendance undone. Patient '{}' re-added to the waiting queue.",
            patient.name
        ),
        Err(_) => println!("\nNo attended patients to undo."),
    }

    render::print_separator();
}

fn farewell() {
    println!();
    render::print_separator();
    println!("Thank you for using the triage console!");
    render::print_separator();
}

fn level_description(level: u8) -> &'static str {
    match level {
        1 => "Life-threatening emergency",
        2 => "Emergency",
        3 => "Urgency",
        4 => "Minor urgency",
        5 => "Non-urgent",
        _ => "Unclassified",
    }
}

/// Prompts and reads one trimmed line. Returns `None` on end of input,
/// which callers treat as a request to leave the current screen.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn pause(input: &mut impl BufRead) -> io::Result<()> {
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
