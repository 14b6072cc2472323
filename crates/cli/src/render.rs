//! Console rendering helpers.
//!
//! Fixed-width headers and separators keep the console output consistent
//! across screens; patient lines always carry the triage colour.

use triage_core::Patient;

/// Width of headers and separators, in columns.
pub const FRAME_WIDTH: usize = 60;

/// Clears the terminal screen and homes the cursor.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

/// Prints a centred header between two full-width borders.
pub fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(FRAME_WIDTH));
    println!("{}", centred(title));
    println!("{}", "=".repeat(FRAME_WIDTH));
}

/// Prints a full-width separator line.
pub fn print_separator() {
    println!("{}", "-".repeat(FRAME_WIDTH));
}

/// One-line patient summary with the triage colour.
pub fn patient_line(patient: &Patient) -> String {
    format!("{} - {}", patient.name, patient.colour())
}

fn centred(text: &str) -> String {
    format!("{:^width$}", text, width = FRAME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::NonEmptyText;

    #[test]
    fn patient_line_shows_name_and_colour() {
        let patient = Patient::new(NonEmptyText::new("Margaret Shaw").expect("valid name"), 1);
        assert_eq!(patient_line(&patient), "Margaret Shaw - RED");
    }

    #[test]
    fn centred_pads_to_frame_width() {
        let line = centred("MAIN MENU");
        assert_eq!(line.len(), FRAME_WIDTH);
        assert_eq!(line.trim(), "MAIN MENU");
    }
}
