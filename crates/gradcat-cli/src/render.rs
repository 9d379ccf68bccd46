//! Terminal rendering of program cards and the comparison table.
//!
//! The "N/A" display policy lives here and only here: absent optional
//! fields render as N/A, and so do zero credits and zero tuition, which the
//! data model treats as genuine values.

use gradcat_core::{Program, Requirements};

const NOT_AVAILABLE: &str = "N/A";

/// Renders one program as a multi-line card.
pub fn card(program: &Program) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}] {}\n", program.academic_field, program.program_name));
    out.push_str(&format!("  University:    {}\n", program.university_name));
    out.push_str(&format!(
        "  Location:      {}\n",
        na_text(program.university_location.as_deref())
    ));
    out.push_str(&format!(
        "  Overall rank:  {}\n",
        na_rank(program.university_overall_ranking)
    ));
    out.push_str(&format!(
        "  Subject rank:  {}\n",
        na_rank(program.university_subject_ranking)
    ));
    out.push_str(&format!(
        "  Duration:      {}\n",
        na_text(program.program_duration.as_deref())
    ));
    out.push_str(&format!("  Credits:       {}\n", na_number(program.total_credits)));
    out.push_str(&format!(
        "  Tuition:       {}\n",
        na_tuition(program.annual_tuition_fee)
    ));
    out.push_str("  Requirements:");
    match Requirements::parse(program.admission_requirements.as_deref()) {
        Requirements::Unavailable => out.push_str(&format!(" {}\n", NOT_AVAILABLE)),
        Requirements::Paragraph(text) => out.push_str(&format!(" {}\n", text)),
        Requirements::Items(items) => {
            out.push('\n');
            for item in items {
                out.push_str(&format!("    - {}\n", item));
            }
        }
    }
    out.push_str(&format!(
        "  Link:          {}\n",
        na_text(program.program_link.as_deref())
    ));
    out.push_str(&format!("  Added:         {}\n", program.date_added.format("%Y-%m-%d")));
    out.push_str(&format!("  Id:            {}\n", program.id));
    out
}

/// Renders the side-by-side comparison table, one column per program.
pub fn comparison_table(programs: &[&Program]) -> String {
    let rows: Vec<(&str, Vec<String>)> = vec![
        (
            "Field",
            programs.iter().map(|p| p.academic_field.clone()).collect(),
        ),
        (
            "Program",
            programs.iter().map(|p| p.program_name.clone()).collect(),
        ),
        (
            "University",
            programs.iter().map(|p| p.university_name.clone()).collect(),
        ),
        (
            "Location",
            programs
                .iter()
                .map(|p| na_text(p.university_location.as_deref()))
                .collect(),
        ),
        (
            "Overall rank",
            programs
                .iter()
                .map(|p| na_rank(p.university_overall_ranking))
                .collect(),
        ),
        (
            "Subject rank",
            programs
                .iter()
                .map(|p| na_rank(p.university_subject_ranking))
                .collect(),
        ),
        (
            "Duration",
            programs
                .iter()
                .map(|p| na_text(p.program_duration.as_deref()))
                .collect(),
        ),
        (
            "Credits",
            programs.iter().map(|p| na_number(p.total_credits)).collect(),
        ),
        (
            "Annual tuition",
            programs
                .iter()
                .map(|p| na_tuition(p.annual_tuition_fee))
                .collect(),
        ),
        (
            "Requirements",
            programs
                .iter()
                .map(|p| requirements_cell(p.admission_requirements.as_deref()))
                .collect(),
        ),
        (
            "Link",
            programs
                .iter()
                .map(|p| na_text(p.program_link.as_deref()))
                .collect(),
        ),
    ];

    // Column widths: the label column, then one column per program.
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; programs.len()];
    for (_, cells) in &rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    for (label, cells) in &rows {
        out.push_str(&format!("{:<label_width$}", label));
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&format!("  | {:<width$}", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out
}

/// Collapses requirements text to a single table cell.
fn requirements_cell(text: Option<&str>) -> String {
    match Requirements::parse(text) {
        Requirements::Unavailable => NOT_AVAILABLE.to_string(),
        Requirements::Paragraph(text) => text,
        Requirements::Items(items) => items.join("; "),
    }
}

fn na_text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn na_rank(value: Option<u32>) -> String {
    match value {
        Some(rank) => format!("#{}", rank),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Zero renders as N/A; the model keeps zero as a real value.
fn na_number(value: u32) -> String {
    if value == 0 {
        NOT_AVAILABLE.to_string()
    } else {
        thousands(value)
    }
}

fn na_tuition(value: u32) -> String {
    if value == 0 {
        NOT_AVAILABLE.to_string()
    } else {
        format!("${}/year", thousands(value))
    }
}

/// Formats an integer with comma separators ("58000" -> "58,000").
fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
