use regex::Regex;

use crate::models::StructuredAnswer;

/// Scanner state while walking the model reply line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Summary,
    Symptoms,
    Remedies,
    Precautions,
}

/// Recognize a section marker, whole-line or inline, case-insensitive.
fn section_for_line(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    if lower.contains("symptom") {
        Some(Section::Symptoms)
    } else if lower.contains("remed") || lower.contains("treatment") {
        Some(Section::Remedies)
    } else if lower.contains("precaution")
        || lower.contains("warning")
        || lower.contains("when to see a doctor")
    {
        Some(Section::Precautions)
    } else if lower.contains("summary") {
        Some(Section::Summary)
    } else {
        None
    }
}

/// Map the model's free-text reply to a `StructuredAnswer`.
///
/// Pure and best-effort: empty input and internal failures come back as
/// answers carrying an `error` field, never as a panic to the caller.
pub fn extract_structured_answer(text: &str) -> StructuredAnswer {
    if text.is_empty() {
        log::warn!("empty model reply, nothing to extract");
        return StructuredAnswer::invalid_input();
    }

    match std::panic::catch_unwind(|| extract_sections(text)) {
        Ok(answer) => answer,
        Err(_) => {
            log::error!("extraction panicked on model reply of {} bytes", text.len());
            StructuredAnswer::parse_failure()
        }
    }
}

fn extract_sections(text: &str) -> StructuredAnswer {
    let bullet = Regex::new(r"^(?:[-•*]|\d+\.|\(\d+\))").unwrap();

    let mut summary_lines: Vec<&str> = Vec::new();
    let mut symptoms: Vec<String> = Vec::new();
    let mut remedies: Vec<String> = Vec::new();
    let mut precautions: Vec<String> = Vec::new();

    // Leading text before any marker is the summary paragraph.
    let mut section = Section::Summary;

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            // A blank line closes the summary paragraph.
            if section == Section::Summary && !summary_lines.is_empty() {
                section = Section::None;
            }
            continue;
        }

        if let Some(next) = section_for_line(line) {
            section = next;
            continue;
        }

        let items = match section {
            Section::Symptoms => &mut symptoms,
            Section::Remedies => &mut remedies,
            Section::Precautions => &mut precautions,
            Section::Summary => {
                summary_lines.push(line);
                continue;
            }
            Section::None => continue,
        };

        if let Some(marker) = bullet.find(line) {
            let item = line[marker.end()..].trim();
            if !item.is_empty() {
                items.push(item.to_string());
            }
        } else if line.chars().count() > 5 && !line.ends_with(':') {
            // Not a sub-heading, treat the whole line as one item.
            items.push(line.to_string());
        }
    }

    if symptoms.is_empty() && remedies.is_empty() && precautions.is_empty() {
        classify_loose_items(text, &mut symptoms, &mut remedies, &mut precautions);
    }

    symptoms.truncate(2);
    remedies.truncate(2);
    precautions.truncate(2);

    StructuredAnswer {
        summary: summary_lines.join("\n"),
        symptoms,
        remedies,
        precautions,
        error: None,
    }
}

/// Fallback for replies without recognizable headings: collect every
/// bullet or numbered line and bucket it by keyword. Items matching no
/// keyword set are dropped.
fn classify_loose_items(
    text: &str,
    symptoms: &mut Vec<String>,
    remedies: &mut Vec<String>,
    precautions: &mut Vec<String>,
) {
    let item_pattern = Regex::new(r"(?m)^\s*(?:[-•*]|\d+\.|\(\d+\))\s*(.+)$").unwrap();

    for capture in item_pattern.captures_iter(text) {
        let item = capture[1].trim();
        let lower = item.to_lowercase();

        if ["pain", "fever", "symptom"].iter().any(|k| lower.contains(k)) {
            symptoms.push(item.to_string());
        } else if ["rest", "drink", "take"].iter().any(|k| lower.contains(k)) {
            remedies.push(item.to_string());
        } else if ["avoid", "consult", "doctor"].iter().any(|k| lower.contains(k)) {
            precautions.push(item.to_string());
        }
    }
}
