//! Export filename construction.

use engine::DateRange;

/// Builds `{name}-ledger[-{from}-to-{to}].{extension}` with the subject
/// name sanitized for the filesystem.
pub fn export_filename(subject_name: &str, range: Option<&DateRange>, extension: &str) -> String {
    let base = sanitize(subject_name);
    match range {
        Some(range) => format!(
            "{base}-ledger-{}-to-{}.{extension}",
            range.from.format("%Y-%m-%d"),
            range.to.format("%Y-%m-%d"),
        ),
        None => format!("{base}-ledger.{extension}"),
    }
}

/// Non-alphanumeric characters become `-`; runs collapse and the ends are
/// trimmed so names like `M/s. Sharma & Sons` stay readable.
fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            out.push(c);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    let out = out.trim_end_matches('-').to_string();
    if out.is_empty() { "subject".to_string() } else { out }
}
