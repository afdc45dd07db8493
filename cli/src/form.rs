//! `--field key=value` handling on top of the shared record editor.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use records::draft::{Draft, FormField};
use records::editor::{Editor, Submission};

use crate::CliError;

/// Split `key=value`. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(&str, &str), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::BadAssignment(raw.to_owned()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::BadAssignment(raw.to_owned()));
    }
    Ok((key, value))
}

/// Apply every assignment to the open draft, then validate it into a submission.
pub fn fill<D: Draft>(editor: &mut Editor<D>, assignments: &[String]) -> Result<Submission<D::Payload>, CliError> {
    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        let field = D::Field::from_key(key).ok_or_else(|| CliError::UnknownField(key.to_owned()))?;
        editor.set(field, value)?;
    }
    Ok(editor.submission()?)
}

/// Field keys accepted for `D`, for help output.
pub fn field_keys<D: Draft>() -> Vec<&'static str> {
    D::Field::ALL.iter().map(|field| field.key()).collect()
}
