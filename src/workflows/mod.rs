//! Workflows - one function per menu action.
//!
//! Each workflow is a short linear script over the session: prompt, parse,
//! check, then read from or write to the store through `core`. Add workflows
//! abort on the first bad answer. Edit workflows treat every field on its own:
//! a bad answer is logged and that field keeps its value.

/// Category workflows (menu entries 1, 2, 3, 4 and 9)
pub mod category;
/// Product workflows (menu entries 5, 6, 7 and 8)
pub mod product;

use crate::{
    console::Console,
    errors::{Error, Result},
    validation::Violation,
};
use std::io::{BufRead, Write};
use tracing::{error, info};

/// Outcome of offering one field for editing
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit<T> {
    /// The operator declined to edit the field
    Keep,
    /// A new value was entered and accepted
    Set(T),
    /// A new value was entered but refused; the reason has been logged
    Rejected,
}

impl<T> FieldEdit<T> {
    /// Writes an accepted value into `slot`. Returns whether the slot changed.
    pub fn apply<U: From<T>>(self, label: &str, slot: &mut U) -> bool {
        match self {
            Self::Set(value) => {
                *slot = value.into();
                info!("{label} updated");
                true
            }
            Self::Keep | Self::Rejected => false,
        }
    }

    /// Refuses an entered value, logging each reason.
    fn refuse(label: &str, reasons: &[Violation]) -> Self {
        for reason in reasons {
            error!("{reason}");
        }
        error!("Invalid input - {label} did not update");
        Self::Rejected
    }
}

/// Asks whether to edit a field and, if so, reads and parses the new value.
///
/// Input `parse` cannot handle becomes [`FieldEdit::Rejected`] rather than an
/// error, so the caller moves on to the next field.
pub(crate) fn prompt_edit<R, W, T>(
    console: &mut Console<R, W>,
    label: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<FieldEdit<T>>
where
    R: BufRead,
    W: Write,
{
    if !console.confirm(&format!("Edit {label} - y or n?"))? {
        console.clear()?;
        return Ok(FieldEdit::Keep);
    }
    let input = console.ask(&format!("Enter {label}:"))?;
    console.clear()?;
    Ok(parse(&input).map_or_else(|| FieldEdit::refuse(label, &[]), FieldEdit::Set))
}

/// Reads an id for a selection step, aborting the workflow if it is not a
/// whole number.
pub(crate) fn read_id<R, W>(
    console: &mut Console<R, W>,
    prompt: &str,
    field: &'static str,
) -> Result<i32>
where
    R: BufRead,
    W: Write,
{
    let input = console.ask(prompt)?;
    console.clear()?;
    let id = parse_id(&input).ok_or(Error::InvalidInput { field, input })?;
    info!("{field} {id} selected");
    Ok(id)
}

/// Prints an id/name selection table.
pub(crate) fn print_id_table<'a, R, W>(
    console: &mut Console<R, W>,
    id_header: &str,
    name_header: &str,
    rows: impl IntoIterator<Item = (i32, &'a str)>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    console.say(format_args!("{id_header:<12}{name_header}"))?;
    for (id, name) in rows {
        console.say(format_args!("{id:<12}{name}"))?;
    }
    Ok(())
}

/// Parses a record id; surrounding whitespace is allowed.
#[must_use]
pub fn parse_id(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// Parses a stock quantity: a non-negative small integer.
#[must_use]
pub fn parse_units(input: &str) -> Option<i16> {
    input.trim().parse::<i16>().ok().filter(|units| *units >= 0)
}

/// Parses a unit price and rounds it to a whole amount, half to even.
/// Negative and non-finite values are refused.
#[must_use]
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .map(f64::round_ties_even)
}

/// Optional text: an empty answer means "unset".
#[must_use]
pub fn parse_optional_text(input: &str) -> Option<Option<String>> {
    Some((!input.is_empty()).then(|| input.to_string()))
}

/// Required text is taken verbatim; the field rules decide whether it is
/// acceptable.
#[must_use]
pub fn parse_text(input: &str) -> Option<String> {
    Some(input.to_string())
}

/// Formats an optional value, printing nothing when unset.
pub(crate) fn or_blank<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
