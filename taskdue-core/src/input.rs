use std::io::{BufRead, Write};

use chrono::{NaiveDate, NaiveDateTime};

use crate::date_util::{parse_date, parse_time};
use crate::task::Priority;
use crate::{Result, TaskdueError};

/// Writes a prompt without a trailing newline and flushes it
pub fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Reads one trimmed line; `None` when the input is exhausted
pub fn read_optional<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads one trimmed line. Exhausted input is an error here: the acquisition
/// loops below cannot make progress without another line.
pub(crate) fn read_required<R: BufRead>(input: &mut R) -> Result<String> {
    read_optional(input)?.ok_or(TaskdueError::Eof)
}

/// Prompts until one of the four priority codes is entered, matched
/// case-insensitively. An unrecognised token is ignored without a message.
pub fn acquire_priority<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Priority> {
    loop {
        prompt(out, "priority [C/H/N/L]: ")?;
        if let Some(priority) = Priority::from_code(&read_required(input)?) {
            return Ok(priority);
        }
    }
}

/// Prompts until a calendar-valid `YYYY-MM-DD` date is entered
pub fn acquire_date<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<NaiveDate> {
    loop {
        prompt(out, "date (YYYY-MM-DD): ")?;
        match parse_date(&read_required(input)?) {
            Ok(date) => return Ok(date),
            Err(_) => writeln!(out, "Invalid date.")?,
        }
    }
}

/// Prompts until a valid `HH:MM` time is entered; the result is `date`
/// combined with that time-of-day
pub fn acquire_time<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    date: NaiveDate,
) -> Result<NaiveDateTime> {
    loop {
        prompt(out, "time (HH:MM): ")?;
        match parse_time(&read_required(input)?) {
            Ok(time) => return Ok(date.and_time(time)),
            Err(_) => writeln!(out, "Invalid time.")?,
        }
    }
}

/// Collects lines until a blank one, each trimmed, joined with line breaks
/// and trimmed at the tail. The result may be empty: creation rejects that,
/// editing does not.
pub fn acquire_name<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    writeln!(out, "task (finish with an empty line):")?;

    let mut lines: Vec<String> = Vec::new();
    loop {
        let line = read_required(input)?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n").trim_end().to_string())
}

/// Prompts for a 1-based task number in `1..=len`; returns the zero-based
/// index into the collection
pub fn acquire_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    len: usize,
) -> Result<usize> {
    loop {
        prompt(out, "task number: ")?;
        match read_required(input)?.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(n - 1),
            _ => writeln!(out, "Invalid task number.")?,
        }
    }
}
