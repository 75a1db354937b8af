//! Line-oriented prompts over arbitrary reader/writer pairs.

use std::io::{BufRead, Write};

use colored::*;

use crate::error::Result;
use crate::model::{EmailAddress, Labeler};

/// Print `prompt` and read one line. `None` means end of input.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{} ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Yes/no question defaulting to no. Re-asks on anything unrecognized.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<Option<bool>> {
    let prompt = format!("{} [y/N]:", question);
    loop {
        let Some(answer) = prompt_line(input, output, &prompt)? else {
            return Ok(None);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "" | "n" | "no" => return Ok(Some(false)),
            _ => writeln!(output, "{}", "Error: invalid input".red())?,
        }
    }
}

/// Build the session's labeler, prompting for whatever was not supplied.
///
/// A supplied email must already be valid. A prompted email is re-asked
/// until it validates; an empty answer means no email.
pub fn prompt_labeler<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: Option<String>,
    email: Option<String>,
) -> Result<Labeler> {
    let name = match name {
        Some(name) => Some(name),
        None => prompt_line(input, output, "Name:")?.filter(|n| !n.is_empty()),
    };

    if let Some(email) = email {
        return Labeler::new(name, Some(&email));
    }

    loop {
        let Some(raw) = prompt_line(input, output, "Email:")? else {
            return Labeler::new(name, None);
        };
        if raw.is_empty() {
            return Labeler::new(name, None);
        }
        match EmailAddress::parse(&raw) {
            Ok(email) => return Labeler::new(name, Some(email.as_str())),
            Err(e) => {
                log::debug!("Rejected email input: {}", e);
                writeln!(output, "{} {}", "Error:".red(), e)?;
            }
        }
    }
}
