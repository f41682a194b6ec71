use crate::error::CliError;
use serde::Serialize;
use std::io::{self, Write};

/// Writes one compact JSON document per line to stdout.
pub fn print_json_line<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_json_pretty<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
