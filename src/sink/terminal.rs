//! Human-readable terminal rendering.

use std::io::{self, Write};

use colored::*;
use log::warn;

use super::{fields, FieldValue, ResultSink};

/// Shown in place of an empty list.
const EMPTY_LIST: &str = "none found";

/// Width of the label column.
const LABEL_WIDTH: usize = 14;

/// Writes each field as an aligned `label value` line as soon as it is set.
pub struct TerminalSink<W: Write = io::Stdout> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    /// Sink writing to stdout.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSink<W> {
    /// Sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_field(&mut self, name: &str, value: &FieldValue) -> io::Result<()> {
        let label = format!("{:<width$}", label_for(name), width = LABEL_WIDTH);
        match value {
            FieldValue::Text(text) => writeln!(self.out, "{} {}", label.bold(), text),
            FieldValue::List(items) if items.is_empty() => {
                writeln!(self.out, "{} {}", label.bold(), EMPTY_LIST.dimmed())
            }
            FieldValue::List(items) => {
                writeln!(self.out, "{} {}", label.bold(), items[0])?;
                for item in &items[1..] {
                    writeln!(self.out, "{:<width$} {}", "", item, width = LABEL_WIDTH)?;
                }
                Ok(())
            }
        }
    }
}

impl<W: Write> ResultSink for TerminalSink<W> {
    fn set_field(&mut self, name: &str, value: FieldValue) {
        if let Err(e) = self.write_field(name, &value) {
            warn!("Failed to write field {name}: {e}");
        }
    }

    fn show_error(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{} {}", "error:".red().bold(), message) {
            warn!("Failed to write error message: {e}");
        }
    }
}

fn label_for(name: &str) -> &str {
    match name {
        fields::TARGET => "Target",
        fields::APEX => "Apex",
        fields::NAME_SERVERS => "Name servers",
        fields::HOST_ADDRESSES => "A (host)",
        fields::APEX_ADDRESSES => "A (apex)",
        fields::DOMAIN_STATUS => "Status",
        fields::DOMAIN_EXPIRY => "Expiry",
        fields::DOMAIN_REGISTRAR => "Registrar",
        fields::IP => "IP",
        fields::REVERSE_DNS => "Reverse DNS",
        fields::ORG => "Org",
        fields::ASN => "ASN",
        fields::COMPANY => "Company",
        fields::LOCATION => "Location",
        other => other,
    }
}
