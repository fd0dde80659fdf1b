//! Structured JSON logger
//!
//! - One log line = one event
//! - Explicit severity levels
//! - Deterministic key ordering (event, severity, then fields alphabetically)
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writes structured JSON log lines
pub struct Logger;

impl Logger {
    /// Log an event to stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log an event to stderr (error paths)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut output = String::with_capacity(128);

        output.push_str("{\"event\":\"");
        escape_json_string(&mut output, event);
        output.push_str("\",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted {
            output.push_str(",\"");
            escape_json_string(&mut output, key);
            output.push_str("\":\"");
            escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push('}');

        // A failed log write is not worth failing the operation over
        let _ = writeln!(writer, "{}", output);
    }
}

fn escape_json_string(output: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::log_to_writer(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead_the_line() {
        let line = render(Severity::Info, "table.write", &[]);
        assert_eq!(line, "{\"event\":\"table.write\",\"severity\":\"INFO\"}\n");
    }

    #[test]
    fn test_fields_sorted_alphabetically() {
        let line = render(
            Severity::Error,
            "table.write",
            &[("table", "users"), ("error", "boom")],
        );
        let error_pos = line.find("\"error\"").unwrap();
        let table_pos = line.find("\"table\"").unwrap();
        assert!(error_pos < table_pos);
    }

    #[test]
    fn test_values_are_escaped() {
        let line = render(Severity::Warn, "note", &[("msg", "say \"hi\"\n")]);
        assert!(line.contains("say \\\"hi\\\"\\n"));
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["msg"], "say \"hi\"\n");
    }
}
