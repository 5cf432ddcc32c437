//! The per-message read-decode-dispatch-encode-write loop

use std::io::{BufRead, Write};

use stripper_map::PrefixStripper;
use stripper_protocol::{Message, Result};

/// Counters reported after a clean run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Messages decoded from the input stream.
    pub messages_read: u64,
    /// Messages encoded to the output stream.
    pub messages_written: u64,
}

/// Drive the mapper until the input stream ends.
///
/// One line is read, decoded, dispatched, and its produced messages written
/// and flushed before the next line is read, so exactly one message is in
/// flight and input size is unbounded. Blank lines are skipped. Any decode,
/// transform, encode, or I/O failure terminates the loop immediately; no
/// output is emitted for the failing message and nothing is retried.
pub fn run_pipeline<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    stripper: &PrefixStripper,
) -> Result<PipelineSummary> {
    let mut summary = PipelineSummary::default();
    let mut line = String::new();
    let mut line_no: u64 = 0;

    while input.read_line(&mut line)? > 0 {
        line_no += 1;
        if !line.trim().is_empty() {
            let message = Message::from_line(&line, line_no)?;
            summary.messages_read += 1;
            for produced in stripper.map_message(message)? {
                writeln!(output, "{}", produced.into_line()?)?;
                summary.messages_written += 1;
            }
            // Per-message flush: the downstream consumer sees each message
            // as soon as it is produced.
            output.flush()?;
        }
        line.clear();
    }

    tracing::debug!(
        messages_read = summary.messages_read,
        messages_written = summary.messages_written,
        "input stream ended"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stripper_map::StripConfig;
    use stripper_protocol::StripperError;

    fn stripper(prefixes: &[&str]) -> PrefixStripper {
        PrefixStripper::new(StripConfig::new(
            prefixes.iter().map(|s| s.to_string()).collect(),
        ))
    }

    fn run(input: &str, prefixes: &[&str]) -> Result<(String, PipelineSummary)> {
        let mut output = Vec::new();
        let summary = run_pipeline(Cursor::new(input), &mut output, &stripper(prefixes))?;
        Ok((String::from_utf8(output).unwrap(), summary))
    }

    #[test]
    fn test_mixed_stream() {
        let input = "\
{\"type\": \"SCHEMA\", \"stream\": \"users\", \"schema\": {\"properties\": {\"meta_id\": {\"type\": \"integer\"}}}}\n\
{\"type\": \"RECORD\", \"stream\": \"users\", \"record\": {\"meta_id\": 42}}\n\
{\"type\": \"STATE\", \"value\": {\"users\": 42}}\n";
        let (out, summary) = run(input, &["meta_"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\"id\""));
        assert!(!lines[0].contains("meta_id"));
        assert!(lines[1].contains("\"id\":42"));
        assert_eq!(lines[2], "{\"type\":\"STATE\",\"value\":{\"users\":42}}");
        assert_eq!(summary.messages_read, 3);
        assert_eq!(summary.messages_written, 3);
    }

    #[test]
    fn test_empty_input() {
        let (out, summary) = run("", &["meta_"]).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary, PipelineSummary::default());
    }

    #[test]
    fn test_blank_lines_skipped_but_counted_for_diagnostics() {
        let input = "\n  \n{\"type\": \"STATE\", \"value\": {}}\n";
        let (out, summary) = run(input, &[]).unwrap();
        assert_eq!(out, "{\"type\":\"STATE\",\"value\":{}}\n");
        assert_eq!(summary.messages_read, 1);
    }

    #[test]
    fn test_decode_error_is_fatal_and_emits_nothing_for_bad_line() {
        let input = "\
{\"type\": \"STATE\", \"value\": {}}\nnot json\n{\"type\": \"STATE\", \"value\": {}}\n";
        let mut output = Vec::new();
        let err = run_pipeline(Cursor::new(input), &mut output, &stripper(&[])).unwrap_err();
        assert!(matches!(err, StripperError::Decode { line: 2, .. }));
        // Only the first message made it out.
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\"type\":\"STATE\",\"value\":{}}\n"
        );
    }

    #[test]
    fn test_unsupported_type_is_fatal() {
        let input = "{\"type\": \"BATCH\", \"manifest\": []}\n";
        let mut output = Vec::new();
        let err = run_pipeline(Cursor::new(input), &mut output, &stripper(&[])).unwrap_err();
        assert!(matches!(err, StripperError::UnsupportedType { line: 1, .. }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_malformed_record_is_fatal_with_no_output_for_it() {
        let input = "{\"type\": \"RECORD\", \"stream\": \"users\"}\n";
        let mut output = Vec::new();
        let err = run_pipeline(Cursor::new(input), &mut output, &stripper(&["meta_"])).unwrap_err();
        assert!(matches!(err, StripperError::MalformedMessage { .. }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_no_trailing_newline_on_last_line_still_processed() {
        let input = "{\"type\": \"STATE\", \"value\": {}}";
        let (out, summary) = run(input, &[]).unwrap();
        assert_eq!(out, "{\"type\":\"STATE\",\"value\":{}}\n");
        assert_eq!(summary.messages_read, 1);
    }
}
