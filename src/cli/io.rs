//! JSON output for one-shot commands
//!
//! One JSON object per line on stdout:
//! `{"status":"ok","data":...}` or `{"status":"error","code":..,"message":..}`

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

use super::errors::CliResult;

pub fn ok_envelope<T: Serialize>(data: &T) -> CliResult<Value> {
    Ok(json!({
        "status": "ok",
        "data": serde_json::to_value(data)?,
    }))
}

pub fn error_envelope(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message,
    })
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a success response to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    write_line(&mut io::stdout().lock(), &ok_envelope(data)?)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&mut io::stdout().lock(), &error_envelope(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let value = ok_envelope(&vec![1, 2, 3]).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["data"][2], 3);
    }

    #[test]
    fn test_error_envelope() {
        let value = error_envelope("FINOPS_CLI_IO_ERROR", "closed");
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "FINOPS_CLI_IO_ERROR");
    }

    #[test]
    fn test_write_line_is_single_line() {
        let mut buffer = Vec::new();
        write_line(&mut buffer, &error_envelope("X", "y")).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.matches('\n').count(), 1);
        assert!(text.ends_with('\n'));
    }
}
