//! Rendering the decode report
//!
//! The text format mirrors the result files the legacy tooling wrote: a
//! diagnostics block, one line per field, then the payload echoed back at
//! every unwrapping stage. The JSON format carries the same data for
//! scripted consumers, with fields kept in schema-mapping order.

use std::fmt;

use serde_json::json;

/// Everything the report needs, assembled by the decode pipeline.
pub struct Report<'a> {
    /// The payload path, as given on the command line
    pub response: String,
    /// The schema path, as given on the command line
    pub schema: String,
    /// The code-page variant that was used
    pub code_page: &'static str,
    /// The name of the matched record type
    pub type_name: String,
    /// Characters skipped before the body
    pub header_length: usize,
    /// Sum of the declared field widths
    pub declared_length: usize,
    /// Characters actually present in the body
    pub actual_length: usize,
    /// Whether values kept their padding (no strip)
    pub keep_padding: bool,
    /// The extracted fields, in schema-mapping order
    pub fields: Vec<ReportField>,
    /// The payload as read
    pub base64: &'a str,
    /// The unwrapped hex dump
    pub hex: &'a str,
    /// The fully decoded record
    pub decoded: &'a str,
    /// The body region of the decoded record
    pub body: &'a str,
}

/// One field line of the report.
pub struct ReportField {
    /// The field name from the schema
    pub name: String,
    /// The value, stripped or raw
    pub value: String,
    /// Width of the raw value in characters
    pub raw_length: usize,
}

/// Column where the diagnostic values start.
const BANNER_WIDTH: usize = 30;

fn banner<W: fmt::Write, V: fmt::Display>(out: &mut W, label: &str, value: V) -> fmt::Result {
    let pad = BANNER_WIDTH.saturating_sub(label.len() + 1);
    writeln!(out, "{} {:-<pad$}: {}", label, "", value, pad = pad)
}

/// Write the report in its classic text form.
pub fn write_text<W: fmt::Write>(report: &Report<'_>, out: &mut W) -> fmt::Result {
    banner(out, "PARSING", &report.response)?;
    banner(out, "USING DFDL", &report.schema)?;
    banner(out, "CODE PAGE", report.code_page)?;
    banner(out, "RECORD TYPE", &report.type_name)?;
    banner(out, "HEADER LENGTH", report.header_length)?;
    banner(out, "DFDL BODY LENGTH", report.declared_length)?;
    banner(out, "ACTUAL BODY LENGTH", report.actual_length)?;
    banner(out, "STRIP PADDING", !report.keep_padding)?;
    writeln!(out)?;

    let width = report
        .fields
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(16);
    for field in &report.fields {
        writeln!(
            out,
            "{:<width$}: {} (length : {})",
            field.name,
            field.value,
            field.raw_length,
            width = width
        )?;
    }

    for &(label, content) in [
        ("RAW BASE64 :", report.base64),
        ("BASE64 DECODE :", report.hex),
        ("EBCDIC OUTPUT FULL :", report.decoded),
        ("EBCDIC OUTPUT BODY :", report.body),
    ]
    .iter()
    {
        writeln!(out)?;
        writeln!(out, "{}", label)?;
        writeln!(out, "{}", content)?;
    }
    Ok(())
}

/// Render the report as one pretty-printed JSON document.
pub fn render_json(report: &Report<'_>) -> serde_json::Result<String> {
    let mut fields = serde_json::Map::new();
    for field in &report.fields {
        fields.insert(
            field.name.clone(),
            json!({ "value": field.value, "length": field.raw_length }),
        );
    }
    let doc = json!({
        "response": report.response,
        "schema": report.schema,
        "code_page": report.code_page,
        "record_type": report.type_name,
        "header_length": report.header_length,
        "dfdl_body_length": report.declared_length,
        "actual_body_length": report.actual_length,
        "stripped": !report.keep_padding,
        "fields": fields,
        "base64": report.base64,
        "hex": report.hex,
        "decoded": report.decoded,
        "body": report.body,
    });
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
mod tests {
    use super::{render_json, write_text, Report, ReportField};

    fn sample() -> Report<'static> {
        Report {
            response: "capture.txt".to_owned(),
            schema: "DFDL.xml".to_owned(),
            code_page: "response",
            type_name: "AuditRsType".to_owned(),
            header_length: 8,
            declared_length: 20,
            actual_length: 20,
            keep_padding: false,
            fields: vec![
                ReportField {
                    name: "TRANCODE".to_owned(),
                    value: "PAYMENT".to_owned(),
                    raw_length: 8,
                },
                ReportField {
                    name: "ACCT_NO".to_owned(),
                    value: "123456".to_owned(),
                    raw_length: 12,
                },
            ],
            base64: "WCdDMSc=",
            hex: "C1",
            decoded: "A",
            body: "A",
        }
    }

    #[test]
    fn text_report_lines_up() {
        let mut text = String::new();
        write_text(&sample(), &mut text).unwrap();
        assert!(text.contains("PARSING ----------------------: capture.txt"));
        assert!(text.contains("CODE PAGE --------------------: response"));
        assert!(text.contains("DFDL BODY LENGTH -------------: 20"));
        assert!(text.contains("STRIP PADDING ----------------: true"));
        // all banner colons in the same column
        let cols: Vec<usize> = text
            .lines()
            .filter(|l| l.contains("---"))
            .map(|l| l.find(':').unwrap())
            .collect();
        assert_eq!(cols, vec![30; 8]);
    }

    #[test]
    fn text_report_pads_field_names() {
        let mut text = String::new();
        write_text(&sample(), &mut text).unwrap();
        assert!(text.contains("TRANCODE        : PAYMENT (length : 8)"));
        assert!(text.contains("ACCT_NO         : 123456 (length : 12)"));
        assert!(text.contains("\nRAW BASE64 :\nWCdDMSc=\n"));
        assert!(text.contains("\nEBCDIC OUTPUT BODY :\nA\n"));
    }

    #[test]
    fn json_report_keeps_field_order() {
        let json = render_json(&sample()).unwrap();
        let trancode = json.find("\"TRANCODE\"").unwrap();
        let acct = json.find("\"ACCT_NO\"").unwrap();
        assert!(trancode < acct);

        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["record_type"], "AuditRsType");
        assert_eq!(doc["stripped"], true);
        assert_eq!(doc["fields"]["ACCT_NO"]["length"], 12);
        assert_eq!(doc["fields"]["TRANCODE"]["value"], "PAYMENT");
    }

    #[test]
    fn json_report_carries_payload_echoes() {
        let json = render_json(&sample()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["base64"], "WCdDMSc=");
        assert_eq!(doc["hex"], "C1");
        assert_eq!(doc["decoded"], "A");
        assert_eq!(doc["body"], "A");
    }
}
