//! # DFDL trancode record tool
//!
//! Reads a captured base64 payload, unwraps it to the EBCDIC record inside,
//! splits the record body along its DFDL schema and writes a report.
#![warn(missing_docs)]

use std::{fs, path::Path};

use color_eyre::eyre::{self, WrapErr};
use log::{info, warn};

use dfdl_tool::cli::{
    self,
    opt::{Format, Options},
    report::{self, Report, ReportField},
};
use trancode::{dfdl::RecordLayout, payload, record};

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    run(&opt)
}

fn run(opt: &Options) -> eyre::Result<()> {
    let marker = match &opt.marker {
        Some(marker) => marker.as_str(),
        None => opt.codepage.marker(),
    };

    let xml = fs::read_to_string(&opt.trancode)
        .wrap_err_with(|| format!("Failed to read schema: `{}`", opt.trancode.display()))?;
    let layout = RecordLayout::parse(&xml, marker)
        .wrap_err_with(|| format!("No usable record layout in `{}`", opt.trancode.display()))?;
    info!(
        "Using record type `{}` with {} fields",
        layout.type_name,
        layout.fields.len()
    );

    let base64 = fs::read_to_string(&opt.response)
        .wrap_err_with(|| format!("Failed to read payload: `{}`", opt.response.display()))?;
    let dump = payload::decode_base64(&base64)
        .wrap_err_with(|| format!("Failed to decode payload: `{}`", opt.response.display()))?;
    let hex = payload::strip_hex_markers(&dump);

    let codepage = opt.codepage.code_page();
    let decoded = record::transcode(&hex, codepage);
    let body = payload::body_region(&decoded, opt.length);

    let declared = layout.total_length();
    let actual = body.chars().count();
    if actual < declared {
        warn!(
            "body is {} characters short of the declared {}",
            declared - actual,
            declared
        );
    }

    let mapping = record::split(body, &layout);
    let fields = mapping
        .iter()
        .map(|(name, raw)| ReportField {
            name: (*name).to_owned(),
            value: if opt.strip {
                record::strip_value(raw)
            } else {
                (*raw).to_owned()
            },
            raw_length: raw.chars().count(),
        })
        .collect();

    let report = Report {
        response: opt.response.display().to_string(),
        schema: opt.trancode.display().to_string(),
        code_page: codepage.name(),
        type_name: layout.type_name.clone(),
        header_length: opt.length,
        declared_length: declared,
        actual_length: actual,
        keep_padding: !opt.strip,
        fields,
        base64: base64.trim(),
        hex: &hex,
        decoded: &decoded,
        body,
    };

    let rendered = match opt.format {
        Format::Text => {
            let mut text = String::new();
            report::write_text(&report, &mut text)?;
            text
        }
        Format::Json => report::render_json(&report)?,
    };

    if opt.out == Path::new("-") {
        print!("{}", rendered);
    } else {
        fs::write(&opt.out, &rendered)
            .wrap_err_with(|| format!("Failed to write report: `{}`", opt.out.display()))?;
        info!("Report written to `{}`", opt.out.display());
    }
    Ok(())
}
