//! # Transcoding and record splitting
//!
//! The two halves of the decode pipeline: turning a hex dump into display
//! text, and cutting the fixed-width body into named fields.

use indexmap::IndexMap;
use log::warn;

use crate::codepage::CodePage;
use crate::dfdl::RecordLayout;

/// Transcodes a string of hexadecimal byte pairs into display text.
///
/// Pairs are consumed left to right. A trailing unpaired digit is dropped,
/// and any pair that is not two hex digits decodes to the code page's
/// unknown marker, so one bad pair never derails the rest of the dump.
pub fn transcode(hex: &str, codepage: &CodePage) -> String {
    let mut out = String::with_capacity(hex.len() / 2);
    let mut digits = hex.chars();
    while let (Some(hi), Some(lo)) = (digits.next(), digits.next()) {
        match (hi.to_digit(16), lo.to_digit(16)) {
            (Some(h), Some(l)) => out.push_str(codepage.decode((h * 16 + l) as u8)),
            _ => out.push_str(codepage.unknown()),
        }
    }
    out
}

/// Splits a record body into named fields.
///
/// The cursor advances by each field's declared width whether or not that
/// many characters were left, so a short body yields truncated and then
/// empty values instead of an error. A name that repeats keeps its first
/// position in the mapping but takes the latest value.
///
/// Offsets count characters, not bytes.
pub fn split<'l, 'b>(body: &'b str, layout: &'l RecordLayout) -> IndexMap<&'l str, &'b str> {
    // byte offset of every character boundary, including the end
    let mut bounds: Vec<usize> = body.char_indices().map(|(idx, _)| idx).collect();
    bounds.push(body.len());
    let last = bounds.len() - 1;

    let mut fields = IndexMap::with_capacity(layout.fields.len());
    let mut cursor = 0usize;
    for spec in &layout.fields {
        let from = cursor.min(last);
        let to = cursor.saturating_add(spec.length).min(last);
        let value = &body[bounds[from]..bounds[to]];
        if fields.insert(spec.name.as_str(), value).is_some() {
            warn!("field `{}` appears more than once, keeping the later value", spec.name);
        }
        cursor = cursor.saturating_add(spec.length);
    }
    fields
}

/// Normalizes one extracted value: surrounding whitespace and leading
/// zeros go away, and a value that was nothing but padding comes back as
/// `"0"`.
pub fn strip_value(raw: &str) -> String {
    let stripped = raw.trim().trim_start_matches('0');
    if stripped.is_empty() {
        String::from("0")
    } else {
        stripped.to_owned()
    }
}
