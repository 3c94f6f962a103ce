//! Options for the main decode run

use std::{fmt, path::PathBuf, str::FromStr};

use clap::Parser;
use trancode::Direction;

/// The format to write the report in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    /// Plain utf-8 text
    Text,
    /// One JSON document
    Json,
}

#[derive(Debug)]
/// Failed to parse a format name
pub struct FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use one of `text` or `json`")?;
        Ok(())
    }
}

impl std::error::Error for FormatError {}

impl Default for Format {
    fn default() -> Self {
        Format::Text
    }
}

impl FromStr for Format {
    type Err = FormatError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "txt" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(FormatError {}),
        }
    }
}

impl Format {
    fn to_static_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_static_str())
    }
}

#[derive(Parser)]
/// Decode a captured trancode payload against its DFDL schema
pub struct Options {
    /// The DFDL schema document
    #[clap(long = "trancode", short = 't', default_value = "DFDL.xml")]
    pub trancode: PathBuf,
    /// The captured base64 payload
    #[clap(long = "response", short = 'r', default_value = "DFDLRES.txt")]
    pub response: PathBuf,
    /// Strip surrounding whitespace and leading zeros from the values
    #[clap(long, short = 's')]
    pub strip: bool,
    /// Number of record characters before the body starts
    #[clap(long = "length", short = 'l', default_value_t = 688)]
    pub length: usize,
    /// The traffic direction, which picks the code page
    /// and the record type to look for
    #[clap(long = "codepage", short = 'c', default_value_t)]
    pub codepage: Direction,
    /// Look for this type-name fragment instead of the
    /// direction's usual one
    #[clap(long)]
    pub marker: Option<String>,
    /// Where to store the report, `-` for stdout
    #[clap(long, short = 'o', default_value = "results.txt")]
    pub out: PathBuf,
    /// Format of the report. Valid choices are:
    ///
    /// "text" and "json"
    #[clap(default_value_t, long, short = 'F')]
    pub format: Format,
}

#[cfg(test)]
mod tests {
    use super::Format;

    #[test]
    fn format_names_round_trip() {
        assert_eq!("txt".parse::<Format>().unwrap(), Format::Text);
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!("yaml".parse::<Format>().is_err());
        assert_eq!(Format::default().to_string(), "text");
    }
}
