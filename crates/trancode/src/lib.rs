#![warn(missing_docs)]
//! # Decoding DFDL-described trancode records
//!
//! Legacy gateway traffic comes off the wire as fixed-width EBCDIC records.
//! What a capture actually hands you is three wrappers deep: a base64 text
//! blob, holding an `X'…'` quoted hex dump, holding the record bytes. The
//! record shape itself lives in a DFDL-style XML schema that names each
//! field and its width.
//!
//! This crate unwraps and decodes the whole stack:
//!
//! - [`payload`] peels the base64 and hex-quoting layers
//! - [`codepage`] holds the byte-to-display tables for both directions
//! - [`record`] transcodes hex pairs and splits the body into fields
//! - [`dfdl`] reads the field layout from the schema document

pub mod codepage;
pub mod dfdl;
pub mod payload;
pub mod record;

#[doc(hidden)]
pub use indexmap;

use std::fmt;
use std::str::FromStr;

use crate::codepage::{CodePage, REQUEST, RESPONSE};

/// Which direction of gateway traffic is being decoded.
///
/// The direction picks both the code-page variant and the fragment that
/// identifies the record's complex type in the schema. The two never mix:
/// request records use request names and the request table, response
/// records the response ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Inbound records, `*RqType` shapes
    Request,
    /// Outbound records, `*RsType` shapes
    Response,
}

impl Direction {
    /// The code page this direction decodes with.
    pub fn code_page(&self) -> &'static CodePage {
        match self {
            Direction::Request => &REQUEST,
            Direction::Response => &RESPONSE,
        }
    }

    /// The fragment that marks the matching complex type name.
    pub fn marker(&self) -> &'static str {
        match self {
            Direction::Request => "rqtype",
            Direction::Response => "rstype",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Response
    }
}

/// Failed to parse a direction name
#[derive(Debug)]
pub struct DirectionError {}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use one of `request` (`rq`) or `response` (`rs`)")?;
        Ok(())
    }
}

impl std::error::Error for DirectionError {}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "rq" | "request" => Ok(Self::Request),
            "rs" | "response" => Ok(Self::Response),
            _ => Err(DirectionError {}),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => f.write_str("request"),
            Self::Response => f.write_str("response"),
        }
    }
}
