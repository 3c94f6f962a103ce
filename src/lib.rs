//! # DFDL trancode tool
//!
//! Command line front-end for the [`trancode`] crate: reads a captured
//! base64 payload and a DFDL schema, decodes the EBCDIC record and writes
//! a field-by-field report.
#![warn(missing_docs)]

pub mod cli;
