use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre;

use dfdl_tool::cli;
use trancode::{payload, record, Direction};

#[derive(Parser)]
/// Options for decoding a hex dump to display text
pub struct DecodeOpts {
    /// The file to convert, `X'…'` quoted or bare hex
    file: PathBuf,
    /// The code page to decode with
    #[clap(long = "codepage", short = 'c', default_value_t)]
    codepage: Direction,
}

fn main() -> eyre::Result<()> {
    let opt: DecodeOpts = cli::init()?;

    let text = std::fs::read_to_string(&opt.file)?;
    let hex: String = payload::strip_hex_markers(&text)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let decoded = record::transcode(&hex, opt.codepage.code_page());
    print!("{}", decoded);
    Ok(())
}
