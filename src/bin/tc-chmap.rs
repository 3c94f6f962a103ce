use clap::Parser;
use color_eyre::eyre;
use prettytable::{format, row, Cell, Row, Table};

use dfdl_tool::cli;
use trancode::Direction;

#[derive(Parser)]
/// Print a code page as a 16x16 grid
pub struct ChmapOpts {
    /// The code page to print
    #[clap(long = "codepage", short = 'c', default_value_t)]
    codepage: Direction,
}

fn main() -> eyre::Result<()> {
    let opt: ChmapOpts = cli::init()?;
    let codepage = opt.codepage.code_page();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    table.set_titles(row![
        "", "_0", "_1", "_2", "_3", "_4", "_5", "_6", "_7", "_8", "_9", "_a", "_b", "_c", "_d",
        "_e", "_f"
    ]);

    for high in 0..16u8 {
        let mut cells = Vec::with_capacity(17);
        cells.push(Cell::new(&format!("{:x}_", high)));
        for low in 0..16u8 {
            match codepage.entry(high * 16 + low) {
                Some(display) => cells.push(Cell::new(&format!("{:?}", display))),
                None => cells.push(Cell::new("")),
            }
        }
        table.add_row(Row::new(cells));
    }

    // unassigned bytes come out blank, assigned-empty ones as ""
    table.printstd();

    Ok(())
}
