use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("table")
        .about("Generate match arms covering every residue pair")
        .after_help(
            r###"
Parses a whitespace-separated substitution matrix and prints one Rust match
arm per (row, column) residue pair, followed by a catch-all arm, ready to be
pasted into a `match (a, b)` over byte pairs.

Notes:
* Lines starting with `#` are comments
* A line starting with the token `residue` declares the column order
* Data rows must follow header order exactly, one row per column
* Any structural problem aborts with no output at all
* Input files can be gzipped

Examples:
1. Generate a lookup table:
   blsm table tests/blosum/blosum62.txt

2. Pipe a matrix through:
   cat matrix.txt | blsm table stdin > arms.rs

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input matrix file. [stdin] for standard input"),
        )
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let outfile = args.get_one::<String>("outfile").unwrap();

    //----------------------------
    // Ops
    //----------------------------
    let matrix = blsm::libs::matrix::MatrixParser::from_reader(blsm::reader(infile))?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = blsm::writer(outfile);
    blsm::libs::table::write_table(&mut writer, &matrix)?;
    writer.flush()?;

    Ok(())
}
