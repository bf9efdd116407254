use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("check")
        .about("Validate a matrix file without generating code")
        .after_help(
            r###"
Runs the same structural validation as `blsm table` and reports a one-line
summary instead of the generated table. Useful as a pre-commit gate for
matrix files.

Examples:
1. Validate a matrix:
   blsm check tests/blosum/blosum62.txt

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
    let infile = args.get_one::<String>("infile").unwrap();
    let outfile = args.get_one::<String>("outfile").unwrap();

    let matrix = blsm::libs::matrix::MatrixParser::from_reader(blsm::reader(infile))?;

    let mut writer = blsm::writer(outfile);
    writeln!(
        writer,
        "OK: {} residues, {} pairs",
        matrix.len(),
        matrix.n_pairs()
    )?;

    Ok(())
}
