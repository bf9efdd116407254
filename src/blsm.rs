extern crate clap;
use clap::*;

mod cmd_blsm;

fn main() -> anyhow::Result<()> {
    let app = Command::new("blsm")
        .version(crate_version!())
        .about("`blsm` - BLOSUM Scoring Matrix code generation")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_blsm::table::make_subcommand())
        .subcommand(cmd_blsm::check::make_subcommand());

    // Check which subcomamnd the user ran...
    let res = match app.get_matches().subcommand() {
        Some(("table", sub_matches)) => cmd_blsm::table::execute(sub_matches),
        Some(("check", sub_matches)) => cmd_blsm::check::execute(sub_matches),
        _ => unreachable!(),
    };

    // A consumer closing our stdout early (e.g. `blsm table m.txt | head`)
    // is a normal way to stop, not a failure.
    match res {
        Err(err) if is_broken_pipe(&err) => Ok(()),
        other => other,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .map(|io_err| io_err.kind() == std::io::ErrorKind::BrokenPipe)
        .unwrap_or(false)
}
