use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names registered by issuedown-core
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_FORMATS: &[&str] = &["markdown", "html"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let format_arg = |name: &'static str| {
        Arg::new(name)
            .long(name)
            .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
            .value_hint(ValueHint::Other)
    };

    let mut cmd = Command::new("issuedown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert GitHub issue bodies between Markdown and HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an issuedown.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(format_arg("from"))
                .arg(format_arg("to").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("query")
                .about("Parse a GitHub-like issue search query")
                .arg(Arg::new("query").required(true).num_args(1..).index(1)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "issuedown", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "issuedown", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "issuedown", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
