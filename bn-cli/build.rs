use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by bn-babel's default registry.
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_FORMATS: &[&str] = &["html", "json", "text", "treeviz"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Stored post body to read (a file path, or - for stdin)")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut from_formats = vec!["auto"];
    from_formats.extend(
        AVAILABLE_FORMATS
            .iter()
            .copied()
            .filter(|name| *name != "treeviz"),
    );

    let mut cmd = Command::new("bn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for decoding, converting and rendering BachelorNepal post content")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available conversion formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a bn.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a post body between formats")
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(clap::builder::PossibleValuesParser::new(from_formats)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        )),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a stored body to HTML the way the post page does")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("detect")
                .about("Report which encoding a stored body uses")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print a JSON report")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Re-encode a stored body as canonical JSON")
                .arg(input_arg())
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Pretty-print the JSON output")
                        .action(ArgAction::SetTrue),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the decoded block tree")
                .arg(input_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "bn", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "bn", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "bn", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
