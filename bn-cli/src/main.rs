// Command-line interface for BachelorNepal post content
//
// This binary works on the strings the backend stores for a post body. Those strings
// may be the current JSON block array, legacy HTML from the old WYSIWYG editor,
// a plain paragraph of text, or nothing at all. Every command decodes them the same
// way the post page does.
//
// Usage:
//  bn <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  bn convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  bn render <input> [--output <file>]      - Render a stored body as the post page would
//  bn detect <input> [--json]               - Report which encoding a stored body uses
//  bn normalize <input> [--pretty]          - Re-encode a stored body as canonical JSON
//  bn inspect <input>                       - Show the decoded block tree
//  bn --list-formats                        - List available conversion formats
//
// Inputs may be a file path or "-" for stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Parameters that match a configuration key (pretty, standalone, legacy-markup)
// override the configuration instead.
// Example:
//  bn convert post.json --to text --extra-excerpt 160

use bn_babel::formats::json::encode_with;
use bn_babel::formats::treeviz::to_treeviz_str_with_params;
use bn_babel::publish::{publish, PublishArtifact, PublishSpec};
use bn_babel::{decode, detect, render_stored, FormatRegistry, MarkupPolicy, RenderOptions};
use bn_config::{BnConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "render", "detect", "normalize", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args
                .get(i + 1)
                .map(|next| next == "-" || !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

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

fn build_cli() -> Command {
    Command::new("bn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for decoding, converting and rendering BachelorNepal post content")
        .long_about(
            "bn works on stored post bodies: JSON block arrays, legacy HTML from the old\n\
            editor, or plain text.\n\n\
            Commands:\n  \
            - convert:   Transform a post body into another format\n  \
            - render:    Produce the HTML the post page would show\n  \
            - detect:    Report the encoding of a stored body\n  \
            - normalize: Re-encode a stored body as canonical JSON\n  \
            - inspect:   View the decoded block tree\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            bn post.json --to html                  # Convert to an HTML fragment\n  \
            bn legacy.html --to json -o post.json   # Migrate a legacy body\n  \
            bn post.json --to text --extra-excerpt 160\n  \
            bn render post.json                     # What the post page shows",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available conversion formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a bn.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a post body between formats (default command)")
                .long_about(
                    "Convert a post body to another format.\n\n\
                    Supported formats:\n  \
                    - json:    Lossless JSON block array (.json)\n  \
                    - html:    HTML fragment or standalone page (.html)\n  \
                    - text:    Plain text, optionally as an excerpt (.txt)\n  \
                    - treeviz: Block tree visualization (output only)\n\n\
                    By default the input is decoded the way stored bodies are: JSON when it\n\
                    is a valid block array, markup when it contains elements, and a single\n\
                    paragraph otherwise. Use --from to force a specific parser.\n\n\
                    Examples:\n  \
                    bn convert post.json --to html\n  \
                    bn convert legacy.html --to json -o post.json\n  \
                    bn convert notes.txt --from text --to json",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (defaults to 'auto', stored-body detection)")
                        .default_value("auto")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a stored body to HTML the way the post page does")
                .long_about(
                    "Render a stored post body to an HTML fragment.\n\n\
                    JSON bodies are rendered from the block tree. Legacy markup is passed\n\
                    through unchanged unless render.legacy_markup is set to 'rebuild'\n\
                    (or --extra-legacy-markup rebuild is given). Plain text becomes an\n\
                    escaped paragraph. Empty bodies render nothing.",
                )
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
                        .help("Print a JSON report instead of the encoding name")
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
                .long_about(
                    "Print the block tree a stored body decodes to.\n\n\
                    Extra Parameters:\n  \
                    --extra-runs    List the text runs of each block with their marks",
                )
                .arg(input_arg()),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // With no subcommand, a leading file argument means "convert".
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(matches.get_flag("verbose"), &config.log.filter);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(err) = apply_config_overrides(&mut config, &mut extra_params) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches
                .get_one::<String>("from")
                .expect("from has a default");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &extra_params, &config);
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, output, &config);
        }
        Some(("detect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_detect_command(input, sub_matches.get_flag("json"));
        }
        Some(("normalize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let pretty = sub_matches.get_flag("pretty") || config.convert.json.pretty;
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_normalize_command(input, pretty, output);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input, &extra_params);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so that stdout stays clean for converted output.
fn init_logging(verbose: bool, configured: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &str) -> String {
    let result = if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(input)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, content: &str) {
    match output {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{content}"),
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &BnConfig,
) {
    let registry = FormatRegistry::default();

    if from != "auto" {
        if let Err(e) = registry.get(from) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);
    tracing::debug!(input, from, to, "converting");

    let doc = if from == "auto" {
        decode(&source)
    } else {
        registry.parse(&source, from).unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        })
    };

    let mut spec = PublishSpec::new(&doc, to)
        .with_options(config.convert.format_options(to))
        .with_options(extra_params.clone());
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish(spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => print!("{text}"),
            PublishArtifact::File(path) => {
                tracing::debug!(path = %path.display(), "wrote converted output");
            }
        },
        Err(e) => {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(input: &str, output: Option<&str>, config: &BnConfig) {
    let source = read_input(input);
    let options = RenderOptions::from(&config.render);
    tracing::debug!(input, policy = ?options.legacy_markup, "rendering stored body");
    write_output(output, &render_stored(&source, &options));
}

/// Handle the detect command
fn handle_detect_command(input: &str, as_json: bool) {
    let source = read_input(input);
    let content = detect(&source);
    let encoding = content.encoding();

    if as_json {
        let blocks = content.into_document().blocks.len();
        let report = serde_json::json!({
            "encoding": encoding.as_str(),
            "blocks": blocks,
        });
        println!("{report}");
    } else {
        println!("{encoding}");
    }
}

/// Handle the normalize command
fn handle_normalize_command(input: &str, pretty: bool, output: Option<&str>) {
    let source = read_input(input);
    let doc = decode(&source);
    let mut encoded = encode_with(&doc, pretty);
    if output.is_none() {
        encoded.push('\n');
    }
    write_output(output, &encoded);
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, extra_params: &HashMap<String, String>) {
    let source = read_input(input);
    let doc = decode(&source);
    let tree = to_treeviz_str_with_params(&doc, extra_params).unwrap_or_else(|e| {
        eprintln!("Inspect error: {e}");
        std::process::exit(1);
    });
    print!("{tree}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "read/write",
            (true, false) => "read",
            (false, true) => "write",
            (false, false) => "-",
        };
        let extensions = format
            .file_extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "  {name:<10} {direction:<11} {extensions:<12} {}",
            format.description()
        );
    }
    println!("\nUse --from auto (the default) to decode stored post bodies.");
}

fn load_cli_config(explicit_path: Option<&str>) -> BnConfig {
    let loader = Loader::new().with_optional_file("bn.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut BnConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), String> {
    if let Some(raw) = extra_params.remove("pretty") {
        config.convert.json.pretty = parse_bool_arg("pretty", &raw)?;
    }
    if let Some(raw) = extra_params.remove("standalone") {
        config.convert.html.standalone = parse_bool_arg("standalone", &raw)?;
    }
    if let Some(raw) = take_override(extra_params, &["legacy-markup", "markup"]) {
        config.render.legacy_markup = parse_markup_policy(&raw)?;
    }
    Ok(())
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool, String> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}

fn parse_markup_policy(raw: &str) -> Result<MarkupPolicy, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).map_err(|_| {
        format!("Invalid value '{raw}' for --extra-legacy-markup (expected pass-through or rebuild)")
    })
}
