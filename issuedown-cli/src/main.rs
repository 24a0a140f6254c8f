// Command-line interface for issuedown
//
// This binary converts GitHub issue bodies between Markdown and the HTML the
// rich-text editor works on, and parses issue search queries.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overridable by an explicit --from flag. Reading from stdin (`-`) requires --from.
// Usage:
//  issuedown <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  issuedown convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  issuedown query <query...>                                                   - Parse a search query
//  issuedown --list-formats                                                     - List available formats
//
// Extra Parameters:
//
// Conversion knobs can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies them over the loaded configuration.
// Example:
//  issuedown body.html --to markdown --extra-bullet-marker '*'

use clap::{Arg, ArgAction, Command, ValueHint};
use issuedown_config::{IssuedownConfig, Loader};
use issuedown_core::formats::{
    BulletMarker, CodeBlockStyle, CodeFence, HeadingStyle, HorizontalRule, LineBreak,
};
use issuedown_core::{parse_issue_query, FormatRegistry};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use tracing::{debug, warn};

const SUBCOMMANDS: &[&str] = &["convert", "query", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following token that is not itself a flag is the value
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

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

fn build_cli() -> Command {
    Command::new("issuedown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert GitHub issue bodies between Markdown and HTML")
        .long_about(
            "issuedown converts issue and comment bodies between the Markdown GitHub stores\n\
            and the HTML a rich-text editor works on, keeping Markdown → HTML → Markdown stable.\n\n\
            Commands:\n  \
            - convert: Convert between markdown and html (default command)\n  \
            - query:   Parse a GitHub-like issue search query into JSON\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override conversion options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            issuedown body.md --to html                       # Render markdown (stdout)\n  \
            issuedown body.html --to markdown -o body.md      # Convert editor HTML to a file\n  \
            cat body.html | issuedown - --from html --to markdown\n  \
            issuedown query is:open author:alice flaky test",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an issuedown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between markdown and html.\n\n\
                    The source format is auto-detected from the file extension\n\
                    (.md, .markdown, .html, .htm). Use '-' to read from stdin,\n\
                    in which case --from is required.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("query")
                .about("Parse a GitHub-like issue search query and print it as JSON")
                .long_about(
                    "Parse a search box query.\n\n\
                    Understood qualifiers:\n  \
                    is:open | is:closed | is:all   issue state\n  \
                    is:issue | is:pr               accepted and ignored\n  \
                    author:<login>                 issue author\n\n\
                    Everything else is free text. Quote phrases to keep them together.",
                )
                .arg(
                    Arg::new("query")
                        .help("Query words (joined with spaces)")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true)
                        .index(1),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or subcommand is an input path
            let looks_like_input = cleaned_args.get(1).is_some_and(|arg| {
                arg == "-" || (!arg.starts_with('-') && !SUBCOMMANDS.contains(&arg.as_str()))
            });
            if looks_like_input {
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
    init_logging(matches.get_flag("verbose"), &config);
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        warn!(key = key.as_str(), "ignoring unknown --extra option");
    }

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let registry = registry_from_config(&config);

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None if input == "-" => {
                    eprintln!("Error: Reading from stdin requires --from");
                    std::process::exit(1);
                }
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output);
        }
        Some(("query", sub_matches)) => {
            let words: Vec<&str> = sub_matches
                .get_many::<String>("query")
                .map(|values| values.map(|s| s.as_str()).collect())
                .unwrap_or_default();
            handle_query_command(&words.join(" "));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise `--verbose` gives
/// `debug` and the configured level applies.
fn init_logging(verbose: bool, config: &IssuedownConfig) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
) {
    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let result = registry.convert(&source, from, to).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });
    debug!(from, to, "conversion finished");

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None if result.ends_with('\n') => print!("{result}"),
        None => println!("{result}"),
    }
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

/// Handle the query command
fn handle_query_command(input: &str) {
    let query = parse_issue_query(input);
    match serde_json::to_string_pretty(&query) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error encoding query: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &IssuedownConfig) {
    let registry = registry_from_config(config);
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {:<10} {} (.{})",
                name,
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn registry_from_config(config: &IssuedownConfig) -> FormatRegistry {
    FormatRegistry::with_options(config.render.into(), (&config.markdown).into())
}

fn load_cli_config(explicit_path: Option<&str>) -> IssuedownConfig {
    let loader = Loader::new().with_optional_file("issuedown.toml");
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
    config: &mut IssuedownConfig,
    extra_params: &mut HashMap<String, String>,
) {
    let markdown = &mut config.markdown;
    if let Some(raw) = take_override(extra_params, &["bullet-marker", "bullet-list-marker"]) {
        markdown.bullet_list_marker = parse_bullet_marker(&raw);
    }
    if let Some(raw) = extra_params.remove("heading-style") {
        markdown.heading_style = match raw.to_lowercase().as_str() {
            "atx" => HeadingStyle::Atx,
            "setext" => HeadingStyle::Setext,
            other => invalid_value("heading-style", other, "atx, setext"),
        };
    }
    if let Some(raw) = extra_params.remove("code-block-style") {
        markdown.code_block_style = match raw.to_lowercase().as_str() {
            "fenced" => CodeBlockStyle::Fenced,
            "indented" => CodeBlockStyle::Indented,
            other => invalid_value("code-block-style", other, "fenced, indented"),
        };
    }
    if let Some(raw) = take_override(extra_params, &["em-delimiter", "em"]) {
        markdown.em_delimiter = raw;
    }
    if let Some(raw) = take_override(extra_params, &["strong-delimiter", "strong"]) {
        markdown.strong_delimiter = raw;
    }
    if let Some(raw) = take_override(extra_params, &["hr", "horizontal-rule"]) {
        markdown.horizontal_rule = HorizontalRule::parse(&raw)
            .unwrap_or_else(|| invalid_value("horizontal-rule", &raw, "'* * *', '- - -', '_ _ _'"));
    }
    if let Some(raw) = extra_params.remove("fence") {
        markdown.fence = match raw.as_str() {
            "```" => CodeFence::Backticks,
            "~~~" => CodeFence::Tildes,
            other => invalid_value("fence", other, "```, ~~~"),
        };
    }
    if let Some(raw) = extra_params.remove("line-break") {
        markdown.line_break = match raw.to_lowercase().as_str() {
            "two-spaces" | "spaces" => LineBreak::TwoSpaces,
            "backslash" => LineBreak::Backslash,
            other => invalid_value("line-break", other, "two-spaces, backslash"),
        };
    }

    let render = &mut config.render;
    if let Some(raw) = extra_params.remove("tables") {
        render.tables = parse_bool_arg("tables", &raw);
    }
    if let Some(raw) = extra_params.remove("strikethrough") {
        render.strikethrough = parse_bool_arg("strikethrough", &raw);
    }
    if let Some(raw) = extra_params.remove("autolink") {
        render.autolink = parse_bool_arg("autolink", &raw);
    }
    if let Some(raw) = extra_params.remove("escape-html") {
        render.escape_html = parse_bool_arg("escape-html", &raw);
    }
}

fn parse_bullet_marker(raw: &str) -> BulletMarker {
    BulletMarker::parse(raw).unwrap_or_else(|| invalid_value("bullet-marker", raw, "-, *"))
}

fn invalid_value(flag: &str, value: &str, expected: &str) -> ! {
    eprintln!("Invalid value '{value}' for --extra-{flag} (expected one of: {expected})");
    std::process::exit(1);
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
