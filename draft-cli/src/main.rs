// Command-line interface for draft
//
// This binary converts raw rich-text documents (the JSON saved by the editor) into HTML
// fragments or structured API data, and offers a few views for inspecting how a document
// is decomposed along the way.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  draft <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  draft convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  draft inspect <path> [<transform>]      - Execute a transform (defaults to "blocks")
//  draft generate-tag-map                 - Print the built-in block templates as TOML
//  draft --list-formats                   - List transforms and conversion formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. `pretty` overrides the loaded configuration;
// anything else is handed to the format or transform.
// Example:
//  draft doc.json --to api --extra-pretty false

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use draft_babel::{BlockTagMap, FormatRegistry};
use draft_config::{DraftConfig, Loader};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;

const USER_CONFIG_FILE: &str = "draft.toml";

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

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

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
    Command::new("draft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting raw rich-text documents to HTML and API data")
        .long_about(
            "draft works with the raw JSON documents saved by the rich-text editor.\n\n\
            Commands:\n  \
            - convert: Render a raw document as HTML or API data records\n  \
            - inspect: View the block list or inline run decomposition\n  \
            - generate-tag-map: Print the built-in block templates\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            draft doc.json --to html                      # HTML fragment on stdout\n  \
            draft doc.json --to api -o doc.api.json       # API records to a file\n  \
            draft doc.json --to api --extra-pretty false  # Compact API records\n  \
            draft inspect doc.json runs                   # Inline runs per block",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available transforms and conversion formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a draft.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a raw document is decomposed")
                .long_about(
                    "View the structure of a raw document.\n\n\
                    Transforms:\n  \
                    - blocks:   One line per block (default)\n  \
                    - runs:     Inline runs of constant style and entity\n  \
                    - api-json: API data records as JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-block <key>   Only show the block with this key\n\n\
                    Examples:\n  \
                    draft inspect doc.json\n  \
                    draft inspect doc.json runs --extra-block 8f3ac",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the raw document")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'blocks'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a raw document (default command)")
                .long_about(
                    "Convert a raw document to another representation.\n\n\
                    Supported formats:\n  \
                    - raw:  Raw editor JSON (.json)\n  \
                    - html: HTML fragment (.html)\n  \
                    - api:  Structured API data records (JSON)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    draft convert doc.json --to html              # HTML (stdout)\n  \
                    draft convert doc.json --to api -o out.json   # API data to a file\n  \
                    draft doc.json --to html                      # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
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
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: raw, html, api\n\
                            Use the format name, not the file extension.",
                        )
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
            Command::new("generate-tag-map")
                .about("Output the built-in block templates as TOML")
                .long_about(
                    "Outputs the block templates used for HTML export, as a\n\
                    [convert.html.block_tags] table.\n\n\
                    Use this as a starting point for custom markup: save it to\n\
                    draft.toml, edit the templates you want to change and drop the rest.\n\n\
                    Examples:\n  \
                    draft generate-tag-map > draft.toml",
                ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading path means the convert subcommand was left out
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["inspect", "convert", "generate-tag-map", "help"]
                    .contains(&cleaned_args[1].as_str())
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

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    );

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                exit_with("Error: missing input path");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("blocks");
            handle_inspect_command(path, transform, &extra_params);
        }
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                exit_with("Error: convert needs an input path and --to");
            };
            let registry = build_registry(&config);

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.to_string(),
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
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        Some(("generate-tag-map", _)) => {
            handle_generate_tag_map_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, extra_params: &HashMap<String, String>) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&source, transform, extra_params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
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

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    log::debug!(
        "parsed {} blocks and {} entities from '{input}'",
        doc.blocks.len(),
        doc.entity_map.len()
    );

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the generate-tag-map command
fn handle_generate_tag_map_command() {
    print!("{}", tag_map_to_toml(&BlockTagMap::default()));
}

#[derive(Serialize)]
struct TagMapFile<'a> {
    convert: ConvertTables<'a>,
}

#[derive(Serialize)]
struct ConvertTables<'a> {
    html: HtmlTables<'a>,
}

#[derive(Serialize)]
struct HtmlTables<'a> {
    block_tags: BTreeMap<&'a str, &'a str>,
}

fn tag_map_to_toml(block_tags: &BlockTagMap) -> String {
    let file = TagMapFile {
        convert: ConvertTables {
            html: HtmlTables {
                block_tags: block_tags.entries(),
            },
        },
    };
    toml::to_string(&file).unwrap_or_else(|e| {
        eprintln!("Error encoding tag map: {e}");
        std::process::exit(1);
    })
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available transforms:\n");
    println!("  blocks    - One line per block");
    println!("  runs      - Inline runs of constant style and entity");
    println!("  api-json  - API data records as JSON");
    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!("  {format_name:<6} - {}", format.description());
        }
    }
}

/// Layer `./draft.toml`, `--config` and the `--extra-*` config overrides.
///
/// Overrides are removed from `extra_params` so formats never see them.
fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> DraftConfig {
    let mut loader = Loader::new().with_optional_file(USER_CONFIG_FILE);
    if let Some(path) = explicit_path {
        loader = loader.with_file(path);
    }
    if let Some(raw) = take_override(extra_params, &["pretty"]) {
        loader = loader
            .set_override("convert.api.pretty", parse_bool_arg("pretty", &raw))
            .unwrap_or_else(|err| {
                eprintln!("Invalid override for --extra-pretty: {err}");
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn build_registry(config: &DraftConfig) -> FormatRegistry {
    config.registry().unwrap_or_else(|err| {
        eprintln!("Invalid configuration: {err}");
        std::process::exit(1);
    })
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
