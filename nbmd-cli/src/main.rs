// Command-line interface for nbmd
//
// This binary copies notebook cells as Markdown and pastes Markdown back as cells, using a
// `.ipynb` file as the open notebook and a file (or stdio) as the clipboard. It also converts
// whole documents between the registered formats.
//
// Usage:
//  nbmd copy <notebook> --select <range>... [--clipboard <file>]    - Copy cells as Markdown
//  nbmd paste <notebook> [--select <range>...] [--clipboard <file>] - Paste Markdown as cells
//  nbmd <input> --to <format> [--from <format>] [--output <file>]   - Convert between formats (default)
//  nbmd inspect <path> [--from <format>]                            - Show parsed cells as JSON
//  nbmd --list-formats                                              - List available formats
//
// Extra Parameters:
//
// Configuration overrides can be passed using --extra-<parameter-name> <value>.
// Example:
//  nbmd paste notebook.ipynb --clipboard clip.md --extra-recognized-languages python,sql

use clap::Command;
use nbmd_babel::actions::{copy_as_markdown, paste_from_markdown, report, Severity};
use nbmd_babel::host::{CellRange, Clipboard};
use nbmd_babel::{Format, FormatRegistry, RecognizedLanguages};
use nbmd_cli::host::{parse_selection, FileClipboard, NotebookFile, StdioClipboard, TerminalFeedback};
use nbmd_config::{Loader, NbmdConfig};
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

mod cli;

const SUBCOMMANDS: &[&str] = &["copy", "paste", "convert", "inspect", "help"];

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

fn with_selection_parser(cmd: Command) -> Command {
    cmd.mut_arg("select", |arg| arg.value_parser(parse_selection))
}

fn build_cli() -> Command {
    cli::build_cli()
        .mut_subcommand("copy", with_selection_parser)
        .mut_subcommand("paste", with_selection_parser)
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare path as first argument means "convert"
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
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(&config, matches.get_flag("verbose"));

    for key in extra_params.keys() {
        tracing::warn!(parameter = %key, "ignoring unknown --extra parameter");
    }

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    let severity = match matches.subcommand() {
        Some(("copy", sub_matches)) => {
            let notebook = required_string(sub_matches, "notebook");
            let clipboard = sub_matches.get_one::<String>("clipboard").map(|s| s.as_str());
            handle_copy_command(notebook, selections(sub_matches), clipboard).await
        }
        Some(("paste", sub_matches)) => {
            let notebook = required_string(sub_matches, "notebook");
            let clipboard = sub_matches.get_one::<String>("clipboard").map(|s| s.as_str());
            handle_paste_command(notebook, selections(sub_matches), clipboard, &config).await
        }
        Some(("convert", sub_matches)) => {
            let input = required_string(sub_matches, "input");
            let to = required_string(sub_matches, "to");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &config);
            Severity::Info
        }
        Some(("inspect", sub_matches)) => {
            let path = required_string(sub_matches, "path");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            handle_inspect_command(path, from, &config);
            Severity::Info
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if severity == Severity::Error {
        std::process::exit(1);
    }
}

fn required_string<'a>(matches: &'a clap::ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing required argument '{id}'");
            std::process::exit(2);
        })
}

fn selections(matches: &clap::ArgMatches) -> Vec<CellRange> {
    matches
        .get_many::<CellRange>("select")
        .map(|ranges| ranges.copied().collect())
        .unwrap_or_default()
}

/// Open the notebook as the active editor. A notebook that cannot be opened
/// means there is no editor; the cause goes to the log.
async fn open_editor(path: &str, selections: Vec<CellRange>) -> Option<NotebookFile> {
    match NotebookFile::open(path, selections).await {
        Ok(editor) => Some(editor),
        Err(err) => {
            tracing::error!(path, error = %err, "failed to open notebook");
            None
        }
    }
}

fn clipboard_for(path: Option<&str>) -> Box<dyn Clipboard> {
    match path {
        Some(path) => Box::new(FileClipboard::new(path)),
        None => Box::new(StdioClipboard),
    }
}

/// Handle the copy command
async fn handle_copy_command(
    notebook: &str,
    selections: Vec<CellRange>,
    clipboard: Option<&str>,
) -> Severity {
    let editor = open_editor(notebook, selections).await;
    let clipboard = clipboard_for(clipboard);

    let result = copy_as_markdown(editor.as_ref(), clipboard.as_ref()).await;
    report(&result, &TerminalFeedback)
}

/// Handle the paste command
async fn handle_paste_command(
    notebook: &str,
    selections: Vec<CellRange>,
    clipboard: Option<&str>,
    config: &NbmdConfig,
) -> Severity {
    let mut editor = open_editor(notebook, selections).await;
    let clipboard = clipboard_for(clipboard);

    let result = paste_from_markdown(editor.as_mut(), clipboard.as_ref(), config).await;
    report(&result, &TerminalFeedback)
}

fn registry_from_config(config: &NbmdConfig) -> FormatRegistry {
    FormatRegistry::with_recognized_languages(RecognizedLanguages::from(&config.paste))
}

fn resolve_format(registry: &FormatRegistry, explicit: Option<&str>, path: &str) -> String {
    if let Some(format) = explicit {
        return format.to_string();
    }
    match registry.detect_format_from_filename(path) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{path}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: Option<&str>,
    to: &str,
    output: Option<&str>,
    config: &NbmdConfig,
) {
    let registry = registry_from_config(config);
    let from = resolve_format(&registry, from, input);

    if let Err(e) = registry.get(&from) {
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

    let cells = registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let result = registry.serialize(&cells, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    tracing::debug!(from = %from, to, cells = cells.len(), "converted document");

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

/// Handle the inspect command
fn handle_inspect_command(path: &str, from: Option<&str>, config: &NbmdConfig) {
    let registry = registry_from_config(config);
    let from = resolve_format(&registry, from, path);

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let cells = registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    match serde_json::to_string_pretty(&cells) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &NbmdConfig) {
    println!("Conversion formats:");
    let registry = registry_from_config(config);
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<10} {description}");
    }

    println!("\nRecognized languages (paste as code cells):");
    for language in &config.paste.recognized_languages {
        println!("  {language}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> NbmdConfig {
    let loader = Loader::new().with_optional_file("nbmd.toml");
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

fn apply_config_overrides(config: &mut NbmdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("recognized-languages") {
        config.paste.recognized_languages = parse_language_list(&raw);
    }

    if let Some(level) = extra_params.remove("log-level") {
        config.logging.level = level;
    }
}

fn init_logging(config: &NbmdConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Split a comma-separated language list. An empty value recognizes nothing.
fn parse_language_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_string)
        .collect()
}
