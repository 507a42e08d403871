// The nbmd command tree
//
// Shared with build.rs through `include!`, so it may only depend on clap. Value
// parsers that need crate code (such as `--select`) are attached in main.rs.

use clap::{Arg, ArgAction, Command, ValueHint};

fn notebook_arg() -> Arg {
    Arg::new("notebook")
        .help("Path to the .ipynb notebook")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn select_arg() -> Arg {
    Arg::new("select")
        .long("select")
        .short('s')
        .value_name("RANGE")
        .help("Cells to select: an index (3) or a half-open range (1..4). Repeatable")
        .action(ArgAction::Append)
        .value_hint(ValueHint::Other)
}

fn clipboard_arg() -> Arg {
    Arg::new("clipboard")
        .long("clipboard")
        .value_name("PATH")
        .help("File standing in for the clipboard (defaults to stdin/stdout)")
        .value_hint(ValueHint::FilePath)
}

pub fn build_cli() -> Command {
    Command::new("nbmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copy notebook cells as Markdown, and paste Markdown back as cells")
        .long_about(
            "nbmd converts between notebook cells and flat Markdown.\n\n\
            Commands:\n  \
            - copy:    Serialize selected cells of a notebook to Markdown\n  \
            - paste:   Parse Markdown and insert the cells into a notebook\n  \
            - convert: Transform whole documents between formats (markdown, ipynb)\n  \
            - inspect: Show the cells a document parses into\n\n\
            Extra Parameters:\n  \
            --extra-recognized-languages <a,b>  Languages that paste as code cells\n  \
            --extra-log-level <filter>          Logging filter (e.g. debug)\n\n\
            Examples:\n  \
            nbmd copy analysis.ipynb --select 0..3 > cells.md\n  \
            nbmd paste analysis.ipynb --select 2 --clipboard cells.md\n  \
            nbmd analysis.ipynb --to markdown",
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
                .help("Path to a nbmd.toml configuration file")
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
            Command::new("copy")
                .about("Copy selected cells as Markdown")
                .long_about(
                    "Serialize the selected cells of a notebook into Markdown.\n\n\
                    Markdown cells are emitted verbatim, code cells as fenced blocks tagged\n\
                    with their language, separated by one blank line. Output goes to\n\
                    stdout unless --clipboard names a file.",
                )
                .arg(notebook_arg())
                .arg(select_arg())
                .arg(clipboard_arg()),
        )
        .subcommand(
            Command::new("paste")
                .about("Paste Markdown as cells")
                .long_about(
                    "Parse Markdown (stdin, or --clipboard file) into cells and insert\n\
                    them after the first selection, or at the end of the notebook.\n\n\
                    Fenced code in a recognized language becomes a code cell; other\n\
                    fences stay literal inside a Markdown cell.",
                )
                .arg(notebook_arg())
                .arg(select_arg())
                .arg(clipboard_arg()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
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
            Command::new("inspect")
                .about("Show the cells a document parses into, as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
}
