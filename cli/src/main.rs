mod config;
mod test_runner;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use codespan_reporting::diagnostic::{Diagnostic, Severity};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use article::{ArticleView, render_html};
use reflow::{ReflowReport, Reflower};

const SUBCOMMANDS: &[&str] = &["format", "outline", "stats", "test", "help"];

/// Global options that take a separate value argument.
const VALUE_FLAGS: &[&str] = &["--config"];

#[derive(Parser)]
#[command(name = "reflow", version, about = "Reflow loosely structured prose into Markdown")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Reflow options file (TOML). Defaults to ./reflow.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reflow a file (or stdin) into Markdown
    Format(FormatArgs),

    /// Print the outline (level 2-4 headings) of the reflowed text
    Outline(InputArgs),

    /// Print word count, reading time and excerpt
    Stats(InputArgs),

    /// Run .test.md fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct InputArgs {
    /// Input file; `-` or omitted reads stdin
    file: Option<String>,
}

#[derive(clap::Args)]
struct FormatArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the reflowed Markdown to HTML
    #[arg(long)]
    html: bool,

    /// Describe what the reflow changed on stderr
    #[arg(long)]
    explain: bool,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.md file or directory containing them
    path: String,

    /// Run only fixtures in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    let args = with_default_subcommand(std::env::args().collect());
    let cli = Cli::parse_from(&args);

    init_tracing(cli.verbose);

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    match cli.command {
        Command::Format(format_args) => {
            let reflower = config::load_reflower(cli.config.as_deref(), color_choice);
            do_format(format_args, &reflower, color_choice);
        }
        Command::Outline(input) => {
            let reflower = config::load_reflower(cli.config.as_deref(), color_choice);
            let (_, body) = read_input(&input);
            do_outline(&body, &reflower);
        }
        Command::Stats(input) => {
            let reflower = config::load_reflower(cli.config.as_deref(), color_choice);
            let (_, body) = read_input(&input);
            do_stats(&body, &reflower);
        }
        Command::Test(test_args) => {
            let path = Path::new(&test_args.path);
            if test_args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_tests(path, cli.no_color, &test_args.category);
            process::exit(exit_code);
        }
    }
}

/// Make `reflow notes.txt` behave like `reflow format notes.txt`, and a bare
/// `reflow` read stdin.
fn with_default_subcommand(mut args: Vec<String>) -> Vec<String> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if matches!(arg, "-h" | "--help" | "-V" | "--version") {
            return args;
        }
        if VALUE_FLAGS.contains(&arg) {
            i += 2;
            continue;
        }
        if arg.starts_with('-') && arg != "-" {
            i += 1;
            continue;
        }
        if !SUBCOMMANDS.contains(&arg) {
            args.insert(i, "format".to_string());
        }
        return args;
    }
    args.push("format".to_string());
    args
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the input file or stdin. Returns a display name and the text.
fn read_input(input: &InputArgs) -> (String, String) {
    match input.file.as_deref() {
        None | Some("-") => {
            let mut text = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut text) {
                eprintln!("error: cannot read stdin: {}", e);
                process::exit(1);
            }
            ("<stdin>".to_string(), text)
        }
        Some(file) => match std::fs::read_to_string(file) {
            Ok(text) => (file.to_string(), text),
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", file, e);
                process::exit(1);
            }
        },
    }
}

fn do_format(args: FormatArgs, reflower: &Reflower, color_choice: ColorChoice) {
    let (name, body) = read_input(&args.input);
    let reflowed = reflower.reflow(&body);
    let markdown = reflowed.markdown();

    if args.explain {
        emit_report(&name, &reflowed.report, color_choice);
    }

    let mut rendered = if args.html {
        render_html(&markdown)
    } else {
        markdown
    };
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    let written = match &args.output {
        Some(path) => std::fs::write(path, &rendered),
        None => std::io::stdout().lock().write_all(rendered.as_bytes()),
    };
    if let Err(e) = written {
        let target = args
            .output
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
        eprintln!("error: cannot write {}: {}", target, e);
        process::exit(1);
    }
}

fn do_outline(body: &str, reflower: &Reflower) {
    let view = ArticleView::build(body, reflower);
    for entry in &view.outline.entries {
        let indent = "  ".repeat(usize::from(entry.level.saturating_sub(2)));
        println!("{}- {} (#{})", indent, entry.text, entry.id);
    }
}

fn do_stats(body: &str, reflower: &Reflower) {
    let view = ArticleView::build(body, reflower);
    println!("words: {}", view.word_count);
    println!("reading time: {} min", view.reading_minutes);
    println!("sections: {}", view.outline.len());
    println!("excerpt: {}", view.excerpt);
}

/// Print the reflow report as diagnostics: forced splits warn, the rest is a note.
fn emit_report(name: &str, report: &ReflowReport, color_choice: ColorChoice) {
    let files: SimpleFiles<String, String> = SimpleFiles::new();
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    let mut notes = vec![
        format!("{} block(s)", report.blocks),
        format!("{} paragraph break(s) inserted", report.paragraph_breaks),
        format!("{} block(s) split", report.split_blocks),
    ];
    if !report.promoted.is_empty() {
        notes.push(format!("promoted: {}", report.promoted.join(", ")));
    }

    let mut diagnostics = vec![
        Diagnostic::new(Severity::Note)
            .with_message(format!("reflowed {}", name))
            .with_notes(notes),
    ];
    if report.forced_splits > 0 {
        diagnostics.push(
            Diagnostic::new(Severity::Warning)
                .with_message(format!(
                    "{} paragraph(s) cut mid-word for lack of a sentence end or space",
                    report.forced_splits
                ))
                .with_notes(vec!["break the text into sentences to control where it splits".to_string()]),
        );
    }

    for diagnostic in &diagnostics {
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, diagnostic);
    }
}
