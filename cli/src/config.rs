use std::path::{Path, PathBuf};
use std::process;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::info;

use reflow::{Error, ReflowOptions, Reflower};

/// Options file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "reflow.toml";

/// Build the reflower for this run, exiting with diagnostics on a bad config.
pub fn load_reflower(explicit: Option<&Path>, color_choice: ColorChoice) -> Reflower {
    let Some(path) = config_path(explicit) else {
        return Reflower::default();
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read config '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    let mut files = SimpleFiles::new();
    let file_id = files.add(path.display().to_string(), source.clone());

    let result = ReflowOptions::from_toml_str(&source).and_then(Reflower::new);
    match result {
        Ok(reflower) => {
            info!(config = %path.display(), options = ?reflower.options(), "loaded reflow options");
            reflower
        }
        Err(error) => {
            let diagnostic = config_diagnostic(&error, file_id);
            let writer = StandardStream::stderr(color_choice);
            let config = term::Config::default();
            let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
            process::exit(1);
        }
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    fallback.is_file().then_some(fallback)
}

/// Convert an options error to a diagnostic, labelled when TOML gave a span.
fn config_diagnostic(error: &Error, file_id: usize) -> Diagnostic<usize> {
    match error {
        Error::Config(toml_error) => {
            let diagnostic = Diagnostic::error().with_message("invalid reflow configuration");
            match toml_error.span() {
                Some(span) => diagnostic.with_labels(vec![
                    Label::primary(file_id, span).with_message(toml_error.message()),
                ]),
                None => diagnostic.with_notes(vec![toml_error.message().to_string()]),
            }
        }
        Error::InvalidOptions { .. } => Diagnostic::error().with_message(error.to_string()),
    }
}
