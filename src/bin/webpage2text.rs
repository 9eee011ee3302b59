//! Command-line tool: fetch a web page and print, save or copy its main text.
//!
//! Exit codes: 0 after a normal run (fetch, write and clipboard failures are
//! reported as text), 1 without a URL or when stdout is gone, 2 for
//! malformed arguments.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};
use tracing::error;
use webpage2text::clipboard::SystemClipboard;
use webpage2text::output::{self, Destinations};
use webpage2text::{extract_text_from_url, logging, Options};

const EXIT_MISSING_URL: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_CONSOLE: i32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "webpage2text",
    version = "1.2",
    about = "Extrahiere den Haupttext einer Webseite.",
    after_help = "Beispiel: webpage2text https://www.beispiel.de -o ausgabe.txt --xclip",
    override_usage = "webpage2text [-h] [-o DATEI] [--xclip] [--version] [URL]",
    help_template = "Verwendung: {usage}\n\n{about-with-newline}\n{all-args}{after-help}",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Arguments {
    #[arg(value_name = "URL", help = "URL der Webseite", help_heading = "Positionsargumente")]
    url: Option<String>,

    #[arg(
        short,
        long,
        value_name = "DATEI",
        value_parser = OsStringValueParser::new().map(PathBuf::from),
        help = "Dateiname zum Speichern des extrahierten Textes",
        help_heading = "Optionen",
        overrides_with = "output"
    )]
    output: Option<PathBuf>,

    #[arg(
        long,
        help = "Kopiere den extrahierten Text in die Zwischenablage",
        help_heading = "Optionen"
    )]
    xclip: bool,

    #[arg(
        short = 'h',
        long,
        action = ArgAction::Help,
        help = "Diese Hilfe anzeigen und beenden",
        help_heading = "Optionen"
    )]
    #[allow(dead_code)]
    help: Option<bool>,

    #[arg(
        long,
        action = ArgAction::Version,
        help = "Programmversion anzeigen und beenden",
        help_heading = "Optionen"
    )]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Arguments {
    fn run(self, url: &str) -> io::Result<()> {
        let text = extract_text_from_url(url, &Options::default());
        let destinations = Destinations {
            output: self.output.filter(|path| !path.as_os_str().is_empty()),
            clipboard: self.xclip,
        };

        let stdout = io::stdout();
        let mut console = stdout.lock();
        output::route(&text, &destinations, &mut console, &mut SystemClipboard)?;
        Ok(())
    }
}

fn print_help() {
    // stdout may already be closed; there is nothing left to report to
    let _ = Arguments::command().print_help();
}

fn invalid_arg(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        Some(ContextValue::Strings(args)) => args.join(", "),
        _ => String::new(),
    }
}

/// clap's message for `err`, in German where the kind is known.
fn german_message(err: &clap::Error) -> String {
    let arg = invalid_arg(err);
    match err.kind() {
        ErrorKind::UnknownArgument => format!("unbekanntes Argument: {arg}"),
        ErrorKind::InvalidValue | ErrorKind::NoEquals => {
            format!("Argument {arg}: erwartet einen Wert")
        }
        ErrorKind::ArgumentConflict => format!("Argument {arg} darf nur einmal angegeben werden"),
        ErrorKind::InvalidUtf8 => "Argumente müssen gültiges UTF-8 sein".to_string(),
        _ => {
            let rendered = err.render().to_string();
            let first = rendered.lines().next().unwrap_or_default();
            first.trim_start_matches("error: ").to_string()
        }
    }
}

fn exit_with_parse_error(err: &clap::Error) -> ! {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = err.print();
        process::exit(0);
    }
    eprintln!("Fehler: {}", german_message(err));
    print_help();
    process::exit(EXIT_USAGE);
}

fn main() {
    logging::init();

    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(err) => exit_with_parse_error(&err),
    };

    // an empty URL counts as missing
    let Some(url) = arguments.url.clone().filter(|url| !url.is_empty()) else {
        print_help();
        process::exit(EXIT_MISSING_URL);
    };

    if let Err(err) = arguments.run(&url) {
        error!(error = %err, "writing to the console failed");
        process::exit(EXIT_CONSOLE);
    }
}
