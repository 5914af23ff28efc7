//! Command-line interface for unistyle.
//!
//! Handles argument parsing and the one-shot subcommands (`apply`, `styles`).
//! Without a subcommand, or with `serve`, the caller starts the HTTP server.

use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use unistyle_styles::{PASSTHROUGH_STYLE, Style, apply_style, transform};

use crate::config::LogLevel;

/// unistyle - restyle plain text with Unicode look-alike glyphs
#[derive(Parser, Debug)]
#[command(name = "unistyle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// Flags that override config file values for the server.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Config file to read instead of ~/.config/unistyle/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Interface to listen on
    #[arg(long, value_name = "ADDR", global = true)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT", global = true)]
    pub port: Option<u16>,

    /// Serve the client page from this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub static_dir: Option<PathBuf>,

    /// Log verbosity (overrides RUST_LOG and the config file)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Style TEXT (or stdin) and print the result
    Apply {
        /// Style identifier; unknown identifiers leave the text unchanged
        #[arg(short, long, default_value = PASSTHROUGH_STYLE)]
        style: String,

        /// Text to style; read from stdin when omitted
        text: Option<String>,
    },

    /// List the available styles
    Styles,
}

/// Runtime options passed from CLI to the server
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
}

impl From<ServerArgs> for RuntimeOptions {
    fn from(args: ServerArgs) -> Self {
        Self {
            config_path: args.config,
            bind: args.bind,
            port: args.port,
            static_dir: args.static_dir,
            log_level: args.log_level,
        }
    }
}

/// Result of CLI processing
#[derive(Debug)]
pub enum CliResult {
    /// Start the server with these options
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Parse process arguments and run any one-shot subcommand.
pub fn process_cli() -> CliResult {
    handle(Cli::parse())
}

/// Dispatch an already-parsed command line.
pub fn handle(cli: Cli) -> CliResult {
    match cli.command {
        Some(Commands::Apply { style, text }) => {
            let code = match run_apply(&style, text) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("unistyle: error: {e:#}");
                    1
                }
            };
            CliResult::Exit(code)
        }
        Some(Commands::Styles) => {
            let mut stdout = io::stdout().lock();
            let code = match write_style_list(&mut stdout) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("unistyle: error: {e}");
                    1
                }
            };
            CliResult::Exit(code)
        }
        Some(Commands::Serve) | None => CliResult::Continue(cli.server.into()),
    }
}

/// Style `text` (or all of stdin) and write it to stdout.
fn run_apply(style: &str, text: Option<String>) -> anyhow::Result<()> {
    let input = read_input(text, &mut io::stdin().lock())?;
    write_styled(
        style,
        &input,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}

/// The positional text if given, otherwise everything readable from `stdin`.
fn read_input(text: Option<String>, stdin: &mut impl Read) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write `input` styled with `style` to `out`, ending with exactly one newline.
///
/// Unknown styles other than `normal` print a warning to `warn` and leave the
/// text unchanged.
pub fn write_styled(
    style: &str,
    input: &str,
    out: &mut impl Write,
    warn: &mut impl Write,
) -> io::Result<()> {
    if style != PASSTHROUGH_STYLE && Style::from_id(style).is_none() {
        writeln!(
            warn,
            "unistyle: warning: unknown style '{style}', text left unchanged"
        )?;
    }

    write!(out, "{}", transform(input, style))?;
    if !input.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()
}

/// Write one line per style: identifier, preview, description.
pub fn write_style_list(out: &mut impl Write) -> io::Result<()> {
    for style in Style::all() {
        writeln!(
            out,
            "{:<10} {:<12} {}",
            style.id(),
            apply_style(style.display_name(), *style),
            style.description()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_continues_with_flags() {
        let cli = Cli::try_parse_from(["unistyle", "--port", "9000", "--bind", "127.0.0.1"])
            .expect("args should parse");
        match handle(cli) {
            CliResult::Continue(options) => {
                assert_eq!(options.port, Some(9000));
                assert_eq!(options.bind.as_deref(), Some("127.0.0.1"));
                assert!(options.config_path.is_none());
            }
            CliResult::Exit(code) => panic!("expected Continue, got Exit({code})"),
        }
    }

    #[test]
    fn test_serve_subcommand_continues() {
        let cli = Cli::try_parse_from(["unistyle", "serve", "--log-level", "debug"])
            .expect("args should parse");
        match handle(cli) {
            CliResult::Continue(options) => assert_eq!(options.log_level, Some(LogLevel::Debug)),
            CliResult::Exit(code) => panic!("expected Continue, got Exit({code})"),
        }
    }

    #[test]
    fn test_serve_subcommand_accepts_server_flags() {
        let cli = Cli::try_parse_from([
            "unistyle",
            "serve",
            "--port",
            "9000",
            "--bind",
            "127.0.0.1",
            "--static-dir",
            "public",
        ])
        .expect("server flags should parse after serve");
        match handle(cli) {
            CliResult::Continue(options) => {
                assert_eq!(options.port, Some(9000));
                assert_eq!(options.bind.as_deref(), Some("127.0.0.1"));
                assert_eq!(options.static_dir, Some(PathBuf::from("public")));
            }
            CliResult::Exit(code) => panic!("expected Continue, got Exit({code})"),
        }
    }

    #[test]
    fn test_serve_short_port_flag() {
        let cli = Cli::try_parse_from(["unistyle", "serve", "-p", "8080"])
            .expect("args should parse");
        match handle(cli) {
            CliResult::Continue(options) => assert_eq!(options.port, Some(8080)),
            CliResult::Exit(code) => panic!("expected Continue, got Exit({code})"),
        }
    }

    #[test]
    fn test_apply_parses_style_and_text() {
        let cli = Cli::try_parse_from(["unistyle", "apply", "--style", "bold", "Hello"])
            .expect("args should parse");
        match cli.command {
            Some(Commands::Apply { style, text }) => {
                assert_eq!(style, "bold");
                assert_eq!(text.as_deref(), Some("Hello"));
            }
            other => panic!("expected Apply, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_defaults_to_passthrough() {
        let cli = Cli::try_parse_from(["unistyle", "apply", "x"]).expect("args should parse");
        match cli.command {
            Some(Commands::Apply { style, .. }) => assert_eq!(style, "normal"),
            other => panic!("expected Apply, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(Cli::try_parse_from(["unistyle", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_read_input_prefers_argument() {
        let mut stdin = io::Cursor::new("from stdin");
        let input = read_input(Some("from argv".to_string()), &mut stdin)
            .expect("reading input should succeed");
        assert_eq!(input, "from argv");
    }

    #[test]
    fn test_read_input_falls_back_to_stdin() {
        let mut stdin = io::Cursor::new("line one\nline two\n");
        let input = read_input(None, &mut stdin).expect("reading stdin should succeed");
        assert_eq!(input, "line one\nline two\n");
    }

    #[test]
    fn test_write_styled_adds_trailing_newline() {
        let mut out = Vec::new();
        let mut warn = Vec::new();
        write_styled("bold", "Hello", &mut out, &mut warn).expect("write should succeed");
        assert_eq!(String::from_utf8(out).unwrap(), "𝗛𝗲𝗹𝗹𝗼\n");
        assert!(warn.is_empty());
    }

    #[test]
    fn test_write_styled_keeps_existing_newline() {
        let mut out = Vec::new();
        let mut warn = Vec::new();
        write_styled("smallcaps", "abc\n", &mut out, &mut warn).expect("write should succeed");
        assert_eq!(String::from_utf8(out).unwrap(), "ᴀʙᴄ\n");
    }

    #[test]
    fn test_write_styled_warns_on_unknown_style() {
        let mut out = Vec::new();
        let mut warn = Vec::new();
        write_styled("fancy", "plain", &mut out, &mut warn).expect("write should succeed");
        assert_eq!(String::from_utf8(out).unwrap(), "plain\n");
        let warning = String::from_utf8(warn).unwrap();
        assert!(warning.contains("unknown style 'fancy'"), "got {warning:?}");
    }

    #[test]
    fn test_write_styled_passthrough_is_silent() {
        let mut out = Vec::new();
        let mut warn = Vec::new();
        write_styled("normal", "as is", &mut out, &mut warn).expect("write should succeed");
        assert_eq!(String::from_utf8(out).unwrap(), "as is\n");
        assert!(warn.is_empty());
    }

    #[test]
    fn test_style_list_has_one_line_per_style() {
        let mut out = Vec::new();
        write_style_list(&mut out).expect("writing to a Vec should succeed");
        let text = String::from_utf8(out).expect("output should be UTF-8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), Style::all().len());
        assert!(lines[0].starts_with("bold"));
        assert!(lines[0].contains("𝗕𝗼𝗹𝗱"));
        assert!(lines[4].starts_with("smallcaps"));
    }
}
