mod debug_report;
mod repl;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use festpal::{LogSettings, Responder, load_content, load_reflections, load_rules};
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const AFTER_HELP: &str = "\
Environment:
  FESTPAL_LOG, LOG_LEVEL     Log filter when --log-level is not given (default: info).
  LOG_FILE                   Also write logs to this file.

Exit codes:
  0  Success.
  1  Configuration or runtime error.
  2  Invalid arguments or missing input.";

/// Rule-based festival information bot.
#[derive(Parser, Debug)]
#[command(name = "festpal", version, after_help = AFTER_HELP)]
struct Cli {
    /// Message to answer. Read from stdin when omitted.
    input: Vec<String>,

    /// Start an interactive session.
    #[arg(long, conflicts_with = "input")]
    repl: bool,

    /// Print how the reply was chosen.
    #[arg(long)]
    explain: bool,

    /// Bot name used in the introduction.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Festival content JSON file.
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Rule list JSON file, replacing the built-in rules.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Reflection map JSON file.
    #[arg(long, value_name = "FILE")]
    reflections: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, overrides_with = "color")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = LogSettings::from_env().with_overrides(cli.log_level.as_deref(), cli.log_file.as_deref());
    let _guard = match init_logging(&settings) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: failed to set up logging: {err}");
            return ExitCode::from(1);
        }
    };

    let bot = match build_responder(&cli) {
        Ok(bot) => bot,
        Err(err) => {
            error!(%err, "configuration failed");
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    if cli.repl {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return match repl::run(&bot, stdin.lock(), &mut stdout) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!(%err, "REPL i/o failed");
                eprintln!("error: {err}");
                ExitCode::from(1)
            }
        };
    }

    let input = match read_input(&cli.input) {
        Ok(input) => input,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    if cli.explain {
        let color = if cli.no_color {
            false
        } else {
            cli.color || io::stdout().is_terminal()
        };
        let res = bot.reply_verbose(&input);
        debug_report::print_reply(&input, &res, color);
    } else {
        println!("{}", bot.reply(&input));
    }

    ExitCode::SUCCESS
}

fn build_responder(cli: &Cli) -> Result<Responder, festpal::ConfigError> {
    let mut builder = Responder::builder();
    if let Some(name) = &cli.name {
        builder = builder.bot_name(name.clone());
    }
    if let Some(path) = &cli.content {
        builder = builder.content(load_content(path)?);
    }
    if let Some(path) = &cli.rules {
        builder = builder.rules(load_rules(path)?);
    }
    if let Some(path) = &cli.reflections {
        builder = builder.reflections(load_reflections(path)?);
    }
    builder.build()
}

// Arguments win over stdin. An explicit empty argument is a valid message
// and gets the introduction.
fn read_input(args: &[String]) -> Result<String, String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err("error: no input provided (pass a message, pipe one on stdin, or use --repl)\n\n\
                    For more information, try '--help'."
            .to_string());
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn init_logging(settings: &LogSettings) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(&settings.filter)?;
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    let (file_layer, guard) = match &settings.file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            fs::create_dir_all(dir)?;
            let file_name = path.file_name().ok_or("log file path has no file name")?;
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(filter).with(stderr_layer).with(file_layer).try_init()?;
    Ok(guard)
}
