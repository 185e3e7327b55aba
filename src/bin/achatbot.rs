use achatbot::cli::{self, CliAction};
use achatbot::config::{Config, LogLevel};
use achatbot::context::StandardContext;
use achatbot::interpreter::Interpreter;
use anyhow::Result;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::io;

fn init_logging(level: LogLevel) {
    // stdout carries the conversation; diagnostics go to stderr.
    if let Err(e) = TermLogger::init(
        level.into(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let root = match cli::parse_args(args.as_slice()) {
        Ok(CliAction::Help) => {
            cli::print_help("achatbot");
            return Ok(());
        }
        Ok(CliAction::InitConfig { root }) => {
            let ctx = StandardContext::new(root);
            Config::default().save(&ctx)?;
            println!("Wrote default configuration.");
            return Ok(());
        }
        Ok(CliAction::Run { root }) => root,
        Err(msg) => {
            eprintln!("{}\n", msg);
            eprintln!("{}", cli::help_text("achatbot"));
            std::process::exit(2);
        }
    };

    let ctx = StandardContext::new(root);
    let cfg = match Config::load(&ctx) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration:\n{:#}", e);
            std::process::exit(1);
        }
    };
    init_logging(cfg.log_level);
    log::debug!("Starting as '{}'", cfg.bot_name);

    let mut bot = Interpreter::new(cfg.bot_name);
    bot.run(io::stdin().lock(), io::stdout().lock())
}
