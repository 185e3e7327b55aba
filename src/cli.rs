// File: ./src/cli.rs
//! Shared command-line interface logic, like argument handling and help.
use crate::config::LogLevel;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Start the interactive prompt.
    Run { root: Option<PathBuf> },
    /// Write a default config.toml and exit.
    InitConfig { root: Option<PathBuf> },
    Help,
}

/// Interprets the process arguments (without the binary name).
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<CliAction, String> {
    let mut root = None;
    let mut init_config = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let arg: &str = arg.as_ref();
        match arg {
            "--help" | "-h" | "help" => return Ok(CliAction::Help),
            "--root" | "-r" => {
                let path: &str = iter
                    .next()
                    .ok_or_else(|| format!("{} requires a path", arg))?
                    .as_ref();
                root = Some(PathBuf::from(path));
            }
            "--init-config" => init_config = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    if init_config {
        Ok(CliAction::InitConfig { root })
    } else {
        Ok(CliAction::Run { root })
    }
}

pub fn help_text(binary_name: &str) -> String {
    let levels: Vec<String> = LogLevel::iter().map(|l| l.to_string()).collect();
    let mut lines = vec![
        format!(
            "{} v{} - A small task list chat bot",
            binary_name,
            env!("CARGO_PKG_VERSION")
        ),
        String::new(),
        "USAGE:".to_string(),
        format!("    {}                       Start the interactive prompt", binary_name),
        format!("    {} --init-config         Write a default config.toml", binary_name),
        format!("    {} --help                Show this help message", binary_name),
        String::new(),
        "OPTIONS:".to_string(),
        "    -r, --root <path>     Use a different directory for config.".to_string(),
        "    -h, --help            Show this help message.".to_string(),
        String::new(),
        "COMMANDS:".to_string(),
    ];
    lines.extend(
        [
            "list",
            "bye",
            "todo <description>",
            "deadline <description> /by <text>",
            "event <description> /from <text> /to <text>",
            "mark <index>",
            "unmark <index>",
            "delete <index>",
        ]
        .iter()
        .map(|c| format!("    {}", c)),
    );
    lines.push(String::new());
    lines.push("CONFIG (config.toml):".to_string());
    lines.push("    bot_name = \"AChatBot\"    Name used in the greeting".to_string());
    lines.push(format!(
        "    log_level = \"warn\"       One of: {} (logs go to stderr)",
        levels.join(", ")
    ));
    lines.join("\n")
}

pub fn print_help(binary_name: &str) {
    println!("{}", help_text(binary_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_runs() {
        let none: [&str; 0] = [];
        assert_eq!(parse_args(&none), Ok(CliAction::Run { root: None }));
    }

    #[test]
    fn root_and_init() {
        assert_eq!(
            parse_args(&["--init-config", "-r", "/tmp/bot"]),
            Ok(CliAction::InitConfig {
                root: Some(PathBuf::from("/tmp/bot"))
            })
        );
        assert!(parse_args(&["--root"]).is_err());
        assert!(parse_args(&["--verbose"]).is_err());
    }

    #[test]
    fn help_lists_grammar() {
        let text = help_text("achatbot");
        assert!(text.contains("event <description> /from <text> /to <text>"));
        assert!(text.contains("off, error, warn, info, debug, trace"));
        assert_eq!(parse_args(&["-h"]), Ok(CliAction::Help));
    }
}
