use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "string-tools")]
#[command(about = "Small string manipulation helpers")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print the result as a JSON object")]
    pub json: bool,

    #[arg(long, global = true, help = "TOML file with wrapping defaults")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upper-case the first character
    Capitalize { text: String },
    /// Zero-based index of the n-th occurrence of a character (-1 if absent)
    NthIndex { ch: char, n: usize, text: String },
    /// Camel-cased, punctuation-free identifier
    Sanitize { text: String },
    RemoveCommas { text: String },
    RemoveQuotes { text: String },
    Reverse { text: String },
    /// Remove every whitespace character
    TrimAll { text: String },
    /// Break the line at the first space past the width
    Wrap {
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        html: bool,
        text: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Capitalize { .. } => "capitalize",
            Command::NthIndex { .. } => "nth-index",
            Command::Sanitize { .. } => "sanitize",
            Command::RemoveCommas { .. } => "remove-commas",
            Command::RemoveQuotes { .. } => "remove-quotes",
            Command::Reverse { .. } => "reverse",
            Command::TrimAll { .. } => "trim-all",
            Command::Wrap { .. } => "wrap",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Command::Capitalize { text }
            | Command::NthIndex { text, .. }
            | Command::Sanitize { text }
            | Command::RemoveCommas { text }
            | Command::RemoveQuotes { text }
            | Command::Reverse { text }
            | Command::TrimAll { text }
            | Command::Wrap { text, .. } => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrap_command() {
        let config =
            CliConfig::try_parse_from(["string-tools", "--json", "wrap", "--width", "10", "--html", "a b"])
                .unwrap();
        assert!(config.json);
        match config.command {
            Command::Wrap { width, html, ref text } => {
                assert_eq!(width, Some(10));
                assert!(html);
                assert_eq!(text, "a b");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_nth_index_command() {
        let config = CliConfig::try_parse_from(["string-tools", "nth-index", "a", "2", "banana"]).unwrap();
        assert_eq!(config.command.name(), "nth-index");
        assert_eq!(config.command.text(), "banana");
    }
}
