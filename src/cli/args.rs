use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

/// Query and update a Notion database
#[derive(Debug, Parser)]
#[command(name = "notime", version)]
pub struct Cli {
    /// Print the raw JSON response instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every row of the database
    All,
    /// List rows tagged "Sprint <NUMBER>"
    Sprint { number: u32 },
    /// Patch a page with a JSON body (inline, or @path to read a file)
    Update { page_id: String, patch: String },
}

/// Parses an inline JSON patch, or the contents of a file when prefixed with `@`.
pub fn read_patch(arg: &str) -> Result<Value> {
    let (source, text) = match arg.strip_prefix('@') {
        Some(path) => {
            let path = PathBuf::from(path);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read patch file {}", path.display()))?;
            (path.display().to_string(), text)
        }
        None => ("argument".to_string(), arg.to_string()),
    };

    serde_json::from_str(&text).with_context(|| format!("patch {source} is not valid JSON"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_sprint_command() {
        let cli = Cli::try_parse_from(["notime", "--json", "sprint", "7"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Sprint { number: 7 }));
    }

    #[test]
    fn rejects_non_numeric_sprint() {
        assert!(Cli::try_parse_from(["notime", "sprint", "seven"]).is_err());
    }

    #[test]
    fn inline_patch() {
        let patch = read_patch(r#"{"properties":{"Done":{"checkbox":true}}}"#).unwrap();
        assert_eq!(patch, json!({ "properties": { "Done": { "checkbox": true } } }));
    }

    #[test]
    fn invalid_patch_is_reported() {
        let err = read_patch("{not json").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn missing_patch_file() {
        let err = read_patch("@/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("failed to read patch file"));
    }
}
