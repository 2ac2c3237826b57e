use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::cleanup::DEFAULT_CLEANUP_ROOT;

#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(about = "Batch fan-out translation CLI")]
#[command(version)]
pub struct Args {
    /// Show debug tracing for every pipeline step
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Use the contents of a file to translate into multiple languages
    #[command(visible_alias = "f")]
    File {
        /// Path of the source file
        path: PathBuf,

        /// Target languages: space separated, or one comma-separated list
        #[arg(required = true)]
        languages: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Translate every file under a directory tree
    #[command(visible_alias = "dir")]
    Directory {
        /// Root of the source tree
        path: PathBuf,

        /// Target languages: space separated, or one comma-separated list
        #[arg(required = true)]
        languages: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Use inline text to translate into multiple languages
    #[command(visible_alias = "t")]
    Text {
        /// The text to translate
        text: String,

        /// Target languages: space separated, or one comma-separated list
        #[arg(required = true)]
        languages: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete generated output folders under an environments root
    Dec {
        /// Root folder to scan
        #[arg(default_value = DEFAULT_CLEANUP_ROOT)]
        root: PathBuf,
    },
}

/// Output layout options shared by the translate commands.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Base directory for generated files [default: output, or next to the source]
    #[arg(long, alias = "ofd", value_name = "DIR")]
    pub output_file_directory: Option<String>,

    /// Fixed file name [default: the language code, or the source file name]
    #[arg(long, alias = "ofn", value_name = "NAME")]
    pub output_file_name: Option<String>,

    /// Extension for generated files [default: txt]
    #[arg(long, alias = "ofe", value_name = "EXT")]
    pub output_file_extension: Option<String>,

    /// Give each language its own folder under the base directory [default: true]
    #[arg(long, alias = "odlf", value_name = "BOOL", action = ArgAction::Set)]
    pub output_dynamic_language_folder: Option<bool>,

    /// Re-announce directory creation even when it already exists
    #[arg(short = 'f', long)]
    pub forced: bool,

    /// Skip the provider call and reuse the input text as the translation
    #[arg(short = 't', long)]
    pub test: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_text_command() {
        let args = Args::try_parse_from(["polyglot", "text", "hello", "en", "fr"]).unwrap();

        match args.command {
            Command::Text {
                text, languages, ..
            } => {
                assert_eq!(text, "hello");
                assert_eq!(languages, vec!["en", "fr"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_require_languages() {
        assert!(Args::try_parse_from(["polyglot", "text", "hello"]).is_err());
    }

    #[test]
    fn test_args_output_aliases() {
        let args = Args::try_parse_from([
            "polyglot", "text", "hello", "en", "--ofd", "out", "--ofe", "md", "--odlf", "false",
        ])
        .unwrap();

        match args.command {
            Command::Text { output, .. } => {
                assert_eq!(output.output_file_directory.as_deref(), Some("out"));
                assert_eq!(output.output_file_extension.as_deref(), Some("md"));
                assert_eq!(output.output_dynamic_language_folder, Some(false));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_dec_defaults_root() {
        let args = Args::try_parse_from(["polyglot", "dec"]).unwrap();

        match args.command {
            Command::Dec { root } => assert_eq!(root, PathBuf::from("environments")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_args_command_aliases() {
        assert!(Args::try_parse_from(["polyglot", "t", "hello", "en"]).is_ok());
        assert!(Args::try_parse_from(["polyglot", "f", "a.txt", "en"]).is_ok());
        assert!(Args::try_parse_from(["polyglot", "dir", ".", "en"]).is_ok());
    }
}
