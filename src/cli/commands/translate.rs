use anyhow::Result;
use std::path::PathBuf;

use crate::batch::{Orchestrator, OutputOverrides, OutputParameters};
use crate::cli::OutputArgs;
use crate::config::{ConfigManager, OutputDefaults};
use crate::provider::{DEFAULT_ENDPOINT, Translator};
use crate::report::Reporter;
use crate::ui::Spinner;

/// Where the content to translate comes from.
#[derive(Debug)]
pub enum Source {
    File(PathBuf),
    Directory(PathBuf),
    Text(String),
}

pub struct TranslateOptions {
    pub source: Source,
    pub languages: Vec<String>,
    pub output: OutputArgs,
    pub debug: bool,
}

/// Runs one translation batch end to end.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let reporter = Reporter::new(options.debug);
    let config = ConfigManager::new().load_or_default();

    let endpoint = config
        .provider
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let orchestrator = Orchestrator::new(Translator::new(endpoint), reporter);

    let overrides = merge_overrides(&options.output, &config.output);
    let languages = options.languages.join(" ");

    let spinner = (!options.debug).then(|| Spinner::start("Translating..."));

    let outcome = match &options.source {
        Source::File(path) => {
            let params = OutputParameters::resolve(overrides, Some(path));
            orchestrator
                .run_file(path, &languages, params)
                .await
                .map(drop)
        }
        Source::Directory(path) => {
            let params = OutputParameters::resolve(overrides, Some(path));
            orchestrator
                .run_directory(path, &languages, params)
                .await
                .map(drop)
        }
        Source::Text(text) => {
            let params = OutputParameters::resolve(overrides, None);
            orchestrator.run_text(text.clone(), &languages, params).await;
            Ok(())
        }
    };

    if let Some(spinner) = spinner {
        spinner.finish();
    }

    outcome
}

/// Merges CLI options over config-file defaults. Anything set in either layer
/// counts as explicitly supplied.
fn merge_overrides(args: &OutputArgs, defaults: &OutputDefaults) -> OutputOverrides {
    OutputOverrides {
        directory: args
            .output_file_directory
            .clone()
            .or_else(|| defaults.directory.clone()),
        name: args.output_file_name.clone(),
        extension: args
            .output_file_extension
            .clone()
            .or_else(|| defaults.extension.clone()),
        dynamic_folder: args
            .output_dynamic_language_folder
            .or(defaults.dynamic_language_folder),
        forced: args.forced,
        test: args.test,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_cli_wins() {
        let args = OutputArgs {
            output_file_directory: Some("cli-dir".to_string()),
            output_file_extension: None,
            output_dynamic_language_folder: Some(true),
            ..OutputArgs::default()
        };
        let defaults = OutputDefaults {
            directory: Some("cfg-dir".to_string()),
            extension: Some("md".to_string()),
            dynamic_language_folder: Some(false),
        };

        let overrides = merge_overrides(&args, &defaults);
        assert_eq!(overrides.directory.as_deref(), Some("cli-dir"));
        assert_eq!(overrides.extension.as_deref(), Some("md"));
        assert_eq!(overrides.dynamic_folder, Some(true));
    }

    #[test]
    fn test_merge_overrides_nothing_supplied() {
        let overrides = merge_overrides(&OutputArgs::default(), &OutputDefaults::default());

        assert!(overrides.directory.is_none());
        assert!(overrides.extension.is_none());
        assert!(overrides.dynamic_folder.is_none());
    }
}
