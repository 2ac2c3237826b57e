//! Per-language task fan-out and multi-file dispatch.
//!
//! One invocation translates one content payload (or one payload per file of
//! a directory batch) into every requested language. Each language becomes
//! its own task on the runtime; each task yields control once before touching
//! the network or the disk, so scheduling interleaves cooperatively instead
//! of running back-to-back in one poll. Completion order between languages is
//! unspecified.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use futures_util::future::join_all;

use crate::batch::params::OutputParameters;
use crate::batch::resolver;
use crate::fs::{PathKind, atomic_write, expect_kind, walk_files};
use crate::input::read_source;
use crate::provider::{ProviderError, Translator};
use crate::report::Reporter;
use crate::ui::Style;

/// One successful per-language outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedText {
    pub language: String,
    pub text: String,
}

/// Parses a language specifier into an ordered list of language codes.
///
/// A comma anywhere makes comma the sole delimiter: all whitespace is
/// stripped first, so `"en, fr , de"` and `"en,fr,de"` are equivalent.
/// Without a comma the specifier splits on single spaces. Duplicates are kept
/// and processed independently.
pub fn split_languages(specifier: &str) -> Vec<String> {
    let tokens: Vec<String> = if specifier.contains(',') {
        let stripped: String = specifier.chars().filter(|c| !c.is_whitespace()).collect();
        stripped.split(',').map(str::to_string).collect()
    } else {
        specifier.split(' ').map(str::to_string).collect()
    };

    tokens.into_iter().filter(|token| !token.is_empty()).collect()
}

/// Drives translation batches: fans out language tasks, writes output files,
/// and emits the batch-complete signal.
#[derive(Clone)]
pub struct Orchestrator {
    translator: Translator,
    reporter: Reporter,
}

impl Orchestrator {
    pub const fn new(translator: Translator, reporter: Reporter) -> Self {
        Self {
            translator,
            reporter,
        }
    }

    /// Translates inline text into every requested language.
    ///
    /// The batch-complete signal fires unconditionally once all language
    /// tasks settle.
    pub async fn run_text(
        &self,
        content: String,
        languages: &str,
        params: OutputParameters,
    ) -> Vec<TranslatedText> {
        let results = self
            .fan_out(Arc::new(content), languages, Arc::new(params))
            .await;
        self.announce_complete(&results);
        results
    }

    /// Translates the contents of one file into every requested language.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a regular file or cannot be read;
    /// no tasks are created in that case.
    pub async fn run_file(
        &self,
        path: &Path,
        languages: &str,
        params: OutputParameters,
    ) -> Result<Vec<TranslatedText>> {
        expect_kind(path, PathKind::File)?;
        let content = read_source(path)?;
        Ok(self.run_text(content, languages, params).await)
    }

    /// Translates every file under `root` into every requested language.
    ///
    /// Files are dispatched without waiting on prior files, so their language
    /// task sets interleave. The batch-complete signal fires exactly once,
    /// from the file whose index is last, regardless of the completion order
    /// of earlier files. All file tasks are joined before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a directory or cannot be traversed.
    pub async fn run_directory(
        &self,
        root: &Path,
        languages: &str,
        params: OutputParameters,
    ) -> Result<Vec<TranslatedText>> {
        expect_kind(root, PathKind::Directory)?;

        let files = walk_files(root, |_| true)?;
        if files.is_empty() {
            self.reporter
                .advise(format!("no files found under {}", root.display()));
            return Ok(Vec::new());
        }

        let total = files.len();
        let base = Arc::new(params);
        let mut tasks = Vec::with_capacity(total);

        for (index, file) in files.into_iter().enumerate() {
            let orchestrator = self.clone();
            let languages = languages.to_string();
            let base = Arc::clone(&base);

            tasks.push(tokio::spawn(async move {
                orchestrator
                    .file_task(file, index, total, &languages, &base)
                    .await
            }));
        }

        let mut all = Vec::new();
        for outcome in join_all(tasks).await {
            if let Ok(results) = outcome {
                all.extend(results);
            }
        }

        Ok(all)
    }

    async fn file_task(
        &self,
        file: PathBuf,
        index: usize,
        total: usize,
        languages: &str,
        base: &OutputParameters,
    ) -> Vec<TranslatedText> {
        self.reporter.trace(format!(
            "file {}/{total}: {}",
            index + 1,
            file.display()
        ));

        let content = match read_source(&file) {
            Ok(content) => content,
            Err(error) => {
                self.reporter
                    .error(format!("[{}]: {error:#}", file.display()));
                return Vec::new();
            }
        };

        let stem = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let params = Arc::new(base.for_file(&stem, total));

        let results = self.fan_out(Arc::new(content), languages, params).await;

        // only the last index closes out the batch, whatever order the
        // other files land in
        if index == total - 1 {
            self.announce_complete(&results);
        }

        results
    }

    /// Spawns one task per language and waits for all of them to settle.
    /// A failed task contributes nothing; it never aborts its siblings.
    async fn fan_out(
        &self,
        content: Arc<String>,
        languages: &str,
        params: Arc<OutputParameters>,
    ) -> Vec<TranslatedText> {
        let mut tasks = Vec::new();

        for language in split_languages(languages) {
            let orchestrator = self.clone();
            let content = Arc::clone(&content);
            let params = Arc::clone(&params);

            tasks.push(tokio::spawn(async move {
                // hand the slot back once before any network or disk work
                tokio::task::yield_now().await;

                orchestrator
                    .language_task(&content, &language, &params)
                    .await
                    .map(|text| TranslatedText { language, text })
            }));
        }

        join_all(tasks)
            .await
            .into_iter()
            .flat_map(|outcome| outcome.ok().flatten())
            .collect()
    }

    async fn language_task(
        &self,
        content: &str,
        language: &str,
        params: &OutputParameters,
    ) -> Option<String> {
        let text = if params.test {
            content.to_string()
        } else {
            match self.translator.translate(content, language).await {
                Ok(text) => text,
                Err(error) if error.is_throttling() => {
                    self.reporter.advise(format!(
                        "[{}]: provider is throttling requests, skipping this language; re-run the command later",
                        Style::code(language)
                    ));
                    return None;
                }
                Err(error) => {
                    // any provider failure drops just this language
                    self.reporter
                        .error(format!("[{}]: {error}", Style::code(language)));
                    return None;
                }
            }
        };

        self.reporter
            .trace(format!("[{}]: {text}", Style::code(language)));

        if let Err(error) = self.write_output(language, &text, params) {
            self.reporter
                .error(format!("[{}]: {error:#}", Style::code(language)));
            return None;
        }

        Some(text)
    }

    fn write_output(&self, language: &str, text: &str, params: &OutputParameters) -> Result<()> {
        let directory = resolver::directory_for(params, language);

        let created = resolver::ensure_directory(&directory, params.forced)?;
        if created {
            self.reporter
                .trace(format!("created directory {}", Style::path(directory.display())));
        }

        let file = resolver::file_for(params, language);
        atomic_write(&file, text)?;
        self.reporter
            .trace(format!("wrote {}", Style::path(file.display())));

        Ok(())
    }

    fn announce_complete(&self, results: &[TranslatedText]) {
        if results.is_empty() {
            self.reporter.advise("no translations were produced");
            return;
        }

        let languages: Vec<&str> = results
            .iter()
            .map(|result| result.language.as_str())
            .collect();
        self.reporter.success(format!(
            "✓ successfully translated content ({})",
            languages.join(", ")
        ));
    }
}
