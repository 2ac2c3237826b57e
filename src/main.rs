use clap::Parser;

use polyglot_cli::cli::commands::cleanup::{self, CleanupOptions};
use polyglot_cli::cli::commands::translate::{self, Source, TranslateOptions};
use polyglot_cli::cli::{Args, Command};
use polyglot_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let debug = args.debug;

    let outcome = match args.command {
        Command::File {
            path,
            languages,
            output,
        } => {
            translate::run_translate(TranslateOptions {
                source: Source::File(path),
                languages,
                output,
                debug,
            })
            .await
        }
        Command::Directory {
            path,
            languages,
            output,
        } => {
            translate::run_translate(TranslateOptions {
                source: Source::Directory(path),
                languages,
                output,
                debug,
            })
            .await
        }
        Command::Text {
            text,
            languages,
            output,
        } => {
            translate::run_translate(TranslateOptions {
                source: Source::Text(text),
                languages,
                output,
                debug,
            })
            .await
        }
        Command::Dec { root } => cleanup::run_cleanup(CleanupOptions { root, debug }),
    };

    // failures are reported, not propagated: the process exits normally once
    // pending work has settled
    if let Err(error) = outcome {
        eprintln!("{}", Style::error(format!("{error:#}")));
    }
}
