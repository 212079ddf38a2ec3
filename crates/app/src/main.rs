//! envsubst - Main Entry Point
//!
//! Filters text through the substitution engine using the real process
//! environment and argument vector.

mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use envsubst_application::{
    ConvertFile, ConvertFileInput, FileSystem, SubstituteFile, Substitutor,
};
use envsubst_domain::ResolutionContext;
use envsubst_infrastructure::{ProcessArgs, ProcessEnvironment, TokioFileSystem};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, warn};

use crate::cli::{Cli, Input, Output};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli).await {
        Ok(unresolved) if cli.strict && !unresolved.is_empty() => {
            for name in &unresolved {
                warn!(name = %name, "reference has no value");
            }
            eprintln!("envsubst: unresolved references: {}", unresolved.join(", "));
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("envsubst: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one substitution and returns the names that had no value.
async fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let env = ProcessEnvironment::capture();
    let args = ProcessArgs::capture();
    let context = ResolutionContext::new(&env, &args);
    debug!(vars = env.len(), args = args.as_slice().len(), "captured process state");

    let fs = TokioFileSystem::new();
    let output = cli.output()?;

    match (cli.input(), output) {
        (Input::File(path), Output::File(target)) => {
            let converted = ConvertFile::new(fs)
                .execute(ConvertFileInput::new(&path, target), &context)
                .await
                .with_context(|| format!("cannot convert {}", path.display()))?;
            Ok(converted.unresolved)
        }
        (Input::File(path), Output::Stdout) => {
            let result = SubstituteFile::new(fs)
                .execute_detailed(&path, &context)
                .await
                .with_context(|| format!("cannot read {}", path.display()))?;
            write_stdout(&result.resolved).await?;
            Ok(result.unresolved)
        }
        (Input::Stdin, output) => {
            let text = read_stdin().await?;
            let result = Substitutor::new(context).resolve(&text);
            match output {
                Output::Stdout => write_stdout(&result.resolved).await?,
                Output::File(target) => fs
                    .write_file(&target, result.resolved.as_bytes())
                    .await
                    .with_context(|| format!("cannot write {}", target.display()))?,
            }
            Ok(result.unresolved)
        }
    }
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut bytes)
        .await
        .context("cannot read standard input")?;
    debug!(bytes = bytes.len(), "read standard input");
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

async fn write_stdout(text: &str) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(text.as_bytes())
        .await
        .context("cannot write standard output")?;
    stdout.flush().await.context("cannot write standard output")
}
