//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

/// Substitute environment variables and positional arguments in text.
///
/// Reads FILE (or standard input when FILE is absent or `-`), replaces
/// `$NAME`, `${NAME}`, `${NAME-default}` and `${NAME:-default}`, and writes
/// the result to standard output. `$0`, `$1`, ... refer to this program's
/// own command line.
#[derive(Debug, Parser)]
#[command(name = "envsubst", version, about)]
pub struct Cli {
    /// Input file; `-` or nothing reads standard input.
    pub file: Option<PathBuf>,

    /// Extra arguments, reachable as positional references.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Write the result to PATH, creating missing directories.
    #[arg(short, long, value_name = "PATH", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Rewrite FILE with the result.
    #[arg(short, long, requires = "file")]
    pub in_place: bool,

    /// Exit with failure if any reference had no value.
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

/// Where the text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Standard output.
    Stdout,
    /// A file on disk.
    File(PathBuf),
}

impl Cli {
    /// Returns the input source.
    #[must_use]
    pub fn input(&self) -> Input {
        match &self.file {
            Some(path) if path != Path::new("-") => Input::File(path.clone()),
            _ => Input::Stdin,
        }
    }

    /// Returns the output target.
    ///
    /// # Errors
    ///
    /// Returns an error if `--in-place` is used with standard input.
    pub fn output(&self) -> anyhow::Result<Output> {
        if let Some(path) = &self.output {
            return Ok(Output::File(path.clone()));
        }
        if self.in_place {
            return match self.input() {
                Input::File(path) => Ok(Output::File(path)),
                Input::Stdin => anyhow::bail!("--in-place needs a file, not standard input"),
            };
        }
        Ok(Output::Stdout)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_file_reads_stdin() {
        let cli = parse(&["envsubst"]);
        assert_eq!(cli.input(), Input::Stdin);
        assert_eq!(cli.output().unwrap(), Output::Stdout);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let cli = parse(&["envsubst", "-", "extra"]);
        assert_eq!(cli.input(), Input::Stdin);
        assert_eq!(cli.args, vec!["extra"]);
    }

    #[test]
    fn test_file_with_output() {
        let cli = parse(&["envsubst", "-o", "out/x.txt", "in.tpl"]);
        assert_eq!(cli.input(), Input::File(PathBuf::from("in.tpl")));
        assert_eq!(cli.output().unwrap(), Output::File(PathBuf::from("out/x.txt")));
    }

    #[test]
    fn test_in_place_writes_input() {
        let cli = parse(&["envsubst", "-i", "cfg.env"]);
        assert_eq!(cli.output().unwrap(), Output::File(PathBuf::from("cfg.env")));
    }

    #[test]
    fn test_in_place_rejects_stdin() {
        let cli = parse(&["envsubst", "-i", "-"]);
        assert!(cli.output().is_err());
    }

    #[test]
    fn test_in_place_conflicts_with_output() {
        assert!(Cli::try_parse_from(["envsubst", "-i", "-o", "x", "f"]).is_err());
    }

    #[test]
    fn test_in_place_requires_file() {
        assert!(Cli::try_parse_from(["envsubst", "-i"]).is_err());
    }

    #[test]
    fn test_trailing_args_keep_hyphens() {
        let cli = parse(&["envsubst", "t.tpl", "a", "-b", "--c"]);
        assert_eq!(cli.args, vec!["a", "-b", "--c"]);
    }

    #[test]
    fn test_verbose_count() {
        assert_eq!(parse(&["envsubst", "-vv"]).verbose, 2);
    }
}
