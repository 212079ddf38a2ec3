//! Convert file use case.

use std::path::{Path, PathBuf};

use envsubst_domain::ResolutionContext;
use tracing::debug;

use crate::ports::{FileSystem, FileSystemError};
use crate::substitution::Substitutor;

/// Input for converting a template file.
#[derive(Debug, Clone)]
pub struct ConvertFileInput {
    /// File to read.
    pub input: PathBuf,
    /// Where to write the result. `None` rewrites `input` in place.
    pub output: Option<PathBuf>,
}

impl ConvertFileInput {
    /// Converts `input` into `output`.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: Some(output.into()),
        }
    }

    /// Converts `input` in place.
    #[must_use]
    pub fn in_place(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    /// Returns the path the result will be written to.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Output of a file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertFileOutput {
    /// The path that was written.
    pub written: PathBuf,
    /// Number of bytes written.
    pub bytes: usize,
    /// Names that had no value and were replaced with the empty string.
    pub unresolved: Vec<String>,
}

/// Use case for substituting a file into another file.
///
/// Missing parent directories of the output are created.
pub struct ConvertFile<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> ConvertFile<F> {
    /// Creates a new `ConvertFile` use case.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Reads the input, substitutes it and writes the output.
    ///
    /// # Errors
    /// - Returns error if the input cannot be read or is not valid UTF-8
    /// - Returns error if the output directory or file cannot be created
    pub async fn execute(
        &self,
        input: ConvertFileInput,
        context: &ResolutionContext<'_>,
    ) -> Result<ConvertFileOutput, FileSystemError> {
        let text = self.fs.read_file_string(&input.input).await?;
        let result = Substitutor::new(*context).resolve(&text);

        let output = input.output_path();
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty())
            && !self.fs.exists(parent).await
        {
            debug!(dir = %parent.display(), "creating output directory");
            self.fs.create_dir_all(parent).await?;
        }

        self.fs.write_file(output, result.resolved.as_bytes()).await?;
        debug!(
            input = %input.input.display(),
            output = %output.display(),
            bytes = result.resolved.len(),
            "converted template"
        );

        Ok(ConvertFileOutput {
            written: output.to_path_buf(),
            bytes: result.resolved.len(),
            unresolved: result.unresolved,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryFileSystem;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Arc;

    impl<T: FileSystem> FileSystem for Arc<T> {
        async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
            (**self).read_file_string(path).await
        }

        async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
            (**self).write_file(path, contents).await
        }

        async fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
            (**self).create_dir_all(path).await
        }

        async fn exists(&self, path: &Path) -> bool {
            (**self).exists(path).await
        }
    }

    fn env() -> HashMap<String, String> {
        HashMap::from([("NAME".to_string(), "world".to_string())])
    }

    #[tokio::test]
    async fn test_convert_to_new_path_creates_directories() {
        let fs = Arc::new(MemoryFileSystem::with_file("/in/greeting.tpl", "hello $NAME"));
        let env = env();
        let context = ResolutionContext::from_env(&env);
        assert!(!fs.has_dir(Path::new("/out/nested")));

        let output = ConvertFile::new(Arc::clone(&fs))
            .execute(
                ConvertFileInput::new("/in/greeting.tpl", "/out/nested/greeting.txt"),
                &context,
            )
            .await
            .unwrap();

        assert_eq!(output.written, PathBuf::from("/out/nested/greeting.txt"));
        assert_eq!(output.bytes, "hello world".len());
        assert!(output.unresolved.is_empty());
        assert!(fs.has_dir(Path::new("/out/nested")));
        assert_eq!(
            fs.contents(Path::new("/out/nested/greeting.txt")).as_deref(),
            Some("hello world")
        );
        assert_eq!(
            fs.contents(Path::new("/in/greeting.tpl")).as_deref(),
            Some("hello $NAME")
        );
    }

    #[tokio::test]
    async fn test_write_without_output_directory_fails() {
        let fs = MemoryFileSystem::default();

        let err = fs
            .write_file(Path::new("/missing/out.txt"), b"x")
            .await
            .unwrap_err();

        assert!(matches!(err, FileSystemError::NotFound(p) if p == Path::new("/missing")));
        assert!(!fs.has_dir(Path::new("/missing")));
    }

    #[tokio::test]
    async fn test_convert_creates_each_missing_ancestor() {
        let fs = Arc::new(MemoryFileSystem::with_file("/in.tpl", "$NAME"));
        let env = env();
        let context = ResolutionContext::from_env(&env);
        assert!(!fs.has_dir(Path::new("/a")));

        ConvertFile::new(Arc::clone(&fs))
            .execute(ConvertFileInput::new("/in.tpl", "/a/b/c/out.txt"), &context)
            .await
            .unwrap();

        assert!(fs.has_dir(Path::new("/a")));
        assert!(fs.has_dir(Path::new("/a/b/c")));
        assert_eq!(
            fs.contents(Path::new("/a/b/c/out.txt")).as_deref(),
            Some("world")
        );
    }

    #[tokio::test]
    async fn test_convert_in_place() {
        let fs = Arc::new(MemoryFileSystem::with_file(
            "/cfg/app.env",
            "X=${NAME:-none} Y=$MISSING",
        ));
        let env = env();
        let context = ResolutionContext::from_env(&env);

        let output = ConvertFile::new(Arc::clone(&fs))
            .execute(ConvertFileInput::in_place("/cfg/app.env"), &context)
            .await
            .unwrap();

        assert_eq!(output.written, PathBuf::from("/cfg/app.env"));
        assert_eq!(output.unresolved, vec!["MISSING"]);
        assert_eq!(
            fs.contents(Path::new("/cfg/app.env")).as_deref(),
            Some("X=world Y=")
        );
    }

    #[tokio::test]
    async fn test_missing_input_writes_nothing() {
        let fs = Arc::new(MemoryFileSystem::default());
        let context = ResolutionContext::empty();

        let err = ConvertFile::new(Arc::clone(&fs))
            .execute(ConvertFileInput::new("/nope", "/out.txt"), &context)
            .await
            .unwrap_err();

        assert!(matches!(err, FileSystemError::NotFound(_)));
        assert_eq!(fs.contents(Path::new("/out.txt")), None);
    }

    #[test]
    fn test_output_path_defaults_to_input() {
        assert_eq!(
            ConvertFileInput::in_place("a.txt").output_path(),
            Path::new("a.txt")
        );
        assert_eq!(
            ConvertFileInput::new("a.txt", "b.txt").output_path(),
            Path::new("b.txt")
        );
    }
}
