//! Substitute file use case.

use std::path::Path;

use envsubst_domain::ResolutionContext;
use tracing::debug;

use crate::ports::{FileSystem, FileSystemError};
use crate::substitution::{SubstitutionResult, Substitutor};

/// Use case for reading a file and substituting its references.
pub struct SubstituteFile<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> SubstituteFile<F> {
    /// Creates a new `SubstituteFile` use case.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Reads `path` as UTF-8 and returns the substituted text.
    ///
    /// # Errors
    /// - Returns error if the file does not exist or cannot be read
    /// - Returns error if the file is not valid UTF-8
    pub async fn execute(
        &self,
        path: &Path,
        context: &ResolutionContext<'_>,
    ) -> Result<String, FileSystemError> {
        Ok(self.execute_detailed(path, context).await?.resolved)
    }

    /// Like [`execute`](Self::execute), but keeps the resolution details.
    ///
    /// # Errors
    /// - Returns error if the file does not exist or cannot be read
    /// - Returns error if the file is not valid UTF-8
    pub async fn execute_detailed(
        &self,
        path: &Path,
        context: &ResolutionContext<'_>,
    ) -> Result<SubstitutionResult, FileSystemError> {
        let text = self.fs.read_file_string(path).await?;
        debug!(path = %path.display(), bytes = text.len(), "read template");

        let result = Substitutor::new(*context).resolve(&text);
        debug!(
            path = %path.display(),
            resolved = result.resolved_count(),
            unresolved = result.unresolved_count(),
            defaulted = result.defaulted.len(),
            "substituted template"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryFileSystem;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_substitute_file() {
        let fs = MemoryFileSystem::with_file("/t/app.conf", "host=$HOST\nport=${PORT:-8080}\n");
        let env = HashMap::from([("HOST".to_string(), "localhost".to_string())]);
        let context = ResolutionContext::from_env(&env);

        let text = SubstituteFile::new(fs)
            .execute(Path::new("/t/app.conf"), &context)
            .await
            .unwrap();

        assert_eq!(text, "host=localhost\nport=8080\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let fs = MemoryFileSystem::default();
        let context = ResolutionContext::empty();

        let err = SubstituteFile::new(fs)
            .execute(Path::new("/missing"), &context)
            .await
            .unwrap_err();

        assert!(matches!(err, FileSystemError::NotFound(p) if p == Path::new("/missing")));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_reported() {
        let fs = MemoryFileSystem::with_file("/bin.dat", vec![0xff, 0xfe, b'$']);
        let context = ResolutionContext::empty();

        let err = SubstituteFile::new(fs)
            .execute(Path::new("/bin.dat"), &context)
            .await
            .unwrap_err();

        assert!(matches!(err, FileSystemError::InvalidUtf8(_)));
    }

    #[tokio::test]
    async fn test_execute_detailed_reports_unresolved() {
        let fs = MemoryFileSystem::with_file("/t.txt", "$A ${B}");
        let context = ResolutionContext::empty();

        let result = SubstituteFile::new(fs)
            .execute_detailed(Path::new("/t.txt"), &context)
            .await
            .unwrap();

        assert_eq!(result.resolved, " ");
        assert_eq!(result.unresolved, vec!["A", "B"]);
    }
}
