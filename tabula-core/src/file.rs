use std::{
    borrow::Cow,
    io::{self, Write},
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    console::boxed,
    diff::{char_diff, has_changes, render_spans},
};

/// Failure to materialize a single generated file.
#[derive(Debug, Error, Diagnostic)]
pub enum FileError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(tabula::file::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory '{path}'")]
    #[diagnostic(code(tabula::file::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(tabula::file::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render preview of '{path}'")]
    #[diagnostic(code(tabula::file::render))]
    Render {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. }
            | FileError::CreateDir { path, .. }
            | FileError::Write { path, .. }
            | FileError::Render { path, .. } => path,
        }
    }

    /// Short name of the attempted operation.
    pub fn operation(&self) -> &'static str {
        match self {
            FileError::Read { .. } => "read",
            FileError::CreateDir { .. } => "create directory",
            FileError::Write { .. } => "write",
            FileError::Render { .. } => "render",
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| FileError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Result of [`CodeFile::save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content was flushed to the target path
    Written,
    /// Diff was rendered; the file system was not touched
    Previewed,
}

/// One generated file: target path, candidate content, and whether saving it
/// only previews the change.
///
/// A `CodeFile` is built fresh for every generated file and consumed by
/// [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct CodeFile {
    path: PathBuf,
    content: String,
    dry_run: bool,
}

impl CodeFile {
    /// Create a file that is written on save.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            dry_run: false,
        }
    }

    /// Set preview mode. In preview mode `save` never touches the file system.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the candidate content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether `save` previews instead of writing
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Content currently at the target path.
    ///
    /// A missing path yields the candidate content itself, so a first-time
    /// preview reports no changes rather than a whole-file addition.
    pub fn current_content(&self) -> Result<Cow<'_, str>, FileError> {
        if !self.path.exists() {
            return Ok(Cow::Borrowed(&self.content));
        }
        std::fs::read_to_string(&self.path)
            .map(Cow::Owned)
            .map_err(|source| FileError::Read {
                path: self.path.clone(),
                source,
            })
    }

    /// Render the diff between the current and candidate content to stdout.
    pub fn preview(&self) -> Result<(), FileError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.preview_to(&mut out)
    }

    /// Render the diff between the current and candidate content to `out`,
    /// framed by a box naming the target path.
    pub fn preview_to<W: Write>(&self, out: &mut W) -> Result<(), FileError> {
        let current = self.current_content()?;
        let spans = char_diff(&current, &self.content);
        debug!(
            path = %self.path.display(),
            spans = spans.len(),
            changed = has_changes(&spans),
            "previewing file"
        );

        let header = boxed(&[self.path.display().to_string()]);
        writeln!(out, "{header}{}", render_spans(&spans))
            .and_then(|()| out.flush())
            .map_err(|source| FileError::Render {
                path: self.path.clone(),
                source,
            })
    }

    /// Write the content, creating parent directories as needed, or only
    /// preview it when in dry-run mode.
    pub fn save(self) -> Result<SaveOutcome, FileError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.save_to(&mut out)
    }

    /// [`save`](Self::save) with previews rendered to `out`.
    pub fn save_to<W: Write>(self, out: &mut W) -> Result<SaveOutcome, FileError> {
        if self.dry_run {
            self.preview_to(out)?;
            return Ok(SaveOutcome::Previewed);
        }

        write_file(&self.path, &self.content)?;
        info!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(SaveOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn preview_string(file: &CodeFile) -> String {
        let mut buf = Vec::new();
        file.preview_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_save_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.ts");
        fs::write(&path, "original").unwrap();

        let outcome = CodeFile::new(&path, "updated").save().unwrap();

        assert_eq!(outcome, SaveOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_save_creates_missing_parent_and_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("models").join("user.ts");

        let outcome = CodeFile::new(&path, "export class User {}\n")
            .save()
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export class User {}\n");
    }

    #[test]
    fn test_dry_run_save_never_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models").join("user.ts");

        let mut buf = Vec::new();
        let outcome = CodeFile::new(&path, "content")
            .dry_run(true)
            .save_to(&mut buf)
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Previewed);
        assert!(!path.exists());
        assert!(!temp.path().join("models").exists());
    }

    #[test]
    fn test_dry_run_save_leaves_existing_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.ts");
        fs::write(&path, "original").unwrap();

        let mut buf = Vec::new();
        CodeFile::new(&path, "changed")
            .dry_run(true)
            .save_to(&mut buf)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_current_content_falls_back_to_candidate() {
        let temp = TempDir::new().unwrap();
        let file = CodeFile::new(temp.path().join("missing.ts"), "candidate");

        assert_eq!(file.current_content().unwrap(), "candidate");
    }

    #[test]
    fn test_preview_of_missing_file_reports_no_additions() {
        colored::control::set_override(true);
        let temp = TempDir::new().unwrap();
        let file = CodeFile::new(temp.path().join("user.ts"), "export class User {}\n");

        let out = preview_string(&file);

        assert!(out.contains("user.ts"));
        assert!(out.contains("\u{1b}[90mexport class User {}\n\u{1b}[0m"));
        assert!(!out.contains("\u{1b}[32m"));
        assert!(!out.contains("\u{1b}[31m"));
    }

    #[test]
    fn test_preview_marks_changes_against_disk() {
        colored::control::set_override(true);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.ts");
        fs::write(&path, "id: number").unwrap();

        let out = preview_string(&CodeFile::new(&path, "id: string"));

        assert!(out.starts_with("┌"));
        assert!(out.contains("\u{1b}[32m"));
        assert!(out.contains("\u{1b}[31m"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "id: number");
    }

    #[test]
    fn test_read_error_carries_path_and_operation() {
        let temp = TempDir::new().unwrap();
        // A directory exists at the path but cannot be read as text
        let file = CodeFile::new(temp.path(), "content");

        let err = file.current_content().unwrap_err();

        assert_eq!(err.operation(), "read");
        assert_eq!(err.path(), temp.path());
    }

    #[test]
    fn test_write_error_carries_path_and_operation() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = CodeFile::new(blocker.join("user.ts"), "content")
            .save()
            .unwrap_err();

        assert_eq!(err.operation(), "create directory");
        assert_eq!(err.path(), blocker.as_path());
    }
}
