//! Generate command report data structures.

use std::path::PathBuf;

use tabula_codegen::GenerateReport;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Directory files were generated into.
    pub output_dir: PathBuf,
    /// Whether files were only previewed.
    pub dry_run: bool,
    /// Number of tables in the schema document.
    pub model_count: usize,
    /// Per-file outcomes.
    pub report: GenerateReport,
}

impl GenerateSummary {
    /// Whether every file was written or previewed.
    pub fn is_success(&self) -> bool {
        self.report.is_success()
    }
}

impl Report for GenerateSummary {
    fn render(&self, out: &mut dyn Output) {
        let report = &self.report;

        if !report.written.is_empty() {
            out.section(&format!("Written ({})", report.written.len()));
            for path in &report.written {
                out.added_item(&path.display().to_string());
            }
            out.newline();
        }

        if !report.previewed.is_empty() {
            out.section(&format!("Previewed ({})", report.previewed.len()));
            for path in &report.previewed {
                out.list_item(&path.display().to_string());
            }
            out.newline();
        }

        for failed in &report.failed {
            out.error(&format!(
                "failed to {} '{}': {}",
                failed.operation,
                failed.path.display(),
                failed.message
            ));
        }

        out.key_value("Models", &self.model_count.to_string());
        out.key_value("Output", &self.output_dir.display().to_string());
        if self.dry_run {
            out.preformatted("Dry run: no files were written");
        }
        if !report.failed.is_empty() {
            out.preformatted(&format!(
                "{} of {} files failed",
                report.failed.len(),
                report.total()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use tabula_codegen::FailedFile;

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let summary = GenerateSummary {
            output_dir: PathBuf::from("src/models"),
            dry_run: false,
            model_count: 1,
            report: GenerateReport {
                written: vec![
                    PathBuf::from("src/models/user.ts"),
                    PathBuf::from("src/models/index.ts"),
                ],
                ..Default::default()
            },
        };

        let mut out = RecordingOutput::default();
        summary.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Written (2):",
                "  + src/models/user.ts",
                "  + src/models/index.ts",
                "",
                "Models: 1",
                "Output: src/models",
            ]
        );
    }

    #[test]
    fn test_render_preview_with_failure() {
        let summary = GenerateSummary {
            output_dir: PathBuf::from("out"),
            dry_run: true,
            model_count: 1,
            report: GenerateReport {
                previewed: vec![PathBuf::from("out/index.ts")],
                failed: vec![FailedFile {
                    path: PathBuf::from("out/user.ts"),
                    operation: "read",
                    message: "permission denied".to_string(),
                }],
                ..Default::default()
            },
        };

        let mut out = RecordingOutput::default();
        summary.render(&mut out);

        assert!(!summary.is_success());
        assert!(out.lines.contains(&"  - out/index.ts".to_string()));
        assert!(
            out.lines
                .contains(&"error: failed to read 'out/user.ts': permission denied".to_string())
        );
        assert!(out.lines.contains(&"Dry run: no files were written".to_string()));
        assert_eq!(out.lines.last().unwrap(), "1 of 2 files failed");
    }
}
