use super::TicketRenderer;
use crate::config::output::OutputConfig;
use crate::error::{Result, TicketError};
use crate::types::TicketSet;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Files produced by one [`OutputWriter::write`] call.
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    pub directory: PathBuf,
    pub document: PathBuf,
    pub pdf: Option<PathBuf>,
}

pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// `directory`, suffixed with `_%Y-%m-%d_%H-%M-%S` when timestamping is on.
    pub fn resolve_directory(&self, now: DateTime<Local>) -> PathBuf {
        if !self.config.timestamped {
            return self.config.directory.clone();
        }
        let mut name = self.config.directory.as_os_str().to_os_string();
        name.push(format!("_{}", now.format("%Y-%m-%d_%H-%M-%S")));
        PathBuf::from(name)
    }

    pub fn write(&self, tickets: &TicketSet, renderer: &dyn TicketRenderer) -> Result<WrittenArtifact> {
        let directory = self.resolve_directory(Local::now());
        std::fs::create_dir_all(&directory)?;

        let rendered = renderer.render(tickets, &self.config.metadata())?;
        let document = directory.join(renderer.file_name());
        std::fs::write(&document, rendered)?;
        log::info!("Wrote {} ticket(s) to {}", tickets.len(), document.display());

        let pdf = if self.config.compile_pdf {
            Some(self.compile_pdf(&document, &directory)?)
        } else {
            None
        };

        Ok(WrittenArtifact {
            directory,
            document,
            pdf,
        })
    }

    /// Runs pdflatex; the `.tex` source stays in place whatever the outcome.
    fn compile_pdf(&self, tex_file: &Path, directory: &Path) -> Result<PathBuf> {
        log::info!("Compiling {} with {}", tex_file.display(), self.config.pdflatex);
        let status = Command::new(&self.config.pdflatex)
            .arg("-interaction=nonstopmode")
            .arg("-output-directory")
            .arg(directory)
            .arg(tex_file)
            .status()
            .map_err(|e| {
                TicketError::Render(format!("Failed to start {}: {}", self.config.pdflatex, e))
            })?;

        if !status.success() {
            return Err(TicketError::Render(format!(
                "{} exited with {}; the LaTeX source is kept at {}",
                self.config.pdflatex,
                status,
                tex_file.display()
            )));
        }
        Ok(tex_file.with_extension("pdf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamped_directory() {
        let writer = OutputWriter::new(OutputConfig::default());
        let now = Local.with_ymd_and_hms(2024, 6, 1, 9, 5, 3).unwrap();
        assert_eq!(
            writer.resolve_directory(now),
            PathBuf::from("tickets_output_2024-06-01_09-05-03")
        );

        let plain = OutputWriter::new(OutputConfig {
            timestamped: false,
            ..Default::default()
        });
        assert_eq!(plain.resolve_directory(now), PathBuf::from("tickets_output"));
    }
}
