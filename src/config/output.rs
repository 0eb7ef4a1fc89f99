use super::traits::ConfigSection;
use crate::error::TicketError;
use crate::types::ExamMetadata;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub directory: PathBuf,
    /// Suffix the output directory with the current local time.
    pub timestamped: bool,
    /// Run pdflatex on LaTeX output.
    pub compile_pdf: bool,
    pub pdflatex: String,
    pub discipline: String,
    pub specialty: String,
    pub group: String,
    pub teacher: String,
    pub approver: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Docx,
    Latex,
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "docx" | "word" => Ok(OutputFormat::Docx),
            "latex" | "tex" | "pdf" => Ok(OutputFormat::Latex),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TicketError::Configuration(format!(
                "Unknown output format '{}'",
                other
            ))),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Latex,
            directory: PathBuf::from("tickets_output"),
            timestamped: true,
            compile_pdf: false,
            pdflatex: "pdflatex".to_string(),
            discipline: "Operating Systems".to_string(),
            specialty: "02.03.02".to_string(),
            group: String::new(),
            teacher: String::new(),
            approver: String::new(),
        }
    }
}

impl OutputConfig {
    pub fn metadata(&self) -> ExamMetadata {
        ExamMetadata {
            discipline: self.discipline.clone(),
            specialty: self.specialty.clone(),
            group: self.group.clone(),
            teacher: self.teacher.clone(),
            approver: self.approver.clone(),
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), TicketError> {
        if self.directory.as_os_str().is_empty() {
            return Err(TicketError::Configuration(
                "Output directory must not be empty".to_string()
            ));
        }
        if self.compile_pdf && self.format != OutputFormat::Latex {
            return Err(TicketError::Configuration(
                "PDF compilation requires the latex output format".to_string()
            ));
        }
        Ok(())
    }
}
