mod docx;
mod json;
mod latex;
mod text;
mod writer;

pub use docx::DocxRenderer;
pub use json::JsonRenderer;
pub use latex::{escape_latex, LatexRenderer};
pub use text::PlainTextRenderer;
pub use writer::{OutputWriter, WrittenArtifact};

use crate::config::output::OutputFormat;
use crate::error::Result;
use crate::types::{ExamMetadata, TicketSet};

/// Turns a ticket set into a document.
pub trait TicketRenderer {
    /// Encoded file contents; text formats are UTF-8.
    fn render(&self, tickets: &TicketSet, meta: &ExamMetadata) -> Result<Vec<u8>>;

    /// Name of the file the rendered document is written to.
    fn file_name(&self) -> &'static str;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn TicketRenderer + Send + Sync> {
    match format {
        OutputFormat::Docx => Box::new(DocxRenderer),
        OutputFormat::Latex => Box::new(LatexRenderer),
        OutputFormat::Text => Box::new(PlainTextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
