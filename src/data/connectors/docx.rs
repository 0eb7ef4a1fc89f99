use super::types::QuestionSource;
use crate::error::{Result, TicketError};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// Word document with one question per non-empty paragraph.
///
/// Paragraphs inside tables count as well, in document order.
pub struct DocxFileSource {
    path: PathBuf,
}

impl DocxFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads `word/document.xml` out of the archive and returns its paragraph texts.
    pub fn parse(bytes: &[u8]) -> Result<Vec<String>> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            TicketError::QuestionSource(format!("Failed to read DOCX as ZIP: {}", e))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| TicketError::QuestionSource(format!("Missing word/document.xml: {}", e)))?
            .read_to_string(&mut xml)?;

        Ok(paragraph_texts(&xml))
    }
}

impl QuestionSource for DocxFileSource {
    fn describe(&self) -> String {
        format!("DOCX file {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<String>> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            TicketError::QuestionSource(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Self::parse(&bytes)
    }
}

/// Collects the trimmed text of every `<w:p>` element, skipping empty ones.
fn paragraph_texts(xml: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut rest = xml;

    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            break;
        };
        let tag = &after[..close];
        rest = &after[close + 1..];

        let self_closing = tag.ends_with('/');
        let name = tag
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("");

        match name {
            "w:p" if !self_closing => current = Some(String::new()),
            "/w:p" => {
                if let Some(text) = current.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        paragraphs.push(text.to_string());
                    }
                }
            }
            "w:t" if !self_closing => {
                let end = rest.find('<').unwrap_or(rest.len());
                if let Some(text) = current.as_mut() {
                    text.push_str(&decode_entities(&rest[..end]));
                }
                rest = &rest[end..];
            }
            "w:tab" => {
                if let Some(text) = current.as_mut() {
                    text.push('\t');
                }
            }
            "w:br" | "w:cr" => {
                if let Some(text) = current.as_mut() {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }

    paragraphs
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:pPr><w:jc w:val="left"/></w:pPr><w:r><w:t xml:space="preserve">  What is a </w:t></w:r><w:proofErr w:type="spellStart"/><w:r><w:t>mutex?</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t xml:space="preserve">   </w:t></w:r></w:p>
<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Compare &lt;fork&gt; &amp; exec</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
<w:p><w:r><w:t>Define</w:t><w:tab/><w:t>paging</w:t></w:r></w:p>
<w:sectPr/></w:body></w:document>"#;

    fn archive(document_xml: &str) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        assert_eq!(
            paragraph_texts(DOCUMENT),
            vec!["What is a mutex?", "Compare <fork> & exec", "Define\tpaging"]
        );
    }

    #[test]
    fn test_parse_archive() {
        let questions = DocxFileSource::parse(&archive(DOCUMENT)).unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0], "What is a mutex?");
    }

    #[test]
    fn test_rejects_non_zip_content() {
        assert!(matches!(
            DocxFileSource::parse(b"What is a thread?\nDefine deadlock\n"),
            Err(TicketError::QuestionSource(_))
        ));
    }

    #[test]
    fn test_missing_document_part() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<w:styles/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        assert!(matches!(
            DocxFileSource::parse(&bytes),
            Err(TicketError::QuestionSource(_))
        ));
    }
}
