use super::TicketRenderer;
use crate::error::{Result, TicketError};
use crate::types::{ExamMetadata, TicketSet};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// WordprocessingML package: one page per ticket, Times New Roman 12pt, 2cm margins.
pub struct DocxRenderer;

const RULE: &str = "______________";
const BLANK_ITEM: &str = "______________________________________________________________";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:docDefaults><w:rPrDefault><w:rPr>
<w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman" w:cs="Times New Roman"/>
<w:sz w:val="24"/><w:szCs w:val="24"/>
</w:rPr></w:rPrDefault></w:docDefaults>
<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
</w:styles>"#;

/// A4 with 2cm (1134 twip) margins.
const SECTION: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1134" w:right="1134" w:bottom="1134" w:left="1134" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#;

const CELL_BORDERS: &str = r#"<w:tblBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="000000"/><w:left w:val="single" w:sz="4" w:space="0" w:color="000000"/><w:bottom w:val="single" w:sz="4" w:space="0" w:color="000000"/><w:right w:val="single" w:sz="4" w:space="0" w:color="000000"/><w:insideH w:val="single" w:sz="4" w:space="0" w:color="000000"/><w:insideV w:val="single" w:sz="4" w:space="0" w:color="000000"/></w:tblBorders>"#;

/// Escapes text for use inside XML element content and attribute values.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn or_blank(value: &str) -> &str {
    if value.trim().is_empty() {
        RULE
    } else {
        value
    }
}

fn paragraph(text: &str) -> String {
    if text.is_empty() {
        return "<w:p/>".to_string();
    }
    format!(
        r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape_xml(text)
    )
}

fn centered_paragraph(text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape_xml(text)
    )
}

/// 6cm (3402 twip) wide cell, one centered paragraph per line.
fn cell(lines: &[String]) -> String {
    let body: String = lines.iter().map(|line| centered_paragraph(line)).collect();
    format!(r#"<w:tc><w:tcPr><w:tcW w:w="3402" w:type="dxa"/></w:tcPr>{}</w:tc>"#, body)
}

fn header_table(number: usize, meta: &ExamMetadata) -> String {
    let committee = [
        "Reviewed by the subject committee".to_string(),
        "Minutes No. ___ of ______".to_string(),
        "__________________ Full name".to_string(),
        "committee chair".to_string(),
    ];
    let ticket = [
        format!("Examination ticket No. {}", number),
        format!("Discipline: {}", meta.discipline),
        format!("Specialty: {}", meta.specialty),
        format!("Group: {}", or_blank(&meta.group)),
    ];
    let approval = [
        "APPROVED".to_string(),
        "Deputy director for academic affairs".to_string(),
        format!("____________ {}", or_blank(&meta.approver)),
        "«____» ___________ 20__".to_string(),
    ];

    format!(
        r#"<w:tbl><w:tblPr><w:tblW w:w="10206" w:type="dxa"/>{}</w:tblPr><w:tblGrid><w:gridCol w:w="3402"/><w:gridCol w:w="3402"/><w:gridCol w:w="3402"/></w:tblGrid><w:tr>{}{}{}</w:tr></w:tbl>"#,
        CELL_BORDERS,
        cell(&committee),
        cell(&ticket),
        cell(&approval)
    )
}

fn page(number: usize, questions: &[String], meta: &ExamMetadata) -> String {
    let mut body = header_table(number, meta);
    body.push_str(&paragraph(""));
    for (n, question) in questions.iter().enumerate() {
        body.push_str(&paragraph(&format!("{}. {}", n + 1, question)));
    }
    body.push_str(&paragraph(&format!("{}.* {}", questions.len() + 1, BLANK_ITEM)));
    body.push_str(&paragraph(""));
    body.push_str(&paragraph(&format!(
        "Teacher ___________________ {}",
        or_blank(&meta.teacher)
    )));
    body.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
    body
}

fn document_xml(tickets: &TicketSet, meta: &ExamMetadata) -> String {
    let pages: String = tickets
        .tickets
        .iter()
        .enumerate()
        .map(|(i, questions)| page(i + 1, questions, meta))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}{}</w:body></w:document>"#,
        pages, SECTION
    )
}

fn archive_error(e: zip::result::ZipError) -> TicketError {
    TicketError::Render(format!("Failed to build DOCX archive: {}", e))
}

impl TicketRenderer for DocxRenderer {
    fn render(&self, tickets: &TicketSet, meta: &ExamMetadata) -> Result<Vec<u8>> {
        let document = document_xml(tickets, meta);
        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS),
            ("word/styles.xml", STYLES),
            ("word/document.xml", document.as_str()),
        ];

        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            zip.start_file(name, options).map_err(archive_error)?;
            zip.write_all(content.as_bytes())?;
        }
        Ok(zip.finish().map_err(archive_error)?.into_inner())
    }

    fn file_name(&self) -> &'static str {
        "tickets.docx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample() -> (TicketSet, ExamMetadata) {
        let tickets = TicketSet {
            tickets: vec![
                vec!["What is RAM?".to_string(), "Compare <fork> & exec".to_string()],
                vec!["What is a bus?".to_string(), "Explain DMA".to_string()],
            ],
            indices: vec![vec![0, 1], vec![2, 3]],
            fitness: 1.0,
            seed: 1,
        };
        let meta = ExamMetadata {
            discipline: "Operating Systems".to_string(),
            teacher: "I. Petrova".to_string(),
            ..Default::default()
        };
        (tickets, meta)
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts() {
        let (tickets, meta) = sample();
        let bytes = DocxRenderer.render(&tickets, &meta).unwrap();

        assert!(read_part(&bytes, "[Content_Types].xml").contains("/word/document.xml"));
        assert!(read_part(&bytes, "_rels/.rels").contains(r#"Target="word/document.xml""#));
        assert!(read_part(&bytes, "word/styles.xml").contains("Times New Roman"));
    }

    #[test]
    fn test_document_layout() {
        let (tickets, meta) = sample();
        let xml = read_part(&DocxRenderer.render(&tickets, &meta).unwrap(), "word/document.xml");

        assert_eq!(xml.matches("<w:tbl>").count(), 2);
        assert_eq!(xml.matches(r#"<w:br w:type="page"/>"#).count(), 2);
        assert!(xml.contains("Examination ticket No. 2"));
        assert!(xml.contains("2. Compare &lt;fork&gt; &amp; exec"));
        assert!(xml.contains("3.* ____"));
        assert!(xml.contains("Teacher ___________________ I. Petrova"));
        assert!(xml.contains("Group: ______________"));
    }
}
