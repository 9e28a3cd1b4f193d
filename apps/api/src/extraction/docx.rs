use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTag, StructuredDataTagChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use super::ExtractionError;

/// Whole-document text: one line per paragraph, table cells included in reading order.
/// Runs nested in hyperlinks, tracked insertions and content controls count as text.
pub(super) fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(data).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(&mut text, p),
            DocumentChild::Table(t) => push_table(&mut text, t),
            DocumentChild::StructuredDataTag(sdt) => push_content_control(&mut text, sdt),
            _ => {}
        }
    }
    Ok(text)
}

fn push_paragraph(out: &mut String, paragraph: &Paragraph) {
    push_inline(out, &paragraph.children);
    out.push('\n');
}

fn push_inline(out: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(out, run),
            ParagraphChild::Hyperlink(link) => push_inline(out, &link.children),
            ParagraphChild::Insert(insert) => {
                for inserted in &insert.children {
                    if let InsertChild::Run(run) = inserted {
                        push_run(out, run);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(sdt) => push_content_control(out, sdt),
            _ => {}
        }
    }
}

fn push_run(out: &mut String, run: &Run) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}

fn push_content_control(out: &mut String, sdt: &StructuredDataTag) {
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(out, run),
            StructuredDataTagChild::Paragraph(p) => push_paragraph(out, p),
            StructuredDataTagChild::Table(t) => push_table(out, t),
            StructuredDataTagChild::StructuredDataTag(inner) => push_content_control(out, inner),
            _ => {}
        }
    }
}

fn push_table(out: &mut String, table: &Table) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph(out, p),
                    TableCellContent::Table(t) => push_table(out, t),
                    TableCellContent::StructuredDataTag(sdt) => push_content_control(out, sdt),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Insert, TableCell, TableRow};
    use std::io::Cursor;

    fn pack(docx: Docx) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let data = pack(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
                .add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text("Go, "))
                        .add_run(Run::new().add_text("Kubernetes")),
                ),
        );

        let text = extract(&data).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Jane Doe");
        assert!(lines[1].starts_with("Go,"));
        assert!(lines[1].ends_with("Kubernetes"));
    }

    #[test]
    fn test_table_cells_are_included() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Skills"))),
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Rust"))),
        ])]);
        let data = pack(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Profile")))
                .add_table(table),
        );

        let text = extract(&data).unwrap();
        let profile = text.find("Profile").unwrap();
        let skills = text.find("Skills").unwrap();
        let rust = text.find("Rust").unwrap();
        assert!(profile < skills && skills < rust);
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let data = pack(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Contact: "))
                    .add_hyperlink(
                        Hyperlink::new("https://github.com/jane", HyperlinkType::External)
                            .add_run(Run::new().add_text("github.com/jane")),
                    ),
            ),
        );

        let text = extract(&data).unwrap();
        assert!(text.contains("github.com/jane"), "extracted {text:?}");
        assert!(text.find("Contact:").unwrap() < text.find("github.com/jane").unwrap());
    }

    #[test]
    fn test_tracked_insertion_text_is_kept() {
        let data = pack(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Skills: "))
                    .add_insert(Insert::new(Run::new().add_text("Terraform"))),
            ),
        );

        let text = extract(&data).unwrap();
        assert!(text.contains("Terraform"), "extracted {text:?}");
    }

    #[test]
    fn test_content_control_paragraphs_are_kept() {
        let data = pack(
            Docx::new()
                .add_structured_data_tag(StructuredDataTag::new().add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text("Jane Doe, Staff Engineer")),
                ))
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Experience"))),
        );

        let text = extract(&data).unwrap();
        let name = text.find("Jane Doe, Staff Engineer").expect("content control text");
        assert!(name < text.find("Experience").unwrap());
    }

    #[test]
    fn test_corrupt_docx_is_an_error() {
        let err = extract(b"PK not really a zip").unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }
}
