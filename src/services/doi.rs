// src/services/doi.rs

//! DOI detection in downloaded documents.
//!
//! A DOI sitting in the header or footer of a paper is found on the
//! first page or its overflow, so only the leading pages are rendered
//! to text before the pattern search.

use std::path::Path;

use lopdf::Document;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pages rendered to text when searching for a DOI.
const SCAN_PAGES: usize = 2;

/// DOI pattern per the Crossref display guidelines, with a deliberately
/// permissive suffix class; spurious DOI-like strings in boilerplate
/// text will match.
static DOI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b10\.\d{4,9}/[-._;()/:A-Z0-9]+\b").expect("DOI pattern is valid")
});

/// Find the first DOI-shaped token in a block of text, lowercased.
pub fn find_doi(text: &str) -> Option<String> {
    DOI_REGEX.find(text).map(|m| m.as_str().to_lowercase())
}

/// Extract a DOI from the leading pages of a PDF file.
///
/// Any parse or extraction failure yields `None`: a document that
/// cannot be read is treated the same as one without a DOI.
pub fn extract_doi(path: &Path) -> Option<String> {
    let text = leading_text(path, SCAN_PAGES).ok()?;
    find_doi(&text)
}

/// Plain text of at most `max_pages` leading pages.
fn leading_text(path: &Path, max_pages: usize) -> Result<String, lopdf::Error> {
    let document = Document::load(path)?;
    let page_numbers: Vec<u32> = document
        .get_pages()
        .keys()
        .copied()
        .take(max_pages)
        .collect();
    if page_numbers.is_empty() {
        return Ok(String::new());
    }
    document.extract_text(&page_numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    /// Build a minimal PDF with one page per entry of `page_texts`.
    fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn find_doi_first_match_wins_and_is_lowercased() {
        let text = "See DOI:10.1145/ABC.XYZ and also 10.1000/other99";
        assert_eq!(find_doi(text), Some("10.1145/abc.xyz".to_string()));
    }

    #[test]
    fn find_doi_drops_trailing_sentence_period() {
        let text = "available at 10.1000/xyz123.";
        assert_eq!(find_doi(text), Some("10.1000/xyz123".to_string()));
    }

    #[test]
    fn find_doi_rejects_short_registrant() {
        assert_eq!(find_doi("10.99/tooshort"), None);
        assert_eq!(find_doi("plain text without identifiers"), None);
    }

    #[test]
    fn extracts_doi_from_first_page() {
        let bytes = pdf_with_pages(&["A Study of Things. doi:10.1000/xyz123"]);
        let file = write_temp(&bytes);
        assert_eq!(extract_doi(file.path()), Some("10.1000/xyz123".to_string()));
    }

    #[test]
    fn extracts_doi_from_second_page() {
        let bytes = pdf_with_pages(&["title page", "DOI: 10.5555/abc.def"]);
        let file = write_temp(&bytes);
        assert_eq!(extract_doi(file.path()), Some("10.5555/abc.def".to_string()));
    }

    #[test]
    fn ignores_doi_beyond_second_page() {
        let bytes = pdf_with_pages(&["page one", "page two", "DOI: 10.5555/too.late"]);
        let file = write_temp(&bytes);
        assert_eq!(extract_doi(file.path()), None);
    }

    #[test]
    fn corrupt_pdf_yields_none() {
        let file = write_temp(b"this is not a pdf at all");
        assert_eq!(extract_doi(file.path()), None);
    }

    #[test]
    fn missing_file_yields_none() {
        assert_eq!(extract_doi(Path::new("/nonexistent/file.pdf")), None);
    }
}
