//! Page text sources.
//!
//! Text extraction is done by other tools; this module only obtains one string
//! per page and joins pages with the profile's page-break marker.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::IngestError;

/// Page separator used by `pdftotext` output.
pub const FORM_FEED: char = '\x0c';

pub trait PageSource: Send + Sync {
    fn pages(&self, path: &Path) -> Result<Vec<String>, IngestError>;
}

/// Extracts page text from a PDF with `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageSource;

impl PageSource for PdfPageSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, IngestError> {
        pdf_extract::extract_text_by_pages(path).map_err(|e| IngestError::Pdf {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Reads already-extracted text; pages are separated by form feeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPageSource;

impl PageSource for TextPageSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, IngestError> {
        let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(text.split(FORM_FEED).map(str::to_string).collect())
    }
}

/// `.pdf` files go through PDF extraction, everything else is read as text.
pub fn source_for_path(path: &Path) -> Box<dyn PageSource> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Box::new(PdfPageSource)
    } else {
        Box::new(TextPageSource)
    }
}

/// Non-blank pages of `path`. A document without any is an error.
pub fn load_pages(source: &dyn PageSource, path: &Path) -> Result<Vec<String>, IngestError> {
    let pages: Vec<String> = source
        .pages(path)?
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();
    if pages.is_empty() {
        return Err(IngestError::NoPages {
            path: path.display().to_string(),
        });
    }
    debug!(path = %path.display(), pages = pages.len(), "loaded page text");
    Ok(pages)
}

/// Concatenate pages, following each with a line holding `marker`.
pub fn join_pages<S: AsRef<str>>(pages: &[S], marker: &str) -> String {
    let mut text = String::new();
    for page in pages {
        let page: &str = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
        text.push_str(marker);
        text.push('\n');
    }
    text
}
