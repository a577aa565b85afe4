//! Paginated text documents
//!
//! A [`ReportDocument`] is a list of fixed-height pages. Rendering joins the
//! pages with form feeds so printers and pagers break them correctly.

use std::io::Write;
use std::path::Path;

use crate::display::line_count;
use crate::error::{FinanceError, FinanceResult};
use crate::storage::write_text_atomic;

/// Usable lines per page
pub const PAGE_LINES: usize = 60;

/// Separator placed between pages
pub const PAGE_BREAK: &str = "\u{000C}\n";

/// One page of a report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A document made of pages
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pages: Vec<Page>,
}

impl Default for ReportDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportDocument {
    /// A document with one empty page
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Lines still free on the current page
    pub fn remaining_lines(&self) -> usize {
        let used = self.pages.last().map_or(0, |p| p.lines.len());
        PAGE_LINES.saturating_sub(used)
    }

    /// Start a new page
    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    /// Append text (possibly several lines) to the current page
    pub fn push_text(&mut self, text: &str) {
        let page = self.current();
        page.lines.extend(text.lines().map(str::to_string));
    }

    pub fn push_blank(&mut self) {
        self.current().lines.push(String::new());
    }

    /// Append a titled block, starting a new page first when it does not fit
    /// on the current one
    pub fn push_section(&mut self, heading: &str, body: &str) {
        let current_empty = self.pages.last().map_or(true, Page::is_empty);
        // Heading, underline and body, plus the separator on a non-empty page
        let needed = 2 + line_count(body) + usize::from(!current_empty);
        if needed > self.remaining_lines() && !current_empty {
            self.add_page();
        } else if !current_empty {
            self.push_blank();
        }
        self.push_text(heading);
        self.push_text(&"-".repeat(heading.chars().count()));
        self.push_text(body);
    }

    /// Render all pages
    pub fn render(&self) -> String {
        self.pages
            .iter()
            .map(|p| {
                let mut text = p.lines.join("\n");
                text.push('\n');
                text
            })
            .collect::<Vec<_>>()
            .join(PAGE_BREAK)
    }

    /// Write the rendered document to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        writer
            .write_all(self.render().as_bytes())
            .map_err(|e| FinanceError::Export(e.to_string()))
    }

    /// Save the rendered document to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> FinanceResult<()> {
        write_text_atomic(path, &self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sections_flow_onto_new_page() {
        let mut doc = ReportDocument::new();
        doc.push_section("First", &"row\n".repeat(40));
        assert_eq!(doc.page_count(), 1);

        // 40 + 2 used; another 30-line block cannot fit
        doc.push_section("Second", &"row\n".repeat(30));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages()[1].lines()[0], "Second");
    }

    #[test]
    fn test_section_counts_separator_line() {
        let mut doc = ReportDocument::new();
        doc.push_section("First", &"row\n".repeat(40));
        assert_eq!(doc.remaining_lines(), 18);

        // Blank + heading + underline + 15 rows fills the page exactly
        doc.push_section("Second", &"row\n".repeat(15));
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages()[0].lines().len(), PAGE_LINES);

        let mut doc = ReportDocument::new();
        doc.push_section("First", &"row\n".repeat(40));
        doc.push_section("Second", &"row\n".repeat(16));
        assert_eq!(doc.page_count(), 2);
        assert!(doc.pages().iter().all(|p| p.lines().len() <= PAGE_LINES));
        assert_eq!(doc.pages()[1].lines()[0], "Second");
    }

    #[test]
    fn test_render_separates_pages() {
        let mut doc = ReportDocument::new();
        doc.push_text("one");
        doc.add_page();
        doc.push_text("two");
        assert_eq!(doc.render(), "one\n\u{000C}\ntwo\n");
    }

    #[test]
    fn test_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("r.txt");

        let mut doc = ReportDocument::new();
        doc.push_text("hello");
        doc.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
