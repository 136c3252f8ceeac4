//! Pagination engine.
//!
//! Composes positioned text draws onto fixed A4 pages. Coordinates are in
//! millimeters with the PDF convention (origin at the bottom-left corner);
//! the composer itself tracks a top-down cursor and converts when a draw is
//! recorded. Page breaks are soft: a break happens whenever the next line
//! would cross the bottom margin, with no attempt to keep a heading
//! together with its body. Every finished page gets a centered page-number
//! footer as an explicit step of the pagination loop.
//!
//! Line wrapping is by column count. Sanitized text is printable ASCII, so
//! a fixed average glyph width per font size is close enough to the metric
//! truth for body text.

use thiserror::Error;

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
pub const MARGIN_MM: f64 = 15.0;
pub const LINE_HEIGHT_MM: f64 = 6.0;

pub const TITLE_SIZE: f64 = 20.0;
pub const TITLE_LINE_HEIGHT_MM: f64 = 15.0;
pub const HEADING_SIZE: f64 = 14.0;
pub const SUBHEADING_SIZE: f64 = 12.0;
pub const BODY_SIZE: f64 = 10.0;
pub const FOOTER_SIZE: f64 = 8.0;
pub const BULLET_INDENT_MM: f64 = 5.0;

const FOOTER_BASELINE_MM: f64 = 10.0;
const PT_TO_MM: f64 = 0.352_778;
/// Average Helvetica glyph advance as a fraction of the em size.
const AVG_GLYPH_EM: f64 = 0.5;

/// Layout failures. Recovered per block by the renderer, never fatal.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("no usable column width at {indent}mm indent")]
    NoUsableWidth { indent: f64 },
}

/// Font weight/slant for a draw; resolved to a concrete built-in font by
/// the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// One positioned piece of text. `x`/`y` are millimeters from the
/// bottom-left page corner, `size` is in points.
#[derive(Debug, Clone)]
pub struct TextDraw {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub style: FontStyle,
    pub text: String,
}

/// One fixed-size page: content draws plus exactly one footer draw.
#[derive(Debug, Clone)]
pub struct Page {
    pub draws: Vec<TextDraw>,
    pub footer: TextDraw,
}

/// The in-memory paginated document handed to the encoder.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub pages: Vec<Page>,
}

fn glyph_width_mm(size_pt: f64) -> f64 {
    size_pt * AVG_GLYPH_EM * PT_TO_MM
}

/// Columns that fit between the margins at the given indent.
pub fn max_columns(size_pt: f64, indent_mm: f64) -> Result<usize, LayoutError> {
    let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - indent_mm;
    let columns = (usable / glyph_width_mm(size_pt)).floor();
    if columns < 1.0 {
        return Err(LayoutError::NoUsableWidth { indent: indent_mm });
    }
    Ok(columns as usize)
}

/// Greedy word wrap at a column limit. Words wider than a full line are
/// hard-split. All interior whitespace (including newlines) separates words.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    fn push_word(lines: &mut Vec<String>, current: &mut String, word: &str, columns: usize) {
        let sep = usize::from(!current.is_empty());
        if !current.is_empty() && current.chars().count() + sep + word.chars().count() > columns {
            lines.push(std::mem::take(current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if word.chars().count() <= columns {
            push_word(&mut lines, &mut current, word, columns);
        } else {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(columns) {
                let piece: String = chunk.iter().collect();
                push_word(&mut lines, &mut current, &piece, columns);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn footer_draw(page_number: usize) -> TextDraw {
    let text = format!("Page {page_number}");
    let width = text.chars().count() as f64 * glyph_width_mm(FOOTER_SIZE);
    TextDraw {
        x: (PAGE_WIDTH_MM - width) / 2.0,
        y: FOOTER_BASELINE_MM,
        size: FOOTER_SIZE,
        style: FontStyle::Italic,
        text,
    }
}

/// Cursor-based page composer.
pub struct Composer {
    pages: Vec<Page>,
    draws: Vec<TextDraw>,
    /// Distance from the top edge to the next line's top, in mm.
    y: f64,
}

impl Composer {
    pub fn new() -> Self {
        Self { pages: Vec::new(), draws: Vec::new(), y: MARGIN_MM }
    }

    /// Fixed vertical gap. Never breaks a page on its own; the following
    /// line does.
    pub fn gap(&mut self, mm: f64) {
        self.y += mm;
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y + height > PAGE_HEIGHT_MM - MARGIN_MM {
            self.finish_page();
        }
    }

    /// Emit one line of text at the default line height.
    pub fn line(&mut self, text: &str, size: f64, style: FontStyle, indent: f64) {
        self.line_with_height(text, size, style, indent, LINE_HEIGHT_MM);
    }

    /// Emit one line of text on a cell of the given height.
    pub fn line_with_height(
        &mut self,
        text: &str,
        size: f64,
        style: FontStyle,
        indent: f64,
        height: f64,
    ) {
        self.ensure_room(height);
        self.y += height;
        self.draws.push(TextDraw {
            x: MARGIN_MM + indent,
            y: PAGE_HEIGHT_MM - self.y,
            size,
            style,
            text: text.to_string(),
        });
    }

    /// Emit a bullet line: a fixed-width `-` marker plus the line text
    /// indented past it, sharing one baseline.
    pub fn bullet_line(&mut self, text: &str, size: f64) {
        self.ensure_room(LINE_HEIGHT_MM);
        self.y += LINE_HEIGHT_MM;
        let baseline = PAGE_HEIGHT_MM - self.y;
        self.draws.push(TextDraw {
            x: MARGIN_MM,
            y: baseline,
            size,
            style: FontStyle::Regular,
            text: "-".to_string(),
        });
        self.draws.push(TextDraw {
            x: MARGIN_MM + BULLET_INDENT_MM,
            y: baseline,
            size,
            style: FontStyle::Regular,
            text: text.to_string(),
        });
    }

    fn finish_page(&mut self) {
        let number = self.pages.len() + 1;
        let draws = std::mem::take(&mut self.draws);
        self.pages.push(Page { draws, footer: footer_draw(number) });
        self.y = MARGIN_MM;
    }

    /// Close the current page and hand over the finished document.
    pub fn finish(mut self) -> RenderedDocument {
        self.finish_page();
        RenderedDocument { pages: self.pages }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_splits_on_column_limit() {
        assert_eq!(wrap("a b c", 3), vec!["a b", "c"]);
        assert_eq!(wrap("alpha beta", 5), vec!["alpha", "beta"]);
        assert_eq!(wrap("short line", 80), vec!["short line"]);
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_collapses_newlines_like_spaces() {
        assert_eq!(wrap("one\ntwo three", 9), vec!["one two", "three"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap("   ", 10).is_empty());
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn max_columns_fails_when_indent_eats_the_page() {
        assert!(max_columns(BODY_SIZE, PAGE_WIDTH_MM).is_err());
        assert!(max_columns(BODY_SIZE, 0.0).unwrap() > 60);
    }

    #[test]
    fn composer_breaks_page_when_lines_overflow() {
        let mut composer = Composer::new();
        // More lines than one page can hold.
        for i in 0..60 {
            composer.line(&format!("line {i}"), BODY_SIZE, FontStyle::Regular, 0.0);
        }
        let document = composer.finish();
        assert!(document.pages.len() > 1);

        // Footer numbering is consecutive from 1.
        for (index, page) in document.pages.iter().enumerate() {
            assert_eq!(page.footer.text, format!("Page {}", index + 1));
            assert_eq!(page.footer.style, FontStyle::Italic);
        }
    }

    #[test]
    fn draws_stay_inside_the_margins() {
        let mut composer = Composer::new();
        for _ in 0..200 {
            composer.line("body text", BODY_SIZE, FontStyle::Regular, 0.0);
        }
        let document = composer.finish();
        for page in &document.pages {
            for draw in &page.draws {
                assert!(draw.y >= MARGIN_MM - LINE_HEIGHT_MM);
                assert!(draw.y <= PAGE_HEIGHT_MM - MARGIN_MM);
                assert!(draw.x >= MARGIN_MM);
            }
        }
    }

    #[test]
    fn bullet_line_shares_a_baseline() {
        let mut composer = Composer::new();
        composer.bullet_line("point", BODY_SIZE);
        let document = composer.finish();
        let draws = &document.pages[0].draws;
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].text, "-");
        assert!((draws[0].y - draws[1].y).abs() < f64::EPSILON);
        assert!(draws[1].x > draws[0].x);
    }

    #[test]
    fn footer_is_roughly_centered() {
        let mut composer = Composer::new();
        composer.line("x", BODY_SIZE, FontStyle::Regular, 0.0);
        let document = composer.finish();
        let footer = &document.pages[0].footer;
        assert!(footer.x > PAGE_WIDTH_MM / 3.0);
        assert!(footer.x < 2.0 * PAGE_WIDTH_MM / 3.0);
    }

    #[test]
    fn empty_composer_still_produces_one_footed_page() {
        let document = Composer::new().finish();
        assert_eq!(document.pages.len(), 1);
        assert_eq!(document.pages[0].footer.text, "Page 1");
    }
}
