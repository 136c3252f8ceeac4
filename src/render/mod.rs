//! Document renderer.
//!
//! Turns a chapter title and its semi-structured content (a constrained
//! markdown subset: `##`/`###` headings, `- ` bullet lines, blank-line
//! separated paragraphs) into an in-memory paginated document of positioned
//! text draws. Persisting the document to bytes is the encoder's job.
//!
//! A block that fails to lay out is skipped and reported as a
//! [`RenderWarning`]; at most one paragraph is lost per failure and
//! rendering always continues.
//!
//! # Example
//!
//! ```rust
//! use bookforge::render::render;
//!
//! let outcome = render("Intro", "## Welcome\nFirst paragraph.");
//! assert!(outcome.warnings.is_empty());
//! assert_eq!(outcome.document.pages.len(), 1);
//! ```

pub mod encode;
pub mod layout;
pub mod sanitize;

use tracing::warn;

use self::layout::{
    max_columns, wrap, Composer, FontStyle, LayoutError, BODY_SIZE, BULLET_INDENT_MM,
    HEADING_SIZE, SUBHEADING_SIZE, TITLE_LINE_HEIGHT_MM, TITLE_SIZE,
};
pub use self::layout::{Page, RenderedDocument, TextDraw};
pub use self::sanitize::sanitize;

/// A parsed unit of chapter content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Bullet(String),
    Paragraph(String),
}

impl Block {
    fn summary(&self) -> String {
        let text = match self {
            Block::Heading { text, .. } | Block::Bullet(text) | Block::Paragraph(text) => text,
        };
        text.chars().take(48).collect()
    }
}

/// A block that was skipped because it failed to lay out.
#[derive(Debug, Clone)]
pub struct RenderWarning {
    /// Leading characters of the skipped block.
    pub block: String,
    pub reason: String,
}

/// A rendered chapter plus any per-block warnings.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub document: RenderedDocument,
    pub warnings: Vec<RenderWarning>,
}

/// Render one chapter into a paginated document.
///
/// The title block is always the first draw. Every non-empty sanitized
/// input line appears as some draw, in input order; the only content
/// silently dropped is a raw `# ` line, which duplicates the title.
pub fn render(title: &str, content: &str) -> RenderOutcome {
    let mut composer = Composer::new();
    let mut warnings = Vec::new();

    composer.line_with_height(
        &format!("Chapter: {}", sanitize(title)),
        TITLE_SIZE,
        FontStyle::Bold,
        0.0,
        TITLE_LINE_HEIGHT_MM,
    );
    composer.gap(5.0);

    for block in parse_blocks(content) {
        if let Err(err) = emit_block(&mut composer, &block) {
            warn!(block = %block.summary(), %err, "skipping block that failed to lay out");
            warnings.push(RenderWarning { block: block.summary(), reason: err.to_string() });
        }
    }

    RenderOutcome { document: composer.finish(), warnings }
}

/// Split chapter content into blocks.
///
/// Heading markers split segments wherever they occur, blank lines separate
/// paragraphs, and a paragraph whose first line is a bullet marker becomes
/// one bullet per line. Raw `# ` lines are dropped.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<String>) {
        if paragraph.is_empty() {
            return;
        }
        let lines = std::mem::take(paragraph);
        if lines[0].starts_with("- ") {
            for line in lines {
                let text = line.strip_prefix("- ").unwrap_or(&line).to_string();
                blocks.push(Block::Bullet(text));
            }
        } else {
            blocks.push(Block::Paragraph(lines.join("\n")));
        }
    }

    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            flush(&mut blocks, &mut paragraph);
        } else if let Some(rest) = line.strip_prefix("## ") {
            flush(&mut blocks, &mut paragraph);
            blocks.push(Block::Heading { level: 2, text: rest.to_string() });
        } else if let Some(rest) = line.strip_prefix("### ") {
            flush(&mut blocks, &mut paragraph);
            blocks.push(Block::Heading { level: 3, text: rest.to_string() });
        } else if line.starts_with("# ") {
            // Duplicate of the already-emitted chapter title.
            flush(&mut blocks, &mut paragraph);
        } else {
            paragraph.push(line.to_string());
        }
    }
    flush(&mut blocks, &mut paragraph);
    blocks
}

fn emit_block(composer: &mut Composer, block: &Block) -> Result<(), LayoutError> {
    match block {
        Block::Heading { level, text } => {
            let (size, before, after) = if *level == 2 {
                (HEADING_SIZE, 5.0, 3.0)
            } else {
                (SUBHEADING_SIZE, 4.0, 2.0)
            };
            composer.gap(before);
            let columns = max_columns(size, 0.0)?;
            let lines = wrap(&sanitize(text), columns);
            if lines.is_empty() {
                composer.line(" ", size, FontStyle::Bold, 0.0);
            }
            for line in lines {
                composer.line(&line, size, FontStyle::Bold, 0.0);
            }
            composer.gap(after);
        }
        Block::Bullet(text) => {
            composer.gap(2.0);
            let columns = max_columns(BODY_SIZE, BULLET_INDENT_MM)?;
            let lines = wrap(&sanitize(text), columns);
            if lines.is_empty() {
                composer.bullet_line(" ", BODY_SIZE);
            }
            for (index, line) in lines.iter().enumerate() {
                if index == 0 {
                    composer.bullet_line(line, BODY_SIZE);
                } else {
                    composer.line(line, BODY_SIZE, FontStyle::Regular, BULLET_INDENT_MM);
                }
            }
        }
        Block::Paragraph(text) => {
            let clean = sanitize(text);
            if clean.trim().is_empty() {
                return Ok(());
            }
            let columns = max_columns(BODY_SIZE, 0.0)?;
            for line in wrap(&clean, columns) {
                composer.line(&line, BODY_SIZE, FontStyle::Regular, 0.0);
            }
            composer.gap(3.0);
        }
    }
    Ok(())
}
