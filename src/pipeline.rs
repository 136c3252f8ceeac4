//! Book generation pipeline.
//!
//! Strictly linear: structure → per-chapter outline → content → cleanup →
//! render → encode, then one merge at the end. A chapter is fully rendered
//! before the next one is generated; the only state crossing chapter
//! boundaries is the append-only list of chapter PDF paths.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::client::TextGenClient;
use crate::config::BookConfig;
use crate::error::Result;
use crate::render::encode::write_pdf;
use crate::structure::BookStructure;
use crate::{merge, prompts, render};

/// Derive a directory/file name from a title: lowercase, spaces to
/// underscores. No other sanitization is applied.
pub fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

/// Run the whole pipeline for one topic and return the final PDF path.
pub fn run(config: &BookConfig, topic: &str) -> Result<PathBuf> {
    let client = TextGenClient::new(config)?;

    println!("\nGenerating book structure...");
    let raw_structure = client.generate(&prompts::structure_prompt(topic))?;
    let structure = BookStructure::parse(&raw_structure, topic);

    let book_dir = config.output_root.join(format!("{}_book", slug(&structure.title)));
    fs::create_dir_all(&book_dir)?;

    println!("\n📖 Creating book: {}", structure.title);
    println!("Book directory: {}", book_dir.display());

    let mut chapter_pdfs = Vec::new();
    for (index, chapter) in structure.chapters.iter().enumerate() {
        let number = index + 1;
        println!("\n{}", "=".repeat(50));
        println!("Processing Chapter {number}: {}", chapter.title);

        let chapter_dir = book_dir.join(format!("chapter_{number}"));
        fs::create_dir_all(&chapter_dir)?;

        println!("\nGenerating outline for chapter: {}", chapter.title);
        let outline = client.generate(&prompts::outline_prompt(&chapter.title, topic))?;
        let outline_path = chapter_dir.join("outline.md");
        fs::write(&outline_path, &outline)?;
        println!("Chapter outline saved to: {}", outline_path.display());

        println!("Generating chapter content...");
        let content = client.generate(&prompts::chapter_prompt(&outline))?;
        println!("Cleaning and improving chapter content...");
        let content = client.generate(&prompts::cleaning_prompt(&content))?;

        let content_path = chapter_dir.join("content.txt");
        fs::write(&content_path, &content)?;
        println!("Chapter content saved to: {}", content_path.display());

        println!("Creating chapter PDF...");
        let outcome = render::render(&chapter.title, &content);
        for warning in &outcome.warnings {
            warn!(block = %warning.block, reason = %warning.reason, "paragraph skipped");
        }
        let pdf_path = chapter_dir.join(format!("{}.pdf", slug(&chapter.title)));
        write_pdf(&outcome.document, &chapter.title, &pdf_path)?;
        println!("📄 Chapter PDF created: {}", pdf_path.display());

        chapter_pdfs.push(pdf_path);
        info!(chapter = number, total = structure.chapters.len(), "chapter complete");
    }

    println!("\nMerging all chapters into final book PDF...");
    let final_path = book_dir.join(format!("{}_complete.pdf", slug(&structure.title)));
    merge::merge_pdfs(&chapter_pdfs, &final_path)?;

    Ok(final_path)
}
