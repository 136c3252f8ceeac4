//! PDF encoding.
//!
//! Walks an in-memory [`RenderedDocument`] into `printpdf` and writes the
//! bytes. This is the only side effect in the render path; everything
//! upstream stays pure.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use tracing::debug;

use crate::error::Result;
use super::layout::{FontStyle, RenderedDocument, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn for_style(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

/// Encode a rendered document and write it to `path`.
pub fn write_pdf(document: &RenderedDocument, title: &str, path: &Path) -> Result<()> {
    let (pdf, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "content");

    let fonts = Fonts {
        regular: pdf.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: pdf.add_builtin_font(BuiltinFont::HelveticaBold)?,
        italic: pdf.add_builtin_font(BuiltinFont::HelveticaOblique)?,
    };

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                pdf.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "content");
            pdf.get_page(page_index).get_layer(layer_index)
        };

        for draw in page.draws.iter().chain(std::iter::once(&page.footer)) {
            layer.use_text(
                draw.text.clone(),
                draw.size as f32,
                Mm(draw.x as f32),
                Mm(draw.y as f32),
                fonts.for_style(draw.style),
            );
        }
    }

    debug!(pages = document.pages.len(), path = %path.display(), "writing PDF");
    pdf.save(&mut BufWriter::new(File::create(path)?))?;
    Ok(())
}
