//! PDF 1.4 serialization of a laid-out report
//!
//! Emits one content stream per page and references the standard Helvetica
//! and Helvetica-Bold fonts, so no font data is embedded. Text is encoded as
//! WinAnsi; characters outside Latin-1 are replaced with `?`.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::layout::{Element, Font, Page, Rgb, TabularDocument, PAGE_HEIGHT, PAGE_WIDTH};

const MM_TO_PT: f64 = 72.0 / 25.4;
/// Grid line color and width
const GRID_STROKE: Rgb = Rgb(200, 200, 200);
const GRID_LINE_WIDTH: f64 = 0.3;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_REGULAR_ID: usize = 3;
const FONT_BOLD_ID: usize = 4;
const INFO_ID: usize = 5;
const FIRST_PAGE_ID: usize = 6;

/// Serialize the document into PDF bytes
pub fn render_pdf(document: &TabularDocument) -> Vec<u8> {
    let mut pdf = PdfBuilder::new();
    let page_count = document.pages.len();
    let page_ids: Vec<usize> = (0..page_count).map(|i| FIRST_PAGE_ID + 2 * i).collect();

    pdf.object(
        CATALOG_ID,
        format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID).as_bytes(),
    );

    let kids: Vec<String> = page_ids.iter().map(|id| format!("{} 0 R", id)).collect();
    pdf.object(
        PAGES_ID,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        )
        .as_bytes(),
    );

    pdf.object(FONT_REGULAR_ID, font_dictionary("Helvetica").as_bytes());
    pdf.object(FONT_BOLD_ID, font_dictionary("Helvetica-Bold").as_bytes());

    let mut info = b"<< /Title ".to_vec();
    info.extend(pdf_string(&document.title));
    info.extend(b" /Producer ");
    info.extend(pdf_string(&format!(
        "expense-tracker {}",
        env!("CARGO_PKG_VERSION")
    )));
    info.extend(b" >>");
    pdf.object(INFO_ID, &info);

    for (page, &page_id) in document.pages.iter().zip(&page_ids) {
        let content_id = page_id + 1;
        pdf.object(
            page_id,
            format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> /Contents {} 0 R >>",
                PAGES_ID,
                PAGE_WIDTH * MM_TO_PT,
                PAGE_HEIGHT * MM_TO_PT,
                FONT_REGULAR_ID,
                FONT_BOLD_ID,
                content_id
            )
            .as_bytes(),
        );
        pdf.stream(content_id, &page_content(page));
    }

    pdf.finish(CATALOG_ID, INFO_ID)
}

/// Serialize the document into a writer
pub fn write_pdf<W: Write>(document: &TabularDocument, writer: &mut W) -> ExpenseResult<()> {
    writer
        .write_all(&render_pdf(document))
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

fn font_dictionary(base_font: &str) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        base_font
    )
}

/// Accumulates numbered objects and tracks their byte offsets for the xref table
struct PdfBuilder {
    buffer: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl PdfBuilder {
    fn new() -> Self {
        let mut buffer = b"%PDF-1.4\n".to_vec();
        // Binary marker so transfer tools treat the file as binary
        buffer.extend([b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
        Self {
            buffer,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.offsets.push((id, self.buffer.len()));
        self.buffer
            .extend(format!("{} 0 obj\n", id).as_bytes());
        self.buffer.extend(body);
        self.buffer.extend(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, content: &[u8]) {
        let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        body.extend(content);
        body.extend(b"\nendstream");
        self.object(id, &body);
    }

    fn finish(mut self, root: usize, info: usize) -> Vec<u8> {
        self.offsets.sort_unstable();
        let size = self.offsets.len() + 1;
        let xref_offset = self.buffer.len();

        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for (_, offset) in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, root, info, xref_offset
        ));

        self.buffer.extend(xref.as_bytes());
        self.buffer
    }
}

/// Drawing operators for one page
fn page_content(page: &Page) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend(
        format!(
            "{} RG\n{:.2} w\n",
            color_operands(GRID_STROKE),
            GRID_LINE_WIDTH
        )
        .as_bytes(),
    );

    for element in &page.elements {
        match element {
            Element::Cell {
                x,
                y,
                width,
                height,
                fill,
            } => {
                let rect = format!(
                    "{:.2} {:.2} {:.2} {:.2} re",
                    x * MM_TO_PT,
                    (PAGE_HEIGHT - y - height) * MM_TO_PT,
                    width * MM_TO_PT,
                    height * MM_TO_PT
                );
                let ops = match fill {
                    Some(color) => format!("{} rg\n{}\nB\n", color_operands(*color), rect),
                    None => format!("{}\nS\n", rect),
                };
                out.extend(ops.as_bytes());
            }
            Element::Text {
                x,
                y,
                size,
                font,
                color,
                text,
            } => {
                let font_name = match font {
                    Font::Regular => "F1",
                    Font::Bold => "F2",
                };
                out.extend(
                    format!(
                        "BT\n{} rg\n/{} {:.1} Tf\n{:.2} {:.2} Td\n",
                        color_operands(*color),
                        font_name,
                        size,
                        x * MM_TO_PT,
                        (PAGE_HEIGHT - y) * MM_TO_PT
                    )
                    .as_bytes(),
                );
                out.extend(pdf_string(text));
                out.extend(b" Tj\nET\n");
            }
        }
    }

    out
}

fn color_operands(Rgb(r, g, b): Rgb) -> String {
    format!(
        "{:.3} {:.3} {:.3}",
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0
    )
}

/// Encode text as a PDF literal string in WinAnsi
fn pdf_string(text: &str) -> Vec<u8> {
    let mut out = vec![b'('];
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            ' '..='~' => out.push(c as u8),
            '\u{A0}'..='\u{FF}' => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out.push(b')');
    out
}
