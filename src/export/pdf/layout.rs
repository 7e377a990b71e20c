//! Page layout for the tabular report document
//!
//! Coordinates are millimetres on an A4 portrait page with the origin at the
//! top-left corner and `y` growing downwards. Text `y` values are baselines.
//!
//! Sections flow vertically: each section title sits a fixed gap below the
//! measured end of the previous table, and each table starts a fixed gap below
//! its title. Cells wrap their text, so a table's height depends on its
//! content. Rows that do not fit continue on a new page with the header row
//! repeated.

use crate::export::sections::{period_line, report_sections, ReportSection, REPORT_TITLE};
use crate::models::ReportData;

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
/// Left, right and bottom page margin; also the top margin of continuation pages
pub const MARGIN: f64 = 14.0;

const TEXT_X: f64 = 20.0;
const TITLE_Y: f64 = 20.0;
const TITLE_SIZE: f64 = 20.0;
const PERIOD_Y: f64 = 35.0;
const PERIOD_SIZE: f64 = 12.0;
const FIRST_SECTION_Y: f64 = 55.0;
const SECTION_TITLE_SIZE: f64 = 14.0;
/// Space between the end of a table and the next section title
const SECTION_GAP: f64 = 20.0;
/// Space between a section title and its table
const TABLE_GAP: f64 = 10.0;

const CELL_FONT_SIZE: f64 = 10.0;
const CELL_PADDING: f64 = 1.76;
const LINE_HEIGHT_FACTOR: f64 = 1.15;

/// Points to millimetres
pub const PT_TO_MM: f64 = 25.4 / 72.0;

const HEADER_FILL: Rgb = Rgb(26, 188, 156);
const HEADER_TEXT: Rgb = Rgb(255, 255, 255);
const BODY_TEXT: Rgb = Rgb(50, 50, 50);
const HEADING_TEXT: Rgb = Rgb(0, 0, 0);

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One of the two built-in fonts the document uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

/// A drawing instruction on a page
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A single line of text; `y` is the baseline
    Text {
        x: f64,
        y: f64,
        size: f64,
        font: Font,
        color: Rgb,
        text: String,
    },
    /// A stroked table cell, optionally filled
    Cell {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Rgb>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    /// All text drawn on this page, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Cell { .. } => None,
        })
    }
}

/// A point in the document flow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub page: usize,
    pub y: f64,
}

impl Position {
    /// Whether this position comes strictly after `other` in reading order
    pub fn is_after(&self, other: &Position) -> bool {
        self.page > other.page || (self.page == other.page && self.y > other.y)
    }
}

/// Where a table ended up
#[derive(Debug, Clone, PartialEq)]
pub struct TablePlacement {
    pub title: &'static str,
    /// Top edge of the header row
    pub start: Position,
    /// Bottom edge of the last row (the header when there are no rows)
    pub end: Position,
    pub body_rows: usize,
}

/// A fully laid-out report, ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDocument {
    pub title: String,
    pub pages: Vec<Page>,
    pub tables: Vec<TablePlacement>,
}

impl TabularDocument {
    /// Lay out a report for the given period label
    pub fn layout(data: &ReportData, period: &str) -> Self {
        let mut composer = Composer::new();

        composer.text(TEXT_X, TITLE_Y, TITLE_SIZE, Font::Bold, HEADING_TEXT, REPORT_TITLE);
        composer.text(
            TEXT_X,
            PERIOD_Y,
            PERIOD_SIZE,
            Font::Regular,
            HEADING_TEXT,
            &period_line(period),
        );

        let mut tables = Vec::new();
        let mut previous_end: Option<Position> = None;

        for section in report_sections(data).iter() {
            let mut title_y = match previous_end {
                None => FIRST_SECTION_Y,
                Some(end) => end.y + SECTION_GAP,
            };

            // Keep the title together with the header and first row
            let needed = TABLE_GAP + header_height(section) + first_row_height(section);
            if title_y + needed > PAGE_HEIGHT - MARGIN {
                composer.new_page();
                title_y = TITLE_Y;
            }

            composer.text(
                TEXT_X,
                title_y,
                SECTION_TITLE_SIZE,
                Font::Bold,
                HEADING_TEXT,
                section.title,
            );

            let placement = composer.table(section, title_y + TABLE_GAP);
            previous_end = Some(placement.end);
            tables.push(placement);
        }

        tracing::debug!(
            pages = composer.pages.len(),
            tables = tables.len(),
            "laid out report document"
        );

        Self {
            title: format!("{} - {}", REPORT_TITLE, period),
            pages: composer.pages,
            tables,
        }
    }
}

struct Composer {
    pages: Vec<Page>,
    current: usize,
}

impl Composer {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            current: 0,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.current = self.pages.len() - 1;
    }

    fn push(&mut self, element: Element) {
        self.pages[self.current].elements.push(element);
    }

    fn text(&mut self, x: f64, y: f64, size: f64, font: Font, color: Rgb, text: &str) {
        self.push(Element::Text {
            x,
            y,
            size,
            font,
            color,
            text: text.to_string(),
        });
    }

    fn table(&mut self, section: &ReportSection, start_y: f64) -> TablePlacement {
        let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / section.columns.len() as f64;
        let header: Vec<String> = section.columns.iter().map(|c| c.to_string()).collect();

        let start = Position {
            page: self.current,
            y: start_y,
        };
        let mut y = start_y;
        y += self.row(&header, y, column_width, true);

        for row in &section.rows {
            let height = row_height(row, column_width, Font::Regular);
            if y + height > PAGE_HEIGHT - MARGIN {
                self.new_page();
                y = MARGIN;
                y += self.row(&header, y, column_width, true);
            }
            y += self.row(row, y, column_width, false);
        }

        TablePlacement {
            title: section.title,
            start,
            end: Position {
                page: self.current,
                y,
            },
            body_rows: section.rows.len(),
        }
    }

    /// Draw one row at `y` and return its height
    fn row(&mut self, cells: &[String], y: f64, column_width: f64, is_header: bool) -> f64 {
        let font = if is_header { Font::Bold } else { Font::Regular };
        let height = row_height(cells, column_width, font);
        let (fill, color) = if is_header {
            (Some(HEADER_FILL), HEADER_TEXT)
        } else {
            (None, BODY_TEXT)
        };

        for (index, cell) in cells.iter().enumerate() {
            let x = MARGIN + column_width * index as f64;
            self.push(Element::Cell {
                x,
                y,
                width: column_width,
                height,
                fill,
            });

            let lines = wrap_text(cell, column_width - 2.0 * CELL_PADDING, CELL_FONT_SIZE, font);
            for (line_index, line) in lines.iter().enumerate() {
                let baseline = y
                    + CELL_PADDING
                    + line_height() * line_index as f64
                    + CELL_FONT_SIZE * PT_TO_MM;
                self.text(x + CELL_PADDING, baseline, CELL_FONT_SIZE, font, color, line);
            }
        }

        height
    }
}

fn line_height() -> f64 {
    CELL_FONT_SIZE * LINE_HEIGHT_FACTOR * PT_TO_MM
}

fn row_height(cells: &[String], column_width: f64, font: Font) -> f64 {
    let lines = cells
        .iter()
        .map(|c| wrap_text(c, column_width - 2.0 * CELL_PADDING, CELL_FONT_SIZE, font).len())
        .max()
        .unwrap_or(1);
    lines as f64 * line_height() + 2.0 * CELL_PADDING
}

fn header_height(section: &ReportSection) -> f64 {
    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / section.columns.len() as f64;
    let header: Vec<String> = section.columns.iter().map(|c| c.to_string()).collect();
    row_height(&header, column_width, Font::Bold)
}

fn first_row_height(section: &ReportSection) -> f64 {
    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / section.columns.len() as f64;
    section
        .rows
        .first()
        .map(|row| row_height(row, column_width, Font::Regular))
        .unwrap_or(0.0)
}

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Bold glyphs run slightly wider than regular ones
const BOLD_WIDTH_FACTOR: f64 = 1.06;

fn glyph_width(c: char) -> u16 {
    let code = c as u32;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize]
    } else {
        556
    }
}

/// Rendered width of `text` in millimetres
pub fn text_width(text: &str, size: f64, font: Font) -> f64 {
    let units: f64 = text.chars().map(|c| f64::from(glyph_width(c))).sum();
    let factor = match font {
        Font::Regular => 1.0,
        Font::Bold => BOLD_WIDTH_FACTOR,
    };
    units / 1000.0 * size * PT_TO_MM * factor
}

/// Greedy word wrap; words wider than the line are broken between characters
pub fn wrap_text(text: &str, max_width: f64, size: f64, font: Font) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if text_width(&candidate, size, font) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            for c in word.chars() {
                let mut next = current.clone();
                next.push(c);
                if !current.is_empty() && text_width(&next, size, font) > max_width {
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                } else {
                    current = next;
                }
            }
        }

        lines.push(current);
    }

    lines
}
