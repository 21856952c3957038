// src/layout.rs

//! Fixed page geometry and the page templates the manual is built from.
//!
//! Inventory grids never reflow: items past the last row simply run off the
//! bottom of the page, so callers that need several inventory pages must split
//! the item list themselves.

use crate::error::{Error, Result};
use crate::project_models::{Part, ProjectInfo};
use crate::svg_models::{
    Anchor, Canvas, Element, FONT_HELVETICA, FONT_MONO, FONT_SANS, Page, PageKind, Style,
    TextStyle,
};
use glam::Vec2;

/// ISO A4 at 72 units per inch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub const fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub const fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

pub const A4: PageGeometry = PageGeometry {
    width: 595.0,
    height: 842.0,
    margin: 40.0,
};

pub const PAGE_W: f32 = A4.width;
pub const PAGE_H: f32 = A4.height;
pub const MARGIN: f32 = A4.margin;
pub const CONTENT_W: f32 = A4.content_width();
pub const CONTENT_H: f32 = A4.content_height();

/// Horizontal room reserved beside a row of parts.
const ROW_GUTTER: f32 = 80.0;

const STEP_NUMBER_COLOR: &str = "#333333";
const BORDER_COLOR: &str = "#e0e0e0";
const GRID_TOP: f32 = 80.0;
const DIAGRAM_TOP: f32 = 90.0;

pub const HARDWARE_GRID: GridLayout = GridLayout {
    columns: 4,
    row_height: 100.0,
    top: GRID_TOP,
};

pub const PARTS_GRID: GridLayout = GridLayout {
    columns: 3,
    row_height: 140.0,
    top: GRID_TOP,
};

/// Region of a template the caller fills in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }
}

/// A page from a template with a dynamic body.
#[derive(Debug, Clone)]
pub struct Template {
    pub page: Page,
    pub body: Body,
}

// --- Grid placement ---

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Cell {
    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

/// Fixed-column grid spanning the content width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub row_height: f32,
    pub top: f32,
}

impl GridLayout {
    pub fn cell_width(&self) -> f32 {
        CONTENT_W / self.columns as f32
    }

    /// Cell for the `index`-th item, filled row by row.
    pub fn cell(&self, index: usize) -> Result<Cell> {
        if self.columns == 0 {
            return Err(Error::InvalidGeometry(
                "grid layout needs at least one column".to_string(),
            ));
        }
        let (row, col) = (index / self.columns, index % self.columns);
        let size = Vec2::new(self.cell_width(), self.row_height);
        Ok(Cell {
            origin: Vec2::new(MARGIN + col as f32 * size.x, self.top + row as f32 * size.y),
            size,
        })
    }

    /// Rows that fit above the bottom margin.
    pub fn rows_per_page(&self) -> usize {
        ((PAGE_H - MARGIN - self.top) / self.row_height).floor().max(0.0) as usize
    }

    pub fn capacity(&self) -> usize {
        self.rows_per_page() * self.columns
    }
}

/// Spacing between `count` items laid out in a row, capped at `max_spacing`.
pub fn row_spacing(count: usize, max_spacing: f32) -> f32 {
    max_spacing.min((CONTENT_W - ROW_GUTTER) / count.max(1) as f32)
}

/// X positions of `count` items centered on `center_x`, capped spacing.
pub fn row_positions(count: usize, center_x: f32, max_spacing: f32) -> Vec<f32> {
    centered_row(count, center_x, row_spacing(count, max_spacing))
}

/// X positions of `count` items `spacing` apart, centered on `center_x`.
pub fn centered_row(count: usize, center_x: f32, spacing: f32) -> Vec<f32> {
    let start = center_x - count.saturating_sub(1) as f32 * spacing / 2.0;
    (0..count).map(|i| start + i as f32 * spacing).collect()
}

// --- Templates ---

pub fn new_page(kind: PageKind) -> Page {
    Page::new(kind, A4.size())
}

pub fn add_page_border(page: &mut Page) {
    page.push(Element::rect(
        Vec2::splat(MARGIN / 2.0),
        Vec2::new(PAGE_W - MARGIN, PAGE_H - MARGIN),
        0.0,
        Style::stroked(BORDER_COLOR, 0.5),
    ));
}

fn bordered_page(kind: PageKind) -> Page {
    let mut page = new_page(kind);
    add_page_border(&mut page);
    page
}

fn page_title(page: &mut Page, title: &str) {
    page.push(Element::text(
        title,
        Vec2::new(PAGE_W / 2.0, 50.0),
        TextStyle::new(20.0, FONT_HELVETICA)
            .fill("#333")
            .anchor(Anchor::Middle)
            .bold(),
    ));
}

/// Light frame around a page's working area.
fn content_frame(page: &mut Page, top: f32, height: f32) {
    page.push(Element::rect(
        Vec2::new(MARGIN, top),
        Vec2::new(CONTENT_W, height),
        4.0,
        Style::filled("#fafafa").with_stroke("#eee", 0.5),
    ));
}

/// Where the cover collage is drawn.
pub const COVER_PREVIEW: Body = Body {
    origin: Vec2::new(MARGIN + 40.0, 150.0),
    size: Vec2::new(CONTENT_W - 80.0, 500.0),
};

pub fn cover_page(info: &ProjectInfo) -> Page {
    let mut page = bordered_page(PageKind::Cover);
    page.push(Element::text(
        &info.name,
        Vec2::new(PAGE_W / 2.0, 80.0),
        TextStyle::new(28.0, FONT_HELVETICA)
            .fill("#222")
            .anchor(Anchor::Middle)
            .bold(),
    ));
    if !info.description.is_empty() {
        page.push(Element::text(
            &info.description,
            Vec2::new(PAGE_W / 2.0, 110.0),
            TextStyle::new(14.0, FONT_HELVETICA)
                .fill("#666")
                .anchor(Anchor::Middle),
        ));
    }

    page.push(Element::rect(
        COVER_PREVIEW.origin,
        COVER_PREVIEW.size,
        8.0,
        Style::filled("#fafafa").with_stroke("#ddd", 1.0),
    ));
    page.push(Element::text(
        "[ Assembled Product ]",
        Vec2::new(PAGE_W / 2.0, COVER_PREVIEW.center().y),
        TextStyle::new(16.0, FONT_SANS)
            .fill("#ccc")
            .anchor(Anchor::Middle),
    ));

    page.push(Element::text(
        format!("v{}", info.version),
        Vec2::new(PAGE_W - MARGIN, PAGE_H - MARGIN / 2.0),
        TextStyle::new(10.0, FONT_SANS).fill("#999").anchor(Anchor::End),
    ));
    page
}

/// Which warnings the safety page carries.
#[derive(Debug, Clone, Default)]
pub struct SafetyNotes {
    pub has_electronics: bool,
    pub has_soldering: bool,
    pub two_person: bool,
    pub extra: Vec<String>,
}

impl SafetyNotes {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        if self.has_electronics {
            rows.push(("\u{26a1}", "Disconnect power before making any wiring changes".to_string()));
            rows.push(("\u{270b}", "Handle circuit boards by edges only, avoid touching chips".to_string()));
        }
        if self.has_soldering {
            rows.push(("\u{1f525}", "Soldering iron gets very hot, use the stand and avoid burns".to_string()));
            rows.push(("\u{1f4a8}", "Solder in a well-ventilated area".to_string()));
        }
        if self.two_person {
            rows.push(("\u{1f465}", "Two people recommended for this assembly".to_string()));
        }
        for note in &self.extra {
            rows.push(("\u{26a0}", note.clone()));
        }
        rows.push(("\u{1f4cb}", "Verify all parts before starting (see next pages)".to_string()));
        rows.push(("\u{1f527}", "Do not overtighten screws, snug is enough".to_string()));
        rows
    }
}

/// Safety page. The body starts under the "Tools needed" heading.
pub fn safety_page(notes: &SafetyNotes) -> Template {
    let mut page = bordered_page(PageKind::Safety);

    let mut y = 60.0;
    page.push(Element::text(
        "\u{26a0}",
        Vec2::new(MARGIN + 20.0, y + 10.0),
        TextStyle::new(36.0, FONT_SANS).fill("#e63946"),
    ));
    page.push(Element::text(
        "Before you begin",
        Vec2::new(MARGIN + 60.0, y),
        TextStyle::new(20.0, FONT_HELVETICA).fill("#333").bold(),
    ));
    y += 50.0;

    for (icon, text) in notes.rows() {
        page.push(Element::rect(
            Vec2::new(MARGIN, y - 5.0),
            Vec2::new(CONTENT_W, 40.0),
            4.0,
            Style::filled("#fff8f0").with_stroke("#f0e0d0", 0.5),
        ));
        page.push(Element::text(
            icon,
            Vec2::new(MARGIN + 25.0, y + 18.0),
            TextStyle::new(20.0, FONT_SANS).anchor(Anchor::Middle),
        ));
        page.push(Element::text(
            text,
            Vec2::new(MARGIN + 55.0, y + 20.0),
            TextStyle::new(12.0, FONT_HELVETICA).fill("#444"),
        ));
        y += 50.0;
    }

    y += 20.0;
    page.push(Element::text(
        "Tools needed:",
        Vec2::new(MARGIN + 10.0, y),
        TextStyle::new(14.0, FONT_HELVETICA).fill("#333").bold(),
    ));

    let origin = Vec2::new(MARGIN + 30.0, y + 30.0);
    let body = Body {
        origin,
        size: Vec2::new(CONTENT_W - 30.0, (PAGE_H - MARGIN - origin.y).max(0.0)),
    };
    Template { page, body }
}

fn grid_cell_frame(page: &mut Page, cell: &Cell) {
    page.push(Element::rect(
        cell.origin + Vec2::splat(5.0),
        cell.size - Vec2::splat(10.0),
        4.0,
        Style::filled("#fafafa").with_stroke(BORDER_COLOR, 0.5),
    ));
}

/// Hardware grid: id, quantity, name and a tick box per cell.
///
/// Returns the page and each item's drawing center.
pub fn hardware_inventory_page(items: &[Part]) -> Result<(Page, Vec<Vec2>)> {
    let mut page = bordered_page(PageKind::HardwareInventory);
    page_title(&mut page, "Hardware");

    let mut centers = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let cell = HARDWARE_GRID.cell(i)?;
        let Cell { origin, size } = cell;
        grid_cell_frame(&mut page, &cell);

        page.push(Element::text(
            &item.id,
            origin + Vec2::new(15.0, 20.0),
            TextStyle::new(10.0, FONT_MONO).fill("#666").bold(),
        ));
        page.push(Element::text(
            format!("\u{d7}{}", item.quantity),
            origin + Vec2::new(size.x - 15.0, 22.0),
            TextStyle::new(14.0, FONT_SANS)
                .fill("#333")
                .anchor(Anchor::End)
                .bold(),
        ));
        page.push(Element::text(
            &item.name,
            Vec2::new(cell.center().x, origin.y + size.y - 15.0),
            TextStyle::new(8.0, FONT_SANS)
                .fill("#666")
                .anchor(Anchor::Middle),
        ));
        // Tick box
        page.push(Element::rect(
            origin + size - Vec2::splat(25.0),
            Vec2::splat(12.0),
            2.0,
            Style::stroked("#ccc", 1.0),
        ));
        centers.push(cell.center() - Vec2::new(0.0, 5.0));
    }
    Ok((page, centers))
}

/// Structural and electronic parts grid: id badge, placeholder and name.
///
/// Returns the page and each item's drawing center.
pub fn parts_inventory_page(items: &[&Part]) -> Result<(Page, Vec<Vec2>)> {
    let mut page = bordered_page(PageKind::PartsInventory);
    page_title(&mut page, "Parts");

    let mut centers = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let cell = PARTS_GRID.cell(i)?;
        let Cell { origin, size } = cell;
        let center = cell.center();
        grid_cell_frame(&mut page, &cell);

        let badge = origin + Vec2::splat(15.0);
        page.push(Element::circle(badge, 12.0, Style::filled("#333")));
        page.push(Element::text(
            &item.id,
            badge + Vec2::new(0.0, 4.0),
            TextStyle::new(10.0, FONT_MONO)
                .fill("white")
                .anchor(Anchor::Middle)
                .bold(),
        ));
        page.push(Element::rect(
            center - Vec2::new(30.0, 20.0),
            Vec2::new(60.0, 40.0),
            4.0,
            Style::filled("#f0f0f0")
                .with_stroke("#ddd", 0.5)
                .dashed("4,2"),
        ));
        page.push(Element::text(
            &item.name,
            Vec2::new(center.x, origin.y + size.y - 15.0),
            TextStyle::new(9.0, FONT_SANS)
                .fill("#555")
                .anchor(Anchor::Middle),
        ));
        centers.push(center);
    }
    Ok((page, centers))
}

/// Step page with its number badge. The body is the framed illustration area.
pub fn step_page(number: u32, description: Option<&str>) -> Template {
    let mut page = bordered_page(PageKind::Step(number));

    let badge = Vec2::new(MARGIN + 30.0, 50.0);
    page.push(Element::circle(badge, 22.0, Style::filled(STEP_NUMBER_COLOR)));
    page.push(Element::text(
        number.to_string(),
        badge + Vec2::new(0.0, 7.0),
        TextStyle::new(20.0, FONT_HELVETICA)
            .fill("white")
            .anchor(Anchor::Middle)
            .bold(),
    ));
    if let Some(text) = description.filter(|t| !t.is_empty()) {
        page.push(Element::text(
            text,
            Vec2::new(badge.x + 40.0, badge.y + 5.0),
            TextStyle::new(12.0, FONT_HELVETICA).fill("#444"),
        ));
    }

    let top = DIAGRAM_TOP;
    let height = PAGE_H - top - MARGIN - 40.0;
    content_frame(&mut page, top, height);
    Template {
        page,
        body: Body {
            origin: Vec2::new(MARGIN, top),
            size: Vec2::new(CONTENT_W, height),
        },
    }
}

pub fn wiring_diagram_page(project_name: &str) -> Page {
    let mut page = bordered_page(PageKind::WiringDiagram);
    page_title(&mut page, "Wiring Diagram");
    page.push(Element::text(
        project_name,
        Vec2::new(PAGE_W / 2.0, 70.0),
        TextStyle::new(12.0, FONT_SANS)
            .fill("#888")
            .anchor(Anchor::Middle),
    ));
    content_frame(&mut page, DIAGRAM_TOP, PAGE_H - DIAGRAM_TOP - MARGIN - 60.0);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_fill_row_by_row() {
        let width = CONTENT_W / 4.0;
        for (index, row, col) in [(0, 0, 0), (3, 0, 3), (4, 1, 0), (5, 1, 1), (11, 2, 3)] {
            let cell = HARDWARE_GRID.cell(index).unwrap();
            let expected = Vec2::new(MARGIN + col as f32 * width, GRID_TOP + row as f32 * 100.0);
            assert_eq!(cell.origin, expected, "cell {} origin", index);
            assert_eq!(cell.size, Vec2::new(width, 100.0));
            assert_eq!(cell.center(), expected + Vec2::new(width / 2.0, 50.0));
        }
    }

    #[test]
    fn overflow_keeps_going_down_the_page() {
        assert_eq!(HARDWARE_GRID.rows_per_page(), 7);
        assert_eq!(HARDWARE_GRID.capacity(), 28);
        assert_eq!(PARTS_GRID.capacity(), 15);

        let past = HARDWARE_GRID.cell(HARDWARE_GRID.capacity()).unwrap();
        assert_eq!(past.origin.x, MARGIN, "overflow starts a new row, not a new page");
        assert_eq!(past.origin.y, GRID_TOP + 7.0 * 100.0);
        assert!(past.origin.y + past.size.y > PAGE_H - MARGIN);
    }

    #[test]
    fn zero_column_grid_is_rejected() {
        let grid = GridLayout {
            columns: 0,
            row_height: 10.0,
            top: 0.0,
        };
        assert!(matches!(grid.cell(0), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn row_spacing_caps_and_centers() {
        assert_eq!(row_spacing(3, 140.0), 140.0);
        assert_eq!(row_spacing(5, 140.0), (CONTENT_W - 80.0) / 5.0);
        let xs = row_positions(4, PAGE_W / 2.0, 100.0);
        let mean = xs.iter().sum::<f32>() / xs.len() as f32;
        assert!((mean - PAGE_W / 2.0).abs() < 1e-4);
        assert!(row_positions(0, PAGE_W / 2.0, 100.0).is_empty());
    }
}
