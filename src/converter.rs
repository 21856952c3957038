// src/converter.rs

use crate::annotations::{
    ArrowStyle, action_arrow, callout_circle, checkmark, do_dont, legend_height,
    quantity_marker, wire_legend, wire_path,
};
use crate::components::RenderOptions;
use crate::error::{Error, Result};
use crate::layout::{
    CONTENT_W, HARDWARE_GRID, MARGIN, PAGE_H, PAGE_W, PARTS_GRID, SafetyNotes, Template,
    centered_row, cover_page, hardware_inventory_page, parts_inventory_page, row_positions,
    safety_page, step_page, wiring_diagram_page,
};
use crate::project_models::{Action, Part, Parts, Project, Step};
use crate::registry::ComponentRegistry;
use crate::svg_models::{
    Anchor, Canvas, Element, FONT_MONO, FONT_SANS, Group, Page, TextStyle,
};
use glam::Vec2;
use log::{info, warn};
use std::collections::HashMap;

const COVER_COLLAGE_Y: f32 = 400.0;
const STEP_WIRE_WIDTH: f32 = 2.5;
/// How far "bring this in" parts float above the baseline.
const FLOAT_HEIGHT: f32 = 80.0;
const TEST_PASS_HINT: &str = "Works as described";
const TEST_FAIL_HINT: &str = "Unplug and recheck wiring";

const KNOWN_TOOLS: &[(&str, &str)] = &[
    ("phillips_screwdriver", "\u{1f527} Phillips screwdriver"),
    ("hex_wrench", "\u{1f527} Hex wrench"),
    ("wire_strippers", "\u{2702} Wire strippers"),
    ("soldering_iron", "\u{1f525} Soldering iron"),
    ("drill", "\u{1f529} Drill"),
    ("pliers", "\u{1f527} Pliers"),
    ("multimeter", "\u{1f4ca} Multimeter"),
];

/// Tunable layout parameters. The defaults reproduce the standard manual.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualOptions {
    pub max_step_spacing: f32,
    pub max_cover_spacing: f32,
    pub max_diagram_spacing: f32,
    pub callout_magnification: f32,
    pub callout_radius: f32,
    pub step_wire_offset: f32,
    pub diagram_wire_offset: f32,
}

impl Default for ManualOptions {
    fn default() -> Self {
        ManualOptions {
            max_step_spacing: 140.0,
            max_cover_spacing: 120.0,
            max_diagram_spacing: 160.0,
            callout_magnification: 2.0,
            callout_radius: 50.0,
            step_wire_offset: 12.0,
            diagram_wire_offset: 10.0,
        }
    }
}

impl ManualOptions {
    pub fn with_max_step_spacing(mut self, spacing: f32) -> Self {
        self.max_step_spacing = spacing;
        self
    }

    pub fn with_callout(mut self, magnification: f32, radius: f32) -> Self {
        self.callout_magnification = magnification;
        self.callout_radius = radius;
        self
    }

    pub fn with_wire_offsets(mut self, step: f32, diagram: f32) -> Self {
        self.step_wire_offset = step;
        self.diagram_wire_offset = diagram;
        self
    }
}

/// Friendly name for a tool; unknown tools get a generic icon.
pub fn tool_label(tool: &str) -> String {
    KNOWN_TOOLS
        .iter()
        .find(|(key, _)| *key == tool)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("\u{1f527} {}", tool))
}

/// Every part of a project, whatever its category, keyed by id.
pub struct PartLookup<'a> {
    parts: HashMap<&'a str, &'a Part>,
}

impl<'a> PartLookup<'a> {
    pub fn new(parts: &'a Parts) -> Self {
        PartLookup {
            parts: parts.iter().map(|p| (p.id.as_str(), p)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Part> {
        self.parts.get(id).copied()
    }
}

/// XML-safe group id: `prefix-<id>`, with anything outside `[A-Za-z0-9_-]`
/// replaced by `_`.
fn group_id(prefix: &str, id: &str) -> String {
    let safe: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}-{}", prefix, safe)
}

/// Where and how large a part is drawn, and the id of its group.
struct Placement {
    at: Vec2,
    scale: f32,
    group_id: String,
}

impl Placement {
    fn new(at: Vec2, scale: f32, group_id: String) -> Self {
        Placement { at, scale, group_id }
    }
}

/// Draws `part` in its own group as described by `placement`.
///
/// Returns `Ok(false)` without drawing anything when the part is unknown, has
/// no component, or names a component the registry lacks. Only malformed
/// geometry is an error.
fn draw_part(
    canvas: &mut dyn Canvas,
    registry: &ComponentRegistry,
    id: &str,
    part: Option<&Part>,
    placement: Placement,
    requested: RenderOptions,
) -> Result<bool> {
    let Some(part) = part else {
        warn!("Part '{}' is not defined, drawing its label only", id);
        return Ok(false);
    };
    let Some(component) = part.component_name() else {
        warn!("Part '{}' has no component to draw, drawing its label only", id);
        return Ok(false);
    };
    let requested = match part.dimensions {
        Some(dims) => requested.dimensions(dims),
        None => requested,
    };

    let mut group = Group::at(placement.at)
        .scaled(placement.scale)
        .with_id(placement.group_id);
    match registry.render(component, &mut group, Vec2::ZERO, requested) {
        Ok(_) => {
            canvas.push(Element::Group(group));
            Ok(true)
        }
        Err(Error::UnknownComponent { name, .. }) => {
            warn!(
                "Part '{}' uses unknown component '{}', drawing its label only",
                id, name
            );
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

pub fn render_cover(
    project: &Project,
    registry: &ComponentRegistry,
    options: &ManualOptions,
) -> Result<Page> {
    let mut page = cover_page(&project.info);

    let electronic = &project.parts.electronic;
    if !electronic.is_empty() {
        let spacing = options
            .max_cover_spacing
            .min(CONTENT_W / (electronic.len() + 1) as f32);
        let xs = centered_row(electronic.len(), PAGE_W / 2.0, spacing);
        let mut collage = Group::new().with_id("cover-collage");
        for (part, x) in electronic.iter().zip(xs) {
            draw_part(
                &mut collage,
                registry,
                &part.id,
                Some(part),
                Placement::new(
                    Vec2::new(x, COVER_COLLAGE_Y),
                    1.0,
                    group_id("part", &part.id),
                ),
                RenderOptions::default().show_pins(false),
            )?;
        }
        page.push(Element::Group(collage));
    }
    Ok(page)
}

pub fn render_safety(project: &Project) -> Page {
    let notes = SafetyNotes {
        has_electronics: project.has_electronics(),
        has_soldering: project.uses_tool("soldering_iron"),
        two_person: project.info.two_person,
        extra: project.safety.clone(),
    };
    let Template { mut page, body } = safety_page(&notes);
    for (i, tool) in project.tools.iter().enumerate() {
        page.push(Element::text(
            tool_label(tool),
            body.origin + Vec2::new(0.0, i as f32 * 25.0),
            TextStyle::new(12.0, FONT_SANS).fill("#444"),
        ));
    }
    page
}

/// `None` when the project has no hardware.
pub fn render_hardware_inventory(
    project: &Project,
    registry: &ComponentRegistry,
) -> Result<Option<Page>> {
    let hardware = &project.parts.hardware;
    if hardware.is_empty() {
        return Ok(None);
    }
    if hardware.len() > HARDWARE_GRID.capacity() {
        warn!(
            "{} hardware items exceed the {} cells of one inventory page; extra rows overflow",
            hardware.len(),
            HARDWARE_GRID.capacity()
        );
    }

    let (mut page, centers) = hardware_inventory_page(hardware)?;
    for (item, center) in hardware.iter().zip(centers) {
        draw_part(
            &mut page,
            registry,
            &item.id,
            Some(item),
            Placement::new(center, 1.5, group_id("part", &item.id)),
            RenderOptions::default().scale(1.0).show_pins(false),
        )?;
    }
    Ok(Some(page))
}

/// `None` when the project has neither structural nor electronic parts.
pub fn render_parts_inventory(
    project: &Project,
    registry: &ComponentRegistry,
) -> Result<Option<Page>> {
    let items: Vec<&Part> = project
        .parts
        .structural
        .iter()
        .chain(project.parts.electronic.iter())
        .collect();
    if items.is_empty() {
        return Ok(None);
    }
    if items.len() > PARTS_GRID.capacity() {
        warn!(
            "{} parts exceed the {} cells of one inventory page; extra rows overflow",
            items.len(),
            PARTS_GRID.capacity()
        );
    }

    let (mut page, centers) = parts_inventory_page(&items)?;
    for (item, center) in items.iter().zip(centers) {
        draw_part(
            &mut page,
            registry,
            &item.id,
            Some(item),
            Placement::new(center, 0.9, group_id("part", &item.id)),
            RenderOptions::default().show_pins(true),
        )?;
    }
    Ok(Some(page))
}

/// One assembly step. `index` is the step's position in the project.
pub fn render_step(
    project: &Project,
    lookup: &PartLookup<'_>,
    registry: &ComponentRegistry,
    options: &ManualOptions,
    step: &Step,
    index: usize,
) -> Result<Page> {
    let number = step.ordinal(index);
    let Template { mut page, body } = step_page(number, step.description.as_deref());
    let main = Vec2::new(PAGE_W / 2.0, body.center().y - 40.0);

    if step.action == Action::Test {
        checkmark(&mut page, Vec2::new(MARGIN + 58.0, 30.0), 16.0);
        do_dont(
            &mut page,
            Vec2::new(MARGIN + 20.0, body.bottom() - 40.0),
            TEST_PASS_HINT,
            TEST_FAIL_HINT,
        );
    }

    // Components go on top of arrows and labels.
    let mut illustration = Group::new().with_id("illustration");
    let xs = row_positions(step.parts.len(), main.x, options.max_step_spacing);
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, (id, x)) in step.parts.iter().zip(xs).enumerate() {
        let count = seen.entry(id.as_str()).or_insert(0);
        *count += 1;
        let gid = match *count {
            1 => group_id("part", id),
            n => format!("{}-{}", group_id("part", id), n),
        };

        let mut at = Vec2::new(x, main.y);
        if step.action.brings_parts_in() && i > 0 {
            at.y = main.y - FLOAT_HEIGHT;
            action_arrow(
                &mut page,
                at + Vec2::new(0.0, 30.0),
                Vec2::new(x, main.y - 30.0),
                ArrowStyle {
                    color: "#555",
                    width: 2.0,
                    dashed: true,
                },
            );
        }

        draw_part(
            &mut illustration,
            registry,
            id,
            lookup.get(id),
            Placement::new(at, 1.0, gid),
            RenderOptions::default().show_pins(step.action == Action::Wire),
        )?;
        page.push(Element::text(
            id.as_str(),
            at + Vec2::new(0.0, 50.0),
            TextStyle::new(10.0, FONT_MONO)
                .fill("#666")
                .anchor(Anchor::Middle)
                .bold(),
        ));
    }

    if step.callout {
        if let Some(hw_id) = step.hardware.first() {
            let center = Vec2::new(PAGE_W - MARGIN - 80.0, body.origin.y + 80.0);
            let inner = callout_circle(
                &mut page,
                main + Vec2::new(40.0, 0.0),
                center,
                options.callout_radius,
            );
            draw_part(
                &mut page,
                registry,
                hw_id,
                lookup.get(hw_id),
                Placement::new(
                    inner,
                    options.callout_magnification,
                    group_id("callout", hw_id),
                ),
                RenderOptions::default().scale(1.0),
            )?;
        }
    }

    if let Some(repeat) = step.repeat.filter(|n| *n > 0) {
        quantity_marker(&mut page, main + Vec2::new(80.0, -50.0), repeat);
    }

    if step.action == Action::Wire && !project.wiring.is_empty() {
        let wiring = &project.wiring;
        let legend_top = body.bottom() - legend_height(wiring.len());
        wire_legend(&mut page, Vec2::new(MARGIN + 20.0, legend_top), wiring);

        for (wi, wire) in wiring.iter().enumerate() {
            let wy = main.y + 30.0 + wi as f32 * options.step_wire_offset;
            let points = [
                Vec2::new(main.x - 60.0, wy),
                Vec2::new(main.x, wy + 5.0),
                Vec2::new(main.x + 60.0, wy),
            ];
            wire_path(
                &mut page,
                &points,
                wire.color.hex(),
                STEP_WIRE_WIDTH,
                wire.label.as_deref(),
            );
        }
    }

    if !illustration.is_empty() {
        page.push(Element::Group(illustration));
    }
    Ok(page)
}

/// `None` unless the project has both wiring and electronic parts.
pub fn render_wiring_diagram(
    project: &Project,
    registry: &ComponentRegistry,
    options: &ManualOptions,
) -> Result<Option<Page>> {
    let (wiring, electronic) = (&project.wiring, &project.parts.electronic);
    if wiring.is_empty() || electronic.is_empty() {
        return Ok(None);
    }

    let mut page = wiring_diagram_page(&project.info.name);
    let main = Vec2::new(PAGE_W / 2.0, PAGE_H / 2.0 - 40.0);
    let xs = row_positions(electronic.len(), main.x, options.max_diagram_spacing);

    let mut positions: HashMap<&str, Vec2> = HashMap::new();
    for (part, x) in electronic.iter().zip(xs) {
        let at = Vec2::new(x, main.y);
        positions.insert(part.id.as_str(), at);
        draw_part(
            &mut page,
            registry,
            &part.id,
            Some(part),
            Placement::new(at, 1.0, group_id("part", &part.id)),
            RenderOptions::default().show_pins(true),
        )?;
        page.push(Element::text(
            format!("{}: {}", part.id, part.name),
            at + Vec2::new(0.0, 55.0),
            TextStyle::new(9.0, FONT_SANS)
                .fill("#555")
                .anchor(Anchor::Middle),
        ));
    }

    for (wi, wire) in wiring.iter().enumerate() {
        let from = positions.get(wire.from.part.as_str());
        let to = positions.get(wire.to.part.as_str());
        let (Some(&from), Some(&to)) = (from, to) else {
            warn!(
                "Wire {} -> {} does not join two electronic parts, skipping its route",
                wire.from.part, wire.to.part
            );
            continue;
        };
        let mid_y = from.y.max(to.y) + 40.0 + wi as f32 * options.diagram_wire_offset;
        let points = [
            Vec2::new(from.x + 10.0, from.y + 30.0),
            Vec2::new(from.x + 10.0, mid_y),
            Vec2::new(to.x - 10.0, mid_y),
            Vec2::new(to.x - 10.0, to.y + 30.0),
        ];
        wire_path(
            &mut page,
            &points,
            wire.color.hex(),
            STEP_WIRE_WIDTH,
            wire.label.as_deref(),
        );
    }

    wire_legend(
        &mut page,
        Vec2::new(MARGIN + 20.0, PAGE_H - MARGIN - 100.0),
        wiring,
    );
    Ok(Some(page))
}

/// Renders the whole manual in page order:
/// cover, safety, hardware, parts, every step, wiring diagram.
pub fn render_manual(
    project: &Project,
    registry: &ComponentRegistry,
    options: &ManualOptions,
) -> Result<Vec<Page>> {
    info!(
        "Generating assembly instructions for: {}",
        project.info.name
    );
    let lookup = PartLookup::new(&project.parts);
    let mut pages = Vec::with_capacity(project.steps.len() + 5);

    pages.push(render_cover(project, registry, options)?);
    pages.push(render_safety(project));
    pages.extend(render_hardware_inventory(project, registry)?);
    pages.extend(render_parts_inventory(project, registry)?);
    for (i, step) in project.steps.iter().enumerate() {
        pages.push(render_step(project, &lookup, registry, options, step, i)?);
    }
    pages.extend(render_wiring_diagram(project, registry, options)?);

    for page in &pages {
        info!("Rendered page {:?}", page.kind());
    }
    Ok(pages)
}
