use glam::Vec2;
use isomanual_rs::{
    converter::{ManualOptions, render_manual, tool_label},
    error::Error,
    file_writer::manual_file_stem,
    generate_manual,
    layout::{PAGE_H, PAGE_W},
    project_models::{Project, WireColor},
    registry::ComponentRegistry,
    svg_models::{Element, Page, PageKind},
};
use regex::Regex;
use serde_json::{Value, json};

fn project_from(value: Value) -> Project {
    serde_json::from_value(value).expect("fixture should deserialize")
}

fn render(project: &Project) -> Vec<Page> {
    render_manual(project, &ComponentRegistry::builtin(), &ManualOptions::default())
        .expect("manual should render")
}

fn kinds(pages: &[Page]) -> Vec<PageKind> {
    pages.iter().map(Page::kind).collect()
}

fn night_light() -> Project {
    project_from(json!({
        "project": {
            "name": "Night Light",
            "description": "Motion activated LED lamp",
            "version": "2.1"
        },
        "parts": {
            "structural": [
                { "id": "base", "name": "Base plate", "shape": "rect",
                  "dimensions": { "w": 90, "h": 60, "d": 3 } }
            ],
            "hardware": [
                { "id": "M3", "name": "M3 screw", "type": "screw_phillips", "quantity": 4 }
            ],
            "electronic": [
                { "id": "uno", "name": "Arduino Uno", "component": "arduino_uno" },
                { "id": "pir", "name": "Motion sensor", "component": "pir_sensor" },
                { "id": "led", "name": "LED", "component": "led_single" }
            ]
        },
        "tools": ["phillips_screwdriver", "wire_strippers"],
        "steps": [
            { "action": "place", "parts": ["base"], "description": "Lay the base flat" },
            { "action": "attach", "parts": ["base", "uno"], "hardware": ["M3"],
              "repeat": 4, "callout": true, "description": "Screw the board down" },
            { "action": "wire", "parts": ["uno", "pir", "led"], "description": "Connect" },
            { "action": "test", "parts": ["uno"], "description": "Power on" }
        ],
        "wiring": [
            { "from": { "part": "uno", "pin": "5V" }, "to": { "part": "pir", "pin": "VCC" },
              "color": "red", "label": "power" },
            { "from": { "part": "uno", "pin": "GND" }, "to": { "part": "pir", "pin": "GND" },
              "color": "black" },
            { "from": { "part": "uno", "pin": "D13" }, "to": { "part": "led", "pin": "+" },
              "color": "yellow" }
        ]
    }))
}

#[test]
fn test_full_project_page_order() {
    let pages = render(&night_light());
    assert_eq!(
        kinds(&pages),
        vec![
            PageKind::Cover,
            PageKind::Safety,
            PageKind::HardwareInventory,
            PageKind::PartsInventory,
            PageKind::Step(1),
            PageKind::Step(2),
            PageKind::Step(3),
            PageKind::Step(4),
            PageKind::WiringDiagram,
        ],
        "unexpected page sequence"
    );
}

#[test]
fn test_hardware_only_project_skips_parts_and_wiring_pages() {
    let project = project_from(json!({
        "project": { "name": "Shelf" },
        "parts": {
            "hardware": [ { "id": "H1", "name": "Wood screw", "quantity": 6 } ]
        },
        "steps": [ { "action": "attach", "parts": ["H1"] } ],
        "wiring": [
            { "from": { "part": "a", "pin": "1" }, "to": { "part": "b", "pin": "2" } }
        ]
    }));

    let pages = render(&project);
    assert_eq!(
        kinds(&pages),
        vec![
            PageKind::Cover,
            PageKind::Safety,
            PageKind::HardwareInventory,
            PageKind::Step(1),
        ],
        "no structural/electronic parts means no parts inventory or diagram"
    );
}

#[test]
fn test_every_page_is_a4_on_white() {
    for page in render(&night_light()) {
        assert_eq!(page.size(), Vec2::new(PAGE_W, PAGE_H), "{:?} size", page.kind());
        match page.elements().first() {
            Some(Element::Rect { origin, size, style, .. }) => {
                assert_eq!(*origin, Vec2::ZERO, "{:?} background origin", page.kind());
                assert_eq!(*size, Vec2::new(595.0, 842.0), "{:?} background size", page.kind());
                assert_eq!(style.fill, Some("white"), "{:?} background fill", page.kind());
            }
            other => panic!("{:?} should start with a background rect, got {:?}", page.kind(), other),
        }
    }
}

#[test]
fn test_svg_output_is_well_formed() {
    let open_group = Regex::new(r"<g[ >]").unwrap();
    let size = Regex::new(r#"<svg [^>]*width="595" height="842""#).unwrap();

    for page in render(&night_light()) {
        let svg = page.to_svg();
        assert!(size.is_match(&svg), "{:?} header: {}", page.kind(), &svg[..120.min(svg.len())]);
        assert!(svg.trim_end().ends_with("</svg>"), "{:?} is not closed", page.kind());
        assert_eq!(
            open_group.find_iter(&svg).count(),
            svg.matches("</g>").count(),
            "{:?} has unbalanced groups",
            page.kind()
        );
        assert_eq!(page.to_bytes().len(), svg.len());
    }
}

#[test]
fn test_step_parts_are_spaced_symmetrically() {
    let project = night_light();
    let pages = render(&project);
    let wire_step = &pages[6];
    assert_eq!(wire_step.kind(), PageKind::Step(3));

    let xs: Vec<f32> = ["uno", "pir", "led"]
        .iter()
        .map(|id| {
            wire_step
                .find_group(&format!("part-{}", id))
                .unwrap_or_else(|| panic!("part '{}' not drawn", id))
                .transform
                .translate
                .x
        })
        .collect();
    assert_eq!(xs, vec![157.5, 297.5, 437.5], "three parts at 140 spacing around center");
}

#[test]
fn test_missing_part_degrades_to_label() {
    let project = project_from(json!({
        "project": { "name": "Ghost" },
        "parts": {
            "electronic": [ { "id": "btn", "name": "Button", "component": "button" } ]
        },
        "steps": [ { "action": "place", "parts": ["btn", "ghost"] } ]
    }));

    let pages = render(&project);
    let step = pages.last().unwrap();
    assert_eq!(step.kind(), PageKind::Step(1));
    assert!(step.find_group("part-btn").is_some(), "known part should be drawn");
    assert!(step.find_group("part-ghost").is_none(), "unknown part has no geometry");
    assert!(step.texts().contains(&"ghost"), "unknown part keeps its label");
}

#[test]
fn test_unknown_component_degrades_to_label() {
    let project = project_from(json!({
        "project": { "name": "Warp" },
        "parts": {
            "electronic": [ { "id": "core", "name": "Warp core", "component": "warp_drive" } ]
        },
        "steps": [ { "parts": ["core"] } ]
    }));

    let pages = render(&project);
    let step = pages.last().unwrap();
    assert!(step.find_group("part-core").is_none());
    assert!(step.texts().contains(&"core"));
}

#[test]
fn test_wire_legend_matches_wiring() {
    let project = night_light();
    let pages = render(&project);

    for page in [&pages[6], &pages[8]] {
        let legend = page
            .find_group("wire-legend")
            .unwrap_or_else(|| panic!("{:?} has no legend", page.kind()));
        let swatches: Vec<_> = legend
            .children
            .iter()
            .filter_map(|e| match e {
                Element::Line { style, .. } => style.stroke,
                _ => None,
            })
            .collect();
        let expected: Vec<_> = project.wiring.iter().map(|w| w.color.hex()).collect();
        assert_eq!(swatches, expected, "{:?} legend colors", page.kind());
    }

    assert_eq!(WireColor::Red.hex(), "#e63946");
    assert!(pages[6].texts().iter().any(|t| t.starts_with("power (uno:5V")));
}

#[test]
fn test_step_annotations() {
    let pages = render(&night_light());
    let attach = &pages[5];
    assert_eq!(attach.kind(), PageKind::Step(2));
    assert!(attach.texts().contains(&"\u{d7}4"), "repeat marker missing");

    let callout = attach.find_group("callout-M3").expect("callout should draw the screw");
    assert_eq!(callout.transform.scale, 2.0, "callout magnification");

    let place = &pages[4];
    assert!(place.texts().contains(&"Lay the base flat"));
    assert!(place.find_group("wire-legend").is_none(), "legend only on wire steps");

    let test = &pages[7];
    assert_eq!(test.kind(), PageKind::Step(4));
    assert!(test.texts().contains(&"Works as described"), "test steps show do/don't hints");
    assert!(!place.texts().contains(&"Works as described"));
}

fn floating_fixture() -> Project {
    project_from(json!({
        "project": { "name": "Float" },
        "parts": {
            "electronic": [
                { "id": "a", "name": "Board", "component": "arduino_nano" },
                { "id": "b", "name": "Button", "component": "button" },
                { "id": "c", "name": "Buzzer", "component": "buzzer" }
            ]
        },
        "steps": [
            { "action": "place", "parts": ["a", "b", "c"] },
            { "action": "attach", "parts": ["a", "b", "c"] },
            { "action": "insert", "parts": ["a", "b"] },
            { "action": "wire", "parts": ["a", "c"] }
        ]
    }))
}

fn dashed_arrows(page: &Page) -> usize {
    page.elements()
        .iter()
        .filter(|e| matches!(e, Element::Line { style, .. } if style.dash == Some("6,3")))
        .count()
}

fn part_y(page: &Page, id: &str) -> f32 {
    page.find_group(&format!("part-{}", id))
        .unwrap_or_else(|| panic!("{:?} is missing part '{}'", page.kind(), id))
        .transform
        .translate
        .y
}

#[test]
fn test_place_keeps_every_part_on_the_baseline() {
    let pages = render(&floating_fixture());
    let place = &pages[3];
    assert_eq!(place.kind(), PageKind::Step(1));
    let base = part_y(place, "a");
    for id in ["b", "c"] {
        assert_eq!(part_y(place, id), base, "place must not raise '{}'", id);
    }
    assert_eq!(dashed_arrows(place), 0, "place steps draw no motion arrows");
}

#[test]
fn test_bring_in_actions_raise_later_parts() {
    let pages = render(&floating_fixture());
    for (page, later) in [
        (&pages[4], vec!["b", "c"]),
        (&pages[5], vec!["b"]),
        (&pages[6], vec!["c"]),
    ] {
        let base = part_y(page, "a");
        for id in &later {
            assert_eq!(
                base - part_y(page, id),
                80.0,
                "{:?}: '{}' should float above the first part",
                page.kind(),
                id
            );
        }
        assert_eq!(dashed_arrows(page), later.len(), "{:?}: one arrow per raised part", page.kind());
    }
}

#[test]
fn test_step_group_ids_are_unique() {
    let project = project_from(json!({
        "project": { "name": "Ids" },
        "parts": {
            "structural": [ { "id": "base plate", "name": "Base", "shape": "rect" } ],
            "hardware": [ { "id": "M3", "name": "M3 screw" } ]
        },
        "steps": [
            { "action": "attach", "parts": ["base plate", "M3"], "hardware": ["M3"], "callout": true },
            { "action": "place", "parts": ["M3", "M3"] }
        ]
    }));
    let pages = render(&project);
    let id_attr = Regex::new(r#" id="([^"]+)""#).unwrap();

    for page in &pages {
        let svg = page.to_svg();
        let mut ids: Vec<&str> = id_attr
            .captures_iter(&svg)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "{:?} repeats a group id", page.kind());
        assert!(
            ids.iter().all(|id| !id.contains(' ')),
            "{:?} has an id with a space: {:?}",
            page.kind(),
            ids
        );
    }

    let attach = pages.iter().find(|p| p.kind() == PageKind::Step(1)).unwrap();
    assert!(attach.find_group("part-base_plate").is_some());
    assert!(attach.find_group("part-M3").is_some());
    assert!(attach.find_group("callout-M3").is_some());

    let repeated = pages.last().unwrap();
    assert!(repeated.find_group("part-M3").is_some());
    assert!(repeated.find_group("part-M3-2").is_some());
}

#[test]
fn test_diagram_labels_and_routes() {
    let pages = render(&night_light());
    let diagram = pages.last().unwrap();
    assert_eq!(diagram.kind(), PageKind::WiringDiagram);
    for label in ["uno: Arduino Uno", "pir: Motion sensor", "led: LED"] {
        assert!(diagram.texts().contains(&label), "missing label '{}'", label);
    }
    let routes = diagram
        .elements()
        .iter()
        .filter(|e| matches!(e, Element::Polyline { points, .. } if points.len() == 4))
        .count();
    assert_eq!(routes, 3, "one four-point route per wire");
}

#[test]
fn test_explicit_step_numbers_are_kept() {
    let project = project_from(json!({
        "project": { "name": "Numbered" },
        "steps": [ { "step": 7, "parts": [] }, { "parts": [] } ]
    }));
    let pages = render(&project);
    assert_eq!(
        kinds(&pages),
        vec![PageKind::Cover, PageKind::Safety, PageKind::Step(7), PageKind::Step(2)]
    );
}

#[test]
fn test_invalid_dimensions_abort_the_run() {
    let project = project_from(json!({
        "project": { "name": "Broken" },
        "parts": {
            "structural": [
                { "id": "p", "name": "Plate", "shape": "rect", "dimensions": { "w": -10 } }
            ]
        },
        "steps": []
    }));
    let result = render_manual(&project, &ComponentRegistry::builtin(), &ManualOptions::default());
    assert!(
        matches!(result, Err(Error::InvalidGeometry(_))),
        "expected InvalidGeometry, got {:?}",
        result.map(|p| p.len())
    );
}

#[test]
fn test_safety_page_lists_tools() {
    let pages = render(&night_light());
    let safety = &pages[1];
    assert!(safety.texts().iter().any(|t| t.contains("Phillips screwdriver")));
    assert!(tool_label("laser_cutter").ends_with("laser_cutter"));
}

#[test]
fn test_manual_file_stem() {
    assert_eq!(manual_file_stem("Night Light v2!").unwrap(), "night_light_v2_assembly");
    assert_eq!(manual_file_stem("  --  ").unwrap(), "manual_assembly");
}

#[test]
fn test_generate_manual_writes_one_svg_per_page() {
    let dir = std::env::temp_dir().join("isomanual_test_output");
    let _ = std::fs::remove_dir_all(&dir);

    let project = night_light();
    let written = generate_manual(&project, &dir).expect("manual should be written");
    assert_eq!(written.len(), 9);
    assert!(written[0].ends_with("page_00.svg"));
    assert!(written[8].ends_with("page_08.svg"));

    let cover = std::fs::read_to_string(&written[0]).unwrap();
    assert!(cover.starts_with("<svg"), "cover: {}", &cover[..40.min(cover.len())]);
    assert!(cover.contains("Night Light"));

    let _ = std::fs::remove_dir_all(&dir);
}
