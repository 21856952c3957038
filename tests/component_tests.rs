use glam::{Vec2, Vec3};
use isomanual_rs::{
    components::{Dimensions, RenderOptions},
    error::Error,
    projection::{FaceColors, iso_box, iso_point, project},
    registry::{Capabilities, ComponentFamily, ComponentRegistry},
    svg_models::{Element, Group, PageKind},
};

const EPS: f32 = 1e-4;

#[test]
fn test_projection_of_unit_axes() {
    let x = project(Vec3::X);
    let y = project(Vec3::Y);
    let z = project(Vec3::Z);
    let (cos30, sin30) = (30f32.to_radians().cos(), 30f32.to_radians().sin());

    assert!((x - Vec2::new(cos30, sin30)).length() < EPS, "x axis projected to {:?}", x);
    assert!((y - Vec2::new(-cos30, sin30)).length() < EPS, "y axis projected to {:?}", y);
    assert!((z - Vec2::new(0.0, -1.0)).length() < EPS, "z axis projected to {:?}", z);
    assert_eq!(project(Vec3::ZERO), Vec2::ZERO, "origin should stay at the origin");
}

#[test]
fn test_projection_is_deterministic_and_linear() {
    let p = Vec3::new(12.5, -3.0, 7.25);
    assert_eq!(project(p), project(p), "same input must give bit-identical output");
    assert_eq!(project(p), iso_point(p.x, p.y, p.z), "iso_point is project on scalars");

    let q = Vec3::new(-1.0, 4.0, 2.0);
    let sum = project(p + q);
    let parts = project(p) + project(q);
    assert!((sum - parts).length() < EPS, "projection should be linear");
}

#[test]
fn test_iso_box_draws_three_faces() {
    let mut group = Group::new();
    iso_box(
        &mut group,
        Vec3::ZERO,
        Vec3::new(10.0, 6.0, 2.0),
        FaceColors::new("#top", "#right", "#front"),
    );
    let polygons: Vec<_> = group
        .children
        .iter()
        .filter(|e| matches!(e, Element::Polygon { .. }))
        .collect();
    assert_eq!(polygons.len(), 3, "a box is three visible faces");
}

#[test]
fn test_registry_has_every_builtin_component() {
    let registry = ComponentRegistry::builtin();
    assert_eq!(registry.len(), 31, "unexpected component count");
    for name in [
        "arduino_uno",
        "esp32",
        "pir_sensor",
        "led_rgb",
        "lcd_16x2",
        "usb_cable",
        "breadboard_mini",
        "screw_phillips",
        "adhesive_strip",
        "enclosure_box",
    ] {
        assert!(registry.contains(name), "missing component '{}'", name);
    }

    let names = registry.names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted, "names() should be sorted");

    assert_eq!(
        registry.by_family(ComponentFamily::Hardware).len(),
        6,
        "hardware family size"
    );
}

#[test]
fn test_every_component_reports_its_default_footprint() {
    let registry = ComponentRegistry::builtin();
    for name in registry.names() {
        let mut group = Group::new();
        let footprint = registry
            .render(name, &mut group, Vec2::ZERO, RenderOptions::default())
            .unwrap_or_else(|e| panic!("rendering '{}' failed: {}", name, e));
        let descriptor = registry.descriptor(name).unwrap();

        assert!(
            footprint.w > 0.0 && footprint.h > 0.0 && footprint.d > 0.0,
            "'{}' returned an empty footprint {:?}",
            name,
            footprint
        );
        assert_eq!(
            footprint, descriptor.default_footprint,
            "'{}' footprint disagrees with its descriptor",
            name
        );
        assert!(!group.is_empty(), "'{}' drew nothing", name);
    }
}

#[test]
fn test_unknown_component_lists_available_names() {
    let registry = ComponentRegistry::builtin();
    let err = registry
        .render("flux_capacitor", &mut Group::new(), Vec2::ZERO, RenderOptions::default())
        .unwrap_err();

    match &err {
        Error::UnknownComponent { name, available } => {
            assert_eq!(name, "flux_capacitor");
            assert_eq!(available.len(), registry.len(), "every name should be listed");
        }
        other => panic!("expected UnknownComponent, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("flux_capacitor"), "message: {}", message);
    assert!(message.contains("arduino_uno"), "message: {}", message);
}

#[test]
fn test_unsupported_options_are_dropped() {
    let registry = ComponentRegistry::builtin();
    let requested = RenderOptions::default()
        .show_pins(false)
        .scale(3.0)
        .dimensions(Dimensions {
            w: Some(100.0),
            ..Default::default()
        });

    let screw = registry.descriptor("screw_phillips").unwrap();
    assert_eq!(screw.capabilities, Capabilities::SCALE);
    let accepted = screw.accept(requested);
    assert_eq!(accepted.scale, Some(3.0));
    assert_eq!(accepted.show_pins, None, "screws have no pins");
    assert_eq!(accepted.dimensions, None, "screws are not parametric");

    // Scale only affects components that honor it.
    let led = registry
        .render("led_single", &mut Group::new(), Vec2::ZERO, requested)
        .unwrap();
    assert_eq!(led, registry.descriptor("led_single").unwrap().default_footprint);

    let screw_fp = registry
        .render("screw_phillips", &mut Group::new(), Vec2::ZERO, requested)
        .unwrap();
    assert!((screw_fp.w - 24.0).abs() < EPS, "scaled screw width {}", screw_fp.w);
}

#[test]
fn test_structural_dimensions_override_defaults() {
    let registry = ComponentRegistry::builtin();
    let dims = Dimensions {
        w: Some(120.0),
        h: None,
        d: Some(5.0),
    };
    let fp = registry
        .render(
            "rect",
            &mut Group::new(),
            Vec2::ZERO,
            RenderOptions::default().dimensions(dims),
        )
        .unwrap();
    assert_eq!((fp.w, fp.h, fp.d), (120.0, 50.0, 5.0), "missing axes fall back to defaults");

    let bad = Dimensions {
        w: Some(-1.0),
        ..Default::default()
    };
    let err = registry
        .render(
            "rect",
            &mut Group::new(),
            Vec2::ZERO,
            RenderOptions::default().dimensions(bad),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry(_)), "got {:?}", err);
}

#[test]
fn test_non_positive_scale_is_rejected() {
    let registry = ComponentRegistry::builtin();
    for scale in [0.0, -2.0, f32::NAN, f32::INFINITY] {
        let result = registry.render(
            "screw_phillips",
            &mut Group::new(),
            Vec2::ZERO,
            RenderOptions::default().scale(scale),
        );
        assert!(
            matches!(result, Err(Error::InvalidGeometry(_))),
            "scale {} should be rejected, got {:?}",
            scale,
            result
        );
    }

    // Ignored options are not validated.
    let led = registry.render(
        "led_single",
        &mut Group::new(),
        Vec2::ZERO,
        RenderOptions::default().scale(f32::NAN),
    );
    assert!(led.is_ok(), "led ignores scale, got {:?}", led);
}

#[test]
fn test_non_finite_center_is_rejected() {
    let registry = ComponentRegistry::builtin();
    let err = registry
        .render(
            "button",
            &mut Group::new(),
            Vec2::new(f32::NAN, 0.0),
            RenderOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry(_)), "got {:?}", err);
}

#[test]
fn test_preview_page_respects_show_pins() {
    let registry = ComponentRegistry::builtin();

    let with_pins = registry.render_preview("arduino_nano", true).unwrap();
    assert_eq!(with_pins.kind(), PageKind::ComponentPreview);
    assert_eq!(with_pins.size(), Vec2::new(300.0, 250.0));
    assert!(with_pins.find_group("component-arduino_nano").is_some());
    assert!(with_pins.texts().contains(&"D13"), "pin labels should be drawn");
    assert!(with_pins.texts().contains(&"arduino_nano"), "name label missing");

    let without = registry.render_preview("arduino_nano", false).unwrap();
    assert!(!without.texts().contains(&"D13"), "pin labels should be hidden");

    assert!(registry.render_preview("nope", true).is_err());
}
