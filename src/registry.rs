// src/registry.rs

use crate::components::{
    Footprint, RenderFn, RenderOptions, connectivity, hardware, microcontrollers, outputs, power,
    sensors, structural,
};
use crate::error::{Error, Result};
use crate::svg_models::{Anchor, Canvas, Element, FONT_SANS, Group, Page, PageKind, TextStyle};
use glam::Vec2;
use log::debug;
use std::collections::BTreeMap;

const PREVIEW_SIZE: Vec2 = Vec2::new(300.0, 250.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentFamily {
    Microcontroller,
    Sensor,
    Output,
    Power,
    Connectivity,
    Hardware,
    Structural,
}

/// Which optional render parameters a component honors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub show_pins: bool,
    pub scale: bool,
    pub dimensions: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        show_pins: false,
        scale: false,
        dimensions: false,
    };
    pub const PINS: Capabilities = Capabilities {
        show_pins: true,
        ..Capabilities::NONE
    };
    pub const SCALE: Capabilities = Capabilities {
        scale: true,
        ..Capabilities::NONE
    };
    pub const DIMENSIONS: Capabilities = Capabilities {
        dimensions: true,
        ..Capabilities::NONE
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentDescriptor {
    pub name: &'static str,
    pub family: ComponentFamily,
    pub capabilities: Capabilities,
    pub default_footprint: Footprint,
}

impl ComponentDescriptor {
    /// Drops every requested option this component does not honor.
    pub fn accept(&self, requested: RenderOptions) -> RenderOptions {
        let caps = self.capabilities;
        RenderOptions {
            show_pins: requested.show_pins.filter(|_| caps.show_pins),
            scale: requested.scale.filter(|_| caps.scale),
            dimensions: requested.dimensions.filter(|_| caps.dimensions),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry {
    pub descriptor: ComponentDescriptor,
    render_fn: RenderFn,
}

macro_rules! component {
    ($name:literal, $family:ident, $caps:ident, ($w:expr, $h:expr, $d:expr), $render:path) => {
        ComponentEntry {
            descriptor: ComponentDescriptor {
                name: $name,
                family: ComponentFamily::$family,
                capabilities: Capabilities::$caps,
                default_footprint: Footprint::new($w, $h, $d),
            },
            render_fn: $render,
        }
    };
}

fn builtin_components() -> Vec<ComponentEntry> {
    vec![
        component!("arduino_uno", Microcontroller, PINS, (69.0, 53.0, 5.0), microcontrollers::arduino_uno),
        component!("arduino_nano", Microcontroller, PINS, (45.0, 18.0, 4.0), microcontrollers::arduino_nano),
        component!("esp32", Microcontroller, PINS, (51.0, 26.0, 4.0), microcontrollers::esp32),
        component!("raspberry_pi_pico", Microcontroller, PINS, (51.0, 21.0, 3.0), microcontrollers::raspberry_pi_pico),
        component!("pir_sensor", Sensor, PINS, (32.0, 24.0, 8.0), sensors::pir_sensor),
        component!("ultrasonic_sensor", Sensor, PINS, (45.0, 20.0, 6.0), sensors::ultrasonic_sensor),
        component!("dht11_temp", Sensor, PINS, (32.0, 14.0, 8.0), sensors::dht11_temp),
        component!("photoresistor", Sensor, PINS, (32.0, 14.0, 4.0), sensors::photoresistor),
        component!("button", Sensor, PINS, (32.0, 14.0, 4.0), sensors::button),
        component!("potentiometer", Sensor, PINS, (16.0, 16.0, 10.0), sensors::potentiometer),
        component!("led_single", Output, PINS, (5.0, 5.0, 11.0), outputs::led_single),
        component!("led_rgb", Output, PINS, (8.0, 5.0, 11.0), outputs::led_rgb),
        component!("servo_motor", Output, PINS, (23.0, 12.0, 22.0), outputs::servo_motor),
        component!("relay_module", Output, PINS, (50.0, 26.0, 10.0), outputs::relay_module),
        component!("buzzer", Output, PINS, (18.0, 18.0, 6.0), outputs::buzzer),
        component!("lcd_16x2", Output, PINS, (80.0, 36.0, 8.0), outputs::lcd_16x2),
        component!("battery_holder_4aa", Power, PINS, (62.0, 58.0, 15.0), power::battery_holder_4aa),
        component!("usb_cable", Power, NONE, (45.0, 8.0, 5.0), power::usb_cable),
        component!("dc_barrel_jack", Power, PINS, (14.0, 9.0, 6.0), power::dc_barrel_jack),
        component!("breadboard_half", Connectivity, NONE, (83.0, 55.0, 3.0), connectivity::breadboard_half),
        component!("breadboard_mini", Connectivity, NONE, (47.0, 35.0, 3.0), connectivity::breadboard_mini),
        component!("screw_phillips", Hardware, SCALE, (8.0, 8.0, 11.0), hardware::screw_phillips),
        component!("screw_hex", Hardware, SCALE, (8.0, 8.0, 11.0), hardware::screw_hex),
        component!("nut", Hardware, SCALE, (8.0, 8.0, 3.0), hardware::nut),
        component!("wall_anchor", Hardware, SCALE, (6.0, 6.0, 15.0), hardware::wall_anchor),
        component!("cable_tie", Hardware, SCALE, (24.0, 12.0, 2.0), hardware::cable_tie),
        component!("adhesive_strip", Hardware, SCALE, (30.0, 6.0, 1.0), hardware::adhesive_strip),
        component!("rect", Structural, DIMENSIONS, (80.0, 50.0, 3.0), structural::rect),
        component!("l_bracket", Structural, DIMENSIONS, (30.0, 30.0, 3.0), structural::l_bracket),
        component!("standoff", Structural, DIMENSIONS, (6.0, 6.0, 10.0), structural::standoff),
        component!("enclosure_box", Structural, DIMENSIONS, (60.0, 40.0, 20.0), structural::enclosure_box),
    ]
}

/// Immutable name → component table. Build once and share by reference.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    entries: BTreeMap<&'static str, ComponentEntry>,
}

impl ComponentRegistry {
    pub fn builtin() -> Self {
        let entries: BTreeMap<_, _> = builtin_components()
            .into_iter()
            .map(|entry| (entry.descriptor.name, entry))
            .collect();
        debug!("Component registry built with {} entries", entries.len());
        ComponentRegistry { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn by_family(&self, family: ComponentFamily) -> Vec<&'static str> {
        self.entries
            .values()
            .filter(|entry| entry.descriptor.family == family)
            .map(|entry| entry.descriptor.name)
            .collect()
    }

    pub fn get(&self, name: &str) -> Result<&ComponentEntry> {
        self.entries.get(name).ok_or_else(|| Error::UnknownComponent {
            name: name.to_string(),
            available: self.names().into_iter().map(String::from).collect(),
        })
    }

    pub fn descriptor(&self, name: &str) -> Result<&ComponentDescriptor> {
        self.get(name).map(|entry| &entry.descriptor)
    }

    /// Looks up `name` and renders it at `center`.
    ///
    /// Fails on an unknown name, a non-finite center, or a non-positive scale
    /// or dimension override the component would honor.
    pub fn render(
        &self,
        name: &str,
        canvas: &mut dyn Canvas,
        center: Vec2,
        requested: RenderOptions,
    ) -> Result<Footprint> {
        let entry = self.get(name)?;
        if !center.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "center {:?} for component '{}' is not finite",
                center, name
            )));
        }
        let opts = entry.descriptor.accept(requested);
        if let Some(scale) = opts.scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(Error::InvalidGeometry(format!(
                    "scale {} for component '{}' must be positive",
                    scale, name
                )));
            }
        }
        if let Some(dims) = opts.dimensions {
            if !dims.is_valid() {
                return Err(Error::InvalidGeometry(format!(
                    "dimensions {:?} for component '{}' must be positive",
                    dims, name
                )));
            }
        }
        debug!("Rendering '{}' with {:?}", name, opts);
        Ok((entry.render_fn)(canvas, center, &opts))
    }

    /// Renders one component on its own small page, name underneath.
    pub fn render_preview(&self, name: &str, show_pins: bool) -> Result<Page> {
        let mut page = Page::centered(PageKind::ComponentPreview, PREVIEW_SIZE);
        let mut group = Group::new().with_id(format!("component-{}", name));
        self.render(
            name,
            &mut group,
            Vec2::ZERO,
            RenderOptions::default().show_pins(show_pins),
        )?;
        page.push(Element::Group(group));
        page.push(Element::text(
            name,
            Vec2::new(0.0, PREVIEW_SIZE.y / 2.0 - 15.0),
            TextStyle::new(12.0, FONT_SANS)
                .fill("#333")
                .anchor(Anchor::Middle),
        ));
        Ok(page)
    }
}
