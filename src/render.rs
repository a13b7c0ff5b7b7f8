//! Drawing airfoil geometry into an SVG element.
//!
//! The SVG is expected to already use chord coordinates (e.g. a `viewBox`
//! around `0..1`); the only transform applied here is flipping the vertical
//! axis, since SVG `y` grows downwards.

use itertools::Itertools;
use wasm_bindgen::JsValue;

use crate::point::{unsigned_zero, Point, PointOps};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Class marking the drawn airfoil outline.
pub const AIRFOIL_PATH_CLASS: &str = "airfoil-path";
/// Id of the chord reference line.
pub const CHORD_LINE_ID: &str = "chord";

const AIRFOIL_PATH_SELECTOR: &str = "path.airfoil-path";
const CHORD_LINE_SELECTOR: &str = "line#chord";

const PATH_ATTRIBUTES: [(&str, &str); 3] = [
    ("fill", "rgba(30,136,229,0.15)"),
    ("stroke", "#0d47a1"),
    ("stroke-width", "0.0025"),
];

const CHORD_LINE_ATTRIBUTES: [(&str, &str); 7] = [
    ("x1", "0"),
    ("y1", "0"),
    ("x2", "1"),
    ("y2", "0"),
    ("stroke", "#999"),
    ("stroke-dasharray", "0.01 0.01"),
    ("stroke-width", "0.001"),
];

/// Something an airfoil can be drawn onto.
pub trait DrawingSurface {
    type Error;

    /// Remove every previously drawn airfoil path.
    fn clear_airfoil_paths(&self) -> Result<(), Self::Error>;

    /// Append an airfoil path with description `d`.
    fn append_airfoil_path(&self, d: &str) -> Result<(), Self::Error>;

    /// Whether the chord line is already present.
    fn has_chord_line(&self) -> Result<bool, Self::Error>;

    /// Append the chord line.
    fn append_chord_line(&self) -> Result<(), Self::Error>;
}

/// SVG path description of a closed contour through `points`, mirrored in the
/// chord line. `None` if there are no points.
pub fn path_description(points: &[Point]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let command = |op: char, point: &Point| {
        let [x, y] = point.mirrored();
        format!("{op} {} {}", unsigned_zero(x), unsigned_zero(y))
    };
    Some(
        std::iter::once(command('M', first))
            .chain(rest.iter().map(|point| command('L', point)))
            .chain(std::iter::once("Z".to_owned()))
            .join(" "),
    )
}

/// Replace the airfoil drawn on `surface` with `points`.
///
/// A missing surface or an empty point sequence only logs a warning.
pub fn draw_airfoil<S: DrawingSurface>(
    points: &[Point],
    surface: Option<&S>,
) -> Result<(), S::Error> {
    let Some(surface) = surface else {
        log::warn!("SVG not found (id=foil_svg).");
        return Ok(());
    };

    surface.clear_airfoil_paths()?;

    let Some(d) = path_description(points) else {
        log::warn!("No points to draw.");
        return Ok(());
    };
    surface.append_airfoil_path(&d)?;

    if !surface.has_chord_line()? {
        surface.append_chord_line()?;
    }
    Ok(())
}

impl DrawingSurface for web_sys::Element {
    type Error = JsValue;

    fn clear_airfoil_paths(&self) -> Result<(), JsValue> {
        let paths = self.query_selector_all(AIRFOIL_PATH_SELECTOR)?;
        // the node list is static, so removing while iterating is fine
        for i in 0..paths.length() {
            if let Some(node) = paths.get(i) {
                if let Some(parent) = node.parent_node() {
                    parent.remove_child(&node)?;
                }
            }
        }
        Ok(())
    }

    fn append_airfoil_path(&self, d: &str) -> Result<(), JsValue> {
        let path = svg_element(self, "path")?;
        path.set_attribute("d", d)?;
        path.set_attribute("class", AIRFOIL_PATH_CLASS)?;
        for (name, value) in PATH_ATTRIBUTES {
            path.set_attribute(name, value)?;
        }
        self.append_child(&path)?;
        Ok(())
    }

    fn has_chord_line(&self) -> Result<bool, JsValue> {
        Ok(self.query_selector(CHORD_LINE_SELECTOR)?.is_some())
    }

    fn append_chord_line(&self) -> Result<(), JsValue> {
        let line = svg_element(self, "line")?;
        line.set_attribute("id", CHORD_LINE_ID)?;
        for (name, value) in CHORD_LINE_ATTRIBUTES {
            line.set_attribute(name, value)?;
        }
        self.append_child(&line)?;
        Ok(())
    }
}

fn svg_element(svg: &web_sys::Element, name: &str) -> Result<web_sys::Element, JsValue> {
    let document = svg
        .owner_document()
        .ok_or_else(|| JsValue::from_str("SVG element has no owner document"))?;
    document.create_element_ns(Some(SVG_NAMESPACE), name)
}
