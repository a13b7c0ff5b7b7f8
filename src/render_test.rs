use std::cell::RefCell;
use std::convert::Infallible;

use super::*;

/// Keeps the drawn elements as plain strings.
#[derive(Default)]
struct FakeSurface {
    paths: RefCell<Vec<String>>,
    chord_lines: RefCell<usize>,
    cleared: RefCell<usize>,
}

impl DrawingSurface for FakeSurface {
    type Error = Infallible;

    fn clear_airfoil_paths(&self) -> Result<(), Infallible> {
        self.paths.borrow_mut().clear();
        *self.cleared.borrow_mut() += 1;
        Ok(())
    }

    fn append_airfoil_path(&self, d: &str) -> Result<(), Infallible> {
        self.paths.borrow_mut().push(d.to_owned());
        Ok(())
    }

    fn has_chord_line(&self) -> Result<bool, Infallible> {
        Ok(*self.chord_lines.borrow() > 0)
    }

    fn append_chord_line(&self) -> Result<(), Infallible> {
        *self.chord_lines.borrow_mut() += 1;
        Ok(())
    }
}

fn triangle() -> Vec<Point> {
    vec![[1.0, 0.0], [0.5, 0.06], [0.0, 0.0], [0.5, -0.04]]
}

// =============================================================
// path_description
// =============================================================

#[test]
fn path_starts_with_move_and_ends_with_close() {
    let d = path_description(&triangle()).unwrap();
    assert!(d.starts_with("M 1 0 "), "{d}");
    assert!(d.ends_with('Z'), "{d}");
}

#[test]
fn path_negates_vertical_coordinates() {
    let d = path_description(&triangle()).unwrap();
    assert_eq!(d, "M 1 0 L 0.5 -0.06 L 0 0 L 0.5 0.04 Z");
}

#[test]
fn path_has_one_line_per_remaining_point() {
    let points = triangle();
    let d = path_description(&points).unwrap();
    let lines = d.split(' ').filter(|token| *token == "L").count();
    assert_eq!(lines, points.len() - 1);
}

#[test]
fn path_of_single_point() {
    assert_eq!(
        path_description(&[[0.25, 0.5]]).as_deref(),
        Some("M 0.25 -0.5 Z")
    );
}

#[test]
fn path_of_nothing() {
    assert_eq!(path_description(&[]), None);
}

// =============================================================
// draw_airfoil
// =============================================================

#[test]
fn draw_adds_path_and_chord_line() {
    let surface = FakeSurface::default();
    draw_airfoil(&triangle(), Some(&surface)).unwrap();
    assert_eq!(surface.paths.borrow().len(), 1);
    assert_eq!(*surface.chord_lines.borrow(), 1);
}

#[test]
fn redraw_replaces_previous_path() {
    let surface = FakeSurface::default();
    draw_airfoil(&triangle(), Some(&surface)).unwrap();
    draw_airfoil(&[[0.0, 0.0], [1.0, 0.1]], Some(&surface)).unwrap();

    let paths = surface.paths.borrow();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0], "M 0 0 L 1 -0.1 Z");
}

#[test]
fn chord_line_is_drawn_once() {
    let surface = FakeSurface::default();
    for _ in 0..3 {
        draw_airfoil(&triangle(), Some(&surface)).unwrap();
    }
    assert_eq!(*surface.chord_lines.borrow(), 1);
}

#[test]
fn empty_points_clear_and_draw_nothing() {
    let surface = FakeSurface::default();
    draw_airfoil(&triangle(), Some(&surface)).unwrap();
    draw_airfoil(&[], Some(&surface)).unwrap();
    assert!(surface.paths.borrow().is_empty());
    assert_eq!(*surface.cleared.borrow(), 2);
}

#[test]
fn missing_surface_is_tolerated() {
    assert_eq!(draw_airfoil::<FakeSurface>(&triangle(), None), Ok(()));
}
