use glam::Vec2;
use imgui::ImColor32;

use crate::theme;

const GRID_HALF_EXTENT: i32 = 10;
const AXIS_LENGTH: f32 = 100.0;
const DEPTH_AXIS: Vec2 = Vec2::new(-50.0, 50.0);
const CUBE_SIZE: f32 = 60.0;
const CUBE_DEPTH_OFFSET: f32 = 20.0;

/// One drawing instruction, in viewport-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Fill {
        min: Vec2,
        max: Vec2,
        color: ImColor32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: ImColor32,
        thickness: f32,
    },
    Outline {
        min: Vec2,
        max: Vec2,
        color: ImColor32,
        thickness: f32,
    },
}

/// Fixed decorative drawing of the viewport: grid, axes and a wire cube.
///
/// Only the cube colour depends on the scene, and only on whether the cube
/// is the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSketch {
    size: Vec2,
    cube_highlighted: bool,
    strokes: Vec<Stroke>,
}

impl ViewportSketch {
    pub fn build(size: Vec2, cube_highlighted: bool, grid_spacing: f32) -> Self {
        let center = size / 2.0;
        let mut strokes = Vec::with_capacity(64);

        strokes.push(Stroke::Fill {
            min: Vec2::ZERO,
            max: size,
            color: theme::VIEWPORT_BACKGROUND,
        });

        for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
            let offset = i as f32 * grid_spacing;
            strokes.push(Stroke::Line {
                from: Vec2::new(center.x + offset, 0.0),
                to: Vec2::new(center.x + offset, size.y),
                color: theme::GRID_LINE,
                thickness: 1.0,
            });
            strokes.push(Stroke::Line {
                from: Vec2::new(0.0, center.y + offset),
                to: Vec2::new(size.x, center.y + offset),
                color: theme::GRID_LINE,
                thickness: 1.0,
            });
        }

        for (direction, color) in [
            (Vec2::new(AXIS_LENGTH, 0.0), theme::AXIS_X),
            (Vec2::new(0.0, -AXIS_LENGTH), theme::AXIS_Y),
            (DEPTH_AXIS, theme::AXIS_Z),
        ] {
            strokes.push(Stroke::Line {
                from: center,
                to: center + direction,
                color,
                thickness: 2.0,
            });
        }

        let wire = if cube_highlighted {
            theme::WIRE_SELECTED
        } else {
            theme::WIRE_DEFAULT
        };

        let half = Vec2::splat(CUBE_SIZE / 2.0);
        let back = Vec2::splat(-CUBE_DEPTH_OFFSET);
        let front_min = center - half;
        let front_max = center + half;

        for offset in [Vec2::ZERO, back] {
            strokes.push(Stroke::Outline {
                min: front_min + offset,
                max: front_max + offset,
                color: wire,
                thickness: 2.0,
            });
        }

        for corner in [
            front_min,
            Vec2::new(front_max.x, front_min.y),
            front_max,
            Vec2::new(front_min.x, front_max.y),
        ] {
            strokes.push(Stroke::Line {
                from: corner,
                to: corner + back,
                color: wire,
                thickness: 2.0,
            });
        }

        Self {
            size,
            cube_highlighted,
            strokes,
        }
    }

    /// Whether this sketch was built for the given inputs.
    pub fn is_current(&self, size: Vec2, cube_highlighted: bool) -> bool {
        self.size == size && self.cube_highlighted == cube_highlighted
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    #[allow(dead_code)]
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_with(sketch: &ViewportSketch, wanted: ImColor32) -> Vec<(Vec2, Vec2)> {
        sketch
            .strokes()
            .iter()
            .filter_map(|stroke| match *stroke {
                Stroke::Line {
                    from, to, color, ..
                } if color == wanted => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_with_background_fill() {
        let size = Vec2::new(800.0, 600.0);
        let sketch = ViewportSketch::build(size, false, 40.0);

        assert_eq!(
            sketch.strokes()[0],
            Stroke::Fill {
                min: Vec2::ZERO,
                max: size,
                color: theme::VIEWPORT_BACKGROUND,
            }
        );
    }

    #[test]
    fn grid_has_twenty_one_lines_each_way() {
        let sketch = ViewportSketch::build(Vec2::new(800.0, 600.0), false, 40.0);
        let grid = lines_with(&sketch, theme::GRID_LINE);

        assert_eq!(grid.len(), 42);
        let vertical = grid.iter().filter(|(from, to)| from.x == to.x).count();
        assert_eq!(vertical, 21);
        assert!(grid.contains(&(Vec2::new(400.0, 0.0), Vec2::new(400.0, 600.0))));
        assert!(grid.contains(&(Vec2::new(0.0, 340.0), Vec2::new(800.0, 340.0))));
    }

    #[test]
    fn axes_leave_from_the_center() {
        let sketch = ViewportSketch::build(Vec2::new(400.0, 400.0), false, 40.0);
        let center = Vec2::new(200.0, 200.0);

        assert_eq!(lines_with(&sketch, theme::AXIS_X), [(center, Vec2::new(300.0, 200.0))]);
        assert_eq!(lines_with(&sketch, theme::AXIS_Y), [(center, Vec2::new(200.0, 100.0))]);
        assert_eq!(lines_with(&sketch, theme::AXIS_Z), [(center, Vec2::new(150.0, 250.0))]);
    }

    #[test]
    fn cube_colour_follows_highlight() {
        let size = Vec2::new(400.0, 400.0);
        let plain = ViewportSketch::build(size, false, 40.0);
        let highlighted = ViewportSketch::build(size, true, 40.0);

        assert_eq!(lines_with(&plain, theme::WIRE_DEFAULT).len(), 4);
        assert!(lines_with(&plain, theme::WIRE_SELECTED).is_empty());
        assert_eq!(lines_with(&highlighted, theme::WIRE_SELECTED).len(), 4);

        let outlines: Vec<_> = highlighted
            .strokes()
            .iter()
            .filter_map(|stroke| match *stroke {
                Stroke::Outline { min, max, .. } => Some((min, max)),
                _ => None,
            })
            .collect();
        assert_eq!(
            outlines,
            [
                (Vec2::new(170.0, 170.0), Vec2::new(230.0, 230.0)),
                (Vec2::new(150.0, 150.0), Vec2::new(210.0, 210.0)),
            ]
        );
    }

    #[test]
    fn currency_tracks_inputs() {
        let size = Vec2::new(640.0, 480.0);
        let sketch = ViewportSketch::build(size, true, 40.0);

        assert!(sketch.is_current(size, true));
        assert!(!sketch.is_current(size, false));
        assert!(!sketch.is_current(Vec2::new(640.0, 481.0), true));
    }
}
