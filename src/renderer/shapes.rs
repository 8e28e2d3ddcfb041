//! Shape generation for 2D primitives
//!
//! Everything is built from axis-aligned quads in canvas pixels.

use glam::Vec2;

use super::scene::{DrawCommand, Scene};
use super::vertex::Vertex;
use crate::color::Rgba;
use crate::sim::Rect;

/// Two triangles covering `min..max`, with separate top and bottom colors
fn quad(min: Vec2, max: Vec2, top: Rgba, bottom: Rgba, out: &mut Vec<Vertex>) {
    if max.x <= min.x || max.y <= min.y {
        return;
    }
    out.push(Vertex::new(min.x, min.y, top));
    out.push(Vertex::new(min.x, max.y, bottom));
    out.push(Vertex::new(max.x, min.y, top));

    out.push(Vertex::new(max.x, min.y, top));
    out.push(Vertex::new(min.x, max.y, bottom));
    out.push(Vertex::new(max.x, max.y, bottom));
}

/// Generate vertices for a filled rectangle
pub fn fill_rect(rect: &Rect, out: &mut Vec<Vertex>) {
    let min = rect.origin();
    quad(min, min + rect.size(), rect.color, rect.color, out);
}

/// Generate vertices for a rectangle outline centered on its edges
pub fn stroke_rect(rect: &Rect, line_width: f32, out: &mut Vec<Vertex>) {
    let half = line_width / 2.0;
    let min = rect.origin();
    let max = min + rect.size();
    let c = rect.color;

    // Top and bottom bars span the full outer width
    quad(
        Vec2::new(min.x - half, min.y - half),
        Vec2::new(max.x + half, min.y + half),
        c,
        c,
        out,
    );
    quad(
        Vec2::new(min.x - half, max.y - half),
        Vec2::new(max.x + half, max.y + half),
        c,
        c,
        out,
    );
    // Sides fill the gap between them
    quad(
        Vec2::new(min.x - half, min.y + half),
        Vec2::new(min.x + half, max.y - half),
        c,
        c,
        out,
    );
    quad(
        Vec2::new(max.x - half, min.y + half),
        Vec2::new(max.x + half, max.y - half),
        c,
        c,
        out,
    );
}

/// Tessellate every shape command of a scene, back to front
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.commands.len() * 12);

    for command in scene.shapes() {
        match command {
            DrawCommand::Gradient {
                x,
                y,
                width,
                height,
                top,
                bottom,
            } => {
                let min = Vec2::new(*x, *y);
                quad(min, min + Vec2::new(*width, *height), *top, *bottom, &mut vertices);
            }
            DrawCommand::Fill(rect) => fill_rect(rect, &mut vertices),
            DrawCommand::Stroke { rect, line_width } => {
                stroke_rect(rect, *line_width, &mut vertices)
            }
            DrawCommand::Text { .. } => {}
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h, [1.0, 0.0, 0.0, 1.0])
    }

    #[test]
    fn test_fill_rect_corners() {
        let mut out = Vec::new();
        fill_rect(&rect(10.0, 20.0, 30.0, 40.0), &mut out);
        assert_eq!(out.len(), 6);

        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        let mut out = Vec::new();
        fill_rect(&rect(10.0, 20.0, 0.0, 40.0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_stroke_is_four_bars() {
        let mut out = Vec::new();
        stroke_rect(&rect(0.0, 0.0, 100.0, 30.0), 2.0, &mut out);
        assert_eq!(out.len(), 24);
    }

    #[test]
    fn test_gradient_colors_by_row() {
        let scene = Scene {
            commands: vec![
                DrawCommand::Gradient {
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 10.0,
                    top: [1.0, 0.0, 0.0, 1.0],
                    bottom: [0.0, 0.0, 1.0, 1.0],
                },
                DrawCommand::Text {
                    text: "Score: 0".into(),
                    x: 0.0,
                    y: 0.0,
                    size: 12.0,
                    color: [0.0; 4],
                },
            ],
            scroll: 0.0,
        };
        let out = tessellate(&scene);
        assert_eq!(out.len(), 6);
        for v in &out {
            if v.position[1] == 0.0 {
                assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
            } else {
                assert_eq!(v.color, [0.0, 0.0, 1.0, 1.0]);
            }
        }
    }
}
