//! Drawing primitives and canvas sinks
//!
//! The layout engine emits a flat, ordered list of [`Primitive`]s; a
//! [`CanvasSink`] receives them in emission order and is responsible for
//! serialization. [`SvgCanvas`] is the shipped sink; [`PrimitiveBuffer`]
//! collects primitives in memory and is what the tests inspect.

use std::io::Write;
use std::path::Path;

use nalgebra::Point2;
use svg::node::element::{Circle as SvgCircle, Line as SvgLine};
use svg::Document;

use crate::style::Color;
use crate::Result;

/// Dimensions of the square drawing canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasDimensions {
    size: f64,
}

impl CanvasDimensions {
    /// Create dimensions for a square canvas of `size` by `size` pixels
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Canvas width in pixels (equal to its height)
    pub fn width(&self) -> f64 {
        self.size
    }

    /// Center of the canvas
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.size / 2.0, self.size / 2.0)
    }
}

/// A single renderable shape with geometry and styling
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point2<f64>,
        radius: f64,
        /// `None` renders as an unfilled circle
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    },
    Line {
        start: Point2<f64>,
        end: Point2<f64>,
        stroke: Color,
        stroke_width: f64,
    },
}

/// Receives primitives in back-to-front emission order
pub trait CanvasSink {
    fn append(&mut self, primitive: Primitive);
}

/// In-memory sink collecting the emitted primitives in order
#[derive(Debug, Default)]
pub struct PrimitiveBuffer {
    primitives: Vec<Primitive>,
}

impl PrimitiveBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl CanvasSink for PrimitiveBuffer {
    fn append(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

/// Sink that builds an SVG document from the emitted primitives
pub struct SvgCanvas {
    document: Document,
}

impl SvgCanvas {
    /// Create an SVG canvas for a square image of `size` pixels
    pub fn new(size: f64) -> Self {
        let document = Document::new()
            .set("width", size)
            .set("height", size)
            .set("viewBox", (0.0, 0.0, size, size));
        Self { document }
    }

    fn push_circle(&mut self, circle: SvgCircle) {
        let document = std::mem::replace(&mut self.document, Document::new());
        self.document = document.add(circle);
    }

    fn push_line(&mut self, line: SvgLine) {
        let document = std::mem::replace(&mut self.document, Document::new());
        self.document = document.add(line);
    }

    /// Serialize the document to a writer
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        svg::write(writer, &self.document)?;
        Ok(())
    }

    /// Write the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        log::info!("writing SVG to {}", path.as_ref().display());
        svg::save(path, &self.document)?;
        Ok(())
    }
}

impl std::fmt::Display for SvgCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.document)
    }
}

impl CanvasSink for SvgCanvas {
    fn append(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
                stroke_width,
            } => {
                let fill = fill.map_or_else(|| "none".to_string(), |c| c.to_string());
                let mut circle = SvgCircle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", radius)
                    .set("fill", fill);
                if let Some(stroke) = stroke {
                    circle = circle
                        .set("stroke", stroke.to_string())
                        .set("stroke-width", stroke_width);
                }
                self.push_circle(circle);
            }
            Primitive::Line {
                start,
                end,
                stroke,
                stroke_width,
            } => {
                let line = SvgLine::new()
                    .set("x1", start.x)
                    .set("y1", start.y)
                    .set("x2", end.x)
                    .set("y2", end.y)
                    .set("stroke", stroke.to_string())
                    .set("stroke-width", stroke_width);
                self.push_line(line);
            }
        }
    }
}
