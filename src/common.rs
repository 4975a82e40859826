use derive_more::{Display, From};
use geo::Coordinate;
use getset::{CopyGetters, Getters};
use std::fmt;
use uuid::Uuid;

/// Free-form color name. Nothing checks that it names a real color.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, From)]
pub struct Color(String);

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn gen() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ShapeKind {
    Rectangle { width: i32, height: i32 },
    Circle { radius: i32 },
    /// A segment from the shape's position to `end`.
    Line { end: Coordinate<i32> },
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle { .. } => "Rectangle",
            ShapeKind::Circle { .. } => "Circle",
            ShapeKind::Line { .. } => "Line",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Getters, CopyGetters)]
pub struct Shape {
    #[getset(get_copy = "pub")]
    id: ShapeId,
    #[getset(get_copy = "pub")]
    position: Coordinate<i32>,
    #[getset(get = "pub")]
    color: Color,
    #[getset(get_copy = "pub")]
    kind: ShapeKind,
}

impl Shape {
    pub fn new(position: Coordinate<i32>, color: impl Into<Color>, kind: ShapeKind) -> Self {
        Self {
            id: ShapeId::gen(),
            position,
            color: color.into(),
            kind,
        }
    }

    pub fn rectangle(x: i32, y: i32, width: i32, height: i32, color: impl Into<Color>) -> Self {
        Self::new(
            Coordinate { x, y },
            color,
            ShapeKind::Rectangle { width, height },
        )
    }

    pub fn circle(x: i32, y: i32, radius: i32, color: impl Into<Color>) -> Self {
        Self::new(Coordinate { x, y }, color, ShapeKind::Circle { radius })
    }

    pub fn line(x1: i32, y1: i32, x2: i32, y2: i32, color: impl Into<Color>) -> Self {
        Self::new(
            Coordinate { x: x1, y: y1 },
            color,
            ShapeKind::Line {
                end: Coordinate { x: x2, y: y2 },
            },
        )
    }

    /// Shifts the anchor point. For lines the far endpoint stays put.
    pub fn translate(&mut self, delta: Coordinate<i32>) {
        self.position = self.position + delta;
    }

    pub fn set_position(&mut self, position: Coordinate<i32>) {
        self.position = position;
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Coordinate { x, y } = self.position;
        write!(f, "{}(x={}, y={}, ", self.kind.name(), x, y)?;
        match self.kind {
            ShapeKind::Rectangle { width, height } => {
                write!(f, "width={}, height={}, ", width, height)?;
            }
            ShapeKind::Circle { radius } => {
                write!(f, "radius={}, ", radius)?;
            }
            ShapeKind::Line { end } => {
                write!(f, "x2={}, y2={}, ", end.x, end.y)?;
            }
        }
        write!(f, "color={})", self.color)
    }
}
