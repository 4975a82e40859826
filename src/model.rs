mod history;

pub use self::history::Invoker;
use crate::common::{Shape, ShapeId};

/// The ordered collection every command operates on.
#[derive(Default, Debug)]
pub struct Canvas {
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|shape| shape.id() == id)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn push(&mut self, shape: Shape) {
        log::trace!("appending shape {}", shape.id());
        self.shapes.push(shape);
    }

    /// Removes the most recently appended shape.
    pub fn pop(&mut self) -> Option<Shape> {
        let shape = self.shapes.pop();
        if let Some(shape) = &shape {
            log::trace!("popped shape {}", shape.id());
        }
        shape
    }

    /// Removes the shape with the given id, keeping the others in order.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id() == id)?;
        log::trace!("removing shape {} at index {}", id, index);
        Some(self.shapes.remove(index))
    }
}
