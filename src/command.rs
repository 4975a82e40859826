use crate::{
    common::{Shape, ShapeId},
    model::Canvas,
};
use derive_more::Display;
use enum_dispatch::enum_dispatch;
use geo::Coordinate;

/// What a command did, in a form fit for a status line.
#[derive(Clone, PartialEq, Debug, Display)]
pub enum Status {
    #[display(fmt = "Created shape: {}", _0)]
    Created(Shape),
    #[display(fmt = "Undid creation of shape: {}", _0)]
    CreationUndone(Shape),
    #[display(fmt = "Moved shape {} by ({}, {})", shape, dx, dy)]
    Moved { shape: Shape, dx: i32, dy: i32 },
    #[display(fmt = "Undid move of shape {}", _0)]
    MoveUndone(Shape),
    #[display(fmt = "Deleted shape: {}", _0)]
    Deleted(Shape),
    #[display(fmt = "Undid deletion of shape: {}", _0)]
    DeletionUndone(Shape),
}

/// A reversible edit of a [`Canvas`].
///
/// Both methods return `None` when there was nothing to act on.
#[enum_dispatch]
pub trait Command {
    fn execute(&mut self, canvas: &mut Canvas) -> Option<Status>;
    fn undo(&mut self, canvas: &mut Canvas) -> Option<Status>;
}

#[enum_dispatch(Command)]
#[derive(Debug)]
pub enum AnyCommand {
    Create(CreateShape),
    Move(MoveShape),
    Delete(DeleteShape),
}

#[derive(Debug)]
pub struct CreateShape {
    shape: Shape,
}

impl CreateShape {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }
}

impl Command for CreateShape {
    fn execute(&mut self, canvas: &mut Canvas) -> Option<Status> {
        canvas.push(self.shape.clone());
        Some(Status::Created(self.shape.clone()))
    }

    /// Drops the canvas's tail, which is only the created shape if nothing
    /// was appended after it.
    fn undo(&mut self, canvas: &mut Canvas) -> Option<Status> {
        let tail = canvas.pop()?;
        if tail.id() == self.shape.id() {
            self.shape = tail;
        } else {
            log::debug!(
                "undoing creation of {} removed another shape {}",
                self.shape.id(),
                tail.id()
            );
        }
        Some(Status::CreationUndone(self.shape.clone()))
    }
}

#[derive(Debug)]
pub struct MoveShape {
    id: ShapeId,
    delta: Coordinate<i32>,
    origin: Coordinate<i32>,
}

impl MoveShape {
    /// The position `shape` has now is what [`Command::undo`] returns it to.
    pub fn new(shape: &Shape, delta: Coordinate<i32>) -> Self {
        Self {
            id: shape.id(),
            delta,
            origin: shape.position(),
        }
    }
}

impl Command for MoveShape {
    fn execute(&mut self, canvas: &mut Canvas) -> Option<Status> {
        let shape = canvas.shape_mut(self.id)?;
        shape.translate(self.delta);
        Some(Status::Moved {
            shape: shape.clone(),
            dx: self.delta.x,
            dy: self.delta.y,
        })
    }

    fn undo(&mut self, canvas: &mut Canvas) -> Option<Status> {
        let shape = canvas.shape_mut(self.id)?;
        shape.set_position(self.origin);
        Some(Status::MoveUndone(shape.clone()))
    }
}

#[derive(Debug)]
pub struct DeleteShape {
    id: ShapeId,
    removed: Option<Shape>,
}

impl DeleteShape {
    pub fn new(shape: &Shape) -> Self {
        Self {
            id: shape.id(),
            removed: None,
        }
    }
}

impl Command for DeleteShape {
    fn execute(&mut self, canvas: &mut Canvas) -> Option<Status> {
        let shape = canvas.remove(self.id)?;
        self.removed = Some(shape.clone());
        Some(Status::Deleted(shape))
    }

    /// Re-inserts at the tail; the original index is not kept.
    fn undo(&mut self, canvas: &mut Canvas) -> Option<Status> {
        let shape = self.removed.take()?;
        canvas.push(shape.clone());
        Some(Status::DeletionUndone(shape))
    }
}
