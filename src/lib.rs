pub mod command;
pub mod common;
pub mod demo;
pub mod model;

pub use crate::{
    command::{AnyCommand, Command, CreateShape, DeleteShape, MoveShape, Status},
    common::{Color, Shape, ShapeId, ShapeKind},
    model::{Canvas, Invoker},
};
