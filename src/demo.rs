//! Fixed command sequences run by the binary.

use crate::{
    command::{CreateShape, DeleteShape, MoveShape, Status},
    common::Shape,
    model::{Canvas, Invoker},
};
use anyhow::Context as _;
use geo::Coordinate;

fn nth_shape(canvas: &Canvas, index: usize) -> anyhow::Result<&Shape> {
    canvas
        .shapes()
        .get(index)
        .with_context(|| format!("canvas has no shape at index {}", index))
}

/// Creates a circle and a line, moves the circle, deletes the line, then
/// undoes twice and redoes once.
pub fn shapes(mut report: impl FnMut(Status)) -> anyhow::Result<Canvas> {
    let mut canvas = Canvas::new();
    let mut invoker: Invoker = Invoker::new();
    let mut run = |status: Option<Status>| status.into_iter().for_each(&mut report);

    run(invoker.execute(
        &mut canvas,
        CreateShape::new(Shape::circle(100, 100, 20, "blue")),
    ));
    run(invoker.execute(
        &mut canvas,
        CreateShape::new(Shape::line(20, 20, 150, 150, "green")),
    ));
    let com = MoveShape::new(nth_shape(&canvas, 0)?, Coordinate { x: 20, y: 30 });
    run(invoker.execute(&mut canvas, com));
    let com = DeleteShape::new(nth_shape(&canvas, 1)?);
    run(invoker.execute(&mut canvas, com));
    run(invoker.undo(&mut canvas));
    run(invoker.undo(&mut canvas));
    run(invoker.redo(&mut canvas));

    log::debug!(
        "shapes demo finished with {} undoable and {} redoable command(s)",
        invoker.undo_count(),
        invoker.redo_count()
    );
    Ok(canvas)
}

/// Creates a rectangle, moves it, then undoes and redoes the move.
pub fn rectangle(mut report: impl FnMut(Status)) -> anyhow::Result<Canvas> {
    let mut canvas = Canvas::new();
    let mut invoker: Invoker = Invoker::new();
    let mut run = |status: Option<Status>| status.into_iter().for_each(&mut report);

    run(invoker.execute(
        &mut canvas,
        CreateShape::new(Shape::rectangle(10, 10, 50, 30, "red")),
    ));
    let com = MoveShape::new(nth_shape(&canvas, 0)?, Coordinate { x: 20, y: 30 });
    run(invoker.execute(&mut canvas, com));
    run(invoker.undo(&mut canvas));
    run(invoker.redo(&mut canvas));

    Ok(canvas)
}
