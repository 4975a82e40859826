use geo::Coordinate;
use papirs_commands::{
    demo, AnyCommand, Canvas, Command, CreateShape, DeleteShape, Invoker, MoveShape, Shape,
    ShapeKind,
};
use pretty_assertions::assert_eq;

fn kinds(canvas: &Canvas) -> Vec<&'static str> {
    canvas.shapes().iter().map(|shape| shape.kind().name()).collect()
}

#[test]
fn shapes_demo_reports_every_action() {
    let mut lines = vec![];
    let canvas = demo::shapes(|status| lines.push(status.to_string())).unwrap();

    assert_eq!(
        lines,
        [
            "Created shape: Circle(x=100, y=100, radius=20, color=blue)",
            "Created shape: Line(x=20, y=20, x2=150, y2=150, color=green)",
            "Moved shape Circle(x=120, y=130, radius=20, color=blue) by (20, 30)",
            "Deleted shape: Line(x=20, y=20, x2=150, y2=150, color=green)",
            "Undid deletion of shape: Line(x=20, y=20, x2=150, y2=150, color=green)",
            "Undid move of shape Circle(x=100, y=100, radius=20, color=blue)",
            "Moved shape Circle(x=120, y=130, radius=20, color=blue) by (20, 30)",
        ]
    );
    assert_eq!(kinds(&canvas), ["Circle", "Line"]);
    assert_eq!(canvas.shapes()[0].position(), Coordinate { x: 120, y: 130 });
}

#[test]
fn rectangle_demo_redoes_the_move() {
    let mut lines = vec![];
    let canvas = demo::rectangle(|status| lines.push(status.to_string())).unwrap();

    assert_eq!(
        lines,
        [
            "Created shape: Rectangle(x=10, y=10, width=50, height=30, color=red)",
            "Moved shape Rectangle(x=30, y=40, width=50, height=30, color=red) by (20, 30)",
            "Undid move of shape Rectangle(x=10, y=10, width=50, height=30, color=red)",
            "Moved shape Rectangle(x=30, y=40, width=50, height=30, color=red) by (20, 30)",
        ]
    );
    assert_eq!(canvas.len(), 1);
}

#[test]
fn shapes_scenario_step_by_step() {
    let mut canvas = Canvas::new();
    let mut invoker: Invoker = Invoker::new();
    let circle = Shape::circle(100, 100, 20, "blue");
    let line = Shape::line(20, 20, 150, 150, "green");
    let (circle_id, line_id) = (circle.id(), line.id());
    let position = |canvas: &Canvas| canvas.shape(circle_id).map(Shape::position);

    invoker.execute(&mut canvas, CreateShape::new(circle));
    invoker.execute(&mut canvas, CreateShape::new(line));
    let com = MoveShape::new(&canvas.shapes()[0], Coordinate { x: 20, y: 30 });
    invoker.execute(&mut canvas, com);
    assert_eq!(position(&canvas), Some(Coordinate { x: 120, y: 130 }));

    let com = DeleteShape::new(&canvas.shapes()[1]);
    invoker.execute(&mut canvas, com);
    assert_eq!(kinds(&canvas), ["Circle"]);
    assert_eq!(invoker.undo_count(), 4);
    assert!(!invoker.can_redo());

    invoker.undo(&mut canvas);
    assert_eq!(canvas.len(), 2);
    assert!(canvas.contains(line_id));

    invoker.undo(&mut canvas);
    assert_eq!(position(&canvas), Some(Coordinate { x: 100, y: 100 }));

    invoker.redo(&mut canvas);
    assert_eq!(position(&canvas), Some(Coordinate { x: 120, y: 130 }));
    assert!(canvas.contains(line_id));
    assert_eq!((invoker.undo_count(), invoker.redo_count()), (3, 1));
}

#[test]
fn redo_undo_redo_lands_on_the_same_position() {
    let mut canvas = Canvas::new();
    let mut invoker: Invoker = Invoker::new();
    let shape = Shape::rectangle(10, 10, 50, 30, "red");
    let id = shape.id();
    invoker.execute(&mut canvas, CreateShape::new(shape));
    let com = MoveShape::new(&canvas.shapes()[0], Coordinate { x: -5, y: 7 });
    invoker.execute(&mut canvas, com);
    invoker.undo(&mut canvas);

    invoker.redo(&mut canvas);
    let once = canvas.shape(id).map(Shape::position);
    invoker.undo(&mut canvas);
    invoker.redo(&mut canvas);
    assert_eq!(canvas.shape(id).map(Shape::position), once);
    assert_eq!(once, Some(Coordinate { x: 5, y: 17 }));
}

#[test]
fn history_length_tracks_executes_since_last_fork() {
    let mut canvas = Canvas::new();
    let mut invoker: Invoker = Invoker::new();
    for n in 0..5 {
        invoker.execute(&mut canvas, CreateShape::new(Shape::circle(n, n, 1, "black")));
        assert_eq!(invoker.undo_count(), n as usize + 1);
        assert_eq!(invoker.redo_count(), 0);
    }

    invoker.undo(&mut canvas);
    invoker.undo(&mut canvas);
    invoker.execute(&mut canvas, CreateShape::new(Shape::circle(9, 9, 1, "black")));
    assert_eq!((invoker.undo_count(), invoker.redo_count()), (4, 0));
    assert_eq!(canvas.len(), 4);
}

#[test]
fn undoing_a_create_after_another_append_removes_the_wrong_shape() {
    let mut canvas = Canvas::new();
    let mut invoker = Invoker::<AnyCommand>::new();
    let first = Shape::circle(0, 0, 5, "red");
    let first_id = first.id();
    invoker.execute(&mut canvas, CreateShape::new(first));

    // A delete + undo moves the earlier shape behind the one created last.
    let second = Shape::rectangle(1, 1, 2, 2, "green");
    let second_id = second.id();
    invoker.execute(&mut canvas, CreateShape::new(second));
    let mut detour = DeleteShape::new(canvas.shape(first_id).unwrap());
    detour.execute(&mut canvas);
    detour.undo(&mut canvas);
    assert_eq!(
        canvas.shapes().iter().map(Shape::id).collect::<Vec<_>>(),
        [second_id, first_id]
    );

    // Undoing the rectangle's creation pops the tail, which is the circle.
    invoker.undo(&mut canvas);
    assert!(canvas.contains(second_id));
    assert!(!canvas.contains(first_id));
    assert!(matches!(
        canvas.shapes()[0].kind(),
        ShapeKind::Rectangle { .. }
    ));
}
