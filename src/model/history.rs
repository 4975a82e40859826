use super::Canvas;
use crate::command::{AnyCommand, Command, Status};

/// Applies commands and keeps the linear undo/redo timeline.
#[derive(Debug)]
pub struct Invoker<C = AnyCommand> {
    history: Vec<C>,
    redo_stack: Vec<C>,
}

impl<C> Default for Invoker<C> {
    fn default() -> Self {
        Self {
            history: vec![],
            redo_stack: vec![],
        }
    }
}

impl<C: Command> Invoker<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `com` and records it. This forks the timeline, so anything that
    /// could have been redone is discarded.
    pub fn execute(&mut self, canvas: &mut Canvas, com: impl Into<C>) -> Option<Status> {
        let mut com = com.into();
        let status = com.execute(canvas);
        self.history.push(com);
        if !self.redo_stack.is_empty() {
            log::debug!("dropping {} redoable command(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }
        status
    }

    pub fn undo(&mut self, canvas: &mut Canvas) -> Option<Status> {
        let Some(mut com) = self.history.pop() else {
            log::debug!("nothing to undo");
            return None;
        };
        let status = com.undo(canvas);
        self.redo_stack.push(com);
        status
    }

    pub fn redo(&mut self, canvas: &mut Canvas) -> Option<Status> {
        let Some(mut com) = self.redo_stack.pop() else {
            log::debug!("nothing to redo");
            return None;
        };
        let status = com.execute(canvas);
        self.history.push(com);
        status
    }
}

impl<C> Invoker<C> {
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.redo_stack.clear();
    }
}
