use crate::canvas::Canvas;

/// Undo/redo history made of whole-canvas snapshots.
///
/// Snapshots are taken once per gesture, not per painted cell, so the
/// O(width * height) copy is paid at gesture frequency.
#[derive(Debug, Default)]
pub struct History {
    /// Canvas states that can be restored by undo
    undo_stack: Vec<Canvas>,
    /// Canvas states that can be restored by redo
    redo_stack: Vec<Canvas>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current canvas before it gets mutated.
    ///
    /// Invalidates everything that could have been redone.
    pub fn snapshot(&mut self, canvas: &Canvas) {
        self.undo_stack.push(canvas.clone());
        self.redo_stack.clear();
    }

    /// Restore the most recent snapshot. Returns false if there was nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                self.redo_stack.push(std::mem::replace(canvas, previous));
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone state. Returns false if there was nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                self.undo_stack.push(std::mem::replace(canvas, next));
                true
            }
            None => false,
        }
    }

    /// Returns true if there are states that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are states that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop both stacks, e.g. after the canvas dimensions changed
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Cell, GridPos};
    use crate::color::Rgb;

    fn paint(canvas: &mut Canvas, x: usize, y: usize) {
        canvas.set(GridPos::new(x, y), Cell::Color(Rgb::RED));
    }

    #[test]
    fn test_undo_restores_snapshot() {
        let mut canvas = Canvas::new(4, 4);
        let mut history = History::new();

        history.snapshot(&canvas);
        paint(&mut canvas, 1, 1);

        assert!(history.undo(&mut canvas));
        assert!(canvas.is_blank());
        assert!(history.can_redo());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut canvas = Canvas::new(4, 4);
        let mut history = History::new();

        history.snapshot(&canvas);
        paint(&mut canvas, 0, 0);
        history.snapshot(&canvas);
        paint(&mut canvas, 3, 3);
        let before_undo = canvas.clone();

        history.undo(&mut canvas);
        assert_ne!(canvas, before_undo);
        history.redo(&mut canvas);
        assert_eq!(canvas, before_undo);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut canvas = Canvas::new(2, 2);
        paint(&mut canvas, 0, 1);
        let expected = canvas.clone();
        let mut history = History::new();

        assert!(!history.undo(&mut canvas));
        assert!(!history.redo(&mut canvas));
        assert_eq!(canvas, expected);
    }

    #[test]
    fn test_snapshot_clears_redo() {
        let mut canvas = Canvas::new(4, 4);
        let mut history = History::new();

        history.snapshot(&canvas);
        paint(&mut canvas, 0, 0);
        history.undo(&mut canvas);
        assert_eq!(history.redo_depth(), 1);

        history.snapshot(&canvas);
        paint(&mut canvas, 2, 2);
        let after_edit = canvas.clone();

        assert!(!history.redo(&mut canvas));
        assert_eq!(canvas, after_edit);
    }

    #[test]
    fn test_snapshot_does_not_alias_live_canvas() {
        let mut canvas = Canvas::new(2, 2);
        let mut history = History::new();

        history.snapshot(&canvas);
        paint(&mut canvas, 1, 0);
        paint(&mut canvas, 0, 1);

        history.undo(&mut canvas);
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(2, 2);
        let mut history = History::new();
        history.snapshot(&canvas);
        history.snapshot(&canvas);
        history.undo(&mut canvas);

        history.clear();
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }
}
