use std::collections::{HashSet, VecDeque};

use crate::canvas::{Canvas, Cell, GridPos};

/// Recolor the 4-connected region of `target` cells containing `start`.
///
/// Breadth-first from `start`, stopping at the canvas edge and at any cell
/// that is not `target`. `Cell::Empty` is a valid target. Returns how many
/// cells were recolored; zero when `target == replacement` or when `start`
/// does not currently hold `target`.
///
/// No history is recorded here. Callers that want the fill to be undoable
/// snapshot once before calling.
pub fn flood_fill(canvas: &mut Canvas, start: GridPos, target: Cell, replacement: Cell) -> usize {
    if target == replacement || !canvas.contains(start) {
        return 0;
    }

    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::new();
    let mut recolored = 0;

    while let Some(pos) = queue.pop_front() {
        if !visited.insert(pos) {
            continue;
        }
        if canvas.get(pos) != target {
            continue;
        }

        canvas.set(pos, replacement);
        recolored += 1;

        for neighbor in neighbors(pos, canvas.width(), canvas.height()) {
            if !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!("Flood fill from {:?} recolored {} cells", start, recolored);
    recolored
}

fn neighbors(pos: GridPos, width: usize, height: usize) -> impl Iterator<Item = GridPos> {
    let GridPos { x, y } = pos;
    let candidates = [
        x.checked_add(1).map(|x| GridPos::new(x, y)),
        x.checked_sub(1).map(|x| GridPos::new(x, y)),
        y.checked_add(1).map(|y| GridPos::new(x, y)),
        y.checked_sub(1).map(|y| GridPos::new(x, y)),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(move |p| p.x < width && p.y < height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    const RED: Cell = Cell::Color(Rgb::new(255, 0, 0));
    const GREEN: Cell = Cell::Color(Rgb::new(0, 255, 0));
    const BLUE: Cell = Cell::Color(Rgb::new(0, 0, 255));

    #[test]
    fn test_fill_connected_region() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set(GridPos::new(0, 0), RED);
        canvas.set(GridPos::new(0, 1), RED);
        canvas.set(GridPos::new(1, 1), RED);
        canvas.set(GridPos::new(1, 0), BLUE);

        let count = flood_fill(&mut canvas, GridPos::new(1, 1), RED, GREEN);

        assert_eq!(count, 3);
        assert_eq!(canvas.get(GridPos::new(0, 0)), GREEN);
        assert_eq!(canvas.get(GridPos::new(0, 1)), GREEN);
        assert_eq!(canvas.get(GridPos::new(1, 1)), GREEN);
        assert_eq!(canvas.get(GridPos::new(1, 0)), BLUE);
        assert_eq!(canvas.get(GridPos::new(2, 2)), Cell::Empty);
    }

    #[test]
    fn test_fill_does_not_cross_diagonals() {
        let mut canvas = Canvas::new(3, 3);
        canvas.set(GridPos::new(0, 0), RED);
        canvas.set(GridPos::new(1, 1), RED);

        assert_eq!(flood_fill(&mut canvas, GridPos::new(0, 0), RED, GREEN), 1);
        assert_eq!(canvas.get(GridPos::new(1, 1)), RED);
    }

    #[test]
    fn test_fill_empty_region() {
        let mut canvas = Canvas::new(3, 3);
        for y in 0..3 {
            canvas.set(GridPos::new(1, y), BLUE);
        }

        let count = flood_fill(&mut canvas, GridPos::new(0, 0), Cell::Empty, RED);
        assert_eq!(count, 3);
        assert_eq!(canvas.get(GridPos::new(0, 2)), RED);
        assert_eq!(canvas.get(GridPos::new(2, 0)), Cell::Empty);
    }

    #[test]
    fn test_fill_whole_canvas() {
        let mut canvas = Canvas::new(128, 128);
        let count = flood_fill(&mut canvas, GridPos::new(64, 64), Cell::Empty, GREEN);
        assert_eq!(count, 128 * 128);
        assert!(canvas.cells().all(|(_, cell)| cell == GREEN));
    }

    #[test]
    fn test_same_color_is_noop() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set(GridPos::new(0, 0), RED);
        let before = canvas.clone();

        assert_eq!(flood_fill(&mut canvas, GridPos::new(0, 0), RED, RED), 0);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_second_fill_is_noop() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set(GridPos::new(2, 2), RED);

        assert_eq!(flood_fill(&mut canvas, GridPos::new(2, 2), RED, GREEN), 1);
        let after_first = canvas.clone();
        assert_eq!(flood_fill(&mut canvas, GridPos::new(2, 2), RED, GREEN), 0);
        assert_eq!(canvas, after_first);
    }

    #[test]
    fn test_start_outside_canvas_is_noop() {
        let mut canvas = Canvas::new(2, 2);
        assert_eq!(flood_fill(&mut canvas, GridPos::new(5, 0), Cell::Empty, RED), 0);
        assert!(canvas.is_blank());
    }
}
