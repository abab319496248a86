use egui::{PointerButton, Vec2};
use pixel_editor::{Cell, Command, EditorConfig, EditorSession, GridPos, Rgb, Tool};

const BLUE: Rgb = Rgb::new(0, 0, 255);

fn click(session: &mut EditorSession, x: usize, y: usize) {
    let pos = session.layout().cell_rect(GridPos::new(x, y)).center();
    session.pointer_down(PointerButton::Primary, pos);
    session.frame(Some(pos));
    session.pointer_up(PointerButton::Primary);
}

/// 4x4 canvas with a painted wall in column 1
fn walled_session() -> EditorSession {
    let mut session = EditorSession::new(EditorConfig::default(), Vec2::new(556.0, 256.0));
    session.resize_canvas(4, 4);
    for y in 0..4 {
        click(&mut session, 1, y);
    }
    session
}

#[test]
fn test_fill_stops_at_differently_colored_cells() {
    let mut session = walled_session();
    session.run(Command::SelectTool(Tool::Fill));
    session.tools_mut().color_mut().set_rgb(BLUE);
    let depth = session.history().undo_depth();

    click(&mut session, 0, 2);

    for y in 0..4 {
        assert_eq!(session.canvas().get(GridPos::new(0, y)), Cell::Color(BLUE));
        assert_eq!(session.canvas().get(GridPos::new(1, y)), Cell::Color(Rgb::RED));
        assert_eq!(session.canvas().get(GridPos::new(3, y)), Cell::Empty);
    }
    assert_eq!(session.history().undo_depth(), depth + 1);

    session.run(Command::Undo);
    assert_eq!(session.canvas().get(GridPos::new(0, 0)), Cell::Empty);
    assert_eq!(session.canvas().get(GridPos::new(1, 0)), Cell::Color(Rgb::RED));
}

#[test]
fn test_fill_recolors_a_painted_region() {
    let mut session = walled_session();
    session.run(Command::SelectTool(Tool::Fill));
    session.tools_mut().color_mut().set_rgb(BLUE);

    click(&mut session, 1, 0);
    for y in 0..4 {
        assert_eq!(session.canvas().get(GridPos::new(1, y)), Cell::Color(BLUE));
        assert_eq!(session.canvas().get(GridPos::new(0, y)), Cell::Empty);
    }
}

#[test]
fn test_fill_with_same_color_records_nothing() {
    let mut session = walled_session();
    session.run(Command::SelectTool(Tool::Fill));
    let depth = session.history().undo_depth();

    // Brush color is still red, same as the wall
    click(&mut session, 1, 1);
    assert_eq!(session.history().undo_depth(), depth);
    assert!(session.tools().drag().is_idle());
}
