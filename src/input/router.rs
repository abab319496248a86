use egui::{Key, Modifiers};

use crate::command::{Command, WindowRequest};
use crate::state::EditorSession;

use super::InputEvent;

/// Routes one input event to the session.
///
/// Returns a request for the window when the event asks for something the
/// session cannot do itself.
pub fn route_event(event: &InputEvent, session: &mut EditorSession) -> Option<WindowRequest> {
    match event {
        InputEvent::PointerMoved { position } => session.set_pointer(*position),
        InputEvent::PointerDown { position, button } => session.pointer_down(*button, *position),
        InputEvent::PointerUp { position, button } => {
            session.set_pointer(*position);
            session.pointer_up(*button);
        }
        InputEvent::KeyDown { key, modifiers } => return route_key(*key, *modifiers, session),
        InputEvent::WindowResized { size } => session.set_window_size(*size),
        InputEvent::QuitRequested => return Some(WindowRequest::Quit),
    }
    None
}

fn route_key(key: Key, modifiers: Modifiers, session: &mut EditorSession) -> Option<WindowRequest> {
    if session.size_input().is_active() {
        session.size_input_key(key);
        return None;
    }

    match key {
        Key::F11 => return Some(WindowRequest::ToggleFullscreen),
        Key::Z if modifiers.command => session.run(Command::Undo),
        Key::Y if modifiers.command => session.run(Command::Redo),
        Key::S => session.run(Command::Export),
        _ => {}
    }
    None
}
