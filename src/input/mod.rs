use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, Vec2};

mod router;
pub use router::route_event;

/// Discrete input the editor reacts to, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved (with or without buttons held)
    PointerMoved { position: Pos2 },
    /// Mouse button was pressed
    PointerDown {
        position: Pos2,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        position: Pos2,
        button: PointerButton,
    },
    /// Key was pressed. Auto-repeats are not reported.
    KeyDown { key: Key, modifiers: Modifiers },
    /// Window content area changed size
    WindowResized { size: Vec2 },
    /// The user asked to close the window
    QuitRequested,
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            InputEvent::PointerMoved { position }
            | InputEvent::PointerDown { position, .. }
            | InputEvent::PointerUp { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Convert one raw egui event, dropping everything the editor ignores
    pub fn from_egui(event: &Event) -> Option<Self> {
        match event {
            Event::PointerMoved(position) => Some(InputEvent::PointerMoved { position: *position }),
            Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                if !matches!(
                    button,
                    PointerButton::Primary | PointerButton::Secondary | PointerButton::Middle
                ) {
                    return None;
                }
                Some(if *pressed {
                    InputEvent::PointerDown {
                        position: *pos,
                        button: *button,
                    }
                } else {
                    InputEvent::PointerUp {
                        position: *pos,
                        button: *button,
                    }
                })
            }
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } => Some(InputEvent::KeyDown {
                key: *key,
                modifiers: *modifiers,
            }),
            _ => None,
        }
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_window_size: Option<Vec2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's events.
    ///
    /// A resize, if any, comes first so that pointer events of the same frame
    /// are mapped with the new layout.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            let mut events = Vec::with_capacity(input.events.len() + 1);

            let size = input.screen_rect().size();
            if self.last_window_size != Some(size) {
                self.last_window_size = Some(size);
                events.push(InputEvent::WindowResized { size });
            }

            events.extend(input.events.iter().filter_map(InputEvent::from_egui));

            if input.viewport().close_requested() {
                events.push(InputEvent::QuitRequested);
            }
            events
        })
    }
}
