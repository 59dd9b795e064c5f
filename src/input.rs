use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;

use crate::entities::Vec2;

/// Field units the pointer moves per arrow-key press.
pub const POINTER_KEY_STEP: f32 = 12.0;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Enter/Return.
    Confirm,
    /// Escape.
    Cancel,
    /// Left click or Space.
    Fire,
    Quit,
}

/// Polls terminal events, translating them into one-shot actions and a
/// pointer position that persists between frames.
pub struct InputManager {
    pointer: Vec2,
    field_width: f32,
    field_height: f32,
    oneshot_actions: Vec<InputAction>,
}

impl InputManager {
    /// Creates an InputManager with the pointer resting at `pointer`.
    pub fn new(pointer: Vec2, field_width: f32, field_height: f32) -> Self {
        Self {
            pointer,
            field_width,
            field_height,
            oneshot_actions: Vec::new(),
        }
    }

    /// Drains every pending terminal event without blocking.
    /// `area` is where the field was last drawn, for mapping mouse cells.
    pub fn poll_events(&mut self, area: Rect) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key_event(key_event),
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, area),
                _ => {}
            }
        }

        Ok(())
    }

    /// Processes a key event: quit and screen keys become actions, arrows
    /// nudge the pointer.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }

        if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        let nudge = match key_event.code {
            KeyCode::Enter => {
                self.oneshot_actions.push(InputAction::Confirm);
                return;
            }
            KeyCode::Esc => {
                self.oneshot_actions.push(InputAction::Cancel);
                return;
            }
            KeyCode::Char(' ') => {
                self.oneshot_actions.push(InputAction::Fire);
                return;
            }
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => (0.0, -POINTER_KEY_STEP),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => (0.0, POINTER_KEY_STEP),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => (-POINTER_KEY_STEP, 0.0),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => (POINTER_KEY_STEP, 0.0),
            _ => return,
        };

        self.set_pointer(Vec2::new(self.pointer.x + nudge.0, self.pointer.y + nudge.1));
    }

    /// Mouse motion moves the pointer; a left press also fires.
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent, area: Rect) {
        match mouse_event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {}
            MouseEventKind::Down(MouseButton::Left) => {
                self.oneshot_actions.push(InputAction::Fire);
            }
            _ => return,
        }

        let pointer = cell_to_field(
            mouse_event.column,
            mouse_event.row,
            area,
            self.field_width,
            self.field_height,
        );
        self.set_pointer(pointer);
    }

    fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = Vec2::new(
            pointer.x.clamp(0.0, self.field_width),
            pointer.y.clamp(0.0, self.field_height),
        );
    }

    /// Current pointer in field coordinates, always inside the field.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// One-shot actions gathered by the last poll.
    pub fn actions(&self) -> &[InputAction] {
        &self.oneshot_actions
    }
}

/// Maps the centre of a terminal cell inside `area` onto field coordinates.
pub fn cell_to_field(column: u16, row: u16, area: Rect, field_width: f32, field_height: f32) -> Vec2 {
    let width = area.width.max(1) as f32;
    let height = area.height.max(1) as f32;
    let col = column.saturating_sub(area.x) as f32 + 0.5;
    let row = row.saturating_sub(area.y) as f32 + 0.5;

    Vec2::new(
        (col / width * field_width).clamp(0.0, field_width),
        (row / height * field_height).clamp(0.0, field_height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn manager() -> InputManager {
        InputManager::new(Vec2::new(400.0, 500.0), 800.0, 600.0)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_screen_keys_map_to_actions() {
        let mut input = manager();
        input.handle_key_event(press(KeyCode::Enter));
        input.handle_key_event(press(KeyCode::Esc));
        input.handle_key_event(press(KeyCode::Char(' ')));
        input.handle_key_event(press(KeyCode::Char('q')));
        assert_eq!(
            input.actions(),
            &[
                InputAction::Confirm,
                InputAction::Cancel,
                InputAction::Fire,
                InputAction::Quit
            ]
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut input = manager();
        input.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(input.actions(), &[InputAction::Quit]);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut input = manager();
        input.handle_key_event(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(input.actions().is_empty());
    }

    #[test]
    fn test_arrows_nudge_pointer_within_field() {
        let mut input = manager();
        input.handle_key_event(press(KeyCode::Left));
        assert_eq!(input.pointer(), Vec2::new(388.0, 500.0));

        for _ in 0..20 {
            input.handle_key_event(press(KeyCode::Down));
        }
        assert_eq!(input.pointer().y, 600.0);
    }

    #[test]
    fn test_mouse_maps_cells_to_field() {
        let mut input = manager();
        let area = Rect::new(0, 0, 80, 24);
        input.handle_mouse_event(mouse(MouseEventKind::Moved, 39, 11), area);
        assert_eq!(input.pointer(), Vec2::new(395.0, 287.5));
        assert!(input.actions().is_empty());

        input.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), area);
        assert_eq!(input.pointer(), Vec2::new(5.0, 12.5));
        assert_eq!(input.actions(), &[InputAction::Fire]);
    }

    #[test]
    fn test_cell_outside_area_is_clamped() {
        let area = Rect::new(10, 5, 80, 24);
        assert_eq!(cell_to_field(0, 0, area, 800.0, 600.0), Vec2::new(5.0, 12.5));
        assert_eq!(cell_to_field(200, 100, area, 800.0, 600.0), Vec2::new(800.0, 600.0));
    }
}
