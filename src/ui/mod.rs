pub mod board_scene;
pub mod game_common;

use crate::game::GameSession;
use crate::input::Cursor;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, session: &GameSession, cursor: &Cursor) {
    let size = frame.size();
    board_scene::render_game_scene(frame, size, session, cursor);
}
