use ratatui::Frame;

use crate::core::state::GameState;
use crate::core::view;
use crate::tui::component::Component;
use crate::tui::components::GameBox;

pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let mut game_box = GameBox::new(view::render(state));
    game_box.render(frame, frame.area());
}
