//! # GameBox Component
//!
//! The bordered panel every screen is shown in: a fixed-width, padded,
//! thick-bordered box centered in the terminal, with the screen text
//! centered inside it.
//!
//! Stateless. The text comes from `core::view::render()`; this component
//! only decides where it goes.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::Component;

/// Outer width including border and padding.
pub const BOX_WIDTH: u16 = 62;
const TITLE: &str = " MentaliTTY ";

pub struct GameBox {
    pub text: String,
}

impl GameBox {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Rows needed for the text plus padding and border.
    pub fn required_height(&self) -> u16 {
        let lines = self.text.lines().count().max(1) as u16;
        lines + 4
    }

    /// Where the box lands inside `area`.
    pub fn area_within(&self, area: Rect) -> Rect {
        let [column] = Layout::horizontal([Constraint::Length(BOX_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);
        let [cell] = Layout::vertical([Constraint::Length(self.required_height().min(area.height))])
            .flex(Flex::Center)
            .areas(column);
        cell
    }
}

impl Component for GameBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .title(TITLE)
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(self.text.as_str())
            .block(block)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, self.area_within(area));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_required_height_counts_lines() {
        let game_box = GameBox::new("a\nb\nc".to_string());
        assert_eq!(game_box.required_height(), 7);
        assert_eq!(GameBox::new(String::new()).required_height(), 5);
    }

    #[test]
    fn test_box_is_centered() {
        let game_box = GameBox::new("one line".to_string());
        let area = game_box.area_within(Rect::new(0, 0, 100, 25));
        assert_eq!(area.width, BOX_WIDTH);
        assert_eq!(area.height, 5);
        assert_eq!(area.x, 19);
        assert_eq!(area.y, 10);
    }

    #[test]
    fn test_box_shrinks_to_small_terminal() {
        let game_box = GameBox::new("one line".to_string());
        let area = game_box.area_within(Rect::new(0, 0, 40, 3));
        assert_eq!(area.width, 40);
        assert_eq!(area.height, 3);
    }

    #[test]
    fn test_renders_title_and_text() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut game_box = GameBox::new("Score: 3".to_string());

        terminal
            .draw(|f| {
                game_box.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("MentaliTTY"));
        assert!(text.contains("Score: 3"));
        assert!(text.contains('┏'));
    }
}
