use crate::app::{Exit, Screen};
use crate::command::Command;
use crate::config::Timing;
use crate::consts;
use crate::game::Game;
use crate::logo::Logo;
use crate::util::get_display_area;
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
    Frame,
};
use std::io;

/// The idle screen shown until the player starts a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct StartScreen {
    timing: Timing,
}

impl StartScreen {
    pub(crate) fn new(timing: Timing) -> StartScreen {
        StartScreen { timing }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Enter => Some(Screen::Game(Game::new(self.timing))),
            Command::Quit | Command::Q => Some(Screen::Quit(Exit::Clean)),
            _ => None,
        }
    }
}

static INSTRUCTIONS: &[&str] = &[
    "Steer the snake with the arrow",
    "keys (or w a s d / h j k l).",
    "Eat fruit and dodge the walls",
    "that pile up as levels go by!",
];

const INSTRUCTIONS_WIDTH: u16 = 33;
const INSTRUCTIONS_HEIGHT: u16 = 4;

impl Widget for &StartScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [mut logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(display);
        logo_area.height = Logo::HEIGHT;
        Logo.render(logo_area, buf);
        let mut y = display.y + Logo::HEIGHT + 1;
        let [instructions_area] = Layout::horizontal([INSTRUCTIONS_WIDTH])
            .flex(Flex::Center)
            .areas(Rect {
                y,
                height: INSTRUCTIONS_HEIGHT,
                ..display
            });
        Text::from_iter(INSTRUCTIONS.iter().copied()).render(instructions_area, buf);
        y += INSTRUCTIONS_HEIGHT + 1;

        Line::from_iter([
            Span::raw("[ Press "),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(" to play! ]"),
        ])
        .centered()
        .render(
            Rect {
                y,
                height: 1,
                ..display
            },
            buf,
        );
        y += 2;
        Line::from_iter([
            Span::raw("[Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(
            Rect {
                y,
                height: 1,
                ..display
            },
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn enter_starts_a_game() {
        let mut screen = StartScreen::new(Timing::default());
        let next = screen.handle_event(Event::Key(KeyCode::Enter.into()));
        assert!(matches!(next, Some(Screen::Game(_))));
    }

    #[test]
    fn q_quits_cleanly() {
        let mut screen = StartScreen::new(Timing::default());
        let next = screen.handle_event(Event::Key(KeyCode::Char('q').into()));
        assert!(matches!(next, Some(Screen::Quit(Exit::Clean))));
    }

    #[test]
    fn movement_keys_are_ignored() {
        let mut screen = StartScreen::new(Timing::default());
        assert!(screen
            .handle_event(Event::Key(KeyCode::Up.into()))
            .is_none());
    }

    #[test]
    fn render_start_screen() {
        let screen = StartScreen::new(Timing::default());
        let area = Rect::new(0, 0, 55, 30);
        let mut buffer = Buffer::empty(area);
        (&screen).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "    ____        _      _  ____              _          ",
            "   / ___| _ __ (_)  __| |/ ___| _ __   __ _| | _____   ",
            "  | |  _ | '__|| | / _` |\\___ \\| '_ \\ / _` | |/ / _ \\  ",
            "  | |_| || |   | || (_| | ___) | | | | (_| |   <  __/  ",
            "   \\____||_|   |_| \\__,_||____/|_| |_|\\__,_|_|\\_\\___|  ",
            "                                                       ",
            "           Steer the snake with the arrow              ",
            "           keys (or w a s d / h j k l).                ",
            "           Eat fruit and dodge the walls               ",
            "           that pile up as levels go by!               ",
            "                                                       ",
            "               [ Press Enter to play! ]                ",
            "                                                       ",
            "                      [Quit (q)]                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
            "                                                       ",
        ]);
        expected.set_style(Rect::new(2, 0, 23, 5), consts::FRUIT_STYLE);
        expected.set_style(Rect::new(25, 0, 28, 5), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(23, 11, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(29, 13, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
