use crate::config::Timing;
use crate::game::Game;
use crate::startup::StartScreen;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Top-level driver: draws whichever screen is active and feeds it input
/// until one of them asks to quit
#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(timing: Timing) -> App {
        App {
            screen: Screen::Start(StartScreen::new(timing)),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<Exit> {
        loop {
            if let Screen::Quit(exit) = self.screen {
                return Ok(exit);
            }
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Start(ref screen) => {
                terminal.draw(|frame| screen.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit(_) => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Start(ref mut screen) => screen.process_input()?,
            Screen::Game(ref mut game) => game.process_input()?,
            Screen::Quit(_) => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }
}

/// The screen currently in control of the terminal
#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Start(StartScreen),
    Game(Game),
    Quit(Exit),
}

/// How the process should exit once the interface shuts down
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Exit {
    /// The player quit of their own accord
    Clean,
    /// A fatal collision ended the game
    GameOver,
}
