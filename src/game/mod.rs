mod board;
mod direction;
mod snake;
use self::board::{Board, Cell};
use self::direction::{Direction, DirectionQueue};
use self::snake::Snake;
use crate::app::{Exit, Screen};
use crate::command::Command;
use crate::config::Timing;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

/// One play session: the board, the snake, and the game clock
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    directions: DirectionQueue,
    score: u32,
    level: u32,
    tick_delay: Duration,
    timing: Timing,
    state: GameState,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(timing: Timing) -> Game {
        Game::new_with_rng(timing, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(timing: Timing, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            board: Board::new(),
            snake: Snake::new(consts::SNAKE_START),
            directions: DirectionQueue::new(),
            score: 0,
            level: 1,
            tick_delay: timing.base_tick,
            timing,
            state: GameState::Running,
            next_tick: None,
        };
        game.reset();
        game
    }

    /// Put the session back in its initial state: a one-segment snake in the
    /// middle of an otherwise empty board, heading north, with a single
    /// fruit somewhere.  Everything but the fruit position is deterministic.
    fn reset(&mut self) {
        self.board = Board::new();
        self.snake = Snake::new(consts::SNAKE_START);
        self.board.set(self.snake.head(), Cell::Snake);
        self.directions.reset();
        self.score = 0;
        self.level = 1;
        self.tick_delay = self.timing.base_tick;
        self.state = GameState::Running;
        self.next_tick = None;
        self.place_fruit();
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tick_delay);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Advance the game by one tick
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let direction = self.directions.current();
        let Some(head) = direction.step(self.snake.head()) else {
            // Running off the board ends the game just like hitting a wall
            self.state = GameState::Over(Collision::Wall);
            return;
        };
        let mut entered = self.board.get(head);
        if entered != Some(Cell::Fruit)
            && entered != Some(Cell::Wall)
            && self.snake.len() > consts::MIN_SNAKE_LENGTH
        {
            let tail = self.snake.pop_tail();
            self.board.clear(tail);
            // The tail may just have vacated the very cell the head is
            // entering, so look again before calling it a collision.
            entered = self.board.get(head);
        }
        if entered == Some(Cell::Snake) {
            self.state = GameState::Over(Collision::Snake);
            return;
        }
        self.snake.push_head(head);
        self.board.set(head, Cell::Snake);
        self.directions.advance();
        match entered {
            Some(Cell::Fruit) => self.eat_fruit(),
            Some(Cell::Wall) => self.state = GameState::Over(Collision::Wall),
            _ => (),
        }
    }

    /// Score the fruit the head just landed on and raise the difficulty.
    /// The tail was not popped this tick, so the snake has already grown by
    /// one segment.
    fn eat_fruit(&mut self) {
        self.score += 1;
        self.place_fruit();
        if (consts::LEVEL2_SCORE..consts::LEVEL3_SCORE).contains(&self.score) {
            if self.level < 2 {
                // The clock speeds up exactly once, on entering level 2
                self.tick_delay = self.tick_delay.saturating_sub(self.timing.level_speedup);
            }
            self.level = 2;
            if self.score % 2 == 0 {
                self.place_wall();
            }
        } else if (consts::LEVEL3_SCORE..consts::LEVEL4_SCORE).contains(&self.score) {
            self.level = 3;
            self.place_wall();
        } else if self.score >= consts::LEVEL4_SCORE {
            self.level = 4;
            self.place_wall();
        }
    }

    /// Put a new fruit in a random empty cell.  A board with no empty cell
    /// left has nowhere for the snake to go, so the session ends.
    fn place_fruit(&mut self) {
        if self.board.place(Cell::Fruit, &mut self.rng).is_none() {
            self.state = GameState::Filled;
        }
    }

    /// Put a new wall segment in a random empty cell, if any is left
    fn place_wall(&mut self) {
        let _ = self.board.place(Cell::Wall, &mut self.rng);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit | Command::Q => return Some(Screen::Quit(Exit::Clean)),
                Command::Up => self.directions.push(Direction::North),
                Command::Down => self.directions.push(Direction::South),
                Command::Left => self.directions.push(Direction::West),
                Command::Right => self.directions.push(Direction::East),
                Command::Enter => (),
            },
            GameState::Over(_) => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::Enter | Command::Quit | Command::Q => {
                        return Some(Screen::Quit(Exit::GameOver));
                    }
                    _ => (),
                }
            }
            GameState::Filled => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::Enter | Command::Quit | Command::Q => {
                        return Some(Screen::Quit(Exit::Clean));
                    }
                    _ => (),
                }
            }
        }
        None
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// The glyph to use for drawing the snake's head
    fn head_symbol(&self) -> char {
        match self.directions.current() {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}  Level: {}", self.score, self.level),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(
            board_area,
            Size {
                width: consts::BOARD_DIMENSIONS + 2,
                height: consts::BOARD_DIMENSIONS + 2,
            },
        );
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for pos in Board::positions() {
            match self.board.get(pos) {
                Some(Cell::Fruit) => {
                    canvas.draw_cell(pos, consts::FRUIT_SYMBOL, consts::FRUIT_STYLE);
                }
                Some(Cell::Snake) => {
                    canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
                }
                Some(Cell::Wall) => {
                    canvas.draw_cell(pos, consts::WALL_SYMBOL, consts::WALL_STYLE);
                }
                None => (),
            }
        }
        // Draw the head last so that, if the game is over, the collision
        // glyph overwrites whatever the head ran into
        if matches!(self.state, GameState::Over(_)) {
            canvas.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(self.snake.head(), self.head_symbol(), consts::SNAKE_STYLE);
        }

        match self.state {
            GameState::Running => (),
            GameState::Over(_) | GameState::Filled => {
                let heading = if self.state == GameState::Filled {
                    " — BOARD FULL —"
                } else {
                    " — GAME OVER —"
                };
                Span::from(heading).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(format!(" Final score: {} — press ", self.score)),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(" to exit"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    /// The snake ran into something fatal
    Over(Collision),
    /// The snake has filled the board and there is nowhere left to put a
    /// fruit
    Filled,
}

/// What the snake's head ran into to end the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Collision {
    /// The snake's own body
    Snake,
    /// A wall segment or the edge of the board
    Wall,
}
