//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width & height of the playing field, in cells
pub(crate) const BOARD_DIMENSIONS: u16 = 25;

/// Total number of cells on the playing field
pub(crate) const CELL_COUNT: usize = (BOARD_DIMENSIONS as usize) * (BOARD_DIMENSIONS as usize);

/// The playing field as a [`Size`]
pub(crate) const BOARD_SIZE: Size = Size {
    width: BOARD_DIMENSIONS,
    height: BOARD_DIMENSIONS,
};

/// Where the snake's head starts a new game
pub(crate) const SNAKE_START: Position = Position {
    x: BOARD_DIMENSIONS / 2,
    y: BOARD_DIMENSIONS / 2,
};

/// Baseline rate of the game clock.  A "tick" moves the snake one cell.
pub(crate) const TICKS_PER_SECOND: u64 = 9;

/// Time between ticks at level 1
pub(crate) const BASE_TICK: Duration = Duration::from_millis(2000 / TICKS_PER_SECOND);

/// How much the tick delay shrinks when level 2 begins.  Levels 3 and 4
/// raise the difficulty through walls alone; the clock never speeds up a
/// second time.
pub(crate) const LEVEL_SPEEDUP: Duration = Duration::from_millis(25);

/// Snake length at or below which the tail is never popped, so a new snake
/// grows to this length (plus the head) before it moves as a fixed chain
pub(crate) const MIN_SNAKE_LENGTH: usize = 3;

/// The maximum number of headings that may be queued up ahead of the snake
pub(crate) const MAX_QUEUED_DIRECTIONS: usize = 3;

/// Score at which level 2 begins
pub(crate) const LEVEL2_SCORE: u32 = 6;

/// Score at which level 3 begins
pub(crate) const LEVEL3_SCORE: u32 = 12;

/// Score at which level 4 begins
pub(crate) const LEVEL4_SCORE: u32 = 18;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 55,
    height: 30,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '█';

/// Glyph for the fruit
pub(crate) const FRUIT_SYMBOL: char = '●';

/// Glyph for wall segments
pub(crate) const WALL_SYMBOL: char = '▒';

/// Glyph for the snake's head when it's collided with something
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Style for the fruit
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::Magenta);

/// Style for wall segments
pub(crate) const WALL_STYLE: Style = Style::new().fg(Color::Green);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
