use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's body as an ordered run of board coordinates, head first.
///
/// The board cell under every segment holds `Cell::Snake`; the game loop
/// keeps the two in sync as segments are pushed and popped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) segments: VecDeque<Position>,
}

impl Snake {
    /// Create a one-segment snake with its head at `head`
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
        }
    }

    pub(super) fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake should never be empty")
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Attach a new head segment in front of the old one
    pub(super) fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Detach and return the tail segment
    pub(super) fn pop_tail(&mut self) -> Position {
        self.segments
            .pop_back()
            .expect("snake should never be empty")
    }

    /// The segment positions from head to tail
    pub(super) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }
}
