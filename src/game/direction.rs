use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// A compass heading for the snake.  A new game heads north until told
/// otherwise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Move `pos` one cell in this direction, or `None` if that would leave
    /// the board
    pub(super) fn step(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = y.checked_sub(1)?,
            Direction::East => x = x.checked_add(1).filter(|&x2| x2 < consts::BOARD_DIMENSIONS)?,
            Direction::South => y = y.checked_add(1).filter(|&y2| y2 < consts::BOARD_DIMENSIONS)?,
            Direction::West => x = x.checked_sub(1)?,
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Headings queued up ahead of the snake, consumed one per tick.
///
/// The front entry is the active heading.  The queue never holds more than
/// [`MAX_QUEUED_DIRECTIONS`][consts::MAX_QUEUED_DIRECTIONS] entries, never
/// holds two adjacent entries that are equal or opposite, and retains its
/// last entry indefinitely as the persistent heading.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct DirectionQueue(VecDeque<Direction>);

impl DirectionQueue {
    pub(super) fn new() -> DirectionQueue {
        let mut queue = DirectionQueue(VecDeque::with_capacity(consts::MAX_QUEUED_DIRECTIONS));
        queue.reset();
        queue
    }

    /// Drop all pending headings and seed the initial one
    pub(super) fn reset(&mut self) {
        self.0.clear();
        self.0.push_back(Direction::default());
    }

    /// The heading for the next tick
    pub(super) fn current(&self) -> Direction {
        self.0.front().copied().unwrap_or_default()
    }

    /// Append a pending heading.  Ignored if the queue is full, or if `d`
    /// repeats or reverses the heading the snake will be travelling in when
    /// `d` would take effect (a reversal would send the head straight into
    /// its own neck).
    pub(super) fn push(&mut self, d: Direction) {
        if self.0.len() >= consts::MAX_QUEUED_DIRECTIONS {
            return;
        }
        let newest = self.0.back().copied().unwrap_or_default();
        if d != newest && d != newest.reverse() {
            self.0.push_back(d);
        }
    }

    /// Consume the front heading.  The last remaining entry is kept as the
    /// persistent heading.
    pub(super) fn advance(&mut self) {
        if self.0.len() > 1 {
            let _ = self.0.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, Position::new(2, 7), Some(Position::new(2, 6)))]
    #[case(Direction::South, Position::new(2, 7), Some(Position::new(2, 8)))]
    #[case(Direction::East, Position::new(2, 7), Some(Position::new(3, 7)))]
    #[case(Direction::West, Position::new(2, 7), Some(Position::new(1, 7)))]
    #[case(Direction::North, Position::new(2, 0), None)]
    #[case(Direction::South, Position::new(2, 24), None)]
    #[case(Direction::East, Position::new(24, 7), None)]
    #[case(Direction::West, Position::new(0, 7), None)]
    #[case(Direction::South, Position::new(0, 0), Some(Position::new(0, 1)))]
    #[case(Direction::East, Position::new(23, 24), Some(Position::new(24, 24)))]
    fn test_step(#[case] d: Direction, #[case] pos: Position, #[case] stepped: Option<Position>) {
        assert_eq!(d.step(pos), stepped);
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::West, Direction::East)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
    }

    fn no_adjacent_conflicts(queue: &DirectionQueue) -> bool {
        queue
            .0
            .iter()
            .zip(queue.0.iter().skip(1))
            .all(|(&a, &b)| b != a && b != a.reverse())
    }

    #[test]
    fn new_queue_heads_north() {
        let queue = DirectionQueue::new();
        assert_eq!(queue.current(), Direction::North);
    }

    #[test]
    fn push_rejects_reversal() {
        let mut queue = DirectionQueue::new();
        queue.push(Direction::South);
        assert_eq!(queue.0, [Direction::North]);
    }

    #[test]
    fn push_rejects_repeat() {
        let mut queue = DirectionQueue::new();
        queue.push(Direction::North);
        assert_eq!(queue.0, [Direction::North]);
    }

    #[test]
    fn push_caps_queue_length() {
        let mut queue = DirectionQueue::new();
        queue.push(Direction::East);
        queue.push(Direction::South);
        queue.push(Direction::West);
        assert_eq!(
            queue.0,
            [Direction::North, Direction::East, Direction::South]
        );
        assert!(no_adjacent_conflicts(&queue));
    }

    #[test]
    fn push_validates_against_newest_entry() {
        let mut queue = DirectionQueue::new();
        queue.push(Direction::East);
        // West would reverse the queued eastward heading even though it does
        // not reverse the current northward one.
        queue.push(Direction::West);
        assert_eq!(queue.0, [Direction::North, Direction::East]);
        assert!(no_adjacent_conflicts(&queue));
    }

    #[test]
    fn advance_keeps_last_heading() {
        let mut queue = DirectionQueue::new();
        queue.push(Direction::East);
        queue.push(Direction::South);
        queue.advance();
        assert_eq!(queue.current(), Direction::East);
        queue.advance();
        assert_eq!(queue.current(), Direction::South);
        queue.advance();
        assert_eq!(queue.current(), Direction::South);
        assert_eq!(queue.0.len(), 1);
    }

    #[test]
    fn reversal_allowed_after_turn_is_consumed() {
        let mut queue = DirectionQueue::new();
        queue.push(Direction::East);
        queue.advance();
        queue.push(Direction::South);
        assert_eq!(queue.0, [Direction::East, Direction::South]);
    }

    #[test]
    fn reset_discards_pending_headings() {
        let mut queue = DirectionQueue::new();
        queue.push(Direction::East);
        queue.push(Direction::South);
        queue.reset();
        assert_eq!(queue, DirectionQueue::new());
    }
}
