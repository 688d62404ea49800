use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Positions, Rect};

/// What a non-empty board cell holds
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Cell {
    Fruit,
    Snake,
    Wall,
}

/// The playing field: a fixed 25×25 grid of cells, stored row-major.
///
/// `None` is an empty cell.  Callers only ever pass in-domain coordinates;
/// off-board movement is rejected as a collision before any board access.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Board {
    cells: [Option<Cell>; consts::CELL_COUNT],
}

impl Board {
    pub(super) fn new() -> Board {
        Board {
            cells: [None; consts::CELL_COUNT],
        }
    }

    pub(super) fn get(&self, pos: Position) -> Option<Cell> {
        self.cells[Board::index(pos)]
    }

    pub(super) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[Board::index(pos)] = Some(cell);
    }

    pub(super) fn clear(&mut self, pos: Position) {
        self.cells[Board::index(pos)] = None;
    }

    /// All board coordinates, in row-major order
    pub(super) fn positions() -> Positions {
        Rect::from((Position::ORIGIN, consts::BOARD_SIZE)).positions()
    }

    /// Put `kind` in a uniformly random empty cell and return the chosen
    /// position, or `None` if the board has no empty cell left.
    pub(super) fn place<R: Rng>(&mut self, kind: Cell, rng: &mut R) -> Option<Position> {
        let pos = Board::positions()
            .filter(|&p| self.get(p).is_none())
            .choose(rng)?;
        self.set(pos, kind);
        Some(pos)
    }

    fn index(pos: Position) -> usize {
        usize::from(pos.y) * usize::from(consts::BOARD_DIMENSIONS) + usize::from(pos.x)
    }
}
