//! Game board: ship placement with exclusion zones and shot resolution.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitgrid::{BitGrid, BitGridError};
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Ship;

/// Busy set storage. 128 bits allow boards up to 11×11.
type Mask = BitGrid<u128>;

/// State of a single grid cell as the owner sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Exclusion zone around a ship while the fleet is being placed.
    Blocked,
}

/// What a renderer may show for a cell. Ships are suppressed on hidden boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Ship,
    Hit,
    Miss,
}

#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    busy: Mask,
    sunk: usize,
    hidden: bool,
    frozen: bool,
}

impl Board {
    /// Create an empty `size`×`size` board in the placement phase.
    pub fn new(size: usize) -> Result<Self, BitGridError> {
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            busy: Mask::try_new(size)?,
            sunk: 0,
            hidden: false,
            frozen: false,
        })
    }

    /// Largest board side the busy set can track.
    pub fn max_size() -> usize {
        Mask::max_side()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.len() - self.sunk
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// `true` once `reset_shot_tracking` has run.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns `true` if `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.to_index(self.size).is_some()
    }

    /// Raw cell state, or `None` off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord
            .to_index(self.size)
            .map(|(r, c)| self.cells[r * self.size + c])
    }

    /// Cell state as it may be displayed, honouring the hidden flag.
    pub fn cell_view(&self, coord: Coord) -> Option<CellView> {
        self.cell(coord).map(|cell| match cell {
            Cell::Empty | Cell::Blocked => CellView::Empty,
            Cell::Ship if self.hidden => CellView::Empty,
            Cell::Ship => CellView::Ship,
            Cell::Hit => CellView::Hit,
            Cell::Miss => CellView::Miss,
        })
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn is_fleet_destroyed(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Place a ship. Nothing changes unless the whole ship fits on free cells.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if self.frozen {
            return Err(PlacementError::BoardFrozen);
        }
        if ship.size() == 0 {
            return Err(PlacementError::EmptyShip);
        }
        if ship.size() > self.size {
            return Err(PlacementError::OutOfBounds);
        }
        let cells = ship
            .cells()
            .map(|coord| coord.to_index(self.size))
            .collect::<Option<Vec<_>>>()
            .ok_or(PlacementError::OutOfBounds)?;
        if cells.iter().any(|&(r, c)| self.is_busy(r, c)) {
            return Err(PlacementError::Overlap);
        }

        for &(r, c) in cells.iter() {
            self.set_cell(r, c, Cell::Ship);
            let _ = self.busy.set(r, c);
        }
        self.outline(&ship, Cell::Blocked);
        self.ships.push(ship);
        log::trace!("placed {:?}", ship);
        Ok(())
    }

    /// End the placement phase: forget exclusion zones so that only shots
    /// occupy the busy set from now on. Later calls do nothing.
    pub fn reset_shot_tracking(&mut self) {
        if self.frozen {
            return;
        }
        self.busy.clear_all();
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Blocked {
                *cell = Cell::Empty;
            }
        }
        self.frozen = true;
    }

    /// Process a shot at `target`, marking hits/misses and reporting the result.
    /// Fails with `NotInCombat` until `reset_shot_tracking` has run.
    pub fn receive_shot(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        if !self.frozen {
            return Err(ShotError::NotInCombat);
        }
        let (r, c) = target.to_index(self.size).ok_or(ShotError::OutOfBounds)?;
        if self.is_busy(r, c) {
            return Err(ShotError::AlreadyShot);
        }
        let _ = self.busy.set(r, c);

        let Some(idx) = self.ships.iter().position(|ship| ship.occupies(target)) else {
            self.set_cell(r, c, Cell::Miss);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(r, c, Cell::Hit);
        let ship = &mut self.ships[idx];
        ship.register_hit(target);
        if ship.is_sunk() {
            let ship = *ship;
            self.sunk += 1;
            // reveal the water around the wreck
            self.outline(&ship, Cell::Miss);
            Ok(ShotOutcome::Sunk)
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// Mark every free on-board cell around `ship` with `mark` and add it to
    /// the busy set.
    fn outline(&mut self, ship: &Ship, mark: Cell) {
        for coord in ship.neighbourhood() {
            if let Some((r, c)) = coord.to_index(self.size) {
                if !self.is_busy(r, c) {
                    self.set_cell(r, c, mark);
                    let _ = self.busy.set(r, c);
                }
            }
        }
    }

    fn is_busy(&self, row: usize, col: usize) -> bool {
        self.busy.get(row, col).unwrap_or(true)
    }

    fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  frozen: {},\n  sunk: {},\n  busy: {:?},\n  ships: {:?}\n}}",
            self.size, self.hidden, self.frozen, self.sunk, self.busy, self.ships
        )
    }
}
