#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, CellView},
    coord::Coord,
};

const EMPTY: char = 'O';
const SHIP: char = '■';
const HIT: char = 'X';
const MISS: char = 'T';

fn symbol(cell: CellView) -> char {
    match cell {
        CellView::Empty => EMPTY,
        CellView::Ship => SHIP,
        CellView::Hit => HIT,
        CellView::Miss => MISS,
    }
}

/// Render a board as a table with 1-indexed row and column headers.
/// Hidden boards show no ship markers.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("   |");
    for c in 0..size {
        let _ = write!(out, " {} |", c + 1);
    }
    for r in 0..size {
        let _ = write!(out, "\n{:2} |", r + 1);
        for c in 0..size {
            let cell = board
                .cell_view(Coord::from((r, c)))
                .unwrap_or(CellView::Empty);
            let _ = write!(out, " {} |", symbol(cell));
        }
    }
    out
}

/// Banner and short instructions shown before the first turn.
pub fn greeting() -> &'static str {
    concat!(
        "*****************************\n",
        "       Welcome aboard        \n",
        "      to the sea battle      \n",
        "*****************************\n",
        " To take a shot enter the    \n",
        " coordinates as:  x y        \n",
        "   x - row number            \n",
        "   y - column number         \n",
        " Symbols: ■ ship  X hit      \n",
        "          T miss  O water    ",
    )
}
