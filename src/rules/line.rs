//! Directional line scanning shared by win detection and move evaluation

use crate::board::{Board, Player, Pos};

/// Direction vectors for line checking (4 axes)
pub const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Iterate over the cells strictly beyond `pos` in direction `(dr, dc)`
/// that belong to `player`, stopping at the first other cell or the edge.
fn matching_cells(
    board: &Board,
    pos: Pos,
    (dr, dc): (i32, i32),
    player: Player,
) -> impl Iterator<Item = Pos> + '_ {
    let stone = player.stone();
    (1..)
        .map(move |step| Pos::checked(pos.row as i32 + dr * step, pos.col as i32 + dc * step))
        .take_while(move |next| next.is_some_and(|p| board.stone_at(p) == stone))
        .flatten()
}

/// Count consecutive `player` stones from `pos` in one direction.
///
/// The start cell itself is never counted, so this can measure a
/// hypothetical placement on an empty cell.
#[inline]
pub fn count_in_direction(board: &Board, pos: Pos, dir: (i32, i32), player: Player) -> usize {
    matching_cells(board, pos, dir, player).count()
}

/// Run length through `pos` along one axis, counting `pos` itself.
#[inline]
pub fn run_length(board: &Board, pos: Pos, (dr, dc): (i32, i32), player: Player) -> usize {
    1 + count_in_direction(board, pos, (dr, dc), player)
        + count_in_direction(board, pos, (-dr, -dc), player)
}

/// Longest run through `pos` over all four axes.
pub fn best_run(board: &Board, pos: Pos, player: Player) -> usize {
    AXES.iter()
        .map(|&axis| run_length(board, pos, axis, player))
        .max()
        .unwrap_or(1)
}

/// The cells of the run through `pos` along `axis`, ordered from the
/// negative end to the positive end.
pub fn line_through(board: &Board, pos: Pos, (dr, dc): (i32, i32), player: Player) -> Vec<Pos> {
    let mut line: Vec<Pos> = matching_cells(board, pos, (-dr, -dc), player).collect();
    line.reverse();
    line.push(pos);
    line.extend(matching_cells(board, pos, (dr, dc), player));
    line
}
