use crate::game::entities::Snake;
use crate::game::grid::Grid;
use crate::game::types::Position;

/// Draw the grid as text, one line per row: `H` head, `o` body, `*` food, `.` empty.
/// Segments that left the grid are not drawn.
pub fn render_ascii(grid: &Grid, snake: &Snake, food: Position) -> String {
    let side = usize::try_from(grid.tile_count).unwrap_or(0);
    let mut out = String::with_capacity(side.saturating_add(1).saturating_mul(side));
    for y in 0..grid.tile_count {
        for x in 0..grid.tile_count {
            let pos = Position { x, y };
            // Head first, then body, then food.
            let symbol = if snake.head() == pos {
                'H'
            } else if snake.occupies(pos) {
                'o'
            } else if food == pos {
                '*'
            } else {
                '.'
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
