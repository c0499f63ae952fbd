use crate::common::{BattleshipError, Result, ShotResult};
use crate::grid::{Cell, Grid};
use crate::ship::Fleet;

/// Fire at `index`, updating `grid` in place and classifying the outcome.
///
/// Water becomes a miss. A ship cell becomes debris, and once no cell of the
/// owning ship is left intact every cell of it turns sunk. The fleet is only
/// read to find that owner.
pub fn register_hit(grid: &mut Grid, fleet: &Fleet, index: usize) -> Result<ShotResult> {
    match grid.get(index)? {
        Cell::Water => {
            grid.set(index, Cell::Miss)?;
            Ok(ShotResult::Miss)
        }
        Cell::Ship => {
            let ship = fleet
                .ship_at(index)
                .ok_or(BattleshipError::UnknownShip(index))?;
            grid.set(index, Cell::Debris)?;
            let afloat = ship
                .cells()
                .iter()
                .any(|&i| grid.cells().get(i) == Some(&Cell::Ship));
            if afloat {
                return Ok(ShotResult::Hit);
            }
            for &i in ship.cells() {
                grid.set(i, Cell::Sunk)?;
            }
            Ok(ShotResult::Sunk)
        }
        Cell::Debris | Cell::Sunk | Cell::Miss => Err(BattleshipError::AlreadyShot(index)),
    }
}
