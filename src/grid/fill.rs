use super::{Grid, Region, RegionFinder};
use crate::core::{Position, Result};

/// Recolour the region containing `start` with `value`.
///
/// The region is computed first against the unmodified grid, then each member
/// is overwritten. Returns the region that was filled.
pub fn flood_fill<T>(grid: &mut Grid<T>, start: Position, value: T) -> Result<Region>
where
    T: PartialEq + Clone,
{
    let region = RegionFinder::new().find_region(grid, start)?;
    for pos in region.iter() {
        grid.set(pos, value.clone())?;
    }
    tracing::debug!(%start, filled = region.len(), "flood fill");
    Ok(region)
}
