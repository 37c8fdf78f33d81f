mod make_arch;
mod make_block;
mod make_cone;
mod make_cylinder;
mod make_wedge;

pub use make_arch::MakeArch;
pub use make_block::MakeBlock;
pub use make_cone::MakeCone;
pub use make_cylinder::MakeCylinder;
pub use make_wedge::MakeWedge;

use crate::error::{OperationError, Result};
use crate::geometry::BoundingVolume;

/// Fewest sides a polygonal profile may have.
pub const MIN_PROFILE_SIDES: usize = 3;

fn invalid(message: String) -> crate::error::BrushError {
    OperationError::InvalidInput(message).into()
}

/// Rejects volumes with a zero or non-finite extent.
fn check_bounds(bounds: &BoundingVolume) -> Result<()> {
    let extents = bounds.extents();
    if extents.iter().any(|e| !e.is_finite()) {
        return Err(invalid("bounding volume is not finite".into()));
    }
    if bounds.is_flat() {
        return Err(invalid(format!(
            "bounding volume is flat ({} x {} x {})",
            bounds.width(),
            bounds.length(),
            bounds.height()
        )));
    }
    Ok(())
}

fn check_sides(sides: usize) -> Result<()> {
    if sides < MIN_PROFILE_SIDES {
        return Err(invalid(format!(
            "need at least {MIN_PROFILE_SIDES} sides, got {sides}"
        )));
    }
    Ok(())
}
