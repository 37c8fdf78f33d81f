use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::creation::MakeCylinder;
use crate::parameters::ParameterSet;
use crate::topology::{Solid, TextureRef};

use super::{side_count, sides_parameter, Brush};

/// An upright prism over an ellipse inscribed in the dragged volume.
#[derive(Debug, Clone)]
pub struct CylinderBrush {
    parameters: ParameterSet,
}

impl CylinderBrush {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: ParameterSet::new(vec![sides_parameter()]),
        }
    }
}

impl Default for CylinderBrush {
    fn default() -> Self {
        Self::new()
    }
}

impl Brush for CylinderBrush {
    fn name(&self) -> &'static str {
        "Cylinder"
    }

    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }

    fn try_create(
        &self,
        ctx: &mut BuildContext,
        bounds: &BoundingVolume,
        texture: &TextureRef,
    ) -> Result<Vec<Solid>> {
        self.parameters.validate()?;
        let sides = side_count(&self.parameters)?;
        Ok(vec![MakeCylinder::new(sides, *bounds).execute(ctx, texture)?])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::brushes::tests::{assert_outward, seeded_context, volume};

    #[test]
    fn default_is_octagonal() {
        let solids =
            CylinderBrush::new().create(&mut seeded_context(), &volume(), &TextureRef::new("t"));
        assert_eq!(solids.len(), 1);
        assert_eq!(solids[0].faces.len(), 10);
        assert_outward(&solids);
    }

    #[test]
    fn too_few_sides_builds_nothing() {
        let mut brush = CylinderBrush::new();
        brush.parameters_mut().set("sides", 2).unwrap();
        let mut ctx = seeded_context();
        assert!(brush.create(&mut ctx, &volume(), &TextureRef::new("t")).is_empty());
        assert_eq!(ctx.ids().peek_object_id().get(), 1);
    }
}
