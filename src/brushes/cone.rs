use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::creation::MakeCone;
use crate::parameters::ParameterSet;
use crate::topology::{Solid, TextureRef};

use super::{side_count, sides_parameter, Brush};

/// A pyramid over an ellipse inscribed in the dragged volume.
#[derive(Debug, Clone)]
pub struct ConeBrush {
    parameters: ParameterSet,
}

impl ConeBrush {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: ParameterSet::new(vec![sides_parameter()]),
        }
    }
}

impl Default for ConeBrush {
    fn default() -> Self {
        Self::new()
    }
}

impl Brush for ConeBrush {
    fn name(&self) -> &'static str {
        "Cone"
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
        Ok(vec![MakeCone::new(sides, *bounds).execute(ctx, texture)?])
    }
}
