use crate::config::{DEFAULT_WALL_WIDTH, MAX_WALL_WIDTH, MIN_WALL_WIDTH};
use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::creation::MakeArch;
use crate::operations::ring::RingSpec;
use crate::parameters::{Parameter, ParameterSet};
use crate::topology::{Solid, TextureRef};

use super::{side_count, sides_parameter, Brush, WALL_WIDTH};

/// A closed hollow ring of wall segments around the centre of the volume.
#[derive(Debug, Clone)]
pub struct PipeBrush {
    parameters: ParameterSet,
}

impl PipeBrush {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: ParameterSet::new(vec![
                sides_parameter(),
                Parameter::numeric(
                    WALL_WIDTH,
                    "Wall width",
                    MIN_WALL_WIDTH,
                    MAX_WALL_WIDTH,
                    DEFAULT_WALL_WIDTH,
                ),
            ]),
        }
    }
}

impl Default for PipeBrush {
    fn default() -> Self {
        Self::new()
    }
}

impl Brush for PipeBrush {
    fn name(&self) -> &'static str {
        "Pipe"
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
        let spec = RingSpec::full_ring(
            side_count(&self.parameters)?,
            self.parameters.numeric(WALL_WIDTH)?,
        );
        MakeArch::new(spec, *bounds).execute(ctx, texture)
    }
}
