use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::creation::MakeWedge;
use crate::parameters::ParameterSet;
use crate::topology::{Solid, TextureRef};

use super::Brush;

/// A ramp rising towards +Y across the dragged volume.
#[derive(Debug, Clone, Default)]
pub struct WedgeBrush {
    parameters: ParameterSet,
}

impl WedgeBrush {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Brush for WedgeBrush {
    fn name(&self) -> &'static str {
        "Wedge"
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
        Ok(vec![MakeWedge::new(*bounds).execute(ctx, texture)?])
    }
}
