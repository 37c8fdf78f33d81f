use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::creation::MakeBlock;
use crate::parameters::ParameterSet;
use crate::topology::{Solid, TextureRef};

use super::Brush;

/// A box filling the dragged volume.
#[derive(Debug, Clone, Default)]
pub struct BlockBrush {
    parameters: ParameterSet,
}

impl BlockBrush {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Brush for BlockBrush {
    fn name(&self) -> &'static str {
        "Block"
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
        Ok(vec![MakeBlock::new(*bounds).execute(ctx, texture)?])
    }
}
