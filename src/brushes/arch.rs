use crate::config::{
    DEFAULT_WALL_WIDTH, MAX_ARC, MAX_ARCH_HEIGHT, MAX_START_ANGLE, MAX_TILT_PERCENT, MAX_WALL_WIDTH,
    MIN_ARC, MIN_WALL_WIDTH,
};
use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::creation::MakeArch;
use crate::operations::ring::RingSpec;
use crate::parameters::{Dependency, Parameter, ParameterSet};
use crate::topology::{Solid, TextureRef};

use super::{side_count, sides_parameter, Brush, WALL_WIDTH};

const ARC: &str = "arc";
const START_ANGLE: &str = "start_angle";
const HEIGHT: &str = "height";
const CURVED: &str = "curved";
const TILT: &str = "tilt";

/// Wall segments along an elliptical arc.
///
/// With a height the segments climb in steps; with `curved` set they form a
/// continuous spiral ramp whose walking surface can be tilted across the
/// wall.
#[derive(Debug, Clone)]
pub struct ArchBrush {
    parameters: ParameterSet,
}

impl ArchBrush {
    #[must_use]
    pub fn new() -> Self {
        let parameters = ParameterSet::new(vec![
            sides_parameter(),
            Parameter::numeric(
                WALL_WIDTH,
                "Wall width",
                MIN_WALL_WIDTH,
                MAX_WALL_WIDTH,
                DEFAULT_WALL_WIDTH,
            ),
            Parameter::numeric(ARC, "Arc", MIN_ARC, MAX_ARC, 360.0),
            Parameter::numeric(START_ANGLE, "Start angle", 0.0, MAX_START_ANGLE, 0.0),
            Parameter::numeric(HEIGHT, "Arch height", -MAX_ARCH_HEIGHT, MAX_ARCH_HEIGHT, 0.0),
            Parameter::boolean(CURVED, "Curved ramp", false),
            Parameter::numeric(TILT, "Tilt percentage", -MAX_TILT_PERCENT, MAX_TILT_PERCENT, 0.0)
                .with_decimals(1)
                .disabled(),
        ])
        .with_dependency(Dependency::enabled_if(TILT, CURVED));
        Self { parameters }
    }

    fn ring_spec(&self) -> Result<RingSpec> {
        let params = &self.parameters;
        let curved = params.boolean(CURVED)?;
        Ok(RingSpec {
            sides: side_count(params)?,
            wall_width: params.numeric(WALL_WIDTH)?,
            arc_degrees: params.numeric(ARC)?,
            start_degrees: params.numeric(START_ANGLE)?,
            height_delta: params.numeric(HEIGHT)?,
            curved,
            tilt_percent: if curved { params.numeric(TILT)? } else { 0.0 },
        })
    }
}

impl Default for ArchBrush {
    fn default() -> Self {
        Self::new()
    }
}

impl Brush for ArchBrush {
    fn name(&self) -> &'static str {
        "Arch"
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
        MakeArch::new(self.ring_spec()?, *bounds).execute(ctx, texture)
    }
}
