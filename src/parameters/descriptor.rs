use serde::Serialize;

/// The kind of control a parameter is shown as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Numeric,
    Boolean,
}

impl ParameterKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
        }
    }
}

/// A parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Numeric(f64),
    Boolean(bool),
}

impl ParameterValue {
    #[must_use]
    pub fn kind(self) -> ParameterKind {
        match self {
            Self::Numeric(_) => ParameterKind::Numeric,
            Self::Boolean(_) => ParameterKind::Boolean,
        }
    }

    /// `true` for a checked flag or a non-zero number.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Numeric(v) => v != 0.0,
            Self::Boolean(b) => b,
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Numeric(f64::from(value))
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// One bounded control of a brush.
///
/// `key` is the stable lookup name, `label` what the property panel shows.
/// Boolean parameters use the range `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ParameterKind,
    pub min: f64,
    pub max: f64,
    /// Decimal places the panel displays and steps by.
    pub decimals: u32,
    pub default: ParameterValue,
    pub(crate) value: ParameterValue,
    pub(crate) enabled: bool,
}

impl Parameter {
    /// A numeric parameter initialised to `default`.
    #[must_use]
    pub fn numeric(
        key: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            key,
            label,
            kind: ParameterKind::Numeric,
            min,
            max,
            decimals: 0,
            default: ParameterValue::Numeric(default),
            value: ParameterValue::Numeric(default),
            enabled: true,
        }
    }

    /// A boolean parameter initialised to `default`.
    #[must_use]
    pub fn boolean(key: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            key,
            label,
            kind: ParameterKind::Boolean,
            min: 0.0,
            max: 1.0,
            decimals: 0,
            default: ParameterValue::Boolean(default),
            value: ParameterValue::Boolean(default),
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Starts the parameter disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[must_use]
    pub fn value(&self) -> ParameterValue {
        self.value
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` if the current value lies within `[min, max]`.
    #[must_use]
    pub fn in_range(&self) -> bool {
        match self.value {
            ParameterValue::Numeric(v) => v >= self.min && v <= self.max,
            ParameterValue::Boolean(_) => true,
        }
    }
}
