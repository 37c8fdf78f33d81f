//! Ordered, bounded parameter sets with declarative enablement rules.
//!
//! A brush exposes its controls as a [`ParameterSet`]. The set owns the
//! current values, and after every change it re-evaluates its
//! [`Dependency`] table, which only ever flips `enabled` flags. Values of
//! disabled parameters are kept untouched and are skipped by validation.

mod descriptor;

pub use descriptor::{Parameter, ParameterKind, ParameterValue};

use serde::Serialize;

use crate::error::ParameterError;

/// Enables `target` exactly when the truthiness of `source` equals
/// `enabled_when`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub target: &'static str,
    pub source: &'static str,
    pub enabled_when: bool,
}

impl Dependency {
    /// `target` is enabled only while `source` is checked.
    #[must_use]
    pub fn enabled_if(target: &'static str, source: &'static str) -> Self {
        Self {
            target,
            source,
            enabled_when: true,
        }
    }

    /// `target` is enabled only while `source` is unchecked.
    #[must_use]
    pub fn disabled_if(target: &'static str, source: &'static str) -> Self {
        Self {
            target,
            source,
            enabled_when: false,
        }
    }
}

/// The ordered controls of one brush.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
    dependencies: Vec<Dependency>,
}

impl ParameterSet {
    #[must_use]
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters,
            dependencies: Vec::new(),
        }
    }

    /// Adds an enablement rule and applies it immediately.
    #[must_use]
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self.evaluate_dependencies();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.parameters.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    #[must_use]
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.key == key)
    }

    fn lookup(&self, key: &str) -> Result<&Parameter, ParameterError> {
        self.get(key)
            .ok_or_else(|| ParameterError::Unknown(key.to_owned()))
    }

    /// Reads a numeric parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or names a boolean parameter.
    pub fn numeric(&self, key: &str) -> Result<f64, ParameterError> {
        let param = self.lookup(key)?;
        match param.value {
            ParameterValue::Numeric(v) => Ok(v),
            ParameterValue::Boolean(_) => Err(ParameterError::KindMismatch {
                key: param.key,
                expected: ParameterKind::Numeric.as_str(),
            }),
        }
    }

    /// Reads a boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or names a numeric parameter.
    pub fn boolean(&self, key: &str) -> Result<bool, ParameterError> {
        let param = self.lookup(key)?;
        match param.value {
            ParameterValue::Boolean(b) => Ok(b),
            ParameterValue::Numeric(_) => Err(ParameterError::KindMismatch {
                key: param.key,
                expected: ParameterKind::Boolean.as_str(),
            }),
        }
    }

    /// Stores a new value and re-evaluates the dependency table.
    ///
    /// Out-of-range numbers are stored as given so the panel can hold
    /// half-typed input; [`Self::validate`] reports them.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value has the wrong kind,
    /// or a number is NaN or infinite. The set is unchanged on error.
    pub fn set(
        &mut self,
        key: &str,
        value: impl Into<ParameterValue>,
    ) -> Result<(), ParameterError> {
        let value = value.into();
        let param = self
            .parameters
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| ParameterError::Unknown(key.to_owned()))?;
        if value.kind() != param.kind {
            return Err(ParameterError::KindMismatch {
                key: param.key,
                expected: param.kind.as_str(),
            });
        }
        if let ParameterValue::Numeric(v) = value {
            if !v.is_finite() {
                return Err(ParameterError::NotFinite { key: param.key });
            }
        }
        param.value = value;
        self.evaluate_dependencies();
        Ok(())
    }

    /// Restores every parameter to its default value.
    pub fn reset(&mut self) {
        for param in &mut self.parameters {
            param.value = param.default;
        }
        self.evaluate_dependencies();
    }

    /// Applies the dependency table to the `enabled` flags.
    ///
    /// Rules referring to unknown keys are skipped; see
    /// [`Self::check_dependencies`].
    pub fn evaluate_dependencies(&mut self) {
        for dep in &self.dependencies {
            let Some(source) = self.parameters.iter().find(|p| p.key == dep.source) else {
                continue;
            };
            let enabled = source.value.is_truthy() == dep.enabled_when;
            if let Some(target) = self.parameters.iter_mut().find(|p| p.key == dep.target) {
                target.enabled = enabled;
            }
        }
    }

    /// Checks that every dependency names existing parameters.
    ///
    /// # Errors
    ///
    /// Returns the first unknown key.
    pub fn check_dependencies(&self) -> Result<(), ParameterError> {
        for dep in &self.dependencies {
            self.lookup(dep.source)?;
            self.lookup(dep.target)?;
        }
        Ok(())
    }

    /// Checks every enabled parameter against its bounds.
    ///
    /// # Errors
    ///
    /// Returns the first enabled parameter whose value is out of range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for param in self.parameters.iter().filter(|p| p.enabled) {
            if let ParameterValue::Numeric(value) = param.value {
                if !param.in_range() {
                    return Err(ParameterError::OutOfRange {
                        key: param.key,
                        value,
                        min: param.min,
                        max: param.max,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}
