//! Mapper configuration.

use crate::MapperError;

/// What to do when a type/value rename and another rule both apply to
/// one symbol.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConflictPolicy {
    /// The rename wins; the conflict is reported as a warning.
    #[default]
    PreferRename,
    /// The conflict fails the build.
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapperConfig {
    /// Appended to a type's name when it has to be renamed.
    pub rename_suffix: String,
    pub conflict_policy: ConflictPolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            rename_suffix: "T".to_string(),
            conflict_policy: ConflictPolicy::PreferRename,
        }
    }
}

impl MapperConfig {
    /// Default settings, but rule conflicts are errors.
    pub fn strict() -> Self {
        MapperConfig {
            conflict_policy: ConflictPolicy::Reject,
            ..MapperConfig::default()
        }
    }

    #[must_use]
    pub fn with_rename_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.rename_suffix = suffix.into();
        self
    }

    pub fn validate(&self) -> Result<(), MapperError> {
        if self.rename_suffix.is_empty() {
            return Err(MapperError::InvalidConfig {
                reason: "rename suffix must not be empty".to_string(),
            });
        }
        if !self
            .rename_suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            return Err(MapperError::InvalidConfig {
                reason: format!(
                    "rename suffix `{}` is not valid in an identifier",
                    self.rename_suffix
                ),
            });
        }
        Ok(())
    }

    /// The name a renamed type gets.
    pub(crate) fn renamed(&self, name: &str) -> String {
        format!("{name}{}", self.rename_suffix)
    }
}
