use crate::err::{DriverError, Result};
use serde::{Deserialize, Serialize};
use std::{io, path::Path, str::FromStr};

/// Bounds for runs that might not terminate. Absent means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conf {
    /// steps a Turing machine may take
    #[serde(default)]
    pub step_limit: Option<u64>,
    /// candidates a single minimisation may try
    #[serde(default)]
    pub search_limit: Option<u64>,
}

impl FromStr for Conf {
    type Err = DriverError;
    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl Conf {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            | io::ErrorKind::NotFound => DriverError::FileNotFound(path.to_path_buf()),
            | _ => e.into(),
        })?;
        let conf = text.parse()?;
        log::debug!("loaded configuration from `{}`: {:?}", path.display(), conf);
        Ok(conf)
    }
    /// Values set in `other` win.
    pub fn merge(self, other: Conf) -> Conf {
        Conf {
            step_limit: other.step_limit.or(self.step_limit),
            search_limit: other.search_limit.or(self.search_limit),
        }
    }
}
