use std::fmt;
use std::str::FromStr;

use crate::catalog::PhyTables;
use crate::error::DecodeError;

/// PHY models with a built-in register map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhyModel {
    #[default]
    Ksz8081Rnb,
}

impl PhyModel {
    pub const SUPPORTED: &'static [PhyModel] = &[PhyModel::Ksz8081Rnb];

    pub fn name(&self) -> &'static str {
        match self {
            PhyModel::Ksz8081Rnb => "ksz8081rnb",
        }
    }

    pub fn tables(&self) -> &'static PhyTables {
        match self {
            PhyModel::Ksz8081Rnb => &crate::ksz8081::TABLES,
        }
    }
}

impl FromStr for PhyModel {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DecodeError::UnknownPhy(s.to_string()))
    }
}

impl fmt::Display for PhyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
