// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported listings

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable table
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Machine-readable rendering, `None` for [`OutputFormat::Table`].
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Table => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_not_serialized() {
        assert_eq!(OutputFormat::Table.serialize(&[1, 2]).unwrap(), None);
        let yaml = OutputFormat::Yaml.serialize(&vec!["en", "ta"]).unwrap().unwrap();
        assert_eq!(yaml, "- en\n- ta\n");
    }
}
