/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod utils;

use std::collections::BTreeMap;

use toml::Value;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub keys: BTreeMap<String, String>,
}

pub type Result<T> = std::result::Result<T, String>;

impl Config {
    pub fn new(toml: &str) -> Result<Self> {
        let mut config = Config::default();
        config.parse(toml)?;
        Ok(config)
    }

    /// Flattens a TOML document into dotted keys. Array items are keyed by
    /// their zero-padded position, so `a = [1, 2]` becomes `a.0000` and `a.0001`.
    pub fn parse(&mut self, toml: &str) -> Result<()> {
        let table = toml
            .parse::<toml::Table>()
            .map_err(|err| format!("Failed to parse configuration: {err}"))?;

        for (key, value) in table {
            self.insert_value(key, value)?;
        }

        Ok(())
    }

    fn insert_value(&mut self, key: String, value: Value) -> Result<()> {
        let value = match value {
            Value::String(value) => value,
            Value::Integer(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::Boolean(value) => value.to_string(),
            Value::Datetime(value) => value.to_string(),
            Value::Array(items) => {
                for (pos, item) in items.into_iter().enumerate() {
                    self.insert_value(format!("{key}.{pos:04}"), item)?;
                }
                return Ok(());
            }
            Value::Table(table) => {
                for (sub_key, item) in table {
                    self.insert_value(format!("{key}.{sub_key}"), item)?;
                }
                return Ok(());
            }
        };

        if self.keys.insert(key.clone(), value).is_some() {
            Err(format!("Duplicate configuration key {key:?}."))
        } else {
            Ok(())
        }
    }
}
