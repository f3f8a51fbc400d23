/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::time::Duration;

use super::Config;

impl Config {
    pub fn property<T: ParseValue>(&self, key: impl AsKey) -> super::Result<Option<T>> {
        let key = key.as_key();
        if let Some(value) = self.keys.get(&key) {
            T::parse_value(key, value).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn property_or_static<T: ParseValue>(
        &self,
        key: impl AsKey,
        default: &str,
    ) -> super::Result<T> {
        let key = key.as_key();
        let value = match self.keys.get(&key) {
            Some(value) => value.as_str(),
            None => {
                tracing::trace!(
                    context = "config",
                    event = "default",
                    key = key.as_str(),
                    default = default,
                    "Applied default value"
                );
                default
            }
        };
        T::parse_value(key, value)
    }

    /// Returns the distinct key segments directly below `prefix`, in key order.
    pub fn sub_keys<'x, 'y: 'x>(&'y self, prefix: impl AsKey) -> impl Iterator<Item = &'x str> + 'x {
        let mut last_key = "";
        let prefix = prefix.as_prefix();

        self.keys.keys().filter_map(move |key| {
            let key = key.strip_prefix(&prefix)?;
            let key = key.split_once('.').map_or(key, |(key, _)| key);
            if last_key != key {
                last_key = key;
                Some(key)
            } else {
                None
            }
        })
    }

    pub fn value(&self, key: impl AsKey) -> Option<&str> {
        self.keys.get(&key.as_key()).map(|s| s.as_str())
    }

    pub fn value_require(&self, key: impl AsKey) -> super::Result<&str> {
        self.keys
            .get(&key.as_key())
            .map(|s| s.as_str())
            .ok_or_else(|| format!("Missing property {:?}.", key.as_key()))
    }

    pub fn values(&self, prefix: impl AsKey) -> impl Iterator<Item = (&str, &str)> {
        let full_prefix = prefix.as_key();
        let prefix = prefix.as_prefix();

        self.keys.iter().filter_map(move |(key, value)| {
            if key.starts_with(&prefix) || key == &full_prefix {
                (key.as_str(), value.as_str()).into()
            } else {
                None
            }
        })
    }
}

pub trait ParseValue: Sized {
    fn parse_value(key: impl AsKey, value: &str) -> super::Result<Self>;
}

impl ParseValue for String {
    fn parse_value(_key: impl AsKey, value: &str) -> super::Result<Self> {
        Ok(value.to_string())
    }
}

macro_rules! parse_integer {
    ($($t:ty),+) => {
        $(
            impl ParseValue for $t {
                fn parse_value(key: impl AsKey, value: &str) -> super::Result<Self> {
                    value.parse().map_err(|_| {
                        format!(
                            "Invalid integer value {:?} for property {:?}.",
                            value,
                            key.as_key()
                        )
                    })
                }
            }
        )+
    };
}

parse_integer!(u16, u32, u64, usize, i32, i64);

impl ParseValue for bool {
    fn parse_value(key: impl AsKey, value: &str) -> super::Result<Self> {
        value.parse().map_err(|_| {
            format!(
                "Invalid boolean value {:?} for property {:?}.",
                value,
                key.as_key()
            )
        })
    }
}

impl ParseValue for Duration {
    fn parse_value(key: impl AsKey, value: &str) -> super::Result<Self> {
        let mut digits = String::new();
        let mut multiplier = String::new();

        for ch in value.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else if !ch.is_ascii_whitespace() {
                multiplier.push(ch.to_ascii_lowercase());
            }
        }

        let multiplier = match multiplier.as_str() {
            "d" => 24 * 60 * 60 * 1000,
            "h" => 60 * 60 * 1000,
            "m" => 60 * 1000,
            "s" => 1000,
            "ms" | "" => 1,
            _ => {
                return Err(format!(
                    "Invalid duration value {:?} for property {:?}.",
                    value,
                    key.as_key()
                ))
            }
        };

        digits
            .parse::<u64>()
            .ok()
            .filter(|num| *num > 0)
            .and_then(|num| num.checked_mul(multiplier))
            .map(Duration::from_millis)
            .ok_or_else(|| {
                format!(
                    "Invalid duration value {:?} for property {:?}.",
                    value,
                    key.as_key()
                )
            })
    }
}

pub trait AsKey: Clone {
    fn as_key(&self) -> String;
    fn as_prefix(&self) -> String;
}

impl AsKey for &str {
    fn as_key(&self) -> String {
        self.to_string()
    }

    fn as_prefix(&self) -> String {
        format!("{self}.")
    }
}

impl AsKey for String {
    fn as_key(&self) -> String {
        self.to_string()
    }

    fn as_prefix(&self) -> String {
        format!("{self}.")
    }
}

impl AsKey for &String {
    fn as_key(&self) -> String {
        self.to_string()
    }

    fn as_prefix(&self) -> String {
        format!("{self}.")
    }
}

impl AsKey for (&str, &str) {
    fn as_key(&self) -> String {
        format!("{}.{}", self.0, self.1)
    }

    fn as_prefix(&self) -> String {
        format!("{}.{}.", self.0, self.1)
    }
}

impl AsKey for (&String, &str) {
    fn as_key(&self) -> String {
        format!("{}.{}", self.0, self.1)
    }

    fn as_prefix(&self) -> String {
        format!("{}.{}.", self.0, self.1)
    }
}

impl AsKey for (&str, &str, &str) {
    fn as_key(&self) -> String {
        format!("{}.{}.{}", self.0, self.1, self.2)
    }

    fn as_prefix(&self) -> String {
        format!("{}.{}.{}.", self.0, self.1, self.2)
    }
}

impl AsKey for (&str, &str, &str, &str) {
    fn as_key(&self) -> String {
        format!("{}.{}.{}.{}", self.0, self.1, self.2, self.3)
    }

    fn as_prefix(&self) -> String {
        format!("{}.{}.{}.{}.", self.0, self.1, self.2, self.3)
    }
}
