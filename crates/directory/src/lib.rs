/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

use ahash::AHashMap;
use ldap3::LdapError;

pub mod config;
pub mod ldap;
pub mod memory;

/// A record-oriented attribute store searched with LDAP filter strings.
pub trait Directory: Sync + Send {
    fn search(&self, base: &str, scope: Scope, filter: &str, attrs: &[&str])
        -> Result<ResultSet>;

    /// Root that subtree searches are scoped at when the caller has no
    /// better base.
    fn base_dn(&self) -> &str;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Base,
    OneLevel,
    Subtree,
}

/// Wildcard attribute request.
pub const ALL_ATTRIBUTES: &[&str] = &["*"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entry {
    pub dn: String,
    pub attributes: AHashMap<String, Vec<String>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub entries: Vec<Entry>,
}

#[derive(Debug)]
pub enum DirectoryError {
    Ldap(LdapError),
    InvalidFilter(String),
    Unsupported,
    TimedOut,
}

#[derive(Default, Clone, Debug)]
pub struct DirectoryConfig {
    pub directories: AHashMap<String, Arc<dyn Directory>>,
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

impl Entry {
    pub fn new(dn: impl Into<String>) -> Self {
        Entry {
            dn: dn.into(),
            attributes: AHashMap::new(),
        }
    }

    pub fn with_attribute<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Attribute names are matched case-insensitively, as directory servers do.
    pub fn attribute(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .get(name)
            .or_else(|| {
                self.attributes
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, values)| values)
            })
            .map(|values| values.as_slice())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.attribute(name)
            .and_then(|values| values.first())
            .map(|value| value.as_str())
    }
}

impl ResultSet {
    pub fn new(entries: Vec<Entry>) -> Self {
        ResultSet { entries }
    }

    pub fn count(&self) -> u32 {
        u32::try_from(self.entries.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: u32) -> Option<&Entry> {
        self.entries.get(usize::try_from(position).ok()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl From<LdapError> for DirectoryError {
    fn from(error: LdapError) -> Self {
        tracing::warn!(
            context = "directory",
            event = "error",
            protocol = "ldap",
            reason = %error,
            "LDAP directory error"
        );

        DirectoryError::Ldap(error)
    }
}

impl From<r2d2::Error> for DirectoryError {
    fn from(error: r2d2::Error) -> Self {
        tracing::warn!(
            context = "directory",
            event = "error",
            protocol = "ldap",
            reason = %error,
            "Failed to obtain LDAP connection"
        );

        DirectoryError::TimedOut
    }
}

impl DirectoryError {
    pub fn invalid_filter(filter: &str, reason: &str) -> Self {
        tracing::debug!(
            context = "directory",
            event = "error",
            filter = filter,
            reason = reason,
            "Invalid search filter"
        );

        DirectoryError::InvalidFilter(format!("{reason} in filter {filter:?}"))
    }

    pub fn unsupported(protocol: &str, method: &str) -> Self {
        tracing::warn!(
            context = "directory",
            event = "error",
            protocol = protocol,
            method = method,
            "Method not supported by directory"
        );
        DirectoryError::Unsupported
    }
}

impl std::error::Error for DirectoryError {}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::Ldap(error) => write!(f, "LDAP error: {error}"),
            DirectoryError::InvalidFilter(reason) => write!(f, "Invalid filter: {reason}"),
            DirectoryError::Unsupported => write!(f, "Unsupported directory operation"),
            DirectoryError::TimedOut => write!(f, "Directory timed out"),
        }
    }
}

impl Debug for dyn Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Directory")
            .field("type", &self.type_name())
            .field("base_dn", &self.base_dn())
            .finish()
    }
}
