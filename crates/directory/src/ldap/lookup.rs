/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use ahash::AHashMap;
use base64::{engine::general_purpose::STANDARD, Engine};
use ldap3::SearchEntry;

use crate::{Directory, Entry, ResultSet, Scope};

use super::LdapDirectory;

impl Directory for LdapDirectory {
    fn search(
        &self,
        base: &str,
        scope: Scope,
        filter: &str,
        attrs: &[&str],
    ) -> crate::Result<ResultSet> {
        let mut conn = self.pool.get()?;

        tracing::trace!(
            context = "directory",
            event = "search",
            protocol = "ldap",
            base = base,
            filter = filter,
            "Searching LDAP directory"
        );

        // Non-success result codes keep the connection in the pool
        let (rs, _res) = conn
            .search(base, scope.into(), filter, attrs.to_vec())?
            .success()?;

        Ok(ResultSet::new(
            rs.into_iter()
                .map(|entry| SearchEntry::construct(entry).into())
                .collect(),
        ))
    }

    fn base_dn(&self) -> &str {
        &self.base_dn
    }
}

impl From<Scope> for ldap3::Scope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Base => ldap3::Scope::Base,
            Scope::OneLevel => ldap3::Scope::OneLevel,
            Scope::Subtree => ldap3::Scope::Subtree,
        }
    }
}

impl From<SearchEntry> for Entry {
    fn from(entry: SearchEntry) -> Self {
        let mut attributes: AHashMap<String, Vec<String>> =
            entry.attrs.into_iter().collect();

        // Binary values are carried base64 encoded.
        for (name, values) in entry.bin_attrs {
            attributes
                .entry(name)
                .or_default()
                .extend(values.iter().map(|value| STANDARD.encode(value)));
        }

        Entry {
            dn: entry.dn,
            attributes,
        }
    }
}
