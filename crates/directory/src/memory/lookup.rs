/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::{Directory, Entry, ResultSet, Scope};

use super::{filter::Filter, MemoryDirectory};

impl Directory for MemoryDirectory {
    fn search(
        &self,
        base: &str,
        scope: Scope,
        filter: &str,
        attrs: &[&str],
    ) -> crate::Result<ResultSet> {
        let filter = Filter::parse(filter)?;
        let base = base.to_lowercase();
        let all_attrs = attrs.is_empty() || attrs.contains(&"*");

        Ok(ResultSet::new(
            self.entries
                .iter()
                .filter(|entry| in_scope(&entry.dn, &base, scope) && filter.matches(entry))
                .map(|entry| {
                    if all_attrs {
                        entry.clone()
                    } else {
                        Entry {
                            dn: entry.dn.clone(),
                            attributes: entry
                                .attributes
                                .iter()
                                .filter(|(name, _)| {
                                    attrs.iter().any(|attr| attr.eq_ignore_ascii_case(name))
                                })
                                .map(|(name, values)| (name.clone(), values.clone()))
                                .collect(),
                        }
                    }
                })
                .collect(),
        ))
    }

    fn base_dn(&self) -> &str {
        &self.base_dn
    }
}

fn in_scope(dn: &str, base: &str, scope: Scope) -> bool {
    let dn = dn.to_lowercase();
    match scope {
        Scope::Base => dn == base,
        Scope::OneLevel => dn
            .split_once(',')
            .is_some_and(|(_, parent)| parent.trim_start() == base),
        Scope::Subtree => {
            base.is_empty()
                || dn == base
                || dn
                    .strip_suffix(base)
                    .is_some_and(|child| child.trim_end().ends_with(','))
        }
    }
}
