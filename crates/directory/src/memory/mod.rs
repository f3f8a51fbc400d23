/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::Entry;

pub mod config;
pub mod filter;
pub mod lookup;

#[derive(Debug, Default)]
pub struct MemoryDirectory {
    base_dn: String,
    entries: Vec<Entry>,
}

impl MemoryDirectory {
    pub fn new(base_dn: impl Into<String>) -> Self {
        MemoryDirectory {
            base_dn: base_dn.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.insert(entry);
        self
    }

    /// Entries are returned in insertion order.
    pub fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}
