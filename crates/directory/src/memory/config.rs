/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::sync::Arc;

use utils::config::{utils::AsKey, Config};

use crate::{Directory, Entry};

use super::MemoryDirectory;

impl MemoryDirectory {
    pub fn from_config(
        config: &Config,
        prefix: impl AsKey,
    ) -> utils::config::Result<Arc<dyn Directory>> {
        Self::parse(config, prefix).map(|directory| Arc::new(directory) as Arc<dyn Directory>)
    }

    pub fn parse(config: &Config, prefix: impl AsKey) -> utils::config::Result<Self> {
        let prefix = prefix.as_key();
        let mut directory =
            MemoryDirectory::new(config.value_require((prefix.as_str(), "base-dn"))?);

        for entry_id in config.sub_keys((prefix.as_str(), "entries")) {
            let mut entry = Entry::new(
                config.value_require((prefix.as_str(), "entries", entry_id, "dn"))?,
            );

            for name in config.sub_keys((prefix.as_str(), "entries", entry_id)) {
                if name != "dn" {
                    entry = entry.with_attribute(
                        name,
                        config
                            .values((prefix.as_str(), "entries", entry_id, name))
                            .map(|(_, v)| v),
                    );
                }
            }

            directory.insert(entry);
        }

        tracing::debug!(
            context = "directory",
            event = "config",
            protocol = "memory",
            base_dn = directory.base_dn.as_str(),
            entries = directory.entries.len(),
            "Loaded in-memory directory"
        );

        Ok(directory)
    }
}
