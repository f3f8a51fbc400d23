/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::time::Duration;

use ahash::AHashMap;
use r2d2::{ManageConnection, Pool};
use utils::config::Config;

use crate::{ldap::LdapDirectory, memory::MemoryDirectory, DirectoryConfig};

pub trait ConfigDirectory {
    fn parse_directory(&self) -> utils::config::Result<DirectoryConfig>;
}

impl ConfigDirectory for Config {
    fn parse_directory(&self) -> utils::config::Result<DirectoryConfig> {
        let mut config = DirectoryConfig {
            directories: AHashMap::new(),
        };
        for id in self.sub_keys("directory") {
            if !self.property_or_static::<bool>(("directory", id, "enable"), "true")? {
                tracing::debug!("Skipping disabled directory {id:?}.");
                continue;
            }

            let directory = match self.value_require(("directory", id, "type"))? {
                "ldap" => LdapDirectory::from_config(self, ("directory", id))?,
                "memory" => MemoryDirectory::from_config(self, ("directory", id))?,
                unknown => {
                    return Err(format!("Unknown directory type: {unknown:?}"));
                }
            };

            config.directories.insert(id.to_string(), directory);
        }

        Ok(config)
    }
}

pub(crate) fn build_pool<M: ManageConnection>(
    config: &Config,
    prefix: &str,
    manager: M,
) -> utils::config::Result<Pool<M>> {
    Ok(Pool::builder()
        .min_idle(Some(
            config.property_or_static((prefix, "pool.min-connections"), "0")?,
        ))
        .max_size(config.property_or_static((prefix, "pool.max-connections"), "10")?)
        .max_lifetime(
            config
                .property_or_static::<Duration>((prefix, "pool.max-lifetime"), "30m")?
                .into(),
        )
        .idle_timeout(
            config
                .property_or_static::<Duration>((prefix, "pool.idle-timeout"), "10m")?
                .into(),
        )
        .connection_timeout(config.property_or_static((prefix, "pool.connect-timeout"), "30s")?)
        .test_on_check_out(true)
        .build_unchecked(manager))
}
