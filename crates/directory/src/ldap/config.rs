/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::sync::Arc;

use ldap3::LdapConnSettings;
use utils::config::{utils::AsKey, Config};

use crate::{config::build_pool, Directory};

use super::{Bind, LdapConnectionManager, LdapDirectory};

impl LdapDirectory {
    pub fn from_config(
        config: &Config,
        prefix: impl AsKey,
    ) -> utils::config::Result<Arc<dyn Directory>> {
        let prefix = prefix.as_key();
        let bind_dn = if let Some(dn) = config.value((&prefix, "bind.dn")) {
            Bind::new(
                dn.to_string(),
                config.value_require((&prefix, "bind.secret"))?.to_string(),
            )
            .into()
        } else {
            None
        };

        let manager = LdapConnectionManager::new(
            config.value_require((&prefix, "address"))?.to_string(),
            LdapConnSettings::new()
                .set_conn_timeout(config.property_or_static((&prefix, "timeout"), "30s")?)
                .set_starttls(config.property_or_static((&prefix, "tls"), "false")?)
                .set_no_tls_verify(
                    config.property_or_static((&prefix, "allow-invalid-certs"), "false")?,
                ),
            bind_dn,
        );

        Ok(Arc::new(LdapDirectory {
            pool: build_pool(config, &prefix, manager)?,
            base_dn: config.value_require((&prefix, "base-dn"))?.to_string(),
        }))
    }
}
