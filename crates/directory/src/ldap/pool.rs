/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use ldap3::{exop::WhoAmI, LdapConn, LdapError};
use r2d2::ManageConnection;

use super::LdapConnectionManager;

impl ManageConnection for LdapConnectionManager {
    type Connection = LdapConn;
    type Error = LdapError;

    /// Attempts to create a new connection.
    fn connect(&self) -> Result<Self::Connection, Self::Error> {
        let mut ldap = LdapConn::with_settings(self.settings.clone(), &self.address)?;

        if let Some(bind) = &self.bind_dn {
            ldap.simple_bind(&bind.dn, &bind.password)?.success()?;
        }

        tracing::debug!(
            context = "directory",
            event = "connect",
            protocol = "ldap",
            address = self.address.as_str(),
            "Connected to LDAP server"
        );

        Ok(ldap)
    }

    /// Determines if the connection is still connected to the server.
    fn is_valid(&self, conn: &mut Self::Connection) -> Result<(), Self::Error> {
        conn.extended(WhoAmI).map(|_| ())
    }

    /// Synchronously determine if the connection is no longer usable, if possible.
    fn has_broken(&self, conn: &mut Self::Connection) -> bool {
        conn.is_closed()
    }
}
