/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod memory;

use directory::{config::ConfigDirectory, DirectoryConfig};
use utils::config::Config;

pub const CONFIG: &str = r#"
[directory."ldap"]
type = "ldap"
address = "ldap://localhost:3893"
base-dn = "dc=example,dc=org"
timeout = "5s"

[directory."ldap".bind]
dn = "cn=serviceuser,ou=svcaccts,dc=example,dc=org"
secret = "mysecret"

[directory."disabled"]
type = "ldap"
enable = false

[directory."mailbox"]
type = "memory"
base-dn = "o=mailbox"

[[directory."mailbox".entries]]
dn = "cn=root,o=mailbox"
PidTagFolderId = 1
PidTagParentFolderId = 0
PidTagDisplayName = "Root"

[[directory."mailbox".entries]]
dn = "cn=inbox,cn=root,o=mailbox"
PidTagFolderId = 2
PidTagParentFolderId = 1
PidTagDisplayName = "Inbox"
PidTagContainerClass = "IPF.Note"
PidTagContentCount = 2
PidTagContentUnreadCount = 1
PidTagSubfolders = false
PidTagDepth = 1

[[directory."mailbox".entries]]
dn = "cn=sent,cn=root,o=mailbox"
PidTagFolderId = 3
PidTagParentFolderId = 1
PidTagDisplayName = "Sent Items"
PidTagContainerClass = "IPF.Note"
PidTagContentCount = 0
PidTagSubfolders = false

[[directory."mailbox".entries]]
dn = "cn=contacts,cn=root,o=mailbox"
PidTagFolderId = 4
PidTagParentFolderId = 1
PidTagDisplayName = "Contacts (Personal)"
PidTagContainerClass = "IPF.Contact"

[[directory."mailbox".entries]]
dn = "cn=100,cn=inbox,cn=root,o=mailbox"
PidTagMessageId = 100
PidTagParentFolderId = 2
PidTagSubject = "Quarterly report"
PidTagMessageClass = "IPM.Note"
PidTagMessageFlags = 1
PidTagHasAttachments = true
PidTagSourceKey = "AQIDBA=="

[[directory."mailbox".entries]]
dn = "cn=101,cn=inbox,cn=root,o=mailbox"
PidTagMessageId = 101
PidTagParentFolderId = 2
PidTagSubject = "Lunch?"
PidTagMessageClass = "IPM.Note"
PidTagMessageFlags = 0

[directory."addressbook"]
type = "memory"
base-dn = "o=org"

# Folder ids let this user back a folder table under a registry that maps them
[[directory."addressbook".entries]]
dn = "cn=jdoe,cn=users,o=org"
PidTagFolderId = 10
PidTagParentFolderId = 9
displayName = "John Doe"
sAMAccountName = "jdoe"
legacyExchangeDN = "/o=org/ou=users/cn=jdoe"
homeMDB = "cn=store,cn=servers,o=org"
homeMTA = "cn=mta,cn=servers,o=org"
proxyAddresses = ["SMTP:john@example.org", "smtp:jdoe@example.org"]

[[directory."addressbook".entries]]
dn = "cn=store,cn=servers,o=org"
legacyExchangeDN = "/o=org/ou=servers/cn=store"

[[directory."addressbook".entries]]
dn = "cn=mta,cn=servers,o=org"
legacyExchangeDN = "/o=org/ou=servers/cn=mta"
"#;

pub fn parse_config() -> DirectoryConfig {
    Config::new(CONFIG).unwrap().parse_directory().unwrap()
}
