/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::{DirectoryError, Scope, ALL_ATTRIBUTES};

use crate::directory::parse_config;

#[test]
fn memory_directory() {
    crate::enable_logging();

    let config = parse_config();
    assert!(config.directories.contains_key("ldap"));
    assert!(!config.directories.contains_key("disabled"));

    let mailbox = config.directories.get("mailbox").unwrap();
    assert_eq!(mailbox.base_dn(), "o=mailbox");

    // Subtree search in insertion order
    let rs = mailbox
        .search(
            mailbox.base_dn(),
            Scope::Subtree,
            "(&(PidTagParentFolderId=1)(PidTagFolderId=*))",
            ALL_ATTRIBUTES,
        )
        .unwrap();
    assert_eq!(
        rs.iter().map(|entry| entry.dn.as_str()).collect::<Vec<_>>(),
        [
            "cn=inbox,cn=root,o=mailbox",
            "cn=sent,cn=root,o=mailbox",
            "cn=contacts,cn=root,o=mailbox"
        ]
    );
    let inbox = rs.get(0).unwrap();
    assert_eq!(inbox.first_value("PidTagDisplayName"), Some("Inbox"));
    assert_eq!(inbox.first_value("pidtagsubfolders"), Some("false"));
    assert_eq!(inbox.first_value("PidTagContentCount"), Some("2"));

    // Escaped parentheses in values
    let rs = mailbox
        .search(
            mailbox.base_dn(),
            Scope::Subtree,
            "(PidTagDisplayName=Contacts \\28Personal\\29)",
            &["PidTagFolderId"],
        )
        .unwrap();
    assert_eq!(rs.count(), 1);
    assert_eq!(rs.get(0).unwrap().first_value("PidTagFolderId"), Some("4"));
    assert!(!rs.get(0).unwrap().has_attribute("PidTagDisplayName"));

    // Scopes
    for (base, scope, expected) in [
        ("cn=inbox,cn=root,o=mailbox", Scope::Base, 1),
        ("cn=inbox,cn=root,o=mailbox", Scope::OneLevel, 2),
        ("cn=inbox,cn=root,o=mailbox", Scope::Subtree, 3),
        ("cn=root,o=mailbox", Scope::OneLevel, 3),
        ("o=elsewhere", Scope::Subtree, 0),
    ] {
        assert_eq!(
            mailbox
                .search(base, scope, "(objectClass=*)", ALL_ATTRIBUTES)
                .unwrap()
                .count(),
            expected,
            "{base} {scope:?}"
        );
    }

    // Multi-valued attributes
    let addressbook = config.directories.get("addressbook").unwrap();
    let rs = addressbook
        .search(
            addressbook.base_dn(),
            Scope::Subtree,
            "(proxyAddresses=smtp:jdoe@*)",
            ALL_ATTRIBUTES,
        )
        .unwrap();
    assert_eq!(rs.count(), 1);
    assert_eq!(
        rs.get(0).unwrap().attribute("proxyAddresses").unwrap(),
        ["SMTP:john@example.org", "smtp:jdoe@example.org"]
    );

    // Invalid and unsupported filters
    assert!(matches!(
        mailbox.search("o=mailbox", Scope::Subtree, "(&(a=1)", ALL_ATTRIBUTES),
        Err(DirectoryError::InvalidFilter(_))
    ));
    assert!(matches!(
        mailbox.search("o=mailbox", Scope::Subtree, "(PidTagFolderId>=2)", ALL_ATTRIBUTES),
        Err(DirectoryError::Unsupported)
    ));
}

#[test]
fn invalid_config() {
    for config in [
        "[directory.x]\ntype = \"unknown\"\n",
        "[directory.x]\ntype = \"memory\"\n",
        "[directory.x]\ntype = \"ldap\"\nbase-dn = \"o=x\"\n",
        "[directory.x]\ntype = \"memory\"\nbase-dn = \"o=x\"\n[[directory.x.entries]]\ncn = \"a\"\n",
        "[directory.x]\ntype = \"ldap\"\naddress = \"ldap://localhost\"\nbase-dn = \"o=x\"\ntimeout = \"soon\"\n",
    ] {
        assert!(
            utils::config::Config::new(config)
                .and_then(|config| directory::config::ConfigDirectory::parse_directory(&config))
                .is_err(),
            "{config}"
        );
    }
}
