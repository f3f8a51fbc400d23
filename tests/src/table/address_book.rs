/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use mapi::{
    property::{AttributeMapping, Registry, ADDRESS_BOOK, MAILBOX},
    table::{get::PropertyResolver, Table, TableType},
    tags::ptype,
    Error, PropTag, PropertyValue,
};

use crate::table::directory;

// ADDRESS_BOOK plus the folder identifiers that table filters require.
const ADDRESS_BOOK_FOLDER_MAPPINGS: &[AttributeMapping] = &[
    AttributeMapping::new(PropTag::FOLDER_ID, "PidTagFolderId"),
    AttributeMapping::new(PropTag::PARENT_FOLDER_ID, "PidTagParentFolderId"),
    AttributeMapping::new(PropTag::DISPLAY_NAME, "displayName"),
    AttributeMapping::new(PropTag::ACCOUNT, "sAMAccountName"),
    AttributeMapping::new(PropTag::EMAIL_ADDRESS, "legacyExchangeDN"),
    AttributeMapping::reference(PropTag::ADDRESS_BOOK_HOME_MTA, "homeMTA", "legacyExchangeDN"),
    AttributeMapping::reference(
        PropTag::ADDRESS_BOOK_HOME_MESSAGE_DATABASE,
        "homeMDB",
        "legacyExchangeDN",
    ),
    AttributeMapping::new(PropTag::ADDRESS_BOOK_PROXY_ADDRESSES, "proxyAddresses"),
];

static ADDRESS_BOOK_FOLDERS: Registry =
    Registry::new("address-book-folders", ADDRESS_BOOK_FOLDER_MAPPINGS);

#[test]
fn address_book_references() {
    let directory = directory("addressbook");
    let directory = &*directory;

    let mut table = Table::new(TableType::Folder, 9).with_registry(&ADDRESS_BOOK_FOLDERS);
    table
        .set_columns(&[
            PropTag::DISPLAY_NAME,
            PropTag::ACCOUNT,
            PropTag::EMAIL_ADDRESS.with_type(ptype::STRING8),
            PropTag::ADDRESS_BOOK_HOME_MESSAGE_DATABASE,
            PropTag::ADDRESS_BOOK_HOME_MTA.with_type(ptype::UNICODE),
            PropTag::ADDRESS_BOOK_PROXY_ADDRESSES,
        ])
        .unwrap();

    assert_eq!(
        table.get_row(directory, "jdoe", 0).unwrap(),
        vec![
            Some(PropertyValue::Unicode("John Doe".to_string())),
            Some(PropertyValue::Unicode("jdoe".to_string())),
            Some(PropertyValue::String8("/o=org/ou=users/cn=jdoe".to_string())),
            Some(PropertyValue::String8(
                "/o=org/ou=servers/cn=store".to_string()
            )),
            Some(PropertyValue::Unicode("/o=org/ou=servers/cn=mta".to_string())),
            Some(PropertyValue::MvUnicode(vec![
                "SMTP:john@example.org".to_string(),
                "smtp:jdoe@example.org".to_string(),
            ])),
        ]
    );

    // The default resolver serves the same values
    let resolver: PropertyResolver = PropertyResolver::default();
    let mut table = Table::new(TableType::Folder, 9).with_registry(&ADDRESS_BOOK_FOLDERS);
    assert_eq!(
        resolver.get_property(
            &mut table,
            directory,
            "jdoe",
            PropTag::ADDRESS_BOOK_HOME_MTA,
            0
        ),
        Ok(PropertyValue::String8("/o=org/ou=servers/cn=mta".to_string()))
    );
}

#[test]
fn registries() {
    assert_eq!(ADDRESS_BOOK.attribute_for(PropTag::DISPLAY_NAME), Some("displayName"));
    assert_eq!(MAILBOX.attribute_for(PropTag::DISPLAY_NAME), Some("PidTagDisplayName"));
    assert_eq!(
        ADDRESS_BOOK.reference_target(PropTag::ADDRESS_BOOK_HOME_MESSAGE_DATABASE),
        Some("legacyExchangeDN")
    );
    assert_eq!(MAILBOX.property_id_for("homeMDB"), None);
    assert_eq!(
        ADDRESS_BOOK.property_id_for("homeMDB"),
        Some(PropTag::ADDRESS_BOOK_HOME_MESSAGE_DATABASE)
    );
    assert_eq!(PropTag::ERROR.typ(), ptype::ERROR);

    // Address book registry cannot build folder filters
    let directory = directory("addressbook");
    let mut table = Table::new(TableType::Folder, 9).with_registry(&ADDRESS_BOOK);
    assert_eq!(
        table.get_property(&*directory, "jdoe", PropTag::DISPLAY_NAME, 0),
        Err(Error::TooComplex)
    );
}
