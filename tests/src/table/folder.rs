/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use mapi::{
    restriction::{RelOp, Restriction},
    sort::{SortDirection, SortOrder, SortOrderSet},
    table::{Table, TableType},
    Error, PropTag, PropertyValue, TaggedValue,
};

use crate::table::directory;

#[test]
fn folder_table() {
    let directory = directory("mailbox");
    let directory = &*directory;

    let mut table = Table::new(TableType::Folder, 1);
    table
        .set_sort_order(Some(&SortOrderSet::new([SortOrder::new(
            PropTag::DISPLAY_NAME,
            SortDirection::Ascend,
        )])))
        .unwrap();
    table
        .set_columns(&[
            PropTag::FOLDER_ID,
            PropTag::DISPLAY_NAME,
            PropTag::CONTAINER_CLASS,
            PropTag::CONTENT_COUNT,
            PropTag::SUBFOLDERS,
            PropTag::DEPTH,
        ])
        .unwrap();
    assert_eq!(table.row_count(directory).unwrap(), 3);

    assert_eq!(
        table.get_row(directory, "jdoe", 0).unwrap(),
        vec![
            Some(PropertyValue::I8(2)),
            Some(PropertyValue::Unicode("Inbox".to_string())),
            Some(PropertyValue::Unicode("IPF.Note".to_string())),
            Some(PropertyValue::Long(2)),
            Some(PropertyValue::Boolean(false)),
            Some(PropertyValue::Long(0)),
        ]
    );
    assert_eq!(
        table.get_row(directory, "jdoe", 2).unwrap(),
        vec![
            Some(PropertyValue::I8(4)),
            Some(PropertyValue::Unicode("Contacts (Personal)".to_string())),
            Some(PropertyValue::Unicode("IPF.Contact".to_string())),
            None,
            None,
            None,
        ]
    );

    // Narrow string requests are served from the wide mapping
    assert_eq!(
        table.get_property(
            directory,
            "jdoe",
            PropTag::DISPLAY_NAME.with_type(mapi::tags::ptype::STRING8),
            1
        ),
        Ok(PropertyValue::String8("Sent Items".to_string()))
    );

    assert_eq!(
        table.get_property(directory, "jdoe", PropTag::DISPLAY_NAME, 3),
        Err(Error::InvalidObject)
    );
    assert_eq!(
        table.get_property(directory, "jdoe", PropTag::SUBJECT, 0),
        Err(Error::NotFound)
    );
    assert_eq!(
        table.get_property(directory, "", PropTag::DISPLAY_NAME, 0),
        Err(Error::NotInitialized)
    );
}

#[test]
fn folder_restrictions() {
    let directory = directory("mailbox");
    let directory = &*directory;
    let mut table = Table::new(TableType::Folder, 1);

    // Literals containing filter syntax are matched verbatim
    table
        .set_restriction(Some(&Restriction::property(
            RelOp::Eq,
            PropTag::DISPLAY_NAME,
            TaggedValue::unicode(PropTag::DISPLAY_NAME, "Contacts (Personal)"),
        )))
        .unwrap();
    assert_eq!(table.row_count(directory).unwrap(), 1);
    assert_eq!(
        table.get_property(directory, "jdoe", PropTag::FOLDER_ID, 0),
        Ok(PropertyValue::I8(4))
    );

    table
        .set_restriction(Some(&Restriction::property(
            RelOp::Eq,
            PropTag::CONTAINER_CLASS.with_type(mapi::tags::ptype::STRING8),
            TaggedValue::string8(PropTag::CONTAINER_CLASS, "IPF.Note"),
        )))
        .unwrap();
    assert_eq!(table.row_count(directory).unwrap(), 2);

    // Wildcards in literals are escaped
    table
        .set_restriction(Some(&Restriction::property(
            RelOp::Eq,
            PropTag::DISPLAY_NAME,
            TaggedValue::unicode(PropTag::DISPLAY_NAME, "*"),
        )))
        .unwrap();
    assert_eq!(table.row_count(directory), Err(Error::InvalidParameter));
    assert!(!table.is_cached());

    // Compound restrictions are not applied
    table
        .set_restriction(Some(&Restriction::Or(vec![Restriction::property(
            RelOp::Eq,
            PropTag::DISPLAY_NAME,
            TaggedValue::unicode(PropTag::DISPLAY_NAME, "Inbox"),
        )])))
        .unwrap();
    assert_eq!(table.row_count(directory).unwrap(), 3);

    // Unmapped restriction property
    table
        .set_restriction(Some(&Restriction::property(
            RelOp::Eq,
            PropTag::ANR,
            TaggedValue::unicode(PropTag::ANR, "john"),
        )))
        .unwrap();
    assert_eq!(
        table.get_property(directory, "jdoe", PropTag::DISPLAY_NAME, 0),
        Err(Error::TooComplex)
    );

    // Non-string literal
    table
        .set_restriction(Some(&Restriction::property(
            RelOp::Eq,
            PropTag::CONTENT_COUNT,
            TaggedValue::new(PropTag::CONTENT_COUNT, PropertyValue::Long(2)),
        )))
        .unwrap();
    assert_eq!(table.row_count(directory), Err(Error::TooComplex));

    table.set_restriction(None).unwrap();
    assert_eq!(table.row_count(directory).unwrap(), 3);

    // Empty folder
    let mut table = Table::new(TableType::Folder, 2);
    assert_eq!(
        table.get_property(directory, "jdoe", PropTag::DISPLAY_NAME, 0),
        Err(Error::InvalidParameter)
    );
}
