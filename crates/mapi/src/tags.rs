/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::Display;

/// Property type codes, stored in the low 16 bits of a property tag.
pub mod ptype {
    pub const UNSPECIFIED: u16 = 0x0000;
    pub const SHORT: u16 = 0x0002;
    pub const LONG: u16 = 0x0003;
    pub const DOUBLE: u16 = 0x0005;
    pub const ERROR: u16 = 0x000A;
    pub const BOOLEAN: u16 = 0x000B;
    pub const OBJECT: u16 = 0x000D;
    pub const I8: u16 = 0x0014;
    pub const STRING8: u16 = 0x001E;
    pub const UNICODE: u16 = 0x001F;
    pub const SYSTIME: u16 = 0x0040;
    pub const CLSID: u16 = 0x0048;
    pub const BINARY: u16 = 0x0102;
    pub const MV_LONG: u16 = 0x1003;
    pub const MV_STRING8: u16 = 0x101E;
    pub const MV_UNICODE: u16 = 0x101F;
    pub const MV_BINARY: u16 = 0x1102;
}

/// A protocol property tag: property id in the high 16 bits, type code in the low 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropTag(pub u32);

impl PropTag {
    pub const fn new(id: u16, typ: u16) -> Self {
        PropTag(((id as u32) << 16) | typ as u32)
    }

    pub const fn id(self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub const fn typ(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    pub const fn with_type(self, typ: u16) -> Self {
        PropTag((self.0 & 0xFFFF_0000) | typ as u32)
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Swaps the wide and narrow string variants, single or multi-valued.
    pub const fn string_variant(self) -> Option<Self> {
        match self.typ() {
            ptype::UNICODE => Some(self.with_type(ptype::STRING8)),
            ptype::STRING8 => Some(self.with_type(ptype::UNICODE)),
            ptype::MV_UNICODE => Some(self.with_type(ptype::MV_STRING8)),
            ptype::MV_STRING8 => Some(self.with_type(ptype::MV_UNICODE)),
            _ => None,
        }
    }

    /// Sentinel returned by the protocol when a reverse lookup fails.
    pub const ERROR: PropTag = PropTag::new(0x0000, ptype::ERROR);

    // Folder and message identity
    pub const FOLDER_ID: PropTag = PropTag::new(0x6748, ptype::I8);
    pub const PARENT_FOLDER_ID: PropTag = PropTag::new(0x6749, ptype::I8);
    pub const MESSAGE_ID: PropTag = PropTag::new(0x674A, ptype::I8);
    pub const CHANGE_NUMBER: PropTag = PropTag::new(0x67A4, ptype::I8);
    pub const SOURCE_KEY: PropTag = PropTag::new(0x65E0, ptype::BINARY);
    pub const PARENT_SOURCE_KEY: PropTag = PropTag::new(0x65E1, ptype::BINARY);
    pub const CHANGE_KEY: PropTag = PropTag::new(0x65E2, ptype::BINARY);

    // Common
    pub const DISPLAY_NAME: PropTag = PropTag::new(0x3001, ptype::UNICODE);
    pub const COMMENT: PropTag = PropTag::new(0x3004, ptype::UNICODE);
    pub const DEPTH: PropTag = PropTag::new(0x3005, ptype::LONG);
    pub const CREATION_TIME: PropTag = PropTag::new(0x3007, ptype::SYSTIME);
    pub const LAST_MODIFICATION_TIME: PropTag = PropTag::new(0x3008, ptype::SYSTIME);
    pub const ATTRIBUTE_HIDDEN: PropTag = PropTag::new(0x10F4, ptype::BOOLEAN);

    // Folders
    pub const FOLDER_TYPE: PropTag = PropTag::new(0x3601, ptype::LONG);
    pub const CONTENT_COUNT: PropTag = PropTag::new(0x3602, ptype::LONG);
    pub const CONTENT_UNREAD_COUNT: PropTag = PropTag::new(0x3603, ptype::LONG);
    pub const SUBFOLDERS: PropTag = PropTag::new(0x360A, ptype::BOOLEAN);
    pub const CONTAINER_CLASS: PropTag = PropTag::new(0x3613, ptype::UNICODE);
    pub const MAILBOX_OWNER_NAME: PropTag = PropTag::new(0x661C, ptype::UNICODE);

    // Messages
    pub const MESSAGE_CLASS: PropTag = PropTag::new(0x001A, ptype::UNICODE);
    pub const SUBJECT: PropTag = PropTag::new(0x0037, ptype::UNICODE);
    pub const MESSAGE_FLAGS: PropTag = PropTag::new(0x0E07, ptype::LONG);
    pub const MESSAGE_SIZE: PropTag = PropTag::new(0x0E08, ptype::LONG);
    pub const HAS_ATTACHMENTS: PropTag = PropTag::new(0x0E1B, ptype::BOOLEAN);
    pub const NORMALIZED_SUBJECT: PropTag = PropTag::new(0x0E1D, ptype::UNICODE);

    // Address book
    pub const ANR: PropTag = PropTag::new(0x360C, ptype::UNICODE);
    pub const ACCOUNT: PropTag = PropTag::new(0x3A00, ptype::UNICODE);
    pub const EMAIL_ADDRESS: PropTag = PropTag::new(0x3003, ptype::UNICODE);
    pub const GIVEN_NAME: PropTag = PropTag::new(0x3A06, ptype::UNICODE);
    pub const SURNAME: PropTag = PropTag::new(0x3A11, ptype::UNICODE);
    pub const COMPANY_NAME: PropTag = PropTag::new(0x3A16, ptype::UNICODE);
    pub const TITLE: PropTag = PropTag::new(0x3A17, ptype::UNICODE);
    pub const TRANSMITTABLE_DISPLAY_NAME: PropTag = PropTag::new(0x3A20, ptype::STRING8);
    pub const SEVEN_BIT_DISPLAY_NAME: PropTag = PropTag::new(0x39FF, ptype::STRING8);
    pub const ADDRESS_BOOK_HOME_MESSAGE_DATABASE: PropTag = PropTag::new(0x8006, ptype::STRING8);
    pub const ADDRESS_BOOK_HOME_MTA: PropTag = PropTag::new(0x8007, ptype::STRING8);
    pub const ADDRESS_BOOK_PROXY_ADDRESSES: PropTag = PropTag::new(0x800F, ptype::MV_UNICODE);
    pub const ADDRESS_BOOK_ASSOC_NT_ACCOUNT: PropTag = PropTag::new(0x8027, ptype::BINARY);
    pub const ADDRESS_BOOK_NETWORK_ADDRESS: PropTag = PropTag::new(0x8170, ptype::MV_UNICODE);
    pub const ADDRESS_BOOK_OBJECT_GUID: PropTag = PropTag::new(0x8C6D, ptype::BINARY);
}

impl From<u32> for PropTag {
    fn from(value: u32) -> Self {
        PropTag(value)
    }
}

impl From<PropTag> for u32 {
    fn from(tag: PropTag) -> Self {
        tag.0
    }
}

impl Display for PropTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
