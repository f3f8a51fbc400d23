/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::tags::{ptype, PropTag};

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Short(i16),
    Long(i32),
    Double(f64),
    Boolean(bool),
    I8(u64),
    SysTime(u64),
    String8(String),
    Unicode(String),
    Binary(Vec<u8>),
    MvLong(Vec<i32>),
    MvString8(Vec<String>),
    MvUnicode(Vec<String>),
    MvBinary(Vec<Vec<u8>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedValue {
    pub tag: PropTag,
    pub value: PropertyValue,
}

impl PropertyValue {
    pub fn typ(&self) -> u16 {
        match self {
            PropertyValue::Short(_) => ptype::SHORT,
            PropertyValue::Long(_) => ptype::LONG,
            PropertyValue::Double(_) => ptype::DOUBLE,
            PropertyValue::Boolean(_) => ptype::BOOLEAN,
            PropertyValue::I8(_) => ptype::I8,
            PropertyValue::SysTime(_) => ptype::SYSTIME,
            PropertyValue::String8(_) => ptype::STRING8,
            PropertyValue::Unicode(_) => ptype::UNICODE,
            PropertyValue::Binary(_) => ptype::BINARY,
            PropertyValue::MvLong(_) => ptype::MV_LONG,
            PropertyValue::MvString8(_) => ptype::MV_STRING8,
            PropertyValue::MvUnicode(_) => ptype::MV_UNICODE,
            PropertyValue::MvBinary(_) => ptype::MV_BINARY,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String8(value) | PropertyValue::Unicode(value) => Some(value),
            _ => None,
        }
    }
}

impl TaggedValue {
    pub fn new(tag: PropTag, value: PropertyValue) -> Self {
        TaggedValue { tag, value }
    }

    pub fn string8(tag: PropTag, value: impl Into<String>) -> Self {
        TaggedValue {
            tag: tag.with_type(ptype::STRING8),
            value: PropertyValue::String8(value.into()),
        }
    }

    pub fn unicode(tag: PropTag, value: impl Into<String>) -> Self {
        TaggedValue {
            tag: tag.with_type(ptype::UNICODE),
            value: PropertyValue::Unicode(value.into()),
        }
    }
}
