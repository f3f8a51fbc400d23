/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};
use directory::ResultSet;

use crate::{
    tags::{ptype, PropTag},
    value::PropertyValue,
};

/// Reads a property straight from a cached row.
pub trait PropertyExtractor {
    fn extract(
        &self,
        rows: &ResultSet,
        position: u32,
        tag: PropTag,
        attribute: &str,
    ) -> Option<PropertyValue>;
}

/// Decodes directory attribute text according to the requested property type.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeExtractor;

impl PropertyExtractor for AttributeExtractor {
    fn extract(
        &self,
        rows: &ResultSet,
        position: u32,
        tag: PropTag,
        attribute: &str,
    ) -> Option<PropertyValue> {
        let values = rows.get(position)?.attribute(attribute)?;
        let value = values.first()?.as_str();

        let result = match tag.typ() {
            ptype::SHORT => PropertyValue::Short(parse(value)?),
            ptype::LONG => PropertyValue::Long(parse_long(value)?),
            ptype::DOUBLE => PropertyValue::Double(parse(value)?),
            ptype::BOOLEAN => PropertyValue::Boolean(parse_bool(value)?),
            ptype::I8 => PropertyValue::I8(parse(value)?),
            ptype::SYSTIME => PropertyValue::SysTime(parse(value)?),
            ptype::STRING8 => PropertyValue::String8(value.to_string()),
            ptype::UNICODE => PropertyValue::Unicode(value.to_string()),
            ptype::BINARY => PropertyValue::Binary(decode(value)?),
            ptype::MV_LONG => PropertyValue::MvLong(
                values
                    .iter()
                    .map(|value| parse_long(value))
                    .collect::<Option<_>>()?,
            ),
            ptype::MV_STRING8 => PropertyValue::MvString8(values.to_vec()),
            ptype::MV_UNICODE => PropertyValue::MvUnicode(values.to_vec()),
            ptype::MV_BINARY => PropertyValue::MvBinary(
                values
                    .iter()
                    .map(|value| decode(value))
                    .collect::<Option<_>>()?,
            ),
            typ => {
                tracing::debug!(
                    context = "table",
                    event = "unsupported-type",
                    tag = %tag,
                    typ = typ,
                    "Property type cannot be read from the directory"
                );
                return None;
            }
        };

        Some(result)
    }
}

fn parse<T: FromStr>(value: &str) -> Option<T> {
    let result = value.trim().parse().ok();
    if result.is_none() {
        tracing::debug!(
            context = "table",
            event = "parse-error",
            value = value,
            "Failed to parse attribute value"
        );
    }
    result
}

// Flags are stored unsigned
fn parse_long(value: &str) -> Option<i32> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .or_else(|| parse::<u32>(value).map(|value| value as i32))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" => Some(true),
        "0" => Some(false),
        value if value.eq_ignore_ascii_case("true") => Some(true),
        value if value.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn decode(value: &str) -> Option<Vec<u8>> {
    STANDARD.decode(value.trim()).ok()
}
