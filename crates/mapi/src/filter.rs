/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::Write;

use ldap3::ldap_escape;

use crate::{
    property::Registry,
    restriction::StoredRestriction,
    table::TableType,
    tags::{ptype, PropTag},
    Error,
};

/// Builds the directory search filter selecting the rows of a table.
pub fn build_filter(
    registry: &Registry,
    table_type: TableType,
    folder_id: u64,
    restriction: Option<&StoredRestriction>,
) -> crate::Result<String> {
    let mut filter = match table_type {
        TableType::Folder => format!(
            "(&({}={folder_id})({}=*)",
            attribute(registry, PropTag::PARENT_FOLDER_ID)?,
            attribute(registry, PropTag::FOLDER_ID)?
        ),
        TableType::Message => format!(
            "(&({}={folder_id})({}=*)",
            attribute(registry, PropTag::PARENT_FOLDER_ID)?,
            attribute(registry, PropTag::MESSAGE_ID)?
        ),
    };

    match restriction {
        Some(StoredRestriction::Property { tag, literal, .. }) => {
            let attr = registry.attribute_for(*tag).ok_or_else(|| {
                tracing::debug!(
                    context = "table",
                    event = "filter-error",
                    registry = registry.name(),
                    tag = %tag,
                    "Restriction property has no directory attribute"
                );
                Error::TooComplex
            })?;

            let literal = match (tag.typ(), literal) {
                (ptype::STRING8 | ptype::UNICODE, Some(literal)) => literal.as_str(),
                (typ, _) => {
                    tracing::debug!(
                        context = "table",
                        event = "filter-error",
                        tag = %tag,
                        typ = typ,
                        "Unsupported property type for property restriction"
                    );
                    return Err(Error::TooComplex);
                }
            };

            let _ = write!(filter, "({attr}={})", ldap_escape(literal));
        }
        Some(StoredRestriction::Unsupported { kind }) => {
            tracing::warn!(
                context = "table",
                event = "restriction-ignored",
                kind = %kind,
                folder_id = folder_id,
                "Restriction omitted from table filter"
            );
        }
        None => (),
    }

    filter.push(')');

    tracing::debug!(
        context = "table",
        event = "filter",
        filter = filter.as_str(),
        "Built table filter"
    );

    Ok(filter)
}

fn attribute(registry: &Registry, tag: PropTag) -> crate::Result<&'static str> {
    registry.attribute_for(tag).ok_or(Error::TooComplex)
}
