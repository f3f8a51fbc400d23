/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::{Directory, Entry, ResultSet, Scope};

use crate::{
    property::Registry,
    tags::{ptype, PropTag},
    value::PropertyValue,
};

/// Everything a special-property resolver may look at. Only shared
/// references are handed out, so the table cache cannot be touched.
pub struct PropertyContext<'x> {
    pub directory: &'x dyn Directory,
    pub recipient: &'x str,
    pub rows: &'x ResultSet,
    pub position: u32,
    pub tag: PropTag,
    pub attribute: &'static str,
    pub registry: &'static Registry,
}

/// Computes properties that are not read verbatim from the row.
pub trait SpecialProperty {
    fn get(&self, context: &PropertyContext<'_>) -> Option<PropertyValue>;
}

/// Default resolver for mailbox and address book tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct MailboxSpecials;

impl PropertyContext<'_> {
    pub fn entry(&self) -> Option<&Entry> {
        self.rows.get(self.position)
    }
}

impl SpecialProperty for MailboxSpecials {
    fn get(&self, context: &PropertyContext<'_>) -> Option<PropertyValue> {
        if context.tag == PropTag::DEPTH {
            // Hierarchy tables are always flat
            return Some(PropertyValue::Long(0));
        }

        if context.registry.is_reference(context.tag) == Some(true) {
            resolve_reference(context)
        } else {
            None
        }
    }
}

fn resolve_reference(context: &PropertyContext<'_>) -> Option<PropertyValue> {
    let target = context
        .registry
        .reference_target(context.tag)
        .or_else(|| {
            context
                .registry
                .reference_target(context.tag.with_type(ptype::STRING8))
        })?;
    let dn = context.entry()?.first_value(context.attribute)?;

    let value = match context
        .directory
        .search(dn, Scope::Base, "(objectClass=*)", &[target])
    {
        Ok(result) => result.get(0)?.first_value(target)?.to_string(),
        Err(err) => {
            tracing::debug!(
                context = "table",
                event = "reference-error",
                recipient = context.recipient,
                dn = dn,
                attribute = target,
                reason = %err,
                "Failed to resolve reference attribute"
            );
            return None;
        }
    };

    Some(match context.tag.typ() {
        ptype::UNICODE => PropertyValue::Unicode(value),
        ptype::MV_UNICODE => PropertyValue::MvUnicode(vec![value]),
        ptype::MV_STRING8 => PropertyValue::MvString8(vec![value]),
        _ => PropertyValue::String8(value),
    })
}
