/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod address_book;
pub mod mailbox;

use crate::tags::{ptype, PropTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMapping {
    pub tag: PropTag,
    pub attribute: &'static str,
    /// Attribute to read from the referenced record, for attributes whose
    /// value is the DN of another record.
    pub reference: Option<&'static str>,
}

/// Immutable mapping between property tags and directory attributes.
#[derive(Debug)]
pub struct Registry {
    name: &'static str,
    mappings: &'static [AttributeMapping],
}

pub static MAILBOX: Registry = Registry::new("mailbox", mailbox::MAPPINGS);
/// Directory user attributes. Has no folder identifiers and cannot back a
/// table on its own.
pub static ADDRESS_BOOK: Registry = Registry::new("address-book", address_book::MAPPINGS);

impl AttributeMapping {
    pub const fn new(tag: PropTag, attribute: &'static str) -> Self {
        AttributeMapping {
            tag,
            attribute,
            reference: None,
        }
    }

    pub const fn reference(tag: PropTag, attribute: &'static str, target: &'static str) -> Self {
        AttributeMapping {
            tag,
            attribute,
            reference: Some(target),
        }
    }

    pub const fn is_reference(&self) -> bool {
        self.reference.is_some()
    }
}

impl Registry {
    pub const fn new(name: &'static str, mappings: &'static [AttributeMapping]) -> Self {
        Registry { name, mappings }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mappings(&self) -> &'static [AttributeMapping] {
        self.mappings
    }

    fn find(&self, tag: PropTag) -> Option<&'static AttributeMapping> {
        self.mappings.iter().find(|mapping| mapping.tag == tag)
    }

    /// Directory attribute for `tag`. A miss is retried once with the other
    /// string variant (wide or narrow, single or multi-valued).
    pub fn attribute_for(&self, tag: PropTag) -> Option<&'static str> {
        self.find(tag)
            .or_else(|| tag.string_variant().and_then(|tag| self.find(tag)))
            .map(|mapping| mapping.attribute)
    }

    /// Exact, case-sensitive reverse lookup returning the first entry that
    /// maps to `attribute`. `None` stands for `PropTag::ERROR`.
    pub fn property_id_for(&self, attribute: &str) -> Option<PropTag> {
        self.mappings
            .iter()
            .find(|mapping| mapping.attribute == attribute)
            .map(|mapping| mapping.tag)
    }

    /// `None` when the tag is unknown. A miss is retried with the narrow
    /// string type, under which DN-valued attributes are registered.
    pub fn is_reference(&self, tag: PropTag) -> Option<bool> {
        if tag.is_null() {
            return None;
        }

        self.find(tag)
            .or_else(|| self.find(tag.with_type(ptype::STRING8)))
            .map(|mapping| mapping.is_reference())
    }

    pub fn reference_target(&self, tag: PropTag) -> Option<&'static str> {
        if tag.is_null() {
            return None;
        }

        self.find(tag).and_then(|mapping| mapping.reference)
    }
}
