/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::Directory;

use crate::{tags::PropTag, value::PropertyValue, Error};

use super::{
    extract::{AttributeExtractor, PropertyExtractor},
    special::{MailboxSpecials, PropertyContext, SpecialProperty},
    Table, TableType,
};

/// Resolves typed property values from table rows, trying the special
/// resolver before the direct attribute extractor.
#[derive(Debug, Default, Clone)]
pub struct PropertyResolver<S = MailboxSpecials, E = AttributeExtractor> {
    special: S,
    extractor: E,
}

impl<S: SpecialProperty, E: PropertyExtractor> PropertyResolver<S, E> {
    pub fn new(special: S, extractor: E) -> Self {
        PropertyResolver { special, extractor }
    }

    pub fn get_property(
        &self,
        table: &mut Table,
        directory: &dyn Directory,
        recipient: &str,
        tag: PropTag,
        position: u32,
    ) -> crate::Result<PropertyValue> {
        if recipient.is_empty() {
            return Err(Error::NotInitialized);
        }
        table.ensure_cache(directory)?;

        self.resolve(table, directory, recipient, tag, position)
    }

    /// Resolves every column of the row at `position`. Columns without a
    /// value are returned as `None`.
    pub fn get_row(
        &self,
        table: &mut Table,
        directory: &dyn Directory,
        recipient: &str,
        position: u32,
    ) -> crate::Result<Vec<Option<PropertyValue>>> {
        if recipient.is_empty() {
            return Err(Error::NotInitialized);
        }
        table.ensure_cache(directory)?;

        let mut row = Vec::new();
        row.try_reserve_exact(table.columns().len())?;
        for &tag in table.columns() {
            row.push(match self.resolve(table, directory, recipient, tag, position) {
                Ok(value) => Some(value),
                Err(Error::NotFound) => None,
                Err(err) => return Err(err),
            });
        }

        Ok(row)
    }

    fn resolve(
        &self,
        table: &Table,
        directory: &dyn Directory,
        recipient: &str,
        tag: PropTag,
        position: u32,
    ) -> crate::Result<PropertyValue> {
        let rows = table.rows().ok_or(Error::InvalidParameter)?;
        if position >= rows.count() {
            return Err(Error::InvalidObject);
        }

        // Messages report their containing folder
        let tag = if table.table_type() == TableType::Message && tag == PropTag::FOLDER_ID {
            PropTag::PARENT_FOLDER_ID
        } else {
            tag
        };

        let registry = table.registry();
        let attribute = registry.attribute_for(tag).ok_or(Error::NotFound)?;
        if !rows
            .get(position)
            .is_some_and(|entry| entry.has_attribute(attribute))
        {
            return Err(Error::NotFound);
        }

        let context = PropertyContext {
            directory,
            recipient,
            rows,
            position,
            tag,
            attribute,
            registry,
        };

        self.special
            .get(&context)
            .or_else(|| self.extractor.extract(rows, position, tag, attribute))
            .ok_or(Error::NotFound)
    }
}

impl Table {
    /// Resolves `tag` at `position` with the default resolvers.
    pub fn get_property(
        &mut self,
        directory: &dyn Directory,
        recipient: &str,
        tag: PropTag,
        position: u32,
    ) -> crate::Result<PropertyValue> {
        PropertyResolver::<MailboxSpecials, AttributeExtractor>::default()
            .get_property(self, directory, recipient, tag, position)
    }

    pub fn get_row(
        &mut self,
        directory: &dyn Directory,
        recipient: &str,
        position: u32,
    ) -> crate::Result<Vec<Option<PropertyValue>>> {
        PropertyResolver::<MailboxSpecials, AttributeExtractor>::default()
            .get_row(self, directory, recipient, position)
    }
}
