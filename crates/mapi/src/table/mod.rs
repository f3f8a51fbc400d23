/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::{Directory, ResultSet, Scope, ALL_ATTRIBUTES};

use crate::{
    filter::build_filter,
    property::{Registry, MAILBOX},
    restriction::{Restriction, StoredRestriction},
    sort::SortOrderSet,
    tags::PropTag,
    Error,
};

pub mod extract;
pub mod get;
pub mod special;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TableType {
    Folder = 1,
    Message = 2,
}

/// Server-side cursor over the folder or message rows below a folder.
///
/// Rows are fetched from the directory on first use and cached until the
/// restriction or the sort order changes.
#[derive(Debug)]
pub struct Table {
    table_type: TableType,
    folder_id: u64,
    registry: &'static Registry,
    sort_order: Option<SortOrderSet>,
    restriction: Option<StoredRestriction>,
    columns: Vec<PropTag>,
    rows: Option<ResultSet>,
}

impl Table {
    pub fn new(table_type: TableType, folder_id: u64) -> Self {
        tracing::debug!(
            context = "table",
            event = "create",
            table_type = ?table_type,
            folder_id = folder_id,
            "Created table"
        );

        Table {
            table_type,
            folder_id,
            registry: &MAILBOX,
            sort_order: None,
            restriction: None,
            columns: Vec::new(),
            rows: None,
        }
    }

    /// Replaces the registry used to build filters and resolve properties.
    ///
    /// Table filters select rows by `FOLDER_ID` and `PARENT_FOLDER_ID`, so the
    /// registry must map both. With one that does not, such as `ADDRESS_BOOK`,
    /// every fetch fails with `TooComplex`.
    pub fn with_registry(mut self, registry: &'static Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn set_sort_order(&mut self, sort_order: Option<&SortOrderSet>) -> crate::Result<()> {
        let sort_order = sort_order.ok_or(Error::InvalidParameter)?.try_copy()?;

        self.rows = None;
        self.sort_order = Some(sort_order);

        Ok(())
    }

    /// Replaces the restriction. Passing `None` removes it.
    pub fn set_restriction(&mut self, restriction: Option<&Restriction>) -> crate::Result<()> {
        self.rows = None;
        self.restriction = None;

        if let Some(restriction) = restriction {
            self.restriction = Some(StoredRestriction::normalize(restriction)?);
        }

        Ok(())
    }

    pub fn set_columns(&mut self, columns: &[PropTag]) -> crate::Result<()> {
        let mut copy = Vec::new();
        copy.try_reserve_exact(columns.len())?;
        copy.extend_from_slice(columns);
        self.columns = copy;

        Ok(())
    }

    /// Runs the table search unless rows are already cached. An empty result
    /// is not cached and fails with `InvalidParameter`.
    pub fn ensure_cache(&mut self, directory: &dyn Directory) -> crate::Result<()> {
        if self.cached_rows().is_some() {
            return Ok(());
        }

        let rows = self.fetch(directory)?;
        if rows.is_empty() {
            return Err(Error::InvalidParameter);
        }
        self.rows = Some(rows);

        Ok(())
    }

    /// Number of rows below the folder, zero when the search matches nothing.
    pub fn row_count(&mut self, directory: &dyn Directory) -> crate::Result<u32> {
        if let Some(rows) = self.cached_rows() {
            return Ok(rows.count());
        }

        let rows = self.fetch(directory)?;
        let count = rows.count();
        if !rows.is_empty() {
            self.rows = Some(rows);
        }

        Ok(count)
    }

    fn cached_rows(&self) -> Option<&ResultSet> {
        let rows = self.rows.as_ref()?;
        tracing::trace!(
            context = "table",
            event = "cache-hit",
            folder_id = self.folder_id,
            rows = rows.count(),
            "Serving rows from cache"
        );
        Some(rows)
    }

    fn fetch(&self, directory: &dyn Directory) -> crate::Result<ResultSet> {
        let filter = build_filter(
            self.registry,
            self.table_type,
            self.folder_id,
            self.restriction.as_ref(),
        )?;

        let rows = directory
            .search(directory.base_dn(), Scope::Subtree, &filter, ALL_ATTRIBUTES)
            .map_err(|err| {
                tracing::warn!(
                    context = "table",
                    event = "error",
                    folder_id = self.folder_id,
                    filter = filter.as_str(),
                    reason = %err,
                    "Table search failed"
                );
                Error::InvalidParameter
            })?;

        tracing::debug!(
            context = "table",
            event = "fetch",
            folder_id = self.folder_id,
            filter = filter.as_str(),
            rows = rows.count(),
            "Fetched table rows"
        );

        Ok(rows)
    }

    pub fn table_type(&self) -> TableType {
        self.table_type
    }

    pub fn folder_id(&self) -> u64 {
        self.folder_id
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    pub fn sort_order(&self) -> Option<&SortOrderSet> {
        self.sort_order.as_ref()
    }

    pub fn restriction(&self) -> Option<&StoredRestriction> {
        self.restriction.as_ref()
    }

    pub fn columns(&self) -> &[PropTag] {
        &self.columns
    }

    pub fn rows(&self) -> Option<&ResultSet> {
        self.rows.as_ref()
    }

    pub fn is_cached(&self) -> bool {
        self.rows.is_some()
    }
}

impl TryFrom<u8> for TableType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TableType::Folder),
            2 => Ok(TableType::Message),
            _ => Err(Error::InvalidParameter),
        }
    }
}
