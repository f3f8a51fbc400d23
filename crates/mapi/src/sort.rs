/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::tags::PropTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SortDirection {
    Ascend = 0,
    Descend = 1,
    Combine = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub tag: PropTag,
    pub direction: SortDirection,
}

/// Sort criteria kept by a table. Rows are never reordered with them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortOrderSet {
    pub sorts: Vec<SortOrder>,
    pub categories: u16,
    pub expanded: u16,
}

impl SortOrderSet {
    pub fn new(sorts: impl IntoIterator<Item = SortOrder>) -> Self {
        SortOrderSet {
            sorts: sorts.into_iter().collect(),
            categories: 0,
            expanded: 0,
        }
    }

    pub fn with_categories(mut self, categories: u16, expanded: u16) -> Self {
        self.categories = categories;
        self.expanded = expanded;
        self
    }

    /// Field-by-field copy that reports allocation failure instead of aborting.
    pub fn try_copy(&self) -> crate::Result<Self> {
        let mut sorts = Vec::new();
        sorts.try_reserve_exact(self.sorts.len())?;
        sorts.extend_from_slice(&self.sorts);

        Ok(SortOrderSet {
            sorts,
            categories: self.categories,
            expanded: self.expanded,
        })
    }

    pub fn len(&self) -> usize {
        self.sorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }
}

impl SortOrder {
    pub fn new(tag: PropTag, direction: SortDirection) -> Self {
        SortOrder { tag, direction }
    }
}
