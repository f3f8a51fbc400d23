/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod address_book;
pub mod folder;

use std::sync::Arc;

use directory::Directory;

use crate::directory::parse_config;

pub fn directory(id: &str) -> Arc<dyn Directory> {
    crate::enable_logging();

    parse_config().directories.remove(id).unwrap()
}
