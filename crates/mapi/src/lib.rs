/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::Display;

pub mod filter;
pub mod property;
pub mod restriction;
pub mod sort;
pub mod table;
pub mod tags;
pub mod value;

pub use tags::PropTag;
pub use value::{PropertyValue, TaggedValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    NotInitialized,
    InvalidParameter,
    NotEnoughMemory,
    TooComplex,
    InvalidObject,
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// MAPI status code reported to the client.
    pub fn code(&self) -> u32 {
        match self {
            Error::NotInitialized => 0x8004_0605,
            Error::InvalidParameter => 0x8007_0057,
            Error::NotEnoughMemory => 0x8007_000E,
            Error::TooComplex => 0x8004_0117,
            Error::InvalidObject => 0x8004_0108,
            Error::NotFound => 0x8004_010F,
        }
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(error: std::collections::TryReserveError) -> Self {
        tracing::warn!(
            context = "table",
            event = "error",
            reason = %error,
            "Failed to allocate table state"
        );

        Error::NotEnoughMemory
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotInitialized => write!(f, "not initialized"),
            Error::InvalidParameter => write!(f, "invalid parameter"),
            Error::NotEnoughMemory => write!(f, "not enough memory"),
            Error::TooComplex => write!(f, "restriction too complex"),
            Error::InvalidObject => write!(f, "invalid object"),
            Error::NotFound => write!(f, "not found"),
        }
    }
}
