/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::tags::PropTag;

use super::AttributeMapping;

pub(super) const MAPPINGS: &[AttributeMapping] = &[
    AttributeMapping::new(PropTag::ANR, "anr"),
    AttributeMapping::new(PropTag::ACCOUNT, "sAMAccountName"),
    AttributeMapping::new(PropTag::GIVEN_NAME, "givenName"),
    AttributeMapping::new(PropTag::SURNAME, "sn"),
    AttributeMapping::new(PropTag::DISPLAY_NAME, "displayName"),
    AttributeMapping::new(PropTag::TRANSMITTABLE_DISPLAY_NAME, "displayName"),
    AttributeMapping::new(PropTag::SEVEN_BIT_DISPLAY_NAME, "displayName"),
    AttributeMapping::new(PropTag::EMAIL_ADDRESS, "legacyExchangeDN"),
    AttributeMapping::new(PropTag::COMPANY_NAME, "company"),
    AttributeMapping::new(PropTag::TITLE, "personalTitle"),
    // DN-valued, resolved against the referenced record
    AttributeMapping::reference(
        PropTag::ADDRESS_BOOK_HOME_MTA,
        "homeMTA",
        "legacyExchangeDN",
    ),
    AttributeMapping::reference(
        PropTag::ADDRESS_BOOK_HOME_MESSAGE_DATABASE,
        "homeMDB",
        "legacyExchangeDN",
    ),
    AttributeMapping::new(PropTag::ADDRESS_BOOK_PROXY_ADDRESSES, "proxyAddresses"),
    AttributeMapping::new(PropTag::ADDRESS_BOOK_NETWORK_ADDRESS, "networkAddress"),
    AttributeMapping::new(PropTag::ADDRESS_BOOK_ASSOC_NT_ACCOUNT, "assocNTAccount"),
    AttributeMapping::new(PropTag::ADDRESS_BOOK_OBJECT_GUID, "objectGUID"),
];
