/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::tags::PropTag;

use super::AttributeMapping;

// Mailbox records store each property under the canonical property name.
pub(super) const MAPPINGS: &[AttributeMapping] = &[
    AttributeMapping::new(PropTag::FOLDER_ID, "PidTagFolderId"),
    AttributeMapping::new(PropTag::PARENT_FOLDER_ID, "PidTagParentFolderId"),
    AttributeMapping::new(PropTag::MESSAGE_ID, "PidTagMessageId"),
    AttributeMapping::new(PropTag::CHANGE_NUMBER, "PidTagChangeNumber"),
    AttributeMapping::new(PropTag::SOURCE_KEY, "PidTagSourceKey"),
    AttributeMapping::new(PropTag::PARENT_SOURCE_KEY, "PidTagParentSourceKey"),
    AttributeMapping::new(PropTag::CHANGE_KEY, "PidTagChangeKey"),
    AttributeMapping::new(PropTag::DISPLAY_NAME, "PidTagDisplayName"),
    AttributeMapping::new(PropTag::COMMENT, "PidTagComment"),
    AttributeMapping::new(PropTag::DEPTH, "PidTagDepth"),
    AttributeMapping::new(PropTag::CREATION_TIME, "PidTagCreationTime"),
    AttributeMapping::new(PropTag::LAST_MODIFICATION_TIME, "PidTagLastModificationTime"),
    AttributeMapping::new(PropTag::ATTRIBUTE_HIDDEN, "PidTagAttributeHidden"),
    AttributeMapping::new(PropTag::FOLDER_TYPE, "PidTagFolderType"),
    AttributeMapping::new(PropTag::CONTENT_COUNT, "PidTagContentCount"),
    AttributeMapping::new(PropTag::CONTENT_UNREAD_COUNT, "PidTagContentUnreadCount"),
    AttributeMapping::new(PropTag::SUBFOLDERS, "PidTagSubfolders"),
    AttributeMapping::new(PropTag::CONTAINER_CLASS, "PidTagContainerClass"),
    AttributeMapping::new(PropTag::MAILBOX_OWNER_NAME, "PidTagMailboxOwnerName"),
    AttributeMapping::new(PropTag::MESSAGE_CLASS, "PidTagMessageClass"),
    AttributeMapping::new(PropTag::SUBJECT, "PidTagSubject"),
    AttributeMapping::new(PropTag::MESSAGE_FLAGS, "PidTagMessageFlags"),
    AttributeMapping::new(PropTag::MESSAGE_SIZE, "PidTagMessageSize"),
    AttributeMapping::new(PropTag::HAS_ATTACHMENTS, "PidTagHasAttachments"),
    AttributeMapping::new(PropTag::NORMALIZED_SUBJECT, "PidTagNormalizedSubject"),
];
