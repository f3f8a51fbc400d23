/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::Display;

use crate::{
    tags::{ptype, PropTag},
    value::{PropertyValue, TaggedValue},
};

/// Restriction tree as received from the client.
#[derive(Debug, Clone, PartialEq)]
pub enum Restriction {
    And(Vec<Restriction>),
    Or(Vec<Restriction>),
    Not(Box<Restriction>),
    Content {
        fuzzy_level: u32,
        tag: PropTag,
        value: TaggedValue,
    },
    Property(PropertyRestriction),
    CompareProps {
        relop: RelOp,
        tag1: PropTag,
        tag2: PropTag,
    },
    BitMask {
        relop: u8,
        tag: PropTag,
        mask: u32,
    },
    Size {
        relop: RelOp,
        tag: PropTag,
        size: u32,
    },
    Exist {
        tag: PropTag,
    },
    SubRestriction {
        subobject: PropTag,
        restriction: Box<Restriction>,
    },
    Comment {
        values: Vec<TaggedValue>,
        restriction: Option<Box<Restriction>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRestriction {
    pub relop: RelOp,
    pub tag: PropTag,
    pub value: TaggedValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RestrictionKind {
    And = 0,
    Or = 1,
    Not = 2,
    Content = 3,
    Property = 4,
    CompareProps = 5,
    BitMask = 6,
    Size = 7,
    Exist = 8,
    SubRestriction = 9,
    Comment = 10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RelOp {
    Lt = 0,
    Le = 1,
    Gt = 2,
    Ge = 3,
    Eq = 4,
    Ne = 5,
    Re = 6,
}

/// The table's private copy of a restriction. Property restrictions keep
/// their string literal; every other shape is remembered by kind only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRestriction {
    Property {
        relop: RelOp,
        tag: PropTag,
        literal: Option<Literal>,
    },
    Unsupported {
        kind: RestrictionKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    String8(String),
    Unicode(String),
}

impl Restriction {
    pub fn kind(&self) -> RestrictionKind {
        match self {
            Restriction::And(_) => RestrictionKind::And,
            Restriction::Or(_) => RestrictionKind::Or,
            Restriction::Not(_) => RestrictionKind::Not,
            Restriction::Content { .. } => RestrictionKind::Content,
            Restriction::Property(_) => RestrictionKind::Property,
            Restriction::CompareProps { .. } => RestrictionKind::CompareProps,
            Restriction::BitMask { .. } => RestrictionKind::BitMask,
            Restriction::Size { .. } => RestrictionKind::Size,
            Restriction::Exist { .. } => RestrictionKind::Exist,
            Restriction::SubRestriction { .. } => RestrictionKind::SubRestriction,
            Restriction::Comment { .. } => RestrictionKind::Comment,
        }
    }

    pub fn property(relop: RelOp, tag: PropTag, value: TaggedValue) -> Self {
        Restriction::Property(PropertyRestriction { relop, tag, value })
    }
}

impl StoredRestriction {
    /// Copies the parts of `restriction` the filter builder understands.
    pub fn normalize(restriction: &Restriction) -> crate::Result<Self> {
        match restriction {
            Restriction::Property(PropertyRestriction { relop, tag, value }) => {
                // The literal's own tag decides which string member is copied
                let literal = match (value.tag.typ(), &value.value) {
                    (ptype::STRING8, PropertyValue::String8(text)) => {
                        Some(Literal::String8(copy_text(text)?))
                    }
                    (ptype::UNICODE, PropertyValue::Unicode(text)) => {
                        Some(Literal::Unicode(copy_text(text)?))
                    }
                    (typ, _) => {
                        tracing::warn!(
                            context = "table",
                            event = "restriction-literal-ignored",
                            tag = %value.tag,
                            typ = typ,
                            "Unsupported property type for property restriction"
                        );
                        None
                    }
                };

                Ok(StoredRestriction::Property {
                    relop: *relop,
                    tag: *tag,
                    literal,
                })
            }
            restriction => {
                let kind = restriction.kind();
                tracing::warn!(
                    context = "table",
                    event = "restriction-unsupported",
                    kind = %kind,
                    "Unsupported restriction type"
                );

                Ok(StoredRestriction::Unsupported { kind })
            }
        }
    }

    pub fn kind(&self) -> RestrictionKind {
        match self {
            StoredRestriction::Property { .. } => RestrictionKind::Property,
            StoredRestriction::Unsupported { kind } => *kind,
        }
    }
}

impl Literal {
    pub fn as_str(&self) -> &str {
        match self {
            Literal::String8(text) | Literal::Unicode(text) => text,
        }
    }
}

fn copy_text(text: &str) -> crate::Result<String> {
    let mut copy = String::new();
    copy.try_reserve_exact(text.len())?;
    copy.push_str(text);
    Ok(copy)
}

impl TryFrom<u8> for RestrictionKind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RestrictionKind::And),
            1 => Ok(RestrictionKind::Or),
            2 => Ok(RestrictionKind::Not),
            3 => Ok(RestrictionKind::Content),
            4 => Ok(RestrictionKind::Property),
            5 => Ok(RestrictionKind::CompareProps),
            6 => Ok(RestrictionKind::BitMask),
            7 => Ok(RestrictionKind::Size),
            8 => Ok(RestrictionKind::Exist),
            9 => Ok(RestrictionKind::SubRestriction),
            10 => Ok(RestrictionKind::Comment),
            _ => Err(()),
        }
    }
}

impl TryFrom<u8> for RelOp {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RelOp::Lt),
            1 => Ok(RelOp::Le),
            2 => Ok(RelOp::Gt),
            3 => Ok(RelOp::Ge),
            4 => Ok(RelOp::Eq),
            5 => Ok(RelOp::Ne),
            6 => Ok(RelOp::Re),
            _ => Err(()),
        }
    }
}

impl Display for RestrictionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", *self as u8)
    }
}
