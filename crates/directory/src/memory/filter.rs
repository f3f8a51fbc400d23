/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use ldap3::{
    asn1::{ExplicitTag, OctetString, Sequence, Tag, TagClass},
    parse_filter,
};

use crate::{DirectoryError, Entry};

/// Search filter evaluated by the in-memory directory. Parsing and value
/// unescaping are done by `ldap3`; ordering, approximate and extensible
/// matches are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    Present(String),
    Equal(String, String),
    Substring {
        attr: String,
        initial: Option<String>,
        any: Vec<String>,
        last: Option<String>,
    },
}

// Context tags of the Filter CHOICE (RFC 4511, 4.5.1)
const AND: u64 = 0;
const OR: u64 = 1;
const NOT: u64 = 2;
const EQUALITY: u64 = 3;
const SUBSTRINGS: u64 = 4;
const PRESENT: u64 = 7;

const SUB_INITIAL: u64 = 0;
const SUB_ANY: u64 = 1;
const SUB_FINAL: u64 = 2;

impl Filter {
    pub fn parse(filter: &str) -> crate::Result<Self> {
        let tag = parse_filter(filter.trim())
            .map_err(|_| DirectoryError::invalid_filter(filter, "Syntax error"))?;
        Filter::from_tag(filter, tag)
    }

    fn from_tag(filter: &str, tag: Tag) -> crate::Result<Self> {
        match tag {
            Tag::Sequence(Sequence {
                class: TagClass::Context,
                id: id @ (AND | OR),
                inner,
            }) => {
                let filters = inner
                    .into_iter()
                    .map(|tag| Filter::from_tag(filter, tag))
                    .collect::<crate::Result<Vec<_>>>()?;
                Ok(if id == AND {
                    Filter::And(filters)
                } else {
                    Filter::Or(filters)
                })
            }
            Tag::ExplicitTag(ExplicitTag {
                class: TagClass::Context,
                id: NOT,
                inner,
            }) => Ok(Filter::Not(Box::new(Filter::from_tag(filter, *inner)?))),
            Tag::OctetString(OctetString {
                class: TagClass::Context,
                id: PRESENT,
                inner,
            }) => Ok(Filter::Present(text(filter, inner)?)),
            Tag::Sequence(Sequence {
                class: TagClass::Context,
                id: EQUALITY,
                inner,
            }) => {
                let mut items = inner.into_iter();
                match (items.next(), items.next()) {
                    (Some(Tag::OctetString(attr)), Some(Tag::OctetString(value))) => Ok(
                        Filter::Equal(text(filter, attr.inner)?, text(filter, value.inner)?),
                    ),
                    _ => Err(DirectoryError::invalid_filter(filter, "Malformed equality")),
                }
            }
            Tag::Sequence(Sequence {
                class: TagClass::Context,
                id: SUBSTRINGS,
                inner,
            }) => {
                let malformed = || DirectoryError::invalid_filter(filter, "Malformed substring");
                let mut items = inner.into_iter();
                let (attr, parts) = match (items.next(), items.next()) {
                    (Some(Tag::OctetString(attr)), Some(Tag::Sequence(parts))) => {
                        (text(filter, attr.inner)?, parts.inner)
                    }
                    _ => return Err(malformed()),
                };

                let mut initial = None;
                let mut any = Vec::new();
                let mut last = None;
                for part in parts {
                    match part {
                        Tag::OctetString(OctetString { id, inner, .. }) => match id {
                            SUB_INITIAL => initial = Some(text(filter, inner)?),
                            SUB_ANY => any.push(text(filter, inner)?),
                            SUB_FINAL => last = Some(text(filter, inner)?),
                            _ => return Err(malformed()),
                        },
                        _ => return Err(malformed()),
                    }
                }

                Ok(Filter::Substring {
                    attr,
                    initial,
                    any,
                    last,
                })
            }
            _ => Err(DirectoryError::unsupported(
                "memory",
                "ordering, approximate or extensible match",
            )),
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Filter::And(filters) => filters.iter().all(|filter| filter.matches(entry)),
            Filter::Or(filters) => filters.iter().any(|filter| filter.matches(entry)),
            Filter::Not(filter) => !filter.matches(entry),
            Filter::Present(attr) => {
                attr.eq_ignore_ascii_case("objectClass") || entry.has_attribute(attr)
            }
            Filter::Equal(attr, expected) => entry.attribute(attr).is_some_and(|values| {
                values
                    .iter()
                    .any(|value| value.to_lowercase() == expected.to_lowercase())
            }),
            Filter::Substring {
                attr,
                initial,
                any,
                last,
            } => entry.attribute(attr).is_some_and(|values| {
                values
                    .iter()
                    .any(|value| substring_match(&value.to_lowercase(), initial, any, last))
            }),
        }
    }
}

fn text(filter: &str, bytes: Vec<u8>) -> crate::Result<String> {
    String::from_utf8(bytes)
        .map_err(|_| DirectoryError::invalid_filter(filter, "Invalid UTF-8 in value"))
}

fn substring_match(
    value: &str,
    initial: &Option<String>,
    any: &[String],
    last: &Option<String>,
) -> bool {
    let mut rest = value;

    if let Some(initial) = initial {
        match rest.strip_prefix(initial.to_lowercase().as_str()) {
            Some(tail) => rest = tail,
            None => return false,
        }
    }

    for part in any {
        match rest.find(part.to_lowercase().as_str()) {
            Some(pos) => rest = &rest[pos + part.to_lowercase().len()..],
            None => return false,
        }
    }

    last.as_ref()
        .map_or(true, |last| rest.ends_with(last.to_lowercase().as_str()))
}
