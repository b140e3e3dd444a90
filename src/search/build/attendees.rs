//-
// Copyright (c) 2026, the Restriq authors
//
// This file is part of Restriq.
//
// Restriq is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.
//
// Restriq is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along
// with Restriq. If not, see <http://www.gnu.org/licenses/>.

//! The attendees builder: everything the "From / Sent to / Attendees"
//! fields of the form contribute.
//!
//! Each field holds `;`-separated tokens, either `Name <email>` as the
//! address-book picker inserts them or bare text as typed. A token tests
//! the display-name and email properties of its target (only the parts it
//! actually has); tokens of one field combine with `Or`, distinct fields
//! with `And`. Fields that address the recipient table are wrapped in a
//! sub-restriction so each recipient row is tested on its own.
//!
//! Name/address matching is always a case-insensitive substring test; the
//! form's match-case switch does not apply to people.

use crate::search::criteria::{AttendeeCriteria, OwnerPlacement};
use crate::search::property::{Property, RECIPIENT_CC, RECIPIENT_TO};
use crate::search::restriction::{RelOp, Restriction, TextMatch, Value};

/// Which properties an address token tests.
#[derive(Clone, Copy)]
enum Target {
    /// Sender properties on the item itself.
    Sender,
    /// Columns of the recipients table.
    Recipient,
    /// A contact's own addresses.
    ContactEmail,
}

struct AddressToken {
    display: Option<String>,
    email: Option<String>,
}

/// Parse one `;`-separated token. A `<...>` pair splits display name from
/// email; without one the whole token is taken as the email.
fn parse_token(token: &str) -> Option<AddressToken> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let token = match (token.find('<'), token.rfind('>')) {
        (Some(lt), Some(gt)) if lt < gt => {
            let display = token[..lt].trim();
            let email = token[lt + 1..gt].trim();
            AddressToken {
                display: (!display.is_empty()).then(|| display.to_owned()),
                email: (!email.is_empty()).then(|| email.to_owned()),
            }
        },
        _ => AddressToken {
            display: None,
            email: Some(token.to_owned()),
        },
    };

    if token.display.is_none() && token.email.is_none() {
        None
    } else {
        Some(token)
    }
}

fn name_match(property: Property, value: &str) -> Restriction {
    Restriction::content(property, TextMatch::substring(true), value)
}

fn token_node(token: &AddressToken, target: Target) -> Restriction {
    let mut parts = Vec::new();

    if let Some(ref display) = token.display {
        let prop = match target {
            Target::Sender => Property::SenderName,
            Target::Recipient | Target::ContactEmail => {
                Property::DisplayName
            },
        };
        parts.push(name_match(prop, display));
    }

    if let Some(ref email) = token.email {
        match target {
            Target::Sender => {
                parts.push(name_match(Property::SenderEmail, email))
            },
            Target::Recipient => {
                parts.push(name_match(Property::EmailAddress, email))
            },
            Target::ContactEmail => {
                parts.push(name_match(Property::Email1Address, email));
                parts.push(name_match(Property::Email2Address, email));
                parts.push(name_match(Property::Email3Address, email));
            },
        }
    }

    Restriction::or(parts)
}

/// All tokens of one form field, `Or`-combined; `None` if the field is
/// absent or holds only separators and blanks.
fn field_node(field: Option<&str>, target: Target) -> Option<Restriction> {
    let tokens = field?
        .split(';')
        .filter_map(parse_token)
        .map(|t| token_node(&t, target))
        .collect::<Vec<_>>();

    if tokens.is_empty() {
        None
    } else {
        Some(Restriction::or(tokens))
    }
}

fn placement_test(placement: OwnerPlacement) -> Restriction {
    let line = match placement {
        OwnerPlacement::OnlyToLine | OwnerPlacement::OnToLine => {
            RECIPIENT_TO
        },
        OwnerPlacement::OnCcLine => RECIPIENT_CC,
    };
    Restriction::compare(
        Property::RecipientType,
        RelOp::Eq,
        Value::Int(line),
    )
}

/// Build the combined attendees predicate, `None` when every field is
/// empty.
pub fn attendees(criteria: &AttendeeCriteria) -> Option<Restriction> {
    let mut parts = Vec::new();

    if let Some(r) = field_node(criteria.organizer.as_deref(), Target::Sender)
    {
        parts.push(r);
    }
    if let Some(r) = field_node(criteria.from.as_deref(), Target::Sender) {
        parts.push(r);
    }
    if let Some(r) =
        field_node(criteria.attendees.as_deref(), Target::Recipient)
    {
        parts.push(Restriction::sub(Property::MessageRecipients, r));
    }

    // The placement constraint lives inside the sent-to sub-restriction:
    // the matched recipient row itself must sit on the requested line.
    let sent_to = field_node(criteria.sent_to.as_deref(), Target::Recipient);
    let placement = criteria.placement.map(placement_test);
    match (sent_to, placement) {
        (Some(tokens), Some(line)) => parts.push(Restriction::sub(
            Property::MessageRecipients,
            Restriction::and(vec![tokens, line]),
        )),
        (Some(tokens), None) => {
            parts.push(Restriction::sub(Property::MessageRecipients, tokens))
        },
        (None, Some(line)) => {
            parts.push(Restriction::sub(Property::MessageRecipients, line))
        },
        (None, None) => (),
    }
    if let Some(OwnerPlacement::OnlyToLine) = criteria.placement {
        // A sole To recipient means the rendered To line has no separator.
        parts.push(
            Restriction::content(
                Property::DisplayTo,
                TextMatch::substring(true),
                ";",
            )
            .negate(),
        );
    }

    if let Some(r) =
        field_node(criteria.email.as_deref(), Target::ContactEmail)
    {
        parts.push(r);
    }

    if parts.is_empty() {
        None
    } else {
        Some(Restriction::and(parts))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn criteria() -> AttendeeCriteria {
        AttendeeCriteria::default()
    }

    #[test]
    fn empty_fields_build_nothing() {
        assert_eq!(None, attendees(&criteria()));
        assert_eq!(
            None,
            attendees(&AttendeeCriteria {
                sent_to: Some(" ; ;; ".to_owned()),
                ..criteria()
            })
        );
    }

    #[test]
    fn bare_token_tests_the_email_property_only() {
        assert_eq!(
            Some(name_match(Property::SenderEmail, "jan@example.com")),
            attendees(&AttendeeCriteria {
                from: Some("jan@example.com".to_owned()),
                ..criteria()
            })
        );
    }

    #[test]
    fn bracketed_token_tests_both_parts() {
        assert_eq!(
            Some(Restriction::Or(vec![
                name_match(Property::SenderName, "Jan Novak"),
                name_match(Property::SenderEmail, "jan@example.com"),
            ])),
            attendees(&AttendeeCriteria {
                organizer: Some("Jan Novak <jan@example.com>".to_owned()),
                ..criteria()
            })
        );
    }

    #[test]
    fn empty_display_part_is_dropped() {
        assert_eq!(
            Some(name_match(Property::SenderEmail, "jan@example.com")),
            attendees(&AttendeeCriteria {
                from: Some("  <jan@example.com>".to_owned()),
                ..criteria()
            })
        );
    }

    #[test]
    fn recipient_fields_are_wrapped_in_a_sub_restriction() {
        assert_eq!(
            Some(Restriction::sub(
                Property::MessageRecipients,
                Restriction::Or(vec![
                    name_match(Property::DisplayName, "Ana"),
                    name_match(Property::EmailAddress, "ana@example.com"),
                ]),
            )),
            attendees(&AttendeeCriteria {
                attendees: Some("Ana <ana@example.com>".to_owned()),
                ..criteria()
            })
        );
    }

    #[test]
    fn multiple_tokens_of_one_field_combine_with_or() {
        match attendees(&AttendeeCriteria {
            sent_to: Some("ana@example.com; bob@example.com".to_owned()),
            ..criteria()
        })
        .unwrap()
        {
            Restriction::Sub { property, child } => {
                assert_eq!(Property::MessageRecipients, property);
                assert_eq!(
                    Restriction::Or(vec![
                        name_match(
                            Property::EmailAddress,
                            "ana@example.com"
                        ),
                        name_match(
                            Property::EmailAddress,
                            "bob@example.com"
                        ),
                    ]),
                    *child
                );
            },
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn multiple_fields_combine_with_and() {
        match attendees(&AttendeeCriteria {
            organizer: Some("jan@example.com".to_owned()),
            attendees: Some("ana@example.com".to_owned()),
            ..criteria()
        })
        .unwrap()
        {
            Restriction::And(parts) => assert_eq!(2, parts.len()),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn placement_constrains_the_sent_to_rows() {
        assert_eq!(
            Some(Restriction::sub(
                Property::MessageRecipients,
                Restriction::And(vec![
                    name_match(Property::EmailAddress, "ana@example.com"),
                    Restriction::compare(
                        Property::RecipientType,
                        RelOp::Eq,
                        Value::Int(RECIPIENT_CC),
                    ),
                ]),
            )),
            attendees(&AttendeeCriteria {
                sent_to: Some("ana@example.com".to_owned()),
                placement: Some(OwnerPlacement::OnCcLine),
                ..criteria()
            })
        );
    }

    #[test]
    fn placement_without_sent_to_stands_alone() {
        assert_eq!(
            Some(Restriction::sub(
                Property::MessageRecipients,
                Restriction::compare(
                    Property::RecipientType,
                    RelOp::Eq,
                    Value::Int(RECIPIENT_TO),
                ),
            )),
            attendees(&AttendeeCriteria {
                placement: Some(OwnerPlacement::OnToLine),
                ..criteria()
            })
        );
    }

    #[test]
    fn only_to_line_also_forbids_a_second_recipient() {
        match attendees(&AttendeeCriteria {
            sent_to: Some("ana@example.com".to_owned()),
            placement: Some(OwnerPlacement::OnlyToLine),
            ..criteria()
        })
        .unwrap()
        {
            Restriction::And(parts) => {
                assert_eq!(2, parts.len());
                assert_matches!(Restriction::Sub { .. }, &parts[0]);
                assert_eq!(
                    Restriction::content(
                        Property::DisplayTo,
                        TextMatch::substring(true),
                        ";",
                    )
                    .negate(),
                    parts[1]
                );
            },
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn contact_email_field_tests_all_three_addresses() {
        match attendees(&AttendeeCriteria {
            email: Some("ana@example.com".to_owned()),
            ..criteria()
        })
        .unwrap()
        {
            Restriction::Or(parts) => {
                assert_eq!(
                    vec![
                        name_match(
                            Property::Email1Address,
                            "ana@example.com"
                        ),
                        name_match(
                            Property::Email2Address,
                            "ana@example.com"
                        ),
                        name_match(
                            Property::Email3Address,
                            "ana@example.com"
                        ),
                    ],
                    parts
                );
            },
            other => panic!("unexpected: {:?}", other),
        }
    }
}
