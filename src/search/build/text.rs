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

//! The free-text builder: one substring test per property in the selected
//! scope, combined with `Or`.

use crate::search::criteria::{FreeText, TextScope};
use crate::search::property::Property;
use crate::search::restriction::{Restriction, TextMatch};

fn scope_properties(scope: TextScope) -> &'static [Property] {
    match scope {
        TextScope::SubjectOnly => &[Property::Subject],
        TextScope::SubjectAndBody => &[Property::Subject, Property::Body],
        TextScope::FileAsOnly => &[Property::FileAs],
        TextScope::NameFields => &[
            Property::DisplayName,
            Property::GivenName,
            Property::Surname,
        ],
        TextScope::CompanyOnly => &[Property::CompanyName],
        TextScope::AddressFields => &[
            Property::BusinessAddress,
            Property::HomeAddress,
            Property::OtherAddress,
        ],
        TextScope::EmailFields => &[
            Property::Email1Address,
            Property::Email2Address,
            Property::Email3Address,
        ],
        TextScope::PhoneFields => &[
            Property::BusinessPhone,
            Property::HomePhone,
            Property::MobilePhone,
        ],
        TextScope::ContentsOnly => &[Property::Body],
    }
}

/// Build the free-text predicate, `None` for an empty query.
pub fn free_text(text: &FreeText, match_case: bool) -> Option<Restriction> {
    let query = text.query.trim();
    if query.is_empty() {
        return None;
    }

    let flags = TextMatch::substring(!match_case);
    Some(Restriction::or(
        scope_properties(text.scope)
            .iter()
            .map(|&p| Restriction::content(p, flags, query))
            .collect(),
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    fn criteria(query: &str, scope: TextScope) -> FreeText {
        FreeText {
            query: query.to_owned(),
            scope,
        }
    }

    #[test]
    fn empty_or_blank_query_builds_nothing() {
        assert_eq!(
            None,
            free_text(&criteria("", TextScope::SubjectOnly), false)
        );
        assert_eq!(
            None,
            free_text(&criteria("   ", TextScope::SubjectAndBody), false)
        );
    }

    #[test]
    fn single_property_scope_collapses_to_the_leaf() {
        assert_eq!(
            Some(Restriction::content(
                Property::Subject,
                TextMatch::substring(true),
                "hello",
            )),
            free_text(&criteria("hello", TextScope::SubjectOnly), false)
        );
    }

    #[test]
    fn subject_and_body_builds_a_disjunction() {
        let flags = TextMatch::substring(true);
        assert_eq!(
            Some(Restriction::Or(vec![
                Restriction::content(Property::Subject, flags, "agenda"),
                Restriction::content(Property::Body, flags, "agenda"),
            ])),
            free_text(
                &criteria("agenda", TextScope::SubjectAndBody),
                false
            )
        );
    }

    #[test]
    fn match_case_drops_the_ignore_case_flag_everywhere() {
        match free_text(&criteria("Q3", TextScope::PhoneFields), true)
            .unwrap()
        {
            Restriction::Or(children) => {
                assert_eq!(3, children.len());
                for c in children {
                    match c {
                        Restriction::Content { flags, .. } => {
                            assert!(!flags.ignore_case)
                        },
                        other => panic!("unexpected: {:?}", other),
                    }
                }
            },
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn query_whitespace_is_trimmed() {
        assert_eq!(
            free_text(&criteria("agenda", TextScope::SubjectOnly), false),
            free_text(
                &criteria("  agenda \t", TextScope::SubjectOnly),
                false
            )
        );
    }
}
