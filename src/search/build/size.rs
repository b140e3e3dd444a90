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

//! The size builder.
//!
//! Items can carry their byte size in two properties: the extended one
//! newer stores fill in, and the legacy 32-bit one. Every bound therefore
//! becomes a disjunction: the extended property exists and satisfies the
//! bound, or it is absent and the legacy property satisfies it.
//!
//! The form takes sizes in whole kilobytes, so "equals N" really means
//! the kilobyte-wide interval `[N, N+1)`.

use crate::search::criteria::{SizeComparator, SizeCriteria};
use crate::search::property::Property;
use crate::search::restriction::{RelOp, Restriction, Value};
use crate::support::error::ValidationError;

const KB: i64 = 1024;

fn parse_kb(
    text: &str,
    field: &'static str,
) -> Result<i64, ValidationError> {
    text.trim()
        .parse::<u32>()
        .map(|kb| i64::from(kb) * KB)
        .map_err(|_| ValidationError::InvalidSizeValue { field })
}

/// One bound over both size properties.
fn size_bound(relop: RelOp, bytes: i64) -> Restriction {
    let extended = Restriction::and(vec![
        Restriction::exists(Property::MessageSizeExtended),
        Restriction::compare(
            Property::MessageSizeExtended,
            relop,
            Value::Int(bytes),
        ),
    ]);
    let legacy = Restriction::and(vec![
        Restriction::exists(Property::MessageSizeExtended).negate(),
        Restriction::compare(
            Property::MessageSize,
            relop,
            Value::Int(bytes),
        ),
    ]);
    Restriction::or(vec![extended, legacy])
}

/// Build the size predicate, `None` when no size constraint is set.
pub fn size(
    criteria: Option<&SizeCriteria>,
) -> Result<Option<Restriction>, ValidationError> {
    let criteria = match criteria {
        None => return Ok(None),
        Some(c) => c,
    };

    let value1 = parse_kb(&criteria.value1, "size value")?;

    let restriction = match criteria.comparator {
        SizeComparator::LessThan => size_bound(RelOp::Lt, value1),
        SizeComparator::GreaterThan => size_bound(RelOp::Gt, value1),
        SizeComparator::Equals => Restriction::and(vec![
            size_bound(RelOp::Ge, value1),
            size_bound(RelOp::Lt, value1 + KB),
        ]),
        SizeComparator::Between => {
            let value2 = criteria
                .value2
                .as_deref()
                .ok_or(ValidationError::InvalidSizeValue {
                    field: "second size value",
                })
                .and_then(|v| parse_kb(v, "second size value"))?;
            Restriction::and(vec![
                size_bound(RelOp::Ge, value1),
                size_bound(RelOp::Le, value2),
            ])
        },
    };

    Ok(Some(restriction))
}

#[cfg(test)]
mod test {
    use super::*;

    fn criteria(
        comparator: SizeComparator,
        value1: &str,
        value2: Option<&str>,
    ) -> SizeCriteria {
        SizeCriteria {
            comparator,
            value1: value1.to_owned(),
            value2: value2.map(str::to_owned),
        }
    }

    #[test]
    fn absent_size_builds_nothing() {
        assert_eq!(Ok(None), size(None));
    }

    #[test]
    fn less_and_greater_become_one_bound() {
        assert_eq!(
            Ok(Some(size_bound(RelOp::Lt, 10 * KB))),
            size(Some(&criteria(SizeComparator::LessThan, "10", None)))
        );
        assert_eq!(
            Ok(Some(size_bound(RelOp::Gt, 10 * KB))),
            size(Some(&criteria(SizeComparator::GreaterThan, "10", None)))
        );
    }

    #[test]
    fn equals_is_a_kilobyte_wide_window() {
        assert_eq!(
            Ok(Some(Restriction::And(vec![
                size_bound(RelOp::Ge, 10_240),
                size_bound(RelOp::Lt, 11_264),
            ]))),
            size(Some(&criteria(SizeComparator::Equals, "10", None)))
        );
    }

    #[test]
    fn between_bounds_both_ends() {
        assert_eq!(
            Ok(Some(Restriction::And(vec![
                size_bound(RelOp::Ge, 10_240),
                size_bound(RelOp::Le, 51_200),
            ]))),
            size(Some(&criteria(
                SizeComparator::Between,
                "10",
                Some("50")
            )))
        );
    }

    #[test]
    fn each_bound_falls_back_to_the_legacy_property() {
        match size_bound(RelOp::Ge, 10_240) {
            Restriction::Or(arms) => {
                assert_eq!(
                    Restriction::And(vec![
                        Restriction::exists(Property::MessageSizeExtended),
                        Restriction::compare(
                            Property::MessageSizeExtended,
                            RelOp::Ge,
                            Value::Int(10_240),
                        ),
                    ]),
                    arms[0]
                );
                assert_eq!(
                    Restriction::And(vec![
                        Restriction::exists(Property::MessageSizeExtended)
                            .negate(),
                        Restriction::compare(
                            Property::MessageSize,
                            RelOp::Ge,
                            Value::Int(10_240),
                        ),
                    ]),
                    arms[1]
                );
            },
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn non_numeric_bounds_are_errors() {
        assert_eq!(
            Err(ValidationError::InvalidSizeValue {
                field: "size value"
            }),
            size(Some(&criteria(SizeComparator::LessThan, "ten", None)))
        );
        assert_eq!(
            Err(ValidationError::InvalidSizeValue {
                field: "size value"
            }),
            size(Some(&criteria(SizeComparator::LessThan, "-5", None)))
        );
        assert_eq!(
            Err(ValidationError::InvalidSizeValue {
                field: "second size value"
            }),
            size(Some(&criteria(SizeComparator::Between, "10", None)))
        );
        assert_eq!(
            Err(ValidationError::InvalidSizeValue {
                field: "second size value"
            }),
            size(Some(&criteria(
                SizeComparator::Between,
                "10",
                Some("lots")
            )))
        );
    }
}
