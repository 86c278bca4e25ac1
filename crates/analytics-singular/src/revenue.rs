// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Best-effort coercion of a revenue property to a numeric amount.

use serde_json::{Map, Value};
use tracing::debug;

/// Extracts a revenue amount from event properties.
///
/// Only the given key is consulted; there is no nested-property search.
/// Strings are parsed strictly as `f64` (no trimming, no locale handling);
/// numbers are coerced directly. Every other JSON type, a missing key, or
/// an unparseable string yields `None`, which routes the event to the
/// generic event call instead of the revenue call.
pub(crate) fn extract_revenue(properties: &Map<String, Value>, key: &str) -> Option<f64> {
	match properties.get(key)? {
		Value::String(s) => {
			let parsed = s.parse::<f64>().ok();
			if parsed.is_none() {
				debug!(value = %s, "Revenue property is a non-numeric string, not tracking revenue");
			}
			parsed
		}
		Value::Number(n) => n.as_f64(),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn props(value: Value) -> Map<String, Value> {
		let mut map = Map::new();
		map.insert("revenue".to_string(), value);
		map
	}

	#[test]
	fn numeric_string_parses() {
		assert_eq!(extract_revenue(&props(json!("9.99")), "revenue"), Some(9.99));
	}

	#[test]
	fn integer_string_parses() {
		assert_eq!(extract_revenue(&props(json!("42")), "revenue"), Some(42.0));
	}

	#[test]
	fn negative_and_exponent_strings_parse() {
		assert_eq!(extract_revenue(&props(json!("-1.5")), "revenue"), Some(-1.5));
		assert_eq!(extract_revenue(&props(json!("1e3")), "revenue"), Some(1000.0));
	}

	#[test]
	fn non_numeric_string_is_no_revenue() {
		assert_eq!(extract_revenue(&props(json!("abc")), "revenue"), None);
		assert_eq!(extract_revenue(&props(json!("")), "revenue"), None);
		assert_eq!(extract_revenue(&props(json!("$9.99")), "revenue"), None);
	}

	#[test]
	fn padded_string_is_no_revenue() {
		// Parsing is strict: no trimming.
		assert_eq!(extract_revenue(&props(json!(" 9.99")), "revenue"), None);
	}

	#[test]
	fn float_number_coerces() {
		assert_eq!(extract_revenue(&props(json!(9.99)), "revenue"), Some(9.99));
	}

	#[test]
	fn integer_number_coerces() {
		assert_eq!(extract_revenue(&props(json!(10)), "revenue"), Some(10.0));
		assert_eq!(extract_revenue(&props(json!(-3)), "revenue"), Some(-3.0));
	}

	#[test]
	fn missing_key_is_no_revenue() {
		assert_eq!(extract_revenue(&Map::new(), "revenue"), None);
	}

	#[test]
	fn other_json_types_are_no_revenue() {
		assert_eq!(extract_revenue(&props(json!(true)), "revenue"), None);
		assert_eq!(extract_revenue(&props(json!(null)), "revenue"), None);
		assert_eq!(extract_revenue(&props(json!([9.99])), "revenue"), None);
		assert_eq!(extract_revenue(&props(json!({"amount": 9.99})), "revenue"), None);
	}

	#[test]
	fn only_the_requested_key_is_consulted() {
		let mut map = Map::new();
		map.insert("total".to_string(), json!(9.99));
		assert_eq!(extract_revenue(&map, "revenue"), None);
		assert_eq!(extract_revenue(&map, "total"), Some(9.99));
	}

	proptest! {
		#[test]
		fn finite_numbers_coerce_to_their_value(amount in -1e12f64..1e12) {
			let extracted = extract_revenue(&props(json!(amount)), "revenue");
			prop_assert_eq!(extracted, Some(amount));
		}

		#[test]
		fn formatted_numbers_parse_back(amount in -1e9f64..1e9) {
			let extracted = extract_revenue(&props(json!(amount.to_string())), "revenue");
			prop_assert_eq!(extracted, Some(amount));
		}

		#[test]
		fn alphabetic_strings_never_parse(s in "[a-zA-Z]{1,20}") {
			// "inf" and "NaN" spellings are valid f64 literals, everything
			// else alphabetic is not.
			if s.parse::<f64>().is_err() {
				prop_assert_eq!(extract_revenue(&props(json!(s)), "revenue"), None);
			}
		}

		#[test]
		fn booleans_never_parse(b in proptest::bool::ANY) {
			prop_assert_eq!(extract_revenue(&props(json!(b)), "revenue"), None);
		}
	}
}
