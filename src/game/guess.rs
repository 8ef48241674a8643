// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Permissive parsing of a raw input line into a guess

use std::fmt;

/// One submitted guess. Malformed input is kept as a guess that never matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Guess {
	Number(f64),
	Malformed(String),
}

impl Guess {
	/// Parse a raw line the way a numeric coercion would: surrounding whitespace
	/// is ignored, decimal and exponent notation are accepted, as are unsigned
	/// `0x`, `0o` and `0b` literals and `Infinity`. Anything else is malformed.
	pub fn parse(raw: &str) -> Self {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return Guess::Malformed(String::new());
		}

		if let Some(radix) = radix_prefix(trimmed) {
			let digits = &trimmed[2..];
			if !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)) {
				if let Ok(value) = u64::from_str_radix(digits, radix) {
					return Guess::Number(value as f64);
				}
			}
			return Guess::Malformed(trimmed.to_string());
		}

		match trimmed {
			"Infinity" | "+Infinity" => return Guess::Number(f64::INFINITY),
			"-Infinity" => return Guess::Number(f64::NEG_INFINITY),
			_ => {}
		}

		// Spelled-out inf/nan are not numbers here, overflowing exponents still are
		let spelled = trimmed
			.trim_start_matches(['+', '-'])
			.starts_with(|c: char| c.is_ascii_alphabetic());

		match trimmed.parse::<f64>() {
			Ok(value) if !spelled && !value.is_nan() => Guess::Number(value),
			_ => Guess::Malformed(trimmed.to_string()),
		}
	}

	/// Whether this guess hits the secret exactly
	pub fn matches(&self, secret: u32) -> bool {
		match self {
			Guess::Number(value) => *value == f64::from(secret),
			Guess::Malformed(_) => false,
		}
	}

	pub fn is_malformed(&self) -> bool {
		matches!(self, Guess::Malformed(_))
	}
}

fn radix_prefix(s: &str) -> Option<u32> {
	match s.get(..2) {
		Some("0x" | "0X") => Some(16),
		Some("0o" | "0O") => Some(8),
		Some("0b" | "0B") => Some(2),
		_ => None,
	}
}

impl fmt::Display for Guess {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Guess::Number(value) => write!(f, "{}", value),
			Guess::Malformed(raw) => write!(f, "{:?} (not a number)", raw),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_integer() {
		assert_eq!(Guess::parse("7"), Guess::Number(7.0));
		assert!(Guess::parse("7").matches(7));
		assert!(!Guess::parse("7").matches(8));
	}

	#[test]
	fn test_whitespace_is_ignored() {
		assert!(Guess::parse("  42\n").matches(42));
		assert!(Guess::parse("\t13 ").matches(13));
	}

	#[test]
	fn test_decimal_and_exponent_forms() {
		assert!(Guess::parse("7.0").matches(7));
		assert!(Guess::parse("0.7e1").matches(7));
		assert!(Guess::parse("+7").matches(7));
		assert!(!Guess::parse("7.5").matches(7));
		assert!(!Guess::parse("-7").matches(7));
	}

	#[test]
	fn test_malformed_input() {
		for raw in ["abc", "7a", "seven", "NaN", "4 2", "0x", "0xg", "0b102", "0o8"] {
			let guess = Guess::parse(raw);
			assert!(guess.is_malformed(), "{:?} should be malformed", raw);
			for secret in 1..=50 {
				assert!(!guess.matches(secret));
			}
		}
	}

	#[test]
	fn test_empty_input_never_matches() {
		assert_eq!(Guess::parse(""), Guess::Malformed(String::new()));
		assert_eq!(Guess::parse("   "), Guess::Malformed(String::new()));
		assert!(!Guess::parse("").matches(1));
	}

	#[test]
	fn test_radix_literals() {
		assert!(Guess::parse("0x10").matches(16));
		assert!(Guess::parse("0X1f").matches(31));
		assert!(Guess::parse("0b110010").matches(50));
		assert!(Guess::parse("0B1").matches(1));
		assert!(Guess::parse("0o7").matches(7));
		assert!(Guess::parse(" 0O17 ").matches(15));
	}

	#[test]
	fn test_signed_radix_literals_are_malformed() {
		for raw in ["-0x10", "+0x10", "0x+10", "0x-1"] {
			assert!(Guess::parse(raw).is_malformed(), "{:?} should be malformed", raw);
		}
	}

	#[test]
	fn test_only_spelled_out_infinity_is_a_number() {
		assert_eq!(Guess::parse("Infinity"), Guess::Number(f64::INFINITY));
		assert_eq!(Guess::parse("+Infinity"), Guess::Number(f64::INFINITY));
		assert_eq!(Guess::parse("-Infinity"), Guess::Number(f64::NEG_INFINITY));
		assert!(!Guess::parse("Infinity").matches(50));

		for raw in ["inf", "-inf", "infinity", "INFINITY", "nan", "-NaN"] {
			assert!(Guess::parse(raw).is_malformed(), "{:?} should be malformed", raw);
		}
	}

	#[test]
	fn test_overflowing_exponent_is_infinite() {
		assert_eq!(Guess::parse("1e400"), Guess::Number(f64::INFINITY));
	}
}
