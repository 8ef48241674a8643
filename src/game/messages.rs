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

// User-facing texts

use colored::*;

use super::rules::{MAX_SECRET, MIN_SECRET};
use super::session::Outcome;

/// Prompt shown before every guess
pub fn prompt() -> String {
	format!("Введи число от {} до {}: ", MIN_SECRET, MAX_SECRET)
}

/// Pick the Russian word form agreeing with n: one (1, 21), few (2-4, 22-24), many (0, 5-20)
pub fn plural<'a>(n: u32, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
	match (n % 10, n % 100) {
		(1, h) if h != 11 => one,
		(2..=4, h) if !(12..=14).contains(&h) => few,
		_ => many,
	}
}

/// Plain text for an outcome
pub fn outcome_text(outcome: &Outcome) -> String {
	match *outcome {
		Outcome::Correct { secret, attempt } => {
			format!("Ты угадал число {} с {} попытки", secret, attempt)
		}
		Outcome::Incorrect { remaining } => format!(
			"Не угадал, у тебя {} {} {}.",
			plural(remaining, "осталась", "осталось", "осталось"),
			remaining,
			plural(remaining, "попытка", "попытки", "попыток")
		),
		Outcome::Exhausted { secret } => {
			format!("Попытки закончились. Было число: {}", secret)
		}
	}
}

/// Colored line for an outcome
pub fn outcome_message(outcome: &Outcome) -> ColoredString {
	let text = outcome_text(outcome);
	match outcome {
		Outcome::Correct { .. } => text.bright_green(),
		Outcome::Incorrect { .. } => text.bright_yellow(),
		Outcome::Exhausted { .. } => text.bright_red(),
	}
}

/// Line shown when input ends before the session is finished
pub fn abandoned_message(secret: u32) -> ColoredString {
	format!("Игра прервана. Было число: {}", secret).bright_red()
}
