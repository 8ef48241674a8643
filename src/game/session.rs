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

// Guess session state machine

use anyhow::{bail, Result};
use rand::Rng;

use super::guess::Guess;
use super::rules::{secret_range, MAX_ATTEMPTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	Prompting,
	Finished,
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The guess hit the secret on the given 1-based attempt
	Correct { secret: u32, attempt: u32 },
	/// Wrong guess, the session goes on
	Incorrect { remaining: u32 },
	/// Wrong guess and no attempts left
	Exhausted { secret: u32 },
}

impl Outcome {
	pub fn is_final(&self) -> bool {
		!matches!(self, Outcome::Incorrect { .. })
	}
}

#[derive(Debug)]
pub struct GuessSession {
	secret: u32,
	attempts: u32,
	state: SessionState,
}

impl GuessSession {
	/// Start a session with a secret drawn from the thread-local generator
	pub fn new() -> Self {
		Self::with_rng(&mut rand::thread_rng())
	}

	/// Start a session with a secret drawn from the given generator
	pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
		Self {
			secret: rng.gen_range(secret_range()),
			attempts: 0,
			state: SessionState::Prompting,
		}
	}

	/// Start a session with a known secret
	pub fn with_secret(secret: u32) -> Result<Self> {
		if !secret_range().contains(&secret) {
			bail!(
				"Secret {} is outside of {}..={}",
				secret,
				secret_range().start(),
				secret_range().end()
			);
		}

		Ok(Self {
			secret,
			attempts: 0,
			state: SessionState::Prompting,
		})
	}

	pub fn secret(&self) -> u32 {
		self.secret
	}

	/// Guesses submitted so far
	pub fn attempts(&self) -> u32 {
		self.attempts
	}

	pub fn remaining(&self) -> u32 {
		MAX_ATTEMPTS - self.attempts
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	pub fn is_finished(&self) -> bool {
		self.state == SessionState::Finished
	}

	/// Submit one raw input line. Every call on a prompting session consumes an
	/// attempt, including malformed input.
	pub fn submit_guess(&mut self, raw_input: &str) -> Result<Outcome> {
		if self.is_finished() {
			bail!("Session is already finished after {} attempts", self.attempts);
		}

		let guess = Guess::parse(raw_input);
		self.attempts += 1;
		crate::log_debug!("Attempt {}: {}", self.attempts, guess);

		let outcome = if guess.matches(self.secret) {
			Outcome::Correct {
				secret: self.secret,
				attempt: self.attempts,
			}
		} else if self.attempts < MAX_ATTEMPTS {
			Outcome::Incorrect {
				remaining: self.remaining(),
			}
		} else {
			Outcome::Exhausted {
				secret: self.secret,
			}
		};

		if outcome.is_final() {
			self.state = SessionState::Finished;
		}

		Ok(outcome)
	}
}

impl Default for GuessSession {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	#[test]
	fn test_secret_is_within_range() {
		for seed in 0..500 {
			let session = GuessSession::with_rng(&mut StdRng::seed_from_u64(seed));
			assert!((1..=50).contains(&session.secret()));
			assert_eq!(session.attempts(), 0);
			assert_eq!(session.state(), SessionState::Prompting);
		}

		let session = GuessSession::new();
		assert!((1..=50).contains(&session.secret()));
	}

	#[test]
	fn test_with_secret_rejects_out_of_range() {
		assert!(GuessSession::with_secret(0).is_err());
		assert!(GuessSession::with_secret(51).is_err());
		assert_eq!(GuessSession::with_secret(1).unwrap().secret(), 1);
		assert_eq!(GuessSession::with_secret(50).unwrap().secret(), 50);
	}

	#[test]
	fn test_wrong_then_correct() {
		let mut session = GuessSession::with_secret(7).unwrap();

		assert_eq!(
			session.submit_guess("3").unwrap(),
			Outcome::Incorrect { remaining: 9 }
		);
		assert_eq!(session.state(), SessionState::Prompting);

		assert_eq!(
			session.submit_guess("7").unwrap(),
			Outcome::Correct {
				secret: 7,
				attempt: 2
			}
		);
		assert!(session.is_finished());
		assert_eq!(session.attempts(), 2);
	}

	#[test]
	fn test_correct_on_every_attempt_number() {
		for k in 1..=MAX_ATTEMPTS {
			let mut session = GuessSession::with_secret(25).unwrap();
			for _ in 1..k {
				assert!(!session.submit_guess("24").unwrap().is_final());
			}
			assert_eq!(
				session.submit_guess("25").unwrap(),
				Outcome::Correct {
					secret: 25,
					attempt: k
				}
			);
			assert!(session.is_finished());
		}
	}

	#[test]
	fn test_attempts_are_exhausted_on_the_tenth_guess() {
		let mut session = GuessSession::with_secret(42).unwrap();

		for n in 1..MAX_ATTEMPTS {
			assert_eq!(
				session.submit_guess("1").unwrap(),
				Outcome::Incorrect {
					remaining: MAX_ATTEMPTS - n
				}
			);
			assert_eq!(session.attempts(), n);
		}

		assert_eq!(
			session.submit_guess("1").unwrap(),
			Outcome::Exhausted { secret: 42 }
		);
		assert_eq!(session.attempts(), MAX_ATTEMPTS);
		assert_eq!(session.remaining(), 0);
		assert!(session.is_finished());
	}

	#[test]
	fn test_correct_guess_on_last_attempt_wins() {
		let mut session = GuessSession::with_secret(42).unwrap();
		for _ in 1..MAX_ATTEMPTS {
			session.submit_guess("1").unwrap();
		}
		assert_eq!(
			session.submit_guess("42").unwrap(),
			Outcome::Correct {
				secret: 42,
				attempt: 10
			}
		);
	}

	#[test]
	fn test_malformed_input_consumes_an_attempt() {
		let mut session = GuessSession::with_secret(5).unwrap();

		assert_eq!(
			session.submit_guess("abc").unwrap(),
			Outcome::Incorrect { remaining: 9 }
		);
		assert_eq!(
			session.submit_guess("").unwrap(),
			Outcome::Incorrect { remaining: 8 }
		);
		assert_eq!(session.attempts(), 2);
		assert_eq!(session.state(), SessionState::Prompting);
	}

	#[test]
	fn test_radix_literal_guess_wins() {
		let cases = [(16, "0x10"), (50, "0b110010"), (7, "0o7")];
		for (secret, raw) in cases {
			let mut session = GuessSession::with_secret(secret).unwrap();
			assert_eq!(
				session.submit_guess(raw).unwrap(),
				Outcome::Correct { secret, attempt: 1 }
			);
		}

		let mut session = GuessSession::with_secret(16).unwrap();
		assert_eq!(
			session.submit_guess("-0x10").unwrap(),
			Outcome::Incorrect { remaining: 9 }
		);
	}

	#[test]
	fn test_finished_session_rejects_guesses() {
		let mut session = GuessSession::with_secret(9).unwrap();
		session.submit_guess("9").unwrap();

		assert!(session.submit_guess("9").is_err());
		assert_eq!(session.attempts(), 1);
		assert!(session.is_finished());
	}

	#[test]
	fn test_secret_never_changes() {
		let mut session = GuessSession::with_rng(&mut StdRng::seed_from_u64(7));
		let secret = session.secret();
		let wrong = if secret == 1 { "2" } else { "1" };

		while !session.is_finished() {
			session.submit_guess(wrong).unwrap();
			assert_eq!(session.secret(), secret);
		}
	}
}
