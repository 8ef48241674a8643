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

// Prompt/response loop

use anyhow::{Context, Result};
use std::io::Write;

use super::input::{GuessSource, TerminalSource};
use super::messages;
use super::rules::{MAX_ATTEMPTS, MAX_SECRET, MIN_SECRET};
use super::session::{GuessSession, Outcome};
use crate::{log_debug, log_info};

/// How a session run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
	/// The session reached its terminal state with this last outcome
	Finished(Outcome),
	/// Input ended before the session was finished
	Abandoned { secret: u32, attempts: u32 },
}

/// Drive a session until it is finished or the source runs dry.
/// Exactly one line is requested per prompt and none after the session finishes.
pub async fn run_session(
	session: &mut GuessSession,
	source: &mut dyn GuessSource,
	out: &mut dyn Write,
) -> Result<SessionEnd> {
	let prompt = messages::prompt();

	loop {
		let Some(line) = source.next_line(&prompt).await? else {
			log_info!("Session abandoned after {} attempts", session.attempts());
			writeln!(out, "{}", messages::abandoned_message(session.secret()))?;
			out.flush()?;
			return Ok(SessionEnd::Abandoned {
				secret: session.secret(),
				attempts: session.attempts(),
			});
		};

		let outcome = session.submit_guess(&line)?;
		writeln!(out, "{}", messages::outcome_message(&outcome))
			.context("Failed to write outcome")?;
		out.flush()?;

		if session.is_finished() {
			log_info!("Session finished after {} attempts", session.attempts());
			return Ok(SessionEnd::Finished(outcome));
		}
	}
}

/// Play one game on the terminal
pub async fn play() -> Result<SessionEnd> {
	let mut session = GuessSession::new();
	log_info!(
		"Starting session: secret in {}..={}, {} attempts",
		MIN_SECRET,
		MAX_SECRET,
		MAX_ATTEMPTS
	);
	log_debug!("Secret is {}", session.secret());

	let mut source = TerminalSource::new()?;
	let mut stdout = std::io::stdout();
	run_session(&mut session, &mut source, &mut stdout).await
}
