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

// Guess input sources

use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::{CompletionType, Config as RustylineConfig, DefaultEditor, EditMode};

/// Where guesses come from. One call per prompt; `None` means input has ended.
#[async_trait(?Send)]
pub trait GuessSource {
	async fn next_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line editor over the terminal (or piped stdin) with guess history
pub struct TerminalSource {
	editor: DefaultEditor,
}

impl TerminalSource {
	pub fn new() -> Result<Self> {
		let config = RustylineConfig::builder()
			.completion_type(CompletionType::List)
			.edit_mode(EditMode::Emacs)
			.bell_style(rustyline::config::BellStyle::None)
			.build();

		let editor = DefaultEditor::with_config(config).context("Failed to initialize line editor")?;
		Ok(Self { editor })
	}
}

#[async_trait(?Send)]
impl GuessSource for TerminalSource {
	async fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
		match self.editor.readline(&prompt.bright_blue().to_string()) {
			Ok(line) => {
				if !line.trim().is_empty() {
					let _ = self.editor.add_history_entry(line.as_str());
				}
				Ok(Some(line))
			}
			Err(ReadlineError::Interrupted) => {
				// Ctrl+C
				println!();
				crate::log_debug!("Input interrupted");
				Ok(None)
			}
			Err(ReadlineError::Eof) => {
				// Ctrl+D or closed stdin
				println!();
				crate::log_debug!("Input closed");
				Ok(None)
			}
			Err(err) => Err(anyhow::Error::new(err).context("Failed to read guess")),
		}
	}
}
