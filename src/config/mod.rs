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

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;

pub mod loading;


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
	#[default]
	#[serde(rename = "none")]
	None,
	#[serde(rename = "info")]
	Info,
	#[serde(rename = "debug")]
	Debug,
}

impl LogLevel {
	/// Check if info logging is enabled
	pub fn is_info_enabled(&self) -> bool {
		matches!(self, LogLevel::Info | LogLevel::Debug)
	}

	/// Check if debug logging is enabled
	pub fn is_debug_enabled(&self) -> bool {
		matches!(self, LogLevel::Debug)
	}
}

impl std::str::FromStr for LogLevel {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"none" => Ok(LogLevel::None),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			other => Err(anyhow::anyhow!(
				"Unknown log level '{}'. Valid levels are 'none', 'info' or 'debug'.",
				other
			)),
		}
	}
}

fn default_enable_colors() -> bool {
	true
}

/// User settings. Game rules are fixed and intentionally absent here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
	#[serde(default)]
	pub log_level: LogLevel,

	// Colored prompts and outcome messages
	#[serde(default = "default_enable_colors")]
	pub enable_colors: bool,

	#[serde(skip)]
	config_path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: LogLevel::default(),
			enable_colors: default_enable_colors(),
			config_path: None,
		}
	}
}

impl Config {
	/// Get the global log level
	pub fn get_log_level(&self) -> LogLevel {
		self.log_level
	}

	/// Path this config was loaded from or will be saved to
	pub fn config_path(&self) -> Option<&std::path::Path> {
		self.config_path.as_deref()
	}

	/// Make this config current for the thread: logging macros and color output follow it
	pub fn apply(&self) {
		if self.enable_colors {
			colored::control::unset_override();
		} else {
			colored::control::set_override(false);
		}
		set_thread_config(self);
	}
}

// Logging macros for different log levels
// These macros automatically check the current log level and only print if appropriate

thread_local! {
	static CURRENT_CONFIG: RefCell<Option<Config>> = const { RefCell::new(None) };
}

/// Set the current config for the thread (to be used by logging macros)
pub fn set_thread_config(config: &Config) {
	CURRENT_CONFIG.with(|c| {
		*c.borrow_mut() = Some(config.clone());
	});
}

/// Get the current config for the thread
pub fn with_thread_config<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Config) -> R,
{
	CURRENT_CONFIG.with(|c| (*c.borrow()).as_ref().map(f))
}

/// Info logging macro with automatic cyan coloring
/// Shows info messages when log level is Info OR Debug
#[macro_export]
macro_rules! log_info {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
			if should_log {
				use colored::Colorize;
				println!("{}", $fmt.cyan());
			}
		}
	};
	($fmt:expr, $($arg:expr),*) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
			if should_log {
				use colored::Colorize;
				println!("{}", format!($fmt, $($arg),*).cyan());
			}
		}
	};
}

/// Debug logging macro with automatic bright blue coloring
#[macro_export]
macro_rules! log_debug {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
			if should_log {
				use colored::Colorize;
				println!("{}", $fmt.bright_blue());
			}
		}
	};
	($fmt:expr, $($arg:expr),*) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
			if should_log {
				use colored::Colorize;
				println!("{}", format!($fmt, $($arg),*).bright_blue());
			}
		}
	};
}

/// Error logging macro with automatic bright red coloring
/// Always visible regardless of log level (errors should always be shown)
#[macro_export]
macro_rules! log_error {
	($fmt:expr) => {{
		use colored::Colorize;
		eprintln!("{}", $fmt.bright_red());
	}};
	($fmt:expr, $($arg:expr),*) => {{
		use colored::Colorize;
		eprintln!("{}", format!($fmt, $($arg),*).bright_red());
	}};
}
