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

// Directory utilities for cross-platform data directory management

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the system-wide data directory for numguess
///
/// - macOS: ~/.local/share/numguess
/// - Linux: ~/.local/share/numguess (following XDG Base Directory specification)
/// - Windows: %LOCALAPPDATA%/numguess
pub fn get_numguess_data_dir() -> Result<PathBuf> {
	let data_dir = match dirs::home_dir() {
		Some(home) => {
			#[cfg(target_os = "windows")]
			let path = match dirs::data_local_dir() {
				Some(dir) => dir.join("numguess"),
				None => home.join("AppData").join("Local").join("numguess"),
			};

			#[cfg(not(target_os = "windows"))]
			let path = home.join(".local").join("share").join("numguess");

			path
		}
		None => {
			return Err(anyhow::anyhow!("Unable to determine home directory"));
		}
	};

	if !data_dir.exists() {
		fs::create_dir_all(&data_dir).context(format!(
			"Failed to create numguess data directory: {}",
			data_dir.display()
		))?;
	}

	Ok(data_dir)
}

/// Get the configuration directory path
pub fn get_config_dir() -> Result<PathBuf> {
	let config_dir = get_numguess_data_dir()?.join("config");

	if !config_dir.exists() {
		fs::create_dir_all(&config_dir).context(format!(
			"Failed to create config directory: {}",
			config_dir.display()
		))?;
	}

	Ok(config_dir)
}

/// Get the default configuration file path
pub fn get_config_file_path() -> Result<PathBuf> {
	Ok(get_config_dir()?.join("config.toml"))
}
