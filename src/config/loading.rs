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

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::Config;

impl Config {
	/// Load configuration from the system-wide config file, falling back to defaults
	pub fn load() -> Result<Self> {
		let config_path = crate::directories::get_config_file_path()?;

		if config_path.exists() {
			Self::load_from_path(&config_path)
		} else {
			Ok(Self {
				config_path: Some(config_path),
				..Default::default()
			})
		}
	}

	/// Load configuration from a specific file path
	pub fn load_from_path(path: &Path) -> Result<Self> {
		let config_str = fs::read_to_string(path)
			.context(format!("Failed to read config from {}", path.display()))?;
		let mut config: Config =
			toml::from_str(&config_str).context("Failed to parse TOML configuration")?;

		// Remember where this config came from
		config.config_path = Some(path.to_path_buf());

		Ok(config)
	}

	/// Save configuration to a specific file path
	pub fn save_to_path(&self, path: &Path) -> Result<()> {
		// Ensure the parent directory exists
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).context(format!(
				"Failed to create config directory: {}",
				parent.display()
			))?;
		}

		let config_str =
			toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

		fs::write(path, config_str)
			.context(format!("Failed to write config to {}", path.display()))?;

		crate::log_info!("Configuration saved to {}", path.display());
		Ok(())
	}

	/// Write a default configuration file at the given path unless one already exists
	pub fn create_default_config(path: &Path) -> Result<()> {
		if !path.exists() {
			Config::default().save_to_path(path)?;
		}

		Ok(())
	}
}
