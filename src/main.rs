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

use clap::{Args, Parser, Subcommand};
use numguess::config::{Config, LogLevel};
use numguess::{directories, game, log_error};
use std::path::Path;

#[derive(Parser)]
#[command(name = "numguess")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Guess the secret number from 1 to 50 in 10 attempts")]
struct NumguessArgs {
	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Play one game (default)
	Play,

	/// Generate or update the configuration file
	Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
	/// Set the log level (none, info or debug)
	#[arg(long)]
	log_level: Option<LogLevel>,

	/// Enable or disable colored output
	#[arg(long)]
	colors: Option<bool>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
	let args = NumguessArgs::parse();

	let config = init_config(Config::load());

	match args.command.unwrap_or(Commands::Play) {
		Commands::Play => {
			game::play().await?;
		}
		Commands::Config(config_args) => {
			let config_path = directories::get_config_file_path()?;
			handle_config_command(&config_args, config, &config_path)?
		}
	}

	Ok(())
}

// Resolve the configuration and make it current for logging and colors
fn init_config(loaded: Result<Config, anyhow::Error>) -> Config {
	let config = match loaded {
		Ok(config) => config,
		Err(e) => {
			log_error!("Failed to load configuration: {:#}", e);
			eprintln!("Continuing with default settings.");
			Config::default()
		}
	};
	config.apply();
	config
}

// Handle the configuration command
fn handle_config_command(
	args: &ConfigArgs,
	mut config: Config,
	config_path: &Path,
) -> Result<(), anyhow::Error> {
	let mut modified = false;

	if let Some(level) = args.log_level {
		config.log_level = level;
		println!("Set log level to {:?}", level);
		modified = true;
	}

	if let Some(colors) = args.colors {
		config.enable_colors = colors;
		println!("{} colored output", if colors { "Enabled" } else { "Disabled" });
		modified = true;
	}

	if modified {
		config.save_to_path(config_path)?;
		println!("Configuration saved successfully");
	} else {
		Config::create_default_config(config_path)?;
		println!("Configuration file: {}", config_path.display());
	}

	println!("\nCurrent configuration:");
	println!("Log level: {:?}", config.log_level);
	println!("Colored output: {}", config.enable_colors);

	Ok(())
}
