use std::fs;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use humansize::DECIMAL;

use sketchpal_rs::palettes::version::Version;

use crate::cmd_clear::palette_clear;
use crate::cmd_info::palette_info;
use crate::cmd_load::palette_load;
use crate::cmd_save::palette_save;
use crate::cmd_swift::palette_swift;
use crate::commands::{Cli, Commands, TOOL_VERSION};
use crate::common::{Outcome, display_error, display_message};
use crate::logging::init_logging;

mod cmd_clear;
mod cmd_info;
mod cmd_load;
mod cmd_save;
mod cmd_swift;
mod commands;
mod common;
mod logging;

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.debug);

	let Some(command) = &cli.command else {
		if let Err(e) = Cli::command().print_help() {
			display_error(&format!("couldn't print help: {e}"));
		}
		return ExitCode::FAILURE;
	};

	let tool_version = cli.tool_version.as_deref().unwrap_or(TOOL_VERSION);
	let running = match tool_version.parse::<Version>() {
		Ok(v) => v,
		Err(_) => {
			display_error(&format!("\"{tool_version}\" is not a valid tool version"));
			return ExitCode::FAILURE;
		}
	};
	log::debug!("running as version {running}");

	let result = match command {
		Commands::Load(args) => palette_load(args, &cli.library, &running),
		Commands::Save(args) => palette_save(args, &cli.library, &running),
		Commands::Swift(args) => palette_swift(args, &cli.library),
		Commands::Clear(args) => palette_clear(args, &cli.library),
		Commands::Info(args) => palette_info(args, &running),
	};

	match result {
		Ok(Outcome::Written(output)) => {
			match fs::metadata(&output) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Wrote {} ({size})", output.display());
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Ok(Outcome::Applied { scope, count }) => {
			println!("{scope} palette now has {count} colors");
			ExitCode::SUCCESS
		}
		Ok(Outcome::Printed) => ExitCode::SUCCESS,
		Ok(Outcome::NothingToDo(msg)) => {
			display_message(msg);
			ExitCode::SUCCESS
		}
		Err(e) => {
			display_error(&format!("{e:#}"));
			ExitCode::FAILURE
		}
	}
}
