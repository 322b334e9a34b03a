// NOTE: chipchip CLI layering
//
// args      -> clap definitions only
// commands  -> builds the execution context and dispatches
// handlers  -> one per command: drive chipchip-runtime, hand results to a presenter
// presentation -> presenters build view models; renderers print them (text/json) or run the TUI
//
// Handlers never print directly. Everything user-visible goes through a
// view model so `--format json` always has the same data as the text output.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
pub use commands::run;
