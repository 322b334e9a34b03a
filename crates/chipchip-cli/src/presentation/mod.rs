//! # Presentation Layer
//!
//! MVVM for one-shot console output, components for the interactive TUI.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(json)==> serde_json
//!                                                                       ==(text)==> [ View ] (fmt::Display)
//!
//! [ TuiRenderer ] --> [ AppState ] --> [ Presenter ] --> [ ViewModel ] --> [ Component ] --> [ View ] (Widget)
//!        ^                                                                     |
//!        +-------------------------- Action -----------------------------------+
//! ```
//!
//! ## Rules
//!
//! * **View models carry raw data.** Timestamps stay `DateTime<Utc>`, counts
//!   stay numbers. Local-time formatting and truncation happen in `views/`
//!   through `formatters/`.
//! * **`ViewMode` is density, not shape.** Minimal prints ids, Compact one line
//!   per chirp, Standard full cards, Verbose adds ids and emails.
//! * **JSON ignores `ViewMode`.** `--format json` always dumps the whole view
//!   model wrapped in `{badge?, content, suggestions?}`.
//! * **Components own UI state, not data.** Selection and focus live in
//!   `views/tui/components`; domain effects (submit, delete, refetch) are
//!   returned as actions for the renderer to route.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Decide which tip or badge to show | `presenters/` |
//! | Change colors or layout | `views/` |
//! | Format a timestamp | `formatters/` |
//! | Add a key binding | `views/tui/components/` + `renderers/tui/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
