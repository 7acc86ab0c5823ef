//! Console front end: prompts, menu dispatch, and text rendering.

mod app;
mod console;
mod menu;
mod render;

pub use app::App;
pub use console::{Console, InputClosed, Tone};
pub use menu::MenuChoice;
pub use render::{listing_lines, match_lines};
