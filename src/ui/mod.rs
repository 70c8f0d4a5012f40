//! Terminal UI: board rendering with a column selector, move feedback
//! messages, and end-of-game announcements.

mod app;
mod game_view;

pub use app::App;
