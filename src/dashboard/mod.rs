pub mod intake;
pub mod refresh;
pub mod render;

pub use refresh::{radar_status, Dashboard, DashboardSnapshot, Providers};
pub use render::{radar_message, render_text};
