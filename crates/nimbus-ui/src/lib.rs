//! Terminal front end for the Nimbus weather dashboard.

pub mod error;
pub mod render;
pub mod session;

pub use error::SessionError;
pub use render::{ConsoleRenderer, RenderSink};
pub use session::DashboardSession;
