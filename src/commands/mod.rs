pub mod navigation;
pub mod registry;
pub mod session;

pub use navigation::Route;
pub use registry::{execute, execute_line, Command};
pub use session::BrowseSession;
