pub mod exec;
pub mod locate;
pub mod registry;

pub use exec::exec;
pub use locate::locate;
pub use registry::{default_store_path, load, merge, persist};
