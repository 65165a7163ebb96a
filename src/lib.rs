pub mod core;
pub mod util;
