pub mod branches;
pub mod config;
pub mod constants;
pub mod fish;
pub mod light;
pub mod petals;
pub mod scene;
pub mod viewport;

pub use branches::*;
pub use config::*;
pub use constants::*;
pub use fish::*;
pub use light::*;
pub use petals::*;
pub use scene::*;
pub use viewport::*;
