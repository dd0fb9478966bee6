pub mod axis;
pub mod data;
pub mod series;
pub mod state;

pub use axis::*;
pub use data::*;
pub use series::*;
pub use state::*;
