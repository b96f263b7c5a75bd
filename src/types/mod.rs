pub mod candle;
pub mod config;
pub mod params;
pub mod result;

pub use candle::*;
pub use config::*;
pub use params::*;
pub use result::*;
