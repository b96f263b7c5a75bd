//! Technical indicator implementations.

pub mod math;

pub mod ad_line;
pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod dema;
pub mod ema;
pub mod ichimoku;
pub mod keltner;
pub mod macd;
pub mod mfi;
pub mod obv;
pub mod parabolic_sar;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod volume_profile;
pub mod vwap;
pub mod williams_r;
pub mod wma;

pub use ad_line::AdLine;
pub use adx::Adx;
pub use atr::Atr;
pub use bollinger::BollingerBands;
pub use cci::Cci;
pub use dema::Dema;
pub use ema::Ema;
pub use ichimoku::Ichimoku;
pub use keltner::KeltnerChannels;
pub use macd::Macd;
pub use mfi::Mfi;
pub use obv::Obv;
pub use parabolic_sar::ParabolicSar;
pub use rsi::Rsi;
pub use sma::Sma;
pub use stochastic::Stochastic;
pub use volume_profile::VolumeProfile;
pub use vwap::Vwap;
pub use williams_r::WilliamsR;
pub use wma::Wma;
