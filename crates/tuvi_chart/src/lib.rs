//! Tu Vi natal chart engine.
//!
//! [`ChartEngine`] turns a birth input into a [`NatalChart`]: lunar date,
//! Can-Chi of year, month, day and hour, twelve palaces with their stars,
//! Tuần/Triệt markers, the ten-year cycles, the center panel and a
//! canonical content hash.
//!
//! ```rust,ignore
//! let engine = ChartEngine::new(EngineConfig::default())?;
//! let date: SolarDate = "1995-03-02".parse()?;
//! let chart = engine.compute(&ChartInput::solar(date, 8, 30, Gender::Female))?;
//! println!("{}", chart.canonical_hash);
//! ```

pub mod center;
pub mod chart;
pub mod config;
pub mod error;
pub mod hash;
pub mod input;

pub use center::{CenterInfo, MenhCucRelation, center_info};
pub use chart::{
    BirthInfo, ChartEngine, CycleInfo, CycleSnapshot, NatalChart, Palace, PlacedStar,
};
pub use config::EngineConfig;
pub use error::ChartError;
pub use hash::{canonical_hash, canonical_record, section_hash};
pub use input::ChartInput;
