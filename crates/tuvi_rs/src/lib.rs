//! Convenience wrapper for the Tu Vi chart engine.
//!
//! Holds a global engine and exposes free functions that take parsed birth
//! moments directly, so callers never build a `ChartEngine` or `ChartInput`
//! by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tuvi_rs::*;
//!
//! init(EngineConfig::default()).expect("engine init");
//!
//! let moment: BirthMoment = "1995-03-02 08:30".parse().unwrap();
//! let natal = chart(moment, Gender::Female).unwrap();
//! println!("{} {}", natal.cuc.name(), natal.canonical_hash);
//! ```

pub mod convenience;
pub mod date;
pub mod error;
pub mod global;

pub use convenience::{chart, chart_hash, chart_lunar, cycles, leap_month, to_lunar, to_solar};
pub use date::BirthMoment;
pub use error::TuviError;
pub use global::{init, is_initialized};

// Re-export the types that appear in the convenience signatures.
pub use tuvi_base::{CungName, Cuc, DaiVan, Direction, Gender, NapAm, Star, StarKind};
pub use tuvi_calendar::{CanChi, DiaChi, LunarDate, NguHanh, SolarDate, ThienCan};
pub use tuvi_chart::{
    CenterInfo, ChartError, CycleSnapshot, EngineConfig, NatalChart, Palace, PlacedStar,
};
