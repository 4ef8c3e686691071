//! Placement rules of the Tu Vi (Purple Star) chart.
//!
//! This crate provides:
//! - Nạp Âm sound-elements for the 60 Can-Chi pairs
//! - Mệnh/Thân placement, palace stems, bureau (Cục) and direction
//! - Placement and brightness of 70 stars, life-cycle stages included
//! - Tuần/Triệt markers and the Đại Vận, Tiểu Vận and Lưu Niên cycles
//!
//! All implementations are clean-room, derived from the traditional
//! Tử Vi Đẩu Số placement tables.

pub mod cuc;
pub mod cycle;
pub mod marker;
pub mod nap_am;
pub mod palace;
pub mod star;

pub use cuc::{ALL_CUC, Cuc, cuc_for};
pub use cycle::{
    DAI_VAN_COUNT, DAI_VAN_PERIOD, DaiVan, dai_van, dai_van_index, dai_van_start_age,
    luu_nien_branch, tieu_van_branch,
};
pub use marker::{Markers, triet_pair, tuan_pair};
pub use nap_am::{ALL_NAP_AM, NapAm};
pub use palace::{
    ALL_CUNG, CungName, Direction, Gender, PalaceLayout, dan_stem, menh_branch, palace_stem,
    than_branch,
};
pub use star::{
    ALL_STARS, Brightness, MAIN_STARS, Star, StarInputs, StarKind, StarPositions, brightness,
    place_all_stars,
};
