//! Center panel of the chart: polarity label, Bản mệnh, Mệnh–Cục relation,
//! Chủ Mệnh, Chủ Thân and Thân cư.

use serde::{Serialize, Serializer};
use tuvi_base::{CungName, Cuc, Gender, NapAm, PalaceLayout, Star, StarKind, StarPositions};
use tuvi_calendar::{CanChi, ElementRelation, NguHanh};

/// How the year's Nạp Âm element (Mệnh) stands towards the bureau element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenhCucRelation {
    BinhHoa,
    MenhSinhCuc,
    CucSinhMenh,
    MenhKhacCuc,
    CucKhacMenh,
}

impl MenhCucRelation {
    pub fn of(menh: NguHanh, cuc: NguHanh) -> Self {
        match menh.relation_to(cuc) {
            ElementRelation::Same => Self::BinhHoa,
            ElementRelation::Generates => Self::MenhSinhCuc,
            ElementRelation::GeneratedBy => Self::CucSinhMenh,
            ElementRelation::Overcomes => Self::MenhKhacCuc,
            ElementRelation::OvercomeBy => Self::CucKhacMenh,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::BinhHoa => "Bình hòa",
            Self::MenhSinhCuc => "Mệnh sinh Cục",
            Self::CucSinhMenh => "Cục sinh Mệnh",
            Self::MenhKhacCuc => "Mệnh khắc Cục",
            Self::CucKhacMenh => "Cục khắc Mệnh",
        }
    }
}

impl Serialize for MenhCucRelation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Summary shown in the middle of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenterInfo {
    /// e.g. "Âm Nữ".
    pub am_duong: String,
    pub ban_menh: NapAm,
    pub ban_menh_element: NguHanh,
    pub cuc: Cuc,
    pub cuc_element: NguHanh,
    pub menh_cuc_relation: MenhCucRelation,
    pub chu_menh: Option<Star>,
    /// Mệnh holds no main star (vô chính diệu).
    pub menh_without_main_star: bool,
    pub chu_than: Option<Star>,
    pub than_cu: CungName,
}

fn first_main(stars: &[Star]) -> Option<Star> {
    stars.iter().copied().find(|s| s.kind() == StarKind::Main)
}

/// Build the center panel from placed stars.
pub fn center_info(
    year: CanChi,
    gender: Gender,
    cuc: Cuc,
    layout: &PalaceLayout,
    positions: &StarPositions,
) -> CenterInfo {
    let ban_menh = NapAm::of(year);
    let stars_of = |cung: CungName| positions.stars_at(layout.branch_of(cung));
    let menh_stars = stars_of(CungName::Menh);
    let than_stars = positions.stars_at(layout.than);

    let menh_main = first_main(&menh_stars);
    let chu_menh = menh_main
        .or_else(|| first_main(&stars_of(CungName::ThienDi)))
        .or_else(|| first_main(&stars_of(CungName::TaiBach)))
        .or_else(|| first_main(&than_stars))
        .or_else(|| menh_stars.first().copied());
    let chu_than = first_main(&than_stars).or_else(|| than_stars.first().copied());

    CenterInfo {
        am_duong: format!("{} {}", year.can.polarity().name(), gender.name()),
        ban_menh,
        ban_menh_element: ban_menh.element(),
        cuc,
        cuc_element: cuc.element(),
        menh_cuc_relation: MenhCucRelation::of(ban_menh.element(), cuc.element()),
        chu_menh,
        menh_without_main_star: menh_main.is_none(),
        chu_than,
        than_cu: layout.than_cu(),
    }
}
