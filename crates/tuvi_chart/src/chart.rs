//! Chart assembly: birth input to a fully populated [`NatalChart`].

use serde::Serialize;
use tracing::{debug, info};
use tuvi_base::{
    ALL_CUNG, Brightness, CungName, Cuc, DAI_VAN_PERIOD, DaiVan, Direction, Gender, Markers,
    PalaceLayout, Star, StarInputs, StarKind, brightness, cuc_for, dai_van, dai_van_index,
    luu_nien_branch, palace_stem, place_all_stars, tieu_van_branch,
};
use tuvi_calendar::{
    CalendarError, CanChi, DiaChi, LunarDate, NguHanh, SolarDate, ThienCan, day_can_chi_from_jdn,
    hour_branch, hour_can_chi, leap_month, lunar_to_solar, month_can_chi, solar_to_lunar,
    year_can_chi,
};

use crate::center::{CenterInfo, center_info};
use crate::config::EngineConfig;
use crate::error::ChartError;
use crate::hash::canonical_hash;
use crate::input::ChartInput;

/// A star as it appears inside a palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedStar {
    pub star: Star,
    pub name: &'static str,
    pub kind: StarKind,
    pub element: NguHanh,
    pub brightness: Brightness,
    pub is_positive: bool,
    /// Zero-based position inside the palace.
    pub order: u8,
}

impl PlacedStar {
    fn new(star: Star, branch: DiaChi, order: u8) -> Self {
        Self {
            star,
            name: star.name(),
            kind: star.kind(),
            element: star.element(),
            brightness: brightness(star, branch),
            is_positive: star.is_positive(),
            order,
        }
    }
}

/// One of the twelve palaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palace {
    /// Role index (Mệnh = 0).
    pub index: u8,
    pub cung: CungName,
    pub branch: DiaChi,
    pub stem: ThienCan,
    /// Stem initial and branch, e.g. "Đ.Hợi".
    pub label: String,
    pub stars: Vec<PlacedStar>,
    pub is_than_cu: bool,
    pub in_tuan: bool,
    pub in_triet: bool,
    pub life_stage: Star,
    pub dai_van_start_age: u32,
    pub dai_van_label: String,
}

/// Birth moment with its derived calendar facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthInfo {
    pub solar: SolarDate,
    pub lunar: LunarDate,
    pub hour: u32,
    pub minute: u32,
    pub gender: Gender,
    pub is_lunar_input: bool,
    pub year_can_chi: CanChi,
    pub month_can_chi: CanChi,
    pub day_can_chi: CanChi,
    pub hour_branch: DiaChi,
    pub hour_can_chi: CanChi,
}

/// Direction and the twelve ten-year cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleInfo {
    pub direction: Direction,
    pub dai_van_start_age: u32,
    pub period: u32,
    pub dai_van: Vec<DaiVan>,
}

/// Cycles in force at one age and calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSnapshot {
    pub age: u32,
    pub year: i32,
    pub dai_van: DaiVan,
    pub tieu_van: DiaChi,
    pub luu_nien: DiaChi,
}

/// A computed natal chart. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NatalChart {
    pub birth: BirthInfo,
    pub cuc: Cuc,
    pub direction: Direction,
    pub menh_branch: DiaChi,
    pub than_branch: DiaChi,
    /// Ordered by role index.
    pub palaces: Vec<Palace>,
    pub markers: Markers,
    pub cycles: CycleInfo,
    pub center: CenterInfo,
    pub canonical_hash: String,
}

impl NatalChart {
    /// Palace of a role.
    pub fn palace(&self, cung: CungName) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.cung == cung)
    }

    /// Palace sitting on a branch.
    pub fn palace_at(&self, branch: DiaChi) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.branch == branch)
    }

    /// Branch hosting `star`, if the chart places it.
    pub fn star_branch(&self, star: Star) -> Option<DiaChi> {
        self.palaces
            .iter()
            .find(|p| p.stars.iter().any(|s| s.star == star))
            .map(|p| p.branch)
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Stem initial of a palace label: "Đ" for Đinh, "Q" for Quý.
fn stem_initial(stem: ThienCan) -> String {
    stem.name().chars().take(1).collect()
}

/// Chart engine bound to one configuration.
///
/// Holds no mutable state; one engine can serve any number of threads.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    config: EngineConfig,
}

impl ChartEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ChartError> {
        config.validate()?;
        info!(
            tz_offset_hours = config.tz_offset_hours,
            min_year = config.min_year,
            max_year = config.max_year,
            "chart engine ready"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn check_year(&self, year: i32) -> Result<(), ChartError> {
        if !self.config.contains_year(year) {
            return Err(CalendarError::DateOutOfRange {
                year,
                min: self.config.min_year,
                max: self.config.max_year,
            }
            .into());
        }
        Ok(())
    }

    /// Solar to lunar in the configured time zone and span.
    pub fn to_lunar(&self, date: SolarDate) -> Result<LunarDate, ChartError> {
        self.check_year(date.year())?;
        Ok(solar_to_lunar(
            date.day(),
            date.month(),
            date.year(),
            self.config.tz_offset_hours,
        )?)
    }

    /// Lunar to solar in the configured time zone and span.
    pub fn to_solar(
        &self,
        day: u32,
        month: u32,
        year: i32,
        is_leap_month: bool,
    ) -> Result<SolarDate, ChartError> {
        let solar = lunar_to_solar(
            day,
            month,
            year,
            is_leap_month,
            self.config.tz_offset_hours,
        )?;
        self.check_year(solar.year())?;
        Ok(solar)
    }

    /// Leap month of a lunar year, if any.
    pub fn leap_month(&self, lunar_year: i32) -> Result<Option<u32>, ChartError> {
        self.check_year(lunar_year)?;
        Ok(leap_month(lunar_year, self.config.tz_offset_hours)?)
    }

    /// Compute the full chart for one birth input.
    pub fn compute(&self, input: &ChartInput) -> Result<NatalChart, ChartError> {
        input.validate()?;
        let solar = if input.is_lunar {
            self.to_solar(input.day, input.month, input.year, input.is_leap_month)?
        } else {
            SolarDate::new(input.year, input.month, input.day)?
        };
        let lunar = self.to_lunar(solar)?;

        let year_cc = year_can_chi(lunar.year());
        let day_cc = day_can_chi_from_jdn(solar.jdn());
        let hour_b = hour_branch(input.hour);
        let birth = BirthInfo {
            solar,
            lunar,
            hour: input.hour,
            minute: input.minute,
            gender: input.gender,
            is_lunar_input: input.is_lunar,
            year_can_chi: year_cc,
            month_can_chi: month_can_chi(lunar.year(), lunar.month()),
            day_can_chi: day_cc,
            hour_branch: hour_b,
            hour_can_chi: hour_can_chi(day_cc.can, hour_b),
        };

        let layout = PalaceLayout::new(lunar.month(), hour_b);
        let cuc = cuc_for(year_cc.can, layout.menh);
        let direction = Direction::of(year_cc.can, input.gender);
        let positions = place_all_stars(&StarInputs {
            year: year_cc,
            lunar_month: lunar.month(),
            lunar_day: lunar.day(),
            hour: hour_b,
            cuc,
            direction,
        })
        .ok_or(ChartError::LunarOutOfRange {
            month: lunar.month(),
            day: lunar.day(),
        })?;
        let markers = Markers::new(year_cc);
        let cycles = dai_van(cuc, &layout, direction);

        let palaces = ALL_CUNG
            .iter()
            .map(|&cung| {
                let branch = layout.branch_of(cung);
                let stem = palace_stem(year_cc.can, branch);
                let stars: Vec<PlacedStar> = positions
                    .stars_at(branch)
                    .into_iter()
                    .enumerate()
                    .map(|(i, s)| PlacedStar::new(s, branch, i as u8))
                    .collect();
                let life_stage = stars
                    .iter()
                    .find(|s| s.kind == StarKind::LifeCycle)
                    .map_or(Star::TruongSinh, |s| s.star);
                let cycle = cycles.iter().find(|c| c.branch == branch);
                Palace {
                    index: cung.index(),
                    cung,
                    branch,
                    stem,
                    label: format!("{}.{}", stem_initial(stem), branch.name()),
                    stars,
                    is_than_cu: branch == layout.than,
                    in_tuan: markers.is_in_tuan(branch),
                    in_triet: markers.is_in_triet(branch),
                    life_stage,
                    dai_van_start_age: cycle.map_or(0, |c| c.start_age),
                    dai_van_label: cycle.map(|c| c.label.clone()).unwrap_or_default(),
                }
            })
            .collect();

        let center = center_info(year_cc, input.gender, cuc, &layout, &positions);
        let mut chart = NatalChart {
            birth,
            cuc,
            direction,
            menh_branch: layout.menh,
            than_branch: layout.than,
            palaces,
            markers,
            cycles: CycleInfo {
                direction,
                dai_van_start_age: cuc.value(),
                period: DAI_VAN_PERIOD,
                dai_van: cycles,
            },
            center,
            canonical_hash: String::new(),
        };
        chart.canonical_hash = canonical_hash(&chart)?;

        debug!(
            solar = %solar,
            lunar = %lunar,
            menh = chart.menh_branch.name(),
            cuc = cuc.value(),
            hash = %chart.canonical_hash,
            "chart computed"
        );
        Ok(chart)
    }

    /// Đại Vận, Tiểu Vận and Lưu Niên in force at `age` in calendar `year`.
    pub fn cycles_at(&self, chart: &NatalChart, age: u32, year: i32) -> CycleSnapshot {
        let i = dai_van_index(chart.cuc, age);
        let dai_van = chart.cycles.dai_van[i].clone();
        CycleSnapshot {
            age,
            year,
            dai_van,
            tieu_van: tieu_van_branch(chart.birth.hour_branch, age, chart.direction),
            luu_nien: luu_nien_branch(
                chart.birth.year_can_chi.chi,
                chart.birth.lunar.year(),
                year,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ChartEngine {
        ChartEngine::new(EngineConfig::default()).unwrap()
    }

    fn fixture() -> ChartInput {
        ChartInput::solar(
            SolarDate::new(1995, 3, 2).unwrap(),
            8,
            30,
            Gender::Female,
        )
    }

    #[test]
    fn stem_initials() {
        assert_eq!(stem_initial(ThienCan::Dinh), "Đ");
        assert_eq!(stem_initial(ThienCan::At), "Ấ");
        assert_eq!(stem_initial(ThienCan::Quy), "Q");
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig {
            min_year: 2100,
            max_year: 2000,
            ..EngineConfig::default()
        };
        assert!(matches!(
            ChartEngine::new(config),
            Err(ChartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn configured_span_narrows_input() {
        let engine = ChartEngine::new(EngineConfig {
            min_year: 2000,
            ..EngineConfig::default()
        })
        .unwrap();
        assert!(matches!(
            engine.compute(&fixture()),
            Err(ChartError::Calendar(CalendarError::DateOutOfRange {
                year: 1995,
                ..
            }))
        ));
    }

    #[test]
    fn twelve_palaces_twelve_branches() {
        let chart = engine().compute(&fixture()).unwrap();
        assert_eq!(chart.palaces.len(), 12);
        let mut seen = [false; 12];
        for p in &chart.palaces {
            seen[p.branch.index() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn star_orders_are_sequential() {
        let chart = engine().compute(&fixture()).unwrap();
        for p in &chart.palaces {
            for (i, s) in p.stars.iter().enumerate() {
                assert_eq!(s.order as usize, i);
            }
        }
    }

    #[test]
    fn exactly_one_than_cu() {
        let chart = engine().compute(&fixture()).unwrap();
        assert_eq!(chart.palaces.iter().filter(|p| p.is_than_cu).count(), 1);
    }

    #[test]
    fn cycles_snapshot() {
        let engine = engine();
        let chart = engine.compute(&fixture()).unwrap();
        let snap = engine.cycles_at(&chart, 30, 2024);
        assert_eq!(snap.dai_van.start_age, 25);
        assert_eq!(snap.luu_nien, DiaChi::Thin);
    }
}
