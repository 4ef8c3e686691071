//! Can-Chi designations for known dates and hours.

use tuvi_calendar::{
    ALL_DIA_CHI, CanChi, DiaChi, NguHanh, ThienCan, VIETNAM_TZ_OFFSET_HOURS, day_can_chi,
    hour_branch, hour_can_chi, month_can_chi, solar_to_lunar, year_can_chi,
};

#[test]
fn full_designation_1995_03_02_0830() {
    let l = solar_to_lunar(2, 3, 1995, VIETNAM_TZ_OFFSET_HOURS).unwrap();
    let year = year_can_chi(l.year());
    let month = month_can_chi(l.year(), l.month());
    let day = day_can_chi(2, 3, 1995);
    let hour = hour_can_chi(day.can, hour_branch(8));

    assert_eq!(year.to_string(), "Ất Hợi");
    assert_eq!(month.to_string(), "Kỷ Mão");
    assert_eq!(day.to_string(), "Nhâm Thìn");
    assert_eq!(hour.to_string(), "Giáp Thìn");
    assert_eq!(hour.chi.index(), 4);
}

#[test]
fn consecutive_days_advance_one_step() {
    let a = day_can_chi(31, 12, 2024);
    let b = day_can_chi(1, 1, 2025);
    assert_eq!(
        (a.sexagenary_index() + 1) % 60,
        b.sexagenary_index()
    );
}

#[test]
fn day_cycle_repeats_every_sixty_days() {
    let a = day_can_chi(1, 1, 2000);
    let b = day_can_chi(1, 3, 2000); // 60 days later (leap year)
    assert_eq!(a, b);
}

#[test]
fn year_cycle_repeats_every_sixty_years() {
    for y in 1900..1960 {
        assert_eq!(year_can_chi(y), year_can_chi(y + 60));
    }
}

#[test]
fn hour_stem_covers_all_day_stems() {
    // Giáp and Kỷ days both open the Tý hour with Giáp
    for day in [ThienCan::Giap, ThienCan::Ky] {
        assert_eq!(hour_can_chi(day, DiaChi::Ty).can, ThienCan::Giap);
    }
    for day in [ThienCan::At, ThienCan::Canh] {
        assert_eq!(hour_can_chi(day, DiaChi::Ty).can, ThienCan::Binh);
    }
}

#[test]
fn hour_pairs_have_matching_parity() {
    for stem in ThienCan::all() {
        for branch in ALL_DIA_CHI {
            let cc = hour_can_chi(*stem, branch);
            assert_eq!(cc.can.index() % 2, cc.chi.index() % 2);
            assert_eq!(CanChi::from_sexagenary(cc.sexagenary_index() as i64), cc);
        }
    }
}

#[test]
fn stem_elements_follow_pairs() {
    let expected = [
        NguHanh::Moc,
        NguHanh::Moc,
        NguHanh::Hoa,
        NguHanh::Hoa,
        NguHanh::Tho,
        NguHanh::Tho,
        NguHanh::Kim,
        NguHanh::Kim,
        NguHanh::Thuy,
        NguHanh::Thuy,
    ];
    for (stem, e) in ThienCan::all().iter().zip(expected) {
        assert_eq!(stem.element(), e, "{}", stem.name());
    }
}
