//! Star identities and their static metadata.
//!
//! 70 stars in four kinds: 14 main stars (chính tinh), 18 auxiliary stars
//! (phụ tinh, the four transformations included), 26 minor stars (bàng tinh)
//! and the 12 life-cycle stages. Declaration order is the star identity
//! used to break ties when ordering stars inside a palace.

use serde::{Serialize, Serializer};
use tuvi_calendar::NguHanh;

/// Star category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StarKind {
    Main,
    Auxiliary,
    Minor,
    LifeCycle,
}

impl StarKind {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "Chính tinh",
            Self::Auxiliary => "Phụ tinh",
            Self::Minor => "Bàng tinh",
            Self::LifeCycle => "Trường Sinh",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Main => "Main Star",
            Self::Auxiliary => "Auxiliary Star",
            Self::Minor => "Minor Star",
            Self::LifeCycle => "Life Cycle Star",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Auxiliary => "AUXILIARY",
            Self::Minor => "MINOR",
            Self::LifeCycle => "LIFE_CYCLE",
        }
    }

    /// Ordering priority inside a palace (main first).
    pub const fn priority(self) -> u8 {
        match self {
            Self::Main => 0,
            Self::Auxiliary => 1,
            Self::Minor => 2,
            Self::LifeCycle => 3,
        }
    }
}

impl Serialize for StarKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Every star the engine places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Star {
    // Main stars
    TuVi,
    LiemTrinh,
    ThienDong,
    VuKhuc,
    ThaiDuong,
    ThienCo,
    ThienPhu,
    ThaiAm,
    ThamLang,
    CuMon,
    ThienTuong,
    ThienLuong,
    ThatSat,
    PhaQuan,

    // Auxiliary stars
    LocTon,
    KinhDuong,
    DaLa,
    VanXuong,
    VanKhuc,
    TaPhu,
    HuuBat,
    ThienKhoi,
    ThienViet,
    HoaTinh,
    LinhTinh,
    DiaKhong,
    DiaKiep,
    ThienKhong,
    HoaLoc,
    HoaQuyen,
    HoaKhoa,
    HoaKy,

    // Minor stars
    ThaiTue,
    ThieuDuong,
    TangMon,
    ThieuAm,
    QuanPhu,
    TuPhu,
    TuePha,
    LongDuc,
    BachHo,
    PhucDuc,
    DieuKhach,
    TrucPhu,
    ThienMa,
    DaoHoa,
    HongLoan,
    ThienHy,
    ThienHinh,
    ThienRieu,
    LongTri,
    PhuongCac,
    TamThai,
    BatToa,
    ThienKhoc,
    ThienHu,
    CoThan,
    QuaTu,

    // Life-cycle stages
    TruongSinh,
    MocDuc,
    QuanDoi,
    LamQuan,
    DeVuong,
    Suy,
    Benh,
    Tu,
    Mo,
    Tuyet,
    Thai,
    Duong,
}

/// All 70 stars in identity order.
pub const ALL_STARS: [Star; 70] = [
    Star::TuVi,
    Star::LiemTrinh,
    Star::ThienDong,
    Star::VuKhuc,
    Star::ThaiDuong,
    Star::ThienCo,
    Star::ThienPhu,
    Star::ThaiAm,
    Star::ThamLang,
    Star::CuMon,
    Star::ThienTuong,
    Star::ThienLuong,
    Star::ThatSat,
    Star::PhaQuan,
    Star::LocTon,
    Star::KinhDuong,
    Star::DaLa,
    Star::VanXuong,
    Star::VanKhuc,
    Star::TaPhu,
    Star::HuuBat,
    Star::ThienKhoi,
    Star::ThienViet,
    Star::HoaTinh,
    Star::LinhTinh,
    Star::DiaKhong,
    Star::DiaKiep,
    Star::ThienKhong,
    Star::HoaLoc,
    Star::HoaQuyen,
    Star::HoaKhoa,
    Star::HoaKy,
    Star::ThaiTue,
    Star::ThieuDuong,
    Star::TangMon,
    Star::ThieuAm,
    Star::QuanPhu,
    Star::TuPhu,
    Star::TuePha,
    Star::LongDuc,
    Star::BachHo,
    Star::PhucDuc,
    Star::DieuKhach,
    Star::TrucPhu,
    Star::ThienMa,
    Star::DaoHoa,
    Star::HongLoan,
    Star::ThienHy,
    Star::ThienHinh,
    Star::ThienRieu,
    Star::LongTri,
    Star::PhuongCac,
    Star::TamThai,
    Star::BatToa,
    Star::ThienKhoc,
    Star::ThienHu,
    Star::CoThan,
    Star::QuaTu,
    Star::TruongSinh,
    Star::MocDuc,
    Star::QuanDoi,
    Star::LamQuan,
    Star::DeVuong,
    Star::Suy,
    Star::Benh,
    Star::Tu,
    Star::Mo,
    Star::Tuyet,
    Star::Thai,
    Star::Duong,
];

/// The 14 main stars.
pub const MAIN_STARS: [Star; 14] = [
    Star::TuVi,
    Star::LiemTrinh,
    Star::ThienDong,
    Star::VuKhuc,
    Star::ThaiDuong,
    Star::ThienCo,
    Star::ThienPhu,
    Star::ThaiAm,
    Star::ThamLang,
    Star::CuMon,
    Star::ThienTuong,
    Star::ThienLuong,
    Star::ThatSat,
    Star::PhaQuan,
];

impl Star {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TuVi => "Tử Vi",
            Self::LiemTrinh => "Liêm Trinh",
            Self::ThienDong => "Thiên Đồng",
            Self::VuKhuc => "Vũ Khúc",
            Self::ThaiDuong => "Thái Dương",
            Self::ThienCo => "Thiên Cơ",
            Self::ThienPhu => "Thiên Phủ",
            Self::ThaiAm => "Thái Âm",
            Self::ThamLang => "Tham Lang",
            Self::CuMon => "Cự Môn",
            Self::ThienTuong => "Thiên Tướng",
            Self::ThienLuong => "Thiên Lương",
            Self::ThatSat => "Thất Sát",
            Self::PhaQuan => "Phá Quân",
            Self::LocTon => "Lộc Tồn",
            Self::KinhDuong => "Kình Dương",
            Self::DaLa => "Đà La",
            Self::VanXuong => "Văn Xương",
            Self::VanKhuc => "Văn Khúc",
            Self::TaPhu => "Tả Phù",
            Self::HuuBat => "Hữu Bật",
            Self::ThienKhoi => "Thiên Khôi",
            Self::ThienViet => "Thiên Việt",
            Self::HoaTinh => "Hỏa Tinh",
            Self::LinhTinh => "Linh Tinh",
            Self::DiaKhong => "Địa Không",
            Self::DiaKiep => "Địa Kiếp",
            Self::ThienKhong => "Thiên Không",
            Self::HoaLoc => "Hóa Lộc",
            Self::HoaQuyen => "Hóa Quyền",
            Self::HoaKhoa => "Hóa Khoa",
            Self::HoaKy => "Hóa Kỵ",
            Self::ThaiTue => "Thái Tuế",
            Self::ThieuDuong => "Thiếu Dương",
            Self::TangMon => "Tang Môn",
            Self::ThieuAm => "Thiếu Âm",
            Self::QuanPhu => "Quan Phù",
            Self::TuPhu => "Tử Phù",
            Self::TuePha => "Tuế Phá",
            Self::LongDuc => "Long Đức",
            Self::BachHo => "Bạch Hổ",
            Self::PhucDuc => "Phúc Đức",
            Self::DieuKhach => "Điếu Khách",
            Self::TrucPhu => "Trực Phù",
            Self::ThienMa => "Thiên Mã",
            Self::DaoHoa => "Đào Hoa",
            Self::HongLoan => "Hồng Loan",
            Self::ThienHy => "Thiên Hỷ",
            Self::ThienHinh => "Thiên Hình",
            Self::ThienRieu => "Thiên Riêu",
            Self::LongTri => "Long Trì",
            Self::PhuongCac => "Phượng Các",
            Self::TamThai => "Tam Thai",
            Self::BatToa => "Bát Tọa",
            Self::ThienKhoc => "Thiên Khốc",
            Self::ThienHu => "Thiên Hư",
            Self::CoThan => "Cô Thần",
            Self::QuaTu => "Quả Tú",
            Self::TruongSinh => "Trường Sinh",
            Self::MocDuc => "Mộc Dục",
            Self::QuanDoi => "Quán Đới",
            Self::LamQuan => "Lâm Quan",
            Self::DeVuong => "Đế Vượng",
            Self::Suy => "Suy",
            Self::Benh => "Bệnh",
            Self::Tu => "Tử",
            Self::Mo => "Mộ",
            Self::Tuyet => "Tuyệt",
            Self::Thai => "Thai",
            Self::Duong => "Dưỡng",
        }
    }

    /// ASCII code used in canonical records, e.g. "TU_VI".
    pub const fn code(self) -> &'static str {
        match self {
            Self::TuVi => "TU_VI",
            Self::LiemTrinh => "LIEM_TRINH",
            Self::ThienDong => "THIEN_DONG",
            Self::VuKhuc => "VU_KHUC",
            Self::ThaiDuong => "THAI_DUONG",
            Self::ThienCo => "THIEN_CO",
            Self::ThienPhu => "THIEN_PHU",
            Self::ThaiAm => "THAI_AM",
            Self::ThamLang => "THAM_LANG",
            Self::CuMon => "CU_MON",
            Self::ThienTuong => "THIEN_TUONG",
            Self::ThienLuong => "THIEN_LUONG",
            Self::ThatSat => "THAT_SAT",
            Self::PhaQuan => "PHA_QUAN",
            Self::LocTon => "LOC_TON",
            Self::KinhDuong => "KINH_DUONG",
            Self::DaLa => "DA_LA",
            Self::VanXuong => "VAN_XUONG",
            Self::VanKhuc => "VAN_KHUC",
            Self::TaPhu => "TA_PHU",
            Self::HuuBat => "HUU_BAT",
            Self::ThienKhoi => "THIEN_KHOI",
            Self::ThienViet => "THIEN_VIET",
            Self::HoaTinh => "HOA_TINH",
            Self::LinhTinh => "LINH_TINH",
            Self::DiaKhong => "DIA_KHONG",
            Self::DiaKiep => "DIA_KIEP",
            Self::ThienKhong => "THIEN_KHONG",
            Self::HoaLoc => "HOA_LOC",
            Self::HoaQuyen => "HOA_QUYEN",
            Self::HoaKhoa => "HOA_KHOA",
            Self::HoaKy => "HOA_KY",
            Self::ThaiTue => "THAI_TUE",
            Self::ThieuDuong => "THIEU_DUONG",
            Self::TangMon => "TANG_MON",
            Self::ThieuAm => "THIEU_AM",
            Self::QuanPhu => "QUAN_PHU",
            Self::TuPhu => "TU_PHU",
            Self::TuePha => "TUE_PHA",
            Self::LongDuc => "LONG_DUC",
            Self::BachHo => "BACH_HO",
            Self::PhucDuc => "PHUC_DUC",
            Self::DieuKhach => "DIEU_KHACH",
            Self::TrucPhu => "TRUC_PHU",
            Self::ThienMa => "THIEN_MA",
            Self::DaoHoa => "DAO_HOA",
            Self::HongLoan => "HONG_LOAN",
            Self::ThienHy => "THIEN_HY",
            Self::ThienHinh => "THIEN_HINH",
            Self::ThienRieu => "THIEN_RIEU",
            Self::LongTri => "LONG_TRI",
            Self::PhuongCac => "PHUONG_CAC",
            Self::TamThai => "TAM_THAI",
            Self::BatToa => "BAT_TOA",
            Self::ThienKhoc => "THIEN_KHOC",
            Self::ThienHu => "THIEN_HU",
            Self::CoThan => "CO_THAN",
            Self::QuaTu => "QUA_TU",
            Self::TruongSinh => "TRUONG_SINH",
            Self::MocDuc => "MOC_DUC",
            Self::QuanDoi => "QUAN_DOI",
            Self::LamQuan => "LAM_QUAN",
            Self::DeVuong => "DE_VUONG",
            Self::Suy => "SUY",
            Self::Benh => "BENH",
            Self::Tu => "TU",
            Self::Mo => "MO",
            Self::Tuyet => "TUYET",
            Self::Thai => "THAI",
            Self::Duong => "DUONG",
        }
    }

    /// Identity index (0..70), declaration order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn kind(self) -> StarKind {
        match self.index() {
            0..=13 => StarKind::Main,
            14..=31 => StarKind::Auxiliary,
            32..=57 => StarKind::Minor,
            _ => StarKind::LifeCycle,
        }
    }

    pub const fn element(self) -> NguHanh {
        match self {
            Self::VuKhuc
            | Self::ThatSat
            | Self::KinhDuong
            | Self::DaLa
            | Self::VanXuong
            | Self::BachHo
            | Self::DeVuong
            | Self::Suy => NguHanh::Kim,
            Self::ThienCo
            | Self::ThienLuong
            | Self::HoaLoc
            | Self::HoaQuyen
            | Self::TangMon
            | Self::TrucPhu
            | Self::DaoHoa
            | Self::TamThai
            | Self::TruongSinh
            | Self::QuanDoi
            | Self::LamQuan
            | Self::Duong => NguHanh::Moc,
            Self::ThienDong
            | Self::ThaiAm
            | Self::ThamLang
            | Self::CuMon
            | Self::ThienTuong
            | Self::PhaQuan
            | Self::VanKhuc
            | Self::HuuBat
            | Self::HoaKhoa
            | Self::HoaKy
            | Self::ThieuAm
            | Self::TuPhu
            | Self::LongDuc
            | Self::HongLoan
            | Self::ThienHy
            | Self::ThienRieu
            | Self::LongTri
            | Self::ThienKhoc
            | Self::ThienHu
            | Self::MocDuc
            | Self::Tu
            | Self::Tuyet
            | Self::Thai => NguHanh::Thuy,
            Self::LiemTrinh
            | Self::ThaiDuong
            | Self::ThienKhoi
            | Self::ThienViet
            | Self::HoaTinh
            | Self::LinhTinh
            | Self::DiaKhong
            | Self::DiaKiep
            | Self::ThienKhong
            | Self::ThaiTue
            | Self::ThieuDuong
            | Self::QuanPhu
            | Self::TuePha
            | Self::DieuKhach
            | Self::ThienMa
            | Self::ThienHinh
            | Self::Benh => NguHanh::Hoa,
            Self::TuVi
            | Self::ThienPhu
            | Self::LocTon
            | Self::TaPhu
            | Self::PhucDuc
            | Self::PhuongCac
            | Self::BatToa
            | Self::CoThan
            | Self::QuaTu
            | Self::Mo => NguHanh::Tho,
        }
    }

    /// Whether the star is traditionally auspicious.
    pub const fn is_positive(self) -> bool {
        !matches!(
            self,
            Self::ThatSat
                | Self::PhaQuan
                | Self::KinhDuong
                | Self::DaLa
                | Self::HoaTinh
                | Self::LinhTinh
                | Self::DiaKhong
                | Self::DiaKiep
                | Self::ThienKhong
                | Self::HoaKy
                | Self::ThaiTue
                | Self::TangMon
                | Self::QuanPhu
                | Self::TuPhu
                | Self::TuePha
                | Self::BachHo
                | Self::DieuKhach
                | Self::TrucPhu
                | Self::ThienHinh
                | Self::ThienRieu
                | Self::ThienKhoc
                | Self::ThienHu
                | Self::CoThan
                | Self::QuaTu
                | Self::MocDuc
                | Self::Suy
                | Self::Benh
                | Self::Tu
                | Self::Mo
                | Self::Tuyet
        )
    }

    /// All 70 stars in identity order.
    pub const fn all() -> &'static [Star; 70] {
        &ALL_STARS
    }
}

impl Serialize for Star {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
