use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tuvi_base::Gender;
use tuvi_calendar::{SolarDate, day_can_chi, month_can_chi, year_can_chi};
use tuvi_chart::{ChartEngine, ChartInput, EngineConfig, NatalChart};

#[derive(Parser)]
#[command(name = "tuvi", about = "Tu Vi natal chart CLI")]
struct Cli {
    /// TOML engine configuration (time zone, year span)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD), solar unless --lunar is given
    #[arg(long)]
    date: String,
    /// Birth hour (0-23)
    #[arg(long)]
    hour: u32,
    /// Birth minute (0-59)
    #[arg(long, default_value = "0")]
    minute: u32,
    /// male or female
    #[arg(long)]
    gender: String,
    /// Interpret --date as a lunar date
    #[arg(long)]
    lunar: bool,
    /// The lunar month is the leap month (requires --lunar)
    #[arg(long)]
    leap: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a natal chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print the full chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print only the canonical chart hash
    Hash {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Solar date to lunar date
    Lunar {
        /// Solar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Lunar date to solar date
    Solar {
        #[arg(long)]
        day: u32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
        /// The month is the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Leap month of a lunar year
    LeapMonth {
        #[arg(long)]
        year: i32,
    },
    /// Active cycles (Đại Vận, Tiểu Vận, Lưu Niên) at an age
    Cycles {
        #[command(flatten)]
        birth: BirthArgs,
        /// Nominal age (tuổi âm, 1 in the birth year)
        #[arg(long)]
        age: u32,
        /// Calendar year; defaults to birth lunar year + age - 1
        #[arg(long)]
        year: Option<i32>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn load_config(path: Option<&Path>) -> EngineConfig {
    let Some(path) = path else {
        return EngineConfig::default();
    };
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Failed to read {}: {e}", path.display())));
    EngineConfig::from_toml_str(&text)
        .unwrap_or_else(|e| fail(format!("Invalid config {}: {e}", path.display())))
}

fn load_engine(path: Option<&Path>) -> ChartEngine {
    ChartEngine::new(load_config(path))
        .unwrap_or_else(|e| fail(format!("Failed to create engine: {e}")))
}

/// Split "YYYY-MM-DD" without calendar validation; lunar dates need their
/// own month lengths.
fn parse_ymd(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("Expected YYYY-MM-DD, got {s:?}"));
    }
    let year = parts[0]
        .parse()
        .map_err(|_| format!("Invalid year in {s:?}"))?;
    let month = parts[1]
        .parse()
        .map_err(|_| format!("Invalid month in {s:?}"))?;
    let day = parts[2]
        .parse()
        .map_err(|_| format!("Invalid day in {s:?}"))?;
    Ok((year, month, day))
}

fn parse_gender(s: &str) -> Gender {
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid gender: {s}");
        eprintln!("Valid: male, female");
        std::process::exit(1);
    })
}

fn chart_input(birth: &BirthArgs) -> ChartInput {
    let (year, month, day) = parse_ymd(&birth.date).unwrap_or_else(|e| fail(e));
    let gender = parse_gender(&birth.gender);
    if birth.lunar {
        ChartInput::lunar(
            year,
            month,
            day,
            birth.leap,
            birth.hour,
            birth.minute,
            gender,
        )
    } else {
        if birth.leap {
            fail("--leap requires --lunar");
        }
        let date = SolarDate::new(year, month, day).unwrap_or_else(|e| fail(e));
        ChartInput::solar(date, birth.hour, birth.minute, gender)
    }
}

fn compute(engine: &ChartEngine, birth: &BirthArgs) -> NatalChart {
    let input = chart_input(birth);
    debug!(?input, "computing chart");
    engine
        .compute(&input)
        .unwrap_or_else(|e| fail(format!("Chart failed: {e}")))
}

fn print_chart(chart: &NatalChart) {
    let b = &chart.birth;
    let c = &chart.center;
    println!("Solar:      {}  {:02}:{:02}", b.solar, b.hour, b.minute);
    println!("Lunar:      {}", b.lunar);
    println!(
        "Can Chi:    year {}, month {}, day {}, hour {}",
        b.year_can_chi, b.month_can_chi, b.day_can_chi, b.hour_can_chi
    );
    println!("Âm dương:   {}", c.am_duong);
    println!(
        "Bản mệnh:   {} ({})",
        c.ban_menh.name(),
        c.ban_menh_element.name()
    );
    println!(
        "Cục:        {} ({})",
        chart.cuc.name(),
        c.menh_cuc_relation.name()
    );
    println!(
        "Chủ mệnh:   {}{}",
        c.chu_menh.map_or("-", |s| s.name()),
        if c.menh_without_main_star {
            " (vô chính diệu)"
        } else {
            ""
        }
    );
    println!("Chủ thân:   {}", c.chu_than.map_or("-", |s| s.name()));
    println!("Thân cư:    {}", c.than_cu.name());
    println!(
        "Tuần:       {} {}   Triệt: {} {}",
        chart.markers.tuan[0].name(),
        chart.markers.tuan[1].name(),
        chart.markers.triet[0].name(),
        chart.markers.triet[1].name()
    );
    println!();

    for p in &chart.palaces {
        let mut flags = String::new();
        if p.is_than_cu {
            flags.push_str(" [Thân]");
        }
        if p.in_tuan {
            flags.push_str(" [Tuần]");
        }
        if p.in_triet {
            flags.push_str(" [Triệt]");
        }
        println!(
            "{:<10} {:<8} ĐV {:>3}  {}{}",
            p.cung.name(),
            p.label,
            p.dai_van_label,
            p.life_stage.name(),
            flags
        );
        let stars: Vec<String> = p
            .stars
            .iter()
            .filter(|s| s.star != p.life_stage)
            .map(|s| format!("{} ({})", s.name, s.brightness.symbol()))
            .collect();
        println!("           {}", stars.join(", "));
    }
    println!();
    println!("Hash: {}", chart.canonical_hash);
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Chart { birth, json } => {
            let engine = load_engine(config);
            let chart = compute(&engine, &birth);
            if json {
                let text = chart
                    .to_json()
                    .unwrap_or_else(|e| fail(format!("JSON failed: {e}")));
                println!("{text}");
            } else {
                print_chart(&chart);
            }
        }

        Commands::Hash { birth } => {
            let engine = load_engine(config);
            println!("{}", compute(&engine, &birth).canonical_hash);
        }

        Commands::Lunar { date } => {
            let engine = load_engine(config);
            let solar: SolarDate = date.parse().unwrap_or_else(|e| fail(e));
            let lunar = engine
                .to_lunar(solar)
                .unwrap_or_else(|e| fail(format!("Conversion failed: {e}")));
            let year = year_can_chi(lunar.year());
            let month = month_can_chi(lunar.year(), lunar.month());
            let day = day_can_chi(solar.day(), solar.month(), solar.year());
            println!("{lunar}");
            println!("Năm {year}, tháng {month}, ngày {day}");
        }

        Commands::Solar {
            day,
            month,
            year,
            leap,
        } => {
            let engine = load_engine(config);
            let solar = engine
                .to_solar(day, month, year, leap)
                .unwrap_or_else(|e| fail(format!("Conversion failed: {e}")));
            println!("{solar}");
        }

        Commands::LeapMonth { year } => {
            let engine = load_engine(config);
            match engine.leap_month(year) {
                Ok(Some(m)) => println!("{year}: leap month {m}"),
                Ok(None) => println!("{year}: no leap month"),
                Err(e) => fail(e),
            }
        }

        Commands::Cycles { birth, age, year } => {
            if age == 0 {
                fail("--age must be at least 1");
            }
            let engine = load_engine(config);
            let chart = compute(&engine, &birth);
            let year = year.unwrap_or(chart.birth.lunar.year() + age as i32 - 1);
            let snap = engine.cycles_at(&chart, age, year);
            println!(
                "Đại vận:    {} ({}), ages {}-{}",
                snap.dai_van.cung.name(),
                snap.dai_van.branch.name(),
                snap.dai_van.start_age,
                snap.dai_van.end_age
            );
            println!("Tiểu vận:   {}", snap.tieu_van.name());
            println!("Lưu niên:   {} ({year})", snap.luu_nien.name());
        }
    }
}
