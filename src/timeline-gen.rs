use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rtimeline::{TimelineRecord, TimelineWriter, TrackKind, YearMonth};
use std::env;

// (title, detail) pairs per track
const EDUCATION_TITLES: &[(&str, &str)] = &[
    ("Industrial Design", "Product development, user-centered design and manufacturing."),
    ("Graphic Design", "Visual communication, typography and branding."),
    ("Web Design", "HTML, CSS, responsive layouts and user experience."),
    ("Data Analytics", "Statistics, spreadsheets and dashboarding."),
    ("Project Management", "Planning, scheduling and stakeholder communication."),
    ("Interaction Design", "Prototyping, usability testing and design systems."),
    ("Supply Chain Management", "Logistics, procurement and inventory planning."),
];

const EDUCATION_ORGS: &[&str] = &[
    "Nanyang Polytechnic",
    "Singapore Polytechnic",
    "Coursera - University of Michigan",
    "Coursera - California Institute of the Arts",
    "National University of Singapore",
];

const EXPERIENCE_TITLES: &[(&str, &str)] = &[
    ("Industrial Designer", "Product design, prototyping and workshop coaching."),
    ("Barista", "Coffee preparation, sales and customer satisfaction."),
    ("Urban Farmer", "Hydroponics, microgreens and landscape farming."),
    ("Supply Chain Intern", "Logistics and inventory management."),
    ("UX Researcher", "User interviews, synthesis and journey mapping."),
    ("Event Coordinator", "Events planning and community engagement."),
    ("Retail Assistant", "Merchandising, stock taking and customer service."),
];

const EXPERIENCE_ORGS: &[&str] = &[
    "One Maker Group",
    "Open Farm Community",
    "Patisserie G Café",
    "Elizabeth Arden, Luxasia",
    "Singapore Armed Forces",
];

struct Config {
    num_education: usize,
    num_experience: usize,
    seed: u64,
    from_year: i32,
    to_year: i32,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_education: 4,
            num_experience: 6,
            seed: 42,
            from_year: 2020,
            to_year: 2025,
            output_file: "timeline.json".to_string(),
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-education" | "-experience" | "-seed" | "-from" | "-to" | "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("{} requires an argument", flag);
                }
                let value = &args[i];
                match flag {
                    "-education" => config.num_education = value.parse()?,
                    "-experience" => config.num_experience = value.parse()?,
                    "-seed" => config.seed = value.parse()?,
                    "-from" => config.from_year = value.parse()?,
                    "-to" => config.to_year = value.parse()?,
                    _ => config.output_file = value.clone(),
                }
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", flag);
            }
        }
        i += 1;
    }

    if config.from_year > config.to_year {
        anyhow::bail!("-from ({}) must not be after -to ({})", config.from_year, config.to_year);
    }

    Ok(config)
}

fn print_help() {
    println!("Timeline Document Generator");
    println!("Usage: timeline-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -education <N>         Number of education records (default: 4)");
    println!("  -experience <N>        Number of experience records (default: 6)");
    println!("  -seed <S>              Random seed (default: 42)");
    println!("  -from <YEAR>           First year records may start in (default: 2020)");
    println!("  -to <YEAR>             Last year records may end in (default: 2025)");
    println!("  -out <FILE>            Output file path (default: timeline.json)");
    println!("                         A .br extension writes Brotli-compressed JSON");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;
    let mut writer = TimelineWriter::new(&config.output_file)?;

    generate_timeline(&mut writer, &config);
    let count = writer.record_count();
    writer.finish()?;

    println!("Timeline with {} records written to: {}", count, config.output_file);

    Ok(())
}

/// Month index (`year * 12 + month0`) to a year-month.
fn from_month_index(index: i32) -> YearMonth {
    YearMonth::new(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn generate_track(
    rng: &mut StdRng,
    kind: TrackKind,
    count: usize,
    config: &Config,
) -> Vec<TimelineRecord> {
    let (titles, orgs, max_months) = match kind {
        TrackKind::Education => (EDUCATION_TITLES, EDUCATION_ORGS, 36),
        TrackKind::Experience => (EXPERIENCE_TITLES, EXPERIENCE_ORGS, 24),
    };

    let first = config.from_year * 12;
    let last = config.to_year * 12 + 11;

    let mut records: Vec<TimelineRecord> = (0..count)
        .map(|_| {
            let start = rng.gen_range(first..=last);
            let end = (start + rng.gen_range(1..=max_months)).min(last);

            let (title, detail) = titles.choose(rng).copied().unwrap_or(("Untitled", ""));
            let org = orgs.choose(rng).copied().unwrap_or("Unknown");

            let mut record = TimelineRecord::new(title, org, from_month_index(start), from_month_index(end))
                .with_detail(detail);
            if kind == TrackKind::Education && rng.gen_bool(0.5) {
                record = record.with_score(format!("{:.2}", rng.gen_range(2.0..4.0)));
            }
            record
        })
        .collect();

    // Chronological, like a CV
    records.sort_by_key(|record| (record.start, record.end));
    records
}

fn generate_timeline(writer: &mut TimelineWriter, config: &Config) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    for (kind, count) in [
        (TrackKind::Education, config.num_education),
        (TrackKind::Experience, config.num_experience),
    ] {
        for record in generate_track(&mut rng, kind, count, config) {
            writer.write_record(kind, record);
        }
        log::debug!("Generated {} {} records", count, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_index_round_trip() {
        assert_eq!(from_month_index(2020 * 12), YearMonth::new(2020, 1));
        assert_eq!(from_month_index(2025 * 12 + 11), YearMonth::new(2025, 12));
    }

    #[test]
    fn test_same_seed_same_records() {
        let config = Config::default();
        let a = generate_track(&mut StdRng::seed_from_u64(7), TrackKind::Experience, 10, &config);
        let b = generate_track(&mut StdRng::seed_from_u64(7), TrackKind::Experience, 10, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_records_stay_in_range_and_sorted() {
        let config = Config { from_year: 2021, to_year: 2022, ..Config::default() };
        let records = generate_track(&mut StdRng::seed_from_u64(1), TrackKind::Education, 50, &config);

        assert_eq!(records.len(), 50);
        for record in &records {
            assert!(record.start >= YearMonth::new(2021, 1));
            assert!(record.end <= YearMonth::new(2022, 12));
            assert!(record.end >= record.start);
        }
        assert!(records.windows(2).all(|w| w[0].start <= w[1].start));
    }
}
