/// CLI argument parsing and command handling.
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use toolbelt::color::Color;
use toolbelt::config::Config;
use toolbelt::text::{self, TextReport};
use toolbelt::{dday, password};

#[derive(Parser)]
#[command(
    name = "toolbelt",
    version,
    about = "Toolbelt - color converter, text analyzer, D-Day calculator and password generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a color between HEX, RGB and HSL
    Color {
        /// `#RRGGBB`, `rgb(r, g, b)` or `hsl(h, s%, l%)`
        value: String,
    },
    /// Analyze text from a file or stdin
    Text {
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
        /// Print the text with every whitespace character removed
        #[arg(long, conflicts_with = "trim")]
        strip: bool,
        /// Print the text with each line and the whole text trimmed
        #[arg(long)]
        trim: bool,
    },
    /// Days until (or since) a date
    Dday {
        /// Target date as YYYY-MM-DD
        #[arg(conflicts_with = "preset")]
        target: Option<String>,
        /// Count from this date instead of today
        #[arg(long = "from")]
        from: Option<String>,
        /// A number of days from today, `graduation` or `new-year`
        #[arg(short = 'p', long = "preset")]
        preset: Option<Preset>,
    },
    /// Generate passwords
    Password {
        #[arg(short = 'l', long = "length", value_parser = clap::value_parser!(u16).range(password::MIN_LENGTH as i64..=password::MAX_LENGTH as i64))]
        length: Option<u16>,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_numbers: bool,
        #[arg(long)]
        no_special: bool,
        /// Leave out 0, O, 1, l and I
        #[arg(short = 'a', long)]
        exclude_ambiguous: bool,
        /// Print a batch of passwords without per-class guarantees
        #[arg(short = 'b', long)]
        batch: bool,
        #[arg(short = 'n', long = "count", requires = "batch", value_parser = clap::value_parser!(u16).range(1..=password::MAX_BATCH as i64))]
        count: Option<u16>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    Days(u64),
    Graduation,
    NewYear,
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graduation" => Ok(Preset::Graduation),
            "new-year" => Ok(Preset::NewYear),
            other => other
                .parse::<u64>()
                .map(Preset::Days)
                .map_err(|_| format!("expected a number of days, 'graduation' or 'new-year', got '{other}'")),
        }
    }
}

/// Execute a CLI command (color, text, dday or password).
pub fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Color { value } => handle_color(&value)?,
        Command::Text { file, strip, trim } => handle_text(file, strip, trim)?,
        Command::Dday {
            target,
            from,
            preset,
        } => handle_dday(target, from, preset, config)?,
        Command::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_special,
            exclude_ambiguous,
            batch,
            count,
        } => {
            let mut options = config.password.options();
            if let Some(length) = length {
                options.length = length as usize;
            }
            options.uppercase &= !no_uppercase;
            options.lowercase &= !no_lowercase;
            options.numbers &= !no_numbers;
            options.special &= !no_special;
            options.exclude_ambiguous |= exclude_ambiguous;

            let count = batch.then(|| count.map_or(config.password.batch_size(), usize::from));
            handle_password(options, count)?
        }
    }
    Ok(())
}

fn handle_color(value: &str) -> Result<()> {
    let color = Color::parse(value)?;
    tracing::debug!("Parsed '{}' as {}", value, color);
    for line in color_lines(color) {
        println!("{line}");
    }
    Ok(())
}

fn color_lines(color: Color) -> [String; 3] {
    [
        format!("HEX  {}", color.to_hex()),
        format!("RGB  {}", color.to_rgb()),
        format!("HSL  {}", color.to_hsl()),
    ]
}

fn handle_text(file: Option<PathBuf>, strip: bool, trim: bool) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    if strip {
        print!("{}", text::strip_all_whitespace(&input));
    } else if trim {
        println!("{}", text::trim_each_line_and_outer(&input));
    } else {
        println!("{}", TextReport::analyze(&input));
    }
    Ok(())
}

fn handle_dday(
    target: Option<String>,
    from: Option<String>,
    preset: Option<Preset>,
    config: &Config,
) -> Result<()> {
    let today = match from {
        Some(s) => dday::parse_date(&s)?,
        None => Local::now().date_naive(),
    };
    let target = resolve_target(today, target, preset, config)?;

    let result = dday::calculate(today, target);
    println!("{}", result.label);
    println!("Target     {}", dday::format_date(result.target));
    println!("Today      {}", dday::format_date(result.today));
    println!("Breakdown  {}", dday::format_breakdown(&result.breakdown));
    println!("Days       {}", text::group_thousands(result.days.unsigned_abs() as usize));
    println!("Weeks      {}w {}d", result.weeks, result.remaining_days);
    println!("Hours      {}", text::group_thousands(result.hours as usize));
    Ok(())
}

fn resolve_target(
    today: NaiveDate,
    target: Option<String>,
    preset: Option<Preset>,
    config: &Config,
) -> Result<NaiveDate> {
    if let Some(s) = target {
        return Ok(dday::parse_date(&s)?);
    }
    let date = match preset.unwrap_or(Preset::Days(config.dday.default_offset_days)) {
        Preset::Days(days) => dday::preset_offset(today, days)?,
        Preset::Graduation => dday::next_graduation(today),
        Preset::NewYear => dday::next_new_year(today),
    };
    Ok(date)
}

fn handle_password(options: password::PasswordOptions, batch: Option<usize>) -> Result<()> {
    let mut rng = rand::rng();
    match batch {
        Some(count) => {
            for (index, password) in password::generate_batch(&options, count, &mut rng)?
                .iter()
                .enumerate()
            {
                println!("{}. {password}", index + 1);
            }
        }
        None => {
            let password = password::generate(&options, &mut rng)?;
            let strength =
                password::strength(password.chars().count(), options.class_count());
            println!("{password}");
            tracing::info!("Generated password, strength: {}", strength.label());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_str() {
        assert_eq!("100".parse::<Preset>(), Ok(Preset::Days(100)));
        assert_eq!("graduation".parse::<Preset>(), Ok(Preset::Graduation));
        assert_eq!("new-year".parse::<Preset>(), Ok(Preset::NewYear));
        assert!("soon".parse::<Preset>().is_err());
    }

    #[test]
    fn test_resolve_target_prefers_explicit_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let config = Config::default();
        let target = resolve_target(today, Some("2024-12-25".into()), None, &config).unwrap();
        assert_eq!(target, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn test_resolve_target_defaults_to_configured_offset() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let config = Config::default();
        let target = resolve_target(today, None, None, &config).unwrap();
        assert_eq!(target, NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
    }

    #[test]
    fn test_color_lines() {
        let lines = color_lines(Color::rgb(255, 107, 53));
        assert_eq!(lines[0], "HEX  #FF6B35");
        assert_eq!(lines[1], "RGB  rgb(255, 107, 53)");
        assert_eq!(lines[2], "HSL  hsl(16, 100%, 60%)");
    }

    #[test]
    fn test_cli_parses_password_flags() {
        let cli = Cli::try_parse_from(["toolbelt", "password", "-l", "20", "--no-special", "-b"])
            .unwrap();
        match cli.command {
            Some(Command::Password {
                length,
                no_special,
                batch,
                count,
                ..
            }) => {
                assert_eq!(length, Some(20));
                assert!(no_special);
                assert!(batch);
                assert_eq!(count, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_length() {
        assert!(Cli::try_parse_from(["toolbelt", "password", "-l", "2"]).is_err());
    }

    #[test]
    fn test_cli_rejects_out_of_range_count() {
        let huge = ["toolbelt", "password", "-b", "-n", "18446744073709551615"];
        assert!(Cli::try_parse_from(huge).is_err());
        assert!(Cli::try_parse_from(["toolbelt", "password", "-b", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["toolbelt", "password", "-b", "-n", "100"]).is_ok());
    }
}
