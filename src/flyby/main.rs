use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use flyby::api::{CmdMessage, Flyby, MessageLevel};
use flyby::config::FlybyConfig;
use flyby::error::{FlybyError, Result};
use flyby::model::NearEarthObject;
use flyby::query::QueryParams;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            date,
            start_date,
            end_date,
            number,
            filter,
            return_kind,
            csv,
        } => {
            let params = QueryParams {
                date,
                start_date,
                end_date,
                number,
                return_kind,
                filters: filter,
            };
            handle_query(cli.data, params, csv)
        }
        Commands::Inspect { name } => handle_inspect(cli.data, &name),
        Commands::Stats => handle_stats(cli.data),
        Commands::Config { key, value } => handle_config(key, value),
    }
}

fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("FLYBY_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "flyby", "flyby").expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

fn load_api(data: Option<PathBuf>) -> Result<Flyby> {
    let config = FlybyConfig::load(config_dir())?;
    Flyby::load(data, &config)
}

fn handle_query(data: Option<PathBuf>, params: QueryParams, csv: bool) -> Result<()> {
    let api = load_api(data)?;
    let outcome = api.query(params)?;

    if csv {
        write_csv(&outcome.neos)?;
    } else {
        print_neos(&outcome.neos);
    }
    print_messages(&outcome.messages);
    Ok(())
}

fn handle_inspect(data: Option<PathBuf>, name: &str) -> Result<()> {
    let api = load_api(data)?;
    let outcome = api.inspect(name);

    if let Some(neo) = &outcome.neo {
        print_neo_detail(neo);
    }
    print_messages(&outcome.messages);
    Ok(())
}

fn handle_stats(data: Option<PathBuf>) -> Result<()> {
    let api = load_api(data)?;
    let stats = api.stats();

    println!("objects:     {}", stats.neo_count);
    println!("approaches:  {}", stats.approach_count);
    println!("hazardous:   {}", stats.hazardous_count);
    match stats.date_range {
        Some((first, last)) => println!("date range:  {} to {}", first, last),
        None => println!("date range:  (empty dataset)"),
    }
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir();
    let mut config = FlybyConfig::load(&dir)?;

    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            match &config.data_file {
                Some(path) => println!("data-file = {}", path.display()),
                None => println!("data-file is not set"),
            }
            Ok(())
        }
        (Some("data-file"), Some(v)) => {
            config.data_file = Some(PathBuf::from(&v));
            config.save(&dir)?;
            println!("{}", format!("data-file set to {}", v).green());
            Ok(())
        }
        (Some(other), _) => Err(FlybyError::Unsupported(format!(
            "config key '{}'",
            other
        ))),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const SPAN_WIDTH: usize = 26;
const HAZARD_MARKER: &str = "!";

fn print_neos(neos: &[NearEarthObject]) {
    for (i, neo) in neos.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);

        let marker = if neo.is_hazardous {
            format!("{} ", HAZARD_MARKER)
        } else {
            "  ".to_string()
        };

        let id = neo.id.as_deref().unwrap_or("-");
        let label = format!(
            "{} ({})  {:.3} km  {} approaches",
            neo.name,
            id,
            neo.diameter_min_km,
            neo.approaches.len()
        );

        let span = format_date_span(neo);

        let fixed_width = marker.width() + idx_str.width() + SPAN_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        let marker_colored = if neo.is_hazardous {
            marker.red().bold()
        } else {
            marker.normal()
        };

        println!(
            "{}{}{}{}{}",
            marker_colored,
            idx_str,
            label_display,
            " ".repeat(padding),
            span.dimmed()
        );
    }
}

fn print_neo_detail(neo: &NearEarthObject) {
    let title = if neo.is_hazardous {
        format!("{} {}", HAZARD_MARKER.red().bold(), neo.name.bold())
    } else {
        format!("{}", neo.name.bold())
    };
    println!("{}", title);
    println!("--------------------------------");
    println!("id:           {}", neo.id.as_deref().unwrap_or("-"));
    println!("diameter min: {:.3} km", neo.diameter_min_km);
    println!("hazardous:    {}", neo.is_hazardous);
    println!("approaches:");
    for approach in &neo.approaches {
        println!(
            "  {}  {:>16.1} km",
            approach.date, approach.miss_distance_km
        );
    }
}

fn format_date_span(neo: &NearEarthObject) -> String {
    let dates = neo.approach_dates();
    let span = match (dates.iter().min(), dates.iter().max()) {
        (Some(first), Some(last)) if first != last => format!("{} to {}", first, last),
        (Some(first), _) => first.to_string(),
        _ => String::new(),
    };
    format!("{:>width$}", span, width = SPAN_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// One CSV row per object; approach dates are semicolon-joined in a single
/// cell so the output stays one-row-per-object.
fn write_csv(neos: &[NearEarthObject]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record([
        "name",
        "id",
        "diameter_min_km",
        "is_hazardous",
        "approach_count",
        "approach_dates",
    ])?;
    for neo in neos {
        let dates: Vec<String> = neo
            .approach_dates()
            .iter()
            .map(NaiveDate::to_string)
            .collect();
        let diameter = neo.diameter_min_km.to_string();
        let hazardous = neo.is_hazardous.to_string();
        let count = neo.approaches.len().to_string();
        let joined_dates = dates.join(";");
        writer.write_record([
            neo.name.as_str(),
            neo.id.as_deref().unwrap_or(""),
            diameter.as_str(),
            hazardous.as_str(),
            count.as_str(),
            joined_dates.as_str(),
        ])?;
    }
    writer.flush().map_err(FlybyError::Io)?;
    Ok(())
}
