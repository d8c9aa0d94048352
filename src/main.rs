// Date Range Picker
// Command-line driver: replays taps and prints the resulting grid

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use date_range_picker::models::grid::ITEMS_PER_ROW;
use date_range_picker::services::settings::SettingsService;
use date_range_picker::{CellClassification, DateRangePicker, GridAddress, GridDataSource, PickerEvent};

const USAGE: &str = "Usage: date-range-picker [--config <file>] [YYYY-MM-DD ...]";

struct Args {
    config: Option<PathBuf>,
    taps: Vec<NaiveDate>,
}

fn parse_args() -> Result<Args> {
    let mut config = None;
    let mut taps = Vec::new();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let Some(path) = args.next() else {
                    bail!("--config needs a file path\n{}", USAGE);
                };
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => {
                let day = NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
                    .with_context(|| format!("Invalid date '{}'\n{}", arg, USAGE))?;
                taps.push(day);
            }
        }
    }

    Ok(Args { config, taps })
}

/// Cell suffix marking the classification in plain text.
fn marker(classification: CellClassification) -> char {
    match classification {
        CellClassification::RangeStart { .. }
        | CellClassification::RangeEnd
        | CellClassification::RangeStartAndEnd => '*',
        CellClassification::InRange(_) => '~',
        CellClassification::Disabled => 'x',
        CellClassification::OutOfBound => '.',
        CellClassification::WeekdayHeader | CellClassification::Blank | CellClassification::Plain => ' ',
    }
}

fn render_section(picker: &impl GridDataSource, section: usize) -> String {
    let mut out = format!("{}\n", picker.section_title(section));
    for item in 0..picker.item_count(section) {
        let cell = picker.cell_data(GridAddress::new(section, item));
        out.push_str(&format!("{:>3}{}", cell.label, marker(cell.classification)));
        if (item + 1) % ITEMS_PER_ROW == 0 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args()?;
    let settings = match args.config {
        Some(path) => SettingsService::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => {
            let path = SettingsService::default_config_path()?;
            SettingsService::load_or_default(&path)?
        }
    };

    log::info!("Starting date range picker");

    let mut picker = DateRangePicker::new(&settings);
    picker.subscribe(|event| match event {
        PickerEvent::StartSelected(day) => println!("start selected: {}", day),
        PickerEvent::EndSelected(day) => println!("end selected: {}", day),
        PickerEvent::ScrollToAddress(address) => {
            println!("scroll to section {} item {}", address.section, address.item)
        }
        PickerEvent::Refresh => log::debug!("refresh"),
        PickerEvent::Confirmed { start, end } => println!("confirmed: {:?} to {:?}", start, end),
        PickerEvent::Cancelled { start, end } => println!("cancelled: {:?} to {:?}", start, end),
    });

    println!("{}", picker.style().title_text);
    for day in args.taps {
        if picker.tap_date(day).is_empty() {
            println!("tap on {} ignored", day);
        }
    }

    let mapper = picker.machine().mapper();
    let first = picker
        .start_date()
        .and_then(|day| mapper.section_of(day))
        .unwrap_or(0);
    let last = picker
        .end_date()
        .and_then(|day| mapper.section_of(day))
        .unwrap_or(first);
    for section in first..=last {
        println!();
        print!("{}", render_section(&picker, section));
    }
    println!();

    picker.confirm();
    Ok(())
}
