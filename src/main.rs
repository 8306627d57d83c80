use clap::Parser;
use clickstyler::{
    ClickStyler, Page, SeededUnit, StylerConfig, ThreadUnit, UnitSource, DEFAULT_FILL_COLOR,
    DEFAULT_TARGET_ID,
};
use serde::Serialize;
use std::path::PathBuf;

const DEMO_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Click styling demo</title></head>
  <body>
    <h1>Press the button</h1>
    <button id="btn-essai" style="background-color: gray">Essai</button>
  </body>
</html>"#;

#[derive(Parser, Debug)]
#[command(
    name = "clickstyler",
    version,
    about = "Load a page, bind the click styler, dispatch clicks"
)]
struct Cli {
    /// HTML file to load; uses the built-in demo page when omitted
    #[arg(long)]
    page: Option<PathBuf>,

    /// Id of the element to bind
    #[arg(long, default_value = DEFAULT_TARGET_ID)]
    target: String,

    /// Background color applied on each click
    #[arg(long, default_value = DEFAULT_FILL_COLOR)]
    color: String,

    /// Number of clicks to dispatch
    #[arg(long, default_value_t = 3)]
    clicks: u32,

    /// Seed for reproducible radius draws
    #[arg(long)]
    seed: Option<u64>,

    /// Emit one JSON record per click instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ClickRecord<'a> {
    click: u32,
    target: &'a str,
    border_radius: Option<&'a str>,
    background_color: Option<&'a str>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let mut page = match &cli.page {
        Some(path) => Page::load_file(path)?,
        None => Page::load_html(DEMO_PAGE)?,
    };

    let config = StylerConfig {
        target_id: cli.target.clone(),
        fill_color: cli.color.clone(),
    };
    let unit: Box<dyn UnitSource> = match cli.seed {
        Some(seed) => Box::new(SeededUnit::new(seed)),
        None => Box::new(ThreadUnit),
    };

    let binding = ClickStyler::with_unit_source(config, unit).initialize(&mut page);
    if !binding.is_bound() {
        log::warn!(
            "no element with id {:?}; clicks will be ignored",
            cli.target
        );
    }

    if !cli.json {
        println!(
            "loaded {:?}, {} handler(s) on #{}",
            page.title(),
            page.handler_count(&cli.target),
            cli.target
        );
    }

    for i in 1..=cli.clicks {
        page.click(&cli.target);
        let styled = page.element_by_id(&cli.target);
        let record = ClickRecord {
            click: i,
            target: &cli.target,
            border_radius: styled.and_then(|el| el.border_radius.as_deref()),
            background_color: styled.and_then(|el| el.background_color.as_deref()),
        };
        if cli.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!(
                "click {}: #{} border-radius={} background-color={}",
                record.click,
                record.target,
                record.border_radius.unwrap_or("-"),
                record.background_color.unwrap_or("-")
            );
        }
    }

    Ok(())
}
