// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use log::info;

use crate::{
    config::{
        consts::{ALL_DEPARTMENTS, ALL_TERMS, DEFAULT_SOURCE, SCRAPE_URL},
        options::{AppOptions, ExportFormat},
    },
    controller::{Controller, Controls, Event, LoadState},
    file,
    logging,
    render::render_select_options,
    scrape,
    source::Source,
};

/// Filter the ZTC course catalog and print the matching courses.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// CSV file or http(s) URL [default: $ZTC_SOURCE, else ztc_live.csv]
    #[arg(short, long)]
    pub source: Option<String>,

    /// Free-text search over course, description and instructor
    #[arg(short = 'q', long, default_value = "")]
    pub search: String,

    /// Exact department to keep
    #[arg(short, long, default_value = "")]
    pub department: String,

    /// Exact term to keep
    #[arg(short, long, default_value = "")]
    pub term: String,

    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the department and term choices instead of courses
    #[arg(long)]
    pub list_options: bool,

    /// -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape a class-search results page into a dataset CSV
    Fetch {
        /// Results page: http(s) URL or a saved HTML file
        #[arg(default_value = SCRAPE_URL)]
        page: String,

        /// Dataset file to write
        #[arg(short, long, default_value = DEFAULT_SOURCE)]
        out: PathBuf,
    },
}

pub fn run(args: Args) -> Result<()> {
    logging::init(logging::level_from_verbosity(args.verbose), None);

    if let Some(Command::Fetch { page, out }) = &args.command {
        return fetch_dataset(page, out);
    }

    let mut opts = AppOptions::default();
    if let Some(s) = &args.source {
        opts.source = Source::parse(s);
    }
    opts.export.format = args.format;

    let controls = Controls {
        search: &args.search,
        department: &args.department,
        term: &args.term,
    };

    let mut ctl = Controller::new(opts.source.clone());
    ctl.handle(Event::Startup, &controls);

    if ctl.state() == LoadState::LoadFailed {
        eprint!("{}", ctl.output().to_text());
        return Err(eyre!("{}", ctl.last_error().unwrap_or("load failed")));
    }

    if args.list_options {
        print!("{}", options_listing(&ctl, args.format));
        return Ok(());
    }

    let rows = ctl.view(&controls).to_owned_rows();
    info!("CLI: {} of {} rows match", rows.len(), ctl.catalog().len());

    match &args.out {
        Some(path) => {
            opts.export.set_path(&path.to_string_lossy());
            let written = file::write_export(&opts.export, &rows)?;
            eprintln!("Wrote {} course(s) to {}", rows.len(), written.display());
        }
        None => {
            let text = match args.format {
                ExportFormat::Html => ctl.output().to_html(),
                ExportFormat::Text => ctl.output().to_text(),
                ExportFormat::Csv => file::rows_to_csv(&rows)?,
            };
            print!("{text}");
        }
    }
    Ok(())
}

fn fetch_dataset(page: &str, out: &Path) -> Result<()> {
    let scraped = scrape::scrape(&Source::parse(page))?;
    file::write_dataset(out, &scraped.rows)?;
    eprintln!(
        "Wrote {} row(s) to {} (from {:?})",
        scraped.rows.len(),
        out.display(),
        scraped.strategy
    );
    Ok(())
}

fn options_listing(ctl: &Controller, format: ExportFormat) -> String {
    let opts = ctl.filter_options();
    match format {
        ExportFormat::Html => format!(
            "{}\n{}\n",
            render_select_options(ALL_DEPARTMENTS, &opts.departments),
            render_select_options(ALL_TERMS, &opts.terms)
        ),
        ExportFormat::Text | ExportFormat::Csv => {
            let mut out = String::from("Departments:\n");
            for d in &opts.departments { out.push_str(&format!("  {d}\n")); }
            out.push_str("Terms:\n");
            for t in &opts.terms { out.push_str(&format!("  {t}\n")); }
            out
        }
    }
}
