#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # parcial
//!
//! A terminal helper for the classic two-cuts-down, one-to-go question:
//! given the grades of the first two cuts (33% each), what does the final
//! cut (34%) need to be to reach the passing average of 3.0?
//!
//! Also ships a purely decorative `ambient` mode that floats a swarm of
//! math glyphs across the terminal while you contemplate your options.

use std::{thread, time::Duration};

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use parcial::{
    ambient::{SymbolField, glyph_census, render_frame},
    calc::{GradeCalculator, ValidationOutcome, format_grade, required_grade, validate},
    config,
    constants::{CUT_WEIGHT, FINAL_CUT_WEIGHT, PASSING_AVERAGE},
    document::{Document, FieldSlot},
    guard::InputGuard,
    info::InfoReport,
    session,
};
use rand::thread_rng;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Compute the required final-cut grade from two cut grades.
    Calc(String, String),
    /// Run the interactive session.
    Session,
    /// Play back the decorative symbol field.
    Ambient(Option<f64>, Option<u32>),
    /// Print a JSON description of the tool's fixed contract.
    Info,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the first cut grade text
    fn c1() -> impl Parser<String> {
        positional("CUT1").help("Grade received on the first cut")
    }

    /// parses the second cut grade text
    fn c2() -> impl Parser<String> {
        positional("CUT2").help("Grade received on the second cut")
    }

    /// parses the playback length override
    fn seconds() -> impl Parser<Option<f64>> {
        long("seconds")
            .help("How many seconds of the symbol field to play back")
            .argument::<f64>("SECONDS")
            .optional()
    }

    /// parses the playback frame rate override
    fn fps() -> impl Parser<Option<u32>> {
        long("fps").help("Frames rendered per second").argument::<u32>("FPS").optional()
    }

    let calc = construct!(Cmd::Calc(c1(), c2()))
        .to_options()
        .command("calc")
        .help("Compute the grade needed on the final cut");

    let session = pure(Cmd::Session)
        .to_options()
        .command("session")
        .help("Type grades interactively, one edit at a time");

    let ambient = construct!(Cmd::Ambient(seconds(), fps()))
        .to_options()
        .command("ambient")
        .help("Float a decorative swarm of math symbols across the terminal");

    let info = pure(Cmd::Info)
        .to_options()
        .command("info")
        .help("Prints a JSON description of the fixed formula and palette");

    let cmd = construct!([calc, session, ambient, info]);

    cmd.to_options().descr("A passing-grade helper for three-cut courses").run()
}

/// One row of the weighted-average breakdown table.
#[derive(Tabled)]
struct WeightRow {
    /// The cut the row describes.
    #[tabled(rename = "Cut")]
    cut:          &'static str,
    /// The grade entered, or the computed requirement.
    #[tabled(rename = "Grade")]
    grade:        String,
    /// The cut's fixed weight.
    #[tabled(rename = "Weight")]
    weight:       String,
    /// Weighted contribution toward the passing average.
    #[tabled(rename = "Contribution")]
    contribution: String,
}

/// Builds a weight-row entry from a grade and weight.
fn weight_row(cut: &'static str, grade: f64, weight: f64) -> WeightRow {
    WeightRow {
        cut,
        grade: format_grade(grade),
        weight: format!("{:.0}%", weight * 100.0),
        contribution: format_grade(grade * weight),
    }
}

/// Prints the weighted-average breakdown for a pair of valid grades.
fn show_breakdown(grade1: f64, grade2: f64) {
    let required = required_grade(grade1, grade2);
    let rows = vec![
        weight_row("First", grade1, CUT_WEIGHT),
        weight_row("Second", grade2, CUT_WEIGHT),
        weight_row("Final (required)", required, FINAL_CUT_WEIGHT),
    ];

    println!(
        "{}",
        Table::new(rows)
            .with(Panel::header(format!("Passing average: {PASSING_AVERAGE:.1}")))
            .with(Panel::footer(format!("Required on the final cut: {}", format_grade(required))))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
    );
}

/// One-shot calculation: both texts pass through the input guard as a
/// single edit event each, then the trigger fires.
fn run_calc(cut1: &str, cut2: &str) -> Result<()> {
    let mut document = Document::new();
    InputGuard::on_edit(&mut document, FieldSlot::Cut1, cut1);
    InputGuard::on_edit(&mut document, FieldSlot::Cut2, cut2);

    GradeCalculator::trigger(&mut document);
    if let Some(rendered) = document.result.to_terminal() {
        println!("{rendered}");
    }

    let outcome1 = validate(document.field(FieldSlot::Cut1).text());
    let outcome2 = validate(document.field(FieldSlot::Cut2).text());
    if let (ValidationOutcome::Valid(grade1), ValidationOutcome::Valid(grade2)) =
        (outcome1, outcome2)
    {
        show_breakdown(grade1, grade2);
    }

    Ok(())
}

/// Plays back the symbol field in real time, then prints the census.
fn run_ambient(seconds: Option<f64>, fps: Option<u32>) {
    let seconds = seconds.unwrap_or_else(config::ambient_seconds).max(0.0);
    let fps = fps.unwrap_or_else(config::ambient_fps).max(1);
    let cols = config::viewport_cols();
    let rows = 10;

    let mut document = Document::new();
    let mut field = SymbolField::new(thread_rng());
    field.startup(&mut document.background);

    let frame_secs = 1.0 / f64::from(fps);
    let frames = (seconds * f64::from(fps)) as u64;
    for _ in 0..frames {
        let until = field.clock() + frame_secs;
        field.advance(&mut document.background, until);
        println!("{}", render_frame(&document.background, field.clock(), cols, rows));
        println!("{}", "─".repeat(cols));
        thread::sleep(Duration::from_secs_f64(frame_secs));
    }

    tracing::info!(
        "played {seconds}s of ambient symbols, {} animation cycles completed",
        field.completed()
    );
    println!(
        "{}",
        Table::new(glyph_census(&document.background))
            .with(Panel::header(format!("{} live sprites", document.background.len())))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
    );
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    if config::no_color() {
        colored::control::set_override(false);
    }

    match options() {
        Cmd::Calc(cut1, cut2) => run_calc(&cut1, &cut2)?,
        Cmd::Session => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::run(stdin.lock(), &mut stdout).context("The interactive session failed")?;
        }
        Cmd::Ambient(seconds, fps) => run_ambient(seconds, fps),
        Cmd::Info => {
            let report = InfoReport::gather();
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .context("Could not serialize the info report")?
            );
        }
    };

    Ok(())
}
