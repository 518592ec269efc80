// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use clap::{Parser, ValueEnum};
// `pintln!` expands to an unqualified `fomat!` when built with `--cfg test`.
#[allow(unused_imports)]
use fomat_macros::fomat;
use display_snap::{Alignment, Rect, RectAlignment};
use display_snap_shell::{self as shell, List};
use nu_ansi_term::{Color, Style};
use std::fmt::{Display, Write as FmtWrite};
use std::io::Write;

/// Classify and align display arrangements via displayplacer
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct Align {
    /// Display to align against, selected by id or list index.
    base: String,
    /// Display to reposition, selected by id or list index.
    current: String,
    /// Overrides the computed alignment on the x axis.
    #[arg(long, value_enum)]
    x: Option<AlignArg>,
    /// Overrides the computed alignment on the y axis.
    #[arg(long, value_enum)]
    y: Option<AlignArg>,
    /// Prints the displayplacer command without applying it.
    #[arg(long)]
    test: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Snap a display into the closest arrangement with another.
    Align(Align),

    /// List attached displays.
    List,

    /// Show how two displays overlap on each axis.
    Relation {
        base: String,
        current: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AlignArg {
    Before,
    After,
    Center,
    Min,
    Max,
}

impl Display for AlignArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AlignArg::Before => "before",
            AlignArg::After => "after",
            AlignArg::Center => "center",
            AlignArg::Min => "min",
            AlignArg::Max => "max",
        })
    }
}

impl AlignArg {
    #[must_use]
    pub fn alignment(self) -> Alignment {
        match self {
            AlignArg::Before => Alignment::Before,
            AlignArg::After => Alignment::After,
            AlignArg::Center => Alignment::Center,
            AlignArg::Min => Alignment::SnapMin,
            AlignArg::Max => Alignment::SnapMax,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let displays = shell::list().await?;

    match cli.command {
        Commands::Align(args) => align(&displays, &args).await,

        Commands::List => {
            list(&displays);
            Ok(())
        }

        Commands::Relation { base, current } => relation(&displays, &base, &current),
    }
}

fn get_display<'a>(
    list: &'a List,
    query: &str,
) -> Result<&'a shell::Display, Box<dyn std::error::Error>> {
    let by_id = list.displays.values().find(|display| {
        display.persistent_id == query
            || display.contextual_id == query
            || display.serial_id == query
    });

    if let Some(display) = by_id {
        return Ok(display);
    }

    query
        .parse::<usize>()
        .ok()
        .and_then(|index| list.displays.values().nth(index))
        .ok_or_else(|| "could not find display".into())
}

fn display_rect(display: &shell::Display) -> Rect {
    Rect::new(
        (f64::from(display.origin.0), f64::from(display.origin.1)),
        (
            f64::from(display.resolution.0),
            f64::from(display.resolution.1),
        ),
    )
}

async fn align(displays: &List, args: &Align) -> Result<(), Box<dyn std::error::Error>> {
    let base = get_display(displays, &args.base)?;
    let current = get_display(displays, &args.current)?;

    let base_rect = display_rect(base);
    let mut rect = display_rect(current);

    let closest = rect.closest_alignment(&base_rect);
    let alignment = RectAlignment {
        x: args.x.map_or(closest.x, AlignArg::alignment),
        y: args.y.map_or(closest.y, AlignArg::alignment),
    };

    rect.align_to(&base_rect, alignment);

    #[allow(clippy::cast_possible_truncation)]
    let origin = (rect.x.min.round() as i32, rect.y.min.round() as i32);

    #[allow(clippy::ignored_unit_patterns)]
    fomat_macros::pintln!(
        (Style::new().bold().paint("displayplacer"))
        " \"" (shell::position_args(current, origin)) "\""
    );

    if args.test {
        return Ok(());
    }

    shell::set_position(current, origin).await?;

    Ok(())
}

fn relation(displays: &List, base: &str, current: &str) -> Result<(), Box<dyn std::error::Error>> {
    let base = get_display(displays, base)?;
    let current = get_display(displays, current)?;

    let base_rect = display_rect(base);
    let rect = display_rect(current);

    let rel = rect.relation_to(&base_rect);
    let alignment = rect.closest_alignment(&base_rect);

    #[allow(clippy::ignored_unit_patterns)]
    fomat_macros::pintln!(
        (Color::Yellow.bold().paint("x: "))
        (rel.x.min_side) " | " (rel.x.max_side)
        " -> " (Color::Cyan.paint(alignment.x.to_string())) "\n"
        (Color::Yellow.bold().paint("y: "))
        (rel.y.min_side) " | " (rel.y.max_side)
        " -> " (Color::Cyan.paint(alignment.y.to_string()))
    );

    Ok(())
}

fn list(displays: &List) {
    let mut output = String::new();

    for (index, display) in displays.displays.values().enumerate() {
        #[allow(clippy::ignored_unit_patterns)]
        let _res = fomat_macros::witeln!(
            &mut output,
            (Style::new().bold().paint(index.to_string())) ": "
            (Style::new().bold().paint(&display.persistent_id)) " "
            if display.enabled {
                (Color::Green.bold().paint("(enabled)"))
            } else {
                (Color::Red.bold().paint("(disabled)"))
            }
            if display.main {
                " " (Color::Purple.bold().paint("(main)"))
            }
            (Color::Yellow.bold().paint("\n  Type: ")) (display.kind)
            (Color::Yellow.bold().paint("\n  Resolution: "))
            (display.resolution.0) "x" (display.resolution.1)
            if let Some(hertz) = display.hertz {
                " @ " (Color::Cyan.paint(format!("{hertz} Hz")))
            }
            (Color::Yellow.bold().paint("\n  Origin: "))
            (display.origin.0) "," (display.origin.1)
            (Color::Yellow.bold().paint("\n  Rotation: ")) (display.rotation)
        );
    }

    let mut stdout = std::io::stdout().lock();
    let _res = stdout.write_all(output.as_bytes());
    let _res = stdout.flush();
}
