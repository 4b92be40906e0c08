//! `powerlab wire`: single-phase conductor sizing.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use clap::Args;
use powerlab::constants::{
    is_continuous_duration, CONTINUOUS_LOAD_FACTOR, CONTINUOUS_LOAD_HOURS, DEFAULT_MAX_DROP_PERCENT,
};
use powerlab::errors::GaugeError;
use powerlab::materials::Material;
use powerlab::units::{Current, Percentage, Voltage};
use powerlab::wiring::{Escalation, SelectionRequest, TempRating};

use crate::prompt::{non_negative, parse_yes_no, Prompter};

#[derive(Debug, Default, Args)]
pub struct WireArgs {
    /// Conductor material (copper/cu or aluminum/al)
    #[arg(short, long)]
    material: Option<Material>,

    /// Load current (A)
    #[arg(short = 'i', long)]
    current: Option<f64>,

    /// Circuit voltage (V)
    #[arg(long)]
    voltage: Option<f64>,

    /// One-way run length (ft)
    #[arg(short, long)]
    length: Option<f64>,

    /// Insulation temperature rating index: 0=60°C, 1=75°C, 2=90°C
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=2))]
    temp_rating: Option<u8>,

    /// Continuous load (3 h or more): y/n
    #[arg(short, long, value_name = "Y/N", value_parser = parse_yes_no)]
    continuous: Option<bool>,

    /// Load duration in hours; 3 h or more counts as continuous
    #[arg(long, conflicts_with = "continuous")]
    hours: Option<f64>,

    /// Maximum allowable voltage drop in percent
    #[arg(short = 'd', long)]
    max_drop: Option<f64>,

    /// Never prompt; unset options take their defaults
    #[arg(long)]
    batch: bool,
}

fn checked_flag(value: f64, flag: &str) -> Result<f64> {
    non_negative(value).map_err(|msg| anyhow!("--{flag} {msg}, got {value}"))
}

fn required<R: BufRead, W: Write>(
    value: Option<f64>,
    batch: bool,
    flag: &str,
    prompt: &str,
    io: &mut Prompter<R, W>,
) -> Result<f64> {
    match value {
        Some(v) => checked_flag(v, flag),
        None if batch => Err(anyhow!("--{flag} is required in batch mode")),
        None => io.number(prompt, None),
    }
}

fn collect_request<R: BufRead, W: Write>(
    args: &WireArgs,
    io: &mut Prompter<R, W>,
) -> Result<SelectionRequest> {
    let material = match args.material {
        Some(m) => m,
        None if args.batch => Material::Copper,
        None => io.parsed("Conductor material (copper or aluminum) [default copper]: ", "copper")?,
    };
    writeln!(io.writer(), "Using {material}.\n")?;

    let current = required(args.current, args.batch, "current", "Load current (A): ", io)?;
    let voltage = required(args.voltage, args.batch, "voltage", "Circuit voltage (V): ", io)?;
    let length = required(args.length, args.batch, "length", "One-way run length (feet): ", io)?;

    let default_rating = TempRating::default().index();
    let rating_index = match args.temp_rating {
        Some(t) => usize::from(t),
        None if args.batch => default_rating,
        None => io.choice(
            "Insulation temp rating (0=60°C, 1=75°C, 2=90°C) [default 1]: ",
            &[0, 1, 2],
            Some(default_rating),
        )?,
    };
    let temp_rating = TempRating::try_from(rating_index)?;

    let continuous = match (args.continuous, args.hours) {
        (Some(c), _) => c,
        (None, Some(h)) => is_continuous_duration(checked_flag(h, "hours")?),
        (None, None) if args.batch => false,
        (None, None) => io.yes_no(
            &format!(
                "Is this a continuous load ({CONTINUOUS_LOAD_HOURS} hours or more)? (y/n) [default n]: "
            ),
            false,
        )?,
    };

    let max_drop = match args.max_drop {
        Some(d) => checked_flag(d, "max-drop")?,
        None if args.batch => DEFAULT_MAX_DROP_PERCENT,
        None => io.number(
            "Max allowable voltage drop % (e.g. 3, no % sign) [default 3]: ",
            Some(DEFAULT_MAX_DROP_PERCENT),
        )?,
    };

    Ok(SelectionRequest::new(material, current, voltage, length)
        .with_temp_rating(temp_rating)
        .continuous(continuous)
        .with_max_drop_percent(max_drop))
}

fn write_remedies<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nEven the largest wire exceeds voltage drop limit - consider:")?;
    writeln!(out, "  - Shorten the run length")?;
    writeln!(out, "  - Reduce the load current")?;
    writeln!(out, "  - Use parallel conductors")?;
    writeln!(out, "  - Increase allowable drop (if code permits)")
}

fn write_notes<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nNotes & Disclaimers:")?;
    writeln!(
        out,
        "- Uses NEC 2023 Table 310.16 ampacities and Ch.9 Table 8 resistances (approximate)"
    )?;
    writeln!(out, "- Always verify with latest NEC and local codes")?;
    writeln!(out, "- Apply full derating (ambient, bundling >3 CCC, etc.) as needed")?;
    writeln!(out, "- Voltage drop is recommended (NEC informational note), not required")
}

/// Collects inputs, runs the selection and prints the trail and verdict.
pub fn run<R: BufRead, W: Write>(args: &WireArgs, io: &mut Prompter<R, W>) -> Result<()> {
    let request = collect_request(args, io)?;
    let out = io.writer();

    let mut escalation = match Escalation::new(&request) {
        Ok(e) => e,
        Err(GaugeError::NoSuitableGauge { .. }) => {
            writeln!(out, "\nNo suitable gauge found - load is too high for common sizes!")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let note = if request.continuous {
        format!(" (includes {:.0}% continuous factor)", CONTINUOUS_LOAD_FACTOR * 100.0)
    } else {
        String::new()
    };
    let minimum = escalation.minimum();
    writeln!(
        out,
        "\nMinimum ampacity needed: {:.1}{note}",
        Current::new(request.required_ampacity())
    )?;
    writeln!(
        out,
        "Smallest gauge meeting ampacity: {} AWG (allows {} at {})",
        minimum.gauge,
        Current::new(minimum.ampacity),
        request.temp_rating
    )?;

    let limit = Percentage::new(request.max_drop_percent);
    for (step, attempt) in escalation.by_ref().enumerate() {
        if step == 0 {
            writeln!(
                out,
                "Calculated voltage drop: {:.2}  ({:.2})",
                Voltage::new(attempt.drop_volts),
                Percentage::new(attempt.drop_percent)
            )?;
        } else {
            writeln!(out, "  -> Exceeds {limit} limit! Trying larger wire...")?;
            writeln!(
                out,
                "  {} AWG -> drop {:.2} ({:.2})",
                attempt.gauge,
                Percentage::new(attempt.drop_percent),
                Voltage::new(attempt.drop_volts)
            )?;
        }
    }

    match escalation.finish() {
        Ok(chosen) => writeln!(
            out,
            "\nFinal recommendation: {} AWG {} (meets both ampacity and voltage drop limit)",
            chosen.gauge,
            request.material.name()
        )?,
        Err(GaugeError::VoltageDropLimitExceeded { largest, .. }) => {
            writeln!(out, "  -> Exceeds {limit} limit!")?;
            writeln!(
                out,
                "  Cannot improve further - {largest} AWG is the largest wire in the table."
            )?;
            write_remedies(out)?;
        }
        Err(GaugeError::ResistanceDataUnavailable { gauge, .. }) => {
            writeln!(out, "Resistance data not available for {gauge} AWG.")?;
        }
        Err(e) => return Err(e.into()),
    }

    write_notes(out)?;
    Ok(())
}
