//! `powerlab mosfet`: loss, junction temperature and heatsink report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use powerlab::dashboard::{write_sweep_csv, DashboardReport, MosfetParameters, ThermalSweep};
use powerlab::errors::PowerLabError;
use powerlab::mosfet::ThermalModel;
use powerlab::sweep::SweepConfig;
use powerlab::units::{Current, Percentage, Power, Resistance, Temperature, ThermalResistance};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelKind {
    /// Single RθJA
    Simple,
    /// RθJC + RθCS + RθSA
    Detailed,
}

#[derive(Debug, Args)]
pub struct MosfetArgs {
    /// Drain-source voltage (V)
    #[arg(long, default_value_t = 400.0)]
    vds: f64,
    /// Drain current (A)
    #[arg(long, default_value_t = 10.0)]
    id: f64,
    /// On-state resistance (Ω)
    #[arg(long, default_value_t = 0.05)]
    rds_on: f64,
    /// Rise time (ns)
    #[arg(long, default_value_t = 50.0)]
    rise_ns: f64,
    /// Fall time (ns)
    #[arg(long, default_value_t = 50.0)]
    fall_ns: f64,
    /// Switching frequency (Hz)
    #[arg(long, default_value_t = 50_000.0)]
    fsw: f64,
    /// Output voltage (V)
    #[arg(long, default_value_t = 48.0)]
    vout: f64,
    /// Output current (A)
    #[arg(long, default_value_t = 10.0)]
    iout: f64,
    /// Ambient temperature (°C)
    #[arg(long, default_value_t = 25.0)]
    ambient: f64,
    /// Maximum junction temperature (°C)
    #[arg(long, default_value_t = 150.0)]
    tj_max: f64,
    /// Thermal model
    #[arg(long, value_enum, default_value_t = ModelKind::Detailed)]
    model: ModelKind,
    /// RθJA for the simple model (°C/W)
    #[arg(long, default_value_t = 4.0)]
    rth_ja: f64,
    /// RθJC for the detailed model (°C/W)
    #[arg(long, default_value_t = 1.5)]
    rth_jc: f64,
    /// RθCS for the detailed model (°C/W)
    #[arg(long, default_value_t = 0.5)]
    rth_cs: f64,
    /// RθSA for the detailed model (°C/W)
    #[arg(long, default_value_t = 3.0)]
    rth_sa: f64,
    /// Skip the drain-current sweep
    #[arg(long)]
    no_sweep: bool,
    /// Number of sweep points
    #[arg(long, default_value_t = 100)]
    sweep_points: usize,
    /// Write the sweep as CSV to this file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

impl MosfetArgs {
    fn parameters(&self) -> MosfetParameters {
        let thermal = match self.model {
            ModelKind::Simple => ThermalModel::Simple { r_ja: self.rth_ja },
            ModelKind::Detailed => ThermalModel::Detailed {
                r_jc: self.rth_jc,
                r_cs: self.rth_cs,
                r_sa: self.rth_sa,
            },
        };
        MosfetParameters {
            vds: self.vds,
            id: self.id,
            rds_on: self.rds_on,
            t_rise: self.rise_ns * 1e-9,
            t_fall: self.fall_ns * 1e-9,
            f_sw: self.fsw,
            v_out: self.vout,
            i_out: self.iout,
            t_ambient: self.ambient,
            t_j_max: self.tj_max,
            thermal,
        }
    }
}

fn bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
    } else {
        0
    };
    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

fn write_report<W: Write>(out: &mut W, params: &MosfetParameters, report: &DashboardReport) -> Result<()> {
    writeln!(out, "MOSFET Power & Thermal Analyzer")?;
    writeln!(out, "Thermal model: {}", params.thermal.label())?;
    writeln!(out, "Rds(on): {:.3}\n", Resistance::new(params.rds_on))?;

    writeln!(out, "  Conduction loss   {:.2}", Power::new(report.losses.conduction))?;
    writeln!(out, "  Switching loss    {:.2}", Power::new(report.losses.switching))?;
    writeln!(out, "  Total loss        {:.2}", Power::new(report.total_loss()))?;
    writeln!(out, "  Junction temp     {:.1}", Temperature::new(report.junction_temp))?;
    writeln!(out, "  Efficiency        {:.2}", Percentage::new(report.efficiency * 100.0))?;
    writeln!(out, "\n{}", report.status)?;

    writeln!(out, "\nRequired Thermal Resistance")?;
    match report.heatsink {
        Some(hs) => {
            writeln!(out, "  Required total:   {:.2}", ThermalResistance::new(hs.total))?;
            if let Some(r_sa) = hs.sink_to_ambient {
                writeln!(out, "  Required RθSA:    {:.2}", ThermalResistance::new(r_sa))?;
                if r_sa < 0.0 {
                    writeln!(
                        out,
                        "  RθJC + RθCS alone exceed the budget; no heatsink can hold Tj_max."
                    )?;
                } else if hs.satisfied_by(&params.thermal) {
                    writeln!(out, "  Current heatsink exceeds required performance.")?;
                } else {
                    writeln!(out, "  Select a heatsink with RθSA less than this value.")?;
                }
            }
        }
        None => writeln!(out, "  No thermal resistance requirement (zero power dissipation).")?,
    }

    let peak = report.losses.conduction.max(report.losses.switching);
    writeln!(out, "\nPower Loss Breakdown")?;
    writeln!(
        out,
        "  Conduction |{}| {:.2}",
        bar(report.losses.conduction, peak),
        Power::new(report.losses.conduction)
    )?;
    writeln!(
        out,
        "  Switching  |{}| {:.2}",
        bar(report.losses.switching, peak),
        Power::new(report.losses.switching)
    )?;
    Ok(())
}

fn write_sweep_table<W: Write>(out: &mut W, sweep: &ThermalSweep, t_j_max: f64) -> Result<()> {
    writeln!(out, "\nJunction Temperature vs Drain Current")?;
    writeln!(out, "  {:>10}  {:>10}  {:>10}", "Id (A)", "Ptot (W)", "Tj (°C)")?;
    let totals = sweep.total_losses();
    let step = (sweep.len() / 10).max(1);
    let mut rows: Vec<usize> = (0..sweep.len()).step_by(step).collect();
    if rows.last() != Some(&(sweep.len() - 1)) {
        rows.push(sweep.len() - 1);
    }
    for idx in rows {
        writeln!(
            out,
            "  {:>10.3}  {:>10.3}  {:>10.1}",
            sweep.currents[idx], totals[idx], sweep.junction_temps[idx]
        )?;
    }
    match sweep.first_exceeding(t_j_max) {
        Some(i) => writeln!(
            out,
            "  Tj exceeds {:.0} from {:.2} upward",
            Temperature::new(t_j_max),
            Current::new(i)
        )?,
        None => writeln!(
            out,
            "  Tj stays below {:.0} across the sweep",
            Temperature::new(t_j_max)
        )?,
    }
    Ok(())
}

fn analyze(
    params: &MosfetParameters,
    sweep: Option<&SweepConfig>,
) -> Result<(DashboardReport, Option<ThermalSweep>), PowerLabError> {
    let report = DashboardReport::evaluate(params)?;
    let sweep = sweep
        .map(|config| ThermalSweep::run(params, config))
        .transpose()?;
    Ok((report, sweep))
}

fn export_csv(path: &Path, sweep: &ThermalSweep) -> Result<(), PowerLabError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_sweep_csv(&mut writer, sweep)?;
    writer.flush()?;
    Ok(())
}

/// Evaluates the operating point, prints the dashboard and the optional sweep.
pub fn run<W: Write>(args: &MosfetArgs, out: &mut W) -> Result<()> {
    let params = args.parameters();
    let config = SweepConfig::default().with_points(args.sweep_points);
    let (report, sweep) = analyze(&params, (!args.no_sweep).then_some(&config))
        .context("invalid MOSFET parameters")?;
    write_report(out, &params, &report)?;

    if let Some(sweep) = &sweep {
        write_sweep_table(out, sweep, params.t_j_max)?;

        if let Some(path) = &args.csv {
            export_csv(path, sweep)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "  Sweep saved to {}", path.display())?;
        }
    }

    writeln!(out, "\nThermal Safety Margin")?;
    writeln!(
        out,
        "  Remaining margin to {:.0}: {:.1}",
        Temperature::new(params.t_j_max),
        Temperature::new(report.margin)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use powerlab::dashboard::ParameterError;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: MosfetArgs,
    }

    fn render(argv: &[&str]) -> String {
        let harness = Harness::parse_from(std::iter::once("mosfet").chain(argv.iter().copied()));
        let mut buf = Vec::new();
        run(&harness.args, &mut buf).expect("report renders");
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_report() {
        let shown = render(&[]);
        assert!(shown.contains("Rds(on): 0.050 Ω"));
        assert!(shown.contains("Total loss        15.00 W"));
        assert!(shown.contains("Junction temp     100.0 °C"));
        assert!(shown.contains("Thermal performance within safe range."));
        assert!(shown.contains("Current heatsink exceeds required performance."));
        assert!(shown.contains("Remaining margin to 150 °C: 50.0 °C"));
        assert!(shown.contains("Tj exceeds 150 °C from"));
    }

    #[test]
    fn simple_model_without_sweep() {
        let shown = render(&["--model", "simple", "--id", "0", "--no-sweep"]);
        assert!(shown.contains("Thermal model: simple (RθJA)"));
        assert!(shown.contains("No thermal resistance requirement"));
        assert!(!shown.contains("Junction Temperature vs Drain Current"));
        assert!(shown.contains("Remaining margin to 150 °C: 125.0 °C"));
    }

    #[test]
    fn hot_operating_point_warns() {
        let shown = render(&["--id", "30"]);
        assert!(shown.contains("Junction temperature exceeds maximum limit!"));
        assert!(shown.contains("no heatsink can hold Tj_max"));
    }

    #[test]
    fn bar_scales_to_peak() {
        assert_eq!(bar(10.0, 10.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(0.0, 0.0), " ".repeat(BAR_WIDTH));
        assert_eq!(bar(5.0, 10.0).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        let harness = Harness::parse_from(["mosfet", "--rds-on=-1"]);
        let mut buf = Vec::new();
        let err = run(&harness.args, &mut buf).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PowerLabError>(),
            Some(PowerLabError::Parameter(ParameterError::Negative("Rds(on)")))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn empty_sweep_is_a_parameter_error() {
        let harness = Harness::parse_from(["mosfet", "--sweep-points", "0"]);
        let err = run(&harness.args, &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PowerLabError>(),
            Some(PowerLabError::Parameter(ParameterError::EmptySweep))
        ));
    }

    #[test]
    fn csv_export_writes_file_and_reports_io_failures() {
        let path = std::env::temp_dir().join(format!("powerlab-sweep-{}.csv", std::process::id()));
        let arg = path.to_string_lossy().into_owned();
        let shown = render(&["--sweep-points", "5", "--csv", &arg]);
        assert!(shown.contains("Sweep saved to"));
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(written.starts_with("current,conduction,switching,total,junction_temp"));
        assert_eq!(written.lines().count(), 6);

        let missing = std::env::temp_dir().join("powerlab-no-such-dir").join("sweep.csv");
        let harness = Harness::parse_from([
            "mosfet".to_owned(),
            "--csv".to_owned(),
            missing.to_string_lossy().into_owned(),
        ]);
        let err = run(&harness.args, &mut Vec::new()).unwrap_err();
        assert!(matches!(err.downcast_ref::<PowerLabError>(), Some(PowerLabError::Io(_))));
    }
}
