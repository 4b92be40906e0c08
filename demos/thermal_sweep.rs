use powerlab::dashboard::{DashboardReport, MosfetParameters, ThermalStatus, ThermalSweep};
use powerlab::mosfet::ThermalModel;
use powerlab::sweep::{sweep_map, SweepConfig};

fn main() {
    // 100 V synchronous buck switch on a small clip-on heatsink.
    let params = MosfetParameters {
        vds: 100.0,
        id: 25.0,
        rds_on: 0.008,
        t_rise: 15e-9,
        t_fall: 20e-9,
        f_sw: 200_000.0,
        v_out: 24.0,
        i_out: 20.0,
        ..MosfetParameters::default()
    }
    .with_thermal(ThermalModel::Detailed {
        r_jc: 0.9,
        r_cs: 0.3,
        r_sa: 6.0,
    });

    let report = match DashboardReport::evaluate(&params) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("invalid parameters: {e}");
            return;
        }
    };
    println!(
        "P_total = {:.2} W, Tj = {:.1} °C ({})",
        report.total_loss(),
        report.junction_temp,
        report.status
    );

    let sweep = match ThermalSweep::run(&params, &SweepConfig::default().with_points(12)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("sweep failed: {e}");
            return;
        }
    };
    let statuses = sweep_map(sweep.junction_temps.iter().copied(), |tj| {
        ThermalStatus::classify(tj, params.t_j_max)
    });
    println!("id(A), p_total(W), tj(C), status");
    let totals = sweep.total_losses();
    for (idx, status) in statuses.iter().enumerate() {
        println!(
            "{:.3}, {:.3}, {:.2}, {status:?}",
            sweep.currents[idx], totals[idx], sweep.junction_temps[idx]
        );
    }
}
