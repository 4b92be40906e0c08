//! End-to-end checks of the reference scenarios for both calculators.

use approx::assert_relative_eq;
use powerlab::prelude::*;

#[test]
fn exact_fit_copper_fourteen_gauge() {
    let required = required_ampacity(20.0, false);
    let found = find_min_gauge(required, TempRating::C75, Material::Copper).unwrap();
    assert_eq!(found.gauge, Gauge::Awg(14));
    assert_relative_eq!(found.ampacity, 20.0);
}

#[test]
fn continuous_load_moves_to_twelve_gauge() {
    let request = SelectionRequest::new(Material::Copper, 20.0, 120.0, 10.0).continuous(true);
    assert_relative_eq!(request.required_ampacity(), 25.0);
    let found = find_min_gauge(request.required_ampacity(), request.temp_rating, request.material)
        .unwrap();
    assert_eq!(found.gauge, Gauge::Awg(12));
    assert_relative_eq!(found.ampacity, 25.0);
}

#[test]
fn long_run_forces_escalation_past_twelve_gauge() {
    let drop = voltage_drop(20.0, 150.0, Gauge::Awg(12), 120.0, Material::Copper).unwrap();
    assert_relative_eq!(drop.volts, 9.528, epsilon = 1e-9);
    assert_relative_eq!(drop.percent, 7.94, epsilon = 1e-9);

    let request = SelectionRequest::new(Material::Copper, 20.0, 120.0, 150.0);
    let chosen = select_gauge(&request).unwrap();
    assert!(chosen.gauge > Gauge::Awg(12));
    assert!(chosen.drop_percent <= request.max_drop_percent);
}

#[test]
fn huge_load_has_no_gauge_in_either_material() {
    for material in Material::ALL {
        for rating in TempRating::ALL {
            assert!(matches!(
                find_min_gauge(1000.0, rating, material),
                Err(GaugeError::NoSuitableGauge { .. })
            ));
        }
    }
}

#[test]
fn idle_mosfet_sits_at_ambient() {
    let p_total = total_loss(conduction_loss(0.0, 0.05), 0.0);
    let tj = junction_temp_simple(25.0, p_total, 4.0);
    assert_relative_eq!(tj, 25.0);
    assert_relative_eq!(safety_margin(tj, 150.0), 125.0);
}

#[test]
fn selection_outcomes_are_exclusive() {
    let cases = [
        SelectionRequest::new(Material::Copper, 15.0, 120.0, 25.0),
        SelectionRequest::new(Material::Aluminum, 300.0, 240.0, 50.0),
        SelectionRequest::new(Material::Copper, 150.0, 120.0, 1500.0),
    ];
    let outcomes: Vec<_> = cases.iter().map(select_gauge).collect();
    assert!(outcomes[0].is_ok());
    assert!(matches!(outcomes[1], Err(GaugeError::NoSuitableGauge { .. })));
    assert!(matches!(
        outcomes[2],
        Err(GaugeError::VoltageDropLimitExceeded { largest: Gauge::Aught(4), .. })
    ));
}

#[test]
fn crate_error_wraps_subsystem_errors() {
    let err: PowerLabError = "brass".parse::<Material>().unwrap_err().into();
    assert!(err.to_string().contains("brass"));
}
