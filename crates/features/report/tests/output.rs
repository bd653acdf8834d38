use fp_estimator::{ActivityInputs, estimate};
use fp_report::chart::{BarChart, svg, terminal};
use fp_report::{ReportError, write_report};
use std::fs;
use tempfile::tempdir;

fn sample_inputs() -> ActivityInputs {
    ActivityInputs {
        km_car_per_week: 150.0,
        km_bus_per_week: 40.0,
        km_plane_per_year: 3000.0,
        electricity_kwh_per_month: 250.0,
        meat_meals_per_week: 7,
    }
}

#[test]
fn svg_file_is_written() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("footprint.svg");
    let chart = BarChart::from_footprint(&estimate(&sample_inputs()));

    svg::write(&chart, &path, 800, 500)?;

    let document = fs::read_to_string(&path)?;
    assert!(document.contains("CO₂ Footprint by Category"));
    assert!(document.contains("kg of CO₂ per year"));
    assert!(document.contains("Food (meat)"));
    Ok(())
}

#[test]
fn svg_into_missing_directory_fails_with_io() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("chart.svg");
    let chart = BarChart::from_footprint(&estimate(&sample_inputs()));

    let err = svg::write(&chart, &path, 800, 500).expect_err("parent directory does not exist");
    assert!(matches!(err, ReportError::Io { .. }));
    assert!(err.to_string().contains("chart.svg"));
}

#[test]
fn report_then_chart_on_one_stream() -> Result<(), Box<dyn std::error::Error>> {
    let footprint = estimate(&sample_inputs());
    let mut out = Vec::new();

    write_report(&mut out, &footprint)?;
    terminal::render(&BarChart::from_footprint(&footprint), 10, &mut out)?;

    let text = String::from_utf8(out)?;
    let report_at = text.find("Total annual footprint").expect("report present");
    let chart_at = text.find("CO₂ Footprint by Category").expect("chart present");
    assert!(report_at < chart_at);
    assert!(text.contains("Electricity"));
    Ok(())
}
