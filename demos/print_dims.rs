use ncinspect::input::InspectConfig;
use ncinspect::inspect_dataset;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "nodc_D1900975_339.nc".to_string());

    let report = inspect_dataset(&InspectConfig::new(path))?;

    println!("Format: {}", report.format);
    println!("NumRecs: {}", report.summary.record_count);
    println!("Dimensions:");
    for dim in &report.summary.dimensions {
        println!("  {} = {}", dim.name(), dim.size());
    }

    Ok(())
}
