use ncinspect::input::InspectConfig;
use ncinspect::inspect::RecordCount;
use ncinspect::inspect_dataset;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "model_output.nc".to_string());
    let record_dim = args.next().unwrap_or_else(|| "time".to_string());

    let mut config = InspectConfig::new(path);
    config.record_dim = record_dim;

    let report = inspect_dataset(&config)?;

    // An empty unlimited dimension and a missing one look the same in the
    // human listing, but they are different outcomes.
    match report.summary.record_count {
        RecordCount::Present(0) => {
            println!("'{}' exists but holds no records yet", report.record_dim)
        }
        RecordCount::Present(n) => println!("'{}' holds {} records", report.record_dim, n),
        RecordCount::Absent => {
            println!("no dimension named '{}' in this dataset", report.record_dim)
        }
    }

    Ok(())
}
