use lab_error_stats::config::HistogramConfig;
use lab_error_stats::dataset::Dataset;
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let dataset = Dataset::lab();
    let config = HistogramConfig::default();
    log::info!(
        "Analyzing {} readings, histogram at {}",
        dataset.actual.len(),
        config.output_path.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = lab_error_stats::run(&dataset, &config, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
