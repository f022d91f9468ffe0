use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fit once with `fit_gamma`/`fit_nu` and report train and test metrics.
    FitPredict,
    /// Sweep `gamma_values` x `nu_values` and export the result grid.
    GridSearch,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub seed: u64,
    pub fit_gamma: f64,
    pub fit_nu: f64,
    pub gamma_values: Vec<f64>,
    pub nu_values: Vec<f64>,
    pub max_fp_frames_percentage: f64,
    pub grid_search_csv_path: PathBuf,
    pub csv_separator: String,
    pub logger_timezone: chrono::FixedOffset,
    pub frame_width: u32,
    pub cell_width: u32,
    pub feature_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::FitPredict,
            seed: 42,
            fit_gamma: 0.01,
            fit_nu: 0.01,
            gamma_values: vec![0.0001, 0.001, 0.01, 0.1, 1.0, 10.0, 100.0, 1000.0],
            nu_values: vec![0.00001, 0.0001, 0.001, 0.01, 0.1],
            max_fp_frames_percentage: 50.0,
            grid_search_csv_path: PathBuf::from("grid_search_results.csv"),
            csv_separator: ";".to_string(),
            logger_timezone: central_european_time(),
            frame_width: 640,
            cell_width: 16,
            feature_count: 36,
        }
    }
}

fn central_european_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(3600).unwrap()
}
