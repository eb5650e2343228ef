use canny_detector::image::io::{
    load_grayscale_image, read_json_file, save_edge_mask, write_json_file,
};
use canny_detector::{CannyConfigRecord, CannyDetector, CannyParams, StageTimings};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeMapConfig {
    pub input: PathBuf,
    /// Optional tagged record; takes precedence over the inline settings.
    #[serde(default)]
    pub params_file: Option<PathBuf>,
    #[serde(default)]
    pub detector: DetectorConfig,
    pub output: EdgeMapOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub low_threshold: f64,
    pub high_threshold: f64,
    pub aperture_size: u32,
    pub l2_gradient: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        let params = CannyParams::default();
        Self {
            low_threshold: params.low_threshold,
            high_threshold: params.high_threshold,
            aperture_size: params.aperture_size,
            l2_gradient: params.l2_gradient,
        }
    }
}

impl DetectorConfig {
    fn to_params(&self) -> CannyParams {
        CannyParams {
            low_threshold: self.low_threshold,
            high_threshold: self.high_threshold,
            aperture_size: self.aperture_size,
            l2_gradient: self.l2_gradient,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EdgeMapOutputConfig {
    pub mask_image: PathBuf,
    pub stats_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeMapConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let params = match &config.params_file {
        Some(path) => {
            let record: CannyConfigRecord = read_json_file(path)?;
            CannyParams::from_record(&record)
                .map_err(|e| format!("Invalid params file {}: {e}", path.display()))?
        }
        None => config.detector.to_params(),
    };

    let mut detector = CannyDetector::new(params);
    let result = detector
        .detect_with_trace(gray.as_view())
        .map_err(|e| format!("Detection failed: {e}"))?;

    let summary = EdgeMapSummary {
        width: result.mask.w,
        height: result.mask.h,
        low_threshold: params.low_threshold,
        high_threshold: params.high_threshold,
        aperture_size: params.aperture_size,
        l2_gradient: params.l2_gradient,
        edge_count: result.mask.count_edges(),
        global_rounds: result.global_rounds,
        timings: result.timings,
    };

    save_edge_mask(&result.mask, &config.output.mask_image)?;
    write_json_file(&config.output.stats_json, &summary)?;

    println!(
        "Saved edge mask to {} ({} edge pixels)",
        config.output.mask_image.display(),
        summary.edge_count
    );
    println!(
        "Saved detection stats to {} ({} global rounds, {:.3} ms)",
        config.output.stats_json.display(),
        summary.global_rounds,
        summary.timings.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeMapSummary {
    width: usize,
    height: usize,
    low_threshold: f64,
    high_threshold: f64,
    aperture_size: u32,
    l2_gradient: bool,
    edge_count: usize,
    global_rounds: usize,
    timings: StageTimings,
}
