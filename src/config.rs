use std::path::PathBuf;

/// Startup settings. There are no flags or environment overrides; the dataset
/// ships next to the binary at a fixed relative path.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub side_panel_width: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("structured_classified.csv"),
            window_title: "Workers Population Dashboard".to_string(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [600.0, 400.0],
            side_panel_width: 240.0,
        }
    }
}
