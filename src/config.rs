/// Static dashboard settings. There are no flags or config files; everything
/// is fixed at build time.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub side_panel_width: f32,
    pub chart_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_title: "CABRI Document Collection Overview".to_string(),
            inner_size: [1280.0, 860.0],
            min_inner_size: [720.0, 480.0],
            side_panel_width: 260.0,
            chart_height: 360.0,
        }
    }
}
