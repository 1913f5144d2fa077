pub mod dropdown;
pub mod header;
pub mod prediction_summary;
pub mod sales_chart;
pub mod slider;
pub mod submit_button;
