pub mod dimension;
pub mod distance;
pub mod heatmap;
pub mod setops;

pub use dimension::fractal_dimension;
pub use distance::fractal_distance;
pub use heatmap::{
	DimensionHeatmap, HeatmapConfig, compute_dimension_heatmap, theoretical_dimension,
};
pub use setops::{difference_points, intersect_points};
