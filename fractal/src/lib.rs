pub mod constant;
pub mod criteria;
pub mod farey;
pub mod grid;
pub mod logging;
pub mod params;
pub mod pipeline;
mod utils;

pub use constant::{Const, Origin, ParamError};
pub use criteria::apply_katz_criterion;
pub use farey::{Rational, farey_sequence};
pub use grid::{
	LatticePoint, map_to_grid, project_periodic, reflect_and_wrap, sort_by_distance,
};
pub use logging::init_logging;
pub use params::{
	ComparisonParams, ComparisonParamsPatch, FractalParams, FractalParamsPatch,
};
pub use pipeline::generate_fractal_points;
