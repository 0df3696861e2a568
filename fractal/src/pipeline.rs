use tracing::debug;

use crate::constant::ParamError;
use crate::criteria::apply_katz_criterion;
use crate::farey::farey_sequence;
use crate::grid::{LatticePoint, map_to_grid, project_periodic, reflect_and_wrap, sort_by_distance};
use crate::params::FractalParams;

/// Full generation pipeline: Farey sequence -> grid mapping -> reflection and
/// torus wrap -> distance sort -> Katz selection -> periodic projection.
///
/// Deterministic: identical parameters produce identical ordered output.
/// Invalid parameters are rejected before any stage runs.
pub fn generate_fractal_points(params: &FractalParams) -> Result<Vec<LatticePoint>, ParamError> {
    params.validate()?;

    let sequence = farey_sequence(params.order)?;
    let grid_points = map_to_grid(&sequence);
    let full_points = reflect_and_wrap(&grid_points, params.order, params.origin);
    let sorted_points = sort_by_distance(full_points);
    let selected_points = apply_katz_criterion(&sorted_points, params.katz);
    debug!(
        order = params.order,
        katz = params.katz,
        origin = params.origin.as_str(),
        seeds = selected_points.len(),
        "katz selection complete"
    );

    Ok(project_periodic(&selected_points, params.order, params.origin))
}
