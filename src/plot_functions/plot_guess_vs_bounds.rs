// src/plot_functions/plot_guess_vs_bounds.rs
//
// Walks the catalogue of decision-variable groups for one trial and renders
// a bounds-comparison chart for each: muscle activations and forces at mesh
// and collocation points, joint positions/velocities/accelerations, and the
// optional arm and lumbar actuator channels.

use ndarray::Array2;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use crate::data_input::variables::{reshape_column_major, VariableSet};
use crate::plot_functions::plot_vs_bounds::plot_vs_bounds;
use crate::plot_functions::plot_vs_varying_bounds::plot_vs_varying_bounds;
use crate::types::PlotDataError;

/// File-name slug for a chart title: lowercase, spaces to underscores,
/// everything else alphanumeric kept.
fn title_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn chart_path(output_dir: &Path, trial: &str, title: &str) -> String {
    output_dir
        .join(format!("{}_{}.png", trial, title_slug(title)))
        .to_string_lossy()
        .into_owned()
}

/// Compares the optimizer's initial guess against the decision-variable
/// bounds for one trial, one chart per variable group. Mesh-point joint
/// position bounds arrive as a flattened column-major buffer of length
/// `n_joints * (N + 1)` and collocation-point bounds as `n_joints * d * N`,
/// where `N` is the trial's mesh-interval count and `d` the collocation
/// degree.
///
/// A missing trial or variable group fails with `KeyNotFound` before any
/// chart for that group is drawn.
#[allow(clippy::too_many_arguments)]
pub fn plot_guess_vs_bounds(
    lower: &VariableSet,
    upper: &VariableSet,
    guess: &VariableSet,
    trial: &str,
    n_joints: usize,
    mesh_intervals: &HashMap<String, usize>,
    n_collocation: usize,
    guess_qs_mesh: &Array2<f64>,
    guess_qds_mesh: &Array2<f64>,
    with_arms: bool,
    with_lumbar_coordinate_actuators: bool,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let n_intervals = *mesh_intervals.get(trial).ok_or_else(|| {
        PlotDataError::key_not_found("mesh interval counts", trial)
    })?;

    let fixed = |guess_group: &str, bound_group: &str, title: &str| -> Result<(), Box<dyn Error>> {
        let lwp = lower.matrix(bound_group, trial)?;
        let uwp = upper.matrix(bound_group, trial)?;
        let y = guess.matrix(guess_group, trial)?;
        plot_vs_bounds(y, lwp, uwp, title, &chart_path(output_dir, trial, title))
    };

    // States.
    // Muscle activation at mesh and collocation points share the same bounds.
    fixed("A", "A", "Muscle activation at mesh points")?;
    fixed("Aj", "A", "Muscle activation at collocation points")?;
    // Muscle force at mesh and collocation points.
    fixed("F", "F", "Muscle force at mesh points")?;
    fixed("Fj", "F", "Muscle force at collocation points")?;

    // Joint position bounds vary per sample and arrive flattened.
    {
        let title = "Joint position at mesh points";
        let lwp = reshape_column_major(
            lower.flat("Qsk", trial)?,
            n_joints,
            n_intervals + 1,
            "joint position mesh bounds",
        )?;
        let uwp = reshape_column_major(
            upper.flat("Qsk", trial)?,
            n_joints,
            n_intervals + 1,
            "joint position mesh bounds",
        )?;
        plot_vs_varying_bounds(
            guess_qs_mesh,
            &lwp,
            &uwp,
            title,
            &chart_path(output_dir, trial, title),
        )?;
    }
    {
        let title = "Joint position at collocation points";
        let lwp = reshape_column_major(
            lower.flat("Qsj", trial)?,
            n_joints,
            n_collocation * n_intervals,
            "joint position collocation bounds",
        )?;
        let uwp = reshape_column_major(
            upper.flat("Qsj", trial)?,
            n_joints,
            n_collocation * n_intervals,
            "joint position collocation bounds",
        )?;
        let y = guess.matrix("Qsj", trial)?;
        plot_vs_varying_bounds(y, &lwp, &uwp, title, &chart_path(output_dir, trial, title))?;
    }

    // Joint velocity at mesh points uses the caller-extracted guess matrix.
    {
        let title = "Joint velocity at mesh points";
        let lwp = lower.matrix("Qds", trial)?;
        let uwp = upper.matrix("Qds", trial)?;
        plot_vs_bounds(
            guess_qds_mesh,
            lwp,
            uwp,
            title,
            &chart_path(output_dir, trial, title),
        )?;
    }
    fixed("Qdsj", "Qds", "Joint velocity at collocation points")?;

    if with_arms {
        fixed("ArmA", "ArmA", "Arm activation at mesh points")?;
        fixed("ArmAj", "ArmA", "Arm activation at collocation points")?;
    }
    if with_lumbar_coordinate_actuators {
        fixed("LumbarA", "LumbarA", "Lumbar activation at mesh points")?;
        fixed("LumbarAj", "LumbarA", "Lumbar activation at collocation points")?;
    }

    // Controls.
    fixed("ADt", "ADt", "Muscle activation derivative at mesh points")?;
    if with_arms {
        fixed("ArmE", "ArmE", "Arm excitation at mesh points")?;
    }
    if with_lumbar_coordinate_actuators {
        fixed("LumbarE", "LumbarE", "Lumbar excitation at mesh points")?;
    }
    fixed("FDt", "FDt", "Muscle force derivative at mesh points")?;
    fixed(
        "Qdds",
        "Qdds",
        "Joint velocity derivative (acceleration) at mesh points",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_slug_flattens_punctuation() {
        assert_eq!(
            title_slug("Joint velocity derivative (acceleration) at mesh points"),
            "joint_velocity_derivative_acceleration_at_mesh_points"
        );
        assert_eq!(
            title_slug("Muscle activation at mesh points"),
            "muscle_activation_at_mesh_points"
        );
    }
}
