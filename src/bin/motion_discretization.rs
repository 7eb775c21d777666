// Motion discretization demo: interpolate evenly spaced states along a
// segment crossing an obstacle and classify each with the oracle.
use plotlib::page::Page;
use plotlib::repr::Plot;
use plotlib::style::{PointMarker, PointStyle};
use plotlib::view::ContinuousView;
use std::sync::Arc;

use rust_motion_planning::{RealVectorStateManifold, SpaceInformation, State};

const N_INTERIOR: usize = 40; // interpolated states between the endpoints

fn main() {
    env_logger::init();

    let manifold = Arc::new(RealVectorStateManifold::with_bounds(2, 0.0, 10.0));
    let mut si = SpaceInformation::new(manifold);
    si.set_state_validity_fn(|state: &State| {
        let dx = state[0] - 5.0;
        let dy = state[1] - 5.0;
        (dx * dx + dy * dy).sqrt() > 2.0
    });
    si.setup().unwrap();

    let s1 = State::from_values(vec![1.0, 1.0]);
    let s2 = State::from_values(vec![9.0, 9.0]);
    println!("motion from (1,1) to (9,9) valid: {}", si.check_motion(&s1, &s2));

    let mut states = Vec::new();
    let added = si.get_motion_states(&s1, &s2, &mut states, N_INTERIOR, true, true);
    if let Some(index) = si.first_invalid_state(&states, added) {
        println!("first obstructed state along the segment: index {}", index);
    }

    let valid: Vec<(f64, f64)> = states[..added]
        .iter()
        .filter(|s| si.is_valid(s))
        .map(|s| (s[0], s[1]))
        .collect();
    let invalid: Vec<(f64, f64)> = states[..added]
        .iter()
        .filter(|s| !si.is_valid(s))
        .map(|s| (s[0], s[1]))
        .collect();

    let s0: Plot = Plot::new(valid).point_style(
        PointStyle::new()
            .marker(PointMarker::Circle)
            .colour("#35C788"),
    );
    let s1_plot: Plot = Plot::new(invalid).point_style(
        PointStyle::new()
            .marker(PointMarker::Cross)
            .colour("#DD3355"),
    );

    let v = ContinuousView::new()
        .add(s0)
        .add(s1_plot)
        .x_range(0., 10.)
        .y_range(0., 10.)
        .x_label("x [m]")
        .y_label("y [m]");

    std::fs::create_dir_all("./img").unwrap();
    Page::single(&v).save("./img/motion_discretization.svg").unwrap();
    println!("Saved ./img/motion_discretization.svg");
}
