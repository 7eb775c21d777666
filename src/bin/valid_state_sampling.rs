// Valid state sampling demo: rejection sampling in a 2-D space with
// disc obstacles, drawing samples through a per-worker sampler pool.
use gnuplot::{AxesCommon, Caption, Color, Figure, PointSize, PointSymbol};
use std::sync::Arc;

use rust_motion_planning::{
    RealVectorStateManifold, SamplerKind, SpaceInformation, State, StateSamplerArray,
};

const N_SAMPLE: usize = 2000; // number of sampling attempts
const N_WORKER: usize = 4; // pool slots

fn main() {
    env_logger::init();

    let obstacles = vec![(5.0, 5.0, 2.0), (-3.0, 4.0, 1.5), (2.0, -4.0, 2.5)];

    let manifold = Arc::new(RealVectorStateManifold::with_bounds(2, -10.0, 10.0));
    let mut si = SpaceInformation::new(manifold);
    let obs = obstacles.clone();
    si.set_state_validity_fn(move |state: &State| {
        obs.iter().all(|(ox, oy, r)| {
            let dx = state[0] - ox;
            let dy = state[1] - oy;
            (dx * dx + dy * dy).sqrt() > *r
        })
    });
    si.setup().unwrap();
    let si = Arc::new(si);

    print!("{}", si);

    let mut pool = StateSamplerArray::new(&si, SamplerKind::Valid);
    pool.resize(N_WORKER);

    let mut sample_x = Vec::new();
    let mut sample_y = Vec::new();
    let mut state = si.alloc_state();
    for i in 0..N_SAMPLE {
        if pool[i % N_WORKER].sample(&mut state) {
            sample_x.push(state[0]);
            sample_y.push(state[1]);
        }
    }
    println!("Accepted {} valid samples", sample_x.len());

    let obs_x: Vec<f64> = obstacles.iter().map(|o| o.0).collect();
    let obs_y: Vec<f64> = obstacles.iter().map(|o| o.1).collect();

    let mut fg = Figure::new();
    let axes = fg.axes2d();
    axes.points(
        &sample_x,
        &sample_y,
        &[Caption("Valid samples"), Color("blue"), PointSymbol('.')],
    );
    axes.points(
        &obs_x,
        &obs_y,
        &[
            Caption("Obstacles"),
            Color("black"),
            PointSymbol('O'),
            PointSize(3.0),
        ],
    );
    std::fs::create_dir_all("./img").unwrap();
    fg.save_to_png("./img/valid_state_sampling.png", 800, 600).unwrap();
    println!("Saved ./img/valid_state_sampling.png");
}
