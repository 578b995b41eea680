use std::time::Instant;

use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::species::Species;

/// Time a full integration for a range of step counts
/// Paste output directly into excel to graph
pub fn bench_integrator_curve() {
    println!("N,electron_ms,proton_ms,ns_per_step");

    let electron = Species::electron();
    let proton = Species::proton();

    for exp in 3..=6 {
        let steps = 10usize.pow(exp);
        let params = Parameters { steps, ..Parameters::reference() };

        // Small N: average over a few runs to smooth noise
        let repeats = if steps <= 100_000 { 5 } else { 1 };

        // Warm up
        std::hint::black_box(integrate(&electron, &params));

        let t0 = Instant::now();
        for _ in 0..repeats {
            let traj = integrate(&electron, &params);
            std::hint::black_box(&traj);
        }
        let ms_electron = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

        let t1 = Instant::now();
        for _ in 0..repeats {
            let traj = integrate(&proton, &params);
            std::hint::black_box(&traj);
        }
        let ms_proton = t1.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

        let ns_per_step = ms_electron * 1.0e6 / steps as f64;
        println!("{},{:.6},{:.6},{:.2}", steps, ms_electron, ms_proton, ns_per_step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_curve_runs_to_completion() {
        bench_integrator_curve();
    }
}
