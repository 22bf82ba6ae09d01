//! **MOEA/D** is a Multi-Objective Evolutionary Algorithm based on
//! Decomposition. Given several objective functions over a shared bounded
//! variable space, it searches for the Pareto front - the set of solutions
//! for which no objective can be improved without worsening another - by
//! decomposing the problem into as many coupled single-objective subproblems
//! as there are candidate solutions, and letting neighbouring subproblems
//! exchange good genetic material.
//!
//! Each subproblem owns a weight vector on the objective simplex and one
//! candidate point. A generation sweeps the subproblems in order: two parents
//! drawn from a subproblem's weight neighbourhood are recombined and mutated
//! into a child, the child is evaluated, and it replaces every neighbour it
//! beats on that neighbour's Tchebycheff scalarization against the running
//! ideal point. Every evaluated child is also offered to an archive of
//! mutually non-dominated solutions, which is the result of the run.
//!
//! # Objectives and closures
//!
//! Objective functions are opaque to the optimizer: anything implementing
//! [`Objectives`](objective::Objectives) works, and the trait is implemented
//! for closures of type `Fn(&[f64]) -> [f64; N]` as well as for arrays of `N`
//! closures of type `Fn(&[f64]) -> f64` - one closure per objective. All
//! objectives are minimized; negate values you want maximized.
//!
//! Termination works the same way: any closure of type
//! `FnMut(&[Vec<f64>], &[[f64; N]]) -> bool` is a
//! [`Terminator`](termination::Terminator). It is consulted once per
//! generation, which makes it the place to plug in progress reporting or an
//! external stop signal. A plain generation budget is provided by
//! [`GenerationTerminator`].
//!
//! # Parallelization
//!
//! Whole-population evaluation passes can be parallelized by wrapping the
//! objective operator with [`par_each()`] or [`par_batch()`]. This only
//! affects bulk evaluation: the generational sweep itself is strictly
//! sequential by design, because replacement decisions within a generation
//! intentionally observe the outcomes of earlier replacements in that same
//! generation. Parallelization is implemented with [rayon]; for cheap
//! objective functions it may only add overhead, so benchmark if in doubt.
//!
//! # Example
//!
//! Here's a solution for the textbook *Schaffer's Problem No.1*:
//! ```
//! use moead::{GenerationTerminator, Moead};
//!
//! // objective functions `f1(x) = x^2` and `f2(x) = (x - 2)^2`
//! let objectives = [
//!   |x: &[f64]| x[0].powi(2),
//!   |x: &[f64]| (x[0] - 2.0).powi(2),
//! ];
//! // the optimizer is built with compile time verification
//! // from the `typed-builder` crate
//! let mut optimizer = Moead::<2>::builder()
//!   .population_size(20)
//!   .neighbourhood_size(5)
//!   .mutation_strength(0.25)
//!   .lower_bound(vec![-10.0])
//!   .upper_bound(vec![10.0])
//!   .seed(42)
//!   .build();
//! // the run starts from an initial point and stops after 50 generations
//! optimizer
//!   .optimize(objectives, &[1.0], GenerationTerminator(50))
//!   .unwrap();
//! // the result is the front of non-dominated solutions found during the run
//! for entry in optimizer.front() {
//!   let [f1, f2] = entry.scores();
//!   println!("x = {:.3}: [{f1:.3}, {f2:.3}]", entry.point()[0]);
//! }
//! ```
//!
//! The optimizer reports its progress through the [log] facade, one `debug!`
//! line per generation; hook up any logger implementation to see it.
//!
//! [`GenerationTerminator`]: termination::GenerationTerminator
//! [`par_each()`]: execution::IntoPar::par_each
//! [`par_batch()`]: execution::IntoPar::par_batch
//! [rayon]: https://docs.rs/rayon
//! [log]: https://docs.rs/log

#![warn(missing_docs)]

pub mod archive;
mod bounds;
mod decomposition;
pub mod error;
pub mod execution;
pub mod objective;
pub mod optimizer;
mod population;
pub mod score;
pub mod termination;
mod variation;
mod weight;

pub use crate::{
  error::MoeadError,
  execution::IntoPar,
  optimizer::moead::Moead,
  termination::GenerationTerminator,
};
