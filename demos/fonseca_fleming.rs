//! Fonseca-Fleming problem solution using MOEA/D.

use moead::{GenerationTerminator, IntoPar, Moead};

fn main() {
  // both objectives measure the distance to one of two symmetric points
  // `(1/sqrt(3), ...)` and `(-1/sqrt(3), ...)`, squashed into [0, 1)
  let offset = 3.0_f64.sqrt().recip();
  let objectives = move |x: &[f64]| {
    let towards: f64 = x.iter().map(|xi| (xi - offset).powi(2)).sum();
    let away: f64 = x.iter().map(|xi| (xi + offset).powi(2)).sum();
    [1.0 - (-towards).exp(), 1.0 - (-away).exp()]
  };

  let mut optimizer = Moead::<2>::builder()
    .population_size(100)
    .neighbourhood_size(20)
    .mutation_prob(0.5)
    .mutation_strength(0.1)
    .lower_bound(vec![-4.0])
    .upper_bound(vec![4.0])
    .seed(0)
    .build();

  // the initial population evaluation runs concurrently for each batch of points
  optimizer
    .optimize(objectives.par_batch(), &[0.0, 0.0, 0.0], GenerationTerminator(200))
    .unwrap();

  println!("found {} non-dominated solutions", optimizer.front().len());
  for entry in optimizer.front().iter().take(10) {
    let [f1, f2] = entry.scores();
    println!(
      "({:>6.3}, {:>6.3}, {:>6.3}) -> [{f1:.3}, {f2:.3}]",
      entry.point()[0],
      entry.point()[1],
      entry.point()[2],
    );
  }
  println!("  ...  ");
}
