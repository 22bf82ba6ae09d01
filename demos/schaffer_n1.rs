//! Schaffer's Problem No.1 solution using MOEA/D.

use std::{fs::File, io::Write, path::Path};

use moead::{GenerationTerminator, Moead};
use rand::seq::IteratorRandom;

fn main() {
  // objective functions `f1(x) = x^2` and `f2(x) = (x - 2)^2`
  let objectives = [
    |x: &[f64]| x[0].powi(2),
    |x: &[f64]| (x[0] - 2.0).powi(2),
  ];

  // a convinient builder with compile time verification from `typed-builder` crate
  let mut optimizer = Moead::<2>::builder()
    .population_size(50)
    .neighbourhood_size(10)
    .mutation_prob(0.4)
    .mutation_strength(0.25)
    .lower_bound(vec![-10.0])
    .upper_bound(vec![10.0])
    .seed(42)
    .build();

  // upon termination the front of non-dominated solutions is kept
  optimizer
    .optimize(objectives, &[1.0], GenerationTerminator(100))
    .unwrap();

  // write the front to file in demos/schaffer_n1.csv
  let _ = File::create(Path::new(file!()).with_file_name("schaffer_n1.csv"))
    .unwrap()
    .write_all(
      optimizer
        .front()
        .iter()
        .map(|e| format!("{} {}", e.scores()[0], e.scores()[1]))
        .collect::<Vec<_>>()
        .join("\n")
        .as_bytes(),
    );

  // print 10 random front members
  for entry in optimizer
    .front()
    .iter()
    .choose_multiple(&mut rand::thread_rng(), 10)
  {
    println!("{:.4}", entry.point()[0]);
  }
  println!("  ...  ");
}
