//! Multi-Objective Evolutionary Algorithm based on Decomposition.

use std::slice;

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use typed_builder::TypedBuilder;

use crate::{
  archive::{ParetoArchive, ParetoEntry},
  bounds::Bounds,
  decomposition::tchebycheff,
  error::MoeadError,
  objective::executor::ObjectiveExecutor,
  population::{validate_finite, Population},
  score::Score,
  termination::Terminator,
  variation::{crossover, mutate},
  weight::WeightVectors,
};

/// The MOEA/D optimizer.
///
/// Decomposes a problem of `OBJECTIVE_NUM` objectives into `population_size`
/// coupled single-objective subproblems, one weight vector each, and evolves
/// one candidate point per subproblem. Each generation sweeps the subproblems
/// in order: two parents drawn from the subproblem's weight neighbourhood
/// produce a child by crossover and mutation, and the child replaces every
/// neighbour it beats on that neighbour's Tchebycheff scalarization. Every
/// evaluated child is also offered to the archive of non-dominated solutions,
/// which is the actual optimization result.
///
/// The default parameter values are not necessarily suitable for a given
/// problem. It is highly recommended to adjust them instead.
///
/// # Examples
/// ```
/// use moead::{optimizer::moead::Moead, termination::GenerationTerminator};
///
/// // objective functions `f1(x) = x^2` and `f2(x) = (x - 2)^2`
/// let objectives = [
///   |x: &[f64]| x[0].powi(2),
///   |x: &[f64]| (x[0] - 2.0).powi(2),
/// ];
/// let mut optimizer = Moead::<2>::builder()
///   .population_size(20)
///   .neighbourhood_size(5)
///   .mutation_strength(0.25)
///   .lower_bound(vec![-10.0])
///   .upper_bound(vec![10.0])
///   .seed(42)
///   .build();
/// optimizer
///   .optimize(objectives, &[1.0], GenerationTerminator(50))
///   .unwrap();
/// assert!(!optimizer.front().is_empty());
/// ```
#[derive(TypedBuilder, Debug)]
pub struct Moead<const OBJECTIVE_NUM: usize> {
  #[builder(default = 100)]
  population_size: usize,
  #[builder(default = 0.6)]
  crossover_prob: f64,
  #[builder(default = 0.3)]
  mutation_prob: f64,
  #[builder(default = 1e-3)]
  mutation_strength: f64,
  #[builder(default = 50)]
  neighbourhood_size: usize,
  #[builder(default = vec![1.0])]
  lower_bound: Vec<f64>,
  #[builder(default = vec![1.0])]
  upper_bound: Vec<f64>,
  #[builder(default, setter(strip_option))]
  seed: Option<u64>,
  #[builder(setter(skip), default)]
  archive: ParetoArchive<OBJECTIVE_NUM>,
}

impl<const OBJECTIVE_NUM: usize> Moead<OBJECTIVE_NUM> {
  /// Optimizes given objectives, returning the lowest first objective value
  /// found on the front. The initial population is sampled around `iterate`.
  /// The full result is retrieved with [`front`](Moead::front).
  ///
  /// `terminator` is consulted once per generation, before the generation
  /// runs, with the whole population and its objective values; a started
  /// generation is never interrupted.
  pub fn optimize<Obj, Strategy, Ter>(
    &mut self,
    objectives: Obj,
    iterate: &[f64],
    mut terminator: Ter,
  ) -> Result<Score, MoeadError>
  where
    Obj: ObjectiveExecutor<OBJECTIVE_NUM, Strategy>,
    Ter: Terminator<OBJECTIVE_NUM>,
  {
    self.validate(iterate.len())?;
    let bounds =
      Bounds::resolve(&self.lower_bound, &self.upper_bound, iterate.len())?;
    let mut rng = match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let weights = WeightVectors::<OBJECTIVE_NUM>::new(
      self.population_size,
      self.neighbourhood_size,
      &mut rng,
    )?;
    let mut population = Population::<OBJECTIVE_NUM>::initialize(
      iterate,
      &bounds,
      self.population_size,
      &mut rng,
    );
    population.evaluate(&objectives)?;

    self.archive.clear();
    for i in 0..self.population_size {
      self
        .archive
        .update(population.point(i).to_vec(), *population.score(i));
    }

    let mut generation = 0_usize;
    while !terminator.terminate(population.points(), population.scores()) {
      for i in 0..self.population_size {
        let neighbourhood = weights.neighbourhood(i);
        let (a, b) = pick_parents(neighbourhood, &mut rng);
        let mut child = crossover(
          population.point(a),
          population.point(b),
          self.crossover_prob,
          &mut rng,
        );
        mutate(
          &mut child,
          &bounds,
          self.mutation_prob,
          self.mutation_strength,
          &mut rng,
        );

        let child_scores = objectives
          .execute_evaluation(slice::from_ref(&child))
          .pop()
          .expect("objective executor must return one score array per point");
        validate_finite(&child_scores)?;
        population.update_ideal(&child_scores);

        // a single child may replace several neighbours
        for &j in neighbourhood {
          let weight = weights.weight(j);
          let incumbent =
            tchebycheff(weight, population.ideal(), population.score(j));
          let challenger =
            tchebycheff(weight, population.ideal(), &child_scores);
          if challenger <= incumbent {
            trace!("subproblem {j} adopts the child of parents {a} and {b}");
            population.replace(j, child.clone(), child_scores);
          }
        }
        self.archive.update(child, child_scores);
      }
      generation += 1;
      debug!(
        "generation {generation}: front holds {} entries, ideal point {:?}",
        self.archive.len(),
        population.ideal(),
      );
    }

    Ok(
      self
        .archive
        .entries()
        .iter()
        .map(|e| e.scores()[0])
        .fold(Score::INFINITY, Score::min),
    )
  }

  fn validate(&self, dimension: usize) -> Result<(), MoeadError> {
    if OBJECTIVE_NUM == 0 {
      return Err(MoeadError::NoObjectives);
    }
    if dimension == 0 {
      return Err(MoeadError::EmptyIterate);
    }
    for (name, value) in [
      ("crossover", self.crossover_prob),
      ("mutation", self.mutation_prob),
    ] {
      if !(0.0..=1.0).contains(&value) {
        return Err(MoeadError::InvalidProbability { name, value });
      }
    }
    Ok(())
  }

  /// The best front found by the last [`optimize`](Moead::optimize) call.
  /// Empty until `optimize` has been called.
  pub fn front(&self) -> &[ParetoEntry<OBJECTIVE_NUM>] {
    self.archive.entries()
  }

  /// Get the population size.
  pub fn population_size(&self) -> usize {
    self.population_size
  }

  /// Modify the population size.
  pub fn set_population_size(&mut self, population_size: usize) {
    self.population_size = population_size;
  }

  /// Get the crossover probability.
  pub fn crossover_prob(&self) -> f64 {
    self.crossover_prob
  }

  /// Modify the crossover probability.
  pub fn set_crossover_prob(&mut self, crossover_prob: f64) {
    self.crossover_prob = crossover_prob;
  }

  /// Get the mutation probability.
  pub fn mutation_prob(&self) -> f64 {
    self.mutation_prob
  }

  /// Modify the mutation probability.
  pub fn set_mutation_prob(&mut self, mutation_prob: f64) {
    self.mutation_prob = mutation_prob;
  }

  /// Get the mutation strength.
  pub fn mutation_strength(&self) -> f64 {
    self.mutation_strength
  }

  /// Modify the mutation strength.
  pub fn set_mutation_strength(&mut self, mutation_strength: f64) {
    self.mutation_strength = mutation_strength;
  }

  /// Get the size of the weight neighbourhood.
  pub fn neighbourhood_size(&self) -> usize {
    self.neighbourhood_size
  }

  /// Modify the size of the weight neighbourhood.
  pub fn set_neighbourhood_size(&mut self, neighbourhood_size: usize) {
    self.neighbourhood_size = neighbourhood_size;
  }

  /// Get the lower bound on each variable.
  pub fn lower_bound(&self) -> &[f64] {
    &self.lower_bound
  }

  /// Modify the lower bound on each variable.
  pub fn set_lower_bound(&mut self, lower_bound: Vec<f64>) {
    self.lower_bound = lower_bound;
  }

  /// Get the upper bound on each variable.
  pub fn upper_bound(&self) -> &[f64] {
    &self.upper_bound
  }

  /// Modify the upper bound on each variable.
  pub fn set_upper_bound(&mut self, upper_bound: Vec<f64>) {
    self.upper_bound = upper_bound;
  }

  /// Get the random stream seed. `None` means the stream is seeded from
  /// entropy on every run.
  pub fn seed(&self) -> Option<u64> {
    self.seed
  }

  /// Modify the random stream seed.
  pub fn set_seed(&mut self, seed: Option<u64>) {
    self.seed = seed;
  }
}

/// Picks two distinct parent indices from a neighbourhood. Relies on the
/// neighbourhood holding at least two distinct indices, which configuration
/// validation guarantees.
fn pick_parents(neighbourhood: &[usize], rng: &mut impl Rng) -> (usize, usize) {
  let first = neighbourhood[rng.gen_range(0..neighbourhood.len())];
  loop {
    let second = neighbourhood[rng.gen_range(0..neighbourhood.len())];
    if second != first {
      return (first, second);
    }
  }
}
