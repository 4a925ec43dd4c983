//! Distribution-preserving sampling for finetune-prep.
//!
//! A stratified sample keeps the share of `true` rows in a boolean category
//! column: a sample of size `n` drawn from `D` holds exactly
//! `floor(n * count_true(D) / |D|)` true rows, and the remaining
//! `n - true_count` rows are false. True rows come first, then false rows;
//! within each group rows appear in the order they were drawn.
//!
//! The algorithm works on row positions ([`stratified_indices`],
//! [`split_indices`]). Any table type implementing [`Stratify`] gets
//! [`downsample`] and [`train_validation_split`] on top of it.
//!
//! ```rust
//! use finetune_prep::sampling::stratified_indices;
//!
//! let categories: Vec<bool> = (0..100).map(|i| i < 60).collect();
//! let sample = stratified_indices(&categories, 10, 42)?;
//! assert_eq!(sample.len(), 10);
//! assert_eq!(sample.iter().filter(|&&i| categories[i]).count(), 6);
//! # Ok::<(), finetune_prep::PrepError>(())
//! ```

mod sampler;

pub use sampler::StratifiedSampler;

use crate::core::error::{PrepError, Result};
use crate::core::random::{draw_without_replacement, seeded_rng};
use crate::core::types::{Category, Seed};
use serde::{Deserialize, Serialize};

/// A table that can be stratified on a boolean column.
pub trait Stratify {
    /// Number of rows
    fn num_rows(&self) -> usize;

    /// Category value of every row, in table order.
    ///
    /// Fails with `InvalidArgument` if the column is missing or holds
    /// anything other than booleans.
    fn category_values(&self, field: &str) -> Result<Vec<bool>>;

    /// New table of the rows at `positions`, in that order
    fn select_rows(&self, positions: &[usize]) -> Result<Self>
    where
        Self: Sized;
}

/// A disjoint pair of samples drawn from one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    /// Training sample
    pub train: T,
    /// Validation sample, drawn from what the training sample left behind
    pub validation: T,
}

impl<T> Split<T> {
    /// Consume the split into `(train, validation)`
    pub fn into_parts(self) -> (T, T) {
        (self.train, self.validation)
    }

    /// Apply `f` to both halves
    pub fn try_map<U, F>(self, mut f: F) -> Result<Split<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        Ok(Split {
            train: f(self.train)?,
            validation: f(self.validation)?,
        })
    }
}

/// How many rows of each category a sample takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePlan {
    /// Rows drawn from the `true` subset
    pub true_count: usize,
    /// Rows drawn from the `false` subset
    pub false_count: usize,
}

impl SamplePlan {
    /// Plan a sample of `sample_size` rows over the given categories.
    pub fn compute(categories: &[bool], sample_size: usize) -> Result<Self> {
        let total = categories.len();
        if sample_size > total {
            return Err(PrepError::invalid_argument(format!(
                "sample size {} exceeds the {} available rows",
                sample_size, total
            )));
        }

        let available_true = categories.iter().filter(|&&c| c).count();
        let available_false = total - available_true;

        let true_count = if total == 0 {
            0
        } else {
            (sample_size as u128 * available_true as u128 / total as u128) as usize
        };
        let false_count = sample_size - true_count;

        if true_count > available_true {
            return Err(PrepError::invalid_argument(format!(
                "category true needs {} rows but only {} are available",
                true_count, available_true
            )));
        }
        if false_count > available_false {
            return Err(PrepError::invalid_argument(format!(
                "category false needs {} rows but only {} are available",
                false_count, available_false
            )));
        }

        Ok(SamplePlan {
            true_count,
            false_count,
        })
    }

    /// Rows planned for one category
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::True => self.true_count,
            Category::False => self.false_count,
        }
    }

    /// Total planned sample size
    pub fn total(&self) -> usize {
        self.true_count + self.false_count
    }
}

/// Positions of a distribution-preserving sample of `sample_size` rows.
///
/// The true sample is drawn first, then the false sample, both from one
/// generator seeded with `seed`.
pub fn stratified_indices(categories: &[bool], sample_size: usize, seed: Seed) -> Result<Vec<usize>> {
    let plan = SamplePlan::compute(categories, sample_size)?;
    log::debug!(
        "Stratified sample of {} from {} rows: {} true, {} false (seed {})",
        sample_size,
        categories.len(),
        plan.true_count,
        plan.false_count,
        seed
    );

    let (true_rows, false_rows): (Vec<usize>, Vec<usize>) =
        (0..categories.len()).partition(|&i| categories[i]);

    let mut rng = seeded_rng(seed);
    let mut sample = draw_without_replacement(&mut rng, &true_rows, plan.true_count);
    sample.extend(draw_without_replacement(
        &mut rng,
        &false_rows,
        plan.false_count,
    ));
    Ok(sample)
}

/// Positions of disjoint train and validation samples.
///
/// The validation sample is drawn from the rows the training sample did not
/// take, kept in their original order, with the same seed.
pub fn split_indices(
    categories: &[bool],
    train_size: usize,
    validation_size: usize,
    seed: Seed,
) -> Result<Split<Vec<usize>>> {
    let requested = train_size.checked_add(validation_size).ok_or_else(|| {
        PrepError::invalid_argument("train size plus validation size overflows")
    })?;
    if requested > categories.len() {
        return Err(PrepError::invalid_argument(format!(
            "train size {} plus validation size {} exceeds the {} available rows",
            train_size,
            validation_size,
            categories.len()
        )));
    }

    let train = stratified_indices(categories, train_size, seed)?;

    let mut taken = vec![false; categories.len()];
    for &i in &train {
        taken[i] = true;
    }
    let remainder: Vec<usize> = (0..categories.len()).filter(|&i| !taken[i]).collect();
    let remainder_categories: Vec<bool> = remainder.iter().map(|&i| categories[i]).collect();

    let validation = stratified_indices(&remainder_categories, validation_size, seed)?
        .into_iter()
        .map(|i| remainder[i])
        .collect();

    Ok(Split { train, validation })
}

/// Distribution-preserving sample of `sample_size` rows of `dataset`.
///
/// Fails with `InvalidArgument` when `sample_size` exceeds the number of
/// rows or the category column is missing or not boolean.
pub fn downsample<D: Stratify>(dataset: &D, field: &str, sample_size: usize, seed: Seed) -> Result<D> {
    let categories = dataset.category_values(field)?;
    let positions = stratified_indices(&categories, sample_size, seed)?;
    dataset.select_rows(&positions)
}

/// Disjoint, individually distribution-preserving train and validation
/// samples of `dataset`.
pub fn train_validation_split<D: Stratify>(
    dataset: &D,
    field: &str,
    train_size: usize,
    validation_size: usize,
    seed: Seed,
) -> Result<Split<D>> {
    let categories = dataset.category_values(field)?;
    let split = split_indices(&categories, train_size, validation_size, seed)?;
    log::info!(
        "Split {} rows on '{}': {} train, {} validation",
        dataset.num_rows(),
        field,
        split.train.len(),
        split.validation.len()
    );
    split.try_map(|positions| dataset.select_rows(&positions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn categories(num_true: usize, num_false: usize) -> Vec<bool> {
        // Interleave so that positions do not trivially reveal categories
        let mut out = Vec::with_capacity(num_true + num_false);
        let (mut t, mut f) = (num_true, num_false);
        while t > 0 || f > 0 {
            if t > 0 {
                out.push(true);
                t -= 1;
            }
            if f > 0 {
                out.push(false);
                f -= 1;
            }
        }
        out
    }

    #[test]
    fn test_plan_sixty_forty() {
        let plan = SamplePlan::compute(&categories(60, 40), 10).unwrap();
        assert_eq!(plan.true_count, 6);
        assert_eq!(plan.false_count, 4);
        assert_eq!(plan.count(Category::True), 6);
        assert_eq!(plan.total(), 10);
    }

    #[test]
    fn test_plan_rounds_true_count_down() {
        // 7 * 1 / 3 = 2.33 -> 2 true, 5 false
        let plan = SamplePlan::compute(&categories(1, 2).repeat(3), 7).unwrap();
        assert_eq!(plan.true_count, 2);
        assert_eq!(plan.false_count, 5);
    }

    #[test]
    fn test_plan_rejects_oversized_sample() {
        let err = SamplePlan::compute(&categories(3, 3), 7).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_categories() {
        assert!(stratified_indices(&[], 0, 1).unwrap().is_empty());
        assert!(stratified_indices(&[], 1, 1).is_err());
    }

    #[test]
    fn test_single_valued_column() {
        let all_true = vec![true; 20];
        let sample = stratified_indices(&all_true, 5, 3).unwrap();
        assert_eq!(sample.len(), 5);

        let all_false = vec![false; 20];
        let sample = stratified_indices(&all_false, 20, 3).unwrap();
        let unique: HashSet<_> = sample.into_iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_true_rows_come_first() {
        let cats = categories(60, 40);
        let sample = stratified_indices(&cats, 10, 42).unwrap();
        let flags: Vec<bool> = sample.iter().map(|&i| cats[i]).collect();
        assert_eq!(flags, vec![true, true, true, true, true, true, false, false, false, false]);
    }

    #[test]
    fn test_determinism() {
        let cats = categories(60, 40);
        let a = stratified_indices(&cats, 25, 1234).unwrap();
        let b = stratified_indices(&cats, 25, 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_disjoint() {
        let cats = categories(60, 40);
        let split = split_indices(&cats, 10, 5, 42).unwrap();
        assert_eq!(split.train.len(), 10);
        assert_eq!(split.validation.len(), 5);

        let train: HashSet<_> = split.train.iter().copied().collect();
        assert!(split.validation.iter().all(|i| !train.contains(i)));
    }

    #[test]
    fn test_split_size_check() {
        let cats = categories(5, 5);
        assert!(split_indices(&cats, 6, 5, 0).unwrap_err().is_invalid_argument());
        assert!(split_indices(&cats, usize::MAX, 1, 0).is_err());
        assert!(split_indices(&cats, 5, 5, 0).is_ok());
    }

    #[test]
    fn test_split_validation_is_stratified_on_remainder() {
        // 100 rows, 60 true: train takes 6 true / 4 false, remainder is 54 / 36
        // and a validation sample of 30 takes floor(30 * 54 / 90) = 18 true.
        let cats = categories(60, 40);
        let split = split_indices(&cats, 10, 30, 9).unwrap();
        let validation_true = split.validation.iter().filter(|&&i| cats[i]).count();
        assert_eq!(validation_true, 18);
    }
}
