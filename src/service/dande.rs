//! Dan de batch service.
//!
//! Validates a request, then runs `quantity` independent cascades over one
//! shared pool and resolved criteria.

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::domain::{
    Batch, BatchMetadata, Criteria, Draw, GenerateDanDeRequest, Ladder, ValidationError,
};
use crate::error::{AppError, Result};
use crate::service::cascade::LevelCascadeGenerator;
use crate::service::pool::BasePool;
use crate::service::resolver::ResolvedCriteria;

/// Service for dan de generation.
pub struct DanDeService {
    /// Request limits.
    limits: GenerationConfig,
}

impl DanDeService {
    /// Create a new dan de service.
    #[must_use]
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            limits: config.clone(),
        }
    }

    /// Validate a raw request into criteria.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the request is malformed, out of
    /// bounds or self-conflicting.
    pub fn validate(&self, request: &GenerateDanDeRequest) -> Result<Criteria> {
        Criteria::try_from_request(request, &self.limits).map_err(rejected)
    }

    /// Validate and generate in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or a generated draw is inconsistent.
    pub fn generate_from_request(&self, request: &GenerateDanDeRequest) -> Result<Batch> {
        let criteria = self.validate(request)?;
        self.generate(criteria)
    }

    /// Generate a batch with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `criteria` is out of bounds or
    /// self-conflicting, and [`AppError::Internal`] if a generated draw breaks
    /// a ladder invariant. No partial batch is returned.
    pub fn generate(&self, criteria: Criteria) -> Result<Batch> {
        self.generate_with_rng(criteria, &mut rand::rng())
    }

    /// Generate a batch with the given RNG.
    ///
    /// # Errors
    ///
    /// See [`DanDeService::generate`].
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        criteria: Criteria,
        rng: &mut R,
    ) -> Result<Batch> {
        criteria
            .check_quantity(self.limits.max_quantity)
            .and_then(|()| criteria.check_conflicts())
            .map_err(rejected)?;

        let pool = BasePool::for_criteria(&criteria);
        let resolved = ResolvedCriteria::for_pool(&criteria, &pool);
        let ladder = Ladder::for_pool_size(pool.len());
        let generator = LevelCascadeGenerator::new(&pool, &resolved, &ladder);

        debug!(
            quantity = criteria.quantity,
            pool_size = pool.len(),
            guaranteed = resolved.guaranteed.len(),
            weighted = resolved.weighted.len(),
            "Generating dan de batch"
        );

        let mut draws = Vec::with_capacity(criteria.quantity as usize);
        for _ in 0..criteria.quantity {
            let draw = generator.generate(rng);
            check_draw(&pool, &draw)?;
            draws.push(draw);
        }

        let total_selected = draws.iter().map(Draw::total_selected).sum();

        metrics::counter!("dande_batches_generated_total").increment(1);
        metrics::counter!("dande_numbers_selected_total").increment(total_selected as u64);
        metrics::histogram!("dande_batch_quantity").record(f64::from(criteria.quantity));

        Ok(Batch {
            draws,
            total_selected,
            criteria,
            timestamp: Utc::now(),
            metadata: BatchMetadata::new(ladder),
        })
    }
}

/// Count a rejected request and wrap the reason.
pub(crate) fn rejected(err: ValidationError) -> AppError {
    metrics::counter!("dande_validation_failures_total").increment(1);
    AppError::Validation(err)
}

/// Verify that a draw stays inside the pool and nests level by level.
fn check_draw(pool: &BasePool, draw: &Draw) -> Result<()> {
    for level in draw.levels() {
        if let Some(stray) = level.numbers.iter().find(|n| !pool.contains(**n)) {
            return Err(AppError::Internal(format!(
                "level {} selected {stray} outside the pool",
                level.target
            )));
        }
    }
    for pair in draw.levels().windows(2) {
        if !pair[0].is_subset_of(&pair[1]) {
            return Err(AppError::Internal(format!(
                "level {} is not contained in level {}",
                pair[0].target, pair[1].target
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Level, Number};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn n(v: u8) -> Number {
        Number::new(v).unwrap()
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    fn service() -> DanDeService {
        DanDeService::new(&GenerationConfig::default())
    }

    #[test]
    fn test_batch_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let batch = service()
            .generate_with_rng(Criteria::with_quantity(4), &mut rng)
            .unwrap();

        assert_eq!(batch.draws.len(), 4);
        assert_eq!(
            batch.metadata.level_counts.tiers(),
            &[8, 18, 28, 38, 48, 58, 68, 78, 88, 100]
        );
        let per_draw: usize = batch.metadata.level_counts.tiers().iter().sum();
        assert_eq!(batch.total_selected, per_draw * 4);
    }

    #[test]
    fn test_exclude_doubles_scenario() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut criteria = Criteria::with_quantity(3);
        criteria.exclude_doubles = true;

        let batch = service().generate_with_rng(criteria, &mut rng).unwrap();
        assert_eq!(batch.metadata.level_counts.last(), 90);
        for draw in &batch.draws {
            for level in draw.levels() {
                assert!(level.numbers.iter().all(|x| !x.is_double()));
            }
            assert_eq!(draw.levels().last().unwrap().numbers.len(), 90);
        }
    }

    #[test]
    fn test_draws_are_independent() {
        let mut rng = StdRng::seed_from_u64(21);
        let batch = service()
            .generate_with_rng(Criteria::with_quantity(10), &mut rng)
            .unwrap();

        let firsts: Vec<&Level> = batch.draws.iter().filter_map(|d| d.level(8)).collect();
        assert!(firsts.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_conflict_rejected_before_generation() {
        let request = GenerateDanDeRequest {
            quantity: Some(1),
            combination_numbers: Some(strings(&["07"])),
            exclude_numbers: Some(strings(&["07"])),
            ..Default::default()
        };
        let err = service().generate_from_request(&request).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InclusionExcluded(_))
        ));
    }

    #[test]
    fn test_unvalidated_conflict_rejected() {
        let mut criteria = Criteria::with_quantity(1);
        criteria.inclusion = vec![n(11)];
        criteria.exclude_doubles = true;
        assert!(service().generate(criteria).is_err());
    }

    #[test]
    fn test_unvalidated_quantity_rejected() {
        for quantity in [0, 51, 10_000] {
            let err = service()
                .generate(Criteria::with_quantity(quantity))
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    AppError::Validation(ValidationError::QuantityOutOfRange { .. })
                ),
                "quantity {quantity}"
            );
        }
        assert!(service().generate(Criteria::with_quantity(50)).is_ok());
    }

    #[test]
    fn test_check_draw_detects_broken_nesting() {
        let pool = BasePool::new(false, &[]);
        let draw = Draw::new(vec![
            Level {
                target: 1,
                numbers: vec![n(1)],
            },
            Level {
                target: 2,
                numbers: vec![n(2), n(3)],
            },
        ]);
        assert!(matches!(check_draw(&pool, &draw), Err(AppError::Internal(_))));

        let pool = BasePool::new(false, &[n(1)]);
        let draw = Draw::new(vec![Level {
            target: 1,
            numbers: vec![n(1)],
        }]);
        assert!(matches!(check_draw(&pool, &draw), Err(AppError::Internal(_))));
    }
}
