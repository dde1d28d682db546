//! Question pool of map targets and capitals
//!
//! A `Catalog` is built once from external data and then handed to whoever
//! asks questions. It is never mutated while questions are evaluated.

use crate::answer::WRONG_CHOICES;
use crate::error::{Error, Result, Warning};
use crate::types::{Capital, CapitalDirection, GeographyKind, GeographyTarget, SchoolLevel};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Read-only collection of quiz records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    targets: Vec<GeographyTarget>,
    capitals: Vec<Capital>,
    ids: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, skipping records that can't be used
    ///
    /// Targets failing validation and records with an id that was already
    /// seen are dropped, and a warning is pushed for each of them.
    pub fn from_records<T, C>(targets: T, capitals: C, warnings: &mut Vec<Warning>) -> Self
    where
        T: IntoIterator<Item = GeographyTarget>,
        C: IntoIterator<Item = Capital>,
    {
        let mut catalog = Self::new();
        let already_warned = warnings.len();

        for target in targets {
            let id = target.id.clone();
            if let Err(err) = catalog.insert_target(target) {
                tracing::debug!(%id, %err, "skipping target");
                warnings.push(warning_for(id, err));
            }
        }

        for capital in capitals {
            let id = capital.id.clone();
            if let Err(err) = catalog.insert_capital(capital) {
                tracing::debug!(%id, %err, "skipping capital");
                warnings.push(warning_for(id, err));
            }
        }

        tracing::debug!(
            targets = catalog.targets.len(),
            capitals = catalog.capitals.len(),
            skipped = warnings.len() - already_warned,
            "catalog built"
        );
        catalog
    }

    /// Add a map target
    ///
    /// # Errors
    ///
    /// Validation errors from [`GeographyTarget::validate`], or
    /// `DuplicateId` if the id is already taken.
    pub fn insert_target(&mut self, target: GeographyTarget) -> Result<()> {
        target.validate()?;
        self.claim_id(&target.id)?;
        self.targets.push(target);
        Ok(())
    }

    /// Add a capital
    ///
    /// # Errors
    ///
    /// `CoordinateOutOfRange` for an invalid location, or `DuplicateId` if
    /// the id is already taken.
    pub fn insert_capital(&mut self, capital: Capital) -> Result<()> {
        if !capital.point.is_valid() {
            return Err(Error::CoordinateOutOfRange {
                point: capital.point,
            });
        }
        self.claim_id(&capital.id)?;
        self.capitals.push(capital);
        Ok(())
    }

    fn claim_id(&mut self, id: &str) -> Result<()> {
        if !self.ids.insert(id.to_string()) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.targets.len() + self.capitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn target(&self, id: &str) -> Option<&GeographyTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn capital(&self, id: &str) -> Option<&Capital> {
        self.capitals.iter().find(|c| c.id == id)
    }

    /// Targets in the question pool of `level`, in insertion order
    pub fn targets(&self, level: SchoolLevel) -> impl Iterator<Item = &GeographyTarget> {
        self.targets.iter().filter(move |t| level.includes(t.level))
    }

    /// Targets of one kind in the question pool of `level`
    pub fn targets_of_kind(
        &self,
        level: SchoolLevel,
        kind: GeographyKind,
    ) -> impl Iterator<Item = &GeographyTarget> {
        self.targets(level).filter(move |t| t.kind == kind)
    }

    /// Capitals in the question pool of `level`, in insertion order
    pub fn capitals(&self, level: SchoolLevel) -> impl Iterator<Item = &Capital> {
        self.capitals.iter().filter(move |c| level.includes(c.level))
    }

    /// Up to `count` distinct random targets for `level`
    pub fn random_targets<R: Rng + ?Sized>(
        &self,
        count: usize,
        level: SchoolLevel,
        rng: &mut R,
    ) -> Vec<&GeographyTarget> {
        let pool: Vec<_> = self.targets(level).collect();
        pool.choose_multiple(rng, count).copied().collect()
    }

    /// Up to `count` distinct random capitals for `level`
    pub fn random_capitals<R: Rng + ?Sized>(
        &self,
        count: usize,
        level: SchoolLevel,
        rng: &mut R,
    ) -> Vec<&Capital> {
        let pool: Vec<_> = self.capitals(level).collect();
        pool.choose_multiple(rng, count).copied().collect()
    }

    /// Shuffled answer options for a multiple-choice capitals question
    ///
    /// Up to [`WRONG_CHOICES`] distinct wrong answers are drawn from the
    /// question pool of `level` and mixed with the correct one. Small pools
    /// yield fewer options.
    pub fn multiple_choice_options<'a, R: Rng + ?Sized>(
        &'a self,
        question: &'a Capital,
        direction: CapitalDirection,
        level: SchoolLevel,
        rng: &mut R,
    ) -> Vec<&'a str> {
        let correct = question.answer(direction);

        let mut wrong: Vec<&str> = self
            .capitals(level)
            .map(|c| c.answer(direction))
            .filter(|answer| *answer != correct)
            .collect();
        wrong.sort_unstable();
        wrong.dedup();

        let mut options: Vec<&str> = wrong.choose_multiple(rng, WRONG_CHOICES).copied().collect();
        options.push(correct);
        options.shuffle(rng);
        options
    }
}

fn warning_for(id: String, err: Error) -> Warning {
    match err {
        Error::DuplicateId(_) => Warning::DuplicateRecord { id },
        other => Warning::InvalidRecord {
            id,
            reason: other.to_string(),
        },
    }
}
