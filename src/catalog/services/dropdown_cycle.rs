use super::cross_filter::CrossFilterEngine;
use crate::catalog::domain::{Dimension, FilterSelections, Project};
use serde::Serialize;

/// Upper bound on recompute passes. Clearing runs once and each auto-select
/// fills one empty dimension, so a fixed point is reached well before this.
const MAX_PASSES: usize = 9;

/// Which dropdowns are forced to their single compatible value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DropdownLocks([bool; 4]);

impl DropdownLocks {
    pub fn is_locked(&self, dimension: Dimension) -> bool {
        self.0[dimension.index()]
    }

    pub fn lock(&mut self, dimension: Dimension) {
        self.0[dimension.index()] = true;
    }

    pub fn unlock(&mut self, dimension: Dimension) {
        self.0[dimension.index()] = false;
    }

    pub fn clear(&mut self) {
        self.0 = [false; 4];
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|l| *l)
    }
}

/// Render state of one dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub dimension: Dimension,
    /// Compatible values in display order, not including the "all" entry
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub locked: bool,
    /// The previous selection was dropped as incompatible during this cycle
    pub reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownViewModel {
    pub views: Vec<DropdownView>,
    pub selections: FilterSelections,
    pub locks: DropdownLocks,
    pub combination_valid: bool,
}

impl DropdownViewModel {
    pub fn view(&self, dimension: Dimension) -> &DropdownView {
        &self.views[dimension.index()]
    }

    pub fn reset_dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.views.iter().filter(|v| v.reset).map(|v| v.dimension)
    }
}

/// DropdownCycle - Pure recompute step of the dropdown update cycle
///
/// Given the corpus, the current selections and locks, produces the next
/// view model:
/// - a selection missing from its dimension's compatible set is cleared,
///   unlocked and flagged `reset`
/// - an empty dimension with exactly one compatible option is auto-selected
///   and locked, one dimension per pass
///
/// Passes repeat until nothing changes, so feeding the output back in yields
/// the same options, selections and locks.
pub struct DropdownCycle;

impl DropdownCycle {
    pub fn recompute(
        projects: &[Project],
        selections: &FilterSelections,
        locks: &DropdownLocks,
    ) -> DropdownViewModel {
        let mut selections = selections.clone();
        let mut locks = *locks;
        let mut reset = [false; 4];

        for pass in 0..MAX_PASSES {
            let options = Self::options_for(projects, &selections);

            let incompatible: Vec<Dimension> = Dimension::ALL
                .into_iter()
                .filter(|d| {
                    selections
                        .get(*d)
                        .is_some_and(|s| !options[d.index()].iter().any(|o| o == s))
                })
                .collect();
            if !incompatible.is_empty() {
                for dimension in incompatible {
                    tracing::debug!(%dimension, pass, "Clearing incompatible selection");
                    selections.set(dimension, None);
                    locks.unlock(dimension);
                    reset[dimension.index()] = true;
                }
                continue;
            }

            let singleton = Dimension::ALL
                .into_iter()
                .find(|d| selections.get(*d).is_none() && options[d.index()].len() == 1);
            match singleton {
                Some(dimension) => {
                    let value = options[dimension.index()][0].clone();
                    tracing::debug!(%dimension, %value, pass, "Auto-selecting single compatible option");
                    selections.set(dimension, Some(value));
                    locks.lock(dimension);
                }
                None => break,
            }
        }

        let options = Self::options_for(projects, &selections);
        let views = Dimension::ALL
            .into_iter()
            .zip(options)
            .map(|(dimension, options)| DropdownView {
                dimension,
                options,
                selected: selections.get(dimension).map(str::to_string),
                locked: locks.is_locked(dimension),
                reset: reset[dimension.index()],
            })
            .collect();
        let combination_valid = CrossFilterEngine::validate_filter_combination(projects, &selections);

        DropdownViewModel {
            views,
            selections,
            locks,
            combination_valid,
        }
    }

    fn options_for(projects: &[Project], selections: &FilterSelections) -> [Vec<String>; 4] {
        Dimension::ALL.map(|d| CrossFilterEngine::compatible_options(projects, d, selections))
    }
}
