//! Shell-side view of `okz-config`: locating the config file and turning
//! budget preferences into core types.

use std::path::PathBuf;

use okz_config::{BudgetPreferences, Config, ConfigManager};
use okz_core::{BudgetDraft, BudgetLimits, BudgetRange};
use tracing::warn;

use crate::errors::AppError;

pub fn manager_with_base(base: PathBuf) -> Result<ConfigManager, AppError> {
    Ok(ConfigManager::with_base_dir(base)?)
}

/// Slider envelope from the config, or the built-in one when the stored
/// values are unusable.
pub fn budget_limits(config: &Config) -> BudgetLimits {
    let prefs: &BudgetPreferences = &config.budget;
    match BudgetLimits::new(prefs.floor, prefs.ceiling) {
        Ok(limits) => limits,
        Err(err) => {
            warn!(
                floor = prefs.floor,
                ceiling = prefs.ceiling,
                "ignoring budget envelope: {err}"
            );
            BudgetLimits::default()
        }
    }
}

/// Budget-setting state the shell starts with.
pub fn initial_draft(config: &Config) -> Result<BudgetDraft, AppError> {
    let limits = budget_limits(config);
    let prefs = &config.budget;
    let range = limits
        .range(prefs.default_min, prefs.default_max)
        .or_else(|err| {
            warn!(
                min = prefs.default_min,
                max = prefs.default_max,
                "default range outside envelope: {err}"
            );
            BudgetRange::new(limits.floor(), limits.ceiling())
        })?;
    Ok(BudgetDraft::new(limits, range)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_yields_default_draft() {
        let draft = initial_draft(&Config::default()).expect("draft");
        assert_eq!(draft.range().min(), 1_000);
        assert_eq!(draft.range().max(), 5_000);
        assert_eq!(draft.resolved(), None);
    }

    #[test]
    fn inverted_envelope_falls_back_to_defaults() {
        let mut config = Config::default();
        config.budget.floor = 9_000;
        config.budget.ceiling = 100;
        let limits = budget_limits(&config);
        assert_eq!(limits, BudgetLimits::default());
    }

    #[test]
    fn out_of_envelope_default_range_spans_the_envelope() {
        let mut config = Config::default();
        config.budget.default_min = 100;
        config.budget.default_max = 200;
        let draft = initial_draft(&config).expect("draft");
        assert_eq!(draft.range().min(), 500);
        assert_eq!(draft.range().max(), 10_000);
    }
}
