//! Global warming potential selection.

use crate::categories::Gas;
use crate::FloatValue;

/// The only GWP time horizon with published coefficients in the configuration
pub const SUPPORTED_TIME_HORIZON: u32 = 100;

/// Resolve the GWP for a time horizon.
///
/// Only the 100-year GWP is available. Other horizons are accepted and resolve to the
/// 100-year value with a warning.
pub fn resolve_gwp(gas: Gas, gwp100: FloatValue, time_horizon: u32) -> FloatValue {
    if time_horizon != SUPPORTED_TIME_HORIZON {
        log::warn!(
            "Currently, the tool supports time horizon of {} years only. Using {} GWP100 for a horizon of {} years.",
            SUPPORTED_TIME_HORIZON,
            gas,
            time_horizon
        );
    }
    gwp100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_horizon_resolves_to_gwp100() {
        assert_eq!(resolve_gwp(Gas::Methane, 34.0, 100), 34.0);
        assert_eq!(resolve_gwp(Gas::Methane, 34.0, 20), 34.0);
        assert_eq!(resolve_gwp(Gas::CarbonDioxide, 1.0, 500), 1.0);
    }
}
