//! RSI (Relative Strength Index) indicator

pub const DEFAULT_PERIOD: usize = 14;

/// Calculate RSI over a series of closes using Wilder smoothing
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Smoothed Average Gain / Smoothed Average Loss
///
/// Gains and losses are smoothed with `alpha = 1 / period`, starting from
/// zero, across every close-to-close change in the series. The first close
/// counts as a zero change, so `period` closes are enough for a value.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let alpha = 1.0 / period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, change.abs())
        };
        avg_gain = (1.0 - alpha) * avg_gain + alpha * gain;
        avg_loss = (1.0 - alpha) * avg_loss + alpha * loss;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Option<f64> {
    calculate_rsi(closes, DEFAULT_PERIOD)
}
