//! Exponential Moving Average over a raw value slice.
//!
//! k = 2/(n+1), seed with the SMA of the first n values, then
//! EMA[i] = (V[i] - EMA[i-1]) * k + EMA[i-1].
//! Output has `values.len() - n + 1` entries; the first is the seed.

pub fn compute_ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len() - period + 1);

    let mut ema = values[..period].iter().sum::<f64>() / period as f64;
    out.push(ema);

    for &value in &values[period..] {
        ema = (value - ema) * k + ema;
        out.push(ema);
    }

    out
}
