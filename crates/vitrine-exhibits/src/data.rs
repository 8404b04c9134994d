//! Deterministic sample datasets backing the built-in exhibits.
//!
//! Every generator is seeded, so repeated calls produce identical data and
//! tests can assert on exact values.  Nothing here touches the network or
//! the filesystem.

/// Small xorshift64* generator for sample data.
///
/// Not suitable for anything beyond demo datasets; the point is
/// determinism, not statistical quality.
#[derive(Debug, Clone)]
pub struct SampleRng(u64);

impl SampleRng {
    /// Create a generator from a seed.  A zero seed is remapped, since the
    /// xorshift state must be non-zero.
    pub fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[-1, 1)`.
    pub fn next_signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

/// Cumulative random walk: `len` points `(i, sum of steps so far)`.
pub fn random_walk(seed: u64, len: usize) -> Vec<(f64, f64)> {
    let mut rng = SampleRng::new(seed);
    let mut sum = 0.0;
    (0..len)
        .map(|i| {
            sum += rng.next_signed();
            (i as f64, sum)
        })
        .collect()
}

/// Olympic 100m sprint times (seconds) grouped by medal.
///
/// A small static stand-in for the classic sprint sample dataset.
pub fn sprint_times() -> &'static [(&'static str, &'static [f64])] {
    &[
        (
            "Gold",
            &[
                9.63, 9.69, 9.79, 9.81, 9.84, 9.85, 9.87, 9.92, 9.96, 9.99, 10.06, 10.25,
            ],
        ),
        (
            "Silver",
            &[
                9.75, 9.89, 9.91, 9.97, 9.99, 10.02, 10.08, 10.13, 10.19, 10.24, 10.32, 10.38,
            ],
        ),
        (
            "Bronze",
            &[
                9.79, 9.91, 10.04, 10.09, 10.11, 10.14, 10.22, 10.27, 10.33, 10.41, 10.46, 10.57,
            ],
        ),
    ]
}

/// Synthetic daily air-temperature series: `len` points `(day, °C)` with a
/// seasonal cycle plus noise.
pub fn temperature_series(seed: u64, len: usize) -> Vec<(f64, f64)> {
    let mut rng = SampleRng::new(seed);
    (0..len)
        .map(|i| {
            let day = i as f64;
            let seasonal = 10.0 * (std::f64::consts::TAU * day / 365.25).sin();
            let noise = 3.0 * rng.next_signed();
            (day, 15.0 + seasonal + noise)
        })
        .collect()
}

/// Centered rolling mean of the y values, keeping the x of each window's
/// last point.  Returns an empty vector when `window` is zero or larger
/// than the input.
pub fn rolling_mean(points: &[(f64, f64)], window: usize) -> Vec<(f64, f64)> {
    if window == 0 || window > points.len() {
        return Vec::new();
    }
    points
        .windows(window)
        .map(|w| {
            let mean = w.iter().map(|(_, y)| y).sum::<f64>() / window as f64;
            (w[window - 1].0, mean)
        })
        .collect()
}

/// Minimum and maximum y over a point set, padded by 10% of the span.
///
/// Falls back to `(0.0, 1.0)` for empty input so axes always have a valid
/// range.
pub fn y_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, y) in points {
        min = min.min(y);
        max = max.max(y);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.1).max(0.1);
    (min - pad, max + pad)
}
