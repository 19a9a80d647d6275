//! Naive separable inverse 2D discrete Fourier transform.
//!
//! Two passes of a direct 1D transform with a positive exponent and no
//! 1/N² normalisation (the visual height scale absorbs it). O(N³) overall,
//! meant for grids of a few dozen samples per axis.
//!
//! With the `parallel` feature the row pass runs rows concurrently and the
//! column pass runs output rows concurrently. Every output element is summed
//! in the same order either way, so both paths agree bit for bit.

use rustfft::num_complex::Complex32;
use std::f32::consts::PI;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inverse transform for an N×N row-major field
#[derive(Debug, Clone)]
pub struct SeparableInverseTransform {
    n: usize,
    /// e^{i2πj/N} for j in 0..N
    twiddles: Vec<Complex32>,
}

impl SeparableInverseTransform {
    pub fn new(n: usize) -> Self {
        let n = n.max(1);
        let twiddles = (0..n)
            .map(|j| {
                let angle = 2.0 * PI * j as f32 / n as f32;
                Complex32::new(angle.cos(), angle.sin())
            })
            .collect();
        Self { n, twiddles }
    }

    /// Full 2D transform: row pass into one buffer, column pass into another
    ///
    /// An input shorter than N² yields an all-zero field.
    pub fn process(&self, input: &[Complex32]) -> Vec<Complex32> {
        let rows = self.row_pass(input);
        self.column_pass(&rows)
    }

    /// `out[r, x] = Σ_k in[r, k] · e^{i2πkx/N}`
    pub fn row_pass(&self, input: &[Complex32]) -> Vec<Complex32> {
        let n = self.n;
        let mut output = vec![Complex32::new(0.0, 0.0); n * n];
        if input.len() < n * n {
            log::debug!("row pass input has {} samples, need {}", input.len(), n * n);
            return output;
        }

        let transform_row = |(r, out_row): (usize, &mut [Complex32])| {
            let in_row = &input[r * n..(r + 1) * n];
            for (x, out) in out_row.iter_mut().enumerate() {
                *out = in_row
                    .iter()
                    .enumerate()
                    .fold(Complex32::new(0.0, 0.0), |sum, (k, value)| {
                        sum + value * self.twiddles[(k * x) % n]
                    });
            }
        };

        #[cfg(feature = "parallel")]
        output.par_chunks_mut(n).enumerate().for_each(transform_row);
        #[cfg(not(feature = "parallel"))]
        output.chunks_mut(n).enumerate().for_each(transform_row);

        output
    }

    /// `out[y, c] = Σ_k in[k, c] · e^{i2πky/N}`
    pub fn column_pass(&self, rows: &[Complex32]) -> Vec<Complex32> {
        let n = self.n;
        let mut output = vec![Complex32::new(0.0, 0.0); n * n];
        if rows.len() < n * n {
            log::debug!("column pass input has {} samples, need {}", rows.len(), n * n);
            return output;
        }

        let transform_output_row = |(y, out_row): (usize, &mut [Complex32])| {
            for (c, out) in out_row.iter_mut().enumerate() {
                *out = (0..n).fold(Complex32::new(0.0, 0.0), |sum, k| {
                    sum + rows[k * n + c] * self.twiddles[(k * y) % n]
                });
            }
        };

        #[cfg(feature = "parallel")]
        output
            .par_chunks_mut(n)
            .enumerate()
            .for_each(transform_output_row);
        #[cfg(not(feature = "parallel"))]
        output
            .chunks_mut(n)
            .enumerate()
            .for_each(transform_output_row);

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::{FftDirection, FftPlanner};

    fn sample_field(n: usize) -> Vec<Complex32> {
        (0..n * n)
            .map(|i| {
                let x = i as f32;
                Complex32::new((x * 0.37).sin(), (x * 0.11).cos() - 0.5)
            })
            .collect()
    }

    /// Unnormalised inverse 2D transform via rustfft, rows then columns
    fn reference_inverse(input: &[Complex32], n: usize) -> Vec<Complex32> {
        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft(n, FftDirection::Inverse);
        let mut data = input.to_vec();
        for row in data.chunks_mut(n) {
            fft.process(row);
        }
        let mut column = vec![Complex32::new(0.0, 0.0); n];
        for c in 0..n {
            for r in 0..n {
                column[r] = data[r * n + c];
            }
            fft.process(&mut column);
            for r in 0..n {
                data[r * n + c] = column[r];
            }
        }
        data
    }

    /// Direct row-then-column loops, summing each element in k order
    fn loop_inverse(transform: &SeparableInverseTransform, input: &[Complex32]) -> Vec<Complex32> {
        let n = transform.n;
        let tw = &transform.twiddles;
        let mut rows = vec![Complex32::new(0.0, 0.0); n * n];
        for r in 0..n {
            for x in 0..n {
                let mut sum = Complex32::new(0.0, 0.0);
                for k in 0..n {
                    sum = sum + input[r * n + k] * tw[(k * x) % n];
                }
                rows[r * n + x] = sum;
            }
        }
        let mut output = vec![Complex32::new(0.0, 0.0); n * n];
        for y in 0..n {
            for c in 0..n {
                let mut sum = Complex32::new(0.0, 0.0);
                for k in 0..n {
                    sum = sum + rows[k * n + c] * tw[(k * y) % n];
                }
                output[y * n + c] = sum;
            }
        }
        output
    }

    // Runs under both feature sets: with `parallel` it pins the rayon passes
    // to the serial summation order.
    #[test]
    fn test_matches_serial_loops_exactly() {
        for n in [1, 5, 16, 33] {
            let transform = SeparableInverseTransform::new(n);
            let input = sample_field(n);
            assert_eq!(transform.process(&input), loop_inverse(&transform, &input), "n={}", n);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_passes_are_deterministic() {
        let transform = SeparableInverseTransform::new(24);
        let input = sample_field(24);
        let first = transform.process(&input);
        for _ in 0..4 {
            assert_eq!(transform.process(&input), first);
        }
    }

    #[test]
    fn test_dc_only_input_gives_flat_field() {
        let n = 16;
        let mut input = vec![Complex32::new(0.0, 0.0); n * n];
        input[0] = Complex32::new(2.5, -1.0);

        let output = SeparableInverseTransform::new(n).process(&input);
        assert!(output.iter().all(|&c| c == Complex32::new(2.5, -1.0)));
    }

    #[test]
    fn test_matches_reference_transform() {
        for n in [1, 4, 7, 16] {
            let input = sample_field(n);
            let output = SeparableInverseTransform::new(n).process(&input);
            let expected = reference_inverse(&input, n);
            for (i, (a, b)) in output.iter().zip(&expected).enumerate() {
                let tolerance = 1e-3 * n as f32;
                assert!(
                    (a - b).norm() < tolerance,
                    "n={} index {}: {} vs {}",
                    n,
                    i,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_single_frequency_row() {
        let n = 8;
        let mut input = vec![Complex32::new(0.0, 0.0); n * n];
        input[1] = Complex32::new(1.0, 0.0); // row 0, k = 1

        let rows = SeparableInverseTransform::new(n).row_pass(&input);
        for x in 0..n {
            let angle = 2.0 * PI * x as f32 / n as f32;
            assert!((rows[x].re - angle.cos()).abs() < 1e-6);
            assert!((rows[x].im - angle.sin()).abs() < 1e-6);
        }
        assert!(rows[n..].iter().all(|c| c.norm() == 0.0));
    }

    #[test]
    fn test_short_input_gives_zero_field() {
        let output = SeparableInverseTransform::new(4).process(&[Complex32::new(1.0, 1.0); 5]);
        assert_eq!(output.len(), 16);
        assert!(output.iter().all(|c| c.norm() == 0.0));
    }
}
