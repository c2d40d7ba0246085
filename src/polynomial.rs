use crate::types::Polynomial;
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
///how many samples fit in [start, end) stepping by step,
///zero if the interval is empty or the step is not a positive number
pub fn sample_len(start: f64, end: f64, step: f64) -> usize {
    let len = ((end - start) / step).floor();
    if step > 0.0 && len.is_finite() && len > 0.0 {
        len as usize
    } else {
        0
    }
}
impl Polynomial {
    pub fn new(c3: f64, c2: f64, c1: f64, c0: f64) -> Self {
        Self { c3, c2, c1, c0 }
    }
    ///value at x
    pub fn eval(&self, x: f64) -> f64 {
        self.c3 * x * x * x + self.c2 * x * x + self.c1 * x + self.c0
    }
    pub fn derivative(&self) -> Self {
        Self::new(0.0, 3.0 * self.c3, 2.0 * self.c2, self.c1)
    }
    ///evaluates at start + i * step for every i below sample_len(start, end, step)
    ///
    ///every call with the same interval and step returns the same length,
    ///so sequences of different polynomials stay index aligned
    pub fn sample(&self, start: f64, end: f64, step: f64) -> Vec<f64> {
        let len = sample_len(start, end, step);
        let f = |i: usize| self.eval(start + i as f64 * step);
        #[cfg(feature = "rayon")]
        let samples = (0..len).into_par_iter().map(f).collect();
        #[cfg(not(feature = "rayon"))]
        let samples = (0..len).map(f).collect();
        samples
    }
}
