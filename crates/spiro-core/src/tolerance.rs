/// Relative/absolute tolerance pair for floating-point comparisons.
///
/// `close` follows the usual isclose convention: the relative term scales
/// with the magnitude of the reference value, the absolute term is a floor
/// for comparisons against values near zero. The comparison is therefore
/// asymmetric in its arguments.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the reference magnitude
    pub rtol: f64,
    /// Absolute tolerance floor
    pub atol: f64,
}

impl Tolerance {
    pub const DEFAULT_RTOL: f64 = 1e-5;
    pub const DEFAULT_ATOL: f64 = 1e-8;

    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    pub fn default_precision() -> Self {
        Self {
            rtol: Self::DEFAULT_RTOL,
            atol: Self::DEFAULT_ATOL,
        }
    }

    /// Check if `a` matches the reference value `b` within tolerance
    pub fn close(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// Check if a value is zero within absolute tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.atol
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_relative_term_scales_with_reference() {
        let tol = Tolerance::default();
        assert!(tol.close(1_000_000.0, 1_000_001.0));
        assert!(!tol.close(1.0, 1.001));
    }

    #[test]
    fn test_close_against_zero_uses_absolute_floor() {
        let tol = Tolerance::default();
        // Reference 0 disables the relative term entirely.
        assert!(tol.close(1e-9, 0.0));
        assert!(!tol.close(1e-7, 0.0));
    }

    #[test]
    fn test_close_is_asymmetric() {
        // The relative term scales with the second argument only.
        let tol = Tolerance::new(0.1, 0.0);
        assert!(tol.close(9.0, 10.0));
        assert!(!tol.close(10.0, 9.0));
    }

    #[test]
    fn test_is_zero() {
        let tol = Tolerance::default();
        assert!(tol.is_zero(1e-12));
        assert!(!tol.is_zero(1e-3));
    }
}
