//! Surface and volume subdomains.
//!
//! Subdomains are identified by an integer id, unique among subdomains of
//! the same kind in a model. Their mesh entities are not stored: they are
//! located on demand through the [`Mesh`](permea_core::Mesh), which happens
//! once while the problem is discretized.

mod surface;
mod volume;

pub use surface::{BoundaryRegion, SurfaceSubdomain};
pub use volume::{VolumeRegion, VolumeSubdomain};

/// The integer id of a subdomain.
pub type SubdomainId = u32;

/// Returns `true` if `a` is within tolerance of `b`.
///
/// Uses an absolute tolerance of `1e-8` plus a relative tolerance of `1e-5`.
fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closeness() {
        assert!(is_close(1.0, 1.0 + 1e-9));
        assert!(is_close(0.0, 5e-9));
        assert!(!is_close(0.0, 1e-6));
        assert!(is_close(1e6, 1e6 + 1.0));
    }
}
