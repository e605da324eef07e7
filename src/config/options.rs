//! Options shared by the iterative kernels.
//!
//! `KernelOptions` bundles the stopping tolerance, an optional iteration cap
//! and the three numerical policies that have more than one reasonable
//! reading. The defaults reproduce the classic behaviour of each kernel:
//! no iteration cap, `alpha = -‖v‖` reflectors, signed-maximum
//! renormalization and the "any coordinate" Newton stopping rule.

use crate::core::traits::Scalar;
use crate::utils::convergence::Convergence;

/// Default tolerance of the eigenvalue iterations.
pub const DEFAULT_TOL: f64 = 1e-4;

/// Classic tolerance of scalar Newton iteration, tighter than [`DEFAULT_TOL`].
pub const NEWTON_TOL: f64 = 1e-5;

/// Sign of `alpha` in the Householder vector `w = v - alpha·e_k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflectorSign {
    /// `alpha = -‖v‖₂` regardless of the sign of `v_k`.
    #[default]
    Negated,
    /// `alpha = -sign(v_k)·‖v‖₂`, which avoids cancellation in `w_k`.
    Stable,
}

/// How Rayleigh quotient iteration rescales `y = (A - σI)⁻¹x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide by the largest signed component.
    #[default]
    SignedMax,
    /// Divide by the component of largest magnitude.
    MaxMagnitude,
}

/// When the multivariate Newton solver stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopRule {
    /// Stop once any coordinate of the step is below the tolerance.
    #[default]
    AnyCoordinate,
    /// Stop once every coordinate of the step is below the tolerance.
    AllCoordinates,
}

/// Tolerance, iteration cap and policies for the iterative kernels.
#[derive(Debug, Clone, Copy)]
pub struct KernelOptions<T> {
    /// Stopping tolerance on the change between iterates
    pub tol: T,
    /// Optional cap; `None` iterates until the tolerance is met
    pub max_iters: Option<usize>,
    /// Householder sign convention (QR transform, QR iteration, least squares)
    pub reflector: ReflectorSign,
    /// Rayleigh renormalization
    pub normalization: Normalization,
    /// Multivariate Newton stopping rule
    pub stop_rule: StopRule,
}

impl<T: Scalar> KernelOptions<T> {
    pub fn new(tol: T) -> Self {
        Self {
            tol,
            max_iters: None,
            reflector: ReflectorSign::default(),
            normalization: Normalization::default(),
            stop_rule: StopRule::default(),
        }
    }

    /// Defaults with `tol = NEWTON_TOL`, the usual setting for [`find_root`](crate::nonlinear::find_root).
    pub fn newton() -> Self {
        Self::new(T::cast(NEWTON_TOL))
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    pub fn with_reflector(mut self, reflector: ReflectorSign) -> Self {
        self.reflector = reflector;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_stop_rule(mut self, stop_rule: StopRule) -> Self {
        self.stop_rule = stop_rule;
        self
    }

    pub(crate) fn convergence(&self) -> Convergence<T> {
        Convergence { tol: self.tol, max_iters: self.max_iters }
    }
}

impl<T: Scalar> Default for KernelOptions<T> {
    fn default() -> Self {
        Self::new(T::cast(DEFAULT_TOL))
    }
}
