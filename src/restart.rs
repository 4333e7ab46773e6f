//! Restartable operations: operation budget and saved state.
//!
//! A multiplication invoked with a `RestartContext` counts the "basic
//! operations" it performs (see the `OPS_*` constants). When the global
//! budget set with `set_max_ops()` would be exceeded, the operation stops
//! at the next step boundary and returns `Error::InProgress`, keeping its
//! intermediate values in the context; calling the same function again,
//! with the same arguments and context, resumes where it stopped.
//!
//! The first step of each top-level call is always allowed, so that
//! every call makes some progress even with a very small budget. Nested
//! operations (the two multiplications inside `muladd()`) share the
//! budget of the outer call.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::{Error, Result};
use crate::group::{Group, Point};

/// Cost of the argument checks at the start of a multiplication.
pub(crate) const OPS_CHK: u32 = 3;

/// Cost of a point doubling.
pub(crate) const OPS_DBL: u32 = 8;

/// Cost of a point addition.
pub(crate) const OPS_ADD: u32 = 11;

/// Cost of a field inversion.
pub(crate) const OPS_INV: u32 = 120;

static MAX_OPS: AtomicU32 = AtomicU32::new(0);

/// Set the maximum number of basic operations that a restartable
/// function may perform in one call. 0 (the default) means unlimited:
/// restartable functions then never return `InProgress`.
///
/// The budget is process-wide. Costs are calibrated for 256-bit curves
/// and scaled up for larger ones.
pub fn set_max_ops(max_ops: u32) {
    MAX_OPS.store(max_ops, Ordering::Relaxed);
}

/// Tell whether restartable operations may currently yield.
pub fn restart_is_enabled() -> bool {
    MAX_OPS.load(Ordering::Relaxed) != 0
}

/// Progress of a single scalar multiplication (comb method).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum MulPhase {
    Init,
    PreDbl,
    PreNormDbl,
    PreAdd,
    PreNormAdd,
    CombCore,
    FinalNorm,
}

impl Default for MulPhase {
    fn default() -> Self {
        MulPhase::Init
    }
}

/// Saved state of a single scalar multiplication.
#[derive(Clone, Debug, Default)]
pub(crate) struct MulRestart {
    pub(crate) phase: MulPhase,
    // Loop index (precomputation doublings, or comb core).
    pub(crate) i: usize,
    // Running point.
    pub(crate) R: Point,
    // Precomputed table (while not transferred to the group).
    pub(crate) T: Vec<Point>,
}

/// Progress of a linear combination m*P + n*Q.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MulAddPhase {
    Mul1,
    Mul2,
    Add,
    Norm,
}

/// Saved state of a linear combination.
#[derive(Clone, Debug)]
pub(crate) struct MulAddRestart {
    pub(crate) phase: MulAddPhase,
    pub(crate) mP: Point,
    pub(crate) R: Point,
    // Inner multiplication, while the linear combination is suspended.
    pub(crate) inner: Option<MulRestart>,
}

impl MulAddRestart {
    pub(crate) fn new() -> Self {
        MulAddRestart {
            phase: MulAddPhase::Mul1,
            mP: Point::zero(),
            R: Point::zero(),
            inner: None,
        }
    }
}

#[derive(Clone, Debug)]
enum InFlight {
    Idle,
    Mul(MulRestart),
    MulAdd(MulAddRestart),
}

impl Default for InFlight {
    fn default() -> Self {
        InFlight::Idle
    }
}

/// Context for restartable operations.
///
/// A context may hold the intermediate state of at most one operation.
/// It must not be shared between distinct operations while one of them
/// is in progress; `free()` abandons the operation in progress.
#[derive(Clone, Debug, Default)]
pub struct RestartContext {
    ops_done: u32,
    depth: u32,
    in_flight: InFlight,
    // Recycled table storage.
    scratch: Vec<Point>,
}

impl RestartContext {

    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abandon the operation in progress, if any, and release the
    /// saved state.
    pub fn free(&mut self) {
        *self = Self::default();
    }

    /// Tell whether an operation is in progress in this context.
    pub fn is_in_progress(&self) -> bool {
        !matches!(self.in_flight, InFlight::Idle)
    }

    /// Number of basic operations performed in the last call.
    pub fn ops_done(&self) -> u32 {
        self.ops_done
    }

    /// Enter an operation; the budget is reset at top level.
    pub(crate) fn enter(&mut self) {
        if self.depth == 0 {
            self.ops_done = 0;
        }
        self.depth += 1;
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Tell whether a single multiplication is being resumed.
    pub(crate) fn mul_in_flight(&self) -> bool {
        matches!(self.in_flight, InFlight::Mul(_))
    }

    /// Get the saved state of a multiplication, or a fresh state if
    /// restarting is enabled; `None` means the multiplication runs to
    /// completion without saving anything.
    pub(crate) fn take_mul(&mut self) -> Option<MulRestart> {
        if let InFlight::Mul(_) = self.in_flight {
            if let InFlight::Mul(st) = core::mem::take(&mut self.in_flight) {
                return Some(st);
            }
        }
        if restart_is_enabled() {
            let mut st = MulRestart::default();
            st.T = core::mem::take(&mut self.scratch);
            Some(st)
        } else {
            None
        }
    }

    /// Keep the state of a suspended multiplication, or recycle it.
    pub(crate) fn store_mul(&mut self, st: MulRestart, in_progress: bool) {
        if in_progress {
            self.in_flight = InFlight::Mul(st);
        } else {
            self.recycle(st);
        }
    }

    /// Get the saved state of a linear combination (or a fresh state if
    /// restarting is enabled). The saved inner multiplication, if any,
    /// becomes the multiplication in flight.
    pub(crate) fn take_muladd(&mut self) -> Option<MulAddRestart> {
        if let InFlight::MulAdd(_) = self.in_flight {
            if let InFlight::MulAdd(mut ma) = core::mem::take(&mut self.in_flight) {
                if let Some(inner) = ma.inner.take() {
                    self.in_flight = InFlight::Mul(inner);
                }
                return Some(ma);
            }
        }
        if restart_is_enabled() {
            Some(MulAddRestart::new())
        } else {
            None
        }
    }

    /// Keep the state of a suspended linear combination (with its inner
    /// multiplication), or release it.
    pub(crate) fn store_muladd(&mut self, mut ma: MulAddRestart, in_progress: bool) {
        if let InFlight::Mul(st) = core::mem::take(&mut self.in_flight) {
            if in_progress {
                ma.inner = Some(st);
            } else {
                self.recycle(st);
            }
        }
        if in_progress {
            self.in_flight = InFlight::MulAdd(ma);
        } else if let Some(st) = ma.inner.take() {
            self.recycle(st);
        }
    }

    fn recycle(&mut self, st: MulRestart) {
        let mut T = st.T;
        T.clear();
        if T.capacity() > self.scratch.capacity() {
            self.scratch = T;
        }
    }
}

/// Account for `ops` basic operations. If the budget is exhausted,
/// `InProgress` is returned and the caller must stop at this point.
/// Without a context, or with restarting disabled, this always succeeds.
pub(crate) fn check_budget(grp: &Group, rs: Option<&mut RestartContext>, ops: u32) -> Result<()> {
    let rs = match rs {
        Some(rs) => rs,
        None => return Ok(()),
    };
    let max_ops = MAX_OPS.load(Ordering::Relaxed);
    if max_ops == 0 {
        return Ok(());
    }

    // Costs are for 256-bit curves; multiplication cost is quadratic.
    let ops = if grp.pbits >= 512 {
        ops.saturating_mul(4)
    } else if grp.pbits >= 384 {
        ops.saturating_mul(2)
    } else {
        ops
    };

    // ops_done may exceed max_ops, since the first step is always
    // allowed.
    if rs.ops_done != 0 && (rs.ops_done > max_ops || ops > max_ops - rs.ops_done) {
        log::trace!("operation budget exhausted ({} done, {} max)", rs.ops_done, max_ops);
        return Err(Error::InProgress);
    }
    rs.ops_done = rs.ops_done.saturating_add(ops);
    Ok(())
}

/// Serializes tests which modify the global budget.
#[cfg(test)]
pub(crate) fn budget_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::Mutex;

    static LOCK: Mutex<()> = Mutex::new(());
    match LOCK.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ========================================================================
