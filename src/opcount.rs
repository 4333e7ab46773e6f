//! Counters of point doublings, point additions and field
//! multiplications.
//!
//! Counting is compiled only in test builds, where it is used to check
//! that the sequence of operations performed by a multiplication does
//! not depend on the scalar value. Counters are per-thread so that tests
//! running concurrently do not interfere.

#[cfg(test)]
use core::cell::Cell;

#[cfg(test)]
thread_local! {
    static COUNTS: Cell<Counts> = Cell::new(Counts::default());
}

/// Snapshot of the counters.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Counts {
    pub(crate) dbl: u64,
    pub(crate) add: u64,
    pub(crate) mul: u64,
}

#[inline(always)]
pub(crate) fn count_dbl() {
    #[cfg(test)]
    COUNTS.with(|c| {
        let mut v = c.get();
        v.dbl += 1;
        c.set(v);
    });
}

#[inline(always)]
pub(crate) fn count_add() {
    #[cfg(test)]
    COUNTS.with(|c| {
        let mut v = c.get();
        v.add += 1;
        c.set(v);
    });
}

#[inline(always)]
pub(crate) fn count_mul() {
    #[cfg(test)]
    COUNTS.with(|c| {
        let mut v = c.get();
        v.mul += 1;
        c.set(v);
    });
}

#[cfg(test)]
pub(crate) fn reset() {
    COUNTS.with(|c| c.set(Counts::default()));
}

#[cfg(test)]
pub(crate) fn get() -> Counts {
    COUNTS.with(|c| c.get())
}
