//! Conversion between 2d grid coordinates and their index along a
//! Hilbert curve.
//!
//! The grid is `order` x `order` cells, where `order` must be a power
//! of two.  Coordinates are in `[0, order)` and indices are in
//! `[0, order^2)`.

use crate::error::Error;

/// Largest supported order.  Any larger power of two doesn't fit in
/// the coordinate type.
pub const MAX_ORDER: u32 = 1 << 31;

// Utility function used by the functions below.
//
// `s` is the size of the quadrant at the current level.  During encoding
// `x` and `y` can still carry bits above `s`, hence the wrapping
// arithmetic: only the bits below `s` are looked at afterwards.
#[inline(always)]
fn hil_rot(s: u32, rx: u32, ry: u32, x: &mut u32, y: &mut u32) {
    use std::mem;
    if ry == 0 {
        if rx == 1 {
            *x = (s - 1).wrapping_sub(*x);
            *y = (s - 1).wrapping_sub(*y);
        }
        mem::swap(x, y);
    }
}

/// Checks that `order` is a usable curve order.
#[inline]
pub fn check_order(order: u32) -> Result<(), Error> {
    if order.is_power_of_two() {
        Ok(())
    } else {
        Err(Error::InvalidOrder(order))
    }
}

/// Number of cells (and thus indices) in a curve of the given order.
#[inline]
pub fn cell_count(order: u32) -> u64 {
    u64::from(order) * u64::from(order)
}

/// Convert (x,y) to hilbert curve index.
///
/// order: The side length of the grid.  Must be a power of two.
/// x: The x coordinate.  Must be less than `order`.
/// y: The y coordinate.  Must be less than `order`.
///
/// Returns the hilbert curve index corresponding to the (x,y) coordinates given.
pub fn xy2d(order: u32, x: u32, y: u32) -> Result<u64, Error> {
    check_order(order)?;
    for &v in &[x, y] {
        if v >= order {
            return Err(Error::OutOfRange {
                value: u64::from(v),
                limit: u64::from(order),
            });
        }
    }

    Ok(xy2d_unchecked(order, x, y))
}

/// Convert hilbert curve index to (x,y).
///
/// order: The side length of the grid.  Must be a power of two.
/// d: The hilbert curve index.  Must be less than `order * order`.
///
/// Returns the (x, y) coords at the given index.
pub fn d2xy(order: u32, d: u64) -> Result<(u32, u32), Error> {
    check_order(order)?;
    let limit = cell_count(order);
    if d >= limit {
        return Err(Error::OutOfRange { value: d, limit });
    }

    Ok(d2xy_unchecked(order, d))
}

// Callers must have validated `order`, `x` and `y` already.
#[inline]
pub(crate) fn xy2d_unchecked(order: u32, x: u32, y: u32) -> u64 {
    debug_assert!(order.is_power_of_two() && x < order && y < order);

    let (mut x, mut y) = (x, y);
    let mut d = 0u64;
    let mut s = order >> 1;
    while s > 0 {
        let rx = if (x & s) > 0 { 1 } else { 0 };
        let ry = if (y & s) > 0 { 1 } else { 0 };
        let s64 = u64::from(s);
        d += s64 * s64 * u64::from((3 * rx) ^ ry);
        hil_rot(s, rx, ry, &mut x, &mut y);

        s >>= 1
    }

    d
}

// Callers must have validated `order` and `d` already.
#[inline]
pub(crate) fn d2xy_unchecked(order: u32, d: u64) -> (u32, u32) {
    debug_assert!(order.is_power_of_two() && d < cell_count(order));

    let (mut x, mut y) = (0u32, 0u32);
    let mut s = 1u32;
    let mut t = d;
    while s < order {
        let rx = (1 & (t >> 1)) as u32;
        let ry = (1 & (t ^ u64::from(rx))) as u32;
        hil_rot(s, rx, ry, &mut x, &mut y);
        x += s * rx;
        y += s * ry;
        t >>= 2;

        s <<= 1;
    }

    (x, y)
}
