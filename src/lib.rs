//! Conversion between 2d grid coordinates and positions along a Hilbert
//! space-filling curve.
//!
//! `xy2d()` maps a cell of an `order` x `order` grid to its index along
//! the curve, and `d2xy()` maps an index back to its cell.  The order must
//! be a power of two.  Invalid orders and out-of-range inputs are reported
//! as `Error`s rather than producing garbage.
//!
//! On top of that, `curve()` walks a whole grid in curve order, and the
//! `layout` module places a square grid of samples into a 1d sequence
//! following the curve.

mod curve;
mod error;
mod hilbert;
pub mod layout;

pub use crate::{
    curve::{curve, Curve},
    error::Error,
    hilbert::{cell_count, check_order, d2xy, xy2d, MAX_ORDER},
};
