//! Placement of a square grid of samples into a 1d sequence following
//! the hilbert curve.
//!
//! Where the samples come from (e.g. the pixels of a grayscale image)
//! and what happens to the resulting sequence (e.g. an inverse
//! frequency transform and export as audio) is up to the caller, via the
//! `SampleGrid` and `SignalSink` traits.

use crate::{
    error::Error,
    hilbert::{cell_count, check_order, xy2d_unchecked},
};

/// A square grid of numeric samples.
pub trait SampleGrid {
    /// Side length of the grid.  Must be a power of two for the grid to
    /// be laid out.
    fn side(&self) -> u32;

    /// The sample at the given row and column.  Both are less than
    /// `side()`.
    fn sample(&self, row: u32, col: u32) -> f32;
}

/// Something that takes a finished 1d sample sequence.
pub trait SignalSink {
    fn consume(&mut self, samples: &[f32], sample_rate: u32);
}

impl SignalSink for Vec<f32> {
    fn consume(&mut self, samples: &[f32], _sample_rate: u32) {
        self.extend_from_slice(samples);
    }
}

/// A borrowed, row-major grid of samples.
#[derive(Debug, Copy, Clone)]
pub struct Grid<'a> {
    side: u32,
    samples: &'a [f32],
}

impl<'a> Grid<'a> {
    pub fn new(side: u32, samples: &'a [f32]) -> Result<Grid<'a>, Error> {
        check_order(side)?;
        let expected = cell_count(side) as usize;
        if samples.len() != expected {
            return Err(Error::SizeMismatch {
                expected: expected,
                actual: samples.len(),
            });
        }

        Ok(Grid {
            side: side,
            samples: samples,
        })
    }
}

impl<'a> SampleGrid for Grid<'a> {
    fn side(&self) -> u32 {
        self.side
    }

    #[inline]
    fn sample(&self, row: u32, col: u32) -> f32 {
        self.samples[row as usize * self.side as usize + col as usize]
    }
}

/// Lays the grid's samples out in hilbert curve order.
///
/// The sample at `(row, col)` ends up at index `xy2d(side, row, col)`.
pub fn hilbert_sequence<G: SampleGrid + ?Sized>(grid: &G) -> Result<Vec<f32>, Error> {
    let n = grid.side();
    check_order(n)?;

    let mut seq = vec![0.0f32; cell_count(n) as usize];
    for row in 0..n {
        for col in 0..n {
            seq[xy2d_unchecked(n, row, col) as usize] = grid.sample(row, col);
        }
    }

    Ok(seq)
}

/// Lays the grid's samples out in hilbert curve order, mirrored about
/// the center of a sequence twice the size of the grid.
///
/// The sample with curve index `d` is written to both `side^2 + d` and
/// `side^2 - 1 - d`, so the first half of the result is the reverse of
/// the second half.
pub fn mirrored_spectrum<G: SampleGrid + ?Sized>(grid: &G) -> Result<Vec<f32>, Error> {
    let n = grid.side();
    check_order(n)?;

    let center = cell_count(n) as usize;
    let mut spectrum = vec![0.0f32; center * 2];
    for row in 0..n {
        for col in 0..n {
            let d = xy2d_unchecked(n, row, col) as usize;
            let v = grid.sample(row, col);
            spectrum[center + d] = v;
            spectrum[center - 1 - d] = v;
        }
    }

    Ok(spectrum)
}

/// Builds the mirrored spectrum of `grid` and hands it to `sink`.
pub fn present<G, S>(grid: &G, sink: &mut S, sample_rate: u32) -> Result<(), Error>
where
    G: SampleGrid + ?Sized,
    S: SignalSink + ?Sized,
{
    let spectrum = mirrored_spectrum(grid)?;
    sink.consume(&spectrum, sample_rate);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hilbert::xy2d;

    struct Ramp(u32);

    impl SampleGrid for Ramp {
        fn side(&self) -> u32 {
            self.0
        }

        fn sample(&self, row: u32, col: u32) -> f32 {
            (row * self.0 + col) as f32
        }
    }

    struct RateCheck {
        rate: u32,
        len: usize,
    }

    impl SignalSink for RateCheck {
        fn consume(&mut self, samples: &[f32], sample_rate: u32) {
            self.rate = sample_rate;
            self.len = samples.len();
        }
    }

    #[test]
    fn grid_size_mismatch() {
        let samples = [0.0f32; 15];
        assert_eq!(
            Grid::new(4, &samples).err(),
            Some(Error::SizeMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn grid_invalid_side() {
        let samples = [0.0f32; 9];
        assert_eq!(Grid::new(3, &samples).err(), Some(Error::InvalidOrder(3)));
    }

    #[test]
    fn grid_row_major() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        let grid = Grid::new(2, &samples).unwrap();
        assert_eq!(grid.sample(0, 1), 2.0);
        assert_eq!(grid.sample(1, 0), 3.0);
    }

    #[test]
    fn sequence_order_2() {
        // Row-major 2x2 grid, rows walked as x.
        let samples = [10.0, 11.0, 12.0, 13.0];
        let grid = Grid::new(2, &samples).unwrap();
        assert_eq!(
            hilbert_sequence(&grid).unwrap(),
            vec![10.0, 11.0, 13.0, 12.0]
        );
    }

    #[test]
    fn sequence_places_every_sample() {
        let grid = Ramp(16);
        let seq = hilbert_sequence(&grid).unwrap();
        assert_eq!(seq.len(), 256);
        for row in 0..16 {
            for col in 0..16 {
                let d = xy2d(16, row, col).unwrap() as usize;
                assert_eq!(seq[d], grid.sample(row, col));
            }
        }
    }

    #[test]
    fn spectrum_is_mirrored() {
        let grid = Ramp(8);
        let seq = hilbert_sequence(&grid).unwrap();
        let spectrum = mirrored_spectrum(&grid).unwrap();

        assert_eq!(spectrum.len(), 128);
        assert_eq!(&spectrum[64..], &seq[..]);
        for i in 0..64 {
            assert_eq!(spectrum[i], spectrum[127 - i]);
        }
    }

    #[test]
    fn invalid_grid_side() {
        assert_eq!(hilbert_sequence(&Ramp(6)), Err(Error::InvalidOrder(6)));
        assert_eq!(mirrored_spectrum(&Ramp(0)), Err(Error::InvalidOrder(0)));
    }

    #[test]
    fn present_to_sink() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        let grid = Grid::new(2, &samples).unwrap();

        let mut collected = Vec::new();
        present(&grid, &mut collected, 4096).unwrap();
        assert_eq!(collected, vec![3.0, 4.0, 2.0, 1.0, 1.0, 2.0, 4.0, 3.0]);

        let mut check = RateCheck { rate: 0, len: 0 };
        present(&grid, &mut check, 4096).unwrap();
        assert_eq!(check.rate, 4096);
        assert_eq!(check.len, 8);
    }
}
