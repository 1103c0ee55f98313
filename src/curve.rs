use crate::{
    error::Error,
    hilbert::{cell_count, check_order, d2xy_unchecked},
};

/// Returns an iterator that walks every cell of an `order` x `order` grid
/// in hilbert curve order, yielding `(d, x, y)` for each step.
pub fn curve(order: u32) -> Result<Curve, Error> {
    check_order(order)?;
    Ok(Curve {
        order: order,
        next_d: 0,
        end_d: cell_count(order),
    })
}

/// An iterator over the cells of a grid along a hilbert curve.
///
/// Created by `curve()`.
#[derive(Debug, Clone)]
pub struct Curve {
    order: u32,
    next_d: u64,
    end_d: u64,
}

impl Curve {
    pub fn order(&self) -> u32 {
        self.order
    }
}

impl Iterator for Curve {
    type Item = (u64, u32, u32);

    fn next(&mut self) -> Option<(u64, u32, u32)> {
        if self.next_d < self.end_d {
            let d = self.next_d;
            let (x, y) = d2xy_unchecked(self.order, d);
            self.next_d += 1;
            Some((d, x, y))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end_d - self.next_d;
        if remaining <= usize::max_value() as u64 {
            (remaining as usize, Some(remaining as usize))
        } else {
            (usize::max_value(), None)
        }
    }
}

impl DoubleEndedIterator for Curve {
    fn next_back(&mut self) -> Option<(u64, u32, u32)> {
        if self.next_d < self.end_d {
            self.end_d -= 1;
            let (x, y) = d2xy_unchecked(self.order, self.end_d);
            Some((self.end_d, x, y))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Curve {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hilbert::{d2xy, xy2d};

    #[test]
    fn matches_d2xy() {
        for (d, x, y) in curve(16).unwrap() {
            assert_eq!(d2xy(16, d), Ok((x, y)));
            assert_eq!(xy2d(16, x, y), Ok(d));
        }
    }

    #[test]
    fn length() {
        assert_eq!(curve(1).unwrap().len(), 1);
        assert_eq!(curve(8).unwrap().len(), 64);
        assert_eq!(curve(8).unwrap().count(), 64);
    }

    #[test]
    fn steps_are_adjacent() {
        let cells: Vec<_> = curve(32).unwrap().collect();
        for pair in cells.windows(2) {
            let (_, x1, y1) = pair[0];
            let (_, x2, y2) = pair[1];
            let dx = (i64::from(x1) - i64::from(x2)).abs();
            let dy = (i64::from(y1) - i64::from(y2)).abs();
            assert_eq!(dx + dy, 1);
        }
    }

    #[test]
    fn ends() {
        let mut c = curve(8).unwrap();
        assert_eq!(c.next(), Some((0, 0, 0)));
        assert_eq!(c.next_back(), Some((63, 7, 0)));
        assert_eq!(c.len(), 62);
    }

    #[test]
    fn invalid_order() {
        assert_eq!(curve(5).err(), Some(Error::InvalidOrder(5)));
    }
}
