#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Endless horizontal text loop.
///
/// The text is repeated `copies` times and the strip is moved by one copy's
/// width per period; after that the content looks identical, so the offset
/// wraps back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub direction: Direction,
    pub period_ms: f64,
    pub copies: usize,
}

impl Marquee {
    pub const COPIES: usize = 4;

    pub fn new(direction: Direction, period_ms: f64) -> Self {
        Self { direction, period_ms, copies: Self::COPIES }
    }

    /// Width of one copy as a percentage of the whole strip.
    pub fn span(&self) -> f64 {
        100.0 / self.copies.max(1) as f64
    }

    /// `translateX` in percent at `elapsed_ms`.
    pub fn offset(&self, elapsed_ms: f64) -> f64 {
        if self.period_ms <= 0.0 {
            return 0.0;
        }
        let phase = elapsed_ms.rem_euclid(self.period_ms) / self.period_ms;
        match self.direction {
            Direction::Left => -self.span() * phase,
            Direction::Right => -self.span() * (1.0 - phase),
        }
    }

    pub fn repeat(&self, text: &str) -> String {
        vec![text.trim(); self.copies.max(1)].join(" ") + " "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn left_runs_towards_negative_span() {
        let marquee = Marquee::new(Direction::Left, 40_000.0);
        assert!(close(marquee.offset(0.0), 0.0));
        assert!(close(marquee.offset(20_000.0), -12.5));
        assert!(close(marquee.offset(39_999.0), -25.0 * 39_999.0 / 40_000.0));
    }

    #[test]
    fn right_runs_back_to_zero() {
        let marquee = Marquee::new(Direction::Right, 10_000.0);
        assert!(close(marquee.offset(0.0), -25.0));
        assert!(close(marquee.offset(5_000.0), -12.5));
    }

    #[test]
    fn offset_wraps_every_period() {
        let marquee = Marquee::new(Direction::Left, 10_000.0);
        assert!(close(marquee.offset(10_000.0), 0.0));
        assert!(close(marquee.offset(12_500.0), marquee.offset(2_500.0)));
        assert!(close(marquee.offset(-2_500.0), marquee.offset(7_500.0)));
    }

    #[test]
    fn repeats_trimmed_text() {
        let marquee = Marquee::new(Direction::Left, 1.0);
        assert_eq!(marquee.repeat(" Go. "), "Go. Go. Go. Go. ");
    }

    #[test]
    fn zero_period_stands_still() {
        let marquee = Marquee::new(Direction::Right, 0.0);
        assert_eq!(marquee.offset(123.0), 0.0);
    }
}
