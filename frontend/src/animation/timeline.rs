#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    #[default]
    Linear,
    Power2In,
    Power2Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// One property change: `from` → `to` during `[at, at + duration]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub at: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, at: f64, duration: f64) -> Self {
        Self { from, to, at, duration, ease: Ease::Linear }
    }

    pub fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn end(&self) -> f64 {
        self.at + self.duration
    }

    pub fn sample(&self, time: f64) -> f64 {
        if self.duration <= 0.0 {
            return if time >= self.at { self.to } else { self.from };
        }
        let t = self.ease.apply((time - self.at) / self.duration);
        self.from + (self.to - self.from) * t
    }
}

/// Tweens grouped per target. A target holds its first `from` until its
/// first tween starts and the last started tween's value afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tracks: Vec<Vec<Tween>>,
}

impl Timeline {
    pub fn new(targets: usize) -> Self {
        Self { tracks: vec![Vec::new(); targets] }
    }

    pub fn tween(mut self, target: usize, tween: Tween) -> Self {
        if target >= self.tracks.len() {
            self.tracks.resize(target + 1, Vec::new());
        }
        let track = &mut self.tracks[target];
        track.push(tween);
        track.sort_by(|a, b| a.at.total_cmp(&b.at));
        self
    }

    pub fn targets(&self) -> usize {
        self.tracks.len()
    }

    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .flatten()
            .map(Tween::end)
            .fold(0.0, f64::max)
    }

    pub fn sample(&self, target: usize, time: f64) -> Option<f64> {
        let track = self.tracks.get(target)?;
        let first = track.first()?;
        if time < first.at {
            return Some(first.from);
        }
        track
            .iter()
            .rev()
            .find(|tween| tween.at <= time)
            .map(|tween| tween.sample(time))
    }

    /// Samples at a fraction of the whole timeline, as a scrubbed scroll
    /// trigger drives it.
    pub fn sample_progress(&self, target: usize, progress: f64) -> Option<f64> {
        self.sample(target, progress.clamp(0.0, 1.0) * self.duration())
    }

    /// `count` targets going `from` → `to`, each starting `each` after the
    /// previous one.
    pub fn stagger(count: usize, from: f64, to: f64, duration: f64, each: f64, ease: Ease) -> Self {
        (0..count).fold(Self::new(count), |timeline, i| {
            timeline.tween(i, Tween::new(from, to, i as f64 * each, duration).eased(ease))
        })
    }

    /// Two lines of text brought up to full opacity one after the other
    /// and dimmed back to `dim`.
    pub fn highlight_pair(dim: f64) -> Self {
        const STEP: f64 = 0.1;
        Self::new(2)
            .tween(0, Tween::new(dim, 1.0, 0.0, STEP))
            .tween(0, Tween::new(1.0, dim, 0.6, STEP))
            .tween(1, Tween::new(dim, 1.0, 0.6, STEP))
            .tween(1, Tween::new(1.0, dim, 1.7, STEP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for ease in [Ease::Linear, Ease::Power2In, Ease::Power2Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(2.0), 1.0);
        }
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power2In.apply(0.5) < 0.5);
    }

    #[test]
    fn stagger_offsets_each_target() {
        let timeline = Timeline::stagger(3, 0.0, 1.0, 0.5, 0.5, Ease::Linear);
        assert_eq!(timeline.targets(), 3);
        assert!(close(timeline.duration(), 1.5));

        assert_eq!(timeline.sample(0, 0.25), Some(0.5));
        assert_eq!(timeline.sample(1, 0.25), Some(0.0));
        assert_eq!(timeline.sample(2, 1.25), Some(0.5));
        assert_eq!(timeline.sample(2, 9.0), Some(1.0));
        assert_eq!(timeline.sample(3, 0.0), None);
    }

    #[test]
    fn highlight_pair_hands_over_between_lines() {
        let timeline = Timeline::highlight_pair(0.2);
        assert!(close(timeline.duration(), 1.8));

        assert_eq!(timeline.sample(0, 0.0), Some(0.2));
        assert_eq!(timeline.sample(0, 0.3), Some(1.0));
        assert_eq!(timeline.sample(1, 0.3), Some(0.2));

        let first = timeline.sample(0, 0.7).unwrap();
        let second = timeline.sample(1, 0.7).unwrap();
        assert!(close(first, 0.2));
        assert!(close(second, 1.0));

        assert!(close(timeline.sample_progress(1, 1.0).unwrap(), 0.2));
    }

    #[test]
    fn progress_is_clamped() {
        let timeline = Timeline::stagger(1, 0.0, 10.0, 1.0, 0.0, Ease::Linear);
        assert_eq!(timeline.sample_progress(0, -1.0), Some(0.0));
        assert_eq!(timeline.sample_progress(0, 0.5), Some(5.0));
        assert_eq!(timeline.sample_progress(0, 3.0), Some(10.0));
    }

    #[test]
    fn zero_length_tween_jumps() {
        let tween = Tween::new(0.0, 1.0, 1.0, 0.0);
        assert_eq!(tween.sample(0.5), 0.0);
        assert_eq!(tween.sample(1.0), 1.0);
    }
}
