use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerParseError {
    #[error("expected \"<element> <viewport>\", got {0:?}")]
    Shape(String),
    #[error("unknown position {0:?}")]
    Position(String),
}

/// A position along one axis: a named edge, a percentage, or pixels from
/// the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Px(f64),
}

impl Edge {
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => extent / 2.0,
            Edge::Bottom => extent,
            Edge::Percent(p) => extent * p / 100.0,
            Edge::Px(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = |raw: &str| {
            raw.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| TriggerParseError::Position(s.to_string()))
        };
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            _ if s.ends_with('%') => number(&s[..s.len() - 1]).map(Edge::Percent),
            _ if s.ends_with("px") => number(&s[..s.len() - 2]).map(Edge::Px),
            _ => Err(TriggerParseError::Position(s.to_string())),
        }
    }
}

/// "When this point of the element meets this line of the viewport",
/// written the usual way: `"center 80%"`, `"top bottom"`, `"100px bottom"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPoint {
    pub element: Edge,
    pub viewport: Edge,
}

impl TriggerPoint {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// How far the page still has to scroll down before the point is met.
    /// Zero or negative once it has been passed.
    pub fn distance(&self, rect: Rect, viewport_height: f64) -> f64 {
        let element_line = rect.top + self.element.resolve(rect.height);
        let viewport_line = self.viewport.resolve(viewport_height);
        element_line - viewport_line
    }
}

impl FromStr for TriggerPoint {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(TriggerParseError::Shape(s.to_string())),
        }
    }
}

/// Element geometry relative to the viewport, as `getBoundingClientRect`
/// reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

/// Maps scroll position onto `0.0..=1.0` between a start and an end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
}

impl Default for ScrollTrigger {
    /// Whole time the element is on screen.
    fn default() -> Self {
        Self {
            start: TriggerPoint::new(Edge::Top, Edge::Bottom),
            end: TriggerPoint::new(Edge::Bottom, Edge::Top),
        }
    }
}

impl ScrollTrigger {
    pub fn parse(start: &str, end: &str) -> Result<Self, TriggerParseError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    pub fn progress(&self, rect: Rect, viewport_height: f64) -> f64 {
        let to_start = self.start.distance(rect, viewport_height);
        let to_end = self.end.distance(rect, viewport_height);
        let span = to_end - to_start;
        if span <= 0.0 {
            return if to_start <= 0.0 { 1.0 } else { 0.0 };
        }
        (-to_start / span).clamp(0.0, 1.0)
    }

    pub fn is_active(&self, rect: Rect, viewport_height: f64) -> bool {
        self.start.distance(rect, viewport_height) <= 0.0 && self.end.distance(rect, viewport_height) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_percent_and_pixel_positions() {
        assert_eq!(
            "center 80%".parse::<TriggerPoint>(),
            Ok(TriggerPoint::new(Edge::Center, Edge::Percent(80.0)))
        );
        assert_eq!(
            "100px bottom".parse::<TriggerPoint>(),
            Ok(TriggerPoint::new(Edge::Px(100.0), Edge::Bottom))
        );
        assert_eq!(
            "  top   top ".parse::<TriggerPoint>(),
            Ok(TriggerPoint::new(Edge::Top, Edge::Top))
        );
    }

    #[test]
    fn rejects_malformed_positions() {
        assert_eq!(
            "center".parse::<TriggerPoint>(),
            Err(TriggerParseError::Shape("center".to_string()))
        );
        assert_eq!(
            "top bottom extra".parse::<TriggerPoint>(),
            Err(TriggerParseError::Shape("top bottom extra".to_string()))
        );
        assert_eq!(
            "middle top".parse::<TriggerPoint>(),
            Err(TriggerParseError::Position("middle".to_string()))
        );
        assert_eq!(
            "abc% top".parse::<TriggerPoint>(),
            Err(TriggerParseError::Position("abc%".to_string()))
        );
    }

    #[test]
    fn progress_runs_from_start_to_end() {
        let trigger = ScrollTrigger::parse("center 80%", "center top").unwrap();
        let vh = 1000.0;

        // element center at 1000, start line at 800: not reached yet
        let below = Rect { top: 900.0, height: 200.0 };
        assert_eq!(trigger.progress(below, vh), 0.0);
        assert!(!trigger.is_active(below, vh));

        // center at 600: 200px past the start, 600px before the end
        let inside = Rect { top: 500.0, height: 200.0 };
        assert!((trigger.progress(inside, vh) - 0.25).abs() < 1e-9);
        assert!(trigger.is_active(inside, vh));

        let above = Rect { top: -400.0, height: 200.0 };
        assert_eq!(trigger.progress(above, vh), 1.0);
        assert!(!trigger.is_active(above, vh));
    }

    #[test]
    fn degenerate_span_snaps() {
        let trigger = ScrollTrigger::parse("top top", "top top").unwrap();
        assert_eq!(trigger.progress(Rect { top: 10.0, height: 50.0 }, 800.0), 0.0);
        assert_eq!(trigger.progress(Rect { top: -10.0, height: 50.0 }, 800.0), 1.0);
    }

    #[test]
    fn default_covers_visibility() {
        let trigger = ScrollTrigger::default();
        let vh = 800.0;
        assert_eq!(trigger.progress(Rect { top: 800.0, height: 400.0 }, vh), 0.0);
        // half way: top at 0 when total span is 800 + 400
        let half = Rect { top: 200.0, height: 400.0 };
        assert!((trigger.progress(half, vh) - 0.5).abs() < 1e-9);
    }
}
