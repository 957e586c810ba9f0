use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// A square tile; `pos` is its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f64,
    pub spin: f64,
    pub size: f64,
}

impl Body {
    pub fn at(pos: Vec2, size: f64) -> Self {
        Self { pos, vel: Vec2::default(), angle: 0.0, spin: 0.0, size }
    }

    fn half(&self) -> f64 {
        self.size / 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.pos.x).abs() <= self.half() && (point.y - self.pos.y).abs() <= self.half()
    }
}

/// Tuning per 60 Hz step, pixels and radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub gravity: f64,
    pub restitution: f64,
    pub air_friction: f64,
    pub floor_friction: f64,
    pub drag_stiffness: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.28,
            restitution: 0.6,
            air_friction: 0.02,
            floor_friction: 0.1,
            drag_stiffness: 0.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    body: usize,
    target: Vec2,
}

/// Tiles falling inside a walled box, with one of them optionally held by
/// the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub width: f64,
    pub height: f64,
    pub bodies: Vec<Body>,
    pub tuning: Tuning,
    grab: Option<Grab>,
}

impl World {
    pub fn new(width: f64, height: f64, bodies: Vec<Body>) -> Self {
        Self { width, height, bodies, tuning: Tuning::default(), grab: None }
    }

    pub fn step(&mut self) {
        let tuning = self.tuning;
        let keep = 1.0 - tuning.air_friction;
        for (index, body) in self.bodies.iter_mut().enumerate() {
            match self.grab {
                Some(grab) if grab.body == index => {
                    body.vel = (grab.target - body.pos) * tuning.drag_stiffness;
                    body.spin *= keep;
                }
                _ => {
                    body.vel.y += tuning.gravity;
                    body.vel = body.vel * keep;
                    body.spin *= keep;
                }
            }
            body.pos = body.pos + body.vel;
            body.angle += body.spin;
        }
        self.separate();
        for body in &mut self.bodies {
            contain(body, self.width, self.height, &tuning);
        }
    }

    /// Picks up the topmost tile under `point`.
    pub fn grab_at(&mut self, point: Vec2) -> bool {
        let hit = self.bodies.iter().rposition(|body| body.contains(point));
        self.grab = hit.map(|body| Grab { body, target: point });
        hit.is_some()
    }

    pub fn drag_to(&mut self, point: Vec2) {
        if let Some(grab) = &mut self.grab {
            grab.target = point;
        }
    }

    pub fn release(&mut self) {
        self.grab = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    // Axis-aligned push-apart along the shallower overlap.
    fn separate(&mut self) {
        let restitution = self.tuning.restitution;
        let count = self.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (left, right) = self.bodies.split_at_mut(j);
                let a = &mut left[i];
                let b = &mut right[0];
                let reach = a.half() + b.half();
                let delta = b.pos - a.pos;
                let overlap_x = reach - delta.x.abs();
                let overlap_y = reach - delta.y.abs();
                if overlap_x <= 0.0 || overlap_y <= 0.0 {
                    continue;
                }
                if overlap_x < overlap_y {
                    let push = overlap_x / 2.0 * side(delta.x);
                    a.pos.x -= push;
                    b.pos.x += push;
                    let (va, vb) = (a.vel.x, b.vel.x);
                    a.vel.x = vb * restitution;
                    b.vel.x = va * restitution;
                } else {
                    let push = overlap_y / 2.0 * side(delta.y);
                    a.pos.y -= push;
                    b.pos.y += push;
                    let (va, vb) = (a.vel.y, b.vel.y);
                    a.vel.y = vb * restitution;
                    b.vel.y = va * restitution;
                }
            }
        }
    }
}

fn side(delta: f64) -> f64 {
    if delta < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn contain(body: &mut Body, width: f64, height: f64, tuning: &Tuning) {
    let half = body.half();
    if body.pos.x - half < 0.0 {
        body.pos.x = half;
        body.vel.x = -body.vel.x * tuning.restitution;
    } else if body.pos.x + half > width {
        body.pos.x = (width - half).max(half);
        body.vel.x = -body.vel.x * tuning.restitution;
    }
    if body.pos.y - half < 0.0 {
        body.pos.y = half;
        body.vel.y = -body.vel.y * tuning.restitution;
    } else if body.pos.y + half > height {
        body.pos.y = (height - half).max(half);
        body.vel.y = -body.vel.y * tuning.restitution;
        body.vel.x *= 1.0 - tuning.floor_friction;
        body.spin *= 1.0 - tuning.floor_friction;
    }
}

/// Tile edge for a container of `width`; narrower screens get smaller
/// tiles.
pub fn tile_size(width: f64) -> f64 {
    if width < 768.0 {
        (width / 6.0).min(55.0)
    } else {
        (width / 8.0).min(70.0)
    }
}

/// First appearance: tiles scattered along the top edge, drifting down.
/// `random` yields values in `0.0..1.0`.
pub fn rain(count: usize, width: f64, size: f64, mut random: impl FnMut() -> f64) -> Vec<Body> {
    (0..count)
        .map(|_| {
            let pos = Vec2::new(random() * width, 20.0 + random() * 30.0);
            Body {
                pos,
                vel: Vec2::new((random() - 0.5) * 2.0, random() * 1.5 + 0.5),
                angle: (random() - 0.5) * 0.5,
                spin: (random() - 0.5) * 0.1,
                size,
            }
        })
        .collect()
}

/// Later appearances: a square-ish grid inside the box.
pub fn grid(count: usize, width: f64, height: f64, size: f64) -> Vec<Body> {
    let cols = (count as f64).sqrt().ceil().max(1.0) as usize;
    let spacing = (width / (cols as f64 + 1.0)).min(100.0);
    let top = (height * 0.2).max(50.0);
    (0..count)
        .map(|index| {
            let row = index / cols;
            let col = index % cols;
            Body::at(
                Vec2::new(spacing * (col as f64 + 1.0), top + row as f64 * (size + 20.0)),
                size,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> impl FnMut() -> f64 {
        let mut state = 7u32;
        move || {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 8) as f64 / (1u32 << 24) as f64
        }
    }

    fn inside(world: &World) -> bool {
        world.bodies.iter().all(|b| {
            let half = b.size / 2.0;
            b.pos.x - half >= -1e-6
                && b.pos.x + half <= world.width + 1e-6
                && b.pos.y - half >= -1e-6
                && b.pos.y + half <= world.height + 1e-6
        })
    }

    #[test]
    fn tiles_shrink_on_narrow_containers() {
        assert_eq!(tile_size(300.0), 50.0);
        assert_eq!(tile_size(700.0), 55.0);
        assert_eq!(tile_size(1200.0), 70.0);
        assert_eq!(tile_size(800.0), 70.0);
    }

    #[test]
    fn grid_lays_out_rows() {
        let bodies = grid(29, 1000.0, 500.0, 70.0);
        assert_eq!(bodies.len(), 29);
        // six columns, spacing capped at 100
        assert_eq!(bodies[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(bodies[5].pos, Vec2::new(600.0, 100.0));
        assert_eq!(bodies[6].pos, Vec2::new(100.0, 190.0));
    }

    #[test]
    fn rain_starts_near_the_top() {
        let bodies = rain(29, 800.0, 70.0, sequence());
        assert_eq!(bodies.len(), 29);
        for body in &bodies {
            assert!((0.0..800.0).contains(&body.pos.x));
            assert!((20.0..50.0).contains(&body.pos.y));
            assert!(body.vel.y >= 0.5);
        }
    }

    #[test]
    fn bodies_settle_inside_the_box() {
        let bodies = rain(29, 800.0, tile_size(800.0), sequence());
        let mut world = World::new(800.0, 500.0, bodies);
        for _ in 0..600 {
            world.step();
            assert!(inside(&world));
        }
        let resting = world.bodies.iter().filter(|b| b.vel.y.abs() < 2.0).count();
        assert!(resting > world.bodies.len() / 2);
    }

    #[test]
    fn single_tile_comes_to_rest_on_the_floor() {
        let mut world = World::new(400.0, 300.0, vec![Body::at(Vec2::new(200.0, 50.0), 50.0)]);
        for _ in 0..1_000 {
            world.step();
        }
        let body = world.bodies[0];
        assert!((body.pos.y - 275.0).abs() < 1.0);
        assert!(body.vel.y.abs() < 0.5);
    }

    #[test]
    fn dragging_pulls_tile_to_pointer() {
        let mut world = World::new(400.0, 300.0, vec![Body::at(Vec2::new(100.0, 275.0), 50.0)]);
        assert!(!world.grab_at(Vec2::new(300.0, 100.0)));
        assert!(world.grab_at(Vec2::new(110.0, 270.0)));
        world.drag_to(Vec2::new(300.0, 100.0));
        for _ in 0..120 {
            world.step();
        }
        let body = world.bodies[0];
        assert!((body.pos.x - 300.0).abs() < 1.0);
        assert!((body.pos.y - 100.0).abs() < 1.0);

        world.release();
        assert!(!world.is_dragging());
        world.step();
        assert!(world.bodies[0].vel.y > 0.0);
    }

    #[test]
    fn overlapping_tiles_are_pushed_apart() {
        let mut world = World::new(
            400.0,
            400.0,
            vec![
                Body::at(Vec2::new(190.0, 200.0), 40.0),
                Body::at(Vec2::new(210.0, 200.0), 40.0),
            ],
        );
        world.tuning.gravity = 0.0;
        world.step();
        let gap = world.bodies[1].pos.x - world.bodies[0].pos.x;
        assert!(gap >= 40.0 - 1e-9);
    }
}
