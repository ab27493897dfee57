use core::ops::{Add, Mul, Sub};

/// Tolerance used by [`points_approx_eq`].
pub const POINT_EPS: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn norm_sq(self) -> f32 {
        self.dot(self)
    }

    pub fn norm(self) -> f32 {
        self.norm_sq().sqrt()
    }

    pub fn normalize(self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            Self::default()
        } else {
            self * (1.0 / n)
        }
    }
}

impl Add<Vec2f> for Point2f {
    type Output = Point2f;

    fn add(self, rhs: Vec2f) -> Self::Output {
        Point2f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Point2f> for Point2f {
    type Output = Vec2f;

    fn sub(self, rhs: Point2f) -> Self::Output {
        Vec2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Vec2f {
    type Output = Vec2f;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2f {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Infinite line through `p` with unit direction `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2f {
    pub p: Point2f,
    pub dir: Vec2f,
}

impl Line2f {
    /// Line through two points, `None` if they coincide.
    pub fn through(a: Point2f, b: Point2f) -> Option<Self> {
        if points_approx_eq(a, b) {
            return None;
        }
        Some(Self {
            p: a,
            dir: (b - a).normalize(),
        })
    }

    /// Signed position of the orthogonal projection of `q` along the line,
    /// measured from `p`.
    pub fn param(&self, q: Point2f) -> f32 {
        (q - self.p).dot(self.dir)
    }

    pub fn at(&self, t: f32) -> Point2f {
        self.p + self.dir * t
    }

    pub fn project(&self, q: Point2f) -> Point2f {
        self.at(self.param(q))
    }

    pub fn squared_distance(&self, q: Point2f) -> f32 {
        squared_distance(q, self.project(q))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline2f {
    pub points: Vec<Point2f>,
}

pub fn points_approx_eq(a: Point2f, b: Point2f) -> bool {
    (a.x - b.x).abs() < POINT_EPS && (a.y - b.y).abs() < POINT_EPS
}

pub fn squared_distance(a: Point2f, b: Point2f) -> f32 {
    (a - b).norm_sq()
}

/// Squared distance from `q` to the closed segment `[a, b]`.
pub fn squared_distance_to_segment(q: Point2f, a: Point2f, b: Point2f) -> f32 {
    let ab = b - a;
    let len_sq = ab.norm_sq();
    if len_sq == 0.0 {
        return squared_distance(q, a);
    }

    let t = ((q - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    squared_distance(q, a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::{
        Line2f, Point2f, Vec2f, points_approx_eq, squared_distance, squared_distance_to_segment,
    };

    fn p(x: f32, y: f32) -> Point2f {
        Point2f::new(x, y)
    }

    fn close(a: Point2f, b: Point2f) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn vec_ops_and_normalize() {
        let a = Vec2f { x: 3.0, y: 4.0 };
        let b = Vec2f { x: 1.0, y: -2.0 };

        assert!((a.dot(b) + 5.0).abs() < 1e-6);
        assert!((a.norm() - 5.0).abs() < 1e-6);
        assert!((a.normalize().norm() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2f::default().normalize(), Vec2f::default());
    }

    #[test]
    fn line_projection() {
        assert!(Line2f::through(p(1.0, 1.0), p(1.0, 1.0)).is_none());

        let diag = Line2f::through(p(0.0, 0.0), p(2.0, 2.0)).expect("distinct points");
        let q = diag.project(p(2.0, 0.0));
        assert!(close(q, p(1.0, 1.0)));
        assert!((diag.squared_distance(p(2.0, 0.0)) - 2.0).abs() < 1e-4);

        let vertical = Line2f::through(p(3.0, 0.0), p(3.0, 4.0)).expect("distinct points");
        assert!(close(vertical.project(p(7.0, 2.0)), p(3.0, 2.0)));
        assert!(points_approx_eq(p(0.5, 0.5), p(0.5, 0.5)));
        assert!((vertical.param(p(7.0, 2.0)) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = p(0.0, 0.0);
        let b = p(4.0, 0.0);

        assert!((squared_distance_to_segment(p(2.0, 3.0), a, b) - 9.0).abs() < 1e-6);
        assert!((squared_distance_to_segment(p(-3.0, 4.0), a, b) - 25.0).abs() < 1e-6);
        assert!((squared_distance_to_segment(p(5.0, 0.0), a, b) - 1.0).abs() < 1e-6);

        // vertical segment
        let c = p(1.0, 1.0);
        let d = p(1.0, 5.0);
        assert!((squared_distance_to_segment(p(3.0, 2.0), c, d) - 4.0).abs() < 1e-6);
        assert!(squared_distance_to_segment(p(1.0, 1.0), c, c).abs() < 1e-6);
        assert!((squared_distance(c, d) - 16.0).abs() < 1e-6);
    }
}
