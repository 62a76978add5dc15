use rand::distributions::{Distribution, Uniform};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// The circle inscribed in the dartboard.
    pub const UNIT: Circle = Circle { center: Point::ORIGIN, radius: 1.0 };

    pub fn new(center: Point, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Points exactly on the circumference are outside.
    pub fn contains(&self, point: &Point) -> bool {
        point.distance(&self.center) < self.radius
    }
}

/// Returns whether `point` lies strictly closer than `radius` to the
/// center `(circle_center_x, circle_center_y)`.
pub fn is_in_circle(point: &Point,
                    circle_center_x: f64,
                    circle_center_y: f64,
                    radius: f64) -> bool {
    Circle::new(Point::new(circle_center_x, circle_center_y), radius)
        .contains(point)
}

/// Axis-aligned square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub center: Point,
    pub width: f64,
}

impl Square {
    pub fn new(center: Point, width: f64) -> Self {
        Square { center, width }
    }

    /// The 2x2 board around the unit circle.
    pub fn dartboard() -> Self {
        Square::new(Point::ORIGIN, 2.0)
    }

    pub fn top_left(&self) -> Point {
        let half = self.width / 2.0;
        Point::new(self.center.x - half, self.center.y + half)
    }

    pub fn contains(&self, point: &Point) -> bool {
        let half = self.width / 2.0;
        (point.x - self.center.x).abs() <= half
            && (point.y - self.center.y).abs() <= half
    }

    /// Uniform distribution over the square, edges included.  Build it once
    /// and sample it for every dart.
    pub fn sampler(&self) -> SquareSampler {
        let half = self.width / 2.0;
        SquareSampler {
            xs: Uniform::new_inclusive(self.center.x - half, self.center.x + half),
            ys: Uniform::new_inclusive(self.center.y - half, self.center.y + half),
        }
    }
}

/// Draws both coordinates of a point independently.
#[derive(Clone, Copy, Debug)]
pub struct SquareSampler {
    xs: Uniform<f64>,
    ys: Uniform<f64>,
}

impl Distribution<Point> for SquareSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(self.xs.sample(rng), self.ys.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn boundary_is_outside() {
        let cases = [
            (Point::new(1.0, 0.0), Point::ORIGIN, 1.0),
            (Point::new(0.0, -1.0), Point::ORIGIN, 1.0),
            (Point::new(3.0, 4.0), Point::ORIGIN, 5.0),
            (Point::new(5.0, 6.0), Point::new(2.0, 2.0), 5.0),
            (Point::new(-2.5, 1.0), Point::new(-2.5, -1.0), 2.0),
        ];
        for &(point, center, radius) in cases.iter() {
            assert!(!Circle::new(center, radius).contains(&point),
                    "{:?} on circle {:?}/{}", point, center, radius);
            assert!(!is_in_circle(&point, center.x, center.y, radius));
        }
    }

    #[test]
    fn inside_and_outside() {
        assert!(Circle::UNIT.contains(&Point::ORIGIN));
        assert!(Circle::UNIT.contains(&Point::new(0.5, 0.0)));
        assert!(Circle::UNIT.contains(&Point::new(0.7, -0.7)));
        assert!(!Circle::UNIT.contains(&Point::new(1.0, 1.0)));
        assert!(!Circle::UNIT.contains(&Point::new(-0.9, 0.9)));
        assert!(is_in_circle(&Point::new(10.5, 10.0), 10.0, 10.0, 1.0));
    }

    #[test]
    fn containment_is_stable() {
        let point = Point::new(0.70710678, 0.70710678);
        let first = Circle::UNIT.contains(&point);
        for _ in 0 .. 100 {
            assert_eq!(Circle::UNIT.contains(&point), first);
        }
    }

    #[test]
    fn dartboard_samples_stay_on_board() {
        let board = Square::dartboard();
        assert_eq!(board.top_left(), Point::new(-1.0, 1.0));
        let sampler = board.sampler();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0 .. 10_000 {
            let p: Point = sampler.sample(&mut rng);
            assert!(board.contains(&p), "{:?} off the board", p);
        }
    }

    #[test]
    fn offset_square_samples() {
        let square = Square::new(Point::new(5.0, -3.0), 0.5);
        let mut rng = StdRng::seed_from_u64(8);
        let points: Vec<Point> = square.sampler().sample_iter(&mut rng).take(1000).collect();
        assert!(points.iter().all(|p| square.contains(p)));
        assert!(points.iter().any(|p| p.x < 5.0) && points.iter().any(|p| p.x > 5.0));
    }
}
