use std::f64::consts::PI;

use darts::board::Canvas;
use darts::error::DartsError;
use darts::geometry::{Circle, Point};
use darts::utils::batches;
use darts::{dartboard, monte_pi, throw_darts, Estimate};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_million_darts_converge_to_pi() {
    let board = dartboard();
    let mut rng = StdRng::seed_from_u64(2015);
    let estimate = monte_pi(&mut rng, 1_000_000, |rng| board.sample(rng), |_, _| ()).unwrap();
    assert_eq!(estimate.total, 1_000_000);
    assert!((estimate.pi() - 3.14159).abs() < 0.01, "estimate {}", estimate);
    assert!(estimate.error() < 0.01);
}

#[test]
fn test_forced_darts_estimate() {
    let darts = vec![Point::new(0.0, 0.0),
                     Point::new(1.0, 1.0),
                     Point::new(0.5, 0.0),
                     Point::new(-0.9, 0.9)];
    let mut next = darts.into_iter();
    let mut rng = StdRng::seed_from_u64(0);
    let estimate = monte_pi(&mut rng, 4, |_| next.next().unwrap(), |_, _| ()).unwrap();
    assert_eq!(estimate.inside, 2);
    assert_eq!(estimate.pi(), 2.0);
    assert_eq!(estimate.to_string(), "2 (2 of 4 darts inside)");
}

#[test]
fn test_batched_run_matches_single_run() {
    let board = dartboard();
    let mut single = StdRng::seed_from_u64(42);
    let whole = monte_pi(&mut single, 12_345, |rng| board.sample(rng), |_, _| ()).unwrap();

    let mut batched = StdRng::seed_from_u64(42);
    let mut estimate = Estimate::default();
    for n in batches(12_345, 5000) {
        estimate += throw_darts(&mut batched, n, |rng| board.sample(rng), |_, _| ());
    }
    assert_eq!(estimate, whole);
}

#[test]
fn test_visit_sees_every_classified_dart() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut seen = 0;
    let board = dartboard();
    let estimate = monte_pi(&mut rng, 1000, |rng| board.sample(rng), |dart, hit| {
        assert!(dart.x >= -1.0 && dart.x <= 1.0);
        assert!(dart.y >= -1.0 && dart.y <= 1.0);
        assert_eq!(hit, Circle::UNIT.contains(dart));
        seen += 1;
    }).unwrap();
    assert_eq!(seen, 1000);
    assert!(estimate.inside > 0 && estimate.inside < 1000);
    assert!(estimate.pi() > 2.5 && estimate.pi() < PI + 0.6);
}

#[test]
fn test_zero_darts_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = monte_pi(&mut rng, 0, darts::random_dart, |_, _| ()).unwrap_err();
    assert!(matches!(err, DartsError::NoDarts));
    assert_eq!(err.to_string(), "at least one dart must be thrown");
}

#[test]
fn test_darts_drawn_on_board() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut canvas = Canvas::new(61, 31).unwrap();
    canvas.set_up_dartboard();
    let board = canvas.to_string();
    assert!(!board.contains('o') && !board.contains('x'));

    for _ in 0 .. 200 {
        darts::throw_dart(&mut rng, &mut canvas);
    }
    let board = canvas.to_string();
    assert_eq!(board.lines().count(), canvas.height());
    assert!(board.lines().all(|line| line.chars().count() == canvas.width()));
    assert!(board.contains('o'));
    assert!(board.contains('x'));
}
