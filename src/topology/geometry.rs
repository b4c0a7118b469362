//! Distance helpers.

use super::types::Point;

/// Squared Euclidean distance in world units.
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Euclidean distance in world units.
pub fn distance(a: &Point, b: &Point) -> f64 {
    distance2(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(1.7, 2.5);
        let b = Point::new(4.0, 3.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance2(&a, &b), 25.0);
        assert_eq!(distance(&a, &b), 5.0);
    }
}
