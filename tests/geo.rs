#[cfg(test)]
mod tests {
    use logitrack::libs::geo::{self, Coordinates};

    #[test]
    fn test_distance_is_zero_for_identical_points() {
        assert_eq!(geo::distance(45.4642, 9.19, 45.4642, 9.19), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let forward = geo::distance(45.4642, 9.19, 41.9028, 12.4964);
        let backward = geo::distance(41.9028, 12.4964, 45.4642, 9.19);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_distance_one_degree_of_longitude_at_equator() {
        // One degree along the equator is about 111.19 km for R = 6371 km.
        let distance = geo::distance(0.0, 0.0, 0.0, 1.0);
        assert!((distance - 111.19).abs() < 0.05);
    }

    #[test]
    fn test_distance_short_hop() {
        // Roughly 55 meters per 0.0005 degrees of latitude.
        let distance = geo::distance(45.0, 9.0, 45.0005, 9.0);
        assert!(distance > 0.04 && distance < 0.07);
    }

    #[test]
    fn test_coordinates_distance_to_matches_free_function() {
        let milan = Coordinates::new(45.4642, 9.19);
        let rome = Coordinates::new(41.9028, 12.4964);
        assert_eq!(milan.distance_to(&rome), geo::distance(45.4642, 9.19, 41.9028, 12.4964));
    }

    #[test]
    fn test_fuel_cost_closed_form() {
        assert_eq!(geo::fuel_cost(20.0, 10.0, 1.5), 3.0);
        assert_eq!(geo::fuel_cost(0.0, 12.0, 1.5), 0.0);
        assert_eq!(geo::fuel_cost(120.0, 12.0, 2.0), 20.0);
    }
}
