//! Unit tests for ry-consist.

use ry_core::TravelDirection;
use ry_core::units::{CAR_LENGTH_M, COUPLER_SLACK_M};
use ry_track::{Location, SegmentEnd};

use crate::{Consist, ConsistError, MotionMode, MotionOrder, TrainSet, TrainSetBuilder};

fn loc(offset_m: f32) -> Location {
    Location::new(ry_core::SegmentId(0), offset_m, SegmentEnd::B)
}

/// Loco + two cars behind it, loco leading.
fn three_car_train() -> TrainSet {
    TrainSetBuilder::new()
        .add_car(CAR_LENGTH_M)
        .add_car(CAR_LENGTH_M)
        .add_car(CAR_LENGTH_M)
        .locomotive(0)
        .front_location(loc(40.0))
        .rear_location(loc(3.0))
        .build()
        .unwrap()
}

mod builder {
    use super::*;

    #[test]
    fn rejects_empty() {
        let err = TrainSetBuilder::new()
            .front_location(loc(0.0))
            .rear_location(loc(0.0))
            .build();
        assert_eq!(err.unwrap_err(), ConsistError::Empty);
    }

    #[test]
    fn rejects_out_of_range_locomotive() {
        let err = TrainSetBuilder::new()
            .add_car(CAR_LENGTH_M)
            .locomotive(3)
            .front_location(loc(0.0))
            .rear_location(loc(0.0))
            .build();
        assert_eq!(
            err.unwrap_err(),
            ConsistError::LocomotiveOutOfRange { index: 3, cars: 1 }
        );
    }

    #[test]
    fn rejects_missing_end_locations() {
        let err = TrainSetBuilder::new().add_car(CAR_LENGTH_M).build();
        assert_eq!(err.unwrap_err(), ConsistError::MissingEndLocation);
    }

    #[test]
    fn interior_couplings_marked_coupled() {
        let train = three_car_train();
        let cars = train.cars();
        assert!(!cars[0].gear_a.coupled);
        assert!(cars[0].gear_b.coupled);
        assert!(cars[1].gear_a.coupled);
        assert!(cars[1].gear_b.coupled);
        assert!(!cars[2].gear_b.coupled);
    }
}

mod addressing {
    use super::*;

    #[test]
    fn relative_index_counts_from_locomotive() {
        let train = TrainSetBuilder::new()
            .add_car(10.0)
            .add_car(20.0)
            .add_car(30.0)
            .locomotive(1)
            .front_location(loc(40.0))
            .rear_location(loc(3.0))
            .build()
            .unwrap();
        assert_eq!(train.car(0).map(|c| c.length_m), Some(20.0));
        assert_eq!(train.car(1).map(|c| c.length_m), Some(30.0));
        assert_eq!(train.car(-1).map(|c| c.length_m), Some(10.0));
        assert!(train.car(2).is_none());
        assert!(train.car(-2).is_none());
    }

    #[test]
    fn total_length_includes_coupler_slack() {
        let train = three_car_train();
        let want = 3.0 * CAR_LENGTH_M + 2.0 * COUPLER_SLACK_M;
        assert!((train.total_length_m() - want).abs() < 1e-4);
    }

    #[test]
    fn head_location_per_direction() {
        let train = three_car_train();
        assert_eq!(train.head_location(TravelDirection::Forward).offset_m, 40.0);
        assert_eq!(train.head_location(TravelDirection::Reverse).offset_m, 3.0);
    }
}

mod brakes_and_air {
    use super::*;

    #[test]
    fn set_handbrake_resolves_or_reports_missing() {
        let mut train = three_car_train();
        assert!(train.set_handbrake(2, true));
        assert!(train.car(2).unwrap().handbrake);
        assert!(!train.set_handbrake(7, true));
    }

    #[test]
    fn release_all_handbrakes() {
        let mut train = three_car_train();
        train.set_handbrake(0, true);
        train.set_handbrake(2, true);
        train.release_all_handbrakes();
        assert!(train.cars().iter().all(|c| !c.handbrake));
    }

    #[test]
    fn connect_air_opens_interior_closes_outer() {
        let mut train = three_car_train();
        train.connect_air();
        let cars = train.cars();
        assert!(!cars[0].gear_a.anglecock_open);
        assert!(cars[0].gear_b.air_connected && cars[0].gear_b.anglecock_open);
        assert!(cars[1].gear_a.air_connected && cars[1].gear_a.anglecock_open);
        assert!(cars[1].gear_b.air_connected);
        assert!(!cars[2].gear_b.anglecock_open);
    }
}

mod uncoupling {
    use super::*;

    #[test]
    fn cut_behind_locomotive_drops_rear_cars() {
        let mut train = three_car_train();
        train.connect_air();
        assert!(train.uncouple_at(1));
        assert_eq!(train.car_count(), 1);
        let kept = &train.cars()[0].gear_b;
        assert!(!kept.coupled);
        assert!(!kept.air_connected);
        assert!(!kept.anglecock_open);
        assert!(kept.cut_lever_lifted);
    }

    #[test]
    fn cut_ahead_of_locomotive_shifts_index() {
        let mut train = TrainSetBuilder::new()
            .add_car(10.0)
            .add_car(20.0)
            .add_car(30.0)
            .locomotive(1)
            .front_location(loc(40.0))
            .rear_location(loc(3.0))
            .build()
            .unwrap();
        assert!(train.uncouple_at(-1));
        assert_eq!(train.car_count(), 2);
        // The locomotive is still rel 0 after the front car departs.
        assert_eq!(train.car(0).map(|c| c.length_m), Some(20.0));
        assert!(train.cars()[0].gear_a.cut_lever_lifted);
    }

    #[test]
    fn locomotive_and_missing_cars_refuse() {
        let mut train = three_car_train();
        assert!(!train.uncouple_at(0));
        assert!(!train.uncouple_at(9));
        assert!(!train.uncouple_at(-1));
        assert_eq!(train.car_count(), 3);
    }
}

mod orders {
    use super::*;

    #[test]
    fn issued_orders_are_logged_in_sequence() {
        let mut train = three_car_train();
        train.issue_order(MotionOrder {
            mode:       MotionMode::Yard,
            direction:  TravelDirection::Forward,
            distance_m: 24.4,
        });
        train.issue_order(MotionOrder {
            mode:       MotionMode::Road { max_speed_mph: 15 },
            direction:  TravelDirection::Reverse,
            distance_m: 76.0,
        });
        assert_eq!(train.orders().len(), 2);
        assert_eq!(
            train.last_order().map(|o| o.mode),
            Some(MotionMode::Road { max_speed_mph: 15 })
        );
    }
}
