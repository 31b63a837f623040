//! In-memory consist used by tests and demos.

use ry_core::TravelDirection;
use ry_track::Location;

use crate::car::Car;
use crate::consist::Consist;
use crate::error::{ConsistError, ConsistResult};
use crate::order::MotionOrder;

// ── TrainSet ──────────────────────────────────────────────────────────────────

/// A concrete [`Consist`]: an ordered car list, a locomotive somewhere in it,
/// and the two outward-facing end locations.
///
/// Every issued [`MotionOrder`] is kept in a log so tests can assert on what
/// the execution engine asked for.  End locations are *not* recomputed after
/// a cut; hosts that track real geometry implement [`Consist`] themselves.
#[derive(Debug)]
pub struct TrainSet {
    cars:       Vec<Car>,
    locomotive: usize,
    front:      Location,
    rear:       Location,
    orders:     Vec<MotionOrder>,
}

impl TrainSet {
    pub fn builder() -> TrainSetBuilder {
        TrainSetBuilder::new()
    }

    /// Every order issued so far, oldest first.
    pub fn orders(&self) -> &[MotionOrder] {
        &self.orders
    }
}

impl Consist for TrainSet {
    fn cars(&self) -> &[Car] {
        &self.cars
    }

    fn cars_mut(&mut self) -> &mut [Car] {
        &mut self.cars
    }

    fn locomotive_index(&self) -> usize {
        self.locomotive
    }

    fn head_location(&self, direction: TravelDirection) -> Location {
        match direction {
            TravelDirection::Forward => self.front,
            TravelDirection::Reverse => self.rear,
        }
    }

    fn issue_order(&mut self, order: MotionOrder) {
        self.orders.push(order);
    }

    fn last_order(&self) -> Option<&MotionOrder> {
        self.orders.last()
    }

    fn uncouple_at(&mut self, rel: i32) -> bool {
        if rel == 0 {
            return false;
        }
        let Ok(abs) = usize::try_from(self.locomotive as i64 + rel as i64) else {
            return false;
        };
        if abs >= self.cars.len() {
            return false;
        }

        if rel > 0 {
            // Cut between abs-1 (kept) and abs; everything from abs rearward
            // departs.
            let kept = &mut self.cars[abs - 1].gear_b;
            kept.coupled = false;
            kept.air_connected = false;
            kept.anglecock_open = false;
            kept.cut_lever_lifted = true;
            let departing = &mut self.cars[abs].gear_a;
            departing.coupled = false;
            departing.air_connected = false;
            departing.anglecock_open = false;
            self.cars.truncate(abs);
        } else {
            // Cut between abs (departing) and abs+1 (kept); the front portion
            // departs and the locomotive index shifts down.
            let departing = &mut self.cars[abs].gear_b;
            departing.coupled = false;
            departing.air_connected = false;
            departing.anglecock_open = false;
            let kept = &mut self.cars[abs + 1].gear_a;
            kept.coupled = false;
            kept.air_connected = false;
            kept.anglecock_open = false;
            kept.cut_lever_lifted = true;
            self.cars.drain(..=abs);
            self.locomotive -= abs + 1;
        }
        true
    }
}

// ── TrainSetBuilder ───────────────────────────────────────────────────────────

/// Assemble a [`TrainSet`] car by car.
///
/// `build()` marks the gear at every interior coupling as coupled and fails
/// on an empty car list, an out-of-range locomotive index, or missing end
/// locations.
pub struct TrainSetBuilder {
    cars:       Vec<Car>,
    locomotive: usize,
    front:      Option<Location>,
    rear:       Option<Location>,
}

impl TrainSetBuilder {
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            locomotive: 0,
            front: None,
            rear: None,
        }
    }

    pub fn add_car(mut self, length_m: f32) -> Self {
        self.cars.push(Car::new(length_m));
        self
    }

    /// Absolute index of the locomotive in the order cars were added.
    pub fn locomotive(mut self, index: usize) -> Self {
        self.locomotive = index;
        self
    }

    /// Outward-facing location of the front coupler.
    pub fn front_location(mut self, loc: Location) -> Self {
        self.front = Some(loc);
        self
    }

    /// Outward-facing location of the rear coupler.
    pub fn rear_location(mut self, loc: Location) -> Self {
        self.rear = Some(loc);
        self
    }

    pub fn build(self) -> ConsistResult<TrainSet> {
        if self.cars.is_empty() {
            return Err(ConsistError::Empty);
        }
        if self.locomotive >= self.cars.len() {
            return Err(ConsistError::LocomotiveOutOfRange {
                index: self.locomotive,
                cars:  self.cars.len(),
            });
        }
        let (Some(front), Some(rear)) = (self.front, self.rear) else {
            return Err(ConsistError::MissingEndLocation);
        };

        let mut cars = self.cars;
        let n = cars.len();
        for i in 0..n {
            cars[i].gear_a.coupled = i > 0;
            cars[i].gear_b.coupled = i + 1 < n;
        }

        Ok(TrainSet {
            cars,
            locomotive: self.locomotive,
            front,
            rear,
            orders: Vec::new(),
        })
    }
}

impl Default for TrainSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
