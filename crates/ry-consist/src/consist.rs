//! The [`Consist`] trait — what a schedule command can do to a train.

use ry_core::TravelDirection;
use ry_core::units::COUPLER_SLACK_M;
use ry_track::Location;

use crate::car::Car;
use crate::order::MotionOrder;

/// Actuator interface over one coupled set of cars.
///
/// Cars are addressed by a *relative* index: `0` is the locomotive, positive
/// indices count toward the rear, negative toward the front.  An index that
/// falls off either end resolves to `None` — callers decide whether that is
/// an error or a no-op.
///
/// The provided methods implement whole-consist operations on top of the
/// slice accessors so implementations only supply storage and geometry.
pub trait Consist {
    /// All cars, front to rear.
    fn cars(&self) -> &[Car];

    fn cars_mut(&mut self) -> &mut [Car];

    /// Absolute index of the locomotive within [`cars`](Self::cars).
    fn locomotive_index(&self) -> usize;

    /// Leading end of the consist when travelling in `direction`, facing
    /// outward (away from the cars).
    fn head_location(&self, direction: TravelDirection) -> Location;

    /// Hand a movement instruction to the consist.
    fn issue_order(&mut self, order: MotionOrder);

    fn last_order(&self) -> Option<&MotionOrder>;

    /// Part the coupling on the locomotive side of the car at `rel`,
    /// detaching that car and everything beyond it.  Implementations close
    /// the air on both sides of the cut and lift the cut lever on the kept
    /// side.  Returns `false` when `rel` is `0` or resolves to no car.
    fn uncouple_at(&mut self, rel: i32) -> bool;

    // ── Provided ──────────────────────────────────────────────────────────────

    fn car_count(&self) -> usize {
        self.cars().len()
    }

    /// Resolve a relative index to a car.
    fn car(&self, rel: i32) -> Option<&Car> {
        let abs = self.locomotive_index() as i64 + rel as i64;
        usize::try_from(abs).ok().and_then(|i| self.cars().get(i))
    }

    fn car_mut(&mut self, rel: i32) -> Option<&mut Car> {
        let abs = self.locomotive_index() as i64 + rel as i64;
        usize::try_from(abs)
            .ok()
            .and_then(|i| self.cars_mut().get_mut(i))
    }

    /// Coupled length: car lengths plus one unit of coupler slack per
    /// coupling.
    fn total_length_m(&self) -> f32 {
        let cars = self.cars();
        let couplings = cars.len().saturating_sub(1);
        cars.iter().map(|c| c.length_m).sum::<f32>() + COUPLER_SLACK_M * couplings as f32
    }

    /// Apply or release one car's handbrake.  Returns `false` when `rel`
    /// resolves to no car.
    fn set_handbrake(&mut self, rel: i32, applied: bool) -> bool {
        match self.car_mut(rel) {
            Some(car) => {
                car.handbrake = applied;
                true
            }
            None => false,
        }
    }

    fn release_all_handbrakes(&mut self) {
        for car in self.cars_mut() {
            car.handbrake = false;
        }
    }

    /// Connect the brake pipe through the whole consist: gladhands joined
    /// and anglecocks opened at every coupling, outer anglecocks closed.
    fn connect_air(&mut self) {
        let cars = self.cars_mut();
        let n = cars.len();
        for i in 0..n {
            let coupled_ahead = i > 0;
            let coupled_behind = i + 1 < n;
            cars[i].gear_a.air_connected = coupled_ahead;
            cars[i].gear_a.anglecock_open = coupled_ahead;
            cars[i].gear_b.air_connected = coupled_behind;
            cars[i].gear_b.anglecock_open = coupled_behind;
        }
    }
}
