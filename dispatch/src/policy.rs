/// ----- DISPATCH POLICY -----
/// Translates building and cab events into movement commands. Keeps two
/// pending hall call queues and sends the nearest eligible cab to each
/// request, with opportunistic pickups while a cab is already moving
/// past a requested floor.

use shared_resources::call::Call;
use shared_resources::direction::Direction;

use crate::state::PendingCalls;

/// Contract between the policy and whatever owns the actual cabs. The
/// policy never moves a cab itself, it only issues go-to-floor commands.
pub trait ElevatorHandle {
    fn current_floor(&self) -> u8;
    /// Current travel direction, `Direction::Stop` when parked.
    fn travel_direction(&self) -> Direction;
    /// True when the destination queue is empty.
    fn is_idle(&self) -> bool;
    /// Append the floor to the cab's destination queue.
    fn go_to_floor(&mut self, floor: u8);
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    pending: PendingCalls,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            pending: PendingCalls::new(),
        }
    }

    pub fn pending(&self) -> &PendingCalls {
        &self.pending
    }

    /// Hall panel press: remember the request, then try to send a cab
    /// right away. The request stays queued even when a cab is commanded
    /// here, it is only cleared once a cab actually stops at the floor.
    pub fn on_hall_button<E: ElevatorHandle>(&mut self, cabs: &mut [E], floor: u8, call: Call) {
        self.pending.insert(floor, call);
        self.assign(cabs, floor, call);
    }

    /// Nearest eligible cab wins. A cab is eligible when parked or when
    /// already travelling in the request direction, ties go to the lowest
    /// cab index. With no eligible cab the request stays queued for a
    /// later idle drain or passing pickup.
    fn assign<E: ElevatorHandle>(&mut self, cabs: &mut [E], floor: u8, call: Call) {
        let wanted = match call {
            Call::HallUp => Direction::Up,
            Call::HallDown => Direction::Down,
            Call::Cab => return,
        };
        let mut nearest: Option<(usize, u8)> = None;
        for (cab, handle) in cabs.iter().enumerate() {
            if !handle.is_idle() && handle.travel_direction() != wanted {
                continue;
            }
            let distance = handle.current_floor().abs_diff(floor);
            match nearest {
                Some((_, best)) if distance >= best => (),
                _ => nearest = Some((cab, distance)),
            }
        }
        if let Some((cab, _)) = nearest {
            cabs[cab].go_to_floor(floor);
        }
    }

    /// A parked cab drains the oldest pending request, up calls before
    /// down calls.
    pub fn on_cab_idle<E: ElevatorHandle>(&mut self, cabs: &mut [E], cab: usize) {
        if let Some(floor) = self.pending.pop_oldest(Call::HallUp) {
            cabs[cab].go_to_floor(floor);
        } else if let Some(floor) = self.pending.pop_oldest(Call::HallDown) {
            cabs[cab].go_to_floor(floor);
        }
    }

    /// In-car destination selection, forwarded as pressed.
    pub fn on_car_button<E: ElevatorHandle>(&mut self, cabs: &mut [E], cab: usize, floor: u8) {
        cabs[cab].go_to_floor(floor);
    }

    /// Pick up a matching pending call on the way past its floor.
    pub fn on_passing_floor<E: ElevatorHandle>(
        &mut self,
        cabs: &mut [E],
        cab: usize,
        floor: u8,
        direction: Direction,
    ) {
        let call = match direction.to_call() {
            Some(call) => call,
            None => return,
        };
        if self.pending.contains(floor, call) {
            self.pending.remove(floor, call);
            cabs[cab].go_to_floor(floor);
        }
    }

    /// A stop serves the floor whichever queue the request sat in.
    pub fn on_stopped_at_floor(&mut self, floor: u8) {
        self.pending.clear_floor(floor);
    }

    /// Per-tick callback from the host, nothing to do periodically.
    pub fn on_update(&mut self, _dt: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCab {
        floor: u8,
        direction: Direction,
        destinations: Vec<u8>,
    }

    impl TestCab {
        fn parked(floor: u8) -> Self {
            TestCab {
                floor: floor,
                direction: Direction::Stop,
                destinations: Vec::new(),
            }
        }

        fn moving(floor: u8, direction: Direction, destination: u8) -> Self {
            TestCab {
                floor: floor,
                direction: direction,
                destinations: vec![destination],
            }
        }
    }

    impl ElevatorHandle for TestCab {
        fn current_floor(&self) -> u8 {
            self.floor
        }

        fn travel_direction(&self) -> Direction {
            self.direction
        }

        fn is_idle(&self) -> bool {
            self.destinations.is_empty()
        }

        fn go_to_floor(&mut self, floor: u8) {
            if self.direction == Direction::Stop {
                self.direction = Direction::towards(self.floor, floor);
            }
            self.destinations.push(floor);
        }
    }

    #[test]
    fn repeated_presses_queue_once() {
        let mut cabs = [TestCab::moving(5, Direction::Down, 0)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 3, Call::HallUp);
        dispatcher.on_hall_button(&mut cabs, 3, Call::HallUp);
        dispatcher.on_hall_button(&mut cabs, 3, Call::HallUp);
        assert_eq!(dispatcher.pending().snapshot().0, vec![3]);
    }

    #[test]
    fn idle_cab_serves_oldest_request_first() {
        let mut cabs = [TestCab::moving(5, Direction::Down, 0)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 3, Call::HallUp);
        dispatcher.on_hall_button(&mut cabs, 7, Call::HallUp);
        dispatcher.on_hall_button(&mut cabs, 2, Call::HallUp);
        assert_eq!(cabs[0].destinations, vec![0]);

        dispatcher.on_cab_idle(&mut cabs, 0);
        assert_eq!(cabs[0].destinations, vec![0, 3]);
        assert_eq!(dispatcher.pending().snapshot().0, vec![7, 2]);
    }

    #[test]
    fn up_calls_drain_before_down_calls() {
        let mut cabs = [TestCab::moving(9, Direction::Down, 0)];
        let mut dispatcher = Dispatcher::new();
        // the down call is assigned to the down-moving cab but stays
        // queued, the up call finds no eligible cab at all
        dispatcher.on_hall_button(&mut cabs, 2, Call::HallDown);
        dispatcher.on_hall_button(&mut cabs, 7, Call::HallUp);
        assert_eq!(cabs[0].destinations, vec![0, 2]);

        // the younger up call is drained first anyway
        dispatcher.on_cab_idle(&mut cabs, 0);
        assert_eq!(cabs[0].destinations, vec![0, 2, 7]);
        assert!(dispatcher.pending().snapshot().0.is_empty());
        assert_eq!(dispatcher.pending().snapshot().1, vec![2]);
    }

    #[test]
    fn nearest_eligible_cab_wins() {
        let mut cabs = [TestCab::parked(2), TestCab::parked(9)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 5, Call::HallUp);
        assert_eq!(cabs[0].destinations, vec![5]);
        assert!(cabs[1].destinations.is_empty());
    }

    #[test]
    fn equal_distance_tie_goes_to_lowest_index() {
        let mut cabs = [TestCab::parked(2), TestCab::parked(8)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 5, Call::HallUp);
        assert_eq!(cabs[0].destinations, vec![5]);
        assert!(cabs[1].destinations.is_empty());
    }

    #[test]
    fn moving_cab_in_matching_direction_is_eligible() {
        let mut cabs = [
            TestCab::moving(1, Direction::Up, 6),
            TestCab::parked(9),
        ];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 2, Call::HallUp);
        assert_eq!(cabs[0].destinations, vec![6, 2]);
        assert!(cabs[1].destinations.is_empty());
    }

    #[test]
    fn busy_opposite_fleet_leaves_request_queued() {
        let mut cabs = [
            TestCab::moving(5, Direction::Down, 0),
            TestCab::moving(4, Direction::Down, 1),
        ];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 3, Call::HallUp);
        assert_eq!(cabs[0].destinations, vec![0]);
        assert_eq!(cabs[1].destinations, vec![1]);
        assert_eq!(dispatcher.pending().snapshot().0, vec![3]);
    }

    #[test]
    fn assignment_keeps_request_queued_until_served() {
        let mut cabs = [TestCab::parked(1)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 5, Call::HallUp);
        assert_eq!(cabs[0].destinations, vec![5]);
        assert_eq!(dispatcher.pending().snapshot().0, vec![5]);
    }

    #[test]
    fn passing_floor_pickup_clears_pending() {
        let mut cabs = [TestCab::moving(5, Direction::Down, 0)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 6, Call::HallUp);
        assert_eq!(dispatcher.pending().snapshot().0, vec![6]);

        dispatcher.on_passing_floor(&mut cabs, 0, 6, Direction::Up);
        assert!(dispatcher.pending().snapshot().0.is_empty());
        assert_eq!(cabs[0].destinations, vec![0, 6]);
    }

    #[test]
    fn passing_floor_without_matching_call_is_ignored() {
        let mut cabs = [TestCab::moving(5, Direction::Down, 0)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 6, Call::HallUp);

        dispatcher.on_passing_floor(&mut cabs, 0, 6, Direction::Down);
        assert_eq!(dispatcher.pending().snapshot().0, vec![6]);
        assert_eq!(cabs[0].destinations, vec![0]);
    }

    #[test]
    fn stop_clears_both_queues() {
        let mut cabs = [TestCab::moving(5, Direction::Down, 0)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_hall_button(&mut cabs, 4, Call::HallUp);
        dispatcher.on_hall_button(&mut cabs, 4, Call::HallDown);

        dispatcher.on_stopped_at_floor(4);
        assert!(dispatcher.pending().is_empty());
    }

    #[test]
    fn idle_with_no_pending_issues_no_command() {
        let mut cabs = [TestCab::parked(0)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_cab_idle(&mut cabs, 0);
        assert!(cabs[0].destinations.is_empty());
    }

    #[test]
    fn car_button_commands_unconditionally() {
        let mut cabs = [TestCab::parked(0)];
        let mut dispatcher = Dispatcher::new();
        dispatcher.on_car_button(&mut cabs, 0, 42);
        assert_eq!(cabs[0].destinations, vec![42]);
    }
}
