/// ----- DISPATCH MODULE -----
/// Runs the dispatch policy on its own thread. Button presses and cab
/// events arrive on channels, movement commands leave on the command
/// channel. Cab state is mirrored from the periodic status snapshots so
/// the policy sees the fleet as of the latest reported event.

use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver, Sender};
use log::warn;

use shared_resources::direction::Direction;
use shared_resources::message::{CabEvent, CabStatus, Command};
use shared_resources::request::Request;

use crate::policy::{Dispatcher, ElevatorHandle};

/// Last reported state of one cab plus the command path back to it.
/// Commands issued here count against the mirror immediately, so a cab
/// commanded earlier in the same burst of events is no longer idle.
pub struct CabLink {
    cab: usize,
    floor: u8,
    direction: Direction,
    destinations: u8,
    command_tx: Sender<Command>,
}

impl CabLink {
    fn new(cab: usize, command_tx: Sender<Command>) -> Self {
        CabLink {
            cab: cab,
            floor: 0,
            direction: Direction::Stop,
            destinations: 0,
            command_tx: command_tx,
        }
    }

    fn update(&mut self, status: CabStatus) {
        self.floor = status.floor;
        self.direction = status.direction;
        self.destinations = status.destinations;
    }
}

impl ElevatorHandle for CabLink {
    fn current_floor(&self) -> u8 {
        self.floor
    }

    fn travel_direction(&self) -> Direction {
        self.direction
    }

    fn is_idle(&self) -> bool {
        self.destinations == 0
    }

    fn go_to_floor(&mut self, floor: u8) {
        if self.destinations == 0 {
            self.direction = Direction::towards(self.floor, floor);
        }
        self.destinations += 1;
        self.command_tx.send(Command { cab: self.cab, floor: floor }).unwrap();
    }
}

pub fn main(
    num_cabs: usize,
    tick_ms: u64,
    hall_button_rx: Receiver<Request>,
    car_button_rx: Receiver<(usize, u8)>,
    cab_event_rx: Receiver<CabEvent>,
    cab_status_rx: Receiver<CabStatus>,
    command_tx: Sender<Command>,
    pending_tx: Sender<(Vec<u8>, Vec<u8>)>,
) {
    let timer = tick(Duration::from_millis(tick_ms));

    let mut dispatcher = Dispatcher::new();
    let mut cabs: Vec<CabLink> = (0..num_cabs)
        .map(|cab| CabLink::new(cab, command_tx.clone()))
        .collect();

    loop {
        select! {
            recv(hall_button_rx) -> msg => {
                let request = msg.unwrap();
                dispatcher.on_hall_button(&mut cabs, request.floor, request.call);
            },
            recv(car_button_rx) -> msg => {
                let (cab, floor) = msg.unwrap();
                if cab < cabs.len() {
                    dispatcher.on_car_button(&mut cabs, cab, floor);
                } else {
                    warn!("car button press for unknown cab {}", cab);
                }
            },
            recv(cab_event_rx) -> msg => {
                let event = msg.unwrap();
                if event.cab() < cabs.len() {
                    match event {
                        CabEvent::Idle { cab } => dispatcher.on_cab_idle(&mut cabs, cab),
                        CabEvent::PassingFloor { cab, floor, direction } => {
                            dispatcher.on_passing_floor(&mut cabs, cab, floor, direction)
                        },
                        CabEvent::StoppedAtFloor { cab: _, floor } => {
                            dispatcher.on_stopped_at_floor(floor)
                        },
                    }
                } else {
                    warn!("event for unknown cab {}: {:?}", event.cab(), event);
                }
            },
            recv(cab_status_rx) -> msg => {
                let status = msg.unwrap();
                match cabs.get_mut(status.cab) {
                    Some(link) => link.update(status),
                    None => warn!("status for unknown cab {}", status.cab),
                }
            },
            recv(timer) -> _ => {
                dispatcher.on_update(tick_ms as f64 / 1000.0);
            },
        }
        pending_tx.send(dispatcher.pending().snapshot()).unwrap();
    }
}
