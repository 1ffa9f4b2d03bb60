/// ----- CAB MODULE -----
/// One motion engine per cab. Owns the cab's floor, direction and ordered
/// destination list, advances one floor per tick and reports idle, passing
/// floor and stopped events back to the dispatcher. Movement belongs here,
/// the dispatcher only issues go-to-floor commands.

use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver, Sender};

use shared_resources::config::{ElevatorConfig, SimulationConfig};
use shared_resources::direction::Direction;
use shared_resources::message::{CabEvent, CabStatus};

#[derive(PartialEq, Debug)]
enum Behaviour {
    Idle,
    Moving,
    DoorOpen,
}

pub fn main(
    cab: usize,
    elevator_settings: ElevatorConfig,
    simulation_settings: SimulationConfig,
    goto_rx: Receiver<u8>,
    cab_event_tx: Sender<CabEvent>,
    cab_status_tx: Sender<CabStatus>,
    display_status_tx: Sender<CabStatus>,
) {
    let timer = tick(Duration::from_millis(simulation_settings.tick_ms));
    let top_floor = elevator_settings.num_floors - 1;

    let mut floor: u8 = 0;
    let mut direction = Direction::Stop;
    let mut behaviour = Behaviour::Idle;
    let mut destinations: Vec<u8> = Vec::new();
    let mut dwell: u64 = 0;

    cab_event_tx.send(CabEvent::Idle { cab: cab }).unwrap();

    loop {
        select! {
            recv(goto_rx) -> msg => {
                // the shaft ends at the top floor
                let destination = msg.unwrap().min(top_floor);
                if !destinations.contains(&destination) {
                    destinations.push(destination);
                }
                match behaviour {
                    Behaviour::Idle => {
                        if destination == floor {
                            destinations.retain(|&pending| pending != floor);
                            direction = Direction::Stop;
                            behaviour = Behaviour::DoorOpen;
                            dwell = 0;
                            cab_event_tx.send(CabEvent::StoppedAtFloor { cab: cab, floor: floor }).unwrap();
                        } else {
                            direction = Direction::towards(floor, destination);
                            behaviour = Behaviour::Moving;
                        }
                    },
                    Behaviour::Moving => {
                        // commanded to the floor currently under the cab:
                        // stop here instead of coming back for it later
                        if destination == floor {
                            destinations.retain(|&pending| pending != floor);
                            behaviour = Behaviour::DoorOpen;
                            dwell = 0;
                            if destinations.is_empty() {
                                direction = Direction::Stop;
                            }
                            cab_event_tx.send(CabEvent::StoppedAtFloor { cab: cab, floor: floor }).unwrap();
                        }
                    },
                    Behaviour::DoorOpen => {
                        if destination == floor {
                            destinations.retain(|&pending| pending != floor);
                            dwell = 0;
                        }
                    },
                }
            },
            recv(timer) -> _ => {
                match behaviour {
                    Behaviour::Moving => {
                        if let Some(&target) = destinations.first() {
                            direction = Direction::towards(floor, target);
                            match direction {
                                Direction::Up => floor += 1,
                                Direction::Down => floor -= 1,
                                Direction::Stop => (),
                            }
                            if destinations.contains(&floor) {
                                destinations.retain(|&pending| pending != floor);
                                behaviour = Behaviour::DoorOpen;
                                dwell = 0;
                                if destinations.is_empty() {
                                    direction = Direction::Stop;
                                }
                                cab_event_tx.send(CabEvent::StoppedAtFloor { cab: cab, floor: floor }).unwrap();
                            } else {
                                cab_event_tx.send(CabEvent::PassingFloor { cab: cab, floor: floor, direction: direction }).unwrap();
                            }
                        } else {
                            behaviour = Behaviour::Idle;
                            direction = Direction::Stop;
                        }
                    },
                    Behaviour::DoorOpen => {
                        dwell += 1;
                        if dwell >= simulation_settings.door_dwell_ticks {
                            if destinations.is_empty() {
                                behaviour = Behaviour::Idle;
                                direction = Direction::Stop;
                                cab_event_tx.send(CabEvent::Idle { cab: cab }).unwrap();
                            } else {
                                direction = Direction::towards(floor, destinations[0]);
                                behaviour = Behaviour::Moving;
                            }
                        }
                    },
                    Behaviour::Idle => (),
                }
            },
        }
        let status = CabStatus {
            cab: cab,
            floor: floor,
            direction: direction,
            destinations: destinations.len() as u8,
        };
        cab_status_tx.send(status).unwrap();
        display_status_tx.send(status).unwrap();
    }
}
