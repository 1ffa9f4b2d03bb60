/// ----- TRAFFIC MODULE -----
/// Replays the scripted button presses from the configuration on the
/// shared tick clock. Hall entries go to the hall button channel, cab
/// entries to the car button channel of the named cab. Scenarios contain
/// no randomness, every run replays identically.

use std::time::Duration;

use crossbeam_channel::{tick, Sender};

use shared_resources::call::Call;
use shared_resources::config::{SimulationConfig, TrafficEntry};
use shared_resources::request::Request;

pub fn main(
    simulation_settings: SimulationConfig,
    mut entries: Vec<TrafficEntry>,
    hall_button_tx: Sender<Request>,
    car_button_tx: Sender<(usize, u8)>,
    traffic_done_tx: Sender<bool>,
) {
    let timer = tick(Duration::from_millis(simulation_settings.tick_ms));
    entries.sort_by_key(|entry| entry.tick);

    let mut now: u64 = 0;
    let mut next = 0;
    while next < entries.len() {
        while next < entries.len() && entries[next].tick <= now {
            let entry = &entries[next];
            match entry.call {
                Call::Cab => match entry.cab {
                    Some(cab) => car_button_tx.send((cab, entry.floor)).unwrap(),
                    None => println!("cab entry at tick {} names no cab, skipping...", entry.tick),
                },
                _ => hall_button_tx.send(Request { floor: entry.floor, call: entry.call }).unwrap(),
            }
            next += 1;
        }
        if next < entries.len() {
            timer.recv().unwrap();
            now += 1;
        }
    }
    println!("TRAFFIC SCENARIO COMPLETE");
    traffic_done_tx.send(true).unwrap();
}
