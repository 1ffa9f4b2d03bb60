use std::thread;
use std::time::Duration;

use crossbeam_channel::{select, tick, unbounded};

use shared_resources::config::SimulatorConfig;
use shared_resources::direction::Direction;
use shared_resources::message::{CabStatus, Command};

mod cab;
mod debug;
mod traffic;

fn main() -> std::io::Result<()> {
    // READ CONFIGURATION
    let config = SimulatorConfig::get();
    let num_cabs = config.elevator.num_cabs as usize;

    // INITIALIZE CHANNELS
    let (hall_button_tx, hall_button_rx) = unbounded();
    let (car_button_tx, car_button_rx) = unbounded();
    let (cab_event_tx, cab_event_rx) = unbounded();
    let (cab_status_tx, cab_status_rx) = unbounded();
    let (display_status_tx, display_status_rx) = unbounded();
    let (command_tx, command_rx) = unbounded();
    let (pending_tx, pending_rx) = unbounded();
    let (traffic_done_tx, traffic_done_rx) = unbounded();

    // INITIALIZE CAB ENGINES
    let mut goto_txs = Vec::new();
    for cab in 0..num_cabs {
        let (goto_tx, goto_rx) = unbounded();
        goto_txs.push(goto_tx);
        let elevator_settings = config.elevator.clone();
        let simulation_settings = config.simulation.clone();
        let cab_event_tx = cab_event_tx.clone();
        let cab_status_tx = cab_status_tx.clone();
        let display_status_tx = display_status_tx.clone();
        thread::Builder::new().name(format!("cab_{}", cab)).spawn(move || cab::main(
            cab,
            elevator_settings,
            simulation_settings,
            goto_rx,
            cab_event_tx,
            cab_status_tx,
            display_status_tx,
        ))?;
    }

    // INITIALIZE COMMAND ROUTER
    {
        let goto_txs = goto_txs.clone();
        thread::Builder::new().name("command_router".to_string()).spawn(move || loop {
            let command: Command = command_rx.recv().unwrap();
            match goto_txs.get(command.cab) {
                Some(goto_tx) => goto_tx.send(command.floor).unwrap(),
                None => println!("command for unknown cab {}, skipping...", command.cab),
            }
        })?;
    }

    // INITIALIZE DISPATCH MODULE
    {
        let tick_ms = config.simulation.tick_ms;
        thread::Builder::new().name("dispatch".to_string()).spawn(move || dispatch::run::main(
            num_cabs,
            tick_ms,
            hall_button_rx,
            car_button_rx,
            cab_event_rx,
            cab_status_rx,
            command_tx,
            pending_tx,
        ))?;
    }

    // INITIALIZE TRAFFIC MODULE
    {
        let simulation_settings = config.simulation.clone();
        let entries = config.traffic.clone();
        let hall_button_tx = hall_button_tx.clone();
        let car_button_tx = car_button_tx.clone();
        thread::Builder::new().name("traffic".to_string()).spawn(move || traffic::main(
            simulation_settings,
            entries,
            hall_button_tx,
            car_button_tx,
            traffic_done_tx,
        ))?;
    }

    // RUN STATUS DISPLAY UNTIL THE SCENARIO FINISHES
    let mut display = debug::Debug::new(config.elevator.num_floors, num_cabs);
    let mut statuses: Vec<CabStatus> = (0..num_cabs)
        .map(|cab| CabStatus {
            cab: cab,
            floor: 0,
            direction: Direction::Stop,
            destinations: 0,
        })
        .collect();
    let mut pending = (Vec::new(), Vec::new());
    let mut traffic_done = false;
    let mut quiet_ticks: u64 = 0;
    let mut ticks: u64 = 0;
    let timer = tick(Duration::from_millis(config.simulation.tick_ms));

    loop {
        select! {
            recv(display_status_rx) -> msg => {
                let status = msg.unwrap();
                statuses[status.cab] = status;
                display.printstatus(&statuses, &pending)?;
            },
            recv(pending_rx) -> msg => {
                pending = msg.unwrap();
                display.printstatus(&statuses, &pending)?;
            },
            recv(traffic_done_rx) -> _ => {
                traffic_done = true;
            },
            recv(timer) -> _ => {
                ticks += 1;
                if ticks >= config.simulation.max_ticks {
                    println!("TICK BUDGET SPENT, STOPPING...");
                    return Ok(())
                }
                let all_parked = statuses.iter().all(|status| status.destinations == 0);
                if traffic_done && all_parked && pending.0.is_empty() && pending.1.is_empty() {
                    quiet_ticks += 1;
                    if quiet_ticks >= config.simulation.quiet_ticks {
                        println!("ALL CABS PARKED, STOPPING...");
                        return Ok(())
                    }
                } else {
                    quiet_ticks = 0;
                }
            },
        }
    }
}
