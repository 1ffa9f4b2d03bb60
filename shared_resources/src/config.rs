use std::fs;
use std::collections::HashMap;
use std::env;

use super::call::Call;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct TrafficEntry {
    pub tick: u64,
    pub floor: u8,
    pub call: Call,
    #[serde(default)]
    pub cab: Option<usize>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub elevator: HashMap<String, u8>,
    pub simulation: HashMap<String, u64>,
    pub traffic: Vec<TrafficEntry>,
}

#[derive(Debug, Clone)]
pub struct ElevatorConfig {
    pub num_floors: u8,
    pub num_cabs: u8,
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub tick_ms: u64,
    pub door_dwell_ticks: u64,
    pub quiet_ticks: u64,
    pub max_ticks: u64,
}

fn read_config_file() -> Result<ConfigFile, serde_json::Error> {
    let file_path = "config.json";
    let fallback_file_path = "_config.json";
    let config_contents = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(_) => {
            println!("No configuration file provided, using default settings...");
            fs::read_to_string(fallback_file_path).unwrap()
        },
    };
    serde_json::from_str(&config_contents)
}

fn parse_env_args(default_max_ticks: u64) -> u64 {
    let mut max_ticks = default_max_ticks;

    let args: Vec<String> = env::args().collect();
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--ticks" => {
                max_ticks = match arg_pair[1].parse::<u64>() {
                    Ok(num) => num,
                    Err(_) => {
                        println!("tick budget {} is not a number, skipping...", arg_pair[1]);
                        max_ticks
                    },
                };
            },
            _ => (),
        }
    }
    max_ticks
}

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub elevator: ElevatorConfig,
    pub simulation: SimulationConfig,
    pub traffic: Vec<TrafficEntry>,
}

impl SimulatorConfig {
    pub fn get() -> Self {
        let config_file = read_config_file().unwrap();
        let max_ticks = parse_env_args(config_file.simulation["max_ticks"]);

        SimulatorConfig {
            elevator: ElevatorConfig {
                num_floors: config_file.elevator["num_floors"],
                num_cabs: config_file.elevator["num_cabs"],
            },
            simulation: SimulationConfig {
                tick_ms: config_file.simulation["tick_ms"],
                door_dwell_ticks: config_file.simulation["door_dwell_ticks"],
                quiet_ticks: config_file.simulation["quiet_ticks"],
                max_ticks: max_ticks,
            },
            traffic: config_file.traffic,
        }
    }
}
