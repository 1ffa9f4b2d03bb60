/// ----- DEBUG MODULE -----
/// Live status table for the simulation: pending hall calls per floor
/// plus every cab's position, redrawn in place on each update.

use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, Result, ExecutableCommand};

use shared_resources::message::CabStatus;

pub struct Debug {
    stdout: Stdout,
    num_floors: u8,
    status_size: u16,
}

impl Debug {
    pub fn new(num_floors: u8, num_cabs: usize) -> Self {
        let status_size = 12 + 2 * num_floors as u16 + 2 * num_cabs as u16;
        for _ in 0..status_size {
            println!();
        }
        Debug {
            stdout: stdout(),
            num_floors: num_floors,
            status_size: status_size,
        }
    }

    pub fn printstatus(&mut self, statuses: &[CabStatus], pending: &(Vec<u8>, Vec<u8>)) -> Result<()> {
        self.stdout.execute(cursor::MoveUp(self.status_size))?;
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        writeln!(self.stdout, "+--------------------------------------+")?;
        writeln!(self.stdout, "| {0:<36} |", "PENDING HALL CALLS")?;
        writeln!(self.stdout, "+------------+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} |", "FLOOR", "HALL UP", "HALL DOWN")?;
        for floor in (0..self.num_floors).rev() {
            writeln!(self.stdout, "+------------+------------+------------+")?;
            writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} |", floor, pending.0.contains(&floor), pending.1.contains(&floor))?;
        }
        writeln!(self.stdout, "+------------+------------+------------+\n\n")?;

        writeln!(self.stdout, "+---------------------------------------------------+")?;
        writeln!(self.stdout, "| {0:<49} |", "CABS")?;
        writeln!(self.stdout, "+------------+------------+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "CAB", "FLOOR", "DIRECTION", "QUEUED")?;
        for status in statuses {
            writeln!(self.stdout, "+------------+------------+------------+------------+")?;
            writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", status.cab, status.floor, status.direction.as_string(), status.destinations)?;
        }
        writeln!(self.stdout, "+------------+------------+------------+------------+")?;

        Ok(())
    }
}
