//! Game loop thread: runs the simulation engine at a fixed cadence and
//! publishes snapshots.
//!
//! Commands arrive via an `mpsc` channel. Snapshots are stored in shared
//! state for polling, and round events are reported through the log.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use island_core::events::SimEvent;
use island_core::state::SimSnapshot;
use island_sim::SimulationEngine;

use crate::state::{AppError, GameLoopCommand};

/// Default cadence of the loop.
pub const DEFAULT_TICK_HZ: u32 = 60;

/// Seconds of simulated time between status lines.
const STATUS_INTERVAL: f64 = 5.0;

/// Duration of one loop iteration at `tick_hz`.
pub fn tick_duration(tick_hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_hz.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    tick_hz: u32,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("island-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, tick_duration(tick_hz), cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    tick: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) {
    let mut next_tick_time = Instant::now();
    let mut next_status = STATUS_INTERVAL;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance to the current wall time
        let snapshot = engine.tick();

        // 3. Report
        report_events(&snapshot.events);
        if snapshot.time >= next_status {
            log::info!("{}", status_line(&snapshot));
            next_status = snapshot.time + STATUS_INTERVAL;
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

fn report_events(events: &[SimEvent]) {
    for event in events {
        match event {
            SimEvent::RoundWon { score } => log::info!("all {score} boats sunk, the island holds"),
            SimEvent::RoundLost { damage } => log::info!("fort overrun after {damage} hits"),
            SimEvent::BoatEvading { boat } => log::debug!("boat {boat} took evasive action"),
            _ => {}
        }
    }
}

/// One-line summary of a snapshot.
pub fn status_line(snapshot: &SimSnapshot) -> String {
    let round = &snapshot.round;
    format!(
        "t={:.1}s fps={:.0} score={}/{} damage={}/{} boats afloat={} phase={:?}",
        snapshot.time,
        snapshot.frame_rate,
        round.score,
        round.boats_total,
        round.damage,
        round.damage_ceiling,
        snapshot.boats.iter().filter(|b| !b.destroyed).count(),
        snapshot.phase,
    )
}
