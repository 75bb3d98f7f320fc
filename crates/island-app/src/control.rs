//! Control surface: bridges a front end to the game loop thread.

use island_core::commands::PlayerCommand;
use island_core::state::SimSnapshot;
use island_sim::SimulationEngine;

use crate::game_loop;
use crate::state::{AppError, AppState, GameLoopCommand};

/// Start the game loop around `engine`. Fails if one is already running.
pub fn start_simulation(
    state: &AppState,
    engine: SimulationEngine,
    tick_hz: u32,
) -> Result<(), AppError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, tick_hz, state.latest_snapshot.clone())?;
    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
    log::info!("game loop running at {tick_hz} Hz");

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::Disconnected),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot.
pub fn get_snapshot(state: &AppState) -> Result<Option<SimSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread.
pub fn shutdown(state: &AppState) -> Result<(), AppError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::Poisoned)?
        .take()
        .ok_or(AppError::NotStarted)?;
    // The loop may already have exited on its own.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state.loop_handle.lock().map_err(|_| AppError::Poisoned)?.take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            log::error!("game loop thread panicked");
        }
    }
    Ok(())
}
