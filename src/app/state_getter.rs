//! Gets the current game state from the shared Game and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::{error, info};

use crate::error::{GameError, Result};
use crate::game::Game;
use crate::protocol::GameStateData;

/// ゲームの状態のスナップショットを取る。
pub fn get_game_state(game_arc: &Arc<Mutex<Game>>) -> Result<GameStateData> {
    let game = game_arc.lock().map_err(|e| {
        error!("[GameApp] Failed to lock game for getting state: {}", e);
        GameError::LockPoisoned
    })?;
    Ok(GameStateData::from_game(&game))
}

/// ゲームの状態を取得し、JSON 文字列として返します。
pub fn get_game_state_json(game_arc: &Arc<Mutex<Game>>) -> Result<String> {
    let snapshot = get_game_state(game_arc)?;
    let json = snapshot.to_json().map_err(|e| {
        error!("[GameApp] Failed to serialize game state: {}", e);
        e
    })?;
    info!("[GameApp] Serialized game state ({} bytes)", json.len());
    Ok(json)
}
