// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！全部のカードが組札に乗った 🏆
    Won,
}

/// ゲーム状態を保持する構造体。
///
/// 中身はシンプルに GameStatus を持つだけ！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self { status: GameStatus::Playing }
    }
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
