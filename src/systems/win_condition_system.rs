// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::components::stats::Stats;
use crate::logic::rules::check_win_condition;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 全部のカードが組札に乗ってたら GameState を Won にして、最終スコアを一回だけ計算する。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 勝利条件をチェックして、必要ならゲーム状態を更新するよ！
    /// 今回の呼び出しで勝ちになったら true。
    pub fn run(&self, world: &World, state: &mut GameState, stats: &mut Stats, elapsed_seconds: u64) -> bool {
        if !state.is_playing() {
            return false;
        }
        if !check_win_condition(world.foundation_card_count()) {
            return false;
        }

        state.status = GameStatus::Won;
        let final_score = stats.calculate_final_score(elapsed_seconds);
        info!(
            "[Game] You won! 🏆 Final score {} in {} moves ({}s)",
            final_score,
            stats.moves_count(),
            elapsed_seconds
        );
        true
    }
}
