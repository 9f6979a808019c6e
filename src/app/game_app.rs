// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use log::{error, info};

use crate::app::state_getter;
use crate::components::game_state::GameStatus;
use crate::components::stack::StackType;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::game::{Game, HintOutcome};
use crate::protocol::GameStateData;

/// 複数の呼び出し元 (入力ループと画面更新タイマーとか) で共有するゲーム。
///
/// 中身の `Game` は Mutex で守られてて、操作も読み取りも全部ロックを取ってから行う。
/// `Clone` すると同じゲームを指すハンドルが増えるだけだよ。
#[derive(Clone)]
pub struct GameApp {
    game: Arc<Mutex<Game>>,
}

impl GameApp {
    pub fn new(config: GameConfig) -> Self {
        info!("[GameApp] Initializing...");
        Self::from_game(Game::new(config))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_game(Game::with_seed(config, seed))
    }

    /// スナップショットの JSON から再開する。
    pub fn from_snapshot_json(json: &str, config: GameConfig) -> Result<Self> {
        let snapshot = GameStateData::from_json(json)?;
        Ok(Self::from_game(Game::from_snapshot(&snapshot, config)?))
    }

    pub fn from_game(game: Game) -> Self {
        Self { game: Arc::new(Mutex::new(game)) }
    }

    /// ロックを取って `f` を実行する。ロックが poison されてたらエラー。
    pub fn with_game<T>(&self, f: impl FnOnce(&mut Game) -> Result<T>) -> Result<T> {
        let mut game = self.game.lock().map_err(|e| {
            error!("[GameApp] Failed to lock game: {}", e);
            GameError::LockPoisoned
        })?;
        f(&mut game)
    }

    pub fn draw_card(&self) -> Result<bool> {
        self.with_game(|game| game.draw_card())
    }

    pub fn select_waste(&self) -> Result<bool> {
        self.with_game(|game| game.select_waste())
    }

    pub fn select_tableau(&self, pile: usize, card_index: usize) -> Result<bool> {
        self.with_game(|game| game.select_tableau(pile, card_index))
    }

    pub fn select_foundation(&self, pile: usize) -> Result<bool> {
        self.with_game(|game| game.select_foundation(pile))
    }

    pub fn clear_selection(&self) -> Result<()> {
        self.with_game(|game| {
            game.clear_selection();
            Ok(())
        })
    }

    pub fn place_selection(&self, target: StackType) -> Result<bool> {
        self.with_game(|game| game.place_selection(target))
    }

    pub fn send_to_foundation(&self, source: StackType) -> Result<bool> {
        self.with_game(|game| game.send_to_foundation(source))
    }

    pub fn undo(&self) -> Result<bool> {
        self.with_game(|game| game.undo())
    }

    pub fn request_hint(&self) -> Result<HintOutcome> {
        self.with_game(|game| game.request_hint())
    }

    pub fn status(&self) -> Result<GameStatus> {
        self.with_game(|game| Ok(game.status()))
    }

    pub fn snapshot(&self) -> Result<GameStateData> {
        state_getter::get_game_state(&self.game)
    }

    pub fn get_game_state_json(&self) -> Result<String> {
        state_getter::get_game_state_json(&self.game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_game() {
        let app = GameApp::with_seed(GameConfig::default(), 21);
        let other = app.clone();

        assert!(app.draw_card().unwrap());
        let moves = other.with_game(|game| Ok(game.stats().moves_count())).unwrap();
        assert_eq!(moves, 1);
    }

    #[test]
    fn calls_from_several_threads_are_serialized() {
        let app = GameApp::with_seed(GameConfig::default(), 4);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let app = app.clone();
                thread::spawn(move || {
                    for _ in 0..5 {
                        app.draw_card().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let snapshot = app.snapshot().unwrap();
        assert_eq!(snapshot.stats.moves, 20);
        assert_eq!(snapshot.deck.hidden_cards.len() + snapshot.deck.waste.len(), 24);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let app = GameApp::with_seed(GameConfig::default(), 4);
        let poisoner = app.clone();
        let _ = thread::spawn(move || {
            let _ = poisoner.with_game(|_| -> Result<()> { panic!("わざと panic") });
        })
        .join();

        assert_eq!(app.draw_card(), Err(GameError::LockPoisoned));
        assert_eq!(app.get_game_state_json(), Err(GameError::LockPoisoned));
    }

    #[test]
    fn resume_from_json() {
        let app = GameApp::with_seed(GameConfig::default(), 9);
        app.draw_card().unwrap();
        let json = app.get_game_state_json().unwrap();

        let resumed = GameApp::from_snapshot_json(&json, GameConfig::default()).unwrap();
        assert_eq!(resumed.snapshot().unwrap(), app.snapshot().unwrap());
        assert!(GameApp::from_snapshot_json("[]", GameConfig::default()).is_err());
    }
}
