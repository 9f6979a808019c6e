// src/app/mod.rs

// 外側 (画面・入力・タイマー) から共有して使うためのゲームの入り口だよ！
pub mod game_app;
pub mod state_getter;

pub use game_app::GameApp;
