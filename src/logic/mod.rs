// src/logic/mod.rs

// ゲームのルールや、盤面を動かすロジックをまとめるモジュールだよ！🧠
pub mod actions;
pub mod auto_move;
pub mod deck;
pub mod hints;
pub mod rules;
pub mod scoring;
