// src/config/mod.rs
//! 盤面の定数と、ゲームの設定値をまとめるモジュール。

pub mod layout;
pub mod settings;

pub use settings::GameConfig;
