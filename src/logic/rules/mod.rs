// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//!
//! ここにある関数は全部「判定するだけ」。盤面は絶対に書き換えない！
//! 手動の移動もヒント探しも同じ関数を使うよ。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
