// src/systems/mod.rs

// ゲームの流れの節目で動くシステムたち！
pub mod deal_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use win_condition_system::WinConditionSystem;
