// src/lib.rs

//! クロンダイク (ソリティア) のルールエンジンだよ！🃏
//!
//! カードの山の管理、移動のルール判定、Undo できるアクション、ヒント、スコア計算まで。
//! 画面の表示やキー入力はこのクレートの外でやってね。
//! ログは `log` クレートに出すだけなので、ロガーは使う側で好きなものを入れてね。

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logic;
pub mod protocol;
pub mod systems;
pub mod world;

// よく使う型はクレートのルートからも使えるようにしておく！
pub use app::GameApp;
pub use components::{Card, CardId, GameStatus, Rank, Selection, StackType, Stats, Suit};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, HintOutcome};
pub use logic::actions::{Action, ActionsManager, DrawCardAction, MoveCardsAction};
pub use protocol::GameStateData;
pub use world::World;
