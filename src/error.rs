// src/error.rs
//! エンジン全体で使うエラー型だよ！
//!
//! ルール違反の移動はエラーじゃなくて `false` で返すのがこのエンジンの約束。
//! ここに並んでるのは「呼び出し側の使い方が間違ってる」系のエラーだけ！

use thiserror::Error;

use crate::components::stack::StackType;

/// エンジンの操作が失敗したときに返すエラー。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 存在しないパイル番号が指定された (場札は 0-6、組札は 0-3)。
    #[error("pile index {index} is out of range for {area}")]
    InvalidPileIndex { area: &'static str, index: usize },

    /// パイルの中の存在しないカード位置が指定された。
    #[error("card index {index} is out of range for a pile of {len} cards")]
    InvalidCardIndex { index: usize, len: usize },

    /// 履歴が空なのに Undo しようとした。先に `can_undo()` で確認してね。
    #[error("cannot undo: the action history is empty")]
    NothingToUndo,

    /// まだ実行されていないアクションを Undo しようとした。
    #[error("the action has not been executed yet")]
    NotExecuted,

    /// 同じアクションを二回実行しようとした。
    #[error("the action has already been executed")]
    AlreadyExecuted,

    /// 山札や捨て札はカードの移動先にできないよ。
    #[error("{0:?} is not a legal move destination")]
    IllegalDestination(StackType),

    /// 移動しようとしたカードが、移動元パイルの一番上に積まれていない。
    #[error("the selected cards are not on top of {0:?}")]
    SelectionMismatch(StackType),

    /// 復元しようとしたスナップショットが壊れてる。
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// 設定の JSON が読めなかった。
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// 共有状態のロックが poison されてた。
    #[error("the shared game state lock was poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, GameError>;
