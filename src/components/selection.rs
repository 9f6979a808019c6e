// src/components/selection.rs

use crate::components::card::CardId;
use crate::components::stack::StackType;

/// 今「持ち上げている」カードの情報だよ！🖐️🃏
///
/// 「拾う」操作から「置く/キャンセル」操作までの間だけ存在する一時的な状態。
/// スナップショットには絶対に入らないよ。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// どのパイルから拾ったか (エリアとパイル番号)。
    pub source: StackType,
    /// 拾ったカード。先頭が一番下 (移動先に最初に乗るカード) だよ。
    pub cards: Vec<CardId>,
}

impl Selection {
    pub fn new(source: StackType, cards: Vec<CardId>) -> Self {
        Self { source, cards }
    }

    /// 移動先のルール判定に使うカード (拾った中で一番下のカード)。
    pub fn lead_card(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
