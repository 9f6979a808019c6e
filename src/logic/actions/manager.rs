// src/logic/actions/manager.rs

use log::{debug, warn};
use rand::Rng;

use super::Action;
use crate::error::{GameError, Result};
use crate::world::World;

/// 履歴の1件。アクションと、実行したときに実際にスコアへ入った点数。
#[derive(Clone, Debug, PartialEq, Eq)]
struct HistoryEntry {
    action: Action,
    score: i32,
}

/// 実行したアクションの履歴 (Undo 用のスタック) を持つマネージャー。📚
#[derive(Clone, Debug, Default)]
pub struct ActionsManager {
    history: Vec<HistoryEntry>,
    /// 最後に実行した、または Undo したアクション。
    last_action: Option<Action>,
}

impl ActionsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// アクションを実行して、成功したら履歴に積む。失敗したら積まない。
    pub fn execute<R: Rng + ?Sized>(&mut self, action: Action, world: &mut World, rng: &mut R) -> Result<()> {
        self.execute_scored(action, 0, world, rng)
    }

    /// `execute` と同じだけど、スコアに入った点数も一緒に覚えておく。
    /// Undo したときに `undo_scored` がその点数を返してくれるよ。
    pub fn execute_scored<R: Rng + ?Sized>(
        &mut self,
        mut action: Action,
        score: i32,
        world: &mut World,
        rng: &mut R,
    ) -> Result<()> {
        action.execute(world, rng)?;
        debug!("[Action] Executed {} (score {:+}, history: {})", action, score, self.history.len() + 1);
        self.last_action = Some(action.clone());
        self.history.push(HistoryEntry { action, score });
        Ok(())
    }

    /// 一番最後のアクションを取り消して、そのアクションを返す。
    ///
    /// 履歴が空なら `NothingToUndo`。Undo に失敗したアクションは履歴に戻すよ。
    pub fn undo(&mut self, world: &mut World) -> Result<Action> {
        self.undo_scored(world).map(|(action, _)| action)
    }

    /// `undo` と同じだけど、実行時に覚えた点数も返す。
    pub fn undo_scored(&mut self, world: &mut World) -> Result<(Action, i32)> {
        let mut entry = self.history.pop().ok_or(GameError::NothingToUndo)?;
        if let Err(err) = entry.action.undo(world) {
            warn!("[Action] Failed to undo {}: {}", entry.action, err);
            self.history.push(entry);
            return Err(err);
        }
        debug!("[Action] Undid {} (history: {})", entry.action, self.history.len());
        self.last_action = Some(entry.action.clone());
        Ok((entry.action, entry.score))
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// 次に Undo されるアクション。
    pub fn top_action(&self) -> Option<&Action> {
        self.history.last().map(|entry| &entry.action)
    }

    pub fn last_action(&self) -> Option<&Action> {
        self.last_action.as_ref()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.last_action = None;
    }
}
