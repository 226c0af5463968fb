//! ラスタオーバーレイの読み込み状態
//!
//! 読み込みごとにチケットを発行し、破棄済み・置き換え済みのチケットで
//! 返ってきた完了通知は地図に触れずに捨てる。

use crate::geometry::Bounds;

/// オーバーレイの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayPhase {
    #[default]
    Absent,
    Present { bounds: Bounds },
}

/// 読み込み1回分のチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTicket(u64);

/// 完了通知の処理結果
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayOutcome {
    Applied(Bounds),
    Failed(String),
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayLoader {
    generation: u64,
    pending: Option<u64>,
    phase: OverlayPhase,
}

impl OverlayLoader {
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// 新しい読み込みを開始（以前の読み込みは無効になる）
    pub fn begin(&mut self) -> OverlayTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        OverlayTicket(self.generation)
    }

    pub fn is_current(&self, ticket: OverlayTicket) -> bool {
        self.pending == Some(ticket.0)
    }

    /// 画面破棄時。実行中の読み込みの完了通知は以後すべて捨てる
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("オーバーレイ読み込みを中断しました");
        }
    }

    /// 読み込み完了を反映
    ///
    /// 失敗しても現在の表示状態は変えない（未表示なら未表示のまま）
    pub fn complete(&mut self, ticket: OverlayTicket, result: Result<Bounds, String>) -> OverlayOutcome {
        if !self.is_current(ticket) {
            return OverlayOutcome::Stale;
        }
        self.pending = None;
        match result {
            Ok(bounds) => {
                self.phase = OverlayPhase::Present { bounds };
                OverlayOutcome::Applied(bounds)
            }
            Err(message) => {
                log::error!("オーバーレイの読み込みに失敗: {}", message);
                OverlayOutcome::Failed(message)
            }
        }
    }
}
