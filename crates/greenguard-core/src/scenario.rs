//! Scripted demo conversation playback.
//!
//! The player is an explicit state machine (Idle / Playing / Exhausted)
//! driven only by demo-mode flips and tick events. After the final turn it
//! emits a single reset message and parks in `Exhausted` — it does not
//! auto-loop. Replaying requires toggling demo mode off and on again.

use crate::chat::{ConversationStore, Sender};

/// Author of a scripted turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptRole {
    User,
    Assistant,
}

/// One fixed conversation turn.
#[derive(Debug, Clone, Copy)]
pub struct ScriptTurn {
    pub role: ScriptRole,
    pub text: &'static str,
}

/// The demo conversation, replayed in order. Read-only fixture.
pub const SCRIPT: &[ScriptTurn] = &[
    ScriptTurn {
        role: ScriptRole::User,
        text: "Kiến trúc hệ thống hoạt động thế nào?",
    },
    ScriptTurn {
        role: ScriptRole::Assistant,
        text: "Hệ thống gồm 4 tầng: (1) Green Node thu thập dữ liệu rung chấn > (2) Gateway TTN \
               & MQTT đẩy dữ liệu về Cloud > (3) AI Core phân tích LSTM & Phát hiện bất thường > \
               (4) Cảnh báo qua Web & Zalo.",
    },
    ScriptTurn {
        role: ScriptRole::User,
        text: "Dự báo thời tiết chiều nay?",
    },
    ScriptTurn {
        role: ScriptRole::Assistant,
        text: "Dữ liệu từ Weather API: Có giông lốc vào lúc 16:00. AI Core khuyến nghị kích hoạt \
               cảnh báo Vàng cho khu vực Thanh Xuân.",
    },
    ScriptTurn {
        role: ScriptRole::User,
        text: "Tình trạng Node T-1092 hiện tại?",
    },
    ScriptTurn {
        role: ScriptRole::Assistant,
        text: "Node T-1092 (Nguyễn Trãi): Góc nghiêng 16°. Cảm biến MPU6050 báo động. Nguy cơ \
               đổ: 92%. Đã gửi SMS cho đội ứng cứu.",
    },
];

/// Message the conversation is reset to when the script runs out.
pub const RESET_MESSAGE: &str = "Demo Reset. Tôi có thể giúp gì thêm?";

/// Playback position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Demo mode off; nothing scheduled.
    Idle,
    /// Replaying; `cursor` indexes the next turn to emit, in `[0, len]`.
    Playing { cursor: usize },
    /// Script finished and the reset message was emitted. Sticky until the
    /// demo flag is toggled off and on again.
    Exhausted,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEffect {
    /// A scripted turn was appended to the conversation.
    Turn(ScriptRole),
    /// The conversation was replaced with the reset message.
    Reset,
    /// Nothing happened (Idle or Exhausted).
    Parked,
}

/// Replays [`SCRIPT`] into a [`ConversationStore`], one turn per tick.
pub struct ScenarioPlayer {
    state: PlayerState,
}

impl ScenarioPlayer {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Idle,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Demo mode turned on. Only an Idle player starts playing; activation
    /// while already Playing or Exhausted is a no-op.
    pub fn activate(&mut self) {
        if self.state == PlayerState::Idle {
            self.state = PlayerState::Playing { cursor: 0 };
            log::debug!("scenario player: idle -> playing");
        }
    }

    /// Demo mode turned off. Always returns to Idle; already-emitted turns
    /// stay in the conversation (no rollback).
    pub fn deactivate(&mut self) {
        if self.state != PlayerState::Idle {
            log::debug!("scenario player: {:?} -> idle", self.state);
            self.state = PlayerState::Idle;
        }
    }

    /// Advance playback by one tick.
    pub fn tick(&mut self, chat: &mut ConversationStore) -> TickEffect {
        match self.state {
            PlayerState::Idle | PlayerState::Exhausted => TickEffect::Parked,
            PlayerState::Playing { cursor } if cursor < SCRIPT.len() => {
                let turn = &SCRIPT[cursor];
                let sender = match turn.role {
                    ScriptRole::User => Sender::User,
                    ScriptRole::Assistant => Sender::Assistant,
                };
                chat.append(sender, turn.text);
                self.state = PlayerState::Playing { cursor: cursor + 1 };
                TickEffect::Turn(turn.role)
            }
            PlayerState::Playing { cursor } => {
                debug_assert_eq!(cursor, SCRIPT.len(), "cursor ran past the script");
                chat.reset(Sender::Assistant, RESET_MESSAGE);
                self.state = PlayerState::Exhausted;
                log::debug!("scenario player: playing -> exhausted");
                TickEffect::Reset
            }
        }
    }
}

impl Default for ScenarioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ConversationStore;

    #[test]
    fn test_script_alternates_user_then_assistant() {
        assert_eq!(SCRIPT.len(), 6);
        for pair in SCRIPT.chunks(2) {
            assert_eq!(pair[0].role, ScriptRole::User);
            assert_eq!(pair[1].role, ScriptRole::Assistant);
        }
    }

    #[test]
    fn test_idle_player_ignores_ticks() {
        let mut player = ScenarioPlayer::new();
        let mut chat = ConversationStore::new();
        assert_eq!(player.tick(&mut chat), TickEffect::Parked);
        assert_eq!(chat.len(), 1); // greeting only
    }

    #[test]
    fn test_full_playback_appends_every_turn() {
        let mut player = ScenarioPlayer::new();
        let mut chat = ConversationStore::new();
        player.activate();

        let before = chat.len();
        for (i, turn) in SCRIPT.iter().enumerate() {
            assert_eq!(player.tick(&mut chat), TickEffect::Turn(turn.role));
            assert_eq!(chat.len(), before + i + 1);
            assert_eq!(chat.all().last().unwrap().body, turn.text);
        }
    }

    #[test]
    fn test_exhaustion_resets_store_to_single_message() {
        let mut player = ScenarioPlayer::new();
        let mut chat = ConversationStore::new();
        player.activate();
        for _ in 0..SCRIPT.len() {
            player.tick(&mut chat);
        }

        assert_eq!(player.tick(&mut chat), TickEffect::Reset);
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.all()[0].body, RESET_MESSAGE);
        assert_eq!(player.state(), PlayerState::Exhausted);
    }

    #[test]
    fn test_exhausted_player_does_not_auto_loop() {
        // Deliberate one-shot design: once exhausted, ticks do nothing while
        // the demo flag stays on. Replay requires a flag off/on cycle.
        let mut player = ScenarioPlayer::new();
        let mut chat = ConversationStore::new();
        player.activate();
        for _ in 0..=SCRIPT.len() {
            player.tick(&mut chat);
        }

        for _ in 0..5 {
            assert_eq!(player.tick(&mut chat), TickEffect::Parked);
        }
        assert_eq!(chat.len(), 1);
    }

    #[test]
    fn test_toggle_off_and_on_replays_from_start() {
        let mut player = ScenarioPlayer::new();
        let mut chat = ConversationStore::new();
        player.activate();
        for _ in 0..=SCRIPT.len() {
            player.tick(&mut chat);
        }

        player.deactivate();
        player.activate();
        assert_eq!(player.state(), PlayerState::Playing { cursor: 0 });
        player.tick(&mut chat);
        assert_eq!(chat.all().last().unwrap().body, SCRIPT[0].text);
    }

    #[test]
    fn test_deactivate_mid_script_keeps_emitted_turns() {
        let mut player = ScenarioPlayer::new();
        let mut chat = ConversationStore::new();
        player.activate();
        player.tick(&mut chat);
        player.tick(&mut chat);

        player.deactivate();
        assert_eq!(player.state(), PlayerState::Idle);
        // No rollback of what was already said.
        assert_eq!(chat.len(), 3); // greeting + 2 turns
        // And no further progress while idle.
        assert_eq!(player.tick(&mut chat), TickEffect::Parked);
        assert_eq!(chat.len(), 3);
    }

    #[test]
    fn test_activate_while_playing_does_not_rewind() {
        let mut player = ScenarioPlayer::new();
        let mut chat = ConversationStore::new();
        player.activate();
        player.tick(&mut chat);
        player.activate();
        assert_eq!(player.state(), PlayerState::Playing { cursor: 1 });
    }
}
