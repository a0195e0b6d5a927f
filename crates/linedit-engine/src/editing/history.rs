use crate::editing::Snapshot;

/// How many undos may run back-to-back before an intervening mutation or
/// redo is required. Kept configurable through [`History::new`]; this is
/// only the default.
pub const DEFAULT_UNDO_STREAK_LIMIT: usize = 3;

/// Snapshot-stack undo/redo over full buffer states.
///
/// Two ownership-distinct stacks: `past` always holds at least the
/// initial snapshot (the current state is its top), `future` holds
/// states undone but not yet redone. Any new recording discards the
/// future. Consecutive undos are bounded by `undo_streak_limit`; the
/// streak resets on record and redo, so full depth is recoverable once
/// anything other than undo happens.
#[derive(Debug, Clone)]
pub struct History {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
    undo_streak: usize,
    undo_streak_limit: usize,
}

impl History {
    /// A history seeded with the session's initial state. `past` is never
    /// empty after this.
    pub fn new(initial: Snapshot, undo_streak_limit: usize) -> Self {
        Self {
            past: vec![initial],
            future: Vec::new(),
            undo_streak: 0,
            undo_streak_limit,
        }
    }

    /// Record the state after a successful mutation: push onto past,
    /// drop any redoable future, reset the undo streak.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        self.future.clear();
        self.undo_streak = 0;
    }

    /// Step back one recorded state.
    ///
    /// Returns `None` (a deliberate no-op, not an error) when only the
    /// initial snapshot remains or the consecutive-undo limit is reached.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.past.len() <= 1 || self.undo_streak >= self.undo_streak_limit {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push(current);
        self.undo_streak += 1;
        self.past.last().cloned()
    }

    /// Step forward one undone state. `None` when there is nothing to
    /// redo. Resets the undo streak.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let snapshot = self.future.pop()?;
        self.past.push(snapshot.clone());
        self.undo_streak = 0;
        Some(snapshot)
    }

    /// Depth of the past stack, including the initial snapshot.
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of states currently redoable.
    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn undo_streak(&self) -> usize {
        self.undo_streak
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default(), DEFAULT_UNDO_STREAK_LIMIT)
    }
}
