//! Input commands
//!
//! Raw browser events are normalized into commands and queued; the physics
//! step drains the queue exactly once per tick. This decouples input timing
//! from simulation timing and keeps ticks reproducible in tests.

/// A normalized control signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Continuous paddle target (playfield x of the pointer), last-value-wins
    PaddleTo(f32),
    /// Keyboard paddle nudge for this tick (signed pixels)
    Nudge(f32),
    /// Discrete flap/jump impulse
    Flap,
    /// Start a session from the menu
    Start,
    /// Pause toggle
    Pause,
    /// Restart from the result screen
    Restart,
    /// Return to the menu from the result screen
    Menu,
}

/// Queue of commands accumulated between ticks
///
/// Listeners push; the tick drains. No debouncing: every raw event becomes
/// a command, and continuous targets collapse naturally because the tick
/// applies them in order.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    /// Take all pending commands, leaving the queue empty
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut q = CommandQueue::new();
        q.push(Command::Flap);
        q.push(Command::PaddleTo(120.0));
        let cmds = q.drain();
        assert_eq!(cmds, vec![Command::Flap, Command::PaddleTo(120.0)]);
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }
}
