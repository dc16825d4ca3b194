use super::Command;

/// Undo/redo history of drawn commands.
///
/// The committed stack is the drawing: it is rendered oldest first, so later
/// strokes land on top of earlier ones.
#[derive(Clone, Debug, Default)]
pub struct History {
    /// Commands currently on the canvas
    committed: Vec<Command>,
    /// Commands rolled back by undo, most recent last
    undone: Vec<Command>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze a command onto the canvas.
    ///
    /// Anything that was undone can no longer be redone afterwards.
    pub fn commit(&mut self, command: Command) {
        log::debug!(
            "Committing {} ({} on canvas, dropping {} undone)",
            command.label(),
            self.committed.len(),
            self.undone.len()
        );
        self.committed.push(command);
        self.undone.clear();
    }

    /// Roll back the most recent command. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                log::debug!("Undo {}", command.label());
                self.undone.push(command);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(command) => {
                log::debug!("Redo {}", command.label());
                self.committed.push(command);
                true
            }
            None => false,
        }
    }

    /// Empty both stacks. Returns false if the history was already empty.
    pub fn clear(&mut self) -> bool {
        let changed = !self.committed.is_empty() || !self.undone.is_empty();
        self.committed.clear();
        self.undone.clear();
        changed
    }

    /// Commands on the canvas, oldest first
    pub fn committed(&self) -> &[Command] {
        &self.committed
    }

    /// Undone commands, the next one to redo last
    pub fn undone(&self) -> &[Command] {
        &self.undone
    }

    /// The most recent command on the canvas, for a gesture still in progress.
    pub fn last_committed_mut(&mut self) -> Option<&mut Command> {
        self.committed.last_mut()
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.undone.is_empty()
    }
}
