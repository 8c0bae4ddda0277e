//! Stack-based undo/redo dispatcher for paired do/undo actions.
//!
//! The dispatcher is layered entirely outside the queue structures: it treats
//! each mutation as an opaque forward action with a caller-supplied inverse
//! (an `offer` paired with a `remove` of the same handle, say) and only
//! guarantees that inverses run in strict LIFO order relative to their
//! forward actions. It has no transactional semantics and no knowledge of
//! heaps.

/// A forward action paired with its inverse.
///
/// Both halves are captured as closures; commands that mutate shared state
/// (such as a queue) capture an `Rc<RefCell<_>>` handle in each.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use waitlist_queue::PluggableCommand;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let (a, b) = (Rc::clone(&log), Rc::clone(&log));
/// let mut cmd = PluggableCommand::new(
///     move || a.borrow_mut().push(7),
///     move || { b.borrow_mut().pop(); },
/// );
///
/// cmd.execute();
/// assert_eq!(*log.borrow(), vec![7]);
/// cmd.unexecute();
/// assert!(log.borrow().is_empty());
/// ```
pub struct PluggableCommand {
    forward: Box<dyn FnMut()>,
    inverse: Box<dyn FnMut()>,
}

impl PluggableCommand {
    /// Pairs a forward action with its inverse.
    pub fn new<F, U>(forward: F, inverse: U) -> PluggableCommand
    where
        F: FnMut() + 'static,
        U: FnMut() + 'static,
    {
        PluggableCommand {
            forward: Box::new(forward),
            inverse: Box::new(inverse),
        }
    }

    /// Runs the forward action.
    pub fn execute(&mut self) {
        (self.forward)();
    }

    /// Runs the inverse action.
    pub fn unexecute(&mut self) {
        (self.inverse)();
    }
}

impl std::fmt::Debug for PluggableCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluggableCommand").finish_non_exhaustive()
    }
}

/// Executes commands and replays their inverses in strict LIFO order.
///
/// `apply` runs a command and records it; `undo` pops the most recent command
/// and runs its inverse; `redo` re-runs the most recently undone command.
/// Applying a new command discards the redo history, as editors do.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use waitlist_queue::{CommandProcessor, PluggableCommand};
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let mut processor = CommandProcessor::new();
///
/// for n in [1, 2, 3] {
///     let (fwd, inv) = (Rc::clone(&log), Rc::clone(&log));
///     processor.apply(PluggableCommand::new(
///         move || fwd.borrow_mut().push(n),
///         move || { inv.borrow_mut().pop(); },
///     ));
/// }
/// assert_eq!(*log.borrow(), vec![1, 2, 3]);
///
/// // Inverses run newest-first.
/// assert!(processor.undo());
/// assert_eq!(*log.borrow(), vec![1, 2]);
/// assert!(processor.redo());
/// assert_eq!(*log.borrow(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Default)]
pub struct CommandProcessor {
    done: Vec<PluggableCommand>,
    undone: Vec<PluggableCommand>,
}

impl CommandProcessor {
    /// Creates a processor with empty histories.
    #[must_use]
    pub fn new() -> CommandProcessor {
        CommandProcessor {
            done: Vec::new(),
            undone: Vec::new(),
        }
    }

    /// Executes `command` and pushes it onto the undo stack. Any commands
    /// waiting to be redone are discarded.
    pub fn apply(&mut self, mut command: PluggableCommand) {
        command.execute();
        self.undone.clear();
        self.done.push(command);
    }

    /// Undoes the most recently applied command by running its inverse.
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.done.pop() {
            Some(mut command) => {
                command.unexecute();
                self.undone.push(command);
                true
            }
            None => false,
        }
    }

    /// Re-executes the most recently undone command. Returns `false` if
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(mut command) => {
                command.execute();
                self.done.push(command);
                true
            }
            None => false,
        }
    }

    /// Whether an `undo` would have an effect.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    /// Whether a `redo` would have an effect.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
