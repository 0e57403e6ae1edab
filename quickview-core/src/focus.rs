//! Tab cycling and single-installation rules for the overlay focus trap

/// What a Tab key press inside an open overlay should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDecision {
    /// Let the browser move focus normally.
    Allow,
    /// Prevent the default move and focus the first focusable element.
    FocusFirst,
    /// Prevent the default move and focus the last focusable element.
    FocusLast,
}

/// Decide how a Tab press is handled.
///
/// `active_index` is the position of the focused element among the
/// container's focusable elements, `inside` whether focus is anywhere in
/// the container at all.
#[must_use]
pub const fn tab_decision(
    focusable_count: usize,
    active_index: Option<usize>,
    inside: bool,
    shift: bool,
) -> TabDecision {
    if focusable_count == 0 {
        return TabDecision::Allow;
    }
    if !inside {
        return TabDecision::FocusFirst;
    }
    let last = focusable_count - 1;
    match (active_index, shift) {
        (Some(0), true) => TabDecision::FocusLast,
        (Some(index), false) if index == last => TabDecision::FocusFirst,
        // The container itself holds focus after open; cycle from its edges.
        (None, true) => TabDecision::FocusLast,
        _ => TabDecision::Allow,
    }
}

/// Token identifying one trap installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapToken(u64);

/// At most one trap is installed at a time.
#[derive(Debug, Default)]
pub struct TrapSlot {
    generation: u64,
    installed: Option<u64>,
}

impl TrapSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            installed: None,
        }
    }

    /// Install a trap, superseding any previous installation.
    pub fn install(&mut self) -> TrapToken {
        self.generation += 1;
        if self.installed.is_some() {
            log::debug!("focus trap superseded by generation {}", self.generation);
        }
        self.installed = Some(self.generation);
        TrapToken(self.generation)
    }

    /// Remove the installation owned by `token`. Stale tokens are ignored.
    pub fn uninstall(&mut self, token: TrapToken) -> bool {
        if self.installed == Some(token.0) {
            self.installed = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    /// Installations performed so far.
    #[must_use]
    pub const fn installations(&self) -> u64 {
        self.generation
    }
}
