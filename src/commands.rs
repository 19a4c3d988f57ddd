//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::config::ShellConfig;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Persist the shell configuration (including the layout) in the background.
    ///
    /// `revision` is the layout revision captured in `config`; the save
    /// reports it back through `AppMsg::SaveCompleted`.
    SaveConfig { config: ShellConfig, revision: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SaveConfig { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Combine two optional commands, batching when both are present
    pub fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
            (a, b) => a.or(b),
        }
    }

    /// True if this command (or any batched command) saves the config
    pub fn saves_config(&self) -> bool {
        match self {
            Cmd::SaveConfig { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.saves_config()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::SaveConfig {
            config: ShellConfig::default(),
            revision: 1,
        }
        .needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_merge() {
        assert!(Cmd::merge(None, None).is_none());
        assert!(matches!(Cmd::merge(Some(Cmd::Redraw), None), Some(Cmd::Redraw)));
        let merged = Cmd::merge(
            Some(Cmd::Redraw),
            Some(Cmd::SaveConfig {
                config: ShellConfig::default(),
                revision: 1,
            }),
        )
        .unwrap();
        assert!(merged.needs_redraw());
        assert!(merged.saves_config());
    }
}
