//! Protokoll verarbeiteter Commands samt Ergebnis.
//!
//! Der Controller trägt jeden Command ein, auch solche, die an ihrer
//! Vorbedingung scheitern. Damit lassen sich No-Ops bei pausierter Kamera
//! oder ohne Sitzung nachvollziehen.

use std::collections::VecDeque;

use super::{AppCommand, CommandGuard};

/// Ergebnis eines verarbeiteten Commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Ausgeführt, die Sitzung hat sich geändert (Revision erhöht)
    Changed,
    /// Ausgeführt, die Sitzung blieb gleich
    Unchanged,
    /// Nicht ausgeführt: Vorbedingung nicht erfüllt
    Blocked(CommandGuard),
    /// Ausführung mit Fehler abgebrochen
    Failed,
}

/// Ein Eintrag im Command-Log.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub command: AppCommand,
    pub outcome: CommandOutcome,
}

/// Ringpuffer der zuletzt verarbeiteten Commands.
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
}

const DEFAULT_CAPACITY: usize = 512;

impl CommandLog {
    /// Erstellt ein leeres Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Erstellt ein leeres Log, das höchstens `capacity` Einträge hält (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Trägt einen Command ein; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: AppCommand, outcome: CommandOutcome) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand { command, outcome });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Einträge vom ältesten zum neuesten.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    /// Zuletzt eingetragener Command.
    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Anzahl der an ihrer Vorbedingung gescheiterten Commands im Log.
    pub fn blocked_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, CommandOutcome::Blocked(_)))
            .count()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut log = CommandLog::with_capacity(2);
        log.record(AppCommand::RequestImageDialog, CommandOutcome::Unchanged);
        log.record(AppCommand::ClosePanel, CommandOutcome::Unchanged);
        log.record(AppCommand::ResetImage, CommandOutcome::Changed);

        let commands: Vec<_> = log.iter().map(|e| e.command.clone()).collect();
        assert_eq!(commands, vec![AppCommand::ClosePanel, AppCommand::ResetImage]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn blocked_entries_are_counted() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());

        log.record(
            AppCommand::ToggleLock,
            CommandOutcome::Blocked(CommandGuard::CameraOn),
        );
        log.record(AppCommand::SetOpacity { value: 0.3 }, CommandOutcome::Changed);
        log.record(
            AppCommand::ClosePanel,
            CommandOutcome::Blocked(CommandGuard::Session),
        );

        assert_eq!(log.blocked_count(), 2);
        assert_eq!(
            log.last().map(|e| e.outcome),
            Some(CommandOutcome::Blocked(CommandGuard::Session))
        );
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut log = CommandLog::with_capacity(0);
        log.record(AppCommand::EndSession, CommandOutcome::Unchanged);
        log.record(AppCommand::RequestExit, CommandOutcome::Unchanged);

        assert_eq!(log.len(), 1);
        assert_eq!(
            log.last().map(|e| &e.command),
            Some(&AppCommand::RequestExit)
        );
    }
}
