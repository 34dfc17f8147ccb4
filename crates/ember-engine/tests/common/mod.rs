//! Scripted in-memory backend shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ember_engine::options::MetadataKey;
use ember_engine::platform::{
    Backend, BackendError, BackendEvent, BackendLoader, InitFlags, Platform,
};

/// Ordered record of backend calls and subscriber notifications.
#[derive(Debug, Default)]
pub struct Journal {
    pub entries: Vec<String>,
    pub loads: u32,
    pub init_flags: Option<InitFlags>,
    pub metadata: Vec<(MetadataKey, Option<String>)>,
    pub polls: usize,
    pub quits: u32,
}

pub type SharedJournal = Rc<RefCell<Journal>>;

pub fn record(journal: &SharedJournal, entry: impl Into<String>) {
    journal.borrow_mut().entries.push(entry.into());
}

/// Number of journal entries equal to `entry`.
pub fn count(journal: &SharedJournal, entry: &str) -> usize {
    journal.borrow().entries.iter().filter(|e| *e == entry).count()
}

/// Loader producing a [`ScriptedBackend`].
///
/// `ticks[n]` holds the events returned by successive polls during tick `n`;
/// the poll after them returns `None`, which ends the drain for that tick.
/// Once the script runs out every tick reports a quit, so a broken loop
/// cannot spin forever.
#[derive(Default)]
pub struct ScriptedLoader {
    pub ticks: Vec<Vec<BackendEvent>>,
    pub fail_init: Option<String>,
    pub reject_metadata: Option<MetadataKey>,
    pub journal: SharedJournal,
}

impl ScriptedLoader {
    pub fn new(ticks: Vec<Vec<BackendEvent>>) -> Self {
        Self { ticks, ..Self::default() }
    }

    pub fn journal(&self) -> SharedJournal {
        self.journal.clone()
    }
}

impl BackendLoader for ScriptedLoader {
    type Backend = ScriptedBackend;

    fn load(&self, _platform: Platform) -> Result<ScriptedBackend, BackendError> {
        self.journal.borrow_mut().loads += 1;
        Ok(ScriptedBackend {
            ticks: self.ticks.iter().cloned().map(VecDeque::from).collect(),
            fail_init: self.fail_init.clone(),
            reject_metadata: self.reject_metadata,
            journal: self.journal.clone(),
        })
    }
}

pub struct ScriptedBackend {
    ticks: VecDeque<VecDeque<BackendEvent>>,
    fail_init: Option<String>,
    reject_metadata: Option<MetadataKey>,
    journal: SharedJournal,
}

impl Backend for ScriptedBackend {
    fn init(&mut self, flags: InitFlags) -> Result<(), BackendError> {
        record(&self.journal, "init");
        self.journal.borrow_mut().init_flags = Some(flags);
        match &self.fail_init {
            Some(msg) => Err(BackendError::new(msg.clone())),
            None => Ok(()),
        }
    }

    fn set_metadata_property(
        &mut self,
        key: MetadataKey,
        value: Option<&str>,
    ) -> Result<(), BackendError> {
        record(&self.journal, format!("metadata:{key}"));
        if self.reject_metadata == Some(key) {
            return Err(BackendError::new(format!("invalid {key}")));
        }
        self.journal
            .borrow_mut()
            .metadata
            .push((key, value.map(str::to_string)));
        Ok(())
    }

    fn poll_event(&mut self) -> Option<BackendEvent> {
        self.journal.borrow_mut().polls += 1;

        let Some(current) = self.ticks.front_mut() else {
            // Script exhausted: quit on the first poll of each tick.
            self.ticks.push_back(VecDeque::new());
            return Some(BackendEvent::Quit);
        };

        match current.pop_front() {
            Some(event) => Some(event),
            None => {
                self.ticks.pop_front();
                None
            }
        }
    }

    fn quit(&mut self) {
        record(&self.journal, "quit");
        self.journal.borrow_mut().quits += 1;
    }
}
