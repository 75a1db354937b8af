//! Interactive labeling session.
//!
//! Drives the loop fetch → present → prompt → record → decide-continue,
//! then writes everything labeled in the session through the sink.

pub mod labels;
pub mod prompt;

pub use labels::{LabelChoice, LabelSet};
pub use prompt::{confirm, prompt_labeler, prompt_line};

use std::io::{BufRead, Write};

use colored::*;

use crate::error::Result;
use crate::model::{Datum, Identifiable, Label, LabeledDatum, Labeler};
use crate::render::Presenter;
use crate::sink::Sink;
use crate::source::Source;

/// Where the session is in its loop
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Fetching,
    Presenting(Datum),
    Prompting(Datum),
    Recording(Datum, Label),
    DecidingContinue,
    Done,
}

impl SessionState {
    pub fn is_done(&self) -> bool {
        matches!(self, SessionState::Done)
    }
}

/// Counts reported when a session finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub labeled: usize,
    pub skipped: usize,
}

/// One labeler working through items from a source
pub struct Session<'a, R, W> {
    labeler: Labeler,
    labels: LabelSet,
    source: &'a mut dyn Source,
    sink: &'a dyn Sink,
    presenter: &'a mut dyn Presenter,
    input: R,
    output: W,
    overwrite: bool,
    items: Vec<LabeledDatum>,
    skipped: usize,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        labeler: Labeler,
        labels: LabelSet,
        source: &'a mut dyn Source,
        sink: &'a dyn Sink,
        presenter: &'a mut dyn Presenter,
        input: R,
        output: W,
    ) -> Self {
        Self {
            labeler,
            labels,
            source,
            sink,
            presenter,
            input,
            output,
            overwrite: false,
            items: Vec::new(),
            skipped: 0,
        }
    }

    /// Truncate the sink instead of appending when the session is saved
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Items labeled so far and not yet written
    pub fn items(&self) -> &[LabeledDatum] {
        &self.items
    }

    /// Run until the labeler quits
    pub fn run(&mut self) -> Result<SessionSummary> {
        log::info!("Starting labeling session for {:?}", self.labeler.name());
        let mut state = SessionState::Fetching;
        while !state.is_done() {
            state = self.step(state)?;
        }
        Ok(SessionSummary {
            labeled: self.items.len(),
            skipped: self.skipped,
        })
    }

    /// Advance one transition
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        match state {
            SessionState::Fetching => {
                let datum = self.source.fetch()?;
                Ok(SessionState::Presenting(datum))
            }
            SessionState::Presenting(datum) => match self.presenter.present(&datum, &mut self.output) {
                Ok(()) => Ok(SessionState::Prompting(datum)),
                Err(e) => {
                    log::warn!("Skipping datum {}: {}", datum.id(), e);
                    writeln!(self.output, "{} {}", "Could not show this one:".yellow(), e)?;
                    self.skipped += 1;
                    Ok(SessionState::Fetching)
                }
            },
            SessionState::Prompting(datum) => {
                let Some(answer) = prompt_line(&mut self.input, &mut self.output, self.labels.prompt())? else {
                    return self.finish();
                };
                match self.labels.resolve(&answer) {
                    Some(label) => Ok(SessionState::Recording(datum, label)),
                    None => {
                        writeln!(self.output, "Moving on...")?;
                        self.skipped += 1;
                        Ok(SessionState::Fetching)
                    }
                }
            }
            SessionState::Recording(datum, label) => {
                writeln!(
                    self.output,
                    "{} {}!",
                    "Recording this good boy or girl as a".green(),
                    label.value()
                )?;
                let mut item = LabeledDatum::from_base_datum(&datum);
                item.record_label(&self.labeler, &label);
                self.items.push(item);
                Ok(SessionState::DecidingContinue)
            }
            SessionState::DecidingContinue => match confirm(&mut self.input, &mut self.output, "quit and save?")? {
                Some(false) => Ok(SessionState::Fetching),
                Some(true) | None => self.finish(),
            },
            SessionState::Done => Ok(SessionState::Done),
        }
    }

    fn finish(&mut self) -> Result<SessionState> {
        self.sink.write(&self.items, self.overwrite)?;
        log::info!("Session saved {} labeled item(s)", self.items.len());
        Ok(SessionState::Done)
    }
}
