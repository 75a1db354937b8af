//! The fixed set of labels offered during a session.

use std::collections::HashSet;

use crate::config::LabelSetConfig;
use crate::error::{LabelError, Result};
use crate::model::{Label, Value};

/// One selectable label, chosen by typing its key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChoice {
    pub key: String,
    pub value: String,
}

/// Category name plus the choices a labeler may pick from
#[derive(Debug, Clone)]
pub struct LabelSet {
    name: String,
    prompt: String,
    choices: Vec<LabelChoice>,
}

impl LabelSet {
    /// Keys are trimmed and must be non-empty and unique ignoring ASCII case
    pub fn new(name: impl Into<String>, prompt: impl Into<String>, choices: Vec<LabelChoice>) -> Result<Self> {
        if choices.is_empty() {
            return Err(LabelError::Config("a label set needs at least one choice".to_string()));
        }
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(choices.len());
        for choice in choices {
            let key = choice.key.trim();
            if key.is_empty() {
                return Err(LabelError::Config(format!("empty key for label choice {:?}", choice.value)));
            }
            if !seen.insert(key.to_ascii_lowercase()) {
                return Err(LabelError::Config(format!("duplicate label choice key: {}", key)));
            }
            normalized.push(LabelChoice {
                key: key.to_string(),
                value: choice.value,
            });
        }
        let choices = normalized;
        Ok(Self {
            name: name.into(),
            prompt: prompt.into(),
            choices,
        })
    }

    pub fn from_config(config: &LabelSetConfig) -> Result<Self> {
        let choices = config
            .choices
            .iter()
            .map(|c| LabelChoice {
                key: c.key.clone(),
                value: c.value.clone(),
            })
            .collect();
        Self::new(config.name.clone(), config.prompt.clone(), choices)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[LabelChoice] {
        &self.choices
    }

    /// Look up a choice by key, ignoring case and surrounding whitespace
    pub fn choice(&self, input: &str) -> Option<&LabelChoice> {
        let input = input.trim();
        self.choices.iter().find(|c| c.key.eq_ignore_ascii_case(input))
    }

    /// A fresh label for the choice matching `input`
    pub fn resolve(&self, input: &str) -> Option<Label> {
        self.choice(input)
            .map(|c| Label::new(self.name.clone(), Value::Category(c.value.clone())))
    }
}
