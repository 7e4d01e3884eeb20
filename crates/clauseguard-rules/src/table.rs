//! Rule table definition and loading

use clauseguard_core::{Error, Result, RiskRule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::builtin;

/// An immutable, ordered list of risk rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Table name
    pub name: String,

    /// What kind of contract language this table screens for
    #[serde(default)]
    pub description: String,

    /// Version of the table
    #[serde(default)]
    pub version: String,

    /// Rules in priority order
    rules: Vec<RiskRule>,
}

impl RuleTable {
    /// Build a table, rejecting empty tables, blank phrases and duplicates
    pub fn new(name: impl Into<String>, rules: Vec<RiskRule>) -> Result<Self> {
        let table = Self {
            name: name.into(),
            description: String::new(),
            version: String::new(),
            rules,
        };
        table.validate()?;
        Ok(table)
    }

    /// The rules shipped with ClauseGuard
    pub fn builtin() -> Self {
        Self {
            name: builtin::TABLE_NAME.to_string(),
            description: builtin::TABLE_DESCRIPTION.to_string(),
            version: "1".to_string(),
            rules: builtin::rules(),
        }
    }

    /// Load a table from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let table: Self = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_yaml(&content)
            .map_err(|e| Error::rules(format!("{}: {}", path.display(), e)))?;

        info!(
            path = %path.display(),
            table = %table.name,
            rules = table.len(),
            "Loaded rule table"
        );
        Ok(table)
    }

    /// Load from `path` when given, otherwise fall back to the built-in table
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RiskRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look a rule up by its trigger phrase
    pub fn get(&self, trigger_phrase: &str) -> Option<&RiskRule> {
        self.rules
            .iter()
            .find(|rule| rule.trigger_phrase == trigger_phrase)
    }

    /// Trigger phrases in priority order
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.trigger_phrase.as_str())
    }

    fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(Error::rules(format!("table '{}' has no rules", self.name)));
        }

        let mut seen = HashSet::with_capacity(self.rules.len());
        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.trigger_phrase.trim().is_empty() {
                return Err(Error::rules(format!(
                    "rule {} in table '{}' has an empty trigger phrase",
                    idx + 1,
                    self.name
                )));
            }
            if !seen.insert(rule.trigger_phrase.as_str()) {
                return Err(Error::rules(format!(
                    "duplicate trigger phrase '{}' in table '{}'",
                    rule.trigger_phrase, self.name
                )));
            }
        }

        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a RiskRule;
    type IntoIter = std::slice::Iter<'a, RiskRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
