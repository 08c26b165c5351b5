//! Page template substitution.
//!
//! Templates contain `{{name}}` tokens and `{{#each name}}...{{/each}}`
//! blocks. Both are replaced in one left-to-right pass, so text inserted
//! for one token is never scanned for further tokens. Unknown tokens and
//! blocks are left untouched.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{#each\s+([A-Za-z_][A-Za-z0-9_]*)\s*\}\}(?s:.*?)\{\{/each\}\}|\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}")
        .unwrap()
});

/// Variable table for [`render`].
#[derive(Debug, Clone, Default)]
pub struct Vars {
    values: Vec<(&'static str, String)>,
    blocks: Vec<(&'static str, String)>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `{{name}}`, replacing an earlier value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        upsert(&mut self.values, name, value.into());
        self
    }

    /// Set the expansion of a whole `{{#each name}}...{{/each}}` block.
    pub fn block(&mut self, name: &'static str, html: impl Into<String>) -> &mut Self {
        upsert(&mut self.blocks, name, html.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        lookup(&self.values, name)
    }

    pub fn get_block(&self, name: &str) -> Option<&str> {
        lookup(&self.blocks, name)
    }
}

fn upsert(entries: &mut Vec<(&'static str, String)>, name: &'static str, value: String) {
    match entries.iter_mut().find(|(n, _)| *n == name) {
        Some(slot) => slot.1 = value,
        None => entries.push((name, value)),
    }
}

fn lookup<'a>(entries: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

/// Fill `template` from `vars`.
pub fn render(template: &str, vars: &Vars) -> String {
    RE_TOKEN
        .replace_all(template, |caps: &Captures| {
            let found = match (caps.get(1), caps.get(2)) {
                (Some(block), _) => vars.get_block(block.as_str()),
                (None, Some(token)) => vars.get(token.as_str()),
                (None, None) => None,
            };
            found.unwrap_or(&caps[0]).to_string()
        })
        .into_owned()
}
