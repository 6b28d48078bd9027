//! Configuration resolution: built-in defaults plus an optional override file.
//!
//! Walint reads an override document (TOML or YAML, dispatched on file
//! extension) with two top-level sections:
//! - `[yamllint]` — `rules`: map of yamllint rule names to rule settings,
//!   serialized into yamllint's inline `-d` config document.
//! - `[actionlint]` — `flags`: extra command-line flags for actionlint.
//!
//! Merge semantics are a shallow, section-wise override: a section present
//! in the document replaces the built-in section wholesale; an absent
//! section keeps the built-in value. Any read or parse failure falls back
//! entirely to the built-in defaults with a warning (never fatal).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as Yaml;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Settings for the yamllint invocation under `[yamllint]`.
pub struct YamllintCfg {
    #[serde(default)]
    pub rules: serde_yaml::Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Settings for the actionlint invocation under `[actionlint]`.
pub struct ActionlintCfg {
    #[serde(default)]
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Fully-resolved configuration used by the lint runner.
pub struct LintConfig {
    pub yamllint: YamllintCfg,
    pub actionlint: ActionlintCfg,
}

#[derive(Debug, Default, Deserialize)]
/// Raw override document; each section is optional and replaces the
/// corresponding built-in section wholesale when present.
struct OverrideDoc {
    yamllint: Option<YamllintCfg>,
    actionlint: Option<ActionlintCfg>,
}

impl LintConfig {
    /// Built-in defaults: `line-length` disabled for yamllint, no extra
    /// actionlint flags.
    pub fn builtin() -> Self {
        let mut rules = serde_yaml::Mapping::new();
        rules.insert(Yaml::from("line-length"), Yaml::from("disable"));
        LintConfig {
            yamllint: YamllintCfg { rules },
            actionlint: ActionlintCfg::default(),
        }
    }

    fn apply(mut self, doc: OverrideDoc) -> Self {
        if let Some(y) = doc.yamllint {
            self.yamllint = y;
        }
        if let Some(a) = doc.actionlint {
            self.actionlint = a;
        }
        self
    }
}

fn load_override(path: &Path) -> Result<OverrideDoc> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config file '{}'", path.display()))?;
    let doc = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&raw)
            .with_context(|| format!("parsing TOML config '{}'", path.display()))?
    } else {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing YAML config '{}'", path.display()))?
    };
    Ok(doc)
}

/// Resolve the effective configuration.
///
/// No path ⇒ built-in defaults. A path ⇒ parse and merge; on any failure
/// the whole document is discarded (no partial merge) and defaults are
/// used, with a warning on stderr.
pub fn resolve(path: Option<&Path>) -> LintConfig {
    let defaults = LintConfig::builtin();
    let Some(path) = path else {
        return defaults;
    };
    match load_override(path) {
        Ok(doc) => defaults.apply(doc),
        Err(e) => {
            eprintln!(
                "{} Error loading config file: {:#}",
                crate::output::warn_prefix(),
                e
            );
            eprintln!("{} Using default configuration.", crate::output::warn_prefix());
            defaults
        }
    }
}

/// Serialize the rules map into yamllint's inline `-d` config document,
/// e.g. `{extends: default, rules: {line-length: disable}}`.
pub fn yamllint_inline_config(cfg: &YamllintCfg) -> String {
    format!(
        "{{extends: default, rules: {{{}}}}}",
        render_pairs(&cfg.rules)
    )
}

fn render_pairs(map: &serde_yaml::Mapping) -> String {
    map.iter()
        .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

// Flow-style YAML rendering; scalars stay unquoted the way yamllint's own
// docs write inline configs.
fn render_value(v: &Yaml) -> String {
    match v {
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::String(s) => s.clone(),
        Yaml::Sequence(items) => format!(
            "[{}]",
            items
                .iter()
                .map(render_value)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Yaml::Mapping(m) => format!("{{{}}}", render_pairs(m)),
        Yaml::Tagged(t) => render_value(&t.value),
    }
}
