//! Line-level builder for the target scripting sublanguage.

use mapforge_data::Vec3;

/// A player must be within this many world units of the target position
/// before the guard dispatches registration.
pub const GUARD_RADIUS: u32 = 40;

/// Builder for one function file. Field mutations target one storage
/// namespace and each is preceded by a comment documenting the field's
/// declared type and semantics.
pub struct Script {
    namespace: String,
    lines: Vec<String>,
}

impl Script {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            lines: Vec::new(),
        }
    }

    /// Doc header identifying the function and what invokes it.
    pub fn doc(&mut self, function_id: &str, description: &str, within_kind: &str, within_target: &str) {
        self.lines.push(format!("#> {function_id}"));
        self.lines.push("#".to_string());
        self.lines.push(format!("# {description}"));
        self.lines.push("#".to_string());
        self.lines.push(format!("# @within {within_kind} {within_target}"));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn line(&mut self, raw: impl Into<String>) {
        self.lines.push(raw.into());
    }

    pub fn comment(&mut self, text: &str) {
        self.lines.push(format!("# {text}"));
    }

    /// Documented `set value` mutation.
    pub fn set(&mut self, doc: &str, key: &str, value: &str) {
        self.comment(doc);
        self.lines
            .push(format!("data modify storage {} {key} set value {value}", self.namespace));
    }

    /// Documented `set value` mutation for an optional field. When absent
    /// the command is emitted commented-out with a placeholder value, so the
    /// schema stays discoverable in the output.
    pub fn set_optional(&mut self, doc: &str, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.set(doc, key, value),
            None => {
                self.comment(doc);
                self.lines.push(format!(
                    "# data modify storage {} {key} set value <unset>",
                    self.namespace
                ));
            },
        }
    }

    /// Documented `append value` mutation.
    pub fn append(&mut self, doc: &str, key: &str, value: &str) {
        self.comment(doc);
        self.lines
            .push(format!("data modify storage {} {key} append value {value}", self.namespace));
    }

    pub fn into_text(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Compound literal for one spatial key as stored in the
/// duplicate-prevention registry.
pub fn spatial_key_literal(dimension: &str, position: Vec3) -> String {
    format!(
        "{{D:{dimension},X:{},Y:{},Z:{}}}",
        position.x, position.y, position.z
    )
}

/// The guard command: dispatch to the register function only when the
/// spatial key is not yet registered and a player is close enough to the
/// target position. Safe to run arbitrarily often.
pub fn guard_line(namespace: &str, dimension: &str, position: Vec3, register_fn: &str) -> String {
    format!(
        "execute unless data storage {namespace} DPR[{key}] in {dimension} positioned {position} \
         if entity @p[distance=..{GUARD_RADIUS}] run function {register_fn}",
        key = spatial_key_literal(dimension, position),
    )
}
