//! Begin/complete logging around a unit of work
//!
//! `{NAME}_BEGIN` on creation, `{NAME}_COMPLETE` on
//! `complete_with_fields()`, `{NAME}_INCOMPLETE` at WARN if dropped first.

use std::time::Instant;

use super::logger::Logger;

pub struct ObservationScope {
    name: &'static str,
    fields: Vec<(&'static str, String)>,
    started: Instant,
    completed: bool,
}

impl ObservationScope {
    pub fn with_fields(name: &'static str, fields: &[(&'static str, &str)]) -> Self {
        let fields: Vec<(&'static str, String)> =
            fields.iter().map(|(k, v)| (*k, v.to_string())).collect();
        Logger::info(&format!("{}_BEGIN", name), &borrowed(&fields));

        Self {
            name,
            fields,
            started: Instant::now(),
            completed: false,
        }
    }

    /// Elapsed time since the scope opened, in milliseconds.
    fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }

    pub fn complete_with_fields(mut self, extra: &[(&str, &str)]) {
        self.completed = true;
        let elapsed = self.elapsed_ms().to_string();

        let mut fields = borrowed(&self.fields);
        fields.extend(extra.iter().copied());
        fields.push(("elapsed_ms", elapsed.as_str()));
        Logger::info(&format!("{}_COMPLETE", self.name), &fields);
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.completed {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}

fn borrowed<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'a str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}
