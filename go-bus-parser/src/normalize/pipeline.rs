//! Ordered chains of named text transforms.

use std::fmt;

use tracing::trace;

type Transform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// One named transform in a [`Pipeline`].
pub struct Step {
    name: &'static str,
    transform: Transform,
}

impl Step {
    /// Create a step from a name and a transform.
    pub fn new(
        name: &'static str,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            transform: Box::new(transform),
        }
    }

    /// Returns the step name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this step alone.
    pub fn apply(&self, text: &str) -> String {
        (self.transform)(text)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({})", self.name)
    }
}

/// An ordered list of steps; each step's output is the next step's input.
///
/// # Example
///
/// ```
/// use go_bus_parser::normalize::Pipeline;
///
/// let pipeline = Pipeline::new()
///     .then("trim", |s| s.trim().to_string())
///     .then("upper", |s| s.to_uppercase());
///
/// assert_eq!(pipeline.run("  union "), "UNION");
/// assert_eq!(pipeline.step_names().collect::<Vec<_>>(), ["trim", "upper"]);
/// ```
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn then(
        mut self,
        name: &'static str,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.steps.push(Step::new(name, transform));
        self
    }

    /// Look up a step by name, for running it in isolation.
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|s| s.name)
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order.
    pub fn run(&self, input: &str) -> String {
        let mut text = input.to_string();
        for step in &self.steps {
            let next = step.apply(&text);
            if next != text {
                trace!(step = step.name, before = %text, after = %next, "step rewrote text");
            }
            text = next;
        }
        text
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.step_names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run("Union Station"), "Union Station");
    }

    #[test]
    fn steps_run_in_order() {
        let pipeline = Pipeline::new()
            .then("append a", |s| format!("{s}a"))
            .then("append b", |s| format!("{s}b"));

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.run(""), "ab");
    }

    #[test]
    fn order_matters() {
        let upper_then_strip = Pipeline::new()
            .then("upper", |s| s.to_uppercase())
            .then("strip x", |s| s.replace('x', ""));
        let strip_then_upper = Pipeline::new()
            .then("strip x", |s| s.replace('x', ""))
            .then("upper", |s| s.to_uppercase());

        assert_eq!(upper_then_strip.run("xy"), "XY");
        assert_eq!(strip_then_upper.run("xy"), "Y");
    }

    #[test]
    fn step_lookup_runs_in_isolation() {
        let pipeline = Pipeline::new()
            .then("upper", |s| s.to_uppercase())
            .then("trim", |s| s.trim().to_string());

        let trim = pipeline.step("trim").unwrap();
        assert_eq!(trim.name(), "trim");
        assert_eq!(trim.apply(" go "), "go");
        assert!(pipeline.step("missing").is_none());
    }

    #[test]
    fn debug_lists_step_names() {
        let pipeline = Pipeline::new().then("a", str::to_string).then("b", str::to_string);
        assert_eq!(format!("{:?}", pipeline), r#"["a", "b"]"#);
        assert_eq!(format!("{:?}", pipeline.step("a").unwrap()), "Step(a)");
    }
}
