use std::fmt;

/// A property path in view vocabulary, such as `Builder/City/Name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<String>,
}

impl Path {
    pub fn from_steps<T: Into<String>>(steps: impl IntoIterator<Item = T>) -> Self {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `src` on `/`. No validation is performed; see
    /// [`QueryOptions::validate`](super::QueryOptions::validate).
    pub fn parse(src: &str) -> Self {
        Self::from_steps(src.split('/'))
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn first(&self) -> Option<&str> {
        self.steps.first().map(|step| &step[..])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the path with its first step removed if that step is `var`.
    pub fn strip_var(&self, var: &str) -> Option<Path> {
        match self.steps.split_first() {
            Some((first, rest)) if first == var => Some(Path::from_steps(rest.iter().cloned())),
            _ => None,
        }
    }

    pub fn push(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(step)?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}
