use serde::{Deserialize, Serialize};

/// Content produced by a command, before any rendering decision is made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    PlainText(String),
    Structured(Vec<Fragment>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    Text { text: String },
    Link { url: String, label: String },
    InvocableCommand { name: String },
}

impl Fragment {
    pub fn text(s: impl Into<String>) -> Self {
        Fragment::Text { text: s.into() }
    }

    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Fragment::Link {
            url: url.into(),
            label: label.into(),
        }
    }

    pub fn invocable(name: impl Into<String>) -> Self {
        Fragment::InvocableCommand { name: name.into() }
    }

    /// The characters this fragment occupies on screen.
    pub fn display_text(&self) -> &str {
        match self {
            Fragment::Text { text } => text,
            Fragment::Link { label, .. } => label,
            Fragment::InvocableCommand { name } => name,
        }
    }
}

impl Output {
    pub fn empty() -> Self {
        Output::PlainText(String::new())
    }

    pub fn plain_text(&self) -> String {
        match self {
            Output::PlainText(s) => s.clone(),
            Output::Structured(frags) => frags.iter().map(Fragment::display_text).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Output::PlainText(s) => s.is_empty(),
            Output::Structured(frags) => frags.iter().all(|f| f.display_text().is_empty()),
        }
    }

    /// Splits the output into logical lines. Newlines inside text fragments
    /// start a new line; links and invocable names stay on the line they begin.
    pub fn lines(&self) -> Vec<Vec<Fragment>> {
        let frags = match self {
            Output::PlainText(s) => vec![Fragment::text(s.as_str())],
            Output::Structured(frags) => frags.clone(),
        };

        let mut out = vec![Vec::new()];
        for frag in frags {
            match frag {
                Fragment::Text { text } => {
                    let mut parts = text.split('\n');
                    if let Some(first) = parts.next() {
                        push_text(&mut out, first);
                    }
                    for part in parts {
                        out.push(Vec::new());
                        push_text(&mut out, part);
                    }
                }
                other => {
                    if let Some(line) = out.last_mut() {
                        line.push(other);
                    }
                }
            }
        }
        out
    }
}

fn push_text(lines: &mut [Vec<Fragment>], s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(line) = lines.last_mut() {
        line.push(Fragment::text(s));
    }
}

impl From<String> for Output {
    fn from(s: String) -> Self {
        Output::PlainText(s)
    }
}

impl From<&str> for Output {
    fn from(s: &str) -> Self {
        Output::PlainText(s.to_string())
    }
}

#[cfg(test)]
#[path = "../tests/model/output_tests.rs"]
mod tests;
