use serde::Deserialize;
use crate::ast::Render;
use crate::printer::Printer;

/// Literal text, printed verbatim.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct RawString(pub String);

impl RawString {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Render for RawString {
    fn render(&self, printer: &mut Printer) {
        printer.append(&self.0);
    }
}

// Tree documents may spell a word as a single string or as its fragments.
#[derive(Deserialize)]
#[serde(untagged)]
enum WordRepr {
    Single(RawString),
    Parts(Vec<RawString>),
}

impl From<WordRepr> for Word {
    fn from(repr: WordRepr) -> Self {
        match repr {
            WordRepr::Single(raw) => Word::new(vec![raw]),
            WordRepr::Parts(parts) => Word::new(parts),
        }
    }
}

/// A word made of fragments that are concatenated with nothing in between.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(from = "WordRepr")]
pub struct Word {
    pub components: Vec<RawString>,
}

impl Word {
    pub fn new(components: Vec<RawString>) -> Self {
        Self { components }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(vec![RawString::new(text)])
    }
}

impl Render for Word {
    fn render(&self, printer: &mut Printer) {
        for component in &self.components {
            component.render(printer);
        }
    }
}

/// `name=value`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    #[serde(default)]
    pub value: Word,
}

impl Assignment {
    pub fn new(name: impl Into<String>, value: Word) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Render for Assignment {
    fn render(&self, printer: &mut Printer) {
        printer.append(&self.name);
        printer.append("=");
        self.value.render(printer);
    }
}
