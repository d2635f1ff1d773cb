use std::collections::BTreeSet;
use std::fmt;

/// The presentation classes set on an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<&'static str>,
}

impl ClassList {
    pub fn new() -> ClassList {
        ClassList::default()
    }

    pub fn add(&mut self, class: &'static str) {
        self.classes.insert(class);
    }

    pub fn remove(&mut self, class: &'static str) {
        self.classes.remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Adds `class` when `on`, removes it otherwise.
    pub fn set(&mut self, class: &'static str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().copied()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for class in &self.classes {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
            first = false;
        }
        Ok(())
    }
}
