use compact_str::CompactString;
use std::fmt;

/// The path the router is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: CompactString,
}

impl Location {
    pub fn new(path: &str) -> Self {
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: CompactString::from(path),
        }
    }

    pub fn root() -> Self {
        Self::new("/")
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Browser-style back/forward stacks.
#[derive(Debug, Default)]
pub struct History {
    back: Vec<Location>,
    forward: Vec<Location>,
}

impl History {
    pub fn push(&mut self, previous: Location) {
        self.back.push(previous);
        self.forward.clear();
    }

    pub fn back(&mut self, current: &Location) -> Option<Location> {
        let target = self.back.pop()?;
        self.forward.push(current.clone());
        Some(target)
    }

    pub fn forward(&mut self, current: &Location) -> Option<Location> {
        let target = self.forward.pop()?;
        self.back.push(current.clone());
        Some(target)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/location.rs"]
mod tests;
