use std::collections::VecDeque;

const MAX_ENTRIES: usize = 200;

/// Ring buffer of activity lines shown in the side log pane.
#[derive(Debug, Default)]
pub struct LogView {
    entries: VecDeque<String>,
    pub scroll_offset: u16,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::info!("{}", entry);
        self.entries.push_back(entry);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_entries() {
        let mut view = LogView::new();
        for i in 0..(MAX_ENTRIES + 10) {
            view.add(format!("entry {}", i));
        }
        assert_eq!(view.len(), MAX_ENTRIES);
        assert_eq!(view.iter().next().unwrap(), "entry 10");
    }
}
