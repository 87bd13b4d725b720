/// Accumulated text. Only append, delete-last and clear mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    chars: Vec<char>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Remove the last character. Returns `None` (and changes nothing) when empty.
    pub fn delete_last(&mut self) -> Option<char> {
        self.chars.pop()
    }

    /// Returns `false` when there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        let had_text = !self.chars.is_empty();
        self.chars.clear();
        had_text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_last_on_empty_is_noop() {
        let mut buffer = OutputBuffer::new();
        assert_eq!(buffer.delete_last(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn append_delete_clear() {
        let mut buffer = OutputBuffer::new();
        buffer.append('H');
        buffer.append('I');
        buffer.append('!');
        assert_eq!(buffer.text(), "HI!");
        assert_eq!(buffer.delete_last(), Some('!'));
        assert_eq!(buffer.text(), "HI");
        assert!(buffer.clear());
        assert!(!buffer.clear());
        assert_eq!(buffer.len(), 0);
    }
}
