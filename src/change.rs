/// Remembers the last reported value and tells whether a new one differs.
///
/// Starts empty, so the very first value always counts as a change.
#[derive(Debug)]
pub struct ChangeDetector<T> {
    last: Option<T>,
}

impl<T: Copy + PartialEq> ChangeDetector<T> {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records `value` and returns `true` if it differs from the previous one.
    pub fn update(&mut self, value: T) -> bool {
        if self.last == Some(value) {
            return false;
        }
        self.last = Some(value);
        true
    }

    pub fn last(&self) -> Option<T> {
        self.last
    }
}

impl<T: Copy + PartialEq> Default for ChangeDetector<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_distinct_triple() {
        let mut detector = ChangeDetector::new();
        let seen: Vec<bool> = [[0u16, 0, 0], [0, 0, 0], [1, 0, 0], [1, 0, 0], [1, 0, 0], [0, 0, 0]]
            .iter()
            .map(|&triple| detector.update(triple))
            .collect();
        assert_eq!(seen, [true, false, true, false, false, true]);
        assert_eq!(detector.last(), Some([0, 0, 0]));
    }

    #[test]
    fn starts_empty() {
        let detector: ChangeDetector<u16> = ChangeDetector::default();
        assert_eq!(detector.last(), None);
    }
}
