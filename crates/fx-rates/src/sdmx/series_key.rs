/// Parsed composite series key.
///
/// `"0:3:0:0:0"` holds one coded index per series dimension, in
/// declaration order. A segment that is not a number only makes its own
/// dimension unresolvable; the key carries no labels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeriesKey(Vec<Option<usize>>);

impl SeriesKey {
    /// Coded index for the dimension declared at `position`.
    pub fn index_at(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied().flatten()
    }
}

impl From<&str> for SeriesKey {
    fn from(raw: &str) -> Self {
        SeriesKey(
            raw.split(':')
                .map(|segment| segment.trim().parse::<usize>().ok())
                .collect(),
        )
    }
}
