use crate::ir::BlockMarker;

/// Open `If`/`For` constructs awaiting their closer.
///
/// Closers never fail: a closer whose marker is not on top leaves the stack
/// alone and is only counted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockStack {
    open: Vec<BlockMarker>,
    unmatched: usize,
}

impl BlockStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, marker: BlockMarker) {
        self.open.push(marker);
    }

    /// Pops the top marker if it is `marker`. Returns whether it did.
    pub fn close(&mut self, marker: BlockMarker) -> bool {
        if self.open.last() == Some(&marker) {
            self.open.pop();
            true
        } else {
            self.unmatched += 1;
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn markers(&self) -> &[BlockMarker] {
        &self.open
    }

    pub fn unmatched_closers(&self) -> usize {
        self.unmatched
    }
}
