use shared_resources::call::Call;

/// Pending hall calls, one insertion-ordered queue of distinct floors per
/// hall direction. The oldest request sits at the front of its queue.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
pub struct PendingCalls {
    up: Vec<u8>,
    down: Vec<u8>,
}

impl PendingCalls {
    pub fn new() -> Self {
        PendingCalls {
            up: Vec::new(),
            down: Vec::new(),
        }
    }

    fn queue(&self, call: Call) -> Option<&Vec<u8>> {
        match call {
            Call::HallUp => Some(&self.up),
            Call::HallDown => Some(&self.down),
            Call::Cab => None,
        }
    }

    fn queue_mut(&mut self, call: Call) -> Option<&mut Vec<u8>> {
        match call {
            Call::HallUp => Some(&mut self.up),
            Call::HallDown => Some(&mut self.down),
            Call::Cab => None,
        }
    }

    /// Repeated presses deduplicate, a floor appears at most once per queue.
    pub fn insert(&mut self, floor: u8, call: Call) {
        if let Some(queue) = self.queue_mut(call) {
            if !queue.contains(&floor) {
                queue.push(floor);
            }
        }
    }

    pub fn contains(&self, floor: u8, call: Call) -> bool {
        match self.queue(call) {
            Some(queue) => queue.contains(&floor),
            None => false,
        }
    }

    pub fn remove(&mut self, floor: u8, call: Call) {
        if let Some(queue) = self.queue_mut(call) {
            queue.retain(|&pending| pending != floor);
        }
    }

    pub fn pop_oldest(&mut self, call: Call) -> Option<u8> {
        match self.queue_mut(call) {
            Some(queue) if !queue.is_empty() => Some(queue.remove(0)),
            _ => None,
        }
    }

    /// A stop serves the floor regardless of which button was pressed,
    /// so the floor is cleared from both queues.
    pub fn clear_floor(&mut self, floor: u8) {
        self.up.retain(|&pending| pending != floor);
        self.down.retain(|&pending| pending != floor);
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    pub fn snapshot(&self) -> (Vec<u8>, Vec<u8>) {
        (self.up.clone(), self.down.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates_repeated_presses() {
        let mut pending = PendingCalls::new();
        pending.insert(3, Call::HallUp);
        pending.insert(3, Call::HallUp);
        pending.insert(3, Call::HallUp);
        assert_eq!(pending.snapshot().0, vec![3]);
    }

    #[test]
    fn pop_oldest_is_fifo() {
        let mut pending = PendingCalls::new();
        pending.insert(3, Call::HallUp);
        pending.insert(7, Call::HallUp);
        pending.insert(2, Call::HallUp);
        assert_eq!(pending.pop_oldest(Call::HallUp), Some(3));
        assert_eq!(pending.pop_oldest(Call::HallUp), Some(7));
        assert_eq!(pending.pop_oldest(Call::HallUp), Some(2));
        assert_eq!(pending.pop_oldest(Call::HallUp), None);
    }

    #[test]
    fn remove_touches_only_the_named_queue() {
        let mut pending = PendingCalls::new();
        pending.insert(4, Call::HallUp);
        pending.insert(4, Call::HallDown);
        pending.remove(4, Call::HallUp);
        assert!(!pending.contains(4, Call::HallUp));
        assert!(pending.contains(4, Call::HallDown));
    }

    #[test]
    fn clear_floor_clears_both_queues() {
        let mut pending = PendingCalls::new();
        pending.insert(4, Call::HallUp);
        pending.insert(4, Call::HallDown);
        pending.insert(2, Call::HallDown);
        pending.clear_floor(4);
        assert!(!pending.contains(4, Call::HallUp));
        assert!(!pending.contains(4, Call::HallDown));
        assert!(pending.contains(2, Call::HallDown));
    }

    #[test]
    fn cab_calls_have_no_pending_queue() {
        let mut pending = PendingCalls::new();
        pending.insert(3, Call::Cab);
        assert!(!pending.contains(3, Call::Cab));
        assert!(pending.is_empty());
        assert_eq!(pending.pop_oldest(Call::Cab), None);
    }
}
