use crate::common_types::Pid;
use std::collections::VecDeque;

/// FIFO queue of processes waiting for the CPU.
///
/// The queue stores pid handles into the owning
/// [`ProcessSet`](crate::ProcessSet), never PCB copies. Membership is
/// transient: a pid
/// enters when its process becomes Ready and leaves when it is dispatched.
/// An empty queue is an ordinary condition, not an error, so `dequeue` and
/// `peek` return `Option`.
#[derive(Clone, Debug, Default)]
pub struct ReadyQueue {
    queue: VecDeque<Pid>,
}

impl ReadyQueue {
    pub fn new() -> ReadyQueue {
        ReadyQueue {
            queue: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Appends `pid` at the tail, O(1).
    pub fn enqueue(&mut self, pid: Pid) {
        self.queue.push_back(pid);
    }

    /// Removes and returns the head, or `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<Pid> {
        self.queue.pop_front()
    }

    /// Returns the head without removing it.
    pub fn peek(&self) -> Option<Pid> {
        self.queue.front().copied()
    }

    /// Unlinks the first entry matching `pid`, O(n); a no-op when absent.
    /// The relative order of the remaining entries is untouched.
    pub fn remove(&mut self, pid: Pid) {
        if let Some(position) = self.queue.iter().position(|&queued| queued == pid) {
            self.queue.remove(position);
        }
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.queue.contains(&pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_discipline() {
        let mut queue = ReadyQueue::new();
        queue.enqueue(Pid::new(1));
        queue.enqueue(Pid::new(2));
        queue.enqueue(Pid::new(3));

        assert_eq!(queue.peek(), Some(Pid::new(1)));
        assert_eq!(queue.dequeue(), Some(Pid::new(1)));
        assert_eq!(queue.dequeue(), Some(Pid::new(2)));
        assert_eq!(queue.dequeue(), Some(Pid::new(3)));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn empty_queue_signals_absence() {
        let mut queue = ReadyQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn remove_unlinks_first_match_only() {
        let mut queue = ReadyQueue::new();
        queue.enqueue(Pid::new(1));
        queue.enqueue(Pid::new(2));
        queue.enqueue(Pid::new(1));
        queue.remove(Pid::new(1));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(Pid::new(2)));
        assert_eq!(queue.dequeue(), Some(Pid::new(1)));
    }

    #[test]
    fn remove_missing_pid_is_a_noop() {
        let mut queue = ReadyQueue::new();
        queue.enqueue(Pid::new(1));
        queue.remove(Pid::new(42));

        assert_eq!(queue.len(), 1);
        assert!(queue.contains(Pid::new(1)));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut queue = ReadyQueue::new();
        for pid in 1..=4 {
            queue.enqueue(Pid::new(pid));
        }
        queue.remove(Pid::new(2));

        assert_eq!(queue.dequeue(), Some(Pid::new(1)));
        assert_eq!(queue.dequeue(), Some(Pid::new(3)));
        assert_eq!(queue.dequeue(), Some(Pid::new(4)));
    }
}
