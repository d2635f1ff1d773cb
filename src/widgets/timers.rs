use fnv::FnvHashMap;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Hash, Eq)]
pub struct TimerId(u64);

/// Deferred actions, released once the host clock reaches their due time.
///
/// Actions due at the same instant come out in scheduling order.
#[derive(Debug)]
pub struct Timers<A> {
    now: Duration,
    next_id: u64,
    queue: PriorityQueue<TimerId, Reverse<(Duration, u64)>>,
    actions: FnvHashMap<TimerId, A>,
}

impl<A> Default for Timers<A> {
    fn default() -> Self {
        Timers {
            now: Duration::ZERO,
            next_id: 0,
            queue: PriorityQueue::new(),
            actions: FnvHashMap::default(),
        }
    }
}

impl<A> Timers<A> {
    pub fn new() -> Timers<A> {
        Timers::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(id, Reverse((self.now + delay, id.0)));
        self.actions.insert(id, action);
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> Option<A> {
        self.queue.remove(&id);
        self.actions.remove(&id)
    }

    /// Moves the clock to `now` (never backwards) and returns every action due by then.
    pub fn advance(&mut self, now: Duration) -> Vec<A> {
        self.now = self.now.max(now);
        let mut due = Vec::new();
        while let Some((_, Reverse((at, _)))) = self.queue.peek() {
            if *at > self.now {
                break;
            }
            if let Some((id, _)) = self.queue.pop() {
                if let Some(action) = self.actions.remove(&id) {
                    due.push(action);
                }
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn releases_in_due_order() {
        let mut timers = Timers::new();
        timers.schedule(ms(250), "glyph");
        timers.schedule(ms(100), "scroll");
        timers.schedule(ms(250), "glyph2");
        assert!(timers.advance(ms(99)).is_empty());
        assert_eq!(timers.advance(ms(100)), vec!["scroll"]);
        assert_eq!(timers.advance(ms(1000)), vec!["glyph", "glyph2"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut timers = Timers::new();
        timers.advance(ms(500));
        timers.schedule(ms(150), 1);
        assert!(timers.advance(ms(649)).is_empty());
        assert_eq!(timers.advance(ms(650)), vec![1]);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = Timers::new();
        let id = timers.schedule(ms(150), 'a');
        timers.schedule(ms(150), 'b');
        assert_eq!(timers.cancel(id), Some('a'));
        assert_eq!(timers.cancel(id), None);
        assert_eq!(timers.advance(ms(150)), vec!['b']);
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut timers: Timers<()> = Timers::new();
        timers.advance(ms(300));
        timers.advance(ms(100));
        assert_eq!(timers.now(), ms(300));
    }
}
