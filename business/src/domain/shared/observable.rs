use tokio::sync::watch;

/// Holds the authoritative state of a store and pushes snapshots to subscribers.
///
/// Every mutation goes through the sender's write lock, so a subscriber reads
/// either the state before a mutation or the state after it. Subscribers are
/// `watch::Receiver`s; dropping the receiver unsubscribes.
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Replaces the state and notifies every subscriber.
    pub fn publish(&self, state: T) {
        self.sender.send_replace(state);
    }

    /// Applies `mutate` atomically, then notifies every subscriber.
    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut T),
    {
        self.sender.send_modify(mutate);
    }

    /// Like [`Observable::update`], but subscribers are only notified when
    /// `mutate` returns `true`. Returns what `mutate` returned.
    pub fn update_if<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        self.sender.send_if_modified(mutate)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
