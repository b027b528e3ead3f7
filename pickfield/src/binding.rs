use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, caller-owned value that a widget reads and writes.
///
/// `Binding<T>` is the two-way link between a widget and the code that embeds
/// it. Clones share the same cell, so the caller keeps one handle while the
/// widget holds another, and either side may write at any time. Every write
/// bumps a version counter; a widget compares versions to notice writes it
/// did not make itself.
///
/// # Example
///
/// ```
/// use pickfield::Binding;
///
/// let selected = Binding::new(vec!["Oslo".to_string()]);
/// let handle = selected.clone();
/// handle.update(|list| list.push("Bergen".to_string()));
/// assert_eq!(selected.get().len(), 2);
/// ```
#[derive(Debug)]
pub struct Binding<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    version: Arc<AtomicU64>,
}

impl<T> Binding<T> {
    /// Create a new binding with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = value;
        drop(guard);
        self.touch();
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
        drop(guard);
        self.touch();
    }

    /// Number of writes made through any handle
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Check if the binding has been written since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Whether two handles share the same cell
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn touch(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        self.version.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value_and_version() {
        let a = Binding::new(1);
        let b = a.clone();
        assert_eq!(a.version(), 0);

        b.set(5);
        assert_eq!(a.get(), 5);
        assert_eq!(a.version(), 1);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_dirty_tracking() {
        let flag = Binding::new(false);
        assert!(!flag.is_dirty());
        flag.update(|v| *v = !*v);
        assert!(flag.is_dirty());
        flag.clear_dirty();
        assert!(!flag.is_dirty());
        assert!(flag.get());
    }

    #[test]
    fn test_writes_recover_from_poison() {
        let list = Binding::new(vec![1]);
        let handle = list.clone();
        let _ = std::thread::spawn(move || {
            handle.update(|_| panic!("writer panicked"));
        })
        .join();

        list.set(vec![2]);
        assert_eq!(list.get(), vec![2]);
        list.update(|v| v.push(3));
        assert_eq!(list.get(), vec![2, 3]);
        assert_eq!(list.version(), 2);
    }

    #[test]
    fn test_with_borrows() {
        let list = Binding::new(vec![1, 2, 3]);
        assert_eq!(list.with(|v| v.len()), 3);
    }
}
