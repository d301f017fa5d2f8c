//! Mount-scoped observers.
//!
//! A section acquires its scroll listeners and reveal observers into an
//! [`ObserverScope`] when it activates. Deactivation calls
//! [`ObserverScope::release_all`]. A scope that is dropped first releases
//! whatever it still holds, so nothing outlives the section that owns it.

/// Something registered with the host that must be unregistered exactly once.
pub trait Release {
    fn release(&mut self);
}

#[derive(Default)]
pub struct ObserverScope {
    held: Vec<Box<dyn Release>>,
}

impl ObserverScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, handle: impl Release + 'static) {
        self.held.push(Box::new(handle));
    }

    /// Release in reverse acquisition order.
    pub fn release_all(&mut self) {
        while let Some(mut handle) = self.held.pop() {
            handle.release();
        }
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl Drop for ObserverScope {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl std::fmt::Debug for ObserverScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverScope")
            .field("held", &self.held.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Release for Probe {
        fn release(&mut self) {
            self.log.borrow_mut().push(self.name);
        }
    }

    fn probe(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Probe {
        Probe {
            name,
            log: log.clone(),
        }
    }

    #[test]
    fn release_all_empties_scope_in_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = ObserverScope::new();
        scope.acquire(probe("scroll", &log));
        scope.acquire(probe("reveal", &log));
        assert_eq!(scope.len(), 2);

        scope.release_all();
        assert!(scope.is_empty());
        assert_eq!(*log.borrow(), vec!["reveal", "scroll"]);
    }

    #[test]
    fn dropping_scope_releases_leftovers_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut scope = ObserverScope::new();
            scope.acquire(probe("reveal", &log));
            scope.release_all();
            scope.acquire(probe("scroll", &log));
        }
        assert_eq!(*log.borrow(), vec!["reveal", "scroll"]);
    }
}
