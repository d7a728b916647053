/// Something mounted on the page that must be released exactly once.
pub trait Teardown {
    fn teardown(self);
}

/// Holds at most one live instance of a mounted component.
///
/// Activating while active is a no-op, so repeated mount calls never stack a
/// second set of DOM nodes or audio elements.
pub struct Lifecycle<T: Teardown> {
    current: Option<T>,
    activations: u64,
}

impl<T: Teardown> Default for Lifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Teardown> Lifecycle<T> {
    pub const fn new() -> Self {
        Self {
            current: None,
            activations: 0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Returns `Ok(true)` when a new instance was created.
    pub fn activate<E>(&mut self, make: impl FnOnce() -> Result<T, E>) -> Result<bool, E> {
        if self.current.is_some() {
            return Ok(false);
        }
        self.current = Some(make()?);
        self.activations += 1;
        Ok(true)
    }

    /// Returns `true` when an instance was torn down.
    pub fn deactivate(&mut self) -> bool {
        match self.current.take() {
            Some(t) => {
                t.teardown();
                true
            }
            None => false,
        }
    }
}
