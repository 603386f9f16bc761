use crate::error::ShellError;

/// A buffer that grows by a fixed number of slots instead of doubling.
#[derive(Debug)]
pub struct GrowableBuffer<T> {
    items: Vec<T>,
    increment: usize,
    label: &'static str,
}

impl<T> GrowableBuffer<T> {
    pub fn with_increment(increment: usize, label: &'static str) -> Result<Self, ShellError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(increment)
            .map_err(|_| ShellError::Allocation { buffer: label })?;
        Ok(GrowableBuffer { items, increment, label })
    }

    pub fn push(&mut self, item: T) -> Result<(), ShellError> {
        if self.items.len() == self.items.capacity() {
            self.items
                .try_reserve_exact(self.increment)
                .map_err(|_| ShellError::Allocation { buffer: self.label })?;
            log::trace!("{} buffer grown to {} slots", self.label, self.items.capacity());
        }
        self.items.push(item);
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
