//! Bounded operand stack.

/// Returned by [`Stack::push`] when the stack is already at its maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackFull {
    pub max_size: usize,
}

/// A LIFO stack with an enforced maximum size.
///
/// One stack is created per evaluation call and dropped when it returns, so
/// nothing leaks from one expression into the next.
///
/// # Examples
///
/// ```ignore
/// let mut stack = Stack::new(100);
/// stack.push(42).unwrap();
/// stack.push(17).unwrap();
/// assert_eq!(stack.pop(), Some(17));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> Stack<T> {
    pub fn new(max_size: usize) -> Self {
        // Pre-allocate a reasonable amount (min of max_size or 64)
        Self {
            items: Vec::with_capacity(max_size.min(64)),
            max_size,
        }
    }

    /// Pushes a value, failing instead of growing past `max_size`.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), StackFull> {
        if self.items.len() >= self.max_size {
            return Err(StackFull {
                max_size: self.max_size,
            });
        }
        self.items.push(value);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes the top `n` values and returns them bottom-to-top.
    ///
    /// Returns `None` and leaves the stack untouched if fewer than `n`
    /// values are present.
    ///
    /// ```ignore
    /// let mut stack = Stack::new(10);
    /// for v in [10, 20, 30] { stack.push(v).unwrap(); }
    /// assert_eq!(stack.pop_n(2), Some(vec![20, 30]));
    /// assert_eq!(stack.pop_n(2), None);
    /// ```
    pub fn pop_n(&mut self, n: usize) -> Option<Vec<T>> {
        let len = self.items.len();
        if n > len {
            None
        } else {
            Some(self.items.split_off(len - n))
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new(10);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_push_beyond_max_size() {
        let mut stack = Stack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.push(3), Err(StackFull { max_size: 2 }));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_n_keeps_push_order() {
        let mut stack = Stack::new(10);
        for v in [10, 20, 30, 40] {
            stack.push(v).unwrap();
        }
        assert_eq!(stack.pop_n(2), Some(vec![30, 40]));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_n_underflow_leaves_stack_intact() {
        let mut stack = Stack::new(10);
        stack.push(1).unwrap();
        assert_eq!(stack.pop_n(2), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_zero_sized_stack_rejects_everything() {
        let mut stack = Stack::new(0);
        assert_eq!(stack.push(1), Err(StackFull { max_size: 0 }));
    }
}
