use std::fmt;
use std::num::NonZeroUsize;

/// A contiguous batch of results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Splits a slice into pages of at most `page_size` items. Re-iterable.
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: NonZeroUsize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: NonZeroUsize) -> Self {
        Self { items, page_size }
    }

    pub fn pages(&self) -> impl Iterator<Item = Page<'a, T>> + 'a {
        self.items.chunks(self.page_size.get()).map(|items| Page { items })
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }
}

pub fn paginate<T>(items: &[T], page_size: NonZeroUsize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn last_page_may_be_shorter() {
        let items = [1, 2, 3, 4, 5];
        let pages = paginate(&items, size(2));
        let lens: Vec<_> = pages.pages().map(|p| p.len()).collect();
        assert_eq!(lens, vec![2, 2, 1]);
        assert_eq!(pages.page_count(), 3);
        // second pass over the same paginator
        assert_eq!(pages.pages().count(), 3);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: [i32; 0] = [];
        assert_eq!(paginate(&items, size(4)).pages().count(), 0);
    }

    #[test]
    fn page_displays_items_back_to_back() {
        let items = ["a", "b", "c"];
        let first = paginate(&items, size(2)).pages().next().unwrap();
        assert!(!first.is_empty());
        assert_eq!(first.to_string(), "ab");
    }
}
