pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Clamps requested page sizes into `[1, max_page_size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeValidator {
    max_page_size: usize,
}

impl PageSizeValidator {
    pub fn new(max_page_size: usize) -> Self {
        Self {
            max_page_size: max_page_size.max(1),
        }
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    pub fn clamp(&self, page_size: i64) -> usize {
        if page_size < 1 {
            return 1;
        }

        usize::try_from(page_size)
            .map_or(self.max_page_size, |size| size.min(self.max_page_size))
    }

    /// Builds the page window for a raw request. Negative pages read as the first page.
    pub fn page(&self, page: i64, page_size: i64) -> Page {
        Page {
            index: usize::try_from(page.max(0)).unwrap_or(usize::MAX),
            size: self.clamp(page_size),
        }
    }
}

impl Default for PageSizeValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// Skips `index * size` items and takes `size`.
    pub fn slice<I>(&self, items: I) -> std::iter::Take<std::iter::Skip<I::IntoIter>>
    where
        I: IntoIterator,
    {
        items.into_iter().skip(self.offset()).take(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        let validator = PageSizeValidator::new(100);

        assert_eq!(validator.clamp(0), 1);
        assert_eq!(validator.clamp(-25), 1);
        assert_eq!(validator.clamp(1), 1);
        assert_eq!(validator.clamp(42), 42);
        assert_eq!(validator.clamp(100), 100);
        assert_eq!(validator.clamp(101), 100);
        assert_eq!(validator.clamp(i64::MAX), 100);
    }

    #[test]
    fn test_zero_max_is_raised_to_one() {
        let validator = PageSizeValidator::new(0);
        assert_eq!(validator.max_page_size(), 1);
        assert_eq!(validator.clamp(10), 1);
    }

    #[test]
    fn test_slice_windows() {
        let validator = PageSizeValidator::new(100);
        let items: Vec<u32> = (0..7).collect();

        let first: Vec<_> = validator.page(0, 3).slice(&items).copied().collect();
        let last: Vec<_> = validator.page(2, 3).slice(&items).copied().collect();
        let beyond: Vec<_> = validator.page(3, 3).slice(&items).copied().collect();

        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(last, vec![6]);
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_negative_page_reads_first_page() {
        let page = PageSizeValidator::default().page(-4, 2);
        assert_eq!(page, Page { index: 0, size: 2 });
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = PageSizeValidator::default().page(i64::MAX, 100);
        assert_eq!(page.offset(), usize::MAX);
        assert_eq!(page.slice(vec![1, 2, 3]).count(), 0);
    }
}
