use std::fmt;
use std::slice::Chunks;

/// One page of items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Splits a slice into pages of at most `page_size` items
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// A zero page size is treated as one
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Pages<'a, T> {
        Pages {
            chunks: self.items.chunks(self.page_size),
        }
    }
}

impl<'a, T> IntoIterator for &Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = Pages<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pages of a [`Paginator`]
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    chunks: Chunks<'a, T>,
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = Page<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|items| Page { items })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

/// Split `items` into pages of at most `page_size` items
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts() {
        let v = vec![0; 15];
        assert_eq!(paginate(&v, 1).len(), v.len());
        assert_eq!(paginate(&v, 3).len(), 5);
        assert_eq!(paginate(&v, 5).len(), 3);
        assert_eq!(paginate(&v, 4).len(), 4);
        assert_eq!(paginate(&v, 15).len(), 1);
        assert_eq!(paginate(&v, 150).len(), 1);
        assert_eq!(paginate(&v, 14).len(), 2);
        assert_eq!(paginate::<i32>(&[], 3).len(), 0);
    }

    #[test]
    fn test_looping() {
        let v: Vec<i32> = (1..=15).collect();

        let mut out = String::new();
        for page in &paginate(&v, 6) {
            for x in page.items() {
                out.push_str(&format!("{} ", x));
            }
            out.push('\n');
        }
        assert_eq!(out, "1 2 3 4 5 6 \n7 8 9 10 11 12 \n13 14 15 \n");
    }

    #[test]
    fn test_page_sizes() {
        let letters = [' '; 26];
        let sizes: Vec<usize> = paginate(&letters, 11).iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![11, 11, 4]);
    }

    #[test]
    fn test_page_display() {
        let v = [1, 2, 3];
        let pages: Vec<String> = paginate(&v, 2).iter().map(|p| p.to_string()).collect();
        assert_eq!(pages, vec!["12".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_pages_iterator() {
        let v = [1, 2, 3, 4, 5];
        let mut pages: Pages<'_, i32> = paginate(&v, 2).iter();

        assert_eq!(pages.size_hint(), (3, Some(3)));
        assert_eq!(pages.next().map(|p| p.items()), Some(&v[..2]));
        assert_eq!(pages.last().map(|p| p.items()), Some(&v[4..]));
    }

    #[test]
    fn test_zero_page_size() {
        let v = [1, 2];
        assert_eq!(paginate(&v, 0).len(), 2);
    }
}
