use serde::Serialize;

pub const PAGE_SIZE: usize = 10;

/// Number of pages for `len` rows. Zero rows means zero pages.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Clamps a requested 1-based page into `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, page_count(len).max(1))
}

/// Rows shown on `page` (1-based). Out of range pages yield an empty slice.
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &rows[..0];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= rows.len() {
        return &rows[..0];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
    Number(usize),
}

impl PageTarget {
    pub fn parse(value: &str) -> Result<Self, String> {
        let raw = value.trim().to_lowercase();
        match raw.as_str() {
            "first" | "f" => Ok(Self::First),
            "prev" | "previous" | "p" => Ok(Self::Previous),
            "next" | "n" => Ok(Self::Next),
            "last" | "l" => Ok(Self::Last),
            "" => Err("page target is empty".to_string()),
            _ => raw
                .parse::<usize>()
                .map(Self::Number)
                .map_err(|_| format!("invalid page '{}'", value.trim())),
        }
    }

    /// Resolves the target against the current page and row count.
    ///
    /// The result is always a valid page under [`clamp_page`].
    pub fn resolve(self, current: usize, len: usize) -> usize {
        let raw = match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::Last => page_count(len),
            Self::Number(n) => n,
        };
        clamp_page(raw, len)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PagerControls {
    pub current: usize,
    pub page_count: usize,
    pub pages: Vec<usize>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub last_target: usize,
}

pub fn controls(current: usize, len: usize) -> PagerControls {
    let count = page_count(len);
    PagerControls {
        current,
        page_count: count,
        pages: (1..=count).collect(),
        previous_enabled: current > 1,
        next_enabled: count > 0 && current < count,
        last_target: count.max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn pages_concatenate_back_to_the_input() {
        for len in [0usize, 1, 9, 10, 11, 25, 46] {
            let rows: Vec<usize> = (0..len).collect();
            let mut joined = Vec::new();
            for page in 1..=page_count(len) {
                joined.extend_from_slice(page_slice(&rows, page));
            }
            assert_eq!(joined, rows);
        }
    }

    #[test]
    fn last_page_may_be_partial() {
        let rows: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&rows, 3), &[20, 21, 22, 23, 24]);
        assert!(page_slice(&rows, 4).is_empty());
        assert!(page_slice(&rows, 0).is_empty());
    }

    #[test]
    fn clamp_handles_empty_and_overflow() {
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(5, 0), 1);
        assert_eq!(clamp_page(5, 25), 3);
        assert_eq!(clamp_page(2, 25), 2);
    }

    #[test]
    fn targets_resolve_within_bounds() {
        assert_eq!(PageTarget::Previous.resolve(1, 25), 1);
        assert_eq!(PageTarget::Next.resolve(3, 25), 3);
        assert_eq!(PageTarget::Next.resolve(1, 25), 2);
        assert_eq!(PageTarget::Last.resolve(1, 25), 3);
        assert_eq!(PageTarget::Last.resolve(1, 0), 1);
        assert_eq!(PageTarget::Number(9).resolve(1, 25), 3);
    }

    #[test]
    fn parse_accepts_names_and_numbers() {
        assert_eq!(PageTarget::parse("Next").unwrap(), PageTarget::Next);
        assert_eq!(PageTarget::parse(" 4 ").unwrap(), PageTarget::Number(4));
        assert!(PageTarget::parse("fourth").is_err());
        assert!(PageTarget::parse("").is_err());
    }

    #[test]
    fn controls_disable_edges() {
        let c = controls(1, 25);
        assert!(!c.previous_enabled);
        assert!(c.next_enabled);
        assert_eq!(c.pages, vec![1, 2, 3]);

        let c = controls(3, 25);
        assert!(c.previous_enabled);
        assert!(!c.next_enabled);

        let empty = controls(1, 0);
        assert_eq!(empty.page_count, 0);
        assert!(empty.pages.is_empty());
        assert!(!empty.next_enabled);
        assert_eq!(empty.last_target, 1);
    }
}
