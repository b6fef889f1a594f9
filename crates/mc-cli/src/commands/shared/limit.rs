/// Resolve how many rows to print: the global `--limit` flag wins, then the
/// fallback (a bucket's configured limit, for instance). `None` prints
/// everything.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: Option<usize>) -> Option<usize> {
    global
        .and_then(|limit| usize::try_from(limit).ok())
        .or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn global_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(20)), Some(5));
    }

    #[test]
    fn fallback_used_when_flag_missing() {
        assert_eq!(effective_limit(None, Some(20)), Some(20));
    }

    #[test]
    fn unlimited_when_none_set() {
        assert_eq!(effective_limit(None, None), None);
    }
}
