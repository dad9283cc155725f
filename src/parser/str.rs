//! Functions for common string operations.

/// Finds the earliest occurrence of any of the given delimiters.
///
/// Returns `(position, index)`: the byte position of the match in `haystack`, and the
/// index of the matched delimiter in `delimiters`.
/// When several delimiters match at the same position, the one listed first wins.
/// Empty delimiters never match.
#[must_use]
pub(crate) fn find_earliest(haystack: &str, delimiters: &[&str]) -> Option<(usize, usize)> {
    let haystack = haystack.as_bytes();

    #[cfg(feature = "memchr")]
    {
        if let Some(found) = find_earliest_single_bytes(haystack, delimiters) {
            return found;
        }
    }

    find_earliest_generic(haystack, delimiters)
}

/// Returns `true` if the set contains at least one usable (non-empty) delimiter.
#[inline]
#[must_use]
pub(crate) fn has_delimiters(delimiters: &[&str]) -> bool {
    delimiters.iter().any(|d| !d.is_empty())
}

/// Finds the earliest delimiter by testing every delimiter at every position.
///
/// Stops at the first position where any delimiter matches, so the cost is proportional to
/// the length of the token rather than of the whole haystack.
#[must_use]
fn find_earliest_generic(haystack: &[u8], delimiters: &[&str]) -> Option<(usize, usize)> {
    (0..haystack.len()).find_map(|pos| {
        let rest = &haystack[pos..];
        delimiters
            .iter()
            .position(|d| !d.is_empty() && rest.starts_with(d.as_bytes()))
            .map(|index| (pos, index))
    })
}

/// Finds the earliest delimiter using `memchr` when every delimiter is a single byte.
///
/// Returns `None` if the delimiter set is not eligible for the fast path (some delimiter is
/// longer than one byte, or there are more than three of them).
#[cfg(feature = "memchr")]
#[must_use]
fn find_earliest_single_bytes(
    haystack: &[u8],
    delimiters: &[&str],
) -> Option<Option<(usize, usize)>> {
    let mut needles = [0_u8; 3];
    let mut len = 0;
    for delimiter in delimiters.iter().filter(|d| !d.is_empty()) {
        let byte = match delimiter.as_bytes() {
            [byte] => *byte,
            _ => return None,
        };
        if len == needles.len() {
            return None;
        }
        needles[len] = byte;
        len += 1;
    }

    let pos = match len {
        0 => return Some(None),
        1 => memchr::memchr(needles[0], haystack),
        2 => memchr::memchr2(needles[0], needles[1], haystack),
        _ => memchr::memchr3(needles[0], needles[1], needles[2], haystack),
    };
    // Duplicated delimiters resolve to the first one listed.
    Some(pos.and_then(|pos| {
        let found = haystack[pos];
        delimiters
            .iter()
            .position(|d| d.as_bytes() == [found])
            .map(|index| (pos, index))
    }))
}
