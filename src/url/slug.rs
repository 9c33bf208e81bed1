// ABOUTME: Friendly-title slugging for profile URLs.
// ABOUTME: Lowercases, collapses separators to dashes, percent-encodes.

/// Turn a display title into a URL-friendly slug.
///
/// ASCII alphanumerics are lowercased, runs of anything else collapse to a
/// single dash, and remaining non-ASCII characters are percent-encoded.
pub fn friendly_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    urlencoding::encode(&slug).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_dashes() {
        assert_eq!(friendly_title("Ops Team"), "ops-team");
        assert_eq!(friendly_title("The  Ops -- Team!"), "the-ops-team");
    }

    #[test]
    fn test_trims_leading_and_trailing_separators() {
        assert_eq!(friendly_title("  Ops Team  "), "ops-team");
        assert_eq!(friendly_title("!!!"), "");
    }

    #[test]
    fn test_non_ascii_is_percent_encoded() {
        assert_eq!(friendly_title("Café"), "caf%C3%A9");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(friendly_title("Team 42"), "team-42");
    }
}
