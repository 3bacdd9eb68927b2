/// Default language preference, most wanted first.
pub const PREFERRED_LANGS: &[&str] = &["fr", "en", "it", "es", "de", "ca", "eu"];

/// Pick the display language for one localized entity.
///
/// Returns the first `preference` entry present in `available`, otherwise the
/// first of `available` in its given order. `None` only when `available` is
/// empty.
pub fn select_locale<'a, S: AsRef<str>>(
    available: &'a [S],
    preference: &[String],
) -> Option<&'a str> {
    preference
        .iter()
        .find_map(|wanted| {
            available
                .iter()
                .find(|lang| AsRef::<str>::as_ref(*lang) == wanted.as_str())
        })
        .or_else(|| available.first())
        .map(AsRef::<str>::as_ref)
}

pub fn default_preference() -> Vec<String> {
    PREFERRED_LANGS.iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_beats_input_order() {
        assert_eq!(
            select_locale(&["de", "fr", "it"], &default_preference()),
            Some("fr")
        );
        assert_eq!(
            select_locale(&["de", "it"], &default_preference()),
            Some("it")
        );
    }

    #[test]
    fn falls_back_to_first_available() {
        assert_eq!(select_locale(&["pt"], &default_preference()), Some("pt"));
        assert_eq!(
            select_locale(&["sl", "pt"], &default_preference()),
            Some("sl")
        );
    }

    #[test]
    fn empty_set_has_no_locale() {
        let empty: [&str; 0] = [];
        assert_eq!(select_locale(&empty, &default_preference()), None);
    }

    #[test]
    fn selection_is_a_member_and_deterministic() {
        let sets: [&[&str]; 4] = [&["eu", "ca"], &["es"], &["zh", "ja"], &["en", "fr"]];
        for langs in sets {
            let first = select_locale(langs, &default_preference()).unwrap();
            assert!(langs.contains(&first));
            assert_eq!(select_locale(langs, &default_preference()), Some(first));
        }
    }

    #[test]
    fn custom_preference() {
        let preference = vec!["de".to_string(), "fr".to_string()];
        assert_eq!(select_locale(&["fr", "de"], &preference), Some("de"));
    }
}
