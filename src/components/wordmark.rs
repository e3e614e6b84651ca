use leptos::*;

/// Split a camel-cased site name before its last capital letter,
/// "SponsorKiya" becomes ("Sponsor", "Kiya").
pub fn wordmark_parts(name: &str) -> (&str, &str) {
    let split = name
        .char_indices()
        .filter(|(idx, ch)| *idx > 0 && ch.is_uppercase())
        .map(|(idx, _)| idx)
        .last();

    match split {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

#[component]
pub fn Wordmark(
    #[prop(into)] name: String,
    /// Classes of the second half of the name
    muted_class: &'static str,
    #[prop(optional)] dot_class: &'static str,
) -> impl IntoView {
    let (head, tail) = wordmark_parts(&name);
    let (head, tail) = (head.to_string(), tail.to_string());

    view! {
        <>
            {head}
            <span class=muted_class>{tail}</span>
            <span class=dot_class>"."</span>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordmark_parts() {
        assert_eq!(wordmark_parts("SponsorKiya"), ("Sponsor", "Kiya"));
        assert_eq!(wordmark_parts("MySponsorKiya"), ("MySponsor", "Kiya"));
    }

    #[test]
    fn test_wordmark_without_capitals() {
        assert_eq!(wordmark_parts("sponsorkiya"), ("sponsorkiya", ""));
        assert_eq!(wordmark_parts("Sponsor"), ("Sponsor", ""));
        assert_eq!(wordmark_parts(""), ("", ""));
    }
}
