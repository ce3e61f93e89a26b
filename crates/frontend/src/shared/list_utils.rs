/// Утилиты для списков: поле поиска и подсветка совпадений
use leptos::prelude::*;

/// Диапазоны байтов в `text`, совпадающие с `filter` без учёта регистра.
///
/// Нижний регистр может менять длину отдельных символов, поэтому смещения в
/// приведённой строке переводятся обратно через таблицу границ символов.
/// Совпадение, которое начинается или заканчивается внутри раскрытия одного
/// символа, пропускается.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return Vec::new();
    }

    // boundaries[i] — смещение в `text` для байта i приведённой строки,
    // если на нём начинается раскрытие исходного символа
    let mut text_lower = String::with_capacity(text.len());
    let mut boundaries: Vec<Option<usize>> = Vec::with_capacity(text.len() + 1);
    for (orig_pos, c) in text.char_indices() {
        let lower_start = text_lower.len();
        text_lower.extend(c.to_lowercase());
        boundaries.push(Some(orig_pos));
        boundaries.extend(std::iter::repeat(None).take(text_lower.len() - lower_start - 1));
    }
    boundaries.push(Some(text.len()));

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if let (Some(orig_start), Some(orig_end)) = (boundaries[start], boundaries[end]) {
            ranges.push((orig_start, orig_end));
        }
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                {text[start..end].to_string()}
            </span>
        }.into_any());
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки. Каждое изменение сразу уходит в `on_change`.
#[component]
pub fn SearchInput(
    /// Текущее значение поиска
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Type to search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div style="position: relative; display: flex; align-items: center; flex: 1;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 100%; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Team Offsite", "off"), vec![(5, 8)]);
        assert_eq!(match_ranges("abcABC", " abc "), vec![(0, 3), (3, 6)]);
    }

    #[test]
    fn test_match_ranges_non_ascii_names() {
        // İ grows and Ω shrinks when lowercased
        let text = "\u{130}a\u{2126}";
        let ranges = match_ranges(text, "a");
        assert_eq!(ranges, vec![(2, 3)]);
        for (start, end) in ranges {
            assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
            assert_eq!(&text[start..end], "a");
        }

        assert_eq!(match_ranges("\u{2126}mega", "\u{3c9}"), vec![(0, 3)]);
        assert_eq!(match_ranges("Привет Мир", "мир"), vec![(13, 19)]);
    }

    #[test]
    fn test_match_ranges_skips_partial_expansion() {
        // "İ" lowercases to "i" + combining dot; "i" alone covers half of it
        assert!(match_ranges("\u{130}", "i").is_empty());
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("Team Offsite", "  ").is_empty());
        assert!(match_ranges("Team Offsite", "zzz").is_empty());
    }
}
