use chrono::NaiveDate;
use contracts::domain::a001_project::parse_date_floor;
use leptos::prelude::*;

use crate::shared::date_utils::format_input_date;

const DATE_INPUT_STYLE: &str = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; color: #6c757d; width: 150px;";

/// Значение для `<input type="date">`: пустая строка, если даты нет
fn input_value(date: Option<NaiveDate>) -> String {
    date.map(format_input_date).unwrap_or_default()
}

/// Нативный выбор даты, работающий с `Option<NaiveDate>`.
///
/// Очищенное или неполное поле отдаёт `None`.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            title="Created on or after"
            prop:value=move || input_value(value.get())
            on:change=move |ev| on_change.run(parse_date_floor(&event_target_value(&ev)))
            style=DATE_INPUT_STYLE
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value() {
        assert_eq!(input_value(None), "");
        assert_eq!(input_value(NaiveDate::from_ymd_opt(2023, 1, 6)), "2023-01-06");
    }

    #[test]
    fn test_input_value_roundtrips_through_parser() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29);
        assert_eq!(parse_date_floor(&input_value(date)), date);
        assert_eq!(parse_date_floor(&input_value(None)), None);
    }
}
