//! Утилиты форматирования чисел для таблиц и подписей графиков

/// Округляет значение до одного знака после запятой и отбрасывает хвост `.0`
///
/// Целые значения выводятся без дробной части, остальные ровно с одним
/// знаком. Отсутствующее или нечисловое значение выводится как `"0"`.
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number;
/// assert_eq!(format_number(Some(3.0)), "3");
/// assert_eq!(format_number(Some(3.46)), "3.5");
/// assert_eq!(format_number(None), "0");
/// ```
pub fn format_number(value: Option<f64>) -> String {
    let formatted = format!("{:.1}", round_metric(value));

    match formatted.strip_suffix(".0") {
        Some(integer_part) => integer_part.to_string(),
        None => formatted,
    }
}

/// Значение метрики для графика: то же округление, что у [`format_number`]
///
/// Отсутствующее или нечисловое значение даёт `0.0`.
pub fn round_metric(value: Option<f64>) -> f64 {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return 0.0;
    };
    // Округление "от нуля", как у toFixed для половинных значений
    (value * 10.0).round() / 10.0
}
