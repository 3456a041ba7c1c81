//! Утилиты форматирования денежных значений

/// Форматирует сумму в долларах: знак, "$", разделитель тысяч, 2 знака
///
/// # Примеры
///
/// ```text
/// format_usd(1234567.891) -> "$1,234,567.89"
/// ```
pub fn format_usd(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    // Запятая каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(19.9), "$19.90");
        assert_eq!(format_usd(1234.56), "$1,234.56");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_format_usd_rounds() {
        assert_eq!(format_usd(0.005), "$0.01");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }
}
