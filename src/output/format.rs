pub fn format_currency(amount: f64) -> String {
    let rendered = format!("{:.2}", amount);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rendered.as_str(), "00"),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    format!("{}${}.{}", sign, group_thousands(digits), frac_part)
}

pub fn format_count(value: f64) -> String {
    let rendered = format!("{:.0}", value);
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    format!("{}{}", sign, group_thousands(digits))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
