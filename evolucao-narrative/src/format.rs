//! Single-field formatters. `None` is the absent marker throughout.

/// Value meaning "deliberately left unselected".
pub const SENTINEL: &str = "--";

/// A labelled measurement: label, raw value, optional unit.
pub type Parameter<'a> = (&'static str, Option<&'a str>, Option<&'static str>);

/// Trimmed value, or `None` for blank input and the sentinel.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && *value != SENTINEL)
}

/// Lower-cased free text for use mid-sentence, trailing periods removed.
pub fn lowercase(raw: Option<&str>) -> Option<String> {
    sentence_body(raw).map(str::to_lowercase)
}

/// Append `unit` unless the value already ends with it.
pub fn with_unit(raw: Option<&str>, unit: &str) -> Option<String> {
    let value = present(raw)?;
    if unit_key(value).ends_with(&unit_key(unit)) {
        return Some(value.to_string());
    }
    Some(if unit == "%" {
        format!("{value}%")
    } else {
        format!("{value} {unit}")
    })
}

fn unit_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '₂' { '2' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Free text placed inside a sentence, without its own closing period.
pub fn sentence_body(raw: Option<&str>) -> Option<&str> {
    present(raw)
        .map(|value| value.trim_end_matches(['.', ' ']))
        .filter(|value| !value.is_empty())
}

/// "PEEP 8 cmH₂O" style fragments for every present parameter, in order.
pub fn parameter_list(parameters: &[Parameter<'_>]) -> Vec<String> {
    parameters
        .iter()
        .filter_map(|(label, raw, unit)| {
            let value = match unit {
                Some(unit) => with_unit(*raw, unit)?,
                None => present(*raw)?.to_string(),
            };
            Some(format!("{label} {value}"))
        })
        .collect()
}

/// Edema grade for one limb, absent when blank or graded "0".
pub fn edema_grade(raw: Option<&str>) -> Option<&str> {
    present(raw).filter(|grade| *grade != "0")
}

/// Leading grade of a pain code such as "10 - Pior dor possível".
pub fn pain_grade(raw: &str) -> &str {
    raw.split(" - ").next().unwrap_or(raw).trim()
}

/// Drug named in a vasoactive code such as "Sim (Noradrenalina)".
pub fn vasoactive_drug(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let named = match raw.strip_prefix("Sim") {
        Some(rest) => rest.trim().trim_start_matches('(').trim_end_matches(')').trim(),
        None => raw,
    };
    Some(named).filter(|drug| !drug.is_empty())
}

/// "a", "a e b", "a, b e c".
pub fn join_with_and(items: &[String]) -> Option<String> {
    match items.split_last()? {
        (last, []) => Some(last.clone()),
        (last, head) => Some(format!("{} e {last}", head.join(", "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_drops_blank_and_sentinel() {
        assert_eq!(present(Some(" 95 ")), Some("95"));
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("--")), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn unit_applied_once() {
        assert_eq!(with_unit(Some("95"), "%").as_deref(), Some("95%"));
        assert_eq!(with_unit(Some("95%"), "%").as_deref(), Some("95%"));
        assert_eq!(with_unit(Some("3"), "L/min").as_deref(), Some("3 L/min"));
        assert_eq!(with_unit(Some("3 l/min"), "L/min").as_deref(), Some("3 l/min"));
        assert_eq!(with_unit(Some("8cmH2O"), "cmH₂O").as_deref(), Some("8cmH2O"));
        assert_eq!(with_unit(Some(""), "bpm"), None);
    }

    #[test]
    fn parameters_keep_order_and_skip_absent() {
        let list = parameter_list(&[
            ("PEEP", Some("8"), Some("cmH₂O")),
            ("FiO₂", None, Some("%")),
            ("Vt", Some("450ml"), None),
        ]);
        assert_eq!(list, vec!["PEEP 8 cmH₂O", "Vt 450ml"]);
    }

    #[test]
    fn coded_helpers() {
        assert_eq!(pain_grade("10 - Pior dor possível"), "10");
        assert_eq!(pain_grade("4"), "4");
        assert_eq!(vasoactive_drug("Sim (Noradrenalina)"), Some("Noradrenalina"));
        assert_eq!(vasoactive_drug("Sim"), None);
        assert_eq!(edema_grade(Some("0")), None);
        assert_eq!(edema_grade(Some("2+")), Some("2+"));
        assert_eq!(sentence_body(Some("Sem intercorrências.")), Some("Sem intercorrências"));
    }

    #[test]
    fn lowercase_drops_closing_period() {
        assert_eq!(lowercase(Some("Taquipneico.")).as_deref(), Some("taquipneico"));
        assert_eq!(lowercase(Some(" . ")), None);
        assert_eq!(lowercase(Some("--")), None);
    }

    #[test]
    fn join_with_and_uses_last_item() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join_with_and(&items).as_deref(), Some("a, b e c"));
        assert_eq!(join_with_and(&items[..1]).as_deref(), Some("a"));
        assert_eq!(join_with_and(&[]), None);
        assert_eq!(items.len(), 3);
    }
}
