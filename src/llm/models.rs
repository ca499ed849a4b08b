//! Model annotations and selection for installed Ollama models.

/// Annotation lookup table, evaluated top to bottom; the first row whose
/// patterns all occur in the lowercased model name wins.
///
/// `13b` comes before `3b`, which is a substring of it.
pub const MODEL_HINTS: &[(&[&str], &str)] = &[
    (&["llama3"], "Recommended - great for code"),
    (&["codellama"], "Best for coding"),
    (&["qwen", "32b"], "Powerful but slow"),
    (&["qwen", "7b"], "Good balance"),
    (&["qwen"], "Smart choice"),
    (&["mistral"], "Fast and efficient"),
    (&["llama2"], "Reliable classic"),
    (&["13b"], "Slow but accurate"),
    (&["32b"], "Slow but accurate"),
    (&["3b"], "Fast and light"),
    (&["7b"], "Balanced"),
];

/// Short recommendation text for a model name, if any row matches.
pub fn model_annotation(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    MODEL_HINTS
        .iter()
        .find(|(patterns, _)| patterns.iter().all(|p| name.contains(p)))
        .map(|(_, hint)| *hint)
}

/// `name` followed by its annotation in parentheses, when it has one.
pub fn describe_model(name: &str) -> String {
    match model_annotation(name) {
        Some(hint) => format!("{name} ({hint})"),
        None => name.to_string(),
    }
}

/// Resolve a 1-based numeric choice against `models`.
///
/// Empty, non-numeric or out-of-range input falls back to the first model.
/// Returns `None` only when `models` is empty.
pub fn resolve_model_selection<'a>(input: &str, models: &'a [String]) -> Option<&'a str> {
    let first = models.first()?;
    let chosen = input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| models.get(idx))
        .unwrap_or(first);
    Some(chosen.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_priority_order() {
        assert_eq!(
            model_annotation("llama3.2:3b"),
            Some("Recommended - great for code")
        );
        assert_eq!(model_annotation("codellama:7b"), Some("Best for coding"));
        assert_eq!(model_annotation("qwen2.5:32b"), Some("Powerful but slow"));
        assert_eq!(model_annotation("qwen2.5-coder:7b"), Some("Good balance"));
        assert_eq!(model_annotation("qwen2.5:14b"), Some("Smart choice"));
        assert_eq!(model_annotation("mistral:latest"), Some("Fast and efficient"));
        assert_eq!(model_annotation("llama2:latest"), Some("Reliable classic"));
    }

    #[test]
    fn test_annotation_size_fallbacks() {
        assert_eq!(model_annotation("phi3:3b"), Some("Fast and light"));
        assert_eq!(model_annotation("gemma:7b"), Some("Balanced"));
        assert_eq!(model_annotation("vicuna:13b"), Some("Slow but accurate"));
        assert_eq!(model_annotation("deepseek:32b"), Some("Slow but accurate"));
        assert_eq!(model_annotation("phi"), None);
    }

    #[test]
    fn test_annotation_is_case_insensitive() {
        assert_eq!(model_annotation("Mistral-Nemo"), Some("Fast and efficient"));
    }

    #[test]
    fn test_describe_model() {
        assert_eq!(describe_model("llama2"), "llama2 (Reliable classic)");
        assert_eq!(describe_model("phi"), "phi");
    }

    #[test]
    fn test_resolve_model_selection() {
        let models = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(resolve_model_selection("2", &models), Some("b"));
        assert_eq!(resolve_model_selection(" 3 \n", &models), Some("c"));
        assert_eq!(resolve_model_selection("", &models), Some("a"));
        assert_eq!(resolve_model_selection("0", &models), Some("a"));
        assert_eq!(resolve_model_selection("9", &models), Some("a"));
        assert_eq!(resolve_model_selection("two", &models), Some("a"));
        assert_eq!(resolve_model_selection("1", &[]), None);
    }
}
